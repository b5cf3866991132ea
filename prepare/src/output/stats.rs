use std::collections::HashMap;
use std::mem::size_of;

use unicode_lexclass::Classification;

use crate::tables::RunTable;

/// информация о подготовленной таблице
#[derive(Debug, PartialEq, Eq)]
pub struct TableStats
{
    /// количество отрезков без замыкающей записи
    pub runs: usize,
    /// размер таблицы в байтах
    pub size: usize,
    /// отрезки, у которых класс совпадает с классом предыдущего (разделены пропуском)
    pub repeated: usize,
    /// количество отрезков каждого класса
    pub by_class: HashMap<Classification, usize>,
}

impl TableStats
{
    pub fn collect(table: &RunTable) -> Self
    {
        let runs = &table.classes[.. table.classes.len().saturating_sub(1)];

        let mut by_class: HashMap<Classification, usize> = HashMap::new();

        for class in runs {
            *by_class.entry(*class).or_default() += 1;
        }

        Self {
            runs: runs.len(),
            size: table.starts.len() * size_of::<u32>()
                + table.classes.len() * size_of::<Classification>(),
            repeated: runs.windows(2).filter(|pair| pair[0] == pair[1]).count(),
            by_class,
        }
    }
}

/// выводим статистику в лог
pub fn log(stats: &TableStats)
{
    tracing::info!(
        runs = stats.runs,
        size = stats.size,
        repeated = stats.repeated,
        "таблица классификации"
    );

    let mut keys: Vec<&Classification> = stats.by_class.keys().collect();
    keys.sort_by(|a, b| stats.by_class[*b].cmp(&stats.by_class[*a]));

    for key in keys {
        tracing::info!(class = key.variant_name(), runs = stats.by_class[key], "отрезки");
    }
}
