use unicode_lexclass::{Classification, ClassificationData, Classifier, Run, TableError};

use crate::category::classify_raw;
use crate::CompileError;

/// подготовленная таблица отрезков
///
/// последняя запись - замыкающая: последний кодпоинт входных данных и класс последнего отрезка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTable
{
    pub starts: Vec<u32>,
    pub classes: Vec<Classification>,
}

impl RunTable
{
    /// количество записей, включая замыкающую
    pub fn len(&self) -> usize
    {
        self.starts.len()
    }

    /// таблица, полученная из compile, всегда содержит хотя бы две записи
    pub fn is_empty(&self) -> bool
    {
        self.starts.is_empty()
    }

    /// записи по возрастанию, замыкающая - последней
    pub fn runs(&self) -> impl Iterator<Item = Run> + '_
    {
        self.starts
            .iter()
            .zip(self.classes.iter())
            .map(|(&start, &class)| Run { start, class })
    }

    /// замыкающая запись
    pub fn sentinel(&self) -> Option<Run>
    {
        self.runs().last()
    }

    /// данные в том виде, в котором они записываются в сгенерированный файл
    pub fn as_data(&self) -> ClassificationData<'_>
    {
        ClassificationData {
            starts: &self.starts,
            classes: &self.classes,
        }
    }

    /// классификатор поверх подготовленной таблицы
    pub fn classifier(&self) -> Result<Classifier<'_>, TableError>
    {
        Classifier::from_baked(self.as_data())
    }

    fn push(&mut self, start: u32, class: Classification)
    {
        self.starts.push(start);
        self.classes.push(class);
    }
}

/// собираем таблицу отрезков из отсортированных пар (кодпоинт, категория)
///
/// новый отрезок начинается, если меняется класс или если между кодпоинтом и предыдущим
/// есть пропуск. поэтому соседние отрезки могут иметь одинаковый класс, а пропущенные
/// кодпоинты получают класс отрезка, в который попадают
pub fn compile<I, S>(entries: I) -> Result<RunTable, CompileError>
where
    I: IntoIterator<Item = (u32, S)>,
    S: AsRef<str>,
{
    let mut table = RunTable {
        starts: vec![],
        classes: vec![],
    };

    // открытый отрезок: начало и класс
    let mut current: Option<(u32, Classification)> = None;
    let mut previous: Option<u32> = None;

    let mut count = 0;
    let mut gaps = 0;

    for (index, (code, category)) in entries.into_iter().enumerate() {
        let class = classify_raw(category.as_ref());

        let contiguous = match previous {
            Some(previous) if code == previous => {
                return Err(CompileError::Duplicate { code, index });
            }
            Some(previous) if code < previous => {
                return Err(CompileError::NotAscending {
                    previous,
                    code,
                    index,
                });
            }
            Some(previous) => code - previous == 1,
            None => false,
        };

        match current {
            Some((_, current_class)) if contiguous && current_class == class => (),
            Some((start, current_class)) => {
                if current_class == class {
                    gaps += 1;
                }

                table.push(start, current_class);
                current = Some((code, class));
            }
            None => current = Some((code, class)),
        }

        previous = Some(code);
        count += 1;
    }

    let (Some((start, class)), Some(last)) = (current, previous) else {
        return Err(CompileError::Empty);
    };

    table.push(start, class);
    table.push(last, class);

    tracing::debug!(
        entries = count,
        runs = table.len() - 1,
        gaps,
        "таблица отрезков собрана"
    );

    Ok(table)
}
