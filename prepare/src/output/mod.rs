use std::io::Write;

use crate::tables::RunTable;

pub use self::format::format_class_vec;
pub use self::format::format_num_vec;
pub use self::stats::TableStats;

mod format;
mod stats;

/// длина строки в файле с подготовленными данными
const FORMAT_STRING_LENGTH: usize = 120;

/// сведения для заголовка сгенерированного файла
#[derive(Debug, Default, Clone)]
pub struct Header
{
    /// версия UCD, из которой собрана таблица
    pub ucd_version: Option<String>,
}

/// пишем таблицу классификации в виде выражения `ClassificationData { .. }`
///
/// при подключении через `include!` в области видимости должны быть
/// `ClassificationData` и `Classification`
pub fn write<W: Write>(table: &RunTable, header: &Header, writer: &mut W) -> std::io::Result<()>
{
    writeln!(writer, "// автоматически сгенерированный файл - не редактировать вручную")?;

    if let Some(version) = &header.ucd_version {
        writeln!(writer, "// источник: Unicode Character Database, версия {}", version)?;
    }

    for class in unicode_lexclass::Classification::ALL {
        writeln!(
            writer,
            "// {:<16} - {}",
            class.variant_name(),
            class.description()
        )?;
    }

    let output = format!(
        "ClassificationData {{\n  \
            starts: &[{}  ],\n  \
            classes: &[{}  ],\n\
        }}\n",
        format_num_vec(table.starts.as_slice(), FORMAT_STRING_LENGTH),
        format_class_vec(table.classes.as_slice(), FORMAT_STRING_LENGTH),
    );

    write!(writer, "{}", output)?;

    stats::log(&TableStats::collect(table));

    Ok(())
}
