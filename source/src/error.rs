use std::path::PathBuf;

use thiserror::Error;

/// ошибки чтения и разбора UnicodeData.txt
#[derive(Debug, Error)]
pub enum SourceError
{
    /// не удалось прочитать файл
    #[error("не удалось прочитать {}: {source}", path.display())]
    Io
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// в строке не хватает колонок
    #[error("строка {line}: отсутствует поле \"{field}\"")]
    MissingField { line: usize, field: &'static str },

    /// код символа не является шестнадцатеричным числом
    #[error("строка {line}: некорректный код символа \"{value}\"")]
    InvalidCode { line: usize, value: String },

    /// у диапазона нет пары (First / Last)
    #[error("строка {line}: незакрытый или непарный диапазон")]
    UnpairedRange { line: usize },
}
