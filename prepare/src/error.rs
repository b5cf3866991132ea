use thiserror::Error;

/// нарушение требований к входным данным компилятора отрезков
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError
{
    /// не передано ни одного кодпоинта
    #[error("нет входных данных: для построения таблицы нужен хотя бы один кодпоинт")]
    Empty,

    /// кодпоинт повторяется
    #[error("запись #{index}: кодпоинт U+{code:04X} встречается повторно")]
    Duplicate { code: u32, index: usize },

    /// кодпоинты идут не по возрастанию
    #[error("запись #{index}: кодпоинт U+{code:04X} меньше предыдущего U+{previous:04X}")]
    NotAscending { previous: u32, code: u32, index: usize },
}
