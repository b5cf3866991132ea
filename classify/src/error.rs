use thiserror::Error;

use crate::Classification;

/// ошибки проверки подготовленной таблицы
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError
{
    /// в таблице нет ни одного отрезка, или отсутствует замыкающая запись
    #[error("таблица классификации пуста: нужен хотя бы один отрезок и замыкающая запись")]
    Empty,

    /// количество начал отрезков не совпадает с количеством классов
    #[error("длины таблиц не совпадают: {starts} начал отрезков, {classes} классов")]
    LengthMismatch { starts: usize, classes: usize },

    /// начала отрезков должны строго возрастать
    #[error("начало отрезка #{index} (U+{start:04X}) не больше предыдущего (U+{previous:04X})")]
    NotAscending { index: usize, previous: u32, start: u32 },

    /// замыкающая запись не может стоять раньше последнего отрезка
    #[error("замыкающая запись U+{sentinel:04X} стоит раньше последнего отрезка U+{last:04X}")]
    SentinelBeforeLastRun { sentinel: u32, last: u32 },

    /// класс замыкающей записи должен совпадать с классом последнего отрезка
    #[error("класс замыкающей записи ({sentinel:?}) отличается от класса последнего отрезка ({last:?})")]
    SentinelClassMismatch
    {
        sentinel: Classification,
        last: Classification,
    },

    /// неизвестное значение классификации
    #[error("неизвестное значение классификации: {0}")]
    UnknownClassification(u8),
}
