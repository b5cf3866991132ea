use crate::Classification;

/// структура хранимых данных классификации
///
/// генератор записывает её в виде выражения Rust, которое подключается через `include!`.
/// последняя запись - замыкающая: её начало - последний кодпоинт, попавший в таблицу,
/// класс совпадает с классом последнего отрезка
pub struct ClassificationData<'a>
{
    /// начала отрезков, по возрастанию
    pub starts: &'a [u32],
    /// класс каждого отрезка
    pub classes: &'a [Classification],
}

/// отрезок кодпоинтов одного класса: от start и до начала следующего отрезка
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Run
{
    pub start: u32,
    pub class: Classification,
}

impl core::fmt::Display for Run
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "U+{:04X} {}", self.start, self.class.variant_name())
    }
}
