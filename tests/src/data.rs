use unicode_lexclass::Classifier;
use unicode_lexclass_prepare::{compile, RunTable};
use unicode_lexclass_source::{parse_unicode_data, CategoryEntry};

/// выдержка из UnicodeData.txt: пропуски, диапазоны, все пять классов
pub const EXCERPT: &str = include_str!("./../../test_data/ucd/UnicodeData.excerpt.txt");

lazy_static! {
    /// кодпоинты выдержки и их категории
    pub static ref ENTRIES: Vec<CategoryEntry<'static>> = parse_unicode_data(EXCERPT).unwrap();
    /// таблица, собранная из выдержки
    pub static ref TABLE: RunTable = compile(ENTRIES.iter().map(|e| (e.code, e.category))).unwrap();
}

/// классификатор поверх собранной таблицы
pub fn classifier() -> Classifier<'static>
{
    TABLE.classifier().unwrap()
}
