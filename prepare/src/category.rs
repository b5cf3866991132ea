use unicode_lexclass::Classification;

/// лексическая классификация основной категории символа (General Category)
///
/// Cf - форматирование, Zs - пробел, буквы и Nl начинают идентификатор,
/// Mn, Mc, Nd, Pc - продолжают его. всё остальное, в том числе неизвестные категории, - Other
#[inline]
pub fn classify_raw(category: &str) -> Classification
{
    match category {
        "Cf" => Classification::FormatControl,
        "Zs" => Classification::Whitespace,
        "Lu" | "Ll" | "Lt" | "Lm" | "Lo" | "Nl" => Classification::IdentifierStart,
        "Mn" | "Mc" | "Nd" | "Pc" => Classification::IdentifierPart,
        _ => Classification::Other,
    }
}
