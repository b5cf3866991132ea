use crate::TableError;

/// лексическая классификация кодпоинта
/// в таблице хранится как u8, значения зафиксированы
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Classification
{
    /// управляющий символ форматирования (Cf)
    FormatControl = 0,
    /// пробельный символ (Zs)
    Whitespace = 1,
    /// может начинать идентификатор (Lu, Ll, Lt, Lm, Lo, Nl)
    IdentifierStart = 2,
    /// может продолжать идентификатор (Mn, Mc, Nd, Pc)
    IdentifierPart = 3,
    /// всё остальное
    Other = 4,
}

impl Classification
{
    /// все варианты в порядке их значений
    pub const ALL: [Self; 5] = [
        Self::FormatControl,
        Self::Whitespace,
        Self::IdentifierStart,
        Self::IdentifierPart,
        Self::Other,
    ];

    /// описание класса
    pub fn description(&self) -> &'static str
    {
        match self {
            Self::FormatControl => "Format-Control Character",
            Self::Whitespace => "White Space",
            Self::IdentifierStart => "Identifier Start",
            Self::IdentifierPart => "Identifier Part",
            Self::Other => "Other",
        }
    }

    /// название варианта, как оно записывается в сгенерированной таблице
    pub fn variant_name(&self) -> &'static str
    {
        match self {
            Self::FormatControl => "FormatControl",
            Self::Whitespace => "Whitespace",
            Self::IdentifierStart => "IdentifierStart",
            Self::IdentifierPart => "IdentifierPart",
            Self::Other => "Other",
        }
    }

    /// может ли кодпоинт этого класса входить в идентификатор
    #[inline]
    pub fn is_identifier(&self) -> bool
    {
        matches!(self, Self::IdentifierStart | Self::IdentifierPart)
    }
}

impl From<Classification> for u8
{
    #[inline]
    fn from(value: Classification) -> Self
    {
        value as u8
    }
}

impl TryFrom<u8> for Classification
{
    type Error = TableError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        Ok(match value {
            0 => Self::FormatControl,
            1 => Self::Whitespace,
            2 => Self::IdentifierStart,
            3 => Self::IdentifierPart,
            4 => Self::Other,
            _ => return Err(TableError::UnknownClassification(value)),
        })
    }
}

impl core::fmt::Display for Classification
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        f.write_str(self.description())
    }
}
