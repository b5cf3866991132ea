use crate::{Classification, Classifier};

/// zero width non-joiner
const ZWNJ: u32 = 0x200C;
/// zero width joiner
const ZWJ: u32 = 0x200D;
/// byte order mark
const BOM: u32 = 0xFEFF;
/// line separator, paragraph separator
const LS: u32 = 0x2028;
const PS: u32 = 0x2029;
/// до мягкого переноса (U+00AD) управляющих символов форматирования нет
const FIRST_FORMAT_CONTROL: u32 = 0xAD;

/// редакция ECMAScript, от которой зависят правила токенизатора
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum EcmaVersion
{
    Es1,
    Es3,
    Es5,
}

impl<'a> Classifier<'a>
{
    /// перевод строки
    #[inline]
    pub fn is_line_terminator(&self, code: u32, version: EcmaVersion) -> bool
    {
        match code {
            0x0A | 0x0D => true,
            LS | PS => version >= EcmaVersion::Es3,
            _ => false,
        }
    }

    /// пробельный символ: ASCII-пробелы есть всегда, BOM - начиная с ES5,
    /// остальные пробелы Unicode - начиная с ES3
    #[inline]
    pub fn is_whitespace(&self, code: u32, version: EcmaVersion) -> bool
    {
        is_ascii_whitespace(code)
            || (version >= EcmaVersion::Es5 && code == BOM)
            || (version >= EcmaVersion::Es3 && self.lookup(code) == Classification::Whitespace)
    }

    /// может ли кодпоинт начинать идентификатор
    #[inline]
    pub fn is_identifier_start(&self, code: u32, version: EcmaVersion) -> bool
    {
        if is_ascii_identifier_start(code) {
            return true;
        }

        version >= EcmaVersion::Es3 && self.lookup(code) == Classification::IdentifierStart
    }

    /// может ли кодпоинт продолжать идентификатор
    #[inline]
    pub fn is_identifier_part(&self, code: u32, version: EcmaVersion) -> bool
    {
        if is_ascii_identifier_start(code) || is_ascii_digit(code) {
            return true;
        }

        if version < EcmaVersion::Es3 {
            return false;
        }

        match self.lookup(code) {
            Classification::IdentifierStart | Classification::IdentifierPart => true,
            // в ES5 ZWNJ и ZWJ допустимы внутри идентификаторов
            Classification::FormatControl => {
                version >= EcmaVersion::Es5 && (code == ZWNJ || code == ZWJ)
            }
            _ => false,
        }
    }

    /// управляющий символ форматирования
    #[inline]
    pub fn is_format_control(&self, code: u32) -> bool
    {
        code >= FIRST_FORMAT_CONTROL && self.lookup(code) == Classification::FormatControl
    }
}

#[inline]
fn is_ascii_whitespace(code: u32) -> bool
{
    matches!(code, 0x09 | 0x0B | 0x0C | 0x20)
}

#[inline]
fn is_ascii_identifier_start(code: u32) -> bool
{
    matches!(code, 0x24 | 0x5F | 0x41 ..= 0x5A | 0x61 ..= 0x7A)
}

#[inline]
fn is_ascii_digit(code: u32) -> bool
{
    matches!(code, 0x30 ..= 0x39)
}
