use std::path::Path;

use crate::SourceError;

/// кодпоинт и его основная категория (General Category) в том виде, как она записана в UCD
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CategoryEntry<'a>
{
    /// код символа
    pub code: u32,
    /// категория символа - вторая колонка UnicodeData.txt
    pub category: &'a str,
}

impl<'a> From<CategoryEntry<'a>> for (u32, &'a str)
{
    #[inline]
    fn from(entry: CategoryEntry<'a>) -> Self
    {
        (entry.code, entry.category)
    }
}

/// прочитать UnicodeData.txt
pub fn load_unicode_data(path: impl AsRef<Path>) -> Result<String, SourceError>
{
    let path = path.as_ref();

    std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// разбор UnicodeData.txt из UCD: кодпоинты и их категории в порядке файла
///
/// диапазоны (<..., First> / <..., Last>) разворачиваются в отдельные кодпоинты,
/// кроме Private Use и суррогатов - они остаются пропусками
pub fn parse_unicode_data(data: &str) -> Result<Vec<CategoryEntry<'_>>, SourceError>
{
    let mut entries = vec![];

    // начало диапазона: номер строки и запись
    let mut range_start: Option<(usize, CategoryEntry<'_>)> = None;

    for (index, line) in data.lines().enumerate() {
        let line_number = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        let mut props = line.split(';');

        let code = field(props.next(), line_number, "code")?;
        let name = field(props.next(), line_number, "name")?;
        let category = field(props.next(), line_number, "general category")?;

        let code = u32::from_str_radix(code.trim(), 16).map_err(|_| SourceError::InvalidCode {
            line: line_number,
            value: code.to_owned(),
        })?;

        let entry = CategoryEntry { code, category };

        // начало диапазона должно сразу же закрываться
        if let Some((start_line, start)) = range_start.take() {
            if !name.ends_with("Last>") {
                return Err(SourceError::UnpairedRange { line: start_line });
            }

            if start.code > code {
                return Err(SourceError::UnpairedRange { line: line_number });
            }

            // что мы можем встретить:
            //
            // U+3400 ..= U+4DBF CJK Ideograph Extension A
            // U+4E00 ..= U+9FFF CJK Ideograph
            // U+AC00 ..= U+D7A3 Hangul Syllable
            // U+D800 ..= U+DFFF суррогаты
            // U+E000 ..= U+F8FF Private Use
            // U+17000 ..= U+187F7 Tangut Ideograph
            // U+20000 ..= U+323AF CJK Ideograph Extension B ..= H
            // U+F0000 ..= U+10FFFD Plane 15-16 Private Use

            if name.contains("Private Use") || name.contains("Surrogate") {
                tracing::debug!(
                    first = start.code,
                    last = code,
                    name,
                    "диапазон пропущен"
                );
                continue;
            }

            entries.extend((start.code + 1 ..= code).map(|code| CategoryEntry {
                code,
                category: start.category,
            }));

            continue;
        }

        if name.starts_with('<') && name.ends_with("First>") {
            // первый кодпоинт диапазона записываем только когда встретим его конец
            match name.contains("Private Use") || name.contains("Surrogate") {
                true => (),
                false => entries.push(entry),
            }

            range_start = Some((line_number, entry));
            continue;
        }

        if name.starts_with('<') && name.ends_with("Last>") {
            return Err(SourceError::UnpairedRange { line: line_number });
        }

        entries.push(entry);
    }

    if let Some((line, _)) = range_start {
        return Err(SourceError::UnpairedRange { line });
    }

    Ok(entries)
}

/// очередное поле строки
#[inline]
fn field<'a>(value: Option<&'a str>, line: usize, name: &'static str) -> Result<&'a str, SourceError>
{
    value.ok_or(SourceError::MissingField { line, field: name })
}
