use rstest::rstest;
use unicode_lexclass::Classification;
use unicode_lexclass::Classification::*;

use crate::data::{classifier, ENTRIES, TABLE};

/// кодпоинты, отсутствующие в данных, получают класс отрезка, в который попадают
#[rstest]
#[case(0x0005, Other)]
#[case(0x0015, Other)]
#[case(0x0035, IdentifierPart)]
#[case(0x0050, IdentifierStart)]
#[case(0x0063, IdentifierStart)]
#[case(0x00AB, IdentifierStart)]
#[case(0x0302, IdentifierPart)]
#[case(0x0410, IdentifierPart)]
#[case(0x2002, Whitespace)]
#[case(0x2100, Other)]
#[case(0x4E00, IdentifierStart)]
#[case(0xD800, IdentifierStart)]
#[case(0xE000, IdentifierStart)]
#[case(0xFF21, FormatControl)]
fn gap_inherits_enclosing_run(#[case] code: u32, #[case] expected: Classification)
{
    assert_eq!(classifier().lookup(code), expected, "U+{:04X}", code);
}

/// поиск определён для каждого кодпоинта от начала таблицы до последнего кодпоинта данных
#[test]
fn whole_range_covered()
{
    let classifier = classifier();
    let last = ENTRIES.last().unwrap().code;

    let mut previous = classifier.get(0).unwrap();
    let mut changes = 0;

    for code in 1 ..= last {
        let class = classifier.get(code).unwrap();

        if class != previous {
            changes += 1;
        }

        previous = class;
    }

    // смена класса возможна только на границе отрезка
    assert!(changes < TABLE.len());
}

/// за пределами таблицы - Other
#[test]
fn beyond_sentinel()
{
    let classifier = classifier();

    assert_eq!(classifier.get(0xE0101), None);
    assert_eq!(classifier.lookup(0xE0101), Other);
    assert_eq!(classifier.lookup(0x10FFFF), Other);
    assert_eq!(classifier.lookup(0xE0100), IdentifierPart);
}

/// поиск совпадает с линейным проходом по отрезкам
#[test]
fn matches_linear_scan()
{
    let classifier = classifier();
    let runs: Vec<_> = TABLE.runs().collect();

    for code in (0 ..= 0x3000).chain([0x3400, 0x4DBF, 0x4DC0, 0xFEFE, 0xFEFF, 0xFF00]) {
        let expected = runs
            .iter()
            .rev()
            .find(|run| run.start <= code)
            .map(|run| run.class)
            .unwrap();

        assert_eq!(classifier.lookup(code), expected, "U+{:04X}", code);
    }
}

/// таблица используется из нескольких потоков без синхронизации
#[test]
fn concurrent_lookups()
{
    let classifier = classifier();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0 .. 4u32)
            .map(|part| {
                scope.spawn(move || {
                    (part * 0x1000 .. (part + 1) * 0x1000)
                        .map(|code| classifier.lookup(code))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for (part, handle) in handles.into_iter().enumerate() {
            let classes = handle.join().unwrap();
            let start = part as u32 * 0x1000;

            for (offset, class) in classes.into_iter().enumerate() {
                assert_eq!(class, classifier.lookup(start + offset as u32));
            }
        }
    });
}
