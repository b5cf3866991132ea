use unicode_lexclass_prepare::{compile, RunTable};
use unicode_lexclass_source::parse_unicode_data;

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// выдержка из UCD, на которой собирается таблица для бенчмарков
const EXCERPT: &str = include_str!("./../../../test_data/ucd/UnicodeData.excerpt.txt");

#[macro_export]
macro_rules! group {
    ($fn: ident, $test: ident, $group: expr, $($name: expr => $range: expr),+) => {
        #[inline(never)]
        fn $test(classifier: &Classifier, codes: &[u32]) -> usize
        {
            codes
                .iter()
                .filter(|&&code| classifier.lookup(code) != Classification::Other)
                .count()
        }

        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let table = group::table();
            let classifier = table.classifier().unwrap();

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            $(
                let codes: Vec<u32> = ($range).collect();

                group.bench_with_input(
                    criterion::BenchmarkId::new($name, codes.len()),
                    &(&classifier, codes.as_slice()),
                    |b, data| b.iter(|| $test(data.0, criterion::black_box(data.1))),
                );
            )+

            group.finish();
        }
    };
}

/// таблица, собранная из выдержки UCD
pub fn table() -> RunTable
{
    let entries = parse_unicode_data(EXCERPT).unwrap();

    compile(entries.into_iter().map(|e| (e.code, e.category))).unwrap()
}
