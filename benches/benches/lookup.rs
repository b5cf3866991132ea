use criterion::{criterion_group, criterion_main, Criterion};
use unicode_lexclass::{Classification, Classifier};

mod group;

group!(
    lookup,
    test_lookup,
    "lookup",
    "ascii" => 0 .. 0x80u32,
    "bmp" => 0 .. 0x10000u32,
    "all" => (0 ..= 0x10FFFFu32).step_by(17)
);

criterion_group!(benches, lookup);
criterion_main!(benches);
