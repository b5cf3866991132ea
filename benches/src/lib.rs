//! бенчмарки поиска по таблице классификации, см. benches/lookup.rs
