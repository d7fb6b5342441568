//! Resolver facade tests

pub mod tests_annotated_symbols;
