//! Source emission tests

pub mod tests_generation;
