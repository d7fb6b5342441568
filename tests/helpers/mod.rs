//! Shared fixtures and assertions for integration tests.

pub mod element_assertions;
pub mod table_fixtures;
