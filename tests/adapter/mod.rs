//! Adapter tests
//!
//! Conversion of host declarations into neutral elements:
//! - Termination on cyclic symbol graphs
//! - Truncation points (enclosing stubs, nested types, array values)
//! - Type-kind classification and modifier mapping

pub mod tests_classification;
pub mod tests_termination;
