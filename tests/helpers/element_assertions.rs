//! Element assertion helpers for adapter and resolver tests.

use kaleidoscope::host::SymbolTable;
use kaleidoscope::model::{Element, TypeElement};
use kaleidoscope::{Adapter, Depth};

/// Convert a class at full depth, panicking if it is missing.
pub fn full_type_element(table: &SymbolTable, qname: &str) -> TypeElement {
    let id = table
        .class_by_name(qname)
        .unwrap_or_else(|| panic!("Expected class '{}' to exist", qname));
    Adapter::new(table)
        .type_element(id, Depth::Full)
        .unwrap_or_else(|| panic!("Expected '{}' to convert to a type element", qname))
}

/// Assert an enclosing reference is a stub that ends the parent chain.
pub fn assert_single_hop(element: &Element, expected_parent: &str) {
    let parent = element
        .enclosing_element()
        .unwrap_or_else(|| panic!("Expected '{}' to have an enclosing element", element.simple_name()));
    assert!(parent.is_stub(), "Expected enclosing element to be a stub");
    assert_eq!(parent.qualified_name(), Some(expected_parent));
    assert!(
        parent.enclosing_element().is_none(),
        "Expected the enclosing chain of '{}' to stop after one hop",
        element.simple_name()
    );
    assert!(parent.enclosed_elements().is_empty());
}

/// Count every element in a tree, enclosed elements first.
pub fn count_elements(element: &Element) -> usize {
    1 + element
        .enclosed_elements()
        .iter()
        .map(count_elements)
        .sum::<usize>()
}
