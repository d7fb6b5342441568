#![allow(clippy::unwrap_used)]

//! Conversion of cyclic host graphs.
//!
//! Every scenario here has a reference path that loops back to a class
//! already being converted; the conversion must still finish and keep the
//! parent chain one hop long.

use kaleidoscope::model::{AnnotationValue, ElementKind, TypeVariant};
use kaleidoscope::{Adapter, Depth, Element, TypeKind};

use crate::helpers::element_assertions::{assert_single_hop, count_elements, full_type_element};
use crate::helpers::table_fixtures::{
    enum_annotation_cycle, meta_annotated, nested_annotation_values, outer_inner, self_nested,
};

// ============================================================================
// SELF-REFERENTIAL NESTING
// ============================================================================

#[test]
fn test_self_nested_graph_terminates() {
    let table = self_nested();
    let tree = full_type_element(&table, "graph.Tree");

    let node = tree.nested_types().next().unwrap();
    assert_eq!(node.qualified_name(), Some("graph.Tree.Node"));
    assert_single_hop(&Element::from(node.clone()), "graph.Tree");

    // Node is a child of the requested class: members yes, nested types no.
    let names: Vec<_> = node.properties().map(|p| p.info.simple_name.as_str()).collect();
    assert_eq!(names, vec!["tree", "children"]);
    assert!(node.nested_types().next().is_none());

    // Node's members sit at the flat tier and reference classes without members.
    let back = node.find_property("tree").unwrap();
    let back_element = back.ty.type_element().unwrap();
    assert_eq!(back_element.qualified_name(), Some("graph.Tree"));
    assert!(back_element.info.enclosed_elements.is_empty());
}

#[test]
fn test_self_nested_node_as_root() {
    let table = self_nested();
    let node = full_type_element(&table, "graph.Tree.Node");

    assert_single_hop(&Element::from(node.clone()), "graph.Tree");

    let children = node.find_property("children").unwrap();
    assert_eq!(children.ty.kind, TypeKind::Array);
    let component = children.ty.array_component().unwrap();
    assert_eq!(component.qualified_name.as_deref(), Some("graph.Tree.Node"));

    let parent = node.find_methods("parent");
    assert_eq!(parent.len(), 1);
    let returned = &parent[0].return_type;
    assert!(returned.nullable);
    let TypeVariant::Declared { element, enclosing_type } = &returned.variant else {
        panic!("Expected a declared return type, got {:?}", returned.variant);
    };
    assert_eq!(element.qualified_name(), Some("graph.Tree.Node"));
    let enclosing = enclosing_type.as_ref().unwrap();
    assert_eq!(enclosing.qualified_name.as_deref(), Some("graph.Tree"));
    assert!(enclosing.enclosing_type().is_none());
}

#[test]
fn test_every_declaration_converts() {
    let table = self_nested();
    let adapter = Adapter::new(&table);

    for qualified in ["graph.Tree", "graph.Tree.Node", "graph.Tree.root", "graph.Tree.Node.parent"] {
        let id = table
            .lookup(qualified)
            .unwrap_or_else(|| panic!("Expected '{}' to be declared", qualified));
        for depth in [Depth::Full, Depth::Bounded, Depth::Flat] {
            let element = adapter.element_at(id, depth);
            assert_eq!(element.qualified_name(), Some(qualified));
            assert!(!element.is_stub(), "Expected a full element for '{}'", qualified);
        }
    }
}

#[test]
fn test_deeper_request_yields_more_elements() {
    let table = self_nested();
    let adapter = Adapter::new(&table);
    let id = table.class_by_name("graph.Tree").unwrap();

    let full = count_elements(&adapter.element_at(id, Depth::Full));
    let bounded = count_elements(&adapter.element_at(id, Depth::Bounded));
    let flat = count_elements(&adapter.element_at(id, Depth::Flat));

    assert!(full > bounded, "full={} bounded={}", full, bounded);
    assert!(bounded > flat, "bounded={} flat={}", bounded, flat);
    assert_eq!(flat, 1);
}

// ============================================================================
// INNER CLASSES
// ============================================================================

#[test]
fn test_inner_references_outer() {
    let table = outer_inner();
    let outer = full_type_element(&table, "com.example.Outer");

    let inner = outer.nested_types().next().unwrap();
    assert_eq!(inner.qualified_name(), Some("com.example.Outer.Inner"));
    assert!(inner.is_inner);
    assert_eq!(inner.info.kind, ElementKind::Class);

    let field = inner.fields().next().unwrap();
    assert_eq!(field.info.simple_name, "outer");
    let TypeVariant::Declared { element, .. } = &field.ty.variant else {
        panic!("Expected a declared field type, got {:?}", field.ty.variant);
    };
    assert_eq!(element.qualified_name(), Some("com.example.Outer"));
    assert_eq!(field.ty.qualified_name.as_deref(), Some("com.example.Outer"));

    let back = inner.find_property("outer").unwrap();
    assert_eq!(back.ty.qualified_name.as_deref(), Some("com.example.Outer"));
    let outer_again = back.ty.type_element().unwrap();
    assert!(outer_again.nested_types().next().is_none());
}

#[test]
fn test_conversion_is_repeatable() {
    let table = outer_inner();
    let first = full_type_element(&table, "com.example.Outer");
    let second = full_type_element(&table, "com.example.Outer");
    assert_eq!(first, second);

    let source = first.info.source_file.as_ref().unwrap();
    assert_eq!(source.file_name, "Outer.kt");
    assert_eq!(source.package_name, "com.example");
}

// ============================================================================
// ANNOTATION VALUES
// ============================================================================

#[test]
fn test_nested_arrays_at_full_depth() {
    let table = nested_annotation_values();
    let entity = full_type_element(&table, "db.Entity");
    let schema = &entity.info.annotations[0];

    let tables = schema.argument("tables").unwrap().as_array().unwrap();
    assert_eq!(tables.len(), 2);
    // Inner arrays are below the top tier.
    assert!(tables.iter().all(|t| t.as_array() == Some(&[][..])));

    let AnnotationValue::Annotation(primary) = schema.argument("primary").unwrap() else {
        panic!("Expected a nested annotation value");
    };
    assert_eq!(primary.qualified_name.as_deref(), Some("db.Key"));
    assert_eq!(
        primary.argument("columns").and_then(AnnotationValue::as_array),
        Some(&[][..])
    );
}

#[test]
fn test_nested_arrays_below_full_depth() {
    let table = nested_annotation_values();
    let adapter = Adapter::new(&table);
    let id = table.class_by_name("db.Entity").unwrap();

    let Element::Type(entity) = adapter.element_at(id, Depth::Bounded) else {
        panic!("Expected db.Entity to convert to a type element");
    };
    let schema = entity.info.annotations.first().unwrap();
    assert_eq!(schema.argument("tables").and_then(AnnotationValue::as_array), Some(&[][..]));

    let AnnotationValue::Annotation(primary) = schema.argument("primary").unwrap() else {
        panic!("Expected a nested annotation value");
    };
    assert!(primary.has_argument("columns"));
}

// ============================================================================
// META-ANNOTATIONS
// ============================================================================

#[test]
fn test_self_annotated_annotation_terminates() {
    let table = meta_annotated();
    let user = full_type_element(&table, "model.User");

    let target = user.info.annotations.first().unwrap();
    assert_eq!(target.qualified_name.as_deref(), Some("meta.Target"));
    let header = target.annotation_type.type_element().unwrap();
    assert_eq!(header.info.kind, ElementKind::AnnotationType);
    assert_eq!(header.info.package_name.as_deref(), Some("meta"));
    assert!(header.info.annotations.is_empty());
}

#[test]
fn test_meta_annotation_cycle_at_every_depth() {
    let table = meta_annotated();
    let adapter = Adapter::new(&table);

    for qualified in ["meta.Target", "meta.Retention"] {
        let id = table.class_by_name(qualified).unwrap();
        for depth in [Depth::Full, Depth::Bounded, Depth::Flat] {
            let element = adapter.element_at(id, depth);
            assert_eq!(element.kind(), ElementKind::AnnotationType);
            assert!(element.has_annotation("meta.Target"));
        }
    }

    let target = full_type_element(&table, "meta.Target");
    let names: Vec<_> = target
        .info
        .annotations
        .iter()
        .map(|a| a.simple_name.as_str())
        .collect();
    assert_eq!(names, vec!["Target", "Retention"]);
}

#[test]
fn test_enum_annotated_with_own_entry_terminates() {
    let table = enum_annotation_cycle();
    let level = full_type_element(&table, "app.Level");

    let default = level.info.annotations.first().unwrap();
    let value = default.argument("level").unwrap();
    assert_eq!(value.enum_constant_name(), Some("HIGH"));
    let AnnotationValue::Enum { enum_type, .. } = value else {
        panic!("Expected an enum value, got {:?}", value);
    };
    assert_eq!(enum_type.qualified_name.as_deref(), Some("app.Level"));
    assert!(enum_type.type_element().unwrap().info.annotations.is_empty());

    let constants: Vec<_> = level.enum_constants().map(|c| c.simple_name()).collect();
    assert_eq!(constants, vec!["HIGH", "LOW"]);
}

#[test]
fn test_annotation_member_typed_by_annotated_enum() {
    let table = enum_annotation_cycle();
    let default = full_type_element(&table, "app.Default");

    let level = default.find_property("level").unwrap();
    let element = level.ty.type_element().unwrap();
    assert_eq!(element.qualified_name(), Some("app.Level"));
    assert!(element.info.annotations[0].matches("Default"));
}
