#![allow(clippy::unwrap_used)]

//! Annotated-symbol queries against a host table.

use kaleidoscope::base::constants;
use kaleidoscope::model::ElementKind;
use kaleidoscope::{DiagnosticCollector, Element, HostResolver, ProcessorOptions, Resolver, Severity};

use crate::helpers::element_assertions::assert_single_hop;
use crate::helpers::table_fixtures::dict;

const DICT: &str = "site.addzero.Dict";

#[test]
fn test_dict_field_is_found() {
    let table = dict();
    let options = ProcessorOptions::new();
    let messager = DiagnosticCollector::new();
    let resolver = HostResolver::new(&table, &options, &messager);

    let found: Vec<Element> = resolver.symbols_with_annotation(DICT).collect();
    assert_eq!(found.len(), 1);

    let Element::Property(name) = &found[0] else {
        panic!("Expected a property, got {:?}", found[0].kind());
    };
    assert_eq!(name.info.qualified_name.as_deref(), Some("app.Status.name"));
    assert_eq!(name.ty.qualified_name.as_deref(), Some(constants::STRING));
    assert!(name.info.valid);

    let dict = found[0].annotation(DICT).unwrap();
    assert_eq!(dict.simple_name, "Dict");
    assert_eq!(dict.string_argument("nameColumn"), Some("name"));
    assert!(dict.annotation_type.is_unknown());

    assert_single_hop(&found[0], "app.Status");
    assert_eq!(found[0].enclosing_element().unwrap().kind(), ElementKind::Enum);
}

#[test]
fn test_dict_field_through_its_class() {
    let table = dict();
    let options = ProcessorOptions::new();
    let messager = DiagnosticCollector::new();
    let resolver = HostResolver::new(&table, &options, &messager);

    let status = resolver.class_by_name("app.Status").unwrap();
    assert_eq!(status.info.kind, ElementKind::Enum);

    let annotated: Vec<_> = status
        .properties()
        .filter(|p| p.info.annotations.iter().any(|a| a.matches(DICT)))
        .map(|p| p.info.simple_name.as_str())
        .collect();
    assert_eq!(annotated, vec!["name"]);
    assert!(status.find_property("code").unwrap().info.annotations.is_empty());
}

#[test]
fn test_unmatched_annotation_is_empty() {
    let table = dict();
    let options = ProcessorOptions::new();
    let messager = DiagnosticCollector::new();
    let resolver = HostResolver::new(&table, &options, &messager);

    assert_eq!(resolver.symbols_with_annotation("site.addzero.Other").count(), 0);
    assert!(resolver.symbols_with_annotation_simple_name("Other").is_empty());
    assert_eq!(resolver.symbols_with_annotation_simple_name("Dict").len(), 1);
}

#[test]
fn test_report_against_found_symbol() {
    let table = dict();
    let options = ProcessorOptions::new();
    let messager = DiagnosticCollector::new();
    let resolver = HostResolver::new(&table, &options, &messager);

    for element in resolver.symbols_with_annotation(DICT) {
        resolver.warn("dictionary column is not indexed", Some(&element));
        let file = resolver.containing_file(&element).unwrap();
        assert_eq!(file.file_path, "src/main/kotlin/app/Status.kt");
    }

    assert_eq!(messager.warning_count(), 1);
    let diagnostic = &messager.diagnostics()[0];
    assert_eq!(diagnostic.severity, Severity::Warning);
    let location = diagnostic.location.as_ref().unwrap();
    assert_eq!(location.symbol, "app.Status.name");
    assert_eq!(location.file.as_deref(), Some("src/main/kotlin/app/Status.kt"));
}
