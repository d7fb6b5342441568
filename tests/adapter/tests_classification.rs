#![allow(clippy::unwrap_used)]

//! Kind and modifier classification through the public adapter API.

use kaleidoscope::adapter::{convert_modifier, convert_modifiers, mapped_modifier};
use kaleidoscope::base::constants;
use kaleidoscope::host::{ClassKind, Declaration, HostModifier, Parent, SymbolTable, TypeRef};
use kaleidoscope::model::{ElementKind, Modifier, TypeElementKind};
use kaleidoscope::{Adapter, Depth, Element, TypeKind};
use rstest::rstest;

fn table_with(kind: ClassKind) -> (SymbolTable, kaleidoscope::DeclId) {
    let mut table = SymbolTable::new();
    let file = table.add_file("src/k/Subject.kt", "k");
    let id = table.declare(Parent::File(file), Declaration::class("Subject", kind));
    (table, id)
}

#[rstest]
#[case(ClassKind::Class, TypeElementKind::Class, ElementKind::Class)]
#[case(ClassKind::Interface, TypeElementKind::Interface, ElementKind::Interface)]
#[case(ClassKind::EnumClass, TypeElementKind::Enum, ElementKind::Enum)]
#[case(ClassKind::Object, TypeElementKind::Object, ElementKind::Class)]
#[case(ClassKind::AnnotationClass, TypeElementKind::AnnotationType, ElementKind::AnnotationType)]
fn test_class_kinds(
    #[case] host: ClassKind,
    #[case] expected: TypeElementKind,
    #[case] element_kind: ElementKind,
) {
    let (table, id) = table_with(host);
    let Element::Type(ty) = Adapter::new(&table).element(id) else {
        panic!("Expected a type element for {:?}", host);
    };
    assert_eq!(ty.type_kind, expected);
    assert_eq!(ty.info.kind, element_kind);
}

#[rstest]
#[case(constants::BOOLEAN, TypeKind::Boolean)]
#[case(constants::INT, TypeKind::Int)]
#[case(constants::DOUBLE, TypeKind::Double)]
#[case(constants::UNIT, TypeKind::Unit)]
#[case(constants::NOTHING, TypeKind::None)]
#[case(constants::STRING, TypeKind::Declared)]
#[case("k.Subject", TypeKind::Declared)]
#[case("k.Missing", TypeKind::Other)]
fn test_property_type_kinds(#[case] type_name: &str, #[case] expected: TypeKind) {
    let (mut table, subject) = table_with(ClassKind::Class);
    let property = table.declare(
        Parent::Decl(subject),
        Declaration::property("value", TypeRef::named(type_name)),
    );

    let Element::Property(property) = Adapter::new(&table).element_at(property, Depth::Bounded) else {
        panic!("Expected a property element");
    };
    assert_eq!(property.ty.kind, expected);
    assert_eq!(property.info.valid, !property.ty.is_unknown());
    assert_eq!(property.ty.is_unknown(), type_name == "k.Missing");
}

#[rstest]
#[case(HostModifier::Public, Modifier::Public)]
#[case(HostModifier::Internal, Modifier::Internal)]
#[case(HostModifier::Lateinit, Modifier::Lateinit)]
#[case(HostModifier::Vararg, Modifier::Vararg)]
#[case(HostModifier::Out, Modifier::Out)]
#[case(HostModifier::Companion, Modifier::Public)]
#[case(HostModifier::Expect, Modifier::Public)]
#[case(HostModifier::JavaTransient, Modifier::Public)]
fn test_modifier_conversion(#[case] host: HostModifier, #[case] expected: Modifier) {
    assert_eq!(convert_modifier(host), expected);
}

#[test]
fn test_every_host_modifier_converts() {
    let converted = convert_modifiers(&HostModifier::ALL);
    let mapped = HostModifier::ALL
        .iter()
        .filter(|m| mapped_modifier(**m).is_some())
        .count();

    // Each mapped modifier is distinct; the rest collapse onto Public.
    assert_eq!(converted.len(), mapped);
    assert!(converted.contains(&Modifier::Public));
}

#[test]
fn test_declared_modifiers_reach_the_element() {
    let mut table = SymbolTable::new();
    let file = table.add_file("src/k/Model.kt", "k");
    let id = table.declare(
        Parent::File(file),
        Declaration::class("Model", ClassKind::Class)
            .with_modifiers([HostModifier::Data, HostModifier::Internal, HostModifier::Expect]),
    );

    let element = Adapter::new(&table).element(id);
    let modifiers: Vec<_> = element.modifiers().iter().copied().collect();
    assert_eq!(modifiers, vec![Modifier::Public, Modifier::Internal, Modifier::Data]);
    assert!(element.has_modifier(Modifier::Data));
}
