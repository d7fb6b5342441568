use super::*;
use crate::base::{DeclId, constants};

fn sample() -> (SymbolTable, DeclId, DeclId, DeclId) {
    let mut table = SymbolTable::new();
    let file = table.add_file("src/main/kotlin/com/example/Outer.kt", "com.example");
    let outer = table.declare(
        Parent::File(file),
        Declaration::class("Outer", ClassKind::Class),
    );
    let inner = table.declare(
        Parent::Decl(outer),
        Declaration::class("Inner", ClassKind::Class),
    );
    let field = table.declare(
        Parent::Decl(inner),
        Declaration::property("outer", TypeRef::to(outer)),
    );
    (table, outer, inner, field)
}

#[test]
fn test_builtins_registered() {
    let table = SymbolTable::new();
    for name in constants::BUILTIN_CLASSES {
        let id = table.class_by_name(name);
        assert!(id.is_some(), "builtin {name} should be registered");
    }
    let unit = table.get(table.lookup(constants::UNIT).unwrap());
    assert_eq!(unit.as_class().unwrap().class_kind, ClassKind::Object);
    let array = table.get(table.lookup(constants::ARRAY).unwrap());
    assert_eq!(array.as_class().unwrap().type_parameters.len(), 1);
}

#[test]
fn test_declare_derives_location() {
    let (table, outer, inner, field) = sample();

    let outer_decl = table.get(outer);
    assert_eq!(outer_decl.qualified_name.as_deref(), Some("com.example.Outer"));
    assert_eq!(outer_decl.package_name, "com.example");

    let inner_decl = table.get(inner);
    assert_eq!(
        inner_decl.qualified_name.as_deref(),
        Some("com.example.Outer.Inner")
    );
    assert_eq!(inner_decl.parent, Some(outer));
    assert_eq!(outer_decl.as_class().unwrap().members, vec![inner]);

    let file = table.file_of(field).unwrap();
    assert_eq!(file.file_name, "Outer.kt");
    assert_eq!(file.declarations, vec![outer]);
}

#[test]
fn test_all_declarations_flattens_members() {
    let (table, outer, inner, field) = sample();
    let file = table.files().next().unwrap().id;
    assert_eq!(table.all_declarations(file), vec![outer, inner, field]);
    assert_eq!(table.declarations_in(file), &[outer]);
}

#[test]
fn test_resolve_miss_is_none() {
    let (table, outer, _, _) = sample();
    assert!(table.resolve(&TypeRef::named("com.missing.Type")).is_none());
    let outer_ref = TypeRef::named("com.example.Outer");
    let resolved = table.resolve(&outer_ref).unwrap();
    assert_eq!(resolved.declaration, outer);
    assert!(table.resolve(&TypeRef::to(DeclId(9_999))).is_none());
}

#[test]
fn test_type_parameters_are_not_members() {
    let mut table = SymbolTable::new();
    let file = table.add_file("Box.kt", "");
    let boxed = table.declare(Parent::File(file), Declaration::class("Box", ClassKind::Class));
    let t = table.declare(Parent::Decl(boxed), Declaration::type_parameter("T"));

    let class = table.get(boxed).as_class().unwrap();
    assert_eq!(class.type_parameters, vec![t]);
    assert!(class.members.is_empty());
    assert_eq!(table.get(t).qualified_name, None);
    assert_eq!(table.get(boxed).qualified_name.as_deref(), Some("Box"));
}

#[test]
fn test_function_kinds_and_local_classes() {
    let mut table = SymbolTable::new();
    let file = table.add_file("Util.kt", "util");
    let top = table.declare(
        Parent::File(file),
        Declaration::function("helper", vec![], Some(TypeRef::named(constants::UNIT))),
    );
    let local = table.declare(Parent::Decl(top), Declaration::class("Local", ClassKind::Class));
    let holder = table.declare(Parent::File(file), Declaration::class("Holder", ClassKind::Class));
    let ctor = table.declare(Parent::Decl(holder), Declaration::constructor(vec![]));

    assert_eq!(
        table.get(top).as_function().unwrap().function_kind,
        FunctionKind::TopLevel
    );
    assert!(table.get(local).as_class().unwrap().is_local);
    assert_eq!(table.get(local).qualified_name, None);

    let ctor_fn = table.get(ctor).as_function().unwrap();
    assert_eq!(ctor_fn.function_kind, FunctionKind::Constructor);
    assert_eq!(ctor_fn.return_type, Some(TypeRef::to(holder)));
}

#[test]
fn test_annotated_with_uses_written_name_for_library_annotations() {
    let mut table = SymbolTable::new();
    let file = table.add_file("User.kt", "model");
    let user = table.declare(Parent::File(file), Declaration::class("User", ClassKind::Class));
    let name = table.declare(
        Parent::Decl(user),
        Declaration::property("name", TypeRef::named(constants::STRING))
            .with_annotation(AnnotationUsage::new("site.addzero.Dict")),
    );

    let hits: Vec<_> = table.annotated_with("site.addzero.Dict").collect();
    assert_eq!(hits, vec![name]);
    assert_eq!(table.annotated_with("site.addzero.Other").count(), 0);
}

#[test]
fn test_modifier_keywords_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for modifier in HostModifier::ALL {
        assert!(seen.insert(modifier.keyword()), "{modifier:?}");
    }
}
