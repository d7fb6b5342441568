//! Host symbol tables shared by the integration tests.

use kaleidoscope::base::constants;
use kaleidoscope::host::{
    AnnotationUsage, ArgValue, ClassKind, Declaration, HostModifier, Parent, SymbolTable,
    TypeArgument, TypeRef,
};

/// `com.example.Outer { inner class Inner { val outer: Outer } }`
pub fn outer_inner() -> SymbolTable {
    let mut table = SymbolTable::new();
    let file = table.add_file("src/main/kotlin/com/example/Outer.kt", "com.example");
    let outer = table.declare(
        Parent::File(file),
        Declaration::class("Outer", ClassKind::Class).with_modifiers([HostModifier::Public]),
    );
    let inner = table.declare(
        Parent::Decl(outer),
        Declaration::class("Inner", ClassKind::Class).with_modifiers([HostModifier::Inner]),
    );
    table.declare(
        Parent::Decl(inner),
        Declaration::property("outer", TypeRef::to(outer)),
    );
    table
}

/// `graph.Tree { class Node { val tree: Tree; val children: Array<Node>; fun parent(): Node? } }`
pub fn self_nested() -> SymbolTable {
    let mut table = SymbolTable::new();
    let file = table.add_file("src/graph/Tree.kt", "graph");
    let tree = table.declare(Parent::File(file), Declaration::class("Tree", ClassKind::Class));
    let node = table.declare(Parent::Decl(tree), Declaration::class("Node", ClassKind::Class));
    table.declare(
        Parent::Decl(node),
        Declaration::property("tree", TypeRef::to(tree)),
    );
    table.declare(
        Parent::Decl(node),
        Declaration::property(
            "children",
            TypeRef::named(constants::ARRAY)
                .with_arg(TypeArgument::invariant(TypeRef::to(node))),
        ),
    );
    table.declare(
        Parent::Decl(node),
        Declaration::function("parent", Vec::new(), Some(TypeRef::to(node).nullable())),
    );
    table.declare(
        Parent::Decl(tree),
        Declaration::property("root", TypeRef::to(node)),
    );
    table
}

/// `app.Status { @Dict(nameColumn = "name") val name: String }`
pub fn dict() -> SymbolTable {
    let mut table = SymbolTable::new();
    let file = table.add_file("src/main/kotlin/app/Status.kt", "app");
    let status = table.declare(
        Parent::File(file),
        Declaration::class("Status", ClassKind::EnumClass),
    );
    table.declare(
        Parent::Decl(status),
        Declaration::property("name", TypeRef::named(constants::STRING)).with_annotation(
            AnnotationUsage::new("site.addzero.Dict")
                .with_arg("nameColumn", ArgValue::string("name")),
        ),
    );
    table.declare(
        Parent::Decl(status),
        Declaration::property("code", TypeRef::named(constants::INT)),
    );
    table
}

/// A class annotated with `@Schema(tables = [["a", "b"], ["c"]], primary = @Key(columns = ["id"]))`.
pub fn nested_annotation_values() -> SymbolTable {
    let mut table = SymbolTable::new();
    let file = table.add_file("src/db/Entity.kt", "db");
    let key = AnnotationUsage::new("db.Key")
        .with_arg("columns", ArgValue::Array(vec![ArgValue::string("id")]));
    let schema = AnnotationUsage::new("db.Schema")
        .with_arg(
            "tables",
            ArgValue::Array(vec![
                ArgValue::Array(vec![ArgValue::string("a"), ArgValue::string("b")]),
                ArgValue::Array(vec![ArgValue::string("c")]),
            ]),
        )
        .with_arg("primary", ArgValue::Annotation(Box::new(key)));
    table.declare(
        Parent::File(file),
        Declaration::class("Entity", ClassKind::Class).with_annotation(schema),
    );
    table
}

/// `@Target @Retention annotation class Target`, `@Target annotation class Retention`,
/// and `model.User` annotated with `@Target`.
pub fn meta_annotated() -> SymbolTable {
    let mut table = SymbolTable::new();
    let meta = table.add_file("src/meta/Annotations.kt", "meta");
    table.declare(
        Parent::File(meta),
        Declaration::class("Target", ClassKind::AnnotationClass)
            .with_annotation(AnnotationUsage::new("meta.Target"))
            .with_annotation(AnnotationUsage::new("meta.Retention")),
    );
    table.declare(
        Parent::File(meta),
        Declaration::class("Retention", ClassKind::AnnotationClass)
            .with_annotation(AnnotationUsage::new("meta.Target")),
    );
    let model = table.add_file("src/model/User.kt", "model");
    table.declare(
        Parent::File(model),
        Declaration::class("User", ClassKind::Class)
            .with_annotation(AnnotationUsage::new("meta.Target")),
    );
    table
}

/// `@Default(level = Level.HIGH) enum class Level { HIGH, LOW }` with
/// `annotation class Default(val level: Level)`.
pub fn enum_annotation_cycle() -> SymbolTable {
    let mut table = SymbolTable::new();
    let file = table.add_file("src/app/Level.kt", "app");
    let default = table.declare(
        Parent::File(file),
        Declaration::class("Default", ClassKind::AnnotationClass),
    );
    let level = table.declare(
        Parent::File(file),
        Declaration::class("Level", ClassKind::EnumClass).with_annotation(
            AnnotationUsage::new("app.Default")
                .with_arg("level", ArgValue::EnumEntry(TypeRef::named("app.Level.HIGH"))),
        ),
    );
    table.declare(Parent::Decl(level), Declaration::class("HIGH", ClassKind::EnumEntry));
    table.declare(Parent::Decl(level), Declaration::class("LOW", ClassKind::EnumEntry));
    table.declare(
        Parent::Decl(default),
        Declaration::property("level", TypeRef::to(level)),
    );
    table
}
