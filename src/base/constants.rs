//! Well-known qualified names of the host language's builtin classes.
//!
//! The adapter classifies types by comparing qualified names against these
//! tables, so they are the single source of truth for primitive detection.

/// Package that holds every builtin class.
pub const BUILTIN_PACKAGE: &str = "kotlin";

pub const ANY: &str = "kotlin.Any";
pub const BOOLEAN: &str = "kotlin.Boolean";
pub const BYTE: &str = "kotlin.Byte";
pub const SHORT: &str = "kotlin.Short";
pub const INT: &str = "kotlin.Int";
pub const LONG: &str = "kotlin.Long";
pub const CHAR: &str = "kotlin.Char";
pub const FLOAT: &str = "kotlin.Float";
pub const DOUBLE: &str = "kotlin.Double";
pub const STRING: &str = "kotlin.String";
pub const UNIT: &str = "kotlin.Unit";
pub const NOTHING: &str = "kotlin.Nothing";
pub const ARRAY: &str = "kotlin.Array";

/// The eight primitive classes, in declaration order.
pub const PRIMITIVES: [&str; 8] = [BOOLEAN, BYTE, SHORT, INT, LONG, CHAR, FLOAT, DOUBLE];

/// Every class the host symbol table pre-registers.
pub const BUILTIN_CLASSES: [&str; 13] = [
    ANY, BOOLEAN, BYTE, SHORT, INT, LONG, CHAR, FLOAT, DOUBLE, STRING, UNIT, NOTHING, ARRAY,
];

/// Primitive ↔ platform wrapper pairs used for boxing and unboxing.
pub const WRAPPERS: [(&str, &str); 8] = [
    (BOOLEAN, "java.lang.Boolean"),
    (BYTE, "java.lang.Byte"),
    (SHORT, "java.lang.Short"),
    (INT, "java.lang.Integer"),
    (LONG, "java.lang.Long"),
    (CHAR, "java.lang.Character"),
    (FLOAT, "java.lang.Float"),
    (DOUBLE, "java.lang.Double"),
];

/// Check whether a qualified name denotes one of the primitive classes.
pub fn is_primitive_name(qualified_name: &str) -> bool {
    PRIMITIVES.contains(&qualified_name)
}

/// The platform wrapper for a primitive qualified name.
pub fn wrapper_of(primitive: &str) -> Option<&'static str> {
    WRAPPERS
        .iter()
        .find(|(p, _)| *p == primitive)
        .map(|(_, w)| *w)
}

/// The primitive for a platform wrapper qualified name.
pub fn primitive_of(wrapper: &str) -> Option<&'static str> {
    WRAPPERS
        .iter()
        .find(|(_, w)| *w == wrapper)
        .map(|(p, _)| *p)
}

/// The last dotted segment of a qualified name.
pub fn simple_name_of(qualified_name: &str) -> &str {
    qualified_name
        .rsplit_once('.')
        .map_or(qualified_name, |(_, simple)| simple)
}

/// The package portion of a qualified name (empty for the root package).
pub fn package_of(qualified_name: &str) -> &str {
    qualified_name
        .rsplit_once('.')
        .map_or("", |(package, _)| package)
}
