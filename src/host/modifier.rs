/// Modifiers as the host compiler reports them.
///
/// This is a superset of the neutral [`Modifier`](crate::model::Modifier)
/// set: it also carries declaration-shape markers (`Enum`, `Annotation`,
/// `Companion`, ...) and the platform `Java*` modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostModifier {
    Public,
    Private,
    Internal,
    Protected,
    In,
    Out,
    Override,
    Lateinit,
    Enum,
    Sealed,
    Annotation,
    Data,
    Inner,
    Fun,
    Value,
    Suspend,
    Tailrec,
    Operator,
    Infix,
    Inline,
    External,
    Abstract,
    Final,
    Open,
    Vararg,
    Noinline,
    Crossinline,
    Reified,
    Expect,
    Actual,
    Const,
    Companion,
    JavaDefault,
    JavaNative,
    JavaStatic,
    JavaStrict,
    JavaSynchronized,
    JavaTransient,
    JavaVolatile,
}

impl HostModifier {
    /// Every host modifier, in declaration order.
    pub const ALL: [HostModifier; 39] = [
        HostModifier::Public,
        HostModifier::Private,
        HostModifier::Internal,
        HostModifier::Protected,
        HostModifier::In,
        HostModifier::Out,
        HostModifier::Override,
        HostModifier::Lateinit,
        HostModifier::Enum,
        HostModifier::Sealed,
        HostModifier::Annotation,
        HostModifier::Data,
        HostModifier::Inner,
        HostModifier::Fun,
        HostModifier::Value,
        HostModifier::Suspend,
        HostModifier::Tailrec,
        HostModifier::Operator,
        HostModifier::Infix,
        HostModifier::Inline,
        HostModifier::External,
        HostModifier::Abstract,
        HostModifier::Final,
        HostModifier::Open,
        HostModifier::Vararg,
        HostModifier::Noinline,
        HostModifier::Crossinline,
        HostModifier::Reified,
        HostModifier::Expect,
        HostModifier::Actual,
        HostModifier::Const,
        HostModifier::Companion,
        HostModifier::JavaDefault,
        HostModifier::JavaNative,
        HostModifier::JavaStatic,
        HostModifier::JavaStrict,
        HostModifier::JavaSynchronized,
        HostModifier::JavaTransient,
        HostModifier::JavaVolatile,
    ];

    /// Source keyword, as written in a declaration.
    pub fn keyword(self) -> &'static str {
        match self {
            HostModifier::Public => "public",
            HostModifier::Private => "private",
            HostModifier::Internal => "internal",
            HostModifier::Protected => "protected",
            HostModifier::In => "in",
            HostModifier::Out => "out",
            HostModifier::Override => "override",
            HostModifier::Lateinit => "lateinit",
            HostModifier::Enum => "enum",
            HostModifier::Sealed => "sealed",
            HostModifier::Annotation => "annotation",
            HostModifier::Data => "data",
            HostModifier::Inner => "inner",
            HostModifier::Fun => "fun",
            HostModifier::Value => "value",
            HostModifier::Suspend => "suspend",
            HostModifier::Tailrec => "tailrec",
            HostModifier::Operator => "operator",
            HostModifier::Infix => "infix",
            HostModifier::Inline => "inline",
            HostModifier::External => "external",
            HostModifier::Abstract => "abstract",
            HostModifier::Final => "final",
            HostModifier::Open => "open",
            HostModifier::Vararg => "vararg",
            HostModifier::Noinline => "noinline",
            HostModifier::Crossinline => "crossinline",
            HostModifier::Reified => "reified",
            HostModifier::Expect => "expect",
            HostModifier::Actual => "actual",
            HostModifier::Const => "const",
            HostModifier::Companion => "companion",
            HostModifier::JavaDefault => "default",
            HostModifier::JavaNative => "native",
            HostModifier::JavaStatic => "static",
            HostModifier::JavaStrict => "strictfp",
            HostModifier::JavaSynchronized => "synchronized",
            HostModifier::JavaTransient => "transient",
            HostModifier::JavaVolatile => "volatile",
        }
    }
}
