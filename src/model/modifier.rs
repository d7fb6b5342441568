use std::collections::BTreeSet;

/// Neutral declaration modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Internal,
    Final,
    Open,
    Abstract,
    Sealed,
    Override,
    Lateinit,
    Data,
    Inline,
    Suspend,
    Infix,
    Operator,
    Inner,
    Const,
    Crossinline,
    Noinline,
    Reified,
    External,
    Tailrec,
    Vararg,
    In,
    Out,
}

/// Ordered so that two conversions of the same symbol compare equal.
pub type ModifierSet = BTreeSet<Modifier>;

impl Modifier {
    pub fn is_visibility(self) -> bool {
        matches!(
            self,
            Modifier::Public | Modifier::Private | Modifier::Protected | Modifier::Internal
        )
    }
}
