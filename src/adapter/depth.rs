/// How far a conversion may descend below the node being converted.
///
/// Conversions hand `depth.descend()` to every child, so any chain of
/// conversions reaches [`Depth::Flat`] after two steps and stays there.
/// A `Flat` node carries no members, supertypes, bounds or nested
/// annotation content, which is what bounds the walk on cyclic graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Depth {
    /// The explicitly requested node.
    Full,
    /// Direct children of a requested node.
    Bounded,
    /// Identity plus signature types.
    Flat,
}

impl Depth {
    pub fn descend(self) -> Depth {
        match self {
            Depth::Full => Depth::Bounded,
            Depth::Bounded | Depth::Flat => Depth::Flat,
        }
    }

    /// Members, supertypes, companion and type-parameter bounds.
    pub fn includes_members(self) -> bool {
        self != Depth::Flat
    }

    pub fn includes_nested_types(self) -> bool {
        self == Depth::Full
    }

    pub fn includes_array_values(self) -> bool {
        self == Depth::Full
    }
}
