//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of a forager.  Allocated from 1 upward in creation order.
    pub struct AgentId(u32);
}

typed_id! {
    /// Identity of a resource patch.  Allocated from a separate counter so
    /// patch and agent ids never collide in logs.
    pub struct PatchId(u32);
}

typed_id! {
    /// Index of a resource type in the `ResourceCatalog`.
    pub struct ResourceId(u16);
}

impl AgentId {
    /// First id handed out by a fresh population.
    pub const FIRST: AgentId = AgentId(1);
}

impl PatchId {
    /// First id handed out by a fresh patch store.
    pub const FIRST: PatchId = PatchId(1_000_000);
}
