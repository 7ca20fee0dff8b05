//! A single resource patch.

use fg_core::{PatchId, ResourceId};

/// A single-use resource instance on one grid cell.
///
/// Patches are passive: only a harvesting agent changes `amount`, and it
/// never increases.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePatch {
    pub id:     PatchId,
    pub kind:   ResourceId,
    /// Harvests left.  Starts at 1.
    pub amount: u32,
}

impl ResourcePatch {
    pub fn new(id: PatchId, kind: ResourceId) -> Self {
        Self { id, kind, amount: 1 }
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.amount == 0
    }

    /// Take one unit.  Returns `false` (and changes nothing) if the patch is
    /// already depleted.
    pub fn take_one(&mut self) -> bool {
        if self.amount == 0 {
            return false;
        }
        self.amount -= 1;
        true
    }
}
