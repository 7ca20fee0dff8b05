//! What can stand on a cell.

use std::fmt;

use fg_core::{AgentId, PatchId};

/// An occupant reference held by a grid cell: an agent or a resource patch.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    Agent(AgentId),
    Patch(PatchId),
}

impl Occupant {
    #[inline]
    pub fn as_agent(self) -> Option<AgentId> {
        match self {
            Occupant::Agent(id) => Some(id),
            Occupant::Patch(_)  => None,
        }
    }

    #[inline]
    pub fn as_patch(self) -> Option<PatchId> {
        match self {
            Occupant::Patch(id) => Some(id),
            Occupant::Agent(_)  => None,
        }
    }
}

impl From<AgentId> for Occupant {
    fn from(id: AgentId) -> Self {
        Occupant::Agent(id)
    }
}

impl From<PatchId> for Occupant {
    fn from(id: PatchId) -> Self {
        Occupant::Patch(id)
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Agent(id) => write!(f, "{id}"),
            Occupant::Patch(id) => write!(f, "{id}"),
        }
    }
}
