//! Rows handed to observers: one per agent day, one per simulated day.

use std::collections::BTreeMap;

use fg_core::{AgentId, AgentStatus, Cell, Day, ResourceId, Sex};

/// The state of one agent at the end of its turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentDayRecord {
    pub day:      Day,
    pub agent:    AgentId,
    pub name:     String,
    pub sex:      Sex,
    pub status:   AgentStatus,
    pub energy:   i64,
    /// Cell at the end of the turn.  An agent that died this turn is still
    /// reported at the cell it died on; it leaves the grid at cleanup.
    pub position: Option<Cell>,
    /// Activity chosen today, `None` on an injured rest day.
    pub activity: Option<ResourceId>,
    /// Human-readable account of the turn, or the cause of death.
    pub cause:    String,
    /// Lifetime harvests per resource type.
    pub consumed: BTreeMap<ResourceId, u32>,
}

/// Aggregate counts after a day's cleanup.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySummary {
    /// The day these counts close.
    pub day:         Day,
    pub alive:       usize,
    pub dead:        usize,
    pub injured:     usize,
    pub weak:        usize,
    /// Mean energy among living agents, 0.0 with nobody alive.
    pub mean_energy: f64,
    /// Active patches left on the grid.
    pub patches:     usize,
    /// Patches created since world seeding began, seeded ones included.
    pub spawned:     u64,
    /// Depleted patches removed since the run began.
    pub swept:       u64,
}

/// Why [`Sim::run`][crate::Sim::run] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// Every requested day was simulated.
    StepsExhausted,
    /// No agent was left alive.
    Extinct,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOutcome {
    /// Days simulated by this call.
    pub days_run: u64,
    pub stopped:  StopReason,
}
