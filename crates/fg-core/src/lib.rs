//! `fg-core`: foundational types for the forage simulation.
//!
//! This crate is a dependency of every other `fg-*` crate.  It has no `fg-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `PatchId`, `ResourceId`                    |
//! | [`cell`]        | `Cell` grid coordinate                                |
//! | [`time`]        | `Day`, `SimClock`                                     |
//! | [`rng`]         | `SimRng`: the single shared random stream             |
//! | [`status`]      | `AgentStatus`, `SkillKind`, `Sex`                     |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod error;
pub mod ids;
pub mod rng;
pub mod status;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, PatchId, ResourceId};
pub use rng::SimRng;
pub use status::{AgentStatus, Sex, SkillKind};
pub use time::{Day, SimClock};
