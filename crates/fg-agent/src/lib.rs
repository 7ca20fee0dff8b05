//! `fg-agent`: forager state and the survival state machine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`agent`]    | `ForagerAgent`: one forager's full record                 |
//! | [`survival`] | `SurvivalParams`, transitions: rest, injure, die, starve  |
//! | [`store`]    | `AgentStore`: every agent ever created, living or dead    |
//! | [`builder`]  | `AgentStoreBuilder`: draws skills and traits              |
//!
//! # State machine
//!
//! ```text
//!            energy ≥ req              energy < req, weak_days ≤ max
//!  Healthy ◄─────────────── Weak ◄──────────────────────── Healthy/Weak
//!     │  harvest injury      ▲ recovered, energy < req
//!     ▼                      │
//!  Injured ──────────────────┘ (or Healthy if energy ≥ req)
//!
//!  any live state ──(harvest death | weak_days > max)──► Dead (terminal)
//! ```
//!
//! Every mutating method is a no-op on a dead agent.

pub mod agent;
pub mod builder;
pub mod store;
pub mod survival;


pub use agent::ForagerAgent;
pub use builder::AgentStoreBuilder;
pub use store::AgentStore;
pub use survival::{RestOutcome, SurvivalChange, SurvivalParams};
