//! `fg-sim`: day loop orchestrator for the forage simulation.
//!
//! # Three-phase day
//!
//! ```text
//! for day in 0..n (or until nobody is alive):
//!   ① Spawn     every cell without a patch may grow one (PatchStore::spawn_pass).
//!   ② Activate  shuffle the living agents; each takes one turn:
//!                 injured → rest
//!                 else    → choose, pay, move, harvest, eat, survive
//!               Agents that die are marked, not removed.
//!   ③ Cleanup   dead agents leave the grid; depleted patches are swept.
//! ```
//!
//! Every random draw in all three phases comes from one `SimRng` in a fixed
//! order, so a configuration and seed fully determine the run.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `serde`   | Serde derives on `SimConfig`, records, and summaries.     |
//! | `fx-hash` | FxHash for the grid's position index.                     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fg_sim::{EventLog, SimBuilder, SimConfig};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! let mut log = EventLog::new();
//! let outcome = sim.run_to_end(&mut log)?;
//! println!("{} days, {:?}", outcome.days_run, sim.summary());
//! ```

pub mod builder;
pub mod config;
pub mod day;
pub mod error;
pub mod observer;
pub mod record;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{EventLog, NoopObserver, SimObserver};
pub use record::{AgentDayRecord, DaySummary, RunOutcome, StopReason};
pub use sim::Sim;
