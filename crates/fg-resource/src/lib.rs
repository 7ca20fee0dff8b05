//! `fg-resource`: resource types, patches, and harvest outcomes.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`definition`] | `ResourceDefinition`: per-type immutable parameters       |
//! | [`catalog`]    | `ResourceCatalog`, `SpawnTable`                           |
//! | [`patch`]      | `ResourcePatch`: a single-use resource on one cell        |
//! | [`lifecycle`]  | `PatchStore`: seed, daily spawn pass, depletion sweep     |
//! | [`outcome`]    | `HarvestAttempt`, `HarvestOutcome`, `resolve_harvest`     |
//! | [`error`]      | `ResourceError`, `ResourceResult<T>`                      |
//!
//! # Patch lifecycle (summary)
//!
//! ```text
//! seed / spawn_pass   per empty cell, one draw per type in table order;
//!                     the first draw below its probability spawns a patch
//! harvest             amount 1 → 0 (a patch yields exactly once)
//! sweep_depleted      after all agents acted, drop patches with amount 0
//! ```

pub mod catalog;
pub mod definition;
pub mod error;
pub mod lifecycle;
pub mod outcome;
pub mod patch;


pub use catalog::{ResourceCatalog, SpawnTable};
pub use definition::ResourceDefinition;
pub use error::{ResourceError, ResourceResult};
pub use lifecycle::PatchStore;
pub use outcome::{HarvestAttempt, HarvestOutcome, resolve_harvest};
pub use patch::ResourcePatch;
