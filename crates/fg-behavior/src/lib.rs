//! `fg-behavior`: how a forager picks the day's activity.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`context`]  | `PolicyContext<'a>`: read-only day snapshot shared by agents  |
//! | [`policy`]   | `ActivityPolicy` trait                                        |
//! | [`uniform`]  | `UniformPolicy`: every activity equally likely                |
//! | [`weighted`] | `RiskWeightedPolicy`: cautious agents avoid risky prey        |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! # Design notes
//!
//! A policy only chooses.  Paying the activity cost, moving, and resolving
//! the harvest are done by the day cycle in `fg-sim`, so a policy never
//! touches agent or grid state.  All randomness comes from the `SimRng`
//! passed in, which keeps the choice on the shared deterministic stream.

pub mod context;
pub mod error;
pub mod policy;
pub mod uniform;
pub mod weighted;

#[cfg(test)]
mod tests;

pub use context::PolicyContext;
pub use error::{BehaviorError, BehaviorResult};
pub use policy::ActivityPolicy;
pub use uniform::UniformPolicy;
pub use weighted::RiskWeightedPolicy;
