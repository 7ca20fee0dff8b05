//! `fg-grid`: the toroidal world grid.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`occupant`] | `Occupant`: tagged variant over agents and patches        |
//! | [`grid`]     | `Grid`: cell → occupants, occupant → cell                 |
//! | [`error`]    | `GridError`, `GridResult<T>`                              |
//!
//! # Model
//!
//! The grid is `width × height` and wraps on both axes.  A cell holds any
//! number of occupants; agents and patches coexist.  The grid owns the
//! authoritative position mapping: an occupant's recorded cell always
//! matches the cell list it is registered in.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash for the position index instead of SipHash.        |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `Occupant`.         |

pub mod error;
pub mod grid;
pub mod occupant;


pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use occupant::Occupant;
