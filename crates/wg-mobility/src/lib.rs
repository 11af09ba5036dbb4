//! `wg-mobility` — mover state and the position update engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`state`]   | `MoverState` — progress, derived position, visibility           |
//! | [`store`]   | `MobilityStore` — `Vec<MoverState>` indexed by `MoverId`         |
//! | [`engine`]  | `MobilityEngine` — per-tick advancement and reset               |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                             |
//!
//! # Movement model (closed-loop patrol)
//!
//! Route progress is a scalar `segment + fraction`.  Each tick a visible
//! mover adds its `speed` to progress; the position is the linear blend of
//! the segment's two endpoints by the fraction.  Once progress reaches the
//! end of the last segment the mover jumps back to `route[0]` with progress
//! zero.  It does not walk the route in reverse.
//!
//! Movers never read each other's state.

pub mod engine;
pub mod error;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
pub use state::MoverState;
pub use store::MobilityStore;
