//! `wg-alert` — the per-tick alert pipeline.
//!
//! ```text
//!   MobilityStore ──► detect ──► classify ──► cooldown filter ──► AlertSequencer
//!   (positions)      (< radius)   (severity)   (per pair, 45 s)    (Idle | Active)
//! ```
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`proximity`] | `ProximityHit`, `ProximityCandidate`, `detect_all`         |
//! | [`severity`]  | `SeverityClassifier` — first-match clause list             |
//! | [`cooldown`]  | `CooldownTracker` — `(MoverId, WatchPointId) → Timestamp`  |
//! | [`sequencer`] | `AlertState`, `ActiveAlert`, `AlertSequencer`              |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the proximity scan on Rayon's thread pool.         |
//! | `fx-hash`  | Uses `FxHashMap` for the cooldown map.                  |

pub mod cooldown;
pub mod proximity;
pub mod sequencer;
pub mod severity;


pub use cooldown::{CooldownTracker, PairKey};
pub use proximity::{ProximityCandidate, ProximityHit, detect_all, detect_mover};
pub use sequencer::{ActiveAlert, AlertSequencer, AlertState, ClearReason, select_best};
pub use severity::SeverityClassifier;
