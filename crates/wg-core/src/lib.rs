//! `wg-core` — foundational types for the `wildguard` proximity-alert
//! simulation.
//!
//! This crate is a dependency of every other `wg-*` crate.  It has no `wg-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `MoverId`, `WatchPointId`, `AlertId`                     |
//! | [`geo`]      | `GeoPoint`, haversine distance, linear interpolation     |
//! | [`time`]     | `Tick`, `Timestamp`, `SimClock`                          |
//! | [`kind`]     | `MoverKind`, `RiskTier`, `Severity`                      |
//! | [`config`]   | `SimConfig` (alert radii, cooldown, display duration)    |
//! | [`error`]    | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod kind;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{EARTH_RADIUS_M, GeoPoint};
pub use ids::{AlertId, MoverId, WatchPointId};
pub use kind::{MoverKind, RiskTier, Severity};
pub use time::{SimClock, Tick, Timestamp};
