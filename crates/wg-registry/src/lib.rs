//! `wg-registry` — the static catalog of movers and watch-points.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`entity`]   | `MoverSpec`, `WatchPoint`                                    |
//! | [`registry`] | `Registry` (validated, immutable), `RegistryBuilder`         |
//! | [`index`]    | `WatchPointIndex` — R-tree prefilter for proximity queries   |
//! | [`loader`]   | CSV loading of movers and watch-points                       |
//! | [`catalog`]  | The built-in reference catalog                               |
//! | [`error`]    | `RegistryError`, `RegistryResult<T>`                         |
//!
//! A `Registry` can only be obtained through [`RegistryBuilder::build`] (or a
//! loader that calls it), so every route it hands out has at least two
//! waypoints and every watch-point a positive population.

pub mod catalog;
pub mod entity;
pub mod error;
pub mod index;
pub mod loader;
pub mod registry;


pub use entity::{MoverSpec, WatchPoint};
pub use error::{RegistryError, RegistryResult};
pub use index::WatchPointIndex;
pub use loader::{load_registry_csv, load_registry_reader};
pub use registry::{Registry, RegistryBuilder};
