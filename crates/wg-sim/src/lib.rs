//! `wg-sim` — the simulation controller.
//!
//! # Tick pipeline
//!
//! ```text
//! tick(now), only while running:
//!   ① Movement   — advance every visible mover along its route.
//!   ② Expiry     — clear the active alert once its display time is over.
//!   ③ Detection  — visible mover × watch-point pairs inside the alert radius
//!                  (skipped while an alert is active).
//!   ④ Classify   — severity per candidate.
//!   ⑤ Sequence   — drop pairs in cooldown, promote the best candidate.
//!   ⑥ Stats      — derived counters handed to `on_tick_end`.
//! ```
//!
//! The host owns the frame timer and calls [`Simulation::tick`] with its
//! wall clock.  Nothing here sleeps, spawns, or schedules callbacks.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wg_registry::Registry;
//! use wg_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(Registry::reference_catalog()?).running(true).build()?;
//! sim.tick(Timestamp::from_millis(16), &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod relay;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use relay::{DeliveryReport, DeliveryStatus, NotificationRelay, RelayObserver, format_alert_message};
pub use sim::{Simulation, TickReport};
pub use stats::SimStats;

pub use wg_alert::{ActiveAlert, AlertState, ClearReason};
