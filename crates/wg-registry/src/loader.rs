//! CSV registry loader.
//!
//! # Movers file
//!
//! One row per waypoint.  Rows sharing a `label` form one mover; movers get
//! ids in order of first appearance and waypoints are ordered by `seq`.
//! `kind` and `speed` are taken from the mover's first row.
//!
//! ```csv
//! label,kind,speed,seq,lat,lon
//! Stripe King,tiger,0.0008,0,26.0212,76.5028
//! Stripe King,tiger,0.0008,1,26.0225,76.5040
//! ```
//!
//! # Watch-points file
//!
//! ```csv
//! label,lat,lon,population,risk
//! Ranthambore Village,26.0270,76.5085,380,high
//! ```
//!
//! Unrecognised `kind` or `risk` values load as `Unknown` (with a warning)
//! rather than failing; the severity classifier maps them to `low`.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use wg_core::{GeoPoint, MoverKind, RiskTier};

use crate::{Registry, RegistryBuilder, RegistryError, RegistryResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WaypointRecord {
    label: String,
    kind:  String,
    speed: f64,
    seq:   u32,
    lat:   f64,
    lon:   f64,
}

#[derive(Deserialize)]
struct WatchPointRecord {
    label:      String,
    lat:        f64,
    lon:        f64,
    population: u32,
    risk:       String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a registry from two CSV files.
pub fn load_registry_csv(movers_path: &Path, watch_points_path: &Path) -> RegistryResult<Registry> {
    let movers = std::fs::File::open(movers_path)?;
    let watch_points = std::fs::File::open(watch_points_path)?;
    load_registry_reader(movers, watch_points)
}

/// Like [`load_registry_csv`] but accepts any `Read` sources.
pub fn load_registry_reader<M: Read, W: Read>(movers: M, watch_points: W) -> RegistryResult<Registry> {
    let mut builder = RegistryBuilder::new();

    // ── Movers: group waypoint rows by label, first appearance wins ───────
    let mut grouped: Vec<(String, String, f64, Vec<(u32, GeoPoint)>)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    for result in csv::Reader::from_reader(movers).deserialize::<WaypointRecord>() {
        let row = result?;
        let point = GeoPoint::new(row.lat, row.lon);
        match slots.get(&row.label) {
            Some(&slot) => grouped[slot].3.push((row.seq, point)),
            None => {
                slots.insert(row.label.clone(), grouped.len());
                grouped.push((row.label, row.kind, row.speed, vec![(row.seq, point)]));
            }
        }
    }

    for (label, kind, speed, mut waypoints) in grouped {
        waypoints.sort_by_key(|(seq, _)| *seq);
        if waypoints.windows(2).any(|w| w[0].0 == w[1].0) {
            return Err(RegistryError::Parse(format!("mover {label:?} repeats a waypoint seq")));
        }
        let kind = parse_kind(&label, &kind);
        let route = waypoints.into_iter().map(|(_, p)| p).collect();
        builder.add_mover(label, kind, speed, route);
    }

    // ── Watch-points ──────────────────────────────────────────────────────
    for result in csv::Reader::from_reader(watch_points).deserialize::<WatchPointRecord>() {
        let row = result?;
        let risk = parse_risk(&row.label, &row.risk);
        builder.add_watch_point(row.label, GeoPoint::new(row.lat, row.lon), row.population, risk);
    }

    builder.build()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_kind(label: &str, raw: &str) -> MoverKind {
    let Ok(kind) = raw.parse::<MoverKind>();
    if kind == MoverKind::Unknown {
        log::warn!("mover {label:?}: unrecognised kind {raw:?}, loading as unknown");
    }
    kind
}

fn parse_risk(label: &str, raw: &str) -> RiskTier {
    let Ok(risk) = raw.parse::<RiskTier>();
    if risk == RiskTier::Unknown {
        log::warn!("watch-point {label:?}: unrecognised risk tier {raw:?}, loading as unknown");
    }
    risk
}
