//! patrol — headless run of the wildguard proximity-alert simulation.
//!
//! Drives the simulation with a synthetic frame clock, prints each raised
//! alert, forwards it to a console relay, and optionally records CSV output.
//! With no registry files the built-in reference catalog is used: eight
//! animals roaming around eight Indian reserve villages.

mod console;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use wg_core::{SimConfig, Tick, Timestamp};
use wg_mobility::MobilityStore;
use wg_output::{CsvWriter, SimOutputObserver};
use wg_registry::{Registry, load_registry_csv};
use wg_sim::{ActiveAlert, ClearReason, RelayObserver, SimBuilder, SimObserver, SimStats};

use console::{CONTACTS, ConsoleRelay};

#[derive(Debug, Parser)]
#[command(author, version, about = "wildguard patrol runner")]
struct Cli {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 20_000)]
    ticks: u64,

    /// Seed for the frame-clock jitter
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Nominal frame interval in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: i64,

    /// JSON file overriding the default alert configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mover waypoint CSV (requires --watch-points)
    #[arg(long, requires = "watch_points")]
    movers: Option<PathBuf>,

    /// Watch-point CSV (requires --movers)
    #[arg(long, requires = "movers")]
    watch_points: Option<PathBuf>,

    /// Movers to hide, by label
    #[arg(long)]
    hide: Vec<String>,

    /// Directory for CSV output
    #[arg(long)]
    output: Option<PathBuf>,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Fans callbacks out to the relay and the optional CSV recorder, and prints
/// alert lifecycle events.
struct PatrolObserver {
    relay:   RelayObserver<ConsoleRelay>,
    output:  Option<SimOutputObserver<CsvWriter>>,
    expired: u64,
}

impl SimObserver for PatrolObserver {
    fn on_alert_raised(&mut self, alert: &ActiveAlert, registry: &Registry) {
        println!("{} {}", alert.raised_at, wg_sim::format_alert_message(alert, registry));
        self.relay.on_alert_raised(alert, registry);
        if let Some(out) = &mut self.output {
            out.on_alert_raised(alert, registry);
        }
    }

    fn on_alert_cleared(&mut self, _alert: &ActiveAlert, reason: ClearReason, _registry: &Registry) {
        if reason == ClearReason::Expired {
            self.expired += 1;
        }
    }

    fn on_tick_end(&mut self, tick: Tick, now: Timestamp, stats: &SimStats) {
        if let Some(out) = &mut self.output {
            out.on_tick_end(tick, now, stats);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, now: Timestamp, registry: &Registry, store: &MobilityStore) {
        if let Some(out) = &mut self.output {
            out.on_snapshot(tick, now, registry, store);
        }
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&PathBuf>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: SimConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn load_registry(cli: &Cli) -> Result<Registry> {
    let registry = match (&cli.movers, &cli.watch_points) {
        (Some(movers), Some(watch_points)) => load_registry_csv(movers, watch_points)
            .with_context(|| format!("loading {} and {}", movers.display(), watch_points.display()))?,
        (None, None) => Registry::reference_catalog()?,
        _ => bail!("--movers and --watch-points must be given together"),
    };
    Ok(registry)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    if cli.frame_ms <= 0 {
        bail!("--frame-ms must be positive");
    }

    let config = load_config(cli.config.as_ref())?;
    let registry = load_registry(&cli)?;

    let mut hidden = Vec::with_capacity(cli.hide.len());
    for label in &cli.hide {
        let mover = registry
            .mover_by_label(label)
            .with_context(|| format!("--hide: no mover labelled '{label}'"))?;
        log::info!("starting {label:?} hidden");
        hidden.push(mover.id);
    }

    println!("=== patrol — wildguard proximity alerts ===");
    println!(
        "Movers: {}  |  Watch-points: {}  |  Frames: {}  |  Seed: {}",
        registry.mover_count(),
        registry.watch_point_count(),
        cli.ticks,
        cli.seed,
    );
    println!(
        "Alert radius {:.0} m, cooldown {} ms, display {} ms",
        config.alert_radius_m, config.cooldown_ms, config.alert_display_ms,
    );
    println!();

    let mut sim = SimBuilder::new(registry).config(config).hidden(hidden).running(true).build()?;

    let output = match &cli.output {
        Some(dir) => Some(SimOutputObserver::new(CsvWriter::new(dir)?)),
        None => None,
    };
    let mut obs = PatrolObserver {
        relay: RelayObserver::new(ConsoleRelay::new(&CONTACTS)),
        output,
        expired: 0,
    };

    // Frame clock: nominal interval plus up to 25 % jitter.
    let mut rng = SmallRng::seed_from_u64(cli.seed);
    let jitter = (cli.frame_ms / 4).max(1);
    let mut now = Timestamp::ZERO;
    let mut wraps = 0usize;

    log::info!("running {} frames at ~{} ms", cli.ticks, cli.frame_ms);
    let t0 = Instant::now();
    for _ in 0..cli.ticks {
        wraps += sim.tick(now, &mut obs).wrapped.len();
        now = now.plus_millis(cli.frame_ms + rng.gen_range(0..jitter));
    }
    sim.set_running(false);
    let elapsed = t0.elapsed();
    log::info!("run finished at {} after {:.3} s", sim.clock(), elapsed.as_secs_f64());

    if let Some(out) = &mut obs.output {
        if let Err(e) = out.finish() {
            log::error!("output error: {e}");
        }
    }

    // Summary.
    let stats = sim.stats();
    let failed = obs.relay.reports().iter().filter(|r| !r.is_sent()).count();
    println!();
    println!("Simulated {} of host time in {:.3} s", now, elapsed.as_secs_f64());
    println!(
        "  alerts raised : {}  (expired {}, still active {})",
        stats.total_alerts, obs.expired, stats.active_alerts,
    );
    println!("  route wraps   : {wraps}");
    println!(
        "  sms delivered : {}  (failed {failed})",
        obs.relay.relay().sent(),
    );
    if let Some(dir) = &cli.output {
        println!("  csv output    : {}", dir.display());
    }
    println!();

    println!("{:<18} {:<9} {:<8} {:<26}", "Mover", "Kind", "Visible", "Position");
    println!("{}", "-".repeat(62));
    for spec in sim.registry().movers() {
        let visible = sim.store().is_visible(spec.id);
        let position = sim.mover_position(spec.id).map(|p| p.to_string()).unwrap_or_default();
        println!(
            "{:<18} {:<9} {:<8} {:<26}",
            spec.label,
            spec.kind.as_str(),
            if visible { "yes" } else { "no" },
            position,
        );
    }

    Ok(())
}
