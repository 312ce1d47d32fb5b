//! Headless Duel Runner
//!
//! Replays a scripted bout, or runs seeded random sparring to soak-test the
//! rules, and prints a JSON report per bout.

use std::path::PathBuf;

use clap::Parser;
use fencing_duel::core::error::Result;
use fencing_duel::core::{DuelConfig, Side};
use fencing_duel::duel::{Bout, BoutScript, BoutStats};
use fencing_duel::input::{ControlFrame, ControlMapper};
use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;

/// Headless Duel Runner - scripted or random bouts with JSON output
#[derive(Parser, Debug)]
#[command(name = "duel_runner")]
#[command(about = "Run scripted or seeded random bouts and report what happened")]
struct Args {
    /// Bout script (TOML); when absent, random sparring is run
    #[arg(long)]
    script: Option<PathBuf>,

    /// Rule overrides (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base seed for random sparring; bout i uses seed + i
    #[arg(long)]
    seed: Option<u64>,

    /// Number of random bouts, run in parallel
    #[arg(long, default_value_t = 1)]
    bouts: u64,

    /// Ticks per random bout
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Include the final bout state in the report
    #[arg(long)]
    dump_state: bool,

    /// Log every event to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Where a fencer ended up
#[derive(Serialize)]
struct FencerSummary {
    side: Side,
    x: f32,
    parry_timer: u32,
    deception_timer: u32,
    deflected_wrist: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct BoutReport {
    seed: Option<u64>,
    stats: BoutStats,
    fencers: Vec<FencerSummary>,
    invariant_violations: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    final_state: Option<Bout>,
}

impl BoutReport {
    fn new(seed: Option<u64>, stats: BoutStats, violations: usize, bout: Bout, dump_state: bool) -> Self {
        let fencers = bout
            .fencers
            .iter()
            .map(|f| FencerSummary {
                side: f.side,
                x: f.location.x,
                parry_timer: f.parry_timer,
                deception_timer: f.deception_timer,
                deflected_wrist: f.deflected_wrist,
            })
            .collect();
        Self {
            seed,
            stats,
            fencers,
            invariant_violations: violations,
            final_state: dump_state.then_some(bout),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "fencing_duel=debug" } else { "fencing_duel=warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = match &args.config {
        Some(path) => DuelConfig::load(path)?,
        None => DuelConfig::default(),
    };

    let reports = match &args.script {
        Some(path) => {
            let script = BoutScript::load(path)?;
            tracing::info!("Replaying {:?} for {} ticks", path, script.ticks);
            vec![run_script(&script, config, args.dump_state)]
        }
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            tracing::info!("Sparring {} bout(s) from seed {}", args.bouts, seed);
            (0..args.bouts)
                .into_par_iter()
                .map(|i| {
                    run_sparring(
                        seed.wrapping_add(i),
                        args.ticks,
                        config.clone(),
                        args.dump_state,
                    )
                })
                .collect::<Vec<_>>()
        }
    };

    for report in &reports {
        println!("{}", serde_json::to_string(report)?);
    }

    let broken = reports
        .iter()
        .filter(|r| r.invariant_violations > 0)
        .count();
    if broken > 0 {
        tracing::warn!("{} bout(s) broke an invariant", broken);
    }
    Ok(())
}

fn run_script(script: &BoutScript, config: DuelConfig, dump_state: bool) -> BoutReport {
    let mut bout = Bout::new(config);
    let mut stats = BoutStats::new();
    let mut violations = 0;

    while bout.tick < script.ticks {
        let commands = script.commands_at(bout.tick);
        let events = bout.tick(&commands);
        for event in &events {
            tracing::debug!("{:?}", event);
        }
        stats.record(&events);
        collect_violations(&bout, &mut violations);
    }

    BoutReport::new(None, stats, violations, bout, dump_state)
}

/// Random control state for one fencer, with buttons held for a while
struct Sparrer {
    mapper: ControlMapper,
    frame: ControlFrame,
}

impl Sparrer {
    fn new(side: Side) -> Self {
        Self {
            mapper: ControlMapper::new(side),
            frame: ControlFrame::default(),
        }
    }

    fn next_frame(&mut self, rng: &mut ChaCha8Rng) -> &ControlFrame {
        if rng.gen_bool(0.03) {
            self.frame.take_held = !self.frame.take_held;
        }
        self.frame.deceive_held = rng.gen_bool(0.04);
        self.frame.parry_trigger = if rng.gen_bool(0.03) {
            rng.gen_range(0.0..=1.0)
        } else {
            0.0
        };
        self.frame.advance_stick = if rng.gen_bool(0.2) {
            rng.gen_range(-1.0..=1.0)
        } else {
            0.0
        };
        if rng.gen_bool(0.05) {
            self.frame.pose_stick = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        }
        &self.frame
    }
}

fn run_sparring(seed: u64, ticks: u64, config: DuelConfig, dump_state: bool) -> BoutReport {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut sparrers = [Sparrer::new(Side::Left), Sparrer::new(Side::Right)];
    let mut bout = Bout::new(config);
    let mut stats = BoutStats::new();
    let mut violations = 0;

    while bout.tick < ticks {
        let mut commands = Vec::new();
        for sparrer in sparrers.iter_mut() {
            let frame = *sparrer.next_frame(&mut rng);
            commands.extend(sparrer.mapper.sample_for_bout(&frame, &bout.config));
        }
        let events = bout.tick(&commands);
        stats.record(&events);
        collect_violations(&bout, &mut violations);
    }

    BoutReport::new(Some(seed), stats, violations, bout, dump_state)
}

fn collect_violations(bout: &Bout, violations: &mut usize) {
    for violation in bout.invariant_violations() {
        tracing::warn!("tick {}: {}", bout.tick, violation);
        *violations += 1;
    }
}
