//! Fencing Duel - Console Bout
//!
//! Drives a bout from typed commands instead of a gamepad: each line queues
//! actions for one fencer, and `tick` runs frames. Handy for poking at the
//! rules by hand.

use fencing_duel::combat::FencerCommand;
use fencing_duel::core::error::Result;
use fencing_duel::core::{DuelConfig, Side};
use fencing_duel::duel::{Bout, BoutEvent};

use glam::Vec2;
use std::io::{self, Write};

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fencing_duel=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DuelConfig::load(path)?,
        None => DuelConfig::default(),
    };
    let mut bout = Bout::new(config);
    let mut pending: Vec<(Side, FencerCommand)> = Vec::new();

    tracing::info!("Fencing Duel console starting...");

    println!("\n=== FENCING DUEL ===");
    println!();
    println!("Commands:");
    println!("  <side> advance <amount>   - queue footwork (left/right, -1..1)");
    println!("  <side> parry <amount>     - queue a parry (0..1]");
    println!("  <side> deceive <amount>   - queue a deceive (0..1]");
    println!("  <side> take               - queue a take");
    println!("  <side> release            - queue end-take");
    println!("  <side> pose <x> <y>       - queue a blade direction");
    println!("  tick / t                  - run one frame with queued commands");
    println!("  run <n>                   - run n frames");
    println!("  status / s                - show both fencers");
    println!("  restart                   - back to the opening position");
    println!("  quit / q                  - exit");
    println!();

    loop {
        print!("[{}] > ", bout.tick);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "tick" || input == "t" {
            let events = bout.tick(&pending);
            pending.clear();
            print_events(&events);
            continue;
        }

        if input == "status" || input == "s" {
            display_status(&bout);
            continue;
        }

        if input == "restart" {
            bout.restart();
            pending.clear();
            println!("Fencers back on their marks.");
            continue;
        }

        if let Some(rest) = input.strip_prefix("run ") {
            match rest.parse::<u32>() {
                Ok(n) => {
                    for i in 0..n {
                        let commands = if i == 0 { std::mem::take(&mut pending) } else { Vec::new() };
                        print_events(&bout.tick(&commands));
                    }
                    println!("Now at tick {}.", bout.tick);
                }
                Err(_) => println!("Usage: run <number>"),
            }
            continue;
        }

        match parse_command(input) {
            Ok(queued) => {
                println!("Queued {:?} for {}", queued.1, queued.0);
                pending.push(queued);
            }
            Err(message) => println!("{}", message),
        }
    }

    println!("\nBout ended after {} ticks.", bout.tick);
    Ok(())
}

/// Parse "<side> <action> [args]" into a command
fn parse_command(input: &str) -> std::result::Result<(Side, FencerCommand), String> {
    let words: Vec<&str> = input.split_whitespace().collect();
    let side: Side = words
        .first()
        .ok_or_else(|| "Empty command".to_string())?
        .parse()?;
    let action = words.get(1).ok_or_else(|| "Missing action".to_string())?;
    let number = |i: usize, default: f32| -> std::result::Result<f32, String> {
        match words.get(i) {
            Some(w) => w.parse::<f32>().map_err(|_| format!("'{}' is not a number", w)),
            None => Ok(default),
        }
    };

    let command = match *action {
        "advance" | "a" => FencerCommand::Advance(number(2, 1.0)?),
        "retreat" => FencerCommand::Advance(-number(2, 1.0)?),
        "parry" | "p" => FencerCommand::Parry(number(2, 1.0)?),
        "deceive" | "d" => FencerCommand::Deceive(number(2, 1.0)?),
        "take" => FencerCommand::Take(1.0),
        "release" | "end_take" => FencerCommand::EndTake,
        "pose" => FencerCommand::Pose(Vec2::new(number(2, 0.0)?, number(3, 0.0)?)),
        other => return Err(format!("Unknown action '{}'", other)),
    };
    Ok((side, command))
}

fn print_events(events: &[BoutEvent]) {
    for event in events {
        match event {
            BoutEvent::Vibration { .. } => {}
            other => println!("  {:?}", other),
        }
    }
}

fn display_status(bout: &Bout) {
    println!();
    println!("--- Tick {} ---", bout.tick);
    match bout.sync.blades_crossed_at {
        Some(at) => println!("Blades crossed at ({:.1}, {:.1})", at.x, at.y),
        None => println!("Blades apart"),
    }
    if let Some(holder) = bout.sync.blade_taken_by {
        println!(
            "{} holds the blade, contact at ({:.1}, {:.1})",
            holder, bout.sync.contact_point.x, bout.sync.contact_point.y
        );
    }
    for fencer in &bout.fencers {
        let angles = fencer.joint_angles();
        println!(
            "{:>5}: x={:7.1} parry={:3} deceive={:3} deflected={} pose=({:.2},{:.2}) joints=[{:.0}, {:.0}, {:.0}, {:.0}]",
            fencer.side.to_string(),
            fencer.location.x,
            fencer.parry_timer,
            fencer.deception_timer,
            fencer.deflected_wrist,
            fencer.current_pose().x,
            fencer.current_pose().y,
            angles[0],
            angles[1],
            angles[2],
            angles[3],
        );
    }
    println!();
}
