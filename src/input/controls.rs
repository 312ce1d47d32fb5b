//! Control sampling with edge detection

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::combat::FencerCommand;
use crate::core::{DuelConfig, Side};
use crate::geometry::clamp_radial;

/// One tick's worth of device-agnostic control state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlFrame {
    pub take_held: bool,
    pub deceive_held: bool,
    /// Analog parry trigger travel in [0, 1]
    pub parry_trigger: f32,
    /// Footwork stick X in [-1, 1]; positive is toward the opponent
    pub advance_stick: f32,
    /// Raw blade stick, before diagonal stretching
    pub pose_stick: Vec2,
}

/// Remembers button state between frames for one fencer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlMapper {
    pub side: Side,
    take_was_held: bool,
    deceive_was_held: bool,
}

impl ControlMapper {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            take_was_held: false,
            deceive_was_held: false,
        }
    }

    /// Commands for this frame, in the order the handlers expect them.
    ///
    /// Take and deceive fire on the press edge only; end-take fires once on
    /// the release edge. Pose is sent every frame.
    pub fn sample(&mut self, frame: &ControlFrame, config: &DuelConfig) -> Vec<FencerCommand> {
        let mut commands = Vec::new();

        if frame.take_held && !self.take_was_held {
            commands.push(FencerCommand::Take(1.0));
        } else if !frame.take_held && self.take_was_held {
            commands.push(FencerCommand::EndTake);
        }
        self.take_was_held = frame.take_held;

        if frame.deceive_held && !self.deceive_was_held {
            commands.push(FencerCommand::Deceive(1.0));
        }
        self.deceive_was_held = frame.deceive_held;

        if frame.parry_trigger > config.parry_trigger_deadzone {
            commands.push(FencerCommand::Parry(frame.parry_trigger.min(1.0)));
        }

        if frame.advance_stick.abs() > config.advance_stick_deadzone {
            commands.push(FencerCommand::Advance(frame.advance_stick.clamp(-1.0, 1.0)));
        }

        commands.push(FencerCommand::Pose(clamp_radial(frame.pose_stick)));
        commands
    }

    /// Like `sample`, tagged with this mapper's side for `Bout::tick`
    pub fn sample_for_bout(
        &mut self,
        frame: &ControlFrame,
        config: &DuelConfig,
    ) -> Vec<(Side, FencerCommand)> {
        let side = self.side;
        self.sample(frame, config)
            .into_iter()
            .map(|command| (side, command))
            .collect()
    }
}
