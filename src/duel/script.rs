//! Scripted bouts
//!
//! A script lists commands by tick, read from TOML:
//!
//! ```toml
//! ticks = 120
//!
//! [[step]]
//! tick = 0
//! side = "left"
//! command = { take = 1.0 }
//!
//! [[step]]
//! tick = 10
//! side = "right"
//! command = { advance = -1.0 }
//! repeat = 30
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::combat::FencerCommand;
use crate::core::error::{DuelError, Result};
use crate::core::{Side, Tick};

fn default_repeat() -> u64 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// First tick the command fires on
    pub tick: Tick,
    pub side: Side,
    pub command: FencerCommand,
    /// Number of consecutive ticks to repeat the command
    #[serde(default = "default_repeat")]
    pub repeat: u64,
}

impl ScriptStep {
    fn fires_at(&self, tick: Tick) -> bool {
        tick >= self.tick && tick - self.tick < self.repeat
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoutScript {
    /// Total ticks to run
    pub ticks: u64,
    #[serde(default, rename = "step")]
    pub steps: Vec<ScriptStep>,
}

impl BoutScript {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let script: BoutScript = toml::from_str(content)?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        for (i, step) in self.steps.iter().enumerate() {
            if step.repeat == 0 {
                return Err(DuelError::Script(format!("step {} repeats zero times", i)));
            }
            if step.tick >= self.ticks {
                return Err(DuelError::Script(format!(
                    "step {} at tick {} is past the end of the bout ({} ticks)",
                    i, step.tick, self.ticks
                )));
            }
        }
        Ok(())
    }

    /// Commands due on `tick`, in script order
    pub fn commands_at(&self, tick: Tick) -> Vec<(Side, FencerCommand)> {
        self.steps
            .iter()
            .filter(|step| step.fires_at(tick))
            .map(|step| (step.side, step.command))
            .collect()
    }
}
