//! The bout: two fencer slots, the shared blade state, and the frame tick

pub mod bout;
pub mod events;
pub mod script;
pub mod stats;
pub mod sync;
pub mod tick;

pub use bout::Bout;
pub use events::BoutEvent;
pub use script::{BoutScript, ScriptStep};
pub use stats::BoutStats;
pub use sync::MatchState;
pub use tick::run_bout_tick;
