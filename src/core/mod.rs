pub mod config;
pub mod error;
pub mod types;

pub use config::DuelConfig;
pub use error::{DuelError, Result};
pub use types::{Side, Tick};
