//! Turning sampled controls into fencer commands
//!
//! Device polling and key binding stay outside this crate. A host samples
//! whatever device it has into a `ControlFrame` once per tick and the
//! mapper produces edge-detected commands from it.

pub mod controls;

pub use controls::{ControlFrame, ControlMapper};
