//! Fencing Duel - frame-synchronous combat core for a two-fencer dueling game

pub mod combat;
pub mod core;
pub mod duel;
pub mod geometry;
pub mod input;
pub mod pose;
