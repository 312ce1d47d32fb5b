//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Game tick counter (one tick per rendered frame)
pub type Tick = u64;

/// Which end of the piste a fencer stands on.
///
/// Doubles as the fencer's slot in the bout arena: `Left` is slot 0, `Right` is slot 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides in slot order
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Slot index in the bout arena
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// The fencer on the other end of the piste
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// +1 for the left fencer, -1 for the right fencer.
    ///
    /// Converts "toward the opponent" into world X.
    pub fn facing(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" => Ok(Side::Right),
            other => Err(format!("unknown side '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_slots() {
        assert_eq!(Side::Left.index(), 0);
        assert_eq!(Side::Right.index(), 1);
        for side in Side::ALL {
            assert_eq!(Side::ALL[side.index()], side);
        }
    }

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.opponent(), Side::Left);
        assert_eq!(Side::Left.opponent().opponent(), Side::Left);
    }

    #[test]
    fn test_facing_sign() {
        assert_eq!(Side::Left.facing(), 1.0);
        assert_eq!(Side::Right.facing(), -1.0);
    }

    #[test]
    fn test_parse_side() {
        assert_eq!("left".parse::<Side>(), Ok(Side::Left));
        assert_eq!("R".parse::<Side>(), Ok(Side::Right));
        assert!("middle".parse::<Side>().is_err());
    }
}
