#![no_std]

extern crate alloc;

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use render::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod layout;
mod render;
mod tile;
mod types;

/// Side length and mine count of a square board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    size: Coord,
    mines: CellCount,
}

#[derive(Deserialize)]
struct RawGameConfig {
    size: Coord,
    mines: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.size, raw.mines)
    }
}

impl GameConfig {
    pub(crate) const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Requires at least one mine and at least one safe cell.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 || mines == 0 || mines >= square(size) {
            return Err(GameError::InvalidDifficulty);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::new_unchecked(9, 10),
            Self::Intermediate => GameConfig::new_unchecked(16, 40),
            Self::Advanced => GameConfig::new_unchecked(24, 99),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

/// Numeric levels `0`, `1` and `2`, easiest first.
impl TryFrom<u8> for Difficulty {
    type Error = GameError;

    fn try_from(level: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(level))
            .copied()
            .ok_or(GameError::InvalidDifficulty)
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(level) = s.parse::<u8>() {
            return Self::try_from(level);
        }
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or(GameError::InvalidDifficulty)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Successful result of a single reveal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealResult {
    /// The game continues; `disclosed` cells were uncovered by this move.
    InProgress { disclosed: CellCount },
    Won,
    Lost,
}

impl RevealResult {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_classic_levels() {
        assert_eq!(Difficulty::Beginner.config(), GameConfig::new(9, 10).unwrap());
        assert_eq!(
            Difficulty::Intermediate.config(),
            GameConfig::new(16, 40).unwrap()
        );
        assert_eq!(Difficulty::Advanced.config(), GameConfig::new(24, 99).unwrap());
        assert_eq!(Difficulty::Advanced.config().safe_cells(), 576 - 99);
    }

    #[test]
    fn numeric_levels_parse() {
        assert_eq!(Difficulty::try_from(0), Ok(Difficulty::Beginner));
        assert_eq!(Difficulty::try_from(2), Ok(Difficulty::Advanced));
        assert_eq!(Difficulty::try_from(3), Err(GameError::InvalidDifficulty));
        assert_eq!("1".parse::<Difficulty>(), Ok(Difficulty::Intermediate));
        assert_eq!("-1".parse::<Difficulty>(), Err(GameError::InvalidDifficulty));
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(" Beginner ".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert_eq!("ADVANCED".parse::<Difficulty>(), Ok(Difficulty::Advanced));
        assert_eq!("expert".parse::<Difficulty>(), Err(GameError::InvalidDifficulty));
        assert_eq!("".parse::<Difficulty>(), Err(GameError::InvalidDifficulty));
    }

    #[test]
    fn malformed_configs_are_rejected() {
        assert_eq!(GameConfig::new(0, 1), Err(GameError::InvalidDifficulty));
        assert_eq!(GameConfig::new(3, 0), Err(GameError::InvalidDifficulty));
        assert_eq!(GameConfig::new(3, 9), Err(GameError::InvalidDifficulty));
        assert!(GameConfig::new(3, 8).is_ok());
    }

    #[test]
    fn deserialized_configs_are_validated() {
        let parse = |json: &str| serde_json::from_str::<GameConfig>(json);

        assert_eq!(
            parse(r#"{"size":9,"mines":10}"#).unwrap(),
            Difficulty::Beginner.config()
        );
        assert!(parse(r#"{"size":0,"mines":0}"#).is_err());
        assert!(parse(r#"{"size":3,"mines":0}"#).is_err());
        assert!(parse(r#"{"size":3,"mines":9}"#).is_err());
        assert!(parse(r#"{"size":3,"mines":400}"#).is_err());
    }
}
