#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use placer::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod placer;
mod types;

/// Validated board parameters: side length of the square grid and the number
/// of hazards hidden on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    size: Coord,
    hazards: CellCount,
}

impl BoardConfig {
    /// Largest playable side length.
    pub const MAX_SIZE: Coord = 40;

    /// Checks both parameter ranges: the side must fit `1..=MAX_SIZE`, and at
    /// least one safe cell must exist.
    pub fn new(size: Coord, hazards: CellCount) -> Result<Self> {
        if size == 0 || size > Self::MAX_SIZE {
            return Err(GameError::InvalidSize);
        }
        if hazards == 0 || hazards > area(size) - 1 {
            return Err(GameError::InvalidHazardCount);
        }
        Ok(Self { size, hazards })
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn hazards(&self) -> CellCount {
        self.hazards
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.hazards
    }
}

/// Result of a flag or unflag request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Result of a reveal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitHazard,
    Won,
}

impl RevealOutcome {
    /// A move is successful unless it uncovered a hazard.
    pub const fn is_successful(self) -> bool {
        !matches!(self, Self::HitHazard)
    }

    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitHazard => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_and_oversized_boards() {
        assert_eq!(BoardConfig::new(0, 10), Err(GameError::InvalidSize));
        assert_eq!(
            BoardConfig::new(BoardConfig::MAX_SIZE + 1, 10),
            Err(GameError::InvalidSize)
        );
        assert!(BoardConfig::new(BoardConfig::MAX_SIZE, 10).is_ok());
    }

    #[test]
    fn config_rejects_out_of_range_hazard_counts() {
        assert_eq!(BoardConfig::new(20, 0), Err(GameError::InvalidHazardCount));
        assert_eq!(
            BoardConfig::new(20, 400),
            Err(GameError::InvalidHazardCount)
        );
        assert!(BoardConfig::new(20, 399).is_ok());
    }

    #[test]
    fn one_by_one_board_cannot_be_configured() {
        // max hazards is size^2 - 1 = 0, so every count is out of range
        for hazards in [1, 2, u16::MAX] {
            assert_eq!(BoardConfig::new(1, hazards), Err(GameError::InvalidHazardCount));
        }
        assert_eq!(BoardConfig::new(1, 0), Err(GameError::InvalidHazardCount));
    }

    #[test]
    fn derived_cell_counts() {
        let config = BoardConfig::new(10, 10).unwrap();
        assert_eq!(config.total_cells(), 100);
        assert_eq!(config.safe_cells(), 90);
    }
}
