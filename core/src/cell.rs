use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// What a cell holds, fixed at placement time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Hazard,
    Safe,
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Open,
    Flagged,
}

/// A single grid position: content, visibility, and the hazard count of its
/// neighborhood once the cell has been opened.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    content: CellContent,
    visibility: Visibility,
    adjacent_hazards: u8,
}

impl Cell {
    /// A cell has at most 8 neighbors.
    pub const MAX_ADJACENT: u8 = 8;

    pub const fn new(content: CellContent, visibility: Visibility) -> Self {
        Self {
            content,
            visibility,
            adjacent_hazards: 0,
        }
    }

    pub const fn content(self) -> CellContent {
        self.content
    }

    pub const fn visibility(self) -> Visibility {
        self.visibility
    }

    /// Meaningful only once the cell is open.
    pub const fn adjacent_hazards(self) -> u8 {
        self.adjacent_hazards
    }

    pub const fn is_hazard(self) -> bool {
        matches!(self.content, CellContent::Hazard)
    }

    pub const fn is_open(self) -> bool {
        matches!(self.visibility, Visibility::Open)
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self.visibility, Visibility::Hidden)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self.visibility, Visibility::Flagged)
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Records the neighborhood hazard count. A count above
    /// [`MAX_ADJACENT`](Self::MAX_ADJACENT) cannot come from a real
    /// neighborhood and is rejected as an internal-consistency failure.
    pub fn set_adjacent_hazards(&mut self, count: u8) -> Result<()> {
        if count > Self::MAX_ADJACENT {
            return Err(GameError::AdjacentOverflow(count));
        }
        self.adjacent_hazards = count;
        Ok(())
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(CellContent::Safe, Visibility::Hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_hidden_and_safe() {
        let cell = Cell::default();
        assert_eq!(cell.content(), CellContent::Safe);
        assert_eq!(cell.visibility(), Visibility::Hidden);
        assert_eq!(cell.adjacent_hazards(), 0);
    }

    #[test]
    fn adjacency_count_accepts_the_full_neighborhood() {
        let mut cell = Cell::new(CellContent::Safe, Visibility::Open);
        assert_eq!(cell.set_adjacent_hazards(Cell::MAX_ADJACENT), Ok(()));
        assert_eq!(cell.adjacent_hazards(), 8);
    }

    #[test]
    fn adjacency_count_rejects_more_than_eight() {
        let mut cell = Cell::new(CellContent::Safe, Visibility::Open);
        assert_eq!(
            cell.set_adjacent_hazards(9),
            Err(GameError::AdjacentOverflow(9))
        );
        assert_eq!(cell.adjacent_hazards(), 0);
    }

    #[test]
    fn content_is_fixed_at_construction() {
        let cell = Cell::new(CellContent::Hazard, Visibility::Hidden);
        assert!(cell.is_hazard());
        assert!(cell.is_hidden());
        assert!(!cell.is_open());
    }
}
