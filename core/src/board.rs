use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::num::Saturating;
use core::ops::Index;

use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Constructed, hazards not placed yet.
    Setup,
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Setup
    }
}

/// One play session: an owned grid of cells, the recorded hazard positions,
/// and the reveal/flag bookkeeping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    grid: Array2<Cell>,
    hazards: Vec<Coord2>,
    remaining_safe: Saturating<CellCount>,
    flagged: Saturating<CellCount>,
    state: GameState,
    triggered_hazard: Option<Coord2>,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        let side = config.size();
        Self {
            config,
            grid: Array2::default((side, side).to_nd_index()),
            hazards: Vec::new(),
            remaining_safe: Saturating(0),
            flagged: Saturating(0),
            state: GameState::default(),
            triggered_hazard: None,
        }
    }

    /// Places the hazards and opens the session for moves. Must be called
    /// exactly once.
    pub fn initialize(&mut self, placer: impl HazardPlacer) -> Result<()> {
        if !matches!(self.state, GameState::Setup) {
            return Err(GameError::AlreadyInitialized);
        }

        let coords = placer.place(&self.config);
        if coords.len() != usize::from(self.config.hazards()) {
            log::warn!(
                "placer produced {} hazards, config wants {}",
                coords.len(),
                self.config.hazards()
            );
            return Err(GameError::PlacementMismatch);
        }
        let mut distinct: HashSet<Coord2> = HashSet::with_capacity(coords.len());
        for &coord in &coords {
            let coord = self.validate_coords(coord)?;
            if !distinct.insert(coord) {
                return Err(GameError::PlacementMismatch);
            }
        }

        for &coord in &coords {
            self.grid[coord.to_nd_index()] = Cell::new(CellContent::Hazard, Visibility::Hidden);
        }

        self.hazards = coords;
        self.remaining_safe = Saturating(self.config.safe_cells());
        self.state = GameState::Playing;
        log::debug!(
            "initialized {0}x{0} board with {1} hazards",
            self.config.size(),
            self.config.hazards()
        );
        Ok(())
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.config.size()
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn hazard_count(&self) -> CellCount {
        self.config.hazards()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// True once every safe cell has been opened.
    pub fn is_won(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn in_bounds(&self, (x, y): Coord2) -> bool {
        x < self.config.size() && y < self.config.size()
    }

    pub fn has_hazard_at(&self, coords: Coord2) -> bool {
        self.grid[coords.to_nd_index()].is_hazard()
    }

    pub fn is_open(&self, coords: Coord2) -> bool {
        self.grid[coords.to_nd_index()].is_open()
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords.to_nd_index()]
    }

    pub fn remaining_safe_cells(&self) -> CellCount {
        self.remaining_safe.0
    }

    pub fn flagged_cells(&self) -> CellCount {
        self.flagged.0
    }

    /// Configured hazard count minus placed flags; negative when the player
    /// has over-flagged.
    pub fn hazards_left(&self) -> isize {
        (self.config.hazards() as isize) - (self.flagged.0 as isize)
    }

    /// The hazard that ended the session, if it ended in a loss.
    pub fn triggered_hazard(&self) -> Option<Coord2> {
        self.triggered_hazard
    }

    /// Marks a hidden cell as a suspected hazard. Open and already-flagged
    /// cells are left alone.
    pub fn flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_initialized()?;

        Ok(match self.grid[coords.to_nd_index()].visibility() {
            Visibility::Hidden => {
                self.grid[coords.to_nd_index()].set_visibility(Visibility::Flagged);
                self.flagged += Saturating(1);
                MarkOutcome::Changed
            }
            Visibility::Open | Visibility::Flagged => MarkOutcome::NoChange,
        })
    }

    /// Returns a flagged cell to hidden. Anything else is left alone.
    pub fn unflag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_initialized()?;

        Ok(match self.grid[coords.to_nd_index()].visibility() {
            Visibility::Flagged => {
                self.grid[coords.to_nd_index()].set_visibility(Visibility::Hidden);
                self.flagged -= Saturating(1);
                MarkOutcome::Changed
            }
            Visibility::Hidden | Visibility::Open => MarkOutcome::NoChange,
        })
    }

    /// Opens a cell. A hazard target discloses every hazard on the board and
    /// loses the session; a safe target opens its zero-adjacency region up to
    /// the numbered boundary. Flags do not shield a cell from being revealed.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_initialized()?;

        if self.grid[coords.to_nd_index()].is_hazard() {
            self.disclose_hazards();
            self.triggered_hazard = Some(coords);
            self.finish(false);
            return Ok(RevealOutcome::HitHazard);
        }

        if self.grid[coords.to_nd_index()].is_open() {
            return Ok(RevealOutcome::NoChange);
        }

        self.expand(coords)?;

        if self.remaining_safe.0 == 0 {
            self.finish(true);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Worklist expansion over an explicit queue with a global visited set,
    /// so every cell is enqueued and processed at most once.
    fn expand(&mut self, start: Coord2) -> Result<()> {
        let mut visited: HashSet<Coord2> = HashSet::new();
        let mut queue = VecDeque::from([start]);

        while let Some(coord) = queue.pop_front() {
            if !visited.insert(coord) {
                continue;
            }
            if self.grid[coord.to_nd_index()].is_open() {
                continue;
            }

            let candidates: SmallVec<[Coord2; 8]> = self
                .grid
                .iter_neighbors(coord)
                .filter(|&pos| !self.grid[pos.to_nd_index()].is_open())
                .collect();
            let adjacent: u8 = candidates
                .iter()
                .filter(|&&pos| self.grid[pos.to_nd_index()].is_hazard())
                .count()
                .try_into()
                .unwrap();

            let cell = &mut self.grid[coord.to_nd_index()];
            cell.set_adjacent_hazards(adjacent)?;
            if cell.is_flagged() {
                self.flagged -= Saturating(1);
            }
            cell.set_visibility(Visibility::Open);
            self.remaining_safe -= Saturating(1);

            // zero-adjacency cells keep expanding; numbered cells are the
            // region boundary
            if adjacent == 0 {
                queue.extend(candidates.into_iter().filter(|pos| !visited.contains(pos)));
            }
        }

        Ok(())
    }

    fn disclose_hazards(&mut self) {
        for &coord in &self.hazards {
            let cell = &mut self.grid[coord.to_nd_index()];
            if cell.is_flagged() {
                self.flagged -= Saturating(1);
            }
            cell.set_visibility(Visibility::Open);
        }
    }

    fn finish(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        if won {
            self.triggered_hazard = None;
        }
    }

    fn check_initialized(&self) -> Result<()> {
        if matches!(self.state, GameState::Setup) {
            Err(GameError::NotInitialized)
        } else {
            Ok(())
        }
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.grid[coords.to_nd_index()]
    }
}
