use crate::*;

use alloc::vec::Vec;

pub use random::*;

mod random;

/// Strategy that decides which cells hold hazards.
///
/// The board validates whatever a placer hands back (bounds, distinctness,
/// exact count) before committing it to the grid.
pub trait HazardPlacer {
    fn place(self, config: &BoardConfig) -> Vec<Coord2>;
}

/// Replays an explicit layout, for tests and front ends that restage a known
/// board.
impl HazardPlacer for &[Coord2] {
    fn place(self, _config: &BoardConfig) -> Vec<Coord2> {
        self.to_vec()
    }
}
