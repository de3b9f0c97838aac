use ndarray::Array2;

/// Single coordinate axis used for the board side length and positions.
pub type Coord = u8;

/// Count type used for hazard counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a square board with the given side length.
pub const fn area(side: Coord) -> CellCount {
    let side = side as CellCount;
    side * side
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let side = self.dim().0.try_into().unwrap();
        NeighborIter::new(index, side)
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it stays on the board.
fn apply_delta(coords: Coord2, delta: (isize, isize), side: Coord) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= side {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= side {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterator over the up-to-8 in-bounds neighbors of a cell on a square board.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    side: Coord,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, side: Coord) -> Self {
        Self {
            center,
            side,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.side);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn collect(center: Coord2, side: Coord) -> Vec<Coord2> {
        NeighborIter::new(center, side).collect()
    }

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors = collect((0, 0), 3);
        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(collect((1, 0), 3).len(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        let neighbors = collect((1, 1), 3);
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn all_neighbors_stay_in_bounds() {
        for x in 0..4 {
            for y in 0..4 {
                for (nx, ny) in collect((x, y), 4) {
                    assert!(nx < 4 && ny < 4);
                }
            }
        }
    }

    #[test]
    fn one_by_one_board_has_no_neighbors() {
        assert!(collect((0, 0), 1).is_empty());
    }
}
