use hashbrown::HashSet;

use super::*;

/// Uniform placement without replacement: sample a random cell, resample on
/// collision, until the configured count is reached. The loop terminates
/// because a valid config keeps at least one cell free of hazards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomPlacer {
    seed: u64,
}

impl RandomPlacer {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl HazardPlacer for RandomPlacer {
    fn place(self, config: &BoardConfig) -> Vec<Coord2> {
        use rand::prelude::*;

        let wanted = usize::from(config.hazards());
        let mut taken: HashSet<Coord2> = HashSet::with_capacity(wanted);
        let mut coords = Vec::with_capacity(wanted);

        let mut rng = SmallRng::seed_from_u64(self.seed);
        while coords.len() < wanted {
            let candidate = (
                rng.random_range(0..config.size()),
                rng.random_range(0..config.size()),
            );
            if taken.insert(candidate) {
                coords.push(candidate);
            }
        }

        coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(size: Coord, hazards: CellCount, seed: u64) -> Vec<Coord2> {
        let config = BoardConfig::new(size, hazards).unwrap();
        RandomPlacer::new(seed).place(&config)
    }

    #[test]
    fn places_exactly_the_configured_count() {
        for (size, hazards) in [(5, 1), (10, 10), (40, 400)] {
            assert_eq!(placed(size, hazards, 7).len(), usize::from(hazards));
        }
    }

    #[test]
    fn placed_coordinates_are_distinct_and_in_bounds() {
        let coords = placed(8, 20, 99);
        let unique: HashSet<Coord2> = coords.iter().copied().collect();
        assert_eq!(unique.len(), coords.len());
        for (x, y) in coords {
            assert!(x < 8 && y < 8);
        }
    }

    #[test]
    fn maximum_density_still_terminates() {
        // 24 hazards on 25 cells, the worst case for rejection sampling
        let coords = placed(5, 24, 3);
        assert_eq!(coords.len(), 24);
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        assert_eq!(placed(12, 30, 42), placed(12, 30, 42));
    }
}
