use super::*;

/// Uniform placement by rejection sampling: draw any cell, keep it if it does not hold a mine yet, repeat until the
/// requested count is placed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: RoundConfig) -> MineLayout {
        use rand::{Rng, SeedableRng, rngs::SmallRng};

        let mines = if config.mines > GRID_SIZE {
            log::warn!(
                "Minefield already full, requested {} but only fits {}",
                config.mines,
                GRID_SIZE
            );
            GRID_SIZE
        } else {
            config.mines
        };

        let mut mine_mask: Array2<bool> = Array2::default([usize::from(GRID_SIDE); 2]);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed = 0;
        let mut draws: u32 = 0;

        while mines_placed < mines {
            let index: CellIndex = rng.random_range(0..GRID_SIZE);
            draws += 1;
            let cell = &mut mine_mask[index.to_nd_index()];
            if !*cell {
                *cell = true;
                mines_placed += 1;
            }
        }
        log::trace!("placed {} mines in {} draws", mines_placed, draws);

        MineLayout::from_mine_mask(mine_mask)
    }
}
