use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Repeatedly scans the grid in row-major order, turning each empty cell into a mine with probability
/// `mines / cells`, until the requested count is reached.
///
/// This is rejection sampling, not a uniform sample over all possible layouts: cells early in the scan are
/// favoured, on beginner boards the top rows end up with roughly 1.6 times the mines of the bottom rows.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanGenerator<R> {
    rng: R,
}

impl<R: Rng> ScanGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl ScanGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MineLayoutGenerator for ScanGenerator<R> {
    fn generate(mut self, config: GameConfig) -> MineLayout {
        let size = config.size();
        let target = config.mines();

        let mut cells: Array2<CellKind> = Array2::default((size, size).to_nd_index());
        let probability = f64::from(target) / f64::from(config.total_cells());
        let mut placed: CellCount = 0;
        let mut passes: u32 = 0;

        while placed < target {
            passes += 1;
            for cell in cells.iter_mut() {
                if placed == target {
                    break;
                }
                if self.rng.random::<f64>() <= probability && !cell.is_mine() {
                    *cell = CellKind::Mine;
                    placed += 1;
                }
            }
        }

        log::debug!(
            "Placed {} mines on a {}x{} board in {} passes",
            placed,
            size,
            size,
            passes
        );
        MineLayout::from_parts(cells, placed)
    }
}
