use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The truth grid: where the mines are.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMineLayout")]
pub struct MineLayout {
    cells: Array2<CellKind>,
    mine_count: CellCount,
}

#[derive(Deserialize)]
struct RawMineLayout {
    cells: Array2<CellKind>,
    mine_count: CellCount,
}

impl TryFrom<RawMineLayout> for MineLayout {
    type Error = GameError;

    fn try_from(raw: RawMineLayout) -> Result<Self> {
        let layout = Self::from_cells(raw.cells)?;
        if layout.mine_count != raw.mine_count {
            return Err(GameError::InvalidBoardState);
        }
        Ok(layout)
    }
}

impl MineLayout {
    pub(crate) fn from_parts(cells: Array2<CellKind>, mine_count: CellCount) -> Self {
        Self { cells, mine_count }
    }

    /// Builds a layout with mines at exactly `mine_coords`; duplicates count once.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut cells: Array2<CellKind> = Array2::default((size, size).to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoordinate);
            }
            cells[coords.to_nd_index()] = CellKind::Mine;
        }

        Self::from_cells(cells)
    }

    /// Takes a square grid holding at least one mine and one empty cell.
    pub fn from_cells(cells: Array2<CellKind>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols {
            return Err(GameError::InvalidBoardShape);
        }
        let size: Coord = rows.try_into().map_err(|_| GameError::InvalidDifficulty)?;

        let mine_count = cells
            .iter()
            .filter(|cell| cell.is_mine())
            .count()
            .try_into()
            .map_err(|_| GameError::InvalidDifficulty)?;
        GameConfig::new(size, mine_count)?;

        Ok(Self::from_parts(cells, mine_count))
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoordinate)
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.size())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    /// Number of mines among the in-bounds neighbors, always within `0..=8`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .map(|pos| u8::from(self.contains_mine(pos)))
            .sum()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Mine coordinates in row-major order.
    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    /// Moves the mine at `coords` onto the first empty cell in row-major order.
    ///
    /// Returns where the mine went, or `None` when `coords` held no mine.
    pub fn relocate_mine_away_from(&mut self, coords: Coord2) -> Option<Coord2> {
        if !self.contains_mine(coords) {
            return None;
        }

        let ((row, col), cell) = self
            .cells
            .indexed_iter_mut()
            .find(|(_, cell)| !cell.is_mine())?;
        *cell = CellKind::Mine;
        self.cells[coords.to_nd_index()] = CellKind::Empty;

        Some((row as Coord, col as Coord))
    }
}

impl Index<Coord2> for MineLayout {
    type Output = CellKind;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
