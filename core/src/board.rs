use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Truth grid plus the player-visible grid; both always share dimensions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    layout: MineLayout,
    visible: Array2<VisibleCell>,
}

#[derive(Deserialize)]
struct RawBoard {
    layout: MineLayout,
    visible: Array2<VisibleCell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(RawBoard { layout, visible }: RawBoard) -> Result<Self> {
        let size = usize::from(layout.size());
        if visible.dim() != (size, size) {
            return Err(GameError::InvalidBoardShape);
        }
        let revealed_mine = visible.indexed_iter().any(|((row, col), cell)| {
            cell.is_revealed() && layout.contains_mine((row as Coord, col as Coord))
        });
        if revealed_mine {
            return Err(GameError::InvalidBoardState);
        }
        Ok(Self { layout, visible })
    }
}

impl Board {
    pub fn new(layout: MineLayout) -> Self {
        let size = layout.size();
        Self {
            layout,
            visible: Array2::default((size, size).to_nd_index()),
        }
    }

    /// Places `config.mines()` mines with the scan generator drawing from `rng`.
    pub fn place_mines<R: Rng>(config: GameConfig, rng: R) -> Self {
        Self::new(ScanGenerator::new(rng).generate(config))
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }

    pub fn size(&self) -> Coord {
        self.layout.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.layout.mine_count()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.layout.safe_cell_count()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.layout.validate_coords(coords)
    }

    pub(crate) fn contains_mine(&self, coords: Coord2) -> bool {
        self.layout.contains_mine(coords)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.layout.adjacent_mine_count(coords)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.layout.iter_neighbors(coords)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<VisibleCell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.visible_at(coords))
    }

    pub(crate) fn visible_at(&self, coords: Coord2) -> VisibleCell {
        self.visible[coords.to_nd_index()]
    }

    pub(crate) fn visible(&self) -> &Array2<VisibleCell> {
        &self.visible
    }

    /// Counts revealed cells by scanning the visible grid.
    pub fn count_revealed(&self) -> CellCount {
        let count = self.visible.iter().filter(|cell| cell.is_revealed()).count();
        count.try_into().unwrap_or(CellCount::MAX)
    }

    pub(crate) fn relocate_mine_away_from(&mut self, coords: Coord2) -> Option<Coord2> {
        self.layout.relocate_mine_away_from(coords)
    }

    pub(crate) fn set_revealed(&mut self, coords: Coord2, adjacent_mines: u8) {
        self.visible[coords.to_nd_index()] = VisibleCell::Revealed(adjacent_mines);
    }

    /// Marks every mine on the visible grid for the final display.
    pub(crate) fn show_mines(&mut self) {
        let Self { layout, visible } = self;
        for coords in layout.iter_mines() {
            visible[coords.to_nd_index()] = VisibleCell::Mine;
        }
    }
}
