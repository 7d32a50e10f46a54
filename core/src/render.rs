use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Displayable copy of the visible grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    cells: Array2<VisibleCell>,
}

impl Snapshot {
    pub fn from_board(board: &Board) -> Self {
        Self {
            cells: board.visible().clone(),
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<VisibleCell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = VisibleCell> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}

impl fmt::Display for VisibleCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => f.write_str("-"),
            Self::Revealed(count) => write!(f, "{count}"),
            Self::Mine => f.write_str("*"),
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current status of the board: ")?;
        write!(f, "   ")?;
        for col in 0..self.size() {
            write!(f, "{col}  ")?;
        }
        writeln!(f)?;

        for (row, cells) in self.rows().enumerate() {
            write!(f, "{row}  ")?;
            for cell in cells {
                write!(f, "{cell}  ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
