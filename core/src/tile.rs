use serde::{Deserialize, Serialize};

/// Ground truth of a single cell, never shown to the player while the game runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Empty,
    Mine,
}

impl CellKind {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// Player-visible state of a cell.
///
/// `Mine` only appears once a game has been lost, for every mine on the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCell {
    #[default]
    Hidden,
    Revealed(u8),
    Mine,
}

impl VisibleCell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }
}
