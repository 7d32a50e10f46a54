use alloc::collections::VecDeque;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Single game from the first reveal to a win or loss.
///
/// Once finished the board is frozen: every further [`GameEngine::reveal`] fails with
/// [`GameError::GameOver`], but the final grid stays available for [`GameEngine::snapshot`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGameEngine")]
pub struct GameEngine {
    board: Board,
    first_move_taken: bool,
    revealed_count: CellCount,
    move_count: u32,
    outcome: Outcome,
    triggered_mine: Option<Coord2>,
}

#[derive(Deserialize)]
struct RawGameEngine {
    board: Board,
    first_move_taken: bool,
    revealed_count: CellCount,
    move_count: u32,
    outcome: Outcome,
    triggered_mine: Option<Coord2>,
}

impl TryFrom<RawGameEngine> for GameEngine {
    type Error = GameError;

    fn try_from(raw: RawGameEngine) -> Result<Self> {
        let cleared = raw.revealed_count == raw.board.safe_cell_count();
        if raw.revealed_count != raw.board.count_revealed()
            || cleared != (raw.outcome == Outcome::Won)
        {
            return Err(GameError::InvalidBoardState);
        }
        Ok(Self {
            board: raw.board,
            first_move_taken: raw.first_move_taken,
            revealed_count: raw.revealed_count,
            move_count: raw.move_count,
            outcome: raw.outcome,
            triggered_mine: raw.triggered_mine,
        })
    }
}

impl GameEngine {
    pub fn new_game(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_generator(difficulty.config(), ScanGenerator::from_seed(seed))
    }

    pub fn with_generator(config: GameConfig, generator: impl MineLayoutGenerator) -> Self {
        Self::from_layout(generator.generate(config))
    }

    pub fn from_layout(layout: MineLayout) -> Self {
        log::debug!(
            "New {}x{} game with {} mines",
            layout.size(),
            layout.size(),
            layout.mine_count()
        );
        Self {
            board: Board::new(layout),
            first_move_taken: false,
            revealed_count: 0,
            move_count: 0,
            outcome: Outcome::default(),
            triggered_mine: None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.board.layout().config()
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// Reveals that changed the board, including the one that ended the game.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn first_move_taken(&self) -> bool {
        self.first_move_taken
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<VisibleCell> {
        self.board.cell_at(coords)
    }

    /// The mine that ended a lost game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_board(&self.board)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        self.check_not_finished()?;
        let coords = self.board.validate_coords(coords)?;

        if !self.board.visible_at(coords).is_hidden() {
            return Err(GameError::AlreadyRevealed);
        }

        if self.board.contains_mine(coords) {
            if !self.first_move_taken {
                if let Some(moved_to) = self.board.relocate_mine_away_from(coords) {
                    log::debug!("First move on a mine at {:?}, moved it to {:?}", coords, moved_to);
                }
                self.first_move_taken = true;
                return self.reveal(coords);
            }

            self.move_count += 1;
            self.lose(coords);
            return Ok(RevealResult::Lost);
        }

        self.first_move_taken = true;
        self.move_count += 1;
        let disclosed = self.cascade(coords);

        if self.revealed_count == self.board.safe_cell_count() {
            self.outcome = Outcome::Won;
            log::debug!("Game won after {} moves", self.move_count);
            Ok(RevealResult::Won)
        } else {
            Ok(RevealResult::InProgress { disclosed })
        }
    }

    /// Reveals `start` and floods outwards through zero-count cells, returning how many cells were uncovered.
    ///
    /// Only ever called on a mine-free cell; neighbors of a zero-count cell are mine-free by definition.
    pub(crate) fn cascade(&mut self, start: Coord2) -> CellCount {
        if self.board.validate_coords(start).is_err() {
            return 0;
        }

        let mut disclosed: CellCount = 0;
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            if !self.board.visible_at(coords).is_hidden() {
                continue;
            }

            let adjacent_mines = self.board.adjacent_mine_count(coords);
            self.board.set_revealed(coords, adjacent_mines);
            disclosed += 1;
            log::trace!("Revealed {:?}, adjacent mines: {}", coords, adjacent_mines);

            if adjacent_mines == 0 {
                to_visit.extend(
                    self.board
                        .iter_neighbors(coords)
                        .filter(|&pos| self.board.visible_at(pos).is_hidden()),
                );
            }
        }

        self.revealed_count += disclosed;
        disclosed
    }

    fn lose(&mut self, coords: Coord2) {
        self.triggered_mine = Some(coords);
        self.board.show_mines();
        self.outcome = Outcome::Lost;
        log::debug!("Game lost on {:?} after {} moves", coords, self.move_count);
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.outcome.is_finished() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
