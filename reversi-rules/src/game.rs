//! Implements game-level Reversi logic: whose turn it is, forced passes,
//! and the end of the game.
//!
//! [`Game`] is the safe entry point for a presentation layer. Every
//! placement goes through [`Game::attempt_move`], which either applies the
//! move completely and settles the next turn, or rejects it and changes
//! nothing.

use crate::board::{Board, Score};
use crate::error::MoveError;
use crate::location::{Location, LocationList};
use derive_more::Display;
use log::{debug, info, trace};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// The final result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Outcome {
    pub score: Score,
}

impl Outcome {
    /// The player with more stones, or `None` for a draw.
    pub fn winner(self) -> Option<Player> {
        self.score.leader()
    }
}

impl fmt::Display for Outcome {
    /// "Black wins (40 to 24)", "Draw (32 to 32)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(winner) => write!(
                f,
                "{} wins ({} to {})",
                winner,
                self.score.of(winner),
                self.score.of(!winner)
            ),
            None => write!(f, "Draw ({} to {})", self.score.black, self.score.white),
        }
    }
}

/// A forced pass: `player` had no legal placement and the turn stays with
/// the other side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PassEvent {
    pub player: Player,
}

impl PassEvent {
    /// The player who moves again.
    pub fn continues(self) -> Player {
        !self.player
    }
}

impl fmt::Display for PassEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has no legal moves and passes. {} plays again.",
            self.player,
            self.continues()
        )
    }
}

/// Where the game stands between placements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    AwaitingMove(Player),
    Ended(Outcome),
}

/// Everything a presentation layer needs to redraw after an accepted placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub player: Player,
    pub placed: Location,
    pub captured: LocationList,
    /// The board after the placement.
    pub board: Board,
    /// The state after the placement, with any pass already applied.
    pub status: GameStatus,
    /// Set when the opponent had to pass.
    pub pass: Option<PassEvent>,
}

impl MoveReport {
    /// The player to move next, or `None` if the game ended.
    pub fn next_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::AwaitingMove(player) => Some(player),
            GameStatus::Ended(_) => None,
        }
    }

    /// The final result, if this placement ended the game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::AwaitingMove(_) => None,
            GameStatus::Ended(outcome) => Some(outcome),
        }
    }
}

/// The complete state of one Reversi game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    status: GameStatus,
    pass: Option<PassEvent>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start a new game from the canonical position with Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::AwaitingMove(Player::default()),
            pass: None,
        }
    }

    /// Build a game from an arbitrary position with `active` nominally to move.
    /// If `active` cannot move the turn passes to the other side, and if
    /// neither can move (or the board is full) the game is already over.
    /// A pass forced this way is available from [`Game::last_pass`].
    pub fn from_position(board: Board, active: Player) -> Self {
        let (status, pass) = next_status(board, !active);
        if let Some(pass) = pass {
            info!("{}", pass);
        }
        Self {
            board,
            status,
            pass,
        }
    }

    /// Discard the current game and return to the starting position.
    pub fn reset(&mut self) {
        debug!("starting a new game");
        *self = Self::new();
    }

    /// A snapshot of the board.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player to move, or `None` once the game has ended.
    pub fn active_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::AwaitingMove(player) => Some(player),
            GameStatus::Ended(_) => None,
        }
    }

    /// The final result, once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::AwaitingMove(_) => None,
            GameStatus::Ended(outcome) => Some(outcome),
        }
    }

    /// The pass forced by the most recent transition, if any.
    #[inline]
    pub fn last_pass(&self) -> Option<PassEvent> {
        self.pass
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// The current stone counts.
    #[inline]
    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// Every cell where `player` could place now. Empty once the game has ended.
    pub fn legal_moves(&self, player: Player) -> LocationList {
        if self.is_finished() {
            LocationList::EMPTY
        } else {
            self.board.legal_moves(player)
        }
    }

    /// Place a stone for `player` at `loc`.
    ///
    /// On success the captures are applied and the next turn is settled:
    /// the opponent moves if they can, otherwise they pass and `player`
    /// continues, and if neither side can move (or the board is full) the
    /// game ends. On error nothing changes.
    pub fn attempt_move(&mut self, loc: Location, player: Player) -> Result<MoveReport, MoveError> {
        let active = match self.status {
            GameStatus::AwaitingMove(active) => active,
            GameStatus::Ended(_) => return Err(reject(MoveError::GameOver)),
        };

        if player != active {
            return Err(reject(MoveError::WrongPlayer {
                expected: active,
                found: player,
            }));
        }

        if self.board.get(loc).player().is_some() {
            return Err(reject(MoveError::Occupied { location: loc }));
        }

        let outcome = self.board.commit(loc, player);
        if !outcome.legal {
            return Err(reject(MoveError::Illegal { location: loc }));
        }
        debug!(
            "{} placed at {}, capturing {}",
            player, loc, outcome.captured
        );

        let (status, pass) = next_status(self.board, player);
        self.status = status;
        self.pass = pass;

        if let Some(pass) = pass {
            info!("{}", pass);
        }
        if let GameStatus::Ended(result) = status {
            info!("game over: {}", result);
        }

        Ok(MoveReport {
            player,
            placed: loc,
            captured: outcome.captured,
            board: self.board,
            status,
            pass,
        })
    }

    /// Coordinate form of [`Game::attempt_move`]; rejects coordinates off the board.
    pub fn attempt_move_at(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<MoveReport, MoveError> {
        let loc = Location::try_from_coords(row, col).map_err(|err| reject(err.into()))?;
        self.attempt_move(loc, player)
    }
}

fn reject(err: MoveError) -> MoveError {
    trace!("rejected placement: {}", err);
    err
}

/// Settle the turn after `mover` has placed a stone on `board`.
fn next_status(board: Board, mover: Player) -> (GameStatus, Option<PassEvent>) {
    let ended = GameStatus::Ended(Outcome {
        score: board.score(),
    });

    if board.is_full() {
        return (ended, None);
    }

    let opponent = !mover;
    if board.has_legal_move(opponent) {
        (GameStatus::AwaitingMove(opponent), None)
    } else if board.has_legal_move(mover) {
        (
            GameStatus::AwaitingMove(mover),
            Some(PassEvent { player: opponent }),
        )
    } else {
        (ended, None)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.board.to_string())?;
        match self.status {
            GameStatus::AwaitingMove(player) => writeln!(f, "Turn: {}", player),
            GameStatus::Ended(outcome) => writeln!(f, "Game over. {}", outcome),
        }
    }
}
