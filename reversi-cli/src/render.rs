//! Text rendering of engine state and events.

use crate::config::{CliConfig, Glyphs};
use reversi_rules::{
    Cell, Game, GameStatus, Location, LocationList, MoveError, MoveReport, Outcome, Player,
};

/// Draws boards and messages using the configured glyphs.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    glyphs: Glyphs,
    hints: bool,
}

impl Renderer {
    pub fn new(config: &CliConfig) -> Self {
        Self {
            glyphs: config.glyphs,
            hints: config.hints,
        }
    }

    /// The board with column and row labels. When hints are on, the active
    /// player's legal cells are marked.
    pub fn board(&self, game: &Game) -> String {
        let hints = match (self.hints, game.active_player()) {
            (true, Some(player)) => game.legal_moves(player),
            _ => LocationList::EMPTY,
        };

        let mut out = String::from("   A B C D E F G H\n");
        for (row, cells) in game.board().cells().iter().enumerate() {
            out.push_str(&format!(" {} ", row + 1));
            for (col, cell) in cells.iter().enumerate() {
                let glyph = match cell {
                    Cell::Black => self.glyphs.black,
                    Cell::White => self.glyphs.white,
                    Cell::Empty if hints.contains(Location::from_coords(row, col)) => self.glyphs.hint,
                    Cell::Empty => self.glyphs.empty,
                };
                out.push(glyph);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    /// "Turn: Black (X)  Black 2 - White 2", or the end-of-game banner.
    pub fn status(&self, game: &Game) -> String {
        let score = game.score();
        match game.status() {
            GameStatus::AwaitingMove(player) => format!(
                "Turn: {} ({})  Black {} - White {}",
                player,
                self.glyph(player),
                score.black,
                score.white
            ),
            GameStatus::Ended(outcome) => self.banner(outcome),
        }
    }

    /// Lines to announce after an accepted placement.
    pub fn report(&self, report: &MoveReport) -> Vec<String> {
        let mut lines = vec![format!(
            "{} plays {} and flips {}.",
            report.player,
            report.placed,
            report.captured.len()
        )];
        if let Some(pass) = report.pass {
            lines.push(pass.to_string());
        }
        if let Some(outcome) = report.outcome() {
            lines.push(self.banner(outcome));
        }
        lines
    }

    /// A message explaining why a placement was refused.
    pub fn rejection(&self, err: &MoveError) -> String {
        match err {
            MoveError::Occupied { .. } => format!("A stone is already there: {}.", err),
            MoveError::Illegal { .. } => format!(
                "You cannot place there: {}. Place where you sandwich your opponent's stones.",
                err
            ),
            _ => format!("Move rejected: {}.", err),
        }
    }

    /// The active player's legal cells, for the `moves` command.
    pub fn moves(&self, game: &Game) -> String {
        match game.active_player() {
            Some(player) => format!("Legal moves for {}: {}", player, game.legal_moves(player)),
            None => "The game is over.".to_string(),
        }
    }

    fn banner(&self, outcome: Outcome) -> String {
        format!("Game over! {}", outcome)
    }

    fn glyph(&self, player: Player) -> char {
        match player {
            Player::Black => self.glyphs.black,
            Player::White => self.glyphs.white,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_rules::Board;

    fn renderer(hints: bool) -> Renderer {
        Renderer::new(&CliConfig {
            hints,
            ..CliConfig::default()
        })
    }

    #[test]
    fn board_without_hints() {
        let text = renderer(false).board(&Game::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[3], " 3 . . . . . . . . ");
        assert_eq!(lines[4], " 4 . . . O X . . . ");
        assert_eq!(lines[5], " 5 . . . X O . . . ");
    }

    #[test]
    fn board_with_hints() {
        let text = renderer(true).board(&Game::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], " 3 . . . * . . . . ");
        assert_eq!(lines[4], " 4 . . * O X . . . ");
    }

    #[test]
    fn status_line() {
        assert_eq!(
            renderer(false).status(&Game::new()),
            "Turn: Black (X)  Black 2 - White 2"
        );

        let board: Board = "X".repeat(64).parse().unwrap();
        let over = Game::from_position(board, Player::Black);
        assert_eq!(
            renderer(false).status(&over),
            "Game over! Black wins (64 to 0)"
        );
    }

    #[test]
    fn report_lines() {
        let mut game = Game::new();
        let report = game
            .attempt_move(Location::from_coords(2, 3), Player::Black)
            .unwrap();
        assert_eq!(
            renderer(false).report(&report),
            vec!["Black plays D3 and flips 1.".to_string()]
        );
    }

    #[test]
    fn rejection_messages() {
        let err = MoveError::Occupied {
            location: Location::from_coords(3, 3),
        };
        assert_eq!(
            renderer(false).rejection(&err),
            "A stone is already there: D4 is already occupied."
        );
    }
}
