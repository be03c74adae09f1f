//! Hand-built positions exercising passes and the end of the game.

use crate::Board;

fn parse(text: &str) -> Board {
    text.parse().expect("fixture boards are well formed")
}

/// Black to move. Playing C1 captures B1 and leaves White without a move
/// while Black can still play C8, so White must pass.
pub fn white_must_pass() -> Board {
    parse(
        "XO......
         ........
         ........
         ........
         ........
         ........
         ........
         XO......",
    )
}

/// Black to move. Playing C1 removes White's last stone, after which
/// neither side can move on a board that is far from full.
pub fn lockout_after_capture() -> Board {
    parse(
        "XO......
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    )
}

/// Neither side can move, yet most of the board is empty.
pub fn mutual_lockout() -> Board {
    parse(
        "X.......
         ........
         ........
         ........
         ........
         ........
         ........
         .......O",
    )
}

/// Every cell but H8 is filled. Black playing H8 captures seven stones (G8, H5 to H7
/// and the E5 to G7 diagonal) and fills the board.
pub fn one_move_to_full() -> Board {
    parse(
        "XXXXXXXX
         XXXXXXXX
         XXXXXXXX
         XXXXXXXX
         OOOOOOOO
         OOOOOOOO
         OOOOOOOO
         XXXXXXO.",
    )
}

/// Every cell is black.
pub fn all_black() -> Board {
    parse(&"X".repeat(64))
}
