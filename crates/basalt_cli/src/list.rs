//! `basalt list` — enumerate the board registry.

use crate::GlobalArgs;
use basalt_boards::{load_board, BoardRequest, BOARD_NAMES};
use std::error::Error;

/// Runs the `basalt list` command.
pub fn run(_global: &GlobalArgs) -> Result<i32, Box<dyn Error>> {
    for name in BOARD_NAMES {
        let board = load_board(name, BoardRequest::default())?;
        println!(
            "{name:<20} {:<12} {:<8} {}",
            board.device(),
            board.package(),
            board.toolchain().name()
        );
    }
    Ok(0)
}
