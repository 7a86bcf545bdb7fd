//! `basalt flash` — program a bitstream through the external loader.

use crate::select::resolve_selection;
use crate::{FlashArgs, GlobalArgs};
use basalt_boards::load_board;
use basalt_program::Flasher;
use std::error::Error;
use std::path::PathBuf;

/// Runs the `basalt flash` command.
///
/// The loader's exit status decides the outcome: a nonzero exit becomes a
/// CLI error, never a silent success.
pub fn run(args: &FlashArgs, global: &GlobalArgs) -> Result<i32, Box<dyn Error>> {
    let selection = resolve_selection(&args.board, global)?;

    let bitstream: PathBuf = args
        .bitstream
        .clone()
        .map(PathBuf::from)
        .or(selection.bitstream)
        .ok_or("no bitstream: pass --bitstream or set flash.bitstream in basalt.toml")?;

    let board = load_board(&selection.board, selection.request)?;
    let flasher = Flasher::from_env();

    if !global.quiet {
        eprintln!(
            "   Flashing {} onto {} via {}",
            bitstream.display(),
            board.name(),
            flasher.tool().to_string_lossy()
        );
    }
    if global.verbose {
        eprintln!("   Loader arguments: {:?}", board.programmer().args());
    }

    flasher.program(&board.programmer(), &bitstream)?;

    if !global.quiet {
        eprintln!("   Done");
    }
    Ok(0)
}
