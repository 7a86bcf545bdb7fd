//! `basalt show` — assemble a board variant and print its final tables.

use crate::select::resolve_selection;
use crate::{GlobalArgs, ReportFormat, ShowArgs};
use basalt_boards::load_board;
use basalt_bsp::ResourceIo;
use std::error::Error;

/// Runs the `basalt show` command.
pub fn run(args: &ShowArgs, global: &GlobalArgs) -> Result<i32, Box<dyn Error>> {
    let selection = resolve_selection(&args.board, global)?;
    let board = load_board(&selection.board, selection.request)?;

    match args.format {
        ReportFormat::Json => {
            let json = serde_json::json!({
                "name": board.name(),
                "device": board.device(),
                "package": board.package(),
                "speed": board.speed(),
                "default_clk": board.default_clk(),
                "default_rst": board.default_rst(),
                "toolchain": board.toolchain().name(),
                "resources": board.resources(),
                "connectors": board.connectors(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        ReportFormat::Text => {
            println!(
                "{} — {} ({}), speed {}, {}",
                board.name(),
                board.device(),
                board.package(),
                board.speed(),
                board.toolchain().name()
            );
            println!("resources:");
            for r in board.resources() {
                let detail = match &r.io {
                    ResourceIo::Pins(_) => format!("{} pin(s)", r.pin_count()),
                    ResourceIo::Subsignals(subs) => {
                        format!("{} subsignals, {} pin(s)", subs.len(), r.pin_count())
                    }
                };
                match r.clock {
                    Some(clock) => println!("  {:<16} {:<24} {clock}", ident(r), detail),
                    None => println!("  {:<16} {detail}", ident(r)),
                }
            }
            println!("connectors:");
            for c in board.connectors() {
                println!("  {:<16} {} pin(s)", c.ident(), c.len());
            }
        }
    }
    Ok(0)
}

fn ident(r: &basalt_bsp::Resource) -> String {
    format!("{} {}", r.kind, r.index)
}
