//! Basalt CLI — board-support metadata for FPGA boards.
//!
//! Provides `basalt list` to enumerate the board registry, `basalt show`
//! to assemble a board variant and print its final resource/connector
//! tables, and `basalt flash` to program a bitstream through
//! `openFPGALoader`.

#![warn(missing_docs)]

mod flash;
mod list;
mod select;
mod show;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Basalt — FPGA board-support metadata and programming.
#[derive(Parser, Debug)]
#[command(name = "basalt", version, about = "Basalt FPGA board support")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `basalt.toml` project file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the boards in the registry.
    List,
    /// Assemble a board variant and print its final tables.
    Show(ShowArgs),
    /// Flash a bitstream onto a board.
    Flash(FlashArgs),
}

/// Board selection and variant flags shared by `show` and `flash`.
#[derive(Parser, Debug, Default)]
pub struct BoardArgs {
    /// Board registry name. Falls back to `basalt.toml` when omitted.
    pub board: Option<String>,

    /// Splice in the daughterboard's resource and connector tables.
    #[arg(long)]
    pub daughterboard: bool,

    /// Remap user LEDs onto the expansion connectors for bring-up testing.
    #[arg(long)]
    pub test: bool,

    /// SODIMM module for boards with a module socket (e.g. "i5", "i9").
    #[arg(short, long)]
    pub module: Option<String>,

    /// IO-voltage jumper setting for boards with a jumper (e.g. "3.3V").
    #[arg(long)]
    pub io_voltage: Option<String>,

    /// Vendor toolchain override (e.g. "vivado").
    #[arg(long)]
    pub toolchain: Option<String>,
}

/// Arguments for the `basalt show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Board selection and variant flags.
    #[command(flatten)]
    pub board: BoardArgs,

    /// Output format for the tables.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `basalt flash` subcommand.
#[derive(Parser, Debug)]
pub struct FlashArgs {
    /// Board selection and variant flags.
    #[command(flatten)]
    pub board: BoardArgs,

    /// Bitstream path. Falls back to `flash.bitstream` in `basalt.toml`.
    #[arg(short, long)]
    pub bitstream: Option<String>,
}

/// Table output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose information.
    pub verbose: bool,
    /// Optional path to a custom project file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::List => list::run(&global),
        Command::Show(ref args) => show::run(args, &global),
        Command::Flash(ref args) => flash::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
