//! Merging CLI flags over `basalt.toml` into a board request.
//!
//! CLI flags win over project-file settings; extra resources and the
//! bitstream path only come from the project file. A missing project file
//! is fine as long as the command line names a board.

use crate::{BoardArgs, GlobalArgs};
use basalt_boards::{BoardRequest, VariantRequest};
use basalt_bsp::{pins, pins_n, Attrs, Direction, Resource};
use basalt_config::{ExtraResourceConfig, ProjectConfig};
use std::error::Error;
use std::path::{Path, PathBuf};

/// A fully resolved board selection.
#[derive(Debug)]
pub struct Selection {
    /// The board registry name.
    pub board: String,
    /// The assembled request for the registry.
    pub request: BoardRequest,
    /// The bitstream path, if one was configured.
    pub bitstream: Option<PathBuf>,
}

/// Resolves the board selection from CLI args and an optional project
/// file.
pub fn resolve_selection(
    args: &BoardArgs,
    global: &GlobalArgs,
) -> Result<Selection, Box<dyn Error>> {
    let config = load_project(global)?;
    merge_selection(args, config.as_ref())
}

/// Loads the project file: an explicit `--config` path must exist, a
/// `basalt.toml` in the current directory is optional.
fn load_project(global: &GlobalArgs) -> Result<Option<ProjectConfig>, Box<dyn Error>> {
    match &global.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(Some(basalt_config::load_config_from_str(&content)?))
        }
        None => {
            if Path::new("basalt.toml").is_file() {
                Ok(Some(basalt_config::load_config(Path::new("."))?))
            } else {
                Ok(None)
            }
        }
    }
}

/// Merges CLI flags over the project file.
fn merge_selection(
    args: &BoardArgs,
    config: Option<&ProjectConfig>,
) -> Result<Selection, Box<dyn Error>> {
    let board = args
        .board
        .clone()
        .or_else(|| config.map(|c| c.board.name.clone()))
        .ok_or("no board selected: pass a board name or add one to basalt.toml")?;

    let variant = VariantRequest {
        daughterboard: args.daughterboard || config.is_some_and(|c| c.board.daughterboard),
        test: args.test || config.is_some_and(|c| c.board.test),
    };

    let module = match args
        .module
        .as_deref()
        .or_else(|| config.and_then(|c| c.board.module.as_deref()))
    {
        Some(m) => Some(m.parse()?),
        None => None,
    };

    let io_voltage = match args
        .io_voltage
        .as_deref()
        .or_else(|| config.and_then(|c| c.board.io_voltage.as_deref()))
    {
        Some(v) => Some(v.parse()?),
        None => None,
    };

    let toolchain = match args
        .toolchain
        .as_deref()
        .or_else(|| config.and_then(|c| c.board.toolchain.as_deref()))
    {
        Some(t) => Some(t.parse()?),
        None => None,
    };

    let extra_resources = config
        .map(|c| build_extra_resources(&board, &c.resources))
        .transpose()?
        .unwrap_or_default();

    let bitstream = config
        .and_then(|c| c.flash.bitstream.as_deref())
        .map(PathBuf::from);

    Ok(Selection {
        board,
        request: BoardRequest {
            variant,
            module,
            io_voltage,
            toolchain,
            extra_resources,
        },
        bitstream,
    })
}

/// Builds extra resources from their project-file descriptions.
fn build_extra_resources(
    board: &str,
    configs: &[ExtraResourceConfig],
) -> Result<Vec<Resource>, Box<dyn Error>> {
    // Lattice boards carry their IO standard under IO_TYPE.
    let io_attr_key = if board.contains("colorlight") {
        "IO_TYPE"
    } else {
        "IOSTANDARD"
    };

    let mut resources = Vec::with_capacity(configs.len());
    for c in configs {
        let dir = match c.dir.as_deref() {
            Some(d) => d.parse::<Direction>()?,
            None => Direction::Bidir,
        };
        let group = if c.invert {
            pins_n(&c.pins, dir)
        } else {
            pins(&c.pins, dir)
        };
        let mut resource = Resource::new(&c.kind, c.index, group);
        if let Some(standard) = &c.io_standard {
            resource = resource.with_attrs(Attrs::new().set(io_attr_key, standard));
        }
        resources.push(resource);
    }
    Ok(resources)
}
