//! Board definitions for the Basalt board-support workspace.
//!
//! This crate provides the [`Board`] trait that abstracts over the
//! supported FPGA boards, and per-board assemblers that turn a variant
//! configuration into final, internally consistent resource and connector
//! tables. Concrete implementations are provided for the Colorlight↔QMTech
//! adapter, the QMTech XC7K325T core board, and the HPC Store XC7K420T
//! board.
//!
//! # Usage
//!
//! Use [`load_board`] to assemble a board by name:
//!
//! ```
//! use basalt_boards::{load_board, BoardRequest};
//!
//! let board = load_board("qmtech_xc7k325t", BoardRequest::default()).unwrap();
//! assert_eq!(board.device(), "xc7k325t");
//! ```
//!
//! Assembly happens exactly once, at construction; the tables are
//! immutable afterwards and consumed read-only by the build framework.

#![warn(missing_docs)]

pub mod daughterboard;
pub mod error;
pub mod lattice;
pub mod options;
pub mod variant;
pub mod xilinx;

use basalt_bsp::{Connector, Resource};
use basalt_program::ProgramOptions;

pub use daughterboard::{qmtech_daughterboard, Daughterboard};
pub use error::BoardError;
pub use lattice::colorlight::SodimmModule;
pub use lattice::colorlight_qmtech::{ColorlightQmtech, ColorlightQmtechConfig};
pub use options::{Toolchain, ToolchainOptions};
pub use variant::{
    append_extra_resources, BoardRequest, BoardVariant, IoVoltage, VariantRequest,
};
pub use xilinx::hpc_xc7k420t::{HpcXc7k420t, HpcXc7k420tConfig};
pub use xilinx::qmtech_xc7k325t::{QmtechXc7k325t, QmtechXc7k325tConfig};

/// The read-only interface a board exposes to the build framework.
///
/// A board's tables are assembled once from its base data plus the
/// requested variant; every method here is a pure accessor.
pub trait Board: std::fmt::Debug {
    /// Returns the board's canonical name (e.g. "qmtech_xc7k325t").
    fn name(&self) -> &str;

    /// Returns the FPGA part (e.g. "xc7k325t", "LFE5U-25F").
    fn device(&self) -> &str;

    /// Returns the FPGA package (e.g. "ffg676", "BG381").
    fn package(&self) -> &str;

    /// Returns the speed grade.
    fn speed(&self) -> &str;

    /// Returns the kind of the default clock resource.
    fn default_clk(&self) -> &str;

    /// Returns the kind of the default reset resource, if the board has
    /// one.
    fn default_rst(&self) -> Option<&str> {
        None
    }

    /// Returns the vendor toolchain the board is built with.
    fn toolchain(&self) -> Toolchain;

    /// Returns the assembled resource table.
    fn resources(&self) -> &[Resource];

    /// Returns the assembled connector table.
    fn connectors(&self) -> &[Connector];

    /// Returns the backend option overrides for building `design`.
    fn toolchain_options(&self, design: &str) -> ToolchainOptions {
        let _ = design;
        ToolchainOptions::new()
    }

    /// Returns the flashing-tool argument template for this board.
    fn programmer(&self) -> ProgramOptions;
}

/// Canonical names of the boards in the registry.
pub const BOARD_NAMES: &[&str] = &["colorlight_qmtech", "qmtech_xc7k325t", "hpc_xc7k420t"];

/// Assembles a board by name from a request.
///
/// Names are matched case-insensitively and `-` is treated as `_`.
/// Request fields a board does not consume are ignored; variants a board
/// cannot build are rejected.
///
/// # Errors
///
/// Returns [`BoardError::UnknownBoard`] for unrecognized names, and any
/// variant-resolution or assembly error from the selected board.
pub fn load_board(name: &str, request: BoardRequest) -> Result<Box<dyn Board>, BoardError> {
    let variant = request.variant.resolve()?;
    match name.to_ascii_lowercase().replace('-', "_").as_str() {
        "colorlight_qmtech" | "colorlightqmtech" => {
            Ok(Box::new(ColorlightQmtech::new(ColorlightQmtechConfig {
                module: request.module.unwrap_or_default(),
                variant,
                extra_resources: request.extra_resources,
            })?))
        }
        "qmtech_xc7k325t" | "xc7k325t" => {
            Ok(Box::new(QmtechXc7k325t::new(QmtechXc7k325tConfig {
                variant,
                toolchain: request.toolchain.unwrap_or(Toolchain::Ise),
                extra_resources: request.extra_resources,
            })?))
        }
        "hpc_xc7k420t" | "hpc_store_xc7k420t" | "xc7k420t" => {
            if variant != BoardVariant::Standalone {
                return Err(BoardError::UnsupportedVariant {
                    board: "hpc_xc7k420t".to_string(),
                    variant,
                });
            }
            Ok(Box::new(HpcXc7k420t::new(HpcXc7k420tConfig {
                io_voltage: request.io_voltage.unwrap_or_default(),
                toolchain: request.toolchain,
                extra_resources: request.extra_resources,
            })?))
        }
        _ => Err(BoardError::UnknownBoard(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_colorlight() {
        let board = load_board("colorlight_qmtech", BoardRequest::default()).unwrap();
        assert_eq!(board.name(), "colorlight_qmtech");
        assert_eq!(board.device(), "LFE5U-25F");
        assert_eq!(board.toolchain(), Toolchain::Trellis);
    }

    #[test]
    fn load_aliases() {
        let board = load_board("Colorlight-QMTech", BoardRequest::default()).unwrap();
        assert_eq!(board.name(), "colorlight_qmtech");

        let board = load_board("xc7k325t", BoardRequest::default()).unwrap();
        assert_eq!(board.name(), "qmtech_xc7k325t");

        let board = load_board("HPC_Store_XC7K420T", BoardRequest::default()).unwrap();
        assert_eq!(board.name(), "hpc_xc7k420t");
    }

    #[test]
    fn load_unknown_board() {
        let err = load_board("de10_nano", BoardRequest::default()).unwrap_err();
        match err {
            BoardError::UnknownBoard(name) => assert_eq!(name, "de10_nano"),
            other => panic!("expected UnknownBoard, got {other:?}"),
        }
    }

    #[test]
    fn load_module_selection() {
        let board = load_board(
            "colorlight_qmtech",
            BoardRequest {
                module: Some(SodimmModule::I9),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(board.device(), "LFE5U-45F");
    }

    #[test]
    fn load_rejects_both_variant_flags() {
        for name in BOARD_NAMES {
            let err = load_board(
                name,
                BoardRequest {
                    variant: VariantRequest {
                        daughterboard: true,
                        test: true,
                    },
                    ..Default::default()
                },
            )
            .unwrap_err();
            assert!(
                matches!(err, BoardError::IncompatibleVariants),
                "{name} accepted both flags"
            );
        }
    }

    #[test]
    fn load_rejects_unsupported_variant() {
        let err = load_board(
            "hpc_xc7k420t",
            BoardRequest {
                variant: VariantRequest {
                    daughterboard: true,
                    test: false,
                },
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, BoardError::UnsupportedVariant { .. }));
    }

    #[test]
    fn load_voltage_selection() {
        let board = load_board(
            "hpc_xc7k420t",
            BoardRequest {
                io_voltage: Some(IoVoltage::V2_5),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            board.resources()[0].attrs.get("IOSTANDARD"),
            Some("LVCMOS25")
        );
    }

    #[test]
    fn board_names_all_load() {
        for name in BOARD_NAMES {
            let board = load_board(name, BoardRequest::default()).unwrap();
            assert_eq!(board.name(), *name);
        }
    }
}
