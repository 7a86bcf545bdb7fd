//! Error types for board assembly and variant validation.

use crate::variant::BoardVariant;
use basalt_bsp::BspError;

/// Errors raised while resolving a variant configuration or assembling a
/// board's final tables.
///
/// All of these are precondition violations: the board object is never
/// constructed when one occurs.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The requested board name is not in the registry.
    #[error("unknown board '{0}'. Supported: colorlight_qmtech, qmtech_xc7k325t, hpc_xc7k420t")]
    UnknownBoard(String),

    /// Daughterboard mode and connector-test mode were both requested.
    #[error("daughterboard and test cannot be active at the same time")]
    IncompatibleVariants,

    /// The board does not support the requested variant.
    #[error("board '{board}' does not support the {variant} variant")]
    UnsupportedVariant {
        /// The board's canonical name.
        board: String,
        /// The variant that was requested.
        variant: BoardVariant,
    },

    /// The IO-voltage jumper value is not one of the supported settings.
    #[error("io_voltage must be '2.5V' or '3.3V' according to the board jumper, got '{0}'")]
    UnsupportedVoltage(String),

    /// The SODIMM module name is not recognized.
    #[error("unknown SODIMM module '{0}' (expected 'i5' or 'i9')")]
    UnknownModule(String),

    /// The toolchain name is not recognized.
    #[error("unknown toolchain '{0}' (expected 'trellis', 'ise', or 'vivado')")]
    UnknownToolchain(String),

    /// A caller-supplied extra resource collides with an assembled entry.
    #[error("extra resource ({kind}, {index}) collides with an existing resource")]
    ExtraResourceCollision {
        /// The colliding resource kind.
        kind: String,
        /// The colliding resource index.
        index: u32,
    },

    /// A table-construction error from the underlying data model.
    #[error(transparent)]
    Bsp(#[from] BspError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_incompatible_variants() {
        assert_eq!(
            format!("{}", BoardError::IncompatibleVariants),
            "daughterboard and test cannot be active at the same time"
        );
    }

    #[test]
    fn display_unsupported_voltage() {
        let err = BoardError::UnsupportedVoltage("5V".to_string());
        assert_eq!(
            format!("{err}"),
            "io_voltage must be '2.5V' or '3.3V' according to the board jumper, got '5V'"
        );
    }

    #[test]
    fn display_unsupported_variant() {
        let err = BoardError::UnsupportedVariant {
            board: "hpc_xc7k420t".to_string(),
            variant: BoardVariant::Daughterboard,
        };
        assert_eq!(
            format!("{err}"),
            "board 'hpc_xc7k420t' does not support the daughterboard variant"
        );
    }

    #[test]
    fn bsp_error_converts() {
        let bsp = BspError::DuplicateResource {
            kind: "led".to_string(),
            index: 0,
        };
        let err: BoardError = bsp.into();
        assert!(matches!(err, BoardError::Bsp(_)));
    }
}
