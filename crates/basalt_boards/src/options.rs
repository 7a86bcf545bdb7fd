//! Vendor toolchain selection and backend option overrides.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// The vendor toolchain a board's bitstream is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Toolchain {
    /// Open-source Lattice ECP5 flow (yosys/nextpnr/ecppack).
    Trellis,
    /// Xilinx ISE.
    Ise,
    /// Xilinx Vivado.
    Vivado,
}

impl Toolchain {
    /// Returns the toolchain's display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trellis => "Trellis",
            Self::Ise => "ISE",
            Self::Vivado => "Vivado",
        }
    }
}

impl FromStr for Toolchain {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trellis" => Ok(Self::Trellis),
            "ise" => Ok(Self::Ise),
            "vivado" => Ok(Self::Vivado),
            _ => Err(BoardError::UnknownToolchain(s.to_string())),
        }
    }
}

/// Backend option overrides a board passes to the build framework.
///
/// Keys are backend-specific (`ecppack_opts` for Trellis,
/// `script_before_bitstream`/`script_after_bitstream` for Xilinx flows).
/// Options that embed the design name are rendered per design, so the
/// board produces the map through
/// [`Board::toolchain_options`](crate::Board::toolchain_options) rather
/// than holding a static copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainOptions(BTreeMap<String, String>);

impl ToolchainOptions {
    /// Creates an empty option map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an option, returning the map for chaining.
    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    /// Looks up an option by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns true if no options are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolchain_names() {
        assert_eq!(Toolchain::Trellis.name(), "Trellis");
        assert_eq!(Toolchain::Ise.name(), "ISE");
        assert_eq!(Toolchain::Vivado.name(), "Vivado");
    }

    #[test]
    fn toolchain_from_str() {
        assert_eq!("trellis".parse::<Toolchain>().unwrap(), Toolchain::Trellis);
        assert_eq!("ISE".parse::<Toolchain>().unwrap(), Toolchain::Ise);
        assert_eq!("Vivado".parse::<Toolchain>().unwrap(), Toolchain::Vivado);
        assert!(matches!(
            "quartus".parse::<Toolchain>(),
            Err(BoardError::UnknownToolchain(_))
        ));
    }

    #[test]
    fn options_builder() {
        let opts = ToolchainOptions::new().set("ecppack_opts", "--compress");
        assert_eq!(opts.get("ecppack_opts"), Some("--compress"));
        assert_eq!(opts.len(), 1);
        assert!(!opts.is_empty());
    }

    #[test]
    fn options_empty() {
        let opts = ToolchainOptions::new();
        assert!(opts.is_empty());
        assert_eq!(opts.get("ecppack_opts"), None);
    }

    #[test]
    fn options_serde_roundtrip() {
        let opts = ToolchainOptions::new()
            .set("script_before_bitstream", "set_property ...")
            .set("script_after_bitstream", "write_cfgmem ...");
        let json = serde_json::to_string(&opts).unwrap();
        let restored: ToolchainOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(opts, restored);
    }
}
