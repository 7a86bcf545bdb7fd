//! Colorlight i5/i9 SODIMM module profiles and resource tables.
//!
//! The Colorlight modules are ECP5-based LED-panel driver cards sold as
//! SODIMM-200 modules. They carry the FPGA, its oscillator, a user LED,
//! and the configuration flash; everything else reaches the module edge
//! connector. The table keeps the module's user LED at index 1: that is
//! the slot the adapter's daughterboard/test variants replace.

use crate::error::BoardError;
use basalt_bsp::{pins, pins_n, spi_flash_resource, Attrs, Direction, Frequency, Resource};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The Colorlight SODIMM module population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SodimmModule {
    /// Colorlight i5: LFE5U-25F.
    #[default]
    I5,
    /// Colorlight i9: LFE5U-45F.
    I9,
}

impl SodimmModule {
    /// Returns the module's lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::I5 => "i5",
            Self::I9 => "i9",
        }
    }
}

impl FromStr for SodimmModule {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i5" | "colorlight_i5" => Ok(Self::I5),
            "i9" | "colorlight_i9" => Ok(Self::I9),
            _ => Err(BoardError::UnknownModule(s.to_string())),
        }
    }
}

/// Device identity of a SODIMM module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleProfile {
    /// FPGA part (e.g. "LFE5U-25F").
    pub device: &'static str,
    /// FPGA package.
    pub package: &'static str,
    /// Speed grade.
    pub speed: &'static str,
    /// The default clock resource kind.
    pub default_clk: &'static str,
}

/// Returns the device profile of a module.
pub fn module_profile(module: SodimmModule) -> ModuleProfile {
    match module {
        SodimmModule::I5 => ModuleProfile {
            device: "LFE5U-25F",
            package: "BG381",
            speed: "6",
            default_clk: "clk25",
        },
        SodimmModule::I9 => ModuleProfile {
            device: "LFE5U-45F",
            package: "BG381",
            speed: "6",
            default_clk: "clk25",
        },
    }
}

/// Returns the module's own resource table.
///
/// Index 0 is the 25 MHz oscillator, index 1 the module's user LED.
pub fn module_resources(module: SodimmModule) -> Vec<Resource> {
    let lvcmos33 = Attrs::new().set("IO_TYPE", "LVCMOS33");
    let led_pin = match module {
        SodimmModule::I5 => "U16",
        SodimmModule::I9 => "L2",
    };
    vec![
        Resource::new("clk25", 0, pins("P3", Direction::Input))
            .with_clock(Frequency::mhz(25))
            .with_attrs(lvcmos33.clone()),
        Resource::new("led", 0, pins_n(led_pin, Direction::Output)).with_attrs(lvcmos33.clone()),
        // GD25Q16 configuration flash; clk reaches the part through USRMCLK.
        spi_flash_resource(0, "R2", "U3", "W2 V2 Y2 W1", lvcmos33),
    ]
}
