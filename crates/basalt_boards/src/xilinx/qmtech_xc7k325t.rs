//! The QMTech XC7K325T core board.
//!
//! A bare Kintex-7 core board: 50 MHz oscillator, two LEDs, one button,
//! QSPI flash, a single-channel DDR3 chip, and two 64-pin expansion
//! headers. Standalone it is used as-is; with the QMTech daughterboard
//! attached, the core board's own LEDs and button are renamed so they do
//! not clash with the daughterboard's, and the daughterboard tables are
//! spliced in.

use crate::daughterboard::qmtech_daughterboard;
use crate::error::BoardError;
use crate::options::{Toolchain, ToolchainOptions};
use crate::variant::{append_extra_resources, BoardVariant};
use crate::Board;
use basalt_bsp::{
    button_resources, check_unique_connectors, check_unique_resources, diff_pairs, led_resources,
    pins, pins_n, spi_flash_resource, Attrs, Connector, Direction, Frequency, Resource, Subsignal,
};
use basalt_program::ProgramOptions;

/// Configuration for assembling a [`QmtechXc7k325t`] board.
#[derive(Debug, Clone)]
pub struct QmtechXc7k325tConfig {
    /// The resolved build variant (standalone or daughterboard).
    pub variant: BoardVariant,
    /// The vendor toolchain building the bitstream.
    pub toolchain: Toolchain,
    /// Caller-supplied resources appended after variant assembly.
    pub extra_resources: Vec<Resource>,
}

impl Default for QmtechXc7k325tConfig {
    fn default() -> Self {
        Self {
            variant: BoardVariant::Standalone,
            toolchain: Toolchain::Ise,
            extra_resources: Vec::new(),
        }
    }
}

/// The QMTech XC7K325T core board.
#[derive(Debug)]
pub struct QmtechXc7k325t {
    toolchain: Toolchain,
    resources: Vec<Resource>,
    connectors: Vec<Connector>,
}

impl QmtechXc7k325t {
    /// Assembles the board for the given configuration.
    ///
    /// The connector-test variant is not supported on this board.
    pub fn new(config: QmtechXc7k325tConfig) -> Result<Self, BoardError> {
        if config.variant == BoardVariant::ConnectorTest {
            return Err(BoardError::UnsupportedVariant {
                board: "qmtech_xc7k325t".to_string(),
                variant: config.variant,
            });
        }

        let mut resources = base_resources()?;
        let mut connectors = base_connectors()?;

        if config.variant == BoardVariant::Daughterboard {
            // The core-board LEDs/button sit at indices 2..=4 and must be
            // renamed so they don't clash with the daughterboard's own.
            resources[2] = Resource::new("core_led", 0, pins_n("J26", Direction::Output))
                .with_attrs(Attrs::io_standard("LVCMOS33"));
            resources[3] = Resource::new("core_led", 1, pins_n("H26", Direction::Output))
                .with_attrs(Attrs::io_standard("LVCMOS33"));
            resources[4] = Resource::new("core_button", 0, pins_n("AF10", Direction::Input))
                .with_attrs(Attrs::io_standard("LVCMOS18"));

            let db = qmtech_daughterboard(&Attrs::io_standard("LVCMOS33"))?;
            resources.extend(db.resources);
            connectors.extend(db.connectors);
        }

        append_extra_resources(&mut resources, config.extra_resources)?;
        check_unique_resources(&resources)?;
        check_unique_connectors(&connectors)?;

        Ok(Self {
            toolchain: config.toolchain,
            resources,
            connectors,
        })
    }
}

impl Board for QmtechXc7k325t {
    fn name(&self) -> &str {
        "qmtech_xc7k325t"
    }

    fn device(&self) -> &str {
        "xc7k325t"
    }

    fn package(&self) -> &str {
        "ffg676"
    }

    fn speed(&self) -> &str {
        "1"
    }

    fn default_clk(&self) -> &str {
        "clk50"
    }

    fn default_rst(&self) -> Option<&str> {
        Some("rst")
    }

    fn toolchain(&self) -> Toolchain {
        self.toolchain
    }

    fn resources(&self) -> &[Resource] {
        &self.resources
    }

    fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    fn toolchain_options(&self, design: &str) -> ToolchainOptions {
        ToolchainOptions::new()
            .set(
                "script_before_bitstream",
                "set_property BITSTREAM.CONFIG.SPI_BUSWIDTH 4 [current_design]",
            )
            .set(
                "script_after_bitstream",
                &format!(
                    "write_cfgmem -force -format bin -interface spix4 -size 32 \
                     -loadbit \"up 0x0 {design}.bit\" -file {design}.bin"
                ),
            )
    }

    fn programmer(&self) -> ProgramOptions {
        ProgramOptions::new(["-v", "-c", "ft232"])
    }
}

fn base_resources() -> Result<Vec<Resource>, BoardError> {
    let mut resources = vec![
        Resource::new("clk50", 0, pins("F22", Direction::Input))
            .with_clock(Frequency::mhz(50))
            .with_attrs(Attrs::io_standard("LVCMOS33")),
        // SW2
        Resource::new("rst", 0, pins_n("AF9", Direction::Input))
            .with_attrs(Attrs::io_standard("LVCMOS18")),
    ];

    resources.extend(led_resources(
        "J26 H26",
        true,
        &Attrs::io_standard("LVCMOS33"),
    ));
    resources.extend(button_resources(
        "AF10",
        false,
        &Attrs::io_standard("LVCMOS18"),
    ));

    // MT25QL128
    resources.push(spi_flash_resource(
        0,
        "C23",
        "C8",
        "B24 A25 B22 A22",
        Attrs::io_standard("LVCMOS33"),
    ));

    // MT41K128M16JT-125K
    resources.push(Resource::composite(
        "ddr3",
        0,
        vec![
            Subsignal::new("rst", pins_n("W4", Direction::Output))
                .with_attrs(Attrs::io_standard("LVCMOS15")),
            Subsignal::new("clk", diff_pairs("AA5", "AB5", Direction::Output))
                .with_attrs(Attrs::io_standard("DIFF_SSTL15")),
            Subsignal::new("clk_en", pins("AD1", Direction::Output)),
            Subsignal::new("we", pins_n("AF4", Direction::Output)),
            Subsignal::new("ras", pins_n("AC3", Direction::Output)),
            Subsignal::new("cas", pins_n("AC4", Direction::Output)),
            Subsignal::new(
                "a",
                pins(
                    "AF5 AF2 AD6 AC6 AD4 AB6 AE2 Y5 AA4 AE6 AE3 AD5 AB4 Y6",
                    Direction::Output,
                ),
            ),
            Subsignal::new("ba", pins("AD3 AE1 AE5", Direction::Output)),
            Subsignal::new("dqs", diff_pairs("AB1 W6", "AC1 W5", Direction::Bidir))
                .with_attrs(Attrs::io_standard("DIFF_SSTL15_T_DCI")),
            Subsignal::new(
                "dq",
                pins(
                    "W1 V2 Y1 Y3 AC2 Y2 AB2 AA3 U1 V4 U6 W3 V6 U2 U7 U5",
                    Direction::Bidir,
                ),
            )
            .with_attrs(Attrs::io_standard("SSTL15_T_DCI")),
            Subsignal::new("dm", pins("V1 V3", Direction::Output)),
            Subsignal::new("odt", pins("AF3", Direction::Output)),
        ],
        Attrs::io_standard("SSTL15").set("SLEW", "FAST"),
    )?);

    Ok(resources)
}

// The connectors are named after the daughterboard, not the core board
// (header names vary between core boards, the daughterboard's do not).
// On this board J2 is U5 and J3 is U4.
fn base_connectors() -> Result<Vec<Connector>, BoardError> {
    let j2 = Connector::new(
        "J",
        2,
        &[
            // odd row       even row
            ("7", "A8"),
            ("8", "A9"),
            ("9", "B9"),
            ("10", "C9"),
            ("11", "A10"),
            ("12", "B10"),
            ("13", "D10"),
            ("14", "E10"),
            ("15", "B11"),
            ("16", "B12"),
            ("17", "C11"),
            ("18", "C12"),
            ("19", "A12"),
            ("20", "A13"),
            ("21", "D13"),
            ("22", "D14"),
            ("23", "A14"),
            ("24", "B14"),
            ("25", "C13"),
            ("26", "C14"),
            ("27", "A15"),
            ("28", "B15"),
            ("29", "D16"),
            ("30", "D15"),
            ("31", "B16"),
            ("32", "C16"),
            ("33", "A17"),
            ("34", "B17"),
            ("35", "D18"),
            ("36", "E18"),
            ("37", "C18"),
            ("38", "C17"),
            ("39", "A19"),
            ("40", "A18"),
            ("41", "B19"),
            ("42", "C19"),
            ("43", "A20"),
            ("44", "B20"),
            ("45", "D20"),
            ("46", "D19"),
            ("47", "A24"),
            ("48", "A23"),
            ("49", "E22"),
            ("50", "E21"),
            ("51", "D24"),
            ("52", "D23"),
            ("53", "D25"),
            ("54", "E25"),
            ("55", "E26"),
            ("56", "F25"),
            ("57", "B26"),
            ("58", "B25"),
            ("59", "C26"),
            ("60", "D26"),
        ],
    )?;

    let j3 = Connector::new(
        "J",
        3,
        &[
            // odd row       even row
            ("7", "AD21"),
            ("8", "AE21"),
            ("9", "AE22"),
            ("10", "AF22"),
            ("11", "AE23"),
            ("12", "AF23"),
            ("13", "V21"),
            ("14", "W21"),
            ("15", "Y22"),
            ("16", "AA22"),
            ("17", "AF24"),
            ("18", "AF25"),
            ("19", "AB21"),
            ("20", "AC21"),
            ("21", "AB22"),
            ("22", "AC22"),
            ("23", "AD23"),
            ("24", "AD24"),
            ("25", "AC23"),
            ("26", "AC24"),
            ("27", "AD25"),
            ("28", "AE25"),
            ("29", "AA23"),
            ("30", "AB24"),
            ("31", "AA25"),
            ("32", "AB25"),
            ("33", "Y23"),
            ("34", "AA24"),
            ("35", "AD26"),
            ("36", "AE26"),
            ("37", "AB26"),
            ("38", "AC26"),
            ("39", "W23"),
            ("40", "W24"),
            ("41", "Y25"),
            ("42", "Y26"),
            ("43", "W25"),
            ("44", "W26"),
            ("45", "U26"),
            ("46", "V26"),
            ("47", "V23"),
            ("48", "V24"),
            ("49", "U24"),
            ("50", "U25"),
            ("51", "T22"),
            ("52", "T23"),
            ("53", "R22"),
            ("54", "R23"),
            ("55", "R25"),
            ("56", "P25"),
            ("57", "P23"),
            ("58", "N23"),
            ("59", "N26"),
            ("60", "M26"),
        ],
    )?;

    Ok(vec![j2, j3])
}
