//! The "HPC FPGA Board Store" Kintex-7 420T board.
//!
//! A Kintex XC7K420T board with two DDR3 SODIMM slots, PCIe x8, two SFP
//! cages, two SATA ports, and two 80-pin board-to-board connectors. A
//! jumper selects whether the single-ended IO banks run at 2.5 V or
//! 3.3 V; the matching LVCMOS standard is applied across the table at
//! assembly time.

use crate::error::BoardError;
use crate::options::{Toolchain, ToolchainOptions};
use crate::variant::{append_extra_resources, IoVoltage};
use crate::Board;
use basalt_bsp::{
    button_resources, check_unique_connectors, check_unique_resources, diff_pairs, i2c_resource,
    led_resources, pins, pins_n, uart_resource, Attrs, Connector, Direction, Frequency, Resource,
    Subsignal,
};
use basalt_program::ProgramOptions;

/// Configuration for assembling a [`HpcXc7k420t`] board.
#[derive(Debug, Clone, Default)]
pub struct HpcXc7k420tConfig {
    /// The IO-bank voltage selected by the board jumper.
    pub io_voltage: IoVoltage,
    /// The vendor toolchain building the bitstream.
    pub toolchain: Option<Toolchain>,
    /// Caller-supplied resources appended after assembly.
    pub extra_resources: Vec<Resource>,
}

/// The HPC Store XC7K420T board.
#[derive(Debug)]
pub struct HpcXc7k420t {
    toolchain: Toolchain,
    resources: Vec<Resource>,
    connectors: Vec<Connector>,
}

impl HpcXc7k420t {
    /// Assembles the board for the given configuration.
    pub fn new(config: HpcXc7k420tConfig) -> Result<Self, BoardError> {
        let mut resources = base_resources(config.io_voltage)?;
        let connectors = base_connectors()?;

        append_extra_resources(&mut resources, config.extra_resources)?;
        check_unique_resources(&resources)?;
        check_unique_connectors(&connectors)?;

        Ok(Self {
            toolchain: config.toolchain.unwrap_or(Toolchain::Ise),
            resources,
            connectors,
        })
    }
}

impl Board for HpcXc7k420t {
    fn name(&self) -> &str {
        "hpc_xc7k420t"
    }

    fn device(&self) -> &str {
        "xc7k420t"
    }

    fn package(&self) -> &str {
        "ffg901"
    }

    fn speed(&self) -> &str {
        "2"
    }

    fn default_clk(&self) -> &str {
        "diffclk100"
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
                "set_property BITSTREAM.GENERAL.COMPRESS TRUE [current_design]\n\
                 set_property BITSTREAM.CONFIG.CCLK_TRISTATE TRUE [current_design]\n\
                 set_property BITSTREAM.CONFIG.CONFIGRATE 66 [current_design]\n\
                 set_property CONFIG_VOLTAGE 3.3 [current_design]\n\
                 set_property CFGBVS VCCO [current_design]\n\
                 set_property BITSTREAM.CONFIG.SPI_32BIT_ADDR YES [current_design]\n\
                 set_property BITSTREAM.CONFIG.SPI_BUSWIDTH 4 [current_design]\n\
                 set_property BITSTREAM.CONFIG.SPI_FALL_EDGE YES [current_design]\n\
                 set_property BITSTREAM.CONFIG.UNUSEDPIN PULLUP [current_design]",
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

fn base_resources(io_voltage: IoVoltage) -> Result<Vec<Resource>, BoardError> {
    let lvcmos = Attrs::io_standard(io_voltage.lvcmos());

    let mut resources = vec![
        Resource::new("clk100", 0, pins("U24", Direction::Input))
            .with_clock(Frequency::mhz(100))
            .with_attrs(lvcmos.clone()),
        Resource::new("diffclk100", 0, diff_pairs("U22", "U23", Direction::Input))
            .with_clock(Frequency::mhz(100))
            .with_attrs(Attrs::io_standard("LVDS_25")),
    ];

    resources.extend(led_resources(
        "A27 E24 G24 H21 G27 H26 H25 H24",
        false,
        &Attrs::io_standard("LVCMOS15"),
    ));
    resources.extend(button_resources(
        "Y23 J24",
        true,
        &Attrs::io_standard("LVCMOS15"),
    ));

    resources.push(uart_resource(0, "D17", "D16", lvcmos.clone()));

    // EEPROM AT24C04
    resources.push(i2c_resource(0, "C17", "C16", lvcmos.clone()));

    // SODIMM located near the SFP ports
    resources.push(Resource::composite(
        "ddr3",
        0,
        vec![
            Subsignal::new("rst", pins_n("F27", Direction::Output))
                .with_attrs(Attrs::io_standard("LVCMOS15")),
            Subsignal::new("clk", diff_pairs("J26", "J27", Direction::Output))
                .with_attrs(Attrs::io_standard("DIFF_SSTL15")),
            Subsignal::new("clk_en", pins("G25", Direction::Output)),
            Subsignal::new("cs", pins_n("H30", Direction::Output)),
            Subsignal::new("we", pins_n("G29", Direction::Output)),
            Subsignal::new("ras", pins_n("H27", Direction::Output)),
            Subsignal::new("cas", pins_n("G30", Direction::Output)),
            Subsignal::new(
                "a",
                pins(
                    "F28 E29 F26 D29 B29 C30 A30 B28 C29 B30 E30 E26 A28 H29 F25",
                    Direction::Output,
                ),
            ),
            Subsignal::new("ba", pins("F30 G28 E28", Direction::Output)),
            Subsignal::new(
                "dqs",
                diff_pairs(
                    "B18 E23 H19 K21 L23 M18 N27 N30",
                    "A18 D23 G19 J21 K24 M19 M27 M30",
                    Direction::Bidir,
                ),
            )
            .with_attrs(Attrs::io_standard("DIFF_SSTL15")),
            Subsignal::new(
                "dq",
                pins(
                    "A21 A22 A23 B23 B19 C19 A20 B20 C21 D21 C22 D22 E18 D18 E20 E21 \
                     G18 F18 G20 F20 H20 G22 G23 F23 L18 J18 J19 K20 J22 H22 K23 J23 \
                     N24 N22 P24 P23 L20 M22 M24 N25 M17 N19 N17 P17 N20 N21 P21 P19 \
                     K26 K25 L26 L25 M25 N26 P28 P27 L30 M29 P29 R29 K28 K29 K30 M28",
                    Direction::Bidir,
                ),
            )
            .with_attrs(Attrs::io_standard("SSTL15")),
            Subsignal::new(
                "dm",
                pins("B22 E19 F22 K19 M23 P18 P26 N29", Direction::Output),
            ),
            Subsignal::new("odt", pins("J28", Direction::Output)),
        ],
        Attrs::io_standard("SSTL15").set("SLEW", "FAST"),
    )?);

    // SODIMM located near the power side
    resources.push(Resource::composite(
        "ddr3",
        1,
        vec![
            Subsignal::new("rst", pins_n("Y21", Direction::Output))
                .with_attrs(Attrs::io_standard("LVCMOS15")),
            Subsignal::new(
                "a",
                pins(
                    "AG22 AJ23 AF22 AJ26 AG23 AD23 AF23 AJ24 AE23 AB23 AJ22 AK25 AD21 AD22 AK24",
                    Direction::Output,
                ),
            ),
            Subsignal::new("ba", pins("AK23 AF21 AC21", Direction::Output)),
            Subsignal::new(
                "dqs",
                diff_pairs(
                    "Y30 AB25 AC29 AJ27 AC17 AK19 AC16 AG14",
                    "AA30 AC25 AC30 AJ28 AD17 AK20 AD16 AG15",
                    Direction::Bidir,
                ),
            )
            .with_attrs(Attrs::io_standard("DIFF_SSTL15")),
            Subsignal::new(
                "dq",
                pins(
                    "W29 Y29 AB30 AB29 W28 W26 Y28 AB28 AA25 AD27 AB24 AC24 Y26 Y25 AA26 AC26 \
                     AD29 AE30 AE29 AF30 AD28 AC27 AF28 AF27 AG30 AG29 AH29 AJ29 AK30 AK29 AK28 AG27 \
                     AD18 AD19 AA18 Y18 AE18 Y19 AB17 AA17 AH20 AH19 AG19 AF18 AJ18 AK18 AJ17 AJ16 \
                     AF16 AE16 AE15 AF15 AC15 AB15 AC14 AB14 AH17 AH16 AK14 AJ14 AF17 AG17 AH15 AH14",
                    Direction::Bidir,
                ),
            )
            .with_attrs(Attrs::io_standard("SSTL15")),
            Subsignal::new(
                "dm",
                pins("AA28 AA27 AE28 AH30 AB18 AJ19 AD14 AK16", Direction::Output),
            ),
            Subsignal::new("odt", pins("AG20", Direction::Output)),
        ],
        Attrs::io_standard("SSTL15").set("SLEW", "FAST"),
    )?);

    resources.push(Resource::composite(
        "pcie",
        0,
        vec![
            Subsignal::new("rst", pins_n("W21", Direction::Input)).with_attrs(lvcmos.clone()),
            Subsignal::new("clk", diff_pairs("T6", "T5", Direction::Input)),
            Subsignal::new(
                "tx",
                diff_pairs(
                    "N4 P2 T2 V2 Y2 AB2 AD2 AF2",
                    "N3 P1 T1 V1 Y1 AB1 AD1 AF1",
                    Direction::Output,
                ),
            ),
            Subsignal::new(
                "rx",
                diff_pairs(
                    "P6 R4 U4 V6 W4 Y6 AA4 AB6",
                    "P5 R3 U3 V5 W3 Y5 AA3 AB5",
                    Direction::Input,
                ),
            ),
        ],
        Attrs::new(),
    )?);

    resources.push(sfp_resource(0, "A8", "A7", "D10", "D9", "A17", "C15", "A15", &lvcmos)?);
    resources.push(sfp_resource(1, "C8", "C7", "F10", "F9", "D14", "C14", "B14", &lvcmos)?);

    resources.push(sata_resource(0, "A12", "A11", "C12", "C11")?);
    resources.push(sata_resource(1, "B10", "B9", "E12", "E11")?);

    Ok(resources)
}

#[allow(clippy::too_many_arguments)]
fn sfp_resource(
    index: u32,
    tx_p: &str,
    tx_n: &str,
    rx_p: &str,
    rx_n: &str,
    tx_disable: &str,
    sda: &str,
    scl: &str,
    lvcmos: &Attrs,
) -> Result<Resource, BoardError> {
    Ok(Resource::composite(
        "sfp",
        index,
        vec![
            Subsignal::new("tx", diff_pairs(tx_p, tx_n, Direction::Output)),
            Subsignal::new("rx", diff_pairs(rx_p, rx_n, Direction::Input)),
            Subsignal::new("tx_disable", pins_n(tx_disable, Direction::Output))
                .with_attrs(lvcmos.clone()),
            Subsignal::new("sda", pins(sda, Direction::Bidir)).with_attrs(lvcmos.clone()),
            Subsignal::new("scl", pins(scl, Direction::Output)).with_attrs(lvcmos.clone()),
        ],
        Attrs::new(),
    )?)
}

fn sata_resource(
    index: u32,
    tx_p: &str,
    tx_n: &str,
    rx_p: &str,
    rx_n: &str,
) -> Result<Resource, BoardError> {
    Ok(Resource::composite(
        "sata",
        index,
        vec![
            Subsignal::new("tx", diff_pairs(tx_p, tx_n, Direction::Output)),
            Subsignal::new("rx", diff_pairs(rx_p, rx_n, Direction::Input)),
        ],
        Attrs::new().set("IO_TYPE", "LVDS"),
    )?)
}

//
//         Connector layout on the board
//   ┌────────────────────────────────────────┐
//   │    2                            80     │
//   │    ┌──────────────────────────────┐    │
//   └──┐ └──────────────────────────────┘ ┌──┘
//      │ 1                            79  │
//      └──────────────────────────────────┘
//
// Ground, power, and no-connect rows are omitted from the tables.
fn base_connectors() -> Result<Vec<Connector>, BoardError> {
    // Connector on the SFP side
    let btb0 = Connector::new(
        "BTB",
        0,
        &[
            ("3", "A16"),
            ("4", "B24"),
            ("5", "B17"),
            ("6", "D24"),
            ("9", "E16"),
            ("10", "A14"),
            ("11", "F16"),
            ("12", "B15"),
            ("13", "R25"),
            ("14", "U30"),
            ("15", "R24"),
            ("16", "U29"),
            ("19", "R21"),
            ("20", "T27"),
            ("21", "R20"),
            ("22", "R26"),
            ("23", "T23"),
            ("24", "U28"),
            ("25", "R23"),
            ("26", "U27"),
            ("29", "T18"),
            ("30", "V25"),
            ("31", "T17"),
            ("32", "V24"),
            ("33", "V20"),
            ("34", "R19"),
            ("35", "U20"),
            ("36", "R18"),
            ("39", "W23"),
            ("40", "T21"),
            ("41", "W22"),
            ("42", "T20"),
            ("43", "U18"),
            ("44", "V19"),
            ("45", "U17"),
            ("46", "U19"),
            ("49", "T26"),
            ("50", "W17"),
            ("51", "T25"),
            ("52", "V17"),
            ("53", "V22"),
            ("54", "W19"),
            ("55", "V21"),
            ("56", "W18"),
            ("59", "C24"),
            ("60", "T22"),
            ("61", "D26"),
            ("62", "V30"),
            ("63", "C27"),
            ("64", "U25"),
            ("65", "B27"),
            ("66", "AF25"),
            ("69", "Y24"),
            ("70", "AH26"),
            ("71", "AE26"),
            ("72", "AG25"),
            ("73", "AD26"),
            ("74", "AH25"),
        ],
    )?;

    // Connector on the power side
    let btb1 = Connector::new(
        "BTB",
        1,
        &[
            ("3", "AJ11"),
            ("4", "AK9"),
            ("5", "AJ12"),
            ("6", "AK10"),
            ("9", "AJ7"),
            ("10", "AG11"),
            ("11", "AJ8"),
            ("12", "AG12"),
            ("15", "AF9"),
            ("16", "AG7"),
            ("17", "AF10"),
            ("18", "AG8"),
            ("21", "AE11"),
            ("22", "AH9"),
            ("23", "AE12"),
            ("24", "AH10"),
            ("27", "AE8"),
            ("28", "AF6"),
            ("29", "AE7"),
            ("30", "AF5"),
            ("33", "AG3"),
            ("34", "AK5"),
            ("35", "AG4"),
            ("36", "AK6"),
            ("39", "AE3"),
            ("40", "AH5"),
            ("41", "AE4"),
            ("42", "AH6"),
            ("45", "AK1"),
            ("46", "AJ3"),
            ("47", "AK2"),
            ("48", "AJ4"),
            ("51", "AC3"),
            ("52", "AH1"),
            ("53", "AC4"),
            ("54", "AH2"),
            ("57", "NC"),
            ("58", "AC19"),
            ("59", "L17"),
            ("60", "AB19"),
            ("63", "AC20"),
            ("64", "AB20"),
            ("65", "AE20"),
            ("66", "AA20"),
            ("69", "W24"),
            ("70", "Y20"),
            ("72", "AA21"),
        ],
    )?;

    Ok(vec![btb0, btb1])
}
