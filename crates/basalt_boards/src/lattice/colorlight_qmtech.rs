//! The Colorlight↔QMTech adapter board.
//!
//! An open-hardware carrier that re-hosts a Colorlight i5/i9 SODIMM module
//! in the QMTech core-board form factor, so the QMTech daughterboard's
//! peripherals can be used with the Colorlight modules. The adapter
//! contributes the two 64-pin headers; the FPGA, clock, and flash come
//! from whichever module is seated.

use crate::daughterboard::qmtech_daughterboard;
use crate::error::BoardError;
use crate::lattice::colorlight::{module_profile, module_resources, ModuleProfile, SodimmModule};
use crate::options::{Toolchain, ToolchainOptions};
use crate::variant::{append_extra_resources, BoardVariant};
use crate::Board;
use basalt_bsp::{
    check_unique_connectors, check_unique_resources, pins, Attrs, Connector, Direction, Resource,
};
use basalt_program::ProgramOptions;

/// Configuration for assembling a [`ColorlightQmtech`] board.
#[derive(Debug, Clone, Default)]
pub struct ColorlightQmtechConfig {
    /// Which Colorlight module is seated in the SODIMM socket.
    pub module: SodimmModule,
    /// The resolved build variant.
    pub variant: BoardVariant,
    /// Caller-supplied resources appended after variant assembly.
    pub extra_resources: Vec<Resource>,
}

/// The Colorlight↔QMTech adapter with a seated SODIMM module.
#[derive(Debug)]
pub struct ColorlightQmtech {
    profile: ModuleProfile,
    resources: Vec<Resource>,
    connectors: Vec<Connector>,
}

impl ColorlightQmtech {
    /// Assembles the board for the given configuration.
    ///
    /// Connector-test mode replaces the module's user LED (resource
    /// index 1) with one synthetic LED resource spanning every pin of
    /// `J2` and `J3`, in declaration order. Daughterboard mode drops the
    /// module LED and splices in the daughterboard tables instead.
    pub fn new(config: ColorlightQmtechConfig) -> Result<Self, BoardError> {
        let profile = module_profile(config.module);
        let mut resources = module_resources(config.module);
        let mut connectors = base_connectors()?;

        match config.variant {
            BoardVariant::Standalone => {}
            BoardVariant::ConnectorTest => {
                let all_pins: Vec<&str> = connectors[0]
                    .package_pins()
                    .chain(connectors[1].package_pins())
                    .collect();
                resources[1] = Resource::new("led", 0, pins(&all_pins.join(" "), Direction::Output))
                    .with_attrs(Attrs::new().set("IO_TYPE", "LVCMOS33").set("DRIVE", "4"));
            }
            BoardVariant::Daughterboard => {
                let db = qmtech_daughterboard(&Attrs::new().set("IO_TYPE", "LVCMOS33"))?;
                resources.remove(1);
                resources.extend(db.resources);
                connectors.extend(db.connectors);
            }
        }

        append_extra_resources(&mut resources, config.extra_resources)?;
        check_unique_resources(&resources)?;
        check_unique_connectors(&connectors)?;

        Ok(Self {
            profile,
            resources,
            connectors,
        })
    }
}

impl Board for ColorlightQmtech {
    fn name(&self) -> &str {
        "colorlight_qmtech"
    }

    fn device(&self) -> &str {
        self.profile.device
    }

    fn package(&self) -> &str {
        self.profile.package
    }

    fn speed(&self) -> &str {
        self.profile.speed
    }

    fn default_clk(&self) -> &str {
        self.profile.default_clk
    }

    fn toolchain(&self) -> Toolchain {
        Toolchain::Trellis
    }

    fn resources(&self) -> &[Resource] {
        &self.resources
    }

    fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    fn toolchain_options(&self, _design: &str) -> ToolchainOptions {
        ToolchainOptions::new().set("ecppack_opts", "--compress")
    }

    fn programmer(&self) -> ProgramOptions {
        ProgramOptions::new(["-m"])
    }
}

// The connectors are named after the daughterboard, not the core board:
// the core-board header names vary between boards, but the daughterboard's
// stay the same, and it is the daughterboard's peripherals that get wired
// through them. On this board J2 is J2 and J3 is J1.
fn base_connectors() -> Result<Vec<Connector>, BoardError> {
    let j2 = Connector::new(
        "J",
        2,
        &[
            // odd row       even row
            ("7", "T1"),
            ("8", "U1"),
            ("9", "Y2"),
            ("10", "W1"),
            ("11", "V1"),
            ("12", "M1"),
            ("13", "N2"),
            ("14", "N3"),
            ("15", "T2"),
            ("16", "M3"),
            ("17", "T3"),
            ("18", "R3"),
            ("19", "N4"),
            ("20", "M4"),
            ("21", "L4"),
            ("22", "L5"),
            ("23", "P16"),
            ("24", "J16"),
            ("25", "J18"),
            ("26", "J17"),
            ("27", "H18"),
            ("28", "H17"),
            ("29", "G18"),
            ("30", "H16"),
            ("31", "F18"),
            ("32", "G16"),
            ("33", "E18"),
            ("34", "F17"),
            ("35", "F16"),
            ("36", "E16"),
            ("37", "E17"),
            ("38", "D18"),
            ("39", "D17"),
            ("40", "G5"),
            ("41", "D16"),
            ("42", "F5"),
            ("43", "E6"),
            ("44", "E5"),
            ("45", "F4"),
            ("46", "E4"),
            ("47", "F1"),
            ("48", "F3"),
            ("49", "G3"),
            ("50", "H3"),
            ("51", "H4"),
            ("52", "H5"),
            ("53", "J4"),
            ("54", "J5"),
            ("55", "K3"),
            ("56", "K4"),
            ("57", "K5"),
            ("58", "B3"),
            ("59", "A2"),
            ("60", "B2"),
        ],
    )?;

    let j3 = Connector::new(
        "J",
        3,
        &[
            // odd row       even row
            ("7", "U16"),
            ("8", "R1"),
            ("9", "C18"),
            ("10", "K18"),
            ("11", "R18"),
            ("12", "T18"),
            ("13", "P17"),
            ("14", "R17"),
            ("15", "T17"),
            ("16", "M17"),
            ("17", "U17"),
            ("18", "U18"),
            ("19", "N17"),
            ("20", "P18"),
            ("21", "M18"),
            ("22", "N18"),
            ("23", "L18"),
            ("24", "L20"),
            ("25", "K19"),
            ("26", "K20"),
            ("27", "J19"),
            ("28", "J20"),
            ("29", "G20"),
            ("30", "H20"),
            ("31", "F20"),
            ("32", "G19"),
            ("33", "E20"),
            ("34", "F19"),
            ("35", "D20"),
            ("36", "E19"),
            ("37", "C20"),
            ("38", "D19"),
            ("39", "B19"),
            ("40", "B20"),
            ("41", "A19"),
            ("42", "B18"),
            ("43", "A18"),
            ("44", "C17"),
            ("45", "C4"),
            ("46", "D3"),
            ("47", "C3"),
            ("48", "B4"),
            ("49", "A3"),
            ("50", "E3"),
            ("51", "B1"),
            ("52", "C2"),
            ("53", "D2"),
            ("54", "C1"),
            ("55", "E2"),
            ("56", "D1"),
            ("57", "F2"),
            ("58", "E1"),
        ],
    )?;

    Ok(vec![j2, j3])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(variant: BoardVariant) -> ColorlightQmtech {
        ColorlightQmtech::new(ColorlightQmtechConfig {
            module: SodimmModule::I5,
            variant,
            extra_resources: Vec::new(),
        })
        .unwrap()
    }

    #[test]
    fn standalone_is_the_module_table() {
        let b = board(BoardVariant::Standalone);
        assert_eq!(b.resources().len(), 3);
        assert_eq!(b.connectors().len(), 2);
        assert_eq!(b.device(), "LFE5U-25F");
        assert_eq!(b.default_clk(), "clk25");
    }

    #[test]
    fn i9_module_changes_device() {
        let b = ColorlightQmtech::new(ColorlightQmtechConfig {
            module: SodimmModule::I9,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(b.device(), "LFE5U-45F");
    }

    #[test]
    fn test_mode_led_spans_both_headers() {
        let b = board(BoardVariant::ConnectorTest);
        let led = &b.resources()[1];
        assert_eq!(led.key(), ("led", 0));
        let expected: Vec<&str> = b.connectors()[0]
            .package_pins()
            .chain(b.connectors()[1].package_pins())
            .collect();
        assert_eq!(led.direct_pins().unwrap(), expected);
        assert_eq!(led.pin_count(), 54 + 52);
        assert_eq!(led.attrs.get("DRIVE"), Some("4"));
    }

    #[test]
    fn test_mode_preserves_other_resources() {
        let b = board(BoardVariant::ConnectorTest);
        assert_eq!(b.resources()[0].key(), ("clk25", 0));
        assert_eq!(b.resources()[2].key(), ("qspi_flash", 0));
        assert_eq!(b.resources().len(), 3);
    }

    #[test]
    fn daughterboard_mode_splices_tables() {
        let b = board(BoardVariant::Daughterboard);
        // Module LED is gone; daughterboard LEDs take over the kind.
        let leds: Vec<&Resource> = b.resources().iter().filter(|r| r.kind == "led").collect();
        assert_eq!(leds.len(), 5);
        assert!(leds.iter().all(|r| {
            r.direct_pins()
                .unwrap()
                .iter()
                .all(|p| p.starts_with("J_2:"))
        }));
        // Connectors: the adapter's headers first, then the pass-throughs.
        let idents: Vec<String> = b.connectors().iter().map(Connector::ident).collect();
        assert_eq!(idents, vec!["J2", "J3", "pmod0", "pmod1"]);
    }

    #[test]
    fn extra_resources_append_last() {
        let extra = Resource::new("debug", 0, pins("J_2:7", Direction::Bidir));
        let b = ColorlightQmtech::new(ColorlightQmtechConfig {
            extra_resources: vec![extra],
            ..Default::default()
        })
        .unwrap();
        assert_eq!(b.resources().last().unwrap().key(), ("debug", 0));
    }

    #[test]
    fn extra_resource_collision_rejected() {
        let err = ColorlightQmtech::new(ColorlightQmtechConfig {
            extra_resources: vec![Resource::new("clk25", 0, pins("A1", Direction::Input))],
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, BoardError::ExtraResourceCollision { .. }));
    }

    #[test]
    fn programmer_uses_spi_mode() {
        let b = board(BoardVariant::Standalone);
        assert_eq!(b.programmer(), ProgramOptions::new(["-m"]));
        assert_eq!(b.toolchain(), Toolchain::Trellis);
        assert_eq!(
            b.toolchain_options("blinky").get("ecppack_opts"),
            Some("--compress")
        );
    }
}
