//! The QMTech daughterboard.
//!
//! The daughterboard plugs onto a core board's two 64-pin headers and
//! carries the user-facing peripherals the core boards lack: LEDs,
//! buttons, a UART header, a three-digit seven-segment display, VGA, and
//! two PMOD pass-throughs. All of its pins are connector-relative
//! (`J_2:<n>` / `J_3:<n>`); the host board resolves them through its own
//! `J2`/`J3` tables, which is why the adapters name their connectors after
//! the daughterboard rather than the core board.

use basalt_bsp::{
    button_resources, led_resources, pins, uart_resource, Attrs, BspError, Connector, Direction,
    Resource, Subsignal,
};

/// The daughterboard's resource and connector tables, ready to be spliced
/// into a host board.
#[derive(Debug, Clone)]
pub struct Daughterboard {
    /// Peripheral resources on connector-relative pins.
    pub resources: Vec<Resource>,
    /// PMOD pass-through connectors.
    pub connectors: Vec<Connector>,
}

/// Builds the QMTech daughterboard tables.
///
/// `io_attrs` carries the host bank's electrical attributes (the
/// daughterboard itself is passive, so the IO standard is the host's
/// choice — `IOSTANDARD=LVCMOS33` on the Xilinx core boards, `IO_TYPE` on
/// the Lattice adapter).
pub fn qmtech_daughterboard(io_attrs: &Attrs) -> Result<Daughterboard, BspError> {
    let mut resources = Vec::new();

    resources.extend(led_resources(
        "J_2:40 J_2:42 J_2:44 J_2:46 J_2:48",
        true,
        io_attrs,
    ));
    resources.extend(button_resources("J_3:7 J_3:9 J_3:11", true, io_attrs));
    resources.push(uart_resource(0, "J_3:13", "J_3:15", io_attrs.clone()));

    // Common-anode, segments a..g plus dp.
    resources.push(Resource::composite(
        "display_7seg",
        0,
        vec![
            Subsignal::new(
                "segments",
                pins(
                    "J_2:7 J_2:9 J_2:11 J_2:13 J_2:15 J_2:17 J_2:19 J_2:21",
                    Direction::Output,
                ),
            ),
            Subsignal::new("digits", pins("J_2:23 J_2:25 J_2:27", Direction::Output)),
        ],
        io_attrs.clone(),
    )?);

    resources.push(Resource::composite(
        "vga",
        0,
        vec![
            Subsignal::new(
                "r",
                pins("J_3:17 J_3:19 J_3:21 J_3:23 J_3:25", Direction::Output),
            ),
            Subsignal::new(
                "g",
                pins(
                    "J_3:27 J_3:29 J_3:31 J_3:33 J_3:35 J_3:37",
                    Direction::Output,
                ),
            ),
            Subsignal::new(
                "b",
                pins("J_3:39 J_3:41 J_3:43 J_3:45 J_3:47", Direction::Output),
            ),
            Subsignal::new("hsync", pins("J_3:49", Direction::Output)),
            Subsignal::new("vsync", pins("J_3:51", Direction::Output)),
        ],
        io_attrs.clone(),
    )?);

    let connectors = vec![
        Connector::new(
            "pmod",
            0,
            &[
                ("1", "J_2:49"),
                ("2", "J_2:51"),
                ("3", "J_2:53"),
                ("4", "J_2:55"),
                ("7", "J_2:50"),
                ("8", "J_2:52"),
                ("9", "J_2:54"),
                ("10", "J_2:56"),
            ],
        )?,
        Connector::new(
            "pmod",
            1,
            &[
                ("1", "J_3:8"),
                ("2", "J_3:10"),
                ("3", "J_3:12"),
                ("4", "J_3:14"),
                ("7", "J_3:16"),
                ("8", "J_3:18"),
                ("9", "J_3:20"),
                ("10", "J_3:22"),
            ],
        )?,
    ];

    Ok(Daughterboard {
        resources,
        connectors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use basalt_bsp::{check_unique_connectors, check_unique_resources};

    #[test]
    fn tables_are_internally_consistent() {
        let db = qmtech_daughterboard(&Attrs::io_standard("LVCMOS33")).unwrap();
        check_unique_resources(&db.resources).unwrap();
        check_unique_connectors(&db.connectors).unwrap();
    }

    #[test]
    fn five_leds_three_buttons() {
        let db = qmtech_daughterboard(&Attrs::io_standard("LVCMOS33")).unwrap();
        let leds = db.resources.iter().filter(|r| r.kind == "led").count();
        let buttons = db.resources.iter().filter(|r| r.kind == "button").count();
        assert_eq!(leds, 5);
        assert_eq!(buttons, 3);
    }

    #[test]
    fn all_pins_are_connector_relative() {
        let db = qmtech_daughterboard(&Attrs::io_standard("LVCMOS33")).unwrap();
        for r in &db.resources {
            if let Some(direct) = r.direct_pins() {
                for pin in direct {
                    assert!(
                        pin.starts_with("J_2:") || pin.starts_with("J_3:"),
                        "{pin} is not connector-relative"
                    );
                }
            }
        }
        for c in &db.connectors {
            for pin in c.package_pins() {
                assert!(pin.starts_with("J_2:") || pin.starts_with("J_3:"));
            }
        }
    }

    #[test]
    fn io_attrs_propagate() {
        let db = qmtech_daughterboard(&Attrs::new().set("IO_TYPE", "LVCMOS33")).unwrap();
        for r in &db.resources {
            assert_eq!(r.attrs.get("IO_TYPE"), Some("LVCMOS33"), "{}", r.kind);
        }
    }

    #[test]
    fn display_has_eight_segments() {
        let db = qmtech_daughterboard(&Attrs::new()).unwrap();
        let display = db
            .resources
            .iter()
            .find(|r| r.kind == "display_7seg")
            .unwrap();
        assert_eq!(display.subsignal("segments").unwrap().pin_count(), 8);
        assert_eq!(display.subsignal("digits").unwrap().pin_count(), 3);
    }
}
