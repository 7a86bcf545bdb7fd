//! Constructors for common peripheral resources.
//!
//! These mirror the per-peripheral helpers board tables are written with:
//! one LED/button resource per pin, and composite resources for UART, I2C,
//! and QSPI flash.

use crate::attrs::Attrs;
use crate::pins::{pins, pins_n, Direction};
use crate::resource::{Resource, ResourceIo, Subsignal};

/// Builds one `"led"` resource per pin in the specification, indices
/// starting at 0. `invert` marks active-low LEDs.
pub fn led_resources(pin_spec: &str, invert: bool, attrs: &Attrs) -> Vec<Resource> {
    indexed_resources("led", pin_spec, Direction::Output, invert, attrs)
}

/// Builds one `"button"` resource per pin in the specification, indices
/// starting at 0. `invert` marks active-low buttons.
pub fn button_resources(pin_spec: &str, invert: bool, attrs: &Attrs) -> Vec<Resource> {
    indexed_resources("button", pin_spec, Direction::Input, invert, attrs)
}

fn indexed_resources(
    kind: &str,
    pin_spec: &str,
    dir: Direction,
    invert: bool,
    attrs: &Attrs,
) -> Vec<Resource> {
    pin_spec
        .split_whitespace()
        .enumerate()
        .map(|(i, pin)| {
            let group = if invert { pins_n(pin, dir) } else { pins(pin, dir) };
            Resource::new(kind, i as u32, group).with_attrs(attrs.clone())
        })
        .collect()
}

/// Builds a `"uart"` resource with `rx` (input) and `tx` (output)
/// sub-signals.
pub fn uart_resource(index: u32, rx: &str, tx: &str, attrs: Attrs) -> Resource {
    Resource {
        kind: "uart".to_string(),
        index,
        io: ResourceIo::Subsignals(vec![
            Subsignal::new("rx", pins(rx, Direction::Input)),
            Subsignal::new("tx", pins(tx, Direction::Output)),
        ]),
        clock: None,
        attrs,
    }
}

/// Builds an `"i2c"` resource with `scl` (output) and `sda` (bidirectional)
/// sub-signals.
pub fn i2c_resource(index: u32, scl: &str, sda: &str, attrs: Attrs) -> Resource {
    Resource {
        kind: "i2c".to_string(),
        index,
        io: ResourceIo::Subsignals(vec![
            Subsignal::new("scl", pins(scl, Direction::Output)),
            Subsignal::new("sda", pins(sda, Direction::Bidir)),
        ]),
        clock: None,
        attrs,
    }
}

/// Builds a `"qspi_flash"` resource with active-low chip select, clock,
/// and a `dq` data bus.
pub fn spi_flash_resource(index: u32, cs_n: &str, clk: &str, dq: &str, attrs: Attrs) -> Resource {
    Resource {
        kind: "qspi_flash".to_string(),
        index,
        io: ResourceIo::Subsignals(vec![
            Subsignal::new("cs", pins_n(cs_n, Direction::Output)),
            Subsignal::new("clk", pins(clk, Direction::Output)),
            Subsignal::new("dq", pins(dq, Direction::Bidir)),
        ]),
        clock: None,
        attrs,
    }
}
