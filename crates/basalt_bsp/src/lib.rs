//! Core board-support data model for the Basalt board definitions.
//!
//! This crate provides the building blocks a board definition is made of:
//! pin groups ([`PinGroup`]), electrical attributes ([`Attrs`]), clock
//! annotations ([`Frequency`]), named resources ([`Resource`]) with optional
//! sub-signals ([`Subsignal`]), and connector pinout tables ([`Connector`]).
//!
//! All entities are constructed once when a board is assembled and are
//! immutable afterwards; the board crates expose them read-only to the
//! build framework.

#![warn(missing_docs)]

pub mod attrs;
pub mod connector;
pub mod error;
pub mod frequency;
pub mod peripherals;
pub mod pins;
pub mod resource;
pub mod validate;

pub use attrs::Attrs;
pub use connector::Connector;
pub use error::BspError;
pub use frequency::Frequency;
pub use peripherals::{
    button_resources, i2c_resource, led_resources, spi_flash_resource, uart_resource,
};
pub use pins::{diff_pairs, pins, pins_n, Direction, ParseDirectionError, PinGroup};
pub use resource::{Resource, ResourceIo, Subsignal};
pub use validate::{check_unique_connectors, check_unique_resources};
