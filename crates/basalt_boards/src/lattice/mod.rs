//! Lattice ECP5 boards.
//!
//! The Colorlight i5/i9 SODIMM modules and the open-hardware adapter that
//! re-hosts them in the QMTech core-board form factor.

pub mod colorlight;
pub mod colorlight_qmtech;

pub use colorlight::{module_profile, module_resources, ModuleProfile, SodimmModule};
pub use colorlight_qmtech::{ColorlightQmtech, ColorlightQmtechConfig};
