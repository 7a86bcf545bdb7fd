//! `basalt.toml` project-file loading for the Basalt CLI.
//!
//! A project file selects a board and its variant, optionally declares
//! caller-supplied extra resources, and records where the build framework
//! leaves the bitstream. Loading validates the file before anything is
//! constructed from it: an invalid variant combination never reaches the
//! board registry.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{BoardSection, ExtraResourceConfig, FlashSection, ProjectConfig};
