//! Electrical attribute maps attached to resources and subsignals.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered map of electrical attributes (`IOSTANDARD`, `IO_TYPE`,
/// `DRIVE`, `SLEW`, …) attached to a resource, subsignal, or pin group.
///
/// Attribute names follow the vendor toolchain's vocabulary: Xilinx boards
/// use `IOSTANDARD`/`SLEW`, Lattice (Trellis) boards use `IO_TYPE`/`DRIVE`.
/// Attributes on a subsignal extend those on its parent resource; the build
/// framework performs the merge when emitting constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attrs(BTreeMap<String, String>);

impl Attrs {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an attribute map with a single `IOSTANDARD` entry, the
    /// dominant case in Xilinx board tables.
    pub fn io_standard(value: &str) -> Self {
        Self::new().set("IOSTANDARD", value)
    }

    /// Adds or replaces an attribute, returning the map for chaining.
    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    /// Looks up an attribute value by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns true if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
