//! Named hardware resources and their sub-signals.

use crate::attrs::Attrs;
use crate::error::BspError;
use crate::frequency::Frequency;
use crate::pins::PinGroup;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named sub-component of a composite resource, such as a DDR3
/// resource's address bus or a UART's `tx` line.
///
/// Subsignal names are unique within their parent resource; the uniqueness
/// is enforced by [`Resource::composite`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subsignal {
    /// The subsignal name (e.g. "rx", "dq", "clk_en").
    pub name: String,
    /// The pin groups carrying this subsignal.
    pub io: Vec<PinGroup>,
    /// Attributes extending those of the parent resource.
    pub attrs: Attrs,
}

impl Subsignal {
    /// Creates a subsignal from a single pin group with no extra attributes.
    pub fn new(name: &str, io: PinGroup) -> Self {
        Self {
            name: name.to_string(),
            io: vec![io],
            attrs: Attrs::new(),
        }
    }

    /// Replaces the subsignal's attributes, returning it for chaining.
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Returns the total number of pins across the subsignal's groups.
    pub fn pin_count(&self) -> usize {
        self.io.iter().map(PinGroup::width).sum()
    }
}

/// The I/O payload of a resource: either direct pin groups or named
/// sub-signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResourceIo {
    /// Direct pin groups (simple resources: clocks, LEDs, buttons).
    Pins(Vec<PinGroup>),
    /// Named sub-signals (composite resources: DDR3, UART, PCIe).
    Subsignals(Vec<Subsignal>),
}

/// A named, indexed hardware resource exposed to the build framework.
///
/// Resources are identified by their `(kind, index)` pair, which is unique
/// within a board's final resource set (enforced by
/// [`check_unique_resources`](crate::validate::check_unique_resources)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// The resource kind (e.g. "clk50", "led", "ddr3").
    pub kind: String,
    /// The resource index, distinguishing multiple instances of a kind.
    pub index: u32,
    /// The resource's pins or sub-signals.
    pub io: ResourceIo,
    /// Optional nominal clock frequency for clock-bearing resources.
    pub clock: Option<Frequency>,
    /// Electrical attributes applying to all of the resource's pins.
    pub attrs: Attrs,
}

impl Resource {
    /// Creates a simple resource from a single pin group.
    pub fn new(kind: &str, index: u32, io: PinGroup) -> Self {
        Self {
            kind: kind.to_string(),
            index,
            io: ResourceIo::Pins(vec![io]),
            clock: None,
            attrs: Attrs::new(),
        }
    }

    /// Creates a composite resource from named sub-signals.
    ///
    /// Returns [`BspError::DuplicateSubsignal`] if two sub-signals share a
    /// name.
    pub fn composite(
        kind: &str,
        index: u32,
        subsignals: Vec<Subsignal>,
        attrs: Attrs,
    ) -> Result<Self, BspError> {
        let mut seen = BTreeSet::new();
        for sub in &subsignals {
            if !seen.insert(sub.name.as_str()) {
                return Err(BspError::DuplicateSubsignal {
                    resource: format!("{kind} {index}"),
                    name: sub.name.clone(),
                });
            }
        }
        Ok(Self {
            kind: kind.to_string(),
            index,
            io: ResourceIo::Subsignals(subsignals),
            clock: None,
            attrs,
        })
    }

    /// Attaches a clock-frequency annotation, returning the resource for
    /// chaining.
    pub fn with_clock(mut self, clock: Frequency) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Replaces the resource's attributes, returning it for chaining.
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Returns the `(kind, index)` identity of this resource.
    pub fn key(&self) -> (&str, u32) {
        (&self.kind, self.index)
    }

    /// Returns the subsignal with the given name, if this is a composite
    /// resource.
    pub fn subsignal(&self, name: &str) -> Option<&Subsignal> {
        match &self.io {
            ResourceIo::Subsignals(subs) => subs.iter().find(|s| s.name == name),
            ResourceIo::Pins(_) => None,
        }
    }

    /// Returns the total number of pins in this resource.
    pub fn pin_count(&self) -> usize {
        match &self.io {
            ResourceIo::Pins(groups) => groups.iter().map(PinGroup::width).sum(),
            ResourceIo::Subsignals(subs) => subs.iter().map(Subsignal::pin_count).sum(),
        }
    }

    /// Returns the resource's direct pins in declaration order, if this is
    /// a simple (non-composite) resource.
    pub fn direct_pins(&self) -> Option<Vec<&str>> {
        match &self.io {
            ResourceIo::Pins(groups) => {
                Some(groups.iter().flat_map(|g| g.pin_names()).collect())
            }
            ResourceIo::Subsignals(_) => None,
        }
    }
}
