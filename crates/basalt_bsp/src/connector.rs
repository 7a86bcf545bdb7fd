//! Connector pinout tables mapping slot-pin labels to package pins.

use crate::error::BspError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A physical connector whose slot-pin labels map to device package pins.
///
/// Labels are strings (typically decimal pin numbers as text) and are
/// unique within one connector; ground, power, and no-connect pins are
/// simply omitted from the table. Declaration order is preserved: variant
/// assembly concatenates connector pin values in the order the board table
/// lists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    /// The connector name (e.g. "J", "BTB", "pmod").
    pub name: String,
    /// The connector index, distinguishing multiple instances of a name.
    pub index: u32,
    /// Ordered (slot label, package pin) entries.
    entries: Vec<(String, String)>,
}

impl Connector {
    /// Creates a connector from ordered `(label, package pin)` entries.
    ///
    /// Returns [`BspError::DuplicatePinLabel`] if a label appears twice.
    pub fn new(name: &str, index: u32, entries: &[(&str, &str)]) -> Result<Self, BspError> {
        let mut seen = BTreeSet::new();
        for (label, _) in entries {
            if !seen.insert(*label) {
                return Err(BspError::DuplicatePinLabel {
                    connector: format!("{name}{index}"),
                    label: (*label).to_string(),
                });
            }
        }
        Ok(Self {
            name: name.to_string(),
            index,
            entries: entries
                .iter()
                .map(|(l, p)| ((*l).to_string(), (*p).to_string()))
                .collect(),
        })
    }

    /// Returns the `(name, index)` identity of this connector.
    pub fn key(&self) -> (&str, u32) {
        (&self.name, self.index)
    }

    /// Returns the display identifier, e.g. `"J2"` or `"BTB0"`.
    pub fn ident(&self) -> String {
        format!("{}{}", self.name, self.index)
    }

    /// Looks up the package pin for a slot-pin label.
    pub fn pin(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, p)| p.as_str())
    }

    /// Iterates over slot-pin labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// Iterates over package pins in declaration order.
    pub fn package_pins(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, p)| p.as_str())
    }

    /// Returns the number of mapped slot pins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the connector maps no pins.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_label() {
        let c = Connector::new("J", 2, &[("7", "T1"), ("8", "U1"), ("9", "Y2")]).unwrap();
        assert_eq!(c.pin("8"), Some("U1"));
        assert_eq!(c.pin("10"), None);
        assert_eq!(c.len(), 3);
        assert!(!c.is_empty());
    }

    #[test]
    fn ident_and_key() {
        let c = Connector::new("BTB", 1, &[("3", "AJ11")]).unwrap();
        assert_eq!(c.ident(), "BTB1");
        assert_eq!(c.key(), ("BTB", 1));
    }

    #[test]
    fn declaration_order_preserved() {
        // Labels are decimal text; "10" must stay after "7", not sort
        // before it.
        let c = Connector::new("J", 3, &[("7", "U16"), ("9", "C18"), ("10", "K18")]).unwrap();
        let labels: Vec<&str> = c.labels().collect();
        assert_eq!(labels, vec!["7", "9", "10"]);
        let pins: Vec<&str> = c.package_pins().collect();
        assert_eq!(pins, vec!["U16", "C18", "K18"]);
    }

    #[test]
    fn duplicate_label_rejected() {
        let err = Connector::new("J", 2, &[("7", "T1"), ("7", "U1")]).unwrap_err();
        assert_eq!(
            err,
            BspError::DuplicatePinLabel {
                connector: "J2".to_string(),
                label: "7".to_string(),
            }
        );
    }

    #[test]
    fn empty_connector() {
        let c = Connector::new("pmod", 0, &[]).unwrap();
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
    }

    #[test]
    fn serde_roundtrip() {
        let c = Connector::new("J", 2, &[("7", "T1"), ("8", "U1")]).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        let restored: Connector = serde_json::from_str(&json).unwrap();
        assert_eq!(c, restored);
    }
}
