//! Uniqueness checks over assembled board tables.

use crate::connector::Connector;
use crate::error::BspError;
use crate::resource::Resource;
use std::collections::BTreeSet;

/// Checks that no two resources share a `(kind, index)` pair.
pub fn check_unique_resources(resources: &[Resource]) -> Result<(), BspError> {
    let mut seen = BTreeSet::new();
    for r in resources {
        if !seen.insert(r.key()) {
            return Err(BspError::DuplicateResource {
                kind: r.kind.clone(),
                index: r.index,
            });
        }
    }
    Ok(())
}

/// Checks that no two connectors share a `(name, index)` pair.
///
/// Label uniqueness within one connector is already enforced at
/// [`Connector::new`].
pub fn check_unique_connectors(connectors: &[Connector]) -> Result<(), BspError> {
    let mut seen = BTreeSet::new();
    for c in connectors {
        if !seen.insert(c.key()) {
            return Err(BspError::DuplicateConnector {
                name: c.name.clone(),
                index: c.index,
            });
        }
    }
    Ok(())
}
