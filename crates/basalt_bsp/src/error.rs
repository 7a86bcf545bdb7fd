//! Error types for board-support table construction.

/// Errors raised while constructing resources, connectors, or validating
/// assembled board tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BspError {
    /// A connector declared the same slot-pin label twice.
    #[error("connector {connector}: duplicate slot pin '{label}'")]
    DuplicatePinLabel {
        /// The connector's display identifier (e.g. "J2").
        connector: String,
        /// The duplicated slot-pin label.
        label: String,
    },

    /// A composite resource declared the same subsignal name twice.
    #[error("resource {resource}: duplicate subsignal '{name}'")]
    DuplicateSubsignal {
        /// The resource's display identifier (e.g. "ddr3 0").
        resource: String,
        /// The duplicated subsignal name.
        name: String,
    },

    /// A resource set contains two entries with the same (kind, index) pair.
    #[error("duplicate resource ({kind}, {index})")]
    DuplicateResource {
        /// The resource kind.
        kind: String,
        /// The resource index.
        index: u32,
    },

    /// A connector set contains two entries with the same (name, index) pair.
    #[error("duplicate connector ({name}, {index})")]
    DuplicateConnector {
        /// The connector name.
        name: String,
        /// The connector index.
        index: u32,
    },
}
