//! Error types for the `chainmap` crate

/// Errors raised while constructing or inserting into a [`HashTable`].
///
/// Absence is not an error: lookups and removals return `None` instead.
///
/// [`HashTable`]: crate::hashmap::HashTable
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TableError {
    /// A table needs at least one bucket slot to compute an index.
    #[error("table capacity must be greater than zero")]
    InvalidCapacity,

    /// `add` under [`OnDuplicate::Fail`] found the key already present.
    ///
    /// [`OnDuplicate::Fail`]: crate::hashmap::OnDuplicate::Fail
    #[error("key must be unique: {key:?} is already present")]
    DuplicateKey { key: String },
}
