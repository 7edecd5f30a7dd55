//! Building a [`HashTable`] from a sequence of records and flattening it back.

use tracing::Level;

use crate::{
    error::TableError,
    hashmap::{HashTable, OnDuplicate},
    record::Record,
};

impl<R: Record> HashTable<R> {
    /// Keys each record by `key_field`, or by position when no field is given.
    ///
    /// A record lacking the field gets the next sequential key instead, and
    /// the rest of the sequence is still converted. The capacity defaults to
    /// the number of records.
    pub fn from_sequence(
        records: impl IntoIterator<Item = R>,
        capacity_hint: Option<usize>,
        key_field: Option<&str>,
        on_duplicate: OnDuplicate,
    ) -> Result<HashTable<R>, TableError> {
        match key_field {
            Some(field) => build(
                records,
                capacity_hint,
                Some(|record: &R| record.field(field).map(|key| key.into_owned())),
                on_duplicate,
            ),
            None => HashTable::from_values(records, capacity_hint, on_duplicate),
        }
    }
}

impl<V> HashTable<V> {
    /// Like `from_sequence`, with the key taken from `projection`. `None`
    /// falls back to the next sequential key.
    pub fn from_sequence_by<F>(
        records: impl IntoIterator<Item = V>,
        capacity_hint: Option<usize>,
        projection: F,
        on_duplicate: OnDuplicate,
    ) -> Result<HashTable<V>, TableError>
    where
        F: FnMut(&V) -> Option<String>,
    {
        build(records, capacity_hint, Some(projection), on_duplicate)
    }

    /// Keys values `0, 1, 2, ...` in input order.
    pub fn from_values(
        values: impl IntoIterator<Item = V>,
        capacity_hint: Option<usize>,
        on_duplicate: OnDuplicate,
    ) -> Result<HashTable<V>, TableError> {
        build(
            values,
            capacity_hint,
            None::<fn(&V) -> Option<String>>,
            on_duplicate,
        )
    }

    /// Values in slot order, each chain front to back. Collided entries come
    /// out newest first, so this is a permutation of the input, not a replay.
    pub fn to_sequence(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values().cloned().collect()
    }

    pub fn into_sequence(self) -> Vec<V> {
        self.into_entries().map(|entry| entry.value).collect()
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(capacity_hint = ?capacity_hint, on_duplicate = %on_duplicate))]
fn build<V, F>(
    records: impl IntoIterator<Item = V>,
    capacity_hint: Option<usize>,
    mut projection: Option<F>,
    on_duplicate: OnDuplicate,
) -> Result<HashTable<V>, TableError>
where
    F: FnMut(&V) -> Option<String>,
{
    let records: Vec<V> = records.into_iter().collect();
    let mut table = HashTable::new(capacity_hint.unwrap_or(records.len()))?;
    let mut sequence = 0usize;
    for (position, record) in records.into_iter().enumerate() {
        let projected = projection.as_mut().and_then(|project| project(&record));
        match projected {
            Some(key) => table.add(key, record, on_duplicate)?,
            None => {
                if projection.is_some() {
                    tracing::event!(
                        Level::WARN,
                        name = "Key field missing",
                        "position" = position,
                        "fallback" = sequence
                    );
                }
                table.add(sequence, record, on_duplicate)?;
                sequence += 1;
            }
        }
    }
    tracing::event!(Level::DEBUG, name = "Converted", "entries" = table.len());
    Ok(table)
}
