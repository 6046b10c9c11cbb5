//! Ordered collection of generated records

use crate::domain::entities::{Record, RecordField};

/// Records in insertion order, unique by id
///
/// There is no way to reorder; removal keeps the relative order of the
/// records that remain.
#[derive(Debug, Clone)]
pub struct RecordCollection<T> {
    records: Vec<T>,
}

impl<T: Record> RecordCollection<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Append a record and return a reference to it
    pub(crate) fn push(&mut self, record: T) -> &T {
        debug_assert!(self.get(record.id()).is_none(), "duplicate id {}", record.id());
        let index = self.records.len();
        self.records.push(record);
        &self.records[index]
    }

    /// Replace an editable field; returns `false` if no record has that id
    pub fn update_field(&mut self, id: T::Id, field: RecordField, value: impl Into<String>) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.set_field(field, value.into());
                true
            }
            None => false,
        }
    }

    /// Remove the record with that id, if any
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let pos = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(pos))
    }
}

impl<T: Record> Default for RecordCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Record> IntoIterator for &'a RecordCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
