//! Action Table - Rows keyed by action identifier, iterated in input order.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use super::ElectreError;

/// A table holding one row per action.
///
/// Rows are looked up by action identifier, never by position, so tables
/// produced by different pipeline stages cannot drift out of alignment.
/// Iteration follows the order in which rows were inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionTable<T> {
    order: Vec<String>,
    rows: HashMap<String, T>,
}

impl<T> ActionTable<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            rows: HashMap::new(),
        }
    }

    /// Inserts or replaces the row of an action.
    ///
    /// A replaced row keeps its original position.
    pub fn insert(&mut self, action: impl Into<String>, row: T) {
        let action = action.into();
        if !self.rows.contains_key(&action) {
            self.order.push(action.clone());
        }
        self.rows.insert(action, row);
    }

    /// Returns the row of an action, if present.
    pub fn get(&self, action: &str) -> Option<&T> {
        self.rows.get(action)
    }

    /// Returns the row of an action or a missing-entry error.
    pub fn require(&self, action: &str) -> Result<&T, ElectreError> {
        self.rows
            .get(action)
            .ok_or_else(|| ElectreError::missing_action(action))
    }

    /// Action identifiers in insertion order.
    pub fn actions(&self) -> &[String] {
        &self.order
    }

    /// Iterates rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.order
            .iter()
            .filter_map(move |action| self.rows.get(action).map(|row| (action.as_str(), row)))
    }

    /// Builds a new table by transforming every row, preserving order.
    pub fn try_map<U, E>(
        &self,
        mut f: impl FnMut(&str, &T) -> Result<U, E>,
    ) -> Result<ActionTable<U>, E> {
        let mut mapped = ActionTable::new();
        for (action, row) in self.iter() {
            mapped.insert(action, f(action, row)?);
        }
        Ok(mapped)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<T> Default for ActionTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for ActionTable<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut table = ActionTable::new();
        for (action, row) in iter {
            table.insert(action, row);
        }
        table
    }
}

impl<T: Serialize> Serialize for ActionTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (action, row) in self.iter() {
            map.serialize_entry(action, row)?;
        }
        map.end()
    }
}
