//! Insertion-ordered variable map.

use std::collections::HashMap;

/// Ordered map of CSS custom-property name to raw value.
///
/// Iteration follows discovery order. Re-inserting a name replaces its
/// value but keeps the position where it was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.index.get(&name) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Remove a name, shifting later entries up.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let i = self.index.remove(name)?;
        let (_, value) = self.entries.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Merge `other` into `self`, `other` winning on conflicts.
    pub fn extend_from(&mut self, other: &VariableMap) {
        for (name, value) in other.iter() {
            self.insert(name, value);
        }
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut map = VariableMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl IntoIterator for VariableMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
