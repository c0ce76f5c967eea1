//! Reference table from codes to display names.

use std::collections::HashMap;

use crate::{Code, ModelError, Result};

/// An insertion-ordered mapping from [`Code`] to display name.
///
/// Iteration follows insertion order, which is also the order in which
/// equally scored search candidates are reported. Re-inserting an existing
/// code replaces its name but keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeMapping {
    entries: Vec<(Code, String)>,
    index: HashMap<Code, usize>,
}

impl CodeMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from `(code, name)` pairs, failing on a blank name.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Code, S)>,
        S: Into<String>,
    {
        let mut mapping = Self::new();
        for (code, name) in entries {
            mapping.insert(code, name)?;
        }
        Ok(mapping)
    }

    /// Inserts or replaces the name for `code`.
    ///
    /// Returns the previous name when the code was already present.
    pub fn insert(&mut self, code: Code, name: impl Into<String>) -> Result<Option<String>> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName(code));
        }
        if let Some(&position) = self.index.get(&code) {
            let previous = std::mem::replace(&mut self.entries[position].1, name);
            return Ok(Some(previous));
        }
        self.index.insert(code, self.entries.len());
        self.entries.push((code, name));
        Ok(None)
    }

    pub fn get(&self, code: Code) -> Option<&str> {
        self.index
            .get(&code)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn contains(&self, code: Code) -> bool {
        self.index.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Code, &str)> {
        self.entries.iter().map(|(code, name)| (*code, name.as_str()))
    }

    /// Entries ordered by ascending code, for listings.
    pub fn sorted_by_code(&self) -> Vec<(Code, &str)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by_key(|(code, _)| *code);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(value: u32) -> Code {
        Code::new(value)
    }

    #[test]
    fn preserves_insertion_order() {
        let mapping =
            CodeMapping::from_entries([(code(40), "Austria"), (code(36), "Australia")]).unwrap();
        let codes: Vec<u32> = mapping.iter().map(|(c, _)| c.get()).collect();
        assert_eq!(codes, vec![40, 36]);
    }

    #[test]
    fn reinsert_replaces_name_in_place() {
        let mut mapping =
            CodeMapping::from_entries([(code(1), "One"), (code(2), "Two")]).unwrap();
        let previous = mapping.insert(code(1), "Uno").unwrap();
        assert_eq!(previous.as_deref(), Some("One"));
        assert_eq!(mapping.len(), 2);
        let names: Vec<&str> = mapping.iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["Uno", "Two"]);
    }

    #[test]
    fn rejects_blank_names() {
        let mut mapping = CodeMapping::new();
        assert_eq!(
            mapping.insert(code(5), "  "),
            Err(ModelError::EmptyName(code(5)))
        );
        assert!(mapping.is_empty());
    }

    #[test]
    fn sorted_by_code_orders_keys() {
        let mapping = CodeMapping::from_entries([
            (code(792), "Turkey"),
            (code(36), "Australia"),
            (code(643), "Russian Federation"),
        ])
        .unwrap();
        let codes: Vec<u32> = mapping.sorted_by_code().iter().map(|(c, _)| c.get()).collect();
        assert_eq!(codes, vec![36, 643, 792]);
        assert_eq!(mapping.get(code(643)), Some("Russian Federation"));
        assert!(!mapping.contains(code(1)));
    }
}
