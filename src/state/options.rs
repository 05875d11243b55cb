//! Option Lists
//!
//! Ordered (label, key) entries backing an index-selected field. Lists
//! are populated at load time or by an enrichment pipeline; the user's
//! selection is an index into the list and survives appends as long as
//! its backing key is still present.

/// One selectable option: a display label and the persisted backing key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionEntry {
    pub label: String,
    pub key: String,
}

/// An ordered option list with a selected index
#[derive(Clone, Debug, Default)]
pub struct OptionList {
    entries: Vec<OptionEntry>,
    selected: usize,
}

impl OptionList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list whose index 0 is a fixed sentinel entry. Discovered
    /// entries are appended after it and can never collide with index 0.
    pub fn with_sentinel(label: impl Into<String>, key: impl Into<String>) -> Self {
        let mut list = Self::new();
        list.push(label, key);
        list
    }

    /// Remove all entries and reset the selection
    pub fn clear(&mut self) {
        self.entries.clear();
        self.selected = 0;
    }

    /// Append an entry
    pub fn push(&mut self, label: impl Into<String>, key: impl Into<String>) {
        self.entries.push(OptionEntry {
            label: label.into(),
            key: key.into(),
        });
    }

    /// All entries in order
    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Currently selected index (0 for an empty list)
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set the selection by index, clamped into range
    pub fn set_selected(&mut self, index: usize) {
        self.selected = if self.entries.is_empty() {
            0
        } else {
            index.min(self.entries.len() - 1)
        };
    }

    /// Move the selection onto the entry with the given backing key.
    ///
    /// Returns true when the key was found. A missing key falls back to
    /// index 0, so the selection never points past the list.
    pub fn select_key(&mut self, key: &str) -> bool {
        match self.entries.iter().position(|e| e.key == key) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => {
                self.selected = 0;
                false
            }
        }
    }

    /// Backing key of the selected entry
    pub fn selected_key(&self) -> Option<&str> {
        self.entries.get(self.selected).map(|e| e.key.as_str())
    }

    /// Display label of the selected entry
    pub fn selected_label(&self) -> Option<&str> {
        self.entries.get(self.selected).map(|e| e.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(keys: &[&str]) -> OptionList {
        let mut list = OptionList::new();
        for key in keys {
            list.push(format!("label-{key}"), *key);
        }
        list
    }

    #[test]
    fn selection_survives_appends() {
        let mut list = list_with(&["a", "b", "c"]);
        assert!(list.select_key("b"));
        assert_eq!(list.selected(), 1);

        // Append entries that do not contain "b".
        list.push("label-d", "d");
        list.push("label-e", "e");
        assert!(list.select_key("b"));
        assert_eq!(list.selected(), 1);
        assert_eq!(list.selected_key(), Some("b"));
    }

    #[test]
    fn missing_key_falls_back_to_zero() {
        let mut list = list_with(&["a", "b"]);
        assert!(!list.select_key("z"));
        assert_eq!(list.selected(), 0);
        assert_eq!(list.selected_key(), Some("a"));
    }

    #[test]
    fn sentinel_occupies_index_zero() {
        let mut list = OptionList::with_sentinel("Default", "0");
        list.push("eth0", "if-1");
        assert_eq!(list.entries()[0].key, "0");
        assert!(list.select_key("if-1"));
        assert_eq!(list.selected(), 1);
    }

    #[test]
    fn set_selected_clamps_into_range() {
        let mut list = list_with(&["a", "b"]);
        list.set_selected(10);
        assert_eq!(list.selected(), 1);

        let mut empty = OptionList::new();
        empty.set_selected(3);
        assert_eq!(empty.selected(), 0);
        assert_eq!(empty.selected_key(), None);
    }
}
