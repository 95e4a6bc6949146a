use crate::markup::{Markup, NULL_MARKER};
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEntry {
    Single(Markup),
    List(Vec<Markup>),
}

impl Serialize for FormEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(markup) => markup.serialize(serializer),
            Self::List(items) => items.serialize(serializer),
        }
    }
}

/// Named form elements in insertion order. Serializes as a map for template contexts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSet {
    entries: Vec<(String, FormEntry)>,
}

impl FormSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `element`, replacing [`NULL_MARKER`] with `name`. An existing entry is replaced.
    pub fn add(&mut self, name: &str, element: &Markup) {
        self.update(name, FormEntry::Single(element.replace_marker(name)));
    }

    /// Adds a list of elements; the marker of element `i` becomes `<name>_<i>`.
    pub fn add_list(&mut self, name: &str, elements: &[Markup]) {
        let items = elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                if element.contains(NULL_MARKER) { element.replace_marker(&format!("{name}_{index}")) } else { element.clone() }
            })
            .collect();
        self.update(name, FormEntry::List(items));
    }

    /// Sets `name` to `entry` as given, without marker replacement.
    pub fn update(&mut self, name: &str, entry: FormEntry) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = entry,
            None => self.entries.push((name.to_owned(), entry)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<FormEntry> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, name: &str) -> Option<&FormEntry> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormEntry)> {
        self.entries.iter().map(|(n, e)| (n.as_str(), e))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FormSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}
