use crate::domain::ports::{Document, TextField};

/// In-memory stand-in for one page element: a set of marker classes and
/// the displayed text.
#[derive(Debug, Clone, Default)]
pub struct MemoryField {
    classes: Vec<String>,
    text: String,
}

impl MemoryField {
    pub fn new(classes: &[&str], text: &str) -> Self {
        Self {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            text: text.to_string(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl TextField for MemoryField {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// In-memory document: an ordered id -> field map. Keeps insertion order
/// so renders are deterministic.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    fields: Vec<(String, MemoryField)>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field under `id`, replacing any existing field with that id.
    pub fn insert(&mut self, id: &str, field: MemoryField) {
        if let Some(slot) = self.fields.iter_mut().find(|(fid, _)| fid == id) {
            slot.1 = field;
        } else {
            self.fields.push((id.to_string(), field));
        }
    }

    pub fn text_of(&self, id: &str) -> Option<String> {
        self.fields
            .iter()
            .find(|(fid, _)| fid == id)
            .map(|(_, f)| f.text())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Document for MemoryDocument {
    fn select(&self, marker: &str) -> Vec<String> {
        self.fields
            .iter()
            .filter(|(_, field)| field.has_class(marker))
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn field(&self, id: &str) -> Option<&dyn TextField> {
        self.fields
            .iter()
            .find(|(fid, _)| fid == id)
            .map(|(_, f)| f as &dyn TextField)
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut dyn TextField> {
        self.fields
            .iter_mut()
            .find(|(fid, _)| fid == id)
            .map(|(_, f)| f as &mut dyn TextField)
    }
}
