use crate::core::{display, masking};
use crate::domain::ports::{Document, MarkerProvider};

/// The set of fields bound by one `initialize` call. The host routes its
/// input/blur events through this; events for unbound ids are ignored.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    masked: Vec<String>,
    display: Vec<String>,
}

/// Binds every field under `doc` bearing the marker classes. Display
/// fields are formatted immediately; masked inputs are only registered,
/// their text changes on the first input event. Call once per document
/// or per dynamically inserted fragment; fields added to the document
/// after this call are not tracked.
///
/// Safe to run repeatedly over the same document: display formatting
/// derives from the extracted raw amount, so a second pass changes
/// nothing.
pub fn initialize<D, M>(doc: &mut D, markers: &M) -> Bindings
where
    D: Document + ?Sized,
    M: MarkerProvider,
{
    let masked = doc.select(markers.input_marker());
    let display_fields = doc.select(markers.text_marker());

    for id in &display_fields {
        if let Some(field) = doc.field_mut(id) {
            display::format_text(field);
        }
    }

    tracing::debug!(
        masked = masked.len(),
        display = display_fields.len(),
        "bound rupiah fields"
    );

    Bindings {
        masked,
        display: display_fields,
    }
}

impl Bindings {
    /// Input-event entry point. Returns false when `id` is not a bound
    /// masked field.
    pub fn on_input<D: Document + ?Sized>(&self, doc: &mut D, id: &str) -> bool {
        if !self.masked.iter().any(|bound| bound == id) {
            return false;
        }
        match doc.field_mut(id) {
            Some(field) => {
                masking::reformat(field);
                true
            }
            None => false,
        }
    }

    /// Blur-event entry point: clears a field left holding only the
    /// bare prefix. Returns false when `id` is not bound.
    pub fn on_blur<D: Document + ?Sized>(&self, doc: &mut D, id: &str) -> bool {
        if !self.masked.iter().any(|bound| bound == id) {
            return false;
        }
        match doc.field_mut(id) {
            Some(field) => {
                masking::settle(field);
                true
            }
            None => false,
        }
    }

    /// Folds bindings from a later fragment into this set, so one router
    /// can serve a page assembled from several `initialize` calls.
    pub fn merge(&mut self, other: Bindings) {
        for id in other.masked {
            if !self.masked.contains(&id) {
                self.masked.push(id);
            }
        }
        for id in other.display {
            if !self.display.contains(&id) {
                self.display.push(id);
            }
        }
    }

    pub fn masked_ids(&self) -> &[String] {
        &self.masked
    }

    pub fn display_ids(&self) -> &[String] {
        &self.display
    }

    pub fn is_empty(&self) -> bool {
        self.masked.is_empty() && self.display.is_empty()
    }
}
