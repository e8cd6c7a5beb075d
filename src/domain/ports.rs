/// A text-carrying element the formatter can read and rewrite. Covers
/// both editable inputs (masking) and read-only elements (display);
/// the displayed text is the element's only state.
pub trait TextField {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
}

/// The page the formatter binds against. Elements are addressed by id.
/// `select` answers "which elements carry this marker class right now";
/// binding is recomputed per `initialize` call, elements added later are
/// not tracked.
pub trait Document {
    fn select(&self, marker: &str) -> Vec<String>;
    fn field(&self, id: &str) -> Option<&dyn TextField>;
    fn field_mut(&mut self, id: &str) -> Option<&mut dyn TextField>;
}

/// Marker class names used to discover bound fields. The currency prefix
/// and the grouping separator are fixed policy and deliberately not here.
pub trait MarkerProvider {
    fn input_marker(&self) -> &str;
    fn text_marker(&self) -> &str;
}

/// Default markers matching the class names the pages already use.
#[derive(Debug, Clone, Default)]
pub struct DefaultMarkers;

impl MarkerProvider for DefaultMarkers {
    fn input_marker(&self) -> &str {
        "rupiah-input"
    }

    fn text_marker(&self) -> &str {
        "rupiah-text"
    }
}
