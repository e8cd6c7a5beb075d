use crate::core::format::{extract_raw_amount, mask};
use crate::domain::ports::TextField;

/// Input-event handler for a masked field. Recomputes the displayed text
/// from scratch on every call: current text -> raw amount -> masked
/// string. Idempotent under re-application, so a double-registered
/// handler cannot stack prefixes or re-group an already grouped value.
/// A zero amount clears the field to the empty string.
pub fn reformat<F: TextField + ?Sized>(field: &mut F) {
    let current = field.text();
    let next = mask(extract_raw_amount(&current));
    if next != current {
        field.set_text(&next);
    }
}

/// Blur-event handler. A field left holding only the prefix (or any text
/// with no digits in it) is forced to the empty string so a dangling
/// "Rp " is never submitted.
pub fn settle<F: TextField + ?Sized>(field: &mut F) {
    let current = field.text();
    if !current.is_empty() && extract_raw_amount(&current).is_zero() {
        field.set_text("");
    }
}
