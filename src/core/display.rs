use crate::core::format::{apply_prefix, extract_raw_amount, format_grouped};
use crate::domain::ports::TextField;

/// One-shot display formatting for a read-only element. A positive
/// amount is rewritten to the prefixed, grouped form; zero or unparsable
/// text is preserved verbatim. Deriving from the extracted raw amount
/// makes a second pass over an already formatted element a no-op.
pub fn format_text<F: TextField + ?Sized>(field: &mut F) {
    let current = field.text();
    let amount = extract_raw_amount(&current);
    if amount.is_zero() {
        return;
    }
    let next = apply_prefix(&format_grouped(amount));
    if next != current {
        field.set_text(&next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryField;

    #[test]
    fn test_plain_number_is_formatted() {
        let mut field = MemoryField::new(&["rupiah-text"], "150000");
        format_text(&mut field);
        assert_eq!(field.text(), "Rp 150.000");
    }

    #[test]
    fn test_second_pass_is_noop() {
        let mut field = MemoryField::new(&["rupiah-text"], "150000");
        format_text(&mut field);
        format_text(&mut field);
        assert_eq!(field.text(), "Rp 150.000");
    }

    #[test]
    fn test_zero_text_untouched() {
        let mut field = MemoryField::new(&["rupiah-text"], "0");
        format_text(&mut field);
        assert_eq!(field.text(), "0");
    }

    #[test]
    fn test_empty_and_unparsable_untouched() {
        let mut field = MemoryField::new(&["rupiah-text"], "");
        format_text(&mut field);
        assert_eq!(field.text(), "");

        let mut field = MemoryField::new(&["rupiah-text"], "belum ada saldo");
        format_text(&mut field);
        assert_eq!(field.text(), "belum ada saldo");
    }
}
