use crate::utils::error::{Result, RupiahError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RupiahError::ValidationError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

// Marker classes end up in selector queries, so they must look like a
// single CSS class token.
pub fn validate_marker_name(field_name: &str, marker: &str) -> Result<()> {
    validate_non_empty_string(field_name, marker)?;

    let valid = marker
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid || marker.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(RupiahError::ValidationError {
            field: field_name.to_string(),
            reason: format!("'{}' is not a valid marker class name", marker),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RupiahError::ValidationError {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RupiahError::ValidationError {
            field: field_name.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_marker_name() {
        assert!(validate_marker_name("input_marker", "rupiah-input").is_ok());
        assert!(validate_marker_name("input_marker", "saldo_text").is_ok());
        assert!(validate_marker_name("input_marker", "").is_err());
        assert!(validate_marker_name("input_marker", "rupiah input").is_err());
        assert!(validate_marker_name("input_marker", "1rupiah").is_err());
        assert!(validate_marker_name("input_marker", ".rupiah-input").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("id", "saldo").is_ok());
        assert!(validate_non_empty_string("id", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("page", "./pages/simpanan.toml").is_ok());
        assert!(validate_path("page", "").is_err());
    }
}
