use crate::adapters::memory::{MemoryDocument, MemoryField};
use crate::utils::error::{Result, RupiahError};
use crate::utils::validation::{validate_marker_name, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// TOML description of a static page fragment: the fields a template
/// would render, with their marker classes and initial text. Lets the
/// binder be exercised end to end without a browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub page: PageMeta,
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldEntry {
    pub id: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub text: String,
}

impl PageConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: PageConfig =
            toml::from_str(&raw).map_err(|e| RupiahError::ConfigError {
                message: format!("Invalid page file: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Materializes the page into an in-memory document the binder can
    /// run against.
    pub fn build_document(&self) -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        for entry in &self.fields {
            let classes: Vec<&str> = entry.classes.iter().map(String::as_str).collect();
            doc.insert(&entry.id, MemoryField::new(&classes, &entry.text));
        }
        doc
    }
}

impl Validate for PageConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("page.name", &self.page.name)?;

        let mut seen = HashSet::new();
        for entry in &self.fields {
            validate_non_empty_string("fields.id", &entry.id)?;
            if !seen.insert(entry.id.as_str()) {
                return Err(RupiahError::ConfigError {
                    message: format!("Duplicate field id: {}", entry.id),
                });
            }
            for class in &entry.classes {
                validate_marker_name("fields.classes", class)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[page]
name = "simpanan_anggota"
description = "Savings detail page"

[[fields]]
id = "jumlah"
classes = ["rupiah-input"]

[[fields]]
id = "saldo"
classes = ["rupiah-text"]
text = "150000"
"#;

    #[test]
    fn test_parse_sample_page() {
        let config: PageConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.page.name, "simpanan_anggota");
        assert_eq!(config.fields.len(), 2);
        assert_eq!(config.fields[1].text, "150000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_build_document() {
        let config: PageConfig = toml::from_str(SAMPLE).unwrap();
        let doc = config.build_document();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.text_of("saldo").as_deref(), Some("150000"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let raw = r#"
[page]
name = "p"

[[fields]]
id = "a"

[[fields]]
id = "a"
"#;
        let config: PageConfig = toml::from_str(raw).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_class_rejected() {
        let raw = r#"
[page]
name = "p"

[[fields]]
id = "a"
classes = ["rupiah input"]
"#;
        let config: PageConfig = toml::from_str(raw).unwrap();
        assert!(config.validate().is_err());
    }
}
