use rupiah_fmt::core::binder;
use rupiah_fmt::{DefaultMarkers, PageConfig};
use std::fs;
use tempfile::TempDir;

const SAVINGS_PAGE: &str = r#"
[page]
name = "simpanan_anggota"
description = "Member savings detail"

[[fields]]
id = "jumlah_setoran"
classes = ["rupiah-input"]

[[fields]]
id = "saldo"
classes = ["rupiah-text"]
text = "150000"

[[fields]]
id = "saldo_kosong"
classes = ["rupiah-text"]
text = "0"

[[fields]]
id = "keterangan"
classes = ["rupiah-text"]
text = "belum ada transaksi"

[[fields]]
id = "total"
classes = ["rupiah-text"]
text = "Rp 1.234.567"
"#;

fn write_page(dir: &TempDir) -> String {
    let path = dir.path().join("simpanan.toml");
    fs::write(&path, SAVINGS_PAGE).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_initialize_formats_display_fields_from_file() {
    let dir = TempDir::new().unwrap();
    let page = PageConfig::from_file(write_page(&dir)).unwrap();
    let mut doc = page.build_document();

    let bindings = binder::initialize(&mut doc, &DefaultMarkers);

    assert_eq!(bindings.masked_ids(), ["jumlah_setoran"]);
    assert_eq!(bindings.display_ids().len(), 4);

    // Positive amounts are rewritten; zero and unparsable text stay as-is.
    assert_eq!(doc.text_of("saldo").unwrap(), "Rp 150.000");
    assert_eq!(doc.text_of("saldo_kosong").unwrap(), "0");
    assert_eq!(doc.text_of("keterangan").unwrap(), "belum ada transaksi");

    // Already-prefixed text normalizes to the same masked form.
    assert_eq!(doc.text_of("total").unwrap(), "Rp 1.234.567");

    // Masked inputs are registered but not touched at init.
    assert_eq!(doc.text_of("jumlah_setoran").unwrap(), "");
}

#[test]
fn test_second_initialization_pass_is_noop() {
    let dir = TempDir::new().unwrap();
    let page = PageConfig::from_file(write_page(&dir)).unwrap();
    let mut doc = page.build_document();

    binder::initialize(&mut doc, &DefaultMarkers);
    let after_first: Vec<Option<String>> = ["saldo", "saldo_kosong", "keterangan", "total"]
        .iter()
        .map(|id| doc.text_of(id))
        .collect();

    binder::initialize(&mut doc, &DefaultMarkers);
    let after_second: Vec<Option<String>> = ["saldo", "saldo_kosong", "keterangan", "total"]
        .iter()
        .map(|id| doc.text_of(id))
        .collect();

    assert_eq!(after_first, after_second);
}

#[test]
fn test_missing_page_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(PageConfig::from_file(&missing).is_err());
}

#[test]
fn test_invalid_page_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "this is not a page").unwrap();
    assert!(PageConfig::from_file(&path).is_err());
}
