//! Configuration loading tests
//!
//! Tests that speller configuration loads correctly
//! and provides expected default values

use phonetic::config::{Config, OutputFormat};
use phonetic::{LetterTable, PhoneticError, NATO};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("phonetic.cfg");
    let config = Config::load_from(&path).expect("Missing config should not fail");

    assert_eq!(config.path(), Some(path.as_path()));
    assert_eq!(config.words(), NATO.to_vec());
    assert_eq!(config.connector(), " as in ");
    assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp config");
    write!(
        file,
        "[speller]\nwords = Able, Baker, Charlie\nconnector = =>\nformat = json\n"
    )
    .unwrap();

    let config = Config::load_from(file.path()).expect("Failed to load config");

    assert_eq!(config.words(), vec!["Able", "Baker", "Charlie"]);
    assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
    assert_eq!(config.connector(), "=>");
}

#[test]
fn test_unreadable_path_is_io_error() {
    // A directory exists but cannot be read as a file
    let dir = TempDir::new().expect("Failed to create temp dir");
    let result = Config::load_from(dir.path());
    assert!(matches!(result, Err(PhoneticError::Io(_))));
}

#[test]
fn test_custom_words_drive_speller() {
    let config = Config::from_ini_str("[speller]\nwords = Able,,Baker,Easy\n").unwrap();
    let words = config.words();
    // Empty entries survive parsing and are skipped by the table
    assert_eq!(words.len(), 4);

    let table = LetterTable::from_words(&words);
    assert_eq!(table.len(), 3);
    assert_eq!(table.translate("Abe").unwrap(), vec!["Able", "Baker", "Easy"]);
    assert!(matches!(
        table.translate("Cab"),
        Err(PhoneticError::InvalidName(_))
    ));
}

#[test]
fn test_bad_ini_is_reported() {
    let result = Config::from_ini_str("[speller\nwords = A\n");
    assert!(matches!(result, Err(PhoneticError::IniParse(_))));
}
