//! Configuration management

use crate::phonetics::NATO;
use crate::{PhoneticError, Result};
use ini::Ini;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

const SECTION: &str = "speller";
const DEFAULT_CONNECTOR: &str = " as in ";

/// How a spelling is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One "L as in LIMA" line per letter
    Text,
    /// A single JSON object
    Json,
}

/// Settings for the command-line speller
///
/// Read from an INI file (~/.phonetic.cfg by default). A missing file just
/// means every setting takes its default.
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Where the config was (or would have been) read from
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(path),
            None => {
                info!("No home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file
    ///
    /// Falls back to defaults when the file does not exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            let text = fs::read_to_string(path)?;
            Self::parse_ini(&text)?
        } else {
            info!("Config file {:?} not found, using defaults", path);
            Ini::new()
        };

        Ok(Self {
            ini,
            path: Some(path.to_path_buf()),
        })
    }

    /// Parse configuration from INI text
    pub fn from_ini_str(text: &str) -> Result<Self> {
        Ok(Self {
            ini: Self::parse_ini(text)?,
            path: None,
        })
    }

    fn parse_ini(text: &str) -> Result<Ini> {
        Ini::load_from_str(text)
            .map_err(|e| PhoneticError::IniParse(format!("Failed to parse config: {}", e)))
    }

    /// Default config file path (~/.phonetic.cfg)
    fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".phonetic.cfg"))
    }

    /// Expose the config file path for display
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    /// Word list used for spelling
    ///
    /// A comma separated `words` entry replaces the NATO alphabet. Entries
    /// are trimmed but empty ones are kept; the speller skips them.
    pub fn words(&self) -> Vec<String> {
        match self.ini.get_from(Some(SECTION), "words") {
            Some(list) if !list.trim().is_empty() => {
                list.split(',').map(|w| w.trim().to_string()).collect()
            }
            _ => NATO.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Text placed between the letter and its word in text output
    pub fn connector(&self) -> String {
        self.get_string(SECTION, "connector", DEFAULT_CONNECTOR)
    }

    /// Output format, `text` or `json`
    pub fn output_format(&self) -> Result<OutputFormat> {
        let value = self.get_string(SECTION, "format", "text");
        match value.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(PhoneticError::Config(format!(
                "Unknown output format {:?} (expected text or json)",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ini: Ini::new(),
            path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.words(), NATO.to_vec());
        assert_eq!(config.connector(), " as in ");
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
        assert!(config.path().is_none());
    }

    #[test]
    fn test_set_overrides() {
        let mut config = Config::default();
        config.set("speller", "format", "JSON");
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);

        config.set("speller", "format", "yaml");
        assert!(matches!(
            config.output_format(),
            Err(PhoneticError::Config(_))
        ));
    }

    #[test]
    fn test_blank_words_means_nato() {
        let mut config = Config::default();
        config.set("speller", "words", "  ");
        assert_eq!(config.words().len(), 26);
    }
}
