//! Rendering a spelling for the terminal

use crate::Result;
use serde::Serialize;

/// JSON shape of a spelled name
#[derive(Debug, Serialize)]
pub struct SpellingReport<'a> {
    pub name: &'a str,
    pub spelling: &'a [String],
}

/// One output line: the word's first letter, uppercased, then the word
///
/// `describe("LIMA", " as in ")` gives `"L as in LIMA"`.
pub fn describe(word: &str, connector: &str) -> String {
    let letter: String = word.chars().next().into_iter().flat_map(char::to_uppercase).collect();
    format!("{}{}{}", letter, connector, word)
}

/// All output lines for a spelling
pub fn text_lines(spelling: &[String], connector: &str) -> Vec<String> {
    spelling.iter().map(|word| describe(word, connector)).collect()
}

/// Spelling as a JSON object
pub fn to_json(name: &str, spelling: &[String]) -> Result<String> {
    let report = SpellingReport { name, spelling };
    Ok(serde_json::to_string(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(describe("LIMA", " as in "), "L as in LIMA");
        // Lowercase words still get an uppercase letter
        assert_eq!(describe("alfa", " as in "), "A as in alfa");
        assert_eq!(describe("ECHO", ": "), "E: ECHO");
    }

    #[test]
    fn test_text_lines() {
        let spelling = vec!["LIMA".to_string(), "ECHO".to_string(), "ECHO".to_string()];
        assert_eq!(
            text_lines(&spelling, " as in "),
            vec!["L as in LIMA", "E as in ECHO", "E as in ECHO"]
        );
    }

    #[test]
    fn test_to_json() {
        let spelling = vec!["LIMA".to_string(), "ECHO".to_string()];
        let json = to_json("Le", &spelling).unwrap();
        assert_eq!(json, r#"{"name":"Le","spelling":["LIMA","ECHO"]}"#);
    }
}
