//! Built-in self test
//!
//! Run by the CLI when no name is given. Checks the NATO word list and a
//! battery of known spellings, and reports each check like a verbose test
//! runner would.

use crate::phonetics::{ascii_lowercase, ascii_uppercase, NATO};
use crate::speller::{spell, spell_with};
use crate::PhoneticError;
use log::debug;
use std::fmt;

/// Known names and their NATO spellings
pub const FIXTURES: &[(&str, &[&str])] = &[
    ("Ashcraft", &["ALPHA", "SIERRA", "HOTEL", "CHARLIE", "ROMEO", "ALPHA", "FOXTROT", "TANGO"]),
    ("Ashcroft", &["ALPHA", "SIERRA", "HOTEL", "CHARLIE", "ROMEO", "OSCAR", "FOXTROT", "TANGO"]),
    ("Deusen", &["DELTA", "ECHO", "UNIFORM", "SIERRA", "ECHO", "NOVEMBER"]),
    ("Gutierrez", &["GOLF", "UNIFORM", "TANGO", "INDIA", "ECHO", "ROMEO", "ROMEO", "ECHO", "ZULU"]),
    ("Honeyman", &["HOTEL", "OSCAR", "NOVEMBER", "ECHO", "YANKEE", "MIKE", "ALPHA", "NOVEMBER"]),
    ("Jackson", &["JULIETT", "ALPHA", "CHARLIE", "KILO", "SIERRA", "OSCAR", "NOVEMBER"]),
    ("Lee", &["LIMA", "ECHO", "ECHO"]),
    ("Pfister", &["PAPA", "FOXTROT", "INDIA", "SIERRA", "TANGO", "ECHO", "ROMEO"]),
    ("Rubin", &["ROMEO", "UNIFORM", "BRAVO", "INDIA", "NOVEMBER"]),
    ("Robert", &["ROMEO", "OSCAR", "BRAVO", "ECHO", "ROMEO", "TANGO"]),
    ("Rupert", &["ROMEO", "UNIFORM", "PAPA", "ECHO", "ROMEO", "TANGO"]),
    ("Tymczak", &["TANGO", "YANKEE", "MIKE", "CHARLIE", "ZULU", "ALPHA", "KILO"]),
    (
        "VanDeusen",
        &["VICTOR", "ALPHA", "NOVEMBER", "DELTA", "ECHO", "UNIFORM", "SIERRA", "ECHO", "NOVEMBER"],
    ),
    (
        "Washington",
        &["WHISKEY", "ALPHA", "SIERRA", "HOTEL", "INDIA", "NOVEMBER", "GOLF", "TANGO", "OSCAR", "NOVEMBER"],
    ),
];

/// Names that must be rejected
pub const INVALID_NAMES: &[&str] = &["", "   ", "8oo", "*ab"];

/// Outcome of a single named check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    /// `None` on success, the failure message otherwise
    pub failure: Option<String>,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failure {
            None => write!(f, "{} ... ok", self.name),
            Some(msg) => write!(f, "{} ... FAIL: {}", self.name, msg),
        }
    }
}

/// Results of a full self-test run
#[derive(Debug, Clone, Default)]
pub struct SelfTestReport {
    pub results: Vec<CheckResult>,
}

impl SelfTestReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Verbose rendering: one line per check, then a summary
    pub fn render(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            out.push_str(&result.to_string());
            out.push('\n');
        }
        out.push_str(&format!(
            "\nRan {} checks: {} passed, {} failed\n",
            self.results.len(),
            self.passed(),
            self.failed()
        ));
        out.push_str(if self.is_success() { "OK\n" } else { "FAILED\n" });
        out
    }

    fn check<F>(&mut self, name: &str, f: F)
    where
        F: FnOnce() -> std::result::Result<(), String>,
    {
        let failure = f().err();
        debug!("Self test {}: {}", name, if failure.is_none() { "ok" } else { "failed" });
        self.results.push(CheckResult {
            name: name.to_string(),
            failure,
        });
    }
}

/// Uppercase the first letter of each alphabetic run, lowercase the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Run every check
pub fn run() -> SelfTestReport {
    let mut report = SelfTestReport::default();

    report.check("nato_word_list", check_nato);
    report.check("invalid_names", check_invalid_names);
    for (name, expected) in FIXTURES {
        report.check(&format!("spell_{}", name.to_lowercase()), || {
            check_fixture(name, expected)
        });
    }

    report
}

fn check_nato() -> std::result::Result<(), String> {
    if NATO.len() != 26 {
        return Err(format!("expected 26 words, found {}", NATO.len()));
    }
    for (letter, word) in ('A'..='Z').zip(NATO.iter()) {
        if word.is_empty() {
            return Err(format!("word for {} is empty", letter));
        }
        if *word != word.trim() || *word != word.to_uppercase() {
            return Err(format!("{:?} is not trimmed uppercase", word));
        }
        if !word.starts_with(letter) {
            return Err(format!("{:?} does not start with {}", word, letter));
        }
    }
    Ok(())
}

fn check_invalid_names() -> std::result::Result<(), String> {
    for name in INVALID_NAMES {
        match spell(name) {
            Err(PhoneticError::InvalidName(_)) => {}
            Err(e) => return Err(format!("{:?} gave unexpected error {}", name, e)),
            Ok(words) => return Err(format!("{:?} was accepted as {:?}", name, words)),
        }
    }
    Ok(())
}

fn check_fixture(name: &str, expected: &[&str]) -> std::result::Result<(), String> {
    let variants = [
        name.to_string(),
        name.to_lowercase(),
        title_case(name),
        name.to_uppercase(),
    ];

    for variant in &variants {
        for words in [spell(variant), spell_with(variant, NATO)] {
            let words = words.map_err(|e| format!("{:?}: {}", variant, e))?;
            if words != expected {
                return Err(format!("{:?} spelled {:?}, expected {:?}", variant, words, expected));
            }
        }
    }

    let lower = spell_with(name, ascii_lowercase())
        .map_err(|e| format!("{:?} with lowercase letters: {}", name, e))?
        .concat();
    if lower != name.to_lowercase() {
        return Err(format!("lowercase letters gave {:?}", lower));
    }

    let upper = spell_with(name, ascii_uppercase())
        .map_err(|e| format!("{:?} with uppercase letters: {}", name, e))?
        .concat();
    if upper != name.to_uppercase() {
        return Err(format!("uppercase letters gave {:?}", upper));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("VanDeusen"), "Vandeusen");
        assert_eq!(title_case("mary-jane o'neil"), "Mary-Jane O'Neil");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_render_marks_failures() {
        let report = SelfTestReport {
            results: vec![
                CheckResult {
                    name: "good".to_string(),
                    failure: None,
                },
                CheckResult {
                    name: "bad".to_string(),
                    failure: Some("broken".to_string()),
                },
            ],
        };
        assert!(!report.is_success());
        let text = report.render();
        assert!(text.contains("good ... ok\n"));
        assert!(text.contains("bad ... FAIL: broken\n"));
        assert!(text.contains("Ran 2 checks: 1 passed, 1 failed"));
        assert!(text.ends_with("FAILED\n"));
    }
}
