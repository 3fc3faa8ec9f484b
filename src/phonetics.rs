//! Phonetic alphabets
//!
//! A word list is just an ordered slice of words; the first character of
//! each word is the letter it stands for.

/// NATO phonetic alphabet, one word per letter A through Z
pub const NATO: [&str; 26] = [
    "ALPHA", "BRAVO", "CHARLIE", "DELTA", "ECHO", "FOXTROT", "GOLF", "HOTEL", "INDIA", "JULIETT",
    "KILO", "LIMA", "MIKE", "NOVEMBER", "OSCAR", "PAPA", "QUEBEC", "ROMEO", "SIERRA", "TANGO",
    "UNIFORM", "VICTOR", "WHISKEY", "XRAY", "YANKEE", "ZULU",
];

/// The bare letters a..z as a word list
///
/// Spelling with this list gives back the lowercased name itself.
pub fn ascii_lowercase() -> Vec<String> {
    ('a'..='z').map(String::from).collect()
}

/// The bare letters A..Z as a word list
pub fn ascii_uppercase() -> Vec<String> {
    ('A'..='Z').map(String::from).collect()
}
