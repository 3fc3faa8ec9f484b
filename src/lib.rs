//! phonetic - spell names with a phonetic code
//!
//! Turns a name into one code word per letter ("Lee" becomes LIMA, ECHO,
//! ECHO) using the NATO alphabet or any caller-supplied word list.

pub mod config;
pub mod error;
pub mod output;
pub mod phonetics;
pub mod selftest;
pub mod speller;

pub use error::{PhoneticError, Result};
pub use phonetics::NATO;
pub use speller::{spell, spell_with, LetterTable};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "phonetic";
