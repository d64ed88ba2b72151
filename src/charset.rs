//! Character classes recognized by the rules and the crack-time model.

use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

/// The only characters that count as symbols.
pub const SYMBOLS: &str = "!@#$%^&*()_+";

/// Alphabet used by the password generator (74 characters).
pub const GENERATOR_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
                                        ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                        0123456789\
                                        !@#$%^&*()_+";

/// Unicode decimal digits (general category Nd), not only `0-9`.
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("valid digit pattern"));

fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

fn is_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// Which of the four character classes occur in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharClasses {
    pub fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |acc, c| Self {
            upper: acc.upper || is_upper(c),
            lower: acc.lower || is_lower(c),
            digit: acc.digit || is_digit(c),
            symbol: acc.symbol || is_symbol(c),
        })
    }

    pub fn of_secret(password: &SecretString) -> Self {
        Self::of(password.expose_secret())
    }
}

/// Password length in characters (Unicode scalar values).
pub fn char_len(password: &SecretString) -> usize {
    password.expose_secret().chars().count()
}
