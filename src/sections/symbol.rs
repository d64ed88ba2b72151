//! Symbol section - only the fixed symbol set counts.

use secrecy::SecretString;
use super::SectionResult;
use crate::charset::{CharClasses, SYMBOLS};

/// Checks for at least one character from [`SYMBOLS`].
///
/// Other punctuation such as `-` or `?` does not satisfy the rule.
pub fn symbol_section(password: &SecretString) -> SectionResult {
    if !CharClasses::of_secret(password).symbol {
        return Some(format!(
            "Password should include at least one special character ({}).",
            SYMBOLS
        ));
    }
    None
}
