//! Case mix section - requires both an uppercase and a lowercase letter.

use secrecy::SecretString;
use super::SectionResult;
use crate::charset::CharClasses;

/// Checks that the password mixes upper and lower case letters.
///
/// Missing either case fails the whole rule.
pub fn case_mix_section(password: &SecretString) -> SectionResult {
    let classes = CharClasses::of_secret(password);
    if !(classes.upper && classes.lower) {
        return Some(
            "Password should include both uppercase and lowercase letters.".to_string(),
        );
    }
    None
}
