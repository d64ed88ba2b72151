//! Strong password generator.

use rand::Rng;
use secrecy::SecretString;

use crate::charset::GENERATOR_ALPHABET;

/// Length used when the caller does not ask for one.
pub const DEFAULT_GENERATED_LENGTH: usize = 14;

/// Generates a random password of `length` characters using the thread-local RNG.
///
/// Each character is drawn uniformly and independently from the 74-character
/// generator alphabet.
pub fn generate_strong_password(length: usize) -> SecretString {
    let mut rng = rand::thread_rng();
    generate_strong_password_with(&mut rng, length)
}

/// Same as [`generate_strong_password`] with a caller-supplied random source.
pub fn generate_strong_password_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> SecretString {
    let password: String = (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..GENERATOR_ALPHABET.len());
            GENERATOR_ALPHABET[idx] as char
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(length, "generated password");

    SecretString::new(password.into())
}
