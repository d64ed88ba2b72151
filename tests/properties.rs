//! Property-based tests for the evaluator, estimator and generator

use proptest::prelude::*;
use pwd_meter::{
    CharClasses, CrackTimeBucket, GENERATOR_ALPHABET, MAX_SCORE, PasswordStrength, complexity,
    estimate_crack_time, evaluate_password_strength, generate_strong_password,
};
use secrecy::{ExposeSecret, SecretString};

fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

const LENGTH_HINT: &str = "Password should be at least 8 characters long.";

/// Property: strings shorter than 8 characters always fail the length rule
#[test]
fn prop_short_passwords_get_length_feedback() {
    proptest!(|(pwd in "\\PC{0,7}")| {
        let evaluation = evaluate_password_strength(&secret(&pwd));
        prop_assert!(evaluation.feedback.iter().any(|f| f == LENGTH_HINT));
    });
}

/// Property: case mix passes exactly when both cases are present
#[test]
fn prop_case_mix_requires_both_cases() {
    proptest!(|(pwd in "\\PC{0,24}")| {
        let classes = CharClasses::of(&pwd);
        let evaluation = evaluate_password_strength(&secret(&pwd));
        let case_feedback = evaluation.feedback.iter().any(|f| f.contains("uppercase and lowercase"));
        prop_assert_eq!(case_feedback, !(classes.upper && classes.lower));
    });
}

/// Property: score is in range and equals the number of passed rules
#[test]
fn prop_score_counts_passed_rules() {
    proptest!(|(pwd in "\\PC{0,32}")| {
        let evaluation = evaluate_password_strength(&secret(&pwd));
        let score = evaluation.score.value();
        prop_assert!(score <= MAX_SCORE);
        prop_assert_eq!(usize::from(score) + evaluation.feedback.len(), 4);
    });
}

/// Property: display label follows the clamped lookup
#[test]
fn prop_strength_matches_score() {
    proptest!(|(pwd in "[a-zA-Z0-9!@#$%^&*()_+-]{0,16}")| {
        let evaluation = evaluate_password_strength(&secret(&pwd));
        let expected = match evaluation.score.value() {
            0 => PasswordStrength::Weak,
            1 => PasswordStrength::Moderate,
            2 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        };
        prop_assert_eq!(evaluation.strength(), expected);
    });
}

/// Property: for fixed composition, a longer password never lands in an earlier bucket
#[test]
fn prop_crack_time_monotonic_in_length() {
    proptest!(|(unit in "[a-zA-Z0-9!@#$%^&*()_+]{1,4}", short in 1usize..20, extra in 0usize..20)| {
        let shorter = unit.repeat(short);
        let longer = unit.repeat(short + extra);
        let a = secret(&shorter);
        let b = secret(&longer);
        prop_assert_eq!(complexity(&a), complexity(&b));
        prop_assert!(estimate_crack_time(&a) <= estimate_crack_time(&b));
    });
}

/// Property: passwords with no recognized class are always instantly crackable
#[test]
fn prop_unrecognized_only_is_instant() {
    proptest!(|(pwd in "[-=.,?~ \\[\\]{}]{0,64}")| {
        prop_assert_eq!(estimate_crack_time(&secret(&pwd)), CrackTimeBucket::InstantlyCrackable);
    });
}

/// Property: generated passwords have the requested length and use only the alphabet
#[test]
fn prop_generated_password_shape() {
    proptest!(|(length in 0usize..128)| {
        let pwd = generate_strong_password(length);
        prop_assert_eq!(pwd.expose_secret().len(), length);
        prop_assert!(pwd.expose_secret().bytes().all(|b| GENERATOR_ALPHABET.contains(&b)));
    });
}

#[test]
fn scenario_reference_passwords() {
    let cases = [
        ("", 0, 4, CrackTimeBucket::InstantlyCrackable),
        ("abc", 0, 4, CrackTimeBucket::InstantlyCrackable),
        ("Abcdefg1", 3, 1, CrackTimeBucket::SeveralYears),
        ("Ab1!Ab1!Ab1!Ab", 4, 0, CrackTimeBucket::SeveralYears),
    ];

    for (pwd, score, feedback, bucket) in cases {
        let evaluation = evaluate_password_strength(&secret(pwd));
        assert_eq!(evaluation.score.value(), score, "score for {pwd:?}");
        assert_eq!(evaluation.feedback.len(), feedback, "feedback for {pwd:?}");
        assert_eq!(estimate_crack_time(&secret(pwd)), bucket, "bucket for {pwd:?}");
    }
}
