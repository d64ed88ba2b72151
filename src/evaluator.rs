//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::crack_time::estimate_crack_time;
use crate::sections::{
    SectionResult, case_mix_section, digit_section, length_section, symbol_section,
};
use crate::types::{PasswordEvaluation, PasswordReport, PasswordScore};

/// Evaluates the password against the four composition rules.
///
/// Every rule runs independently; the score is the number of rules that
/// passed and the feedback lists a hint for each failed rule, in rule order.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let sections: [(&str, fn(&SecretString) -> SectionResult); 4] = [
        ("length", length_section),
        ("case_mix", case_mix_section),
        ("digit", digit_section),
        ("symbol", symbol_section),
    ];

    let mut passed = 0u8;
    let mut feedback = Vec::new();

    for (_section_name, section_fn) in sections {
        match section_fn(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(section = _section_name, "rule failed");
                feedback.push(reason);
            }
            None => passed += 1,
        }
    }

    let score = PasswordScore::new(passed);

    #[cfg(feature = "tracing")]
    tracing::debug!(score = score.value(), failed = feedback.len(), "password evaluated");

    PasswordEvaluation { score, feedback }
}

/// Runs the full evaluation flow: composition rules, then crack-time estimate.
pub fn assess_password(password: &SecretString) -> PasswordReport {
    PasswordReport {
        evaluation: evaluate_password_strength(password),
        crack_time: estimate_crack_time(password),
    }
}

/// Async version that sends the report via channel.
///
/// Nothing is sent when `token` is already cancelled, e.g. because a newer
/// input superseded this one.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordReport>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before start");
        return;
    }

    let report = assess_password(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::types::CrackTimeBucket;

    #[tokio::test]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("Ab1!Ab1!Ab1!Ab".to_string().into());
        evaluate_password_strength_tx(&pwd, token, tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert!(report.evaluation.is_perfect());
        assert_eq!(report.crack_time, CrackTimeBucket::SeveralYears);
    }

    #[tokio::test]
    async fn test_evaluate_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("SomePassword123!".to_string().into());
        evaluate_password_strength_tx(&pwd, token, tx).await;

        // Sender was dropped without sending.
        assert!(rx.recv().await.is_none());
    }
}
