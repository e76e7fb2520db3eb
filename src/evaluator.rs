//! Rule engine - main validation logic.

use secrecy::SecretString;

use crate::rules::{RuleResult, digit_rule, length_rule, special_rule, uppercase_rule};
use crate::types::ValidationOutcome;

/// Validates a password against the four composition rules.
///
/// Every rule is evaluated even when an earlier one has already failed,
/// so the outcome carries one message per violated rule, in fixed order:
/// length, uppercase, digit, special character.
///
/// # Arguments
/// * `password` - The candidate password
///
/// # Returns
/// A `ValidationOutcome` with the verdict and any violation messages.
pub fn evaluate(password: &SecretString) -> ValidationOutcome {
    let mut errors = Vec::new();

    // Orchestrator: run rules in fixed order, no short-circuit
    let rules: [(&str, fn(&SecretString) -> RuleResult); 4] = [
        ("length", length_rule),
        ("uppercase", uppercase_rule),
        ("digit", digit_rule),
        ("special", special_rule),
    ];

    for (rule_name, rule_fn) in rules {
        if let Some(message) = rule_fn(password) {
            tracing::debug!(rule = rule_name, "rule violated");
            errors.push(message.to_owned());
        }
    }

    if errors.is_empty() {
        ValidationOutcome::approved()
    } else {
        ValidationOutcome::rejected(errors)
    }
}
