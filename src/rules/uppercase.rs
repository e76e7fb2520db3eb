//! Uppercase rule - requires at least one ASCII uppercase letter.

use secrecy::{ExposeSecret, SecretString};

use super::RuleResult;

pub(crate) const MESSAGE: &str = "A senha deve conter pelo menos 1 letra maiúscula";

/// Checks if the password contains at least one letter in `A-Z`.
///
/// Only ASCII uppercase counts; accented capitals do not satisfy the
/// rule.
///
/// # Returns
/// - `Some(message)` if no ASCII uppercase letter is present
/// - `None` otherwise
pub fn uppercase_rule(password: &SecretString) -> RuleResult {
    let has_upper = password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_uppercase());

    if !has_upper {
        return Some(MESSAGE);
    }
    None
}
