//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::RuleResult;

const MIN_LENGTH: usize = 8;

pub(crate) const MESSAGE: &str = "A senha deve ter no mínimo 8 caracteres";

/// Checks if the password meets the minimum length requirement.
///
/// Length is counted in Unicode scalar values, not grapheme clusters,
/// so a multi-byte character still counts as one.
///
/// # Returns
/// - `Some(message)` if password is too short
/// - `None` if password has sufficient length
pub fn length_rule(password: &SecretString) -> RuleResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(MESSAGE);
    }
    None
}
