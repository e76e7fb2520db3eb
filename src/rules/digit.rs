//! Digit rule - requires at least one ASCII digit.

use secrecy::{ExposeSecret, SecretString};

use super::RuleResult;

pub(crate) const MESSAGE: &str = "A senha deve conter pelo menos 1 número";

/// Checks if the password contains at least one digit in `0-9`.
///
/// # Returns
/// - `Some(message)` if no ASCII digit is present
/// - `None` otherwise
pub fn digit_rule(password: &SecretString) -> RuleResult {
    let has_digit = password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_digit());

    if !has_digit {
        return Some(MESSAGE);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_rule_missing() {
        let pwd = SecretString::new("MinhaSenha@!".to_string().into());
        let result = digit_rule(&pwd);
        assert_eq!(result, Some(MESSAGE));
    }

    #[test]
    fn test_digit_rule_present() {
        let pwd = SecretString::new("MinhaSenh@123".to_string().into());
        let result = digit_rule(&pwd);
        assert_eq!(result, None);
    }

    #[test]
    fn test_digit_rule_non_ascii_digit_does_not_count() {
        // Arabic-Indic three is a digit, but not 0-9
        let pwd = SecretString::new("MinhaSenha@٣".to_string().into());
        let result = digit_rule(&pwd);
        assert_eq!(result, Some(MESSAGE));
    }
}
