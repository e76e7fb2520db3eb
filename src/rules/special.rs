//! Special character rule - requires one character from a fixed set.

use secrecy::{ExposeSecret, SecretString};

use super::RuleResult;

/// The only characters that count as special.
const SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

pub(crate) const MESSAGE: &str =
    "A senha deve conter pelo menos 1 caractere especial (!@#$%^&*)";

/// Checks if the password contains at least one of `!@#$%^&*`.
///
/// Punctuation outside the fixed set does not satisfy the rule.
///
/// # Returns
/// - `Some(message)` if no character from the set is present
/// - `None` otherwise
pub fn special_rule(password: &SecretString) -> RuleResult {
    let has_special = password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARS.contains(&c));

    if !has_special {
        return Some(MESSAGE);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_rule_missing() {
        let pwd = SecretString::new("MinhaSenha123".to_string().into());
        let result = special_rule(&pwd);
        assert_eq!(result, Some(MESSAGE));
    }

    #[test]
    fn test_special_rule_present() {
        let pwd = SecretString::new("MinhaSenh@123".to_string().into());
        let result = special_rule(&pwd);
        assert_eq!(result, None);
    }

    #[test]
    fn test_special_rule_each_set_member_counts() {
        for c in ['!', '@', '#', '$', '%', '^', '&', '*'] {
            let pwd = SecretString::new(format!("senha{c}").into());
            assert_eq!(special_rule(&pwd), None, "expected '{c}' to count");
        }
    }

    #[test]
    fn test_special_rule_other_punctuation_does_not_count() {
        let pwd = SecretString::new("MinhaSenha123?.,-".to_string().into());
        let result = special_rule(&pwd);
        assert_eq!(result, Some(MESSAGE));
    }
}
