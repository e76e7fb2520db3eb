//! Wire types for the validation exchange.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Body of a `POST /validar-senha` request.
///
/// The candidate password is deserialized straight into a
/// [`SecretString`] so it never shows up in logs or `Debug` output.
#[derive(Deserialize)]
pub struct ValidationRequest {
    #[serde(rename = "senha")]
    pub password: SecretString,
}

/// Verdict for one candidate password.
///
/// Serializes as `{"valida": true}` when every rule passed, or
/// `{"valida": false, "erros": [...]}` with one message per violated
/// rule. The `erros` field is omitted entirely when empty.
#[derive(Debug, PartialEq, Serialize)]
pub struct ValidationOutcome {
    #[serde(rename = "valida")]
    pub valid: bool,
    #[serde(rename = "erros", skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ValidationOutcome {
    /// Outcome for a password that satisfied every rule.
    pub fn approved() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Outcome carrying one message per violated rule, in rule order.
    pub fn rejected(errors: Vec<String>) -> Self {
        Self {
            valid: false,
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
