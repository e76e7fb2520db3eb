//! Password composition validation service
//!
//! This crate validates a candidate password against four fixed
//! composition rules (minimum length, uppercase letter, digit, special
//! character) and reports one Portuguese message per violated rule.
//!
//! The rule engine is a pure function with no I/O, exposed over HTTP by
//! a thin adapter in [`api`] as `POST /validar-senha`.
//!
//! # Environment Variables
//!
//! - `PORT`: TCP port the server binds to (default: `8000`)
//! - `BIND_ADDR`: bind address (default: `0.0.0.0`)
//! - `RUST_LOG`: tracing filter, e.g. `valida_senha=debug`
//!
//! # Example
//!
//! ```rust
//! use valida_senha::evaluate;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MinhaSenh@123".to_string().into());
//! let outcome = evaluate(&password);
//!
//! assert!(outcome.is_valid());
//! ```

// Internal modules
mod evaluator;
mod rules;
mod types;

// Transport adapter
pub mod api;

// Public API
pub use evaluator::evaluate;
pub use types::{ValidationOutcome, ValidationRequest};
