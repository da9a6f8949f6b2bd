//! Error types for rs-feedrules.
//!
//! Inference never fails: documents without a repeating article pattern
//! simply produce no rules. Errors only come from caller-supplied input,
//! such as a hand-edited rule or an unknown rule id.

/// Error type for rule parsing and lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A structural address string does not follow the `TAG.class>TAG` grammar.
    #[error("Invalid structural address: {0}")]
    InvalidAddress(String),

    /// No rule carries the requested identifier.
    #[error("No rule with id {0}")]
    RuleNotFound(String),
}

/// Result type alias for rule operations.
pub type Result<T> = std::result::Result<T, Error>;
