//! Domain errors

use thiserror::Error;

/// Domain-level error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed, missing or out-of-range input. Carries one message per violation.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The addressed or referenced entity does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// The store refused a write that breaks one of its own invariants.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Unexpected storage or connectivity fault.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(vec![message.into()])
    }

    /// `id` is kept as text so references that are not even integers can
    /// still be reported.
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Human-readable messages suitable for an `errors` list.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(messages) => messages.clone(),
            other => vec![other.client_message()],
        }
    }

    /// Single message shown to API clients.
    ///
    /// Storage faults are never echoed back verbatim.
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation(messages) => messages.first().cloned().unwrap_or_default(),
            Self::NotFound { .. } => self.to_string(),
            Self::ConstraintViolation(msg) => msg.clone(),
            Self::Storage(_) => "Internal server error".to_string(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
