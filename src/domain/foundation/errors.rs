//! Error types for the domain layer.

use std::error::Error;
use std::fmt;

/// Error kinds, one per user-visible failure class.
///
/// Store adapters classify native database failures into these kinds at the
/// persistence boundary; handlers propagate them unchanged. Transport layers
/// (out of scope here) are expected to map kind -> status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Not found
    PolicyNotFound,
    DocumentNotFound,
    TemplateNotFound,

    // Constraint violations surfaced by the store
    AlreadyExists,
    ForeignKeyViolation,
    InvalidValue,

    // Collaborator failures
    ConversionFailed,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::PolicyNotFound => "POLICY_NOT_FOUND",
            ErrorCode::DocumentNotFound => "DOCUMENT_NOT_FOUND",
            ErrorCode::TemplateNotFound => "TEMPLATE_NOT_FOUND",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::ForeignKeyViolation => "FOREIGN_KEY_VIOLATION",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::ConversionFailed => "CONVERSION_FAILED",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with a kind and a human-readable message.
///
/// The message never leaks the underlying store's native error shape; the
/// classification happens once, at the adapter boundary.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Shorthand for a `PolicyNotFound` error.
    pub fn policy_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PolicyNotFound, message)
    }

    /// Shorthand for a `DocumentNotFound` error.
    pub fn document_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DocumentNotFound, message)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
