//! Error values produced by a validation pass.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry of a validation result.
///
/// A field violation never stops the traversal. An engine failure or a
/// depth-limit hit stops the branch it occurred in, while sibling branches
/// are still validated.
///
/// # Examples
///
/// ```
/// use validation_rail::ValidationError;
///
/// let err = ValidationError::field("Person.Employer", "Name", "Can not be empty", "\"\"");
/// assert_eq!(
///     err.to_string(),
///     "Person.Employer validation failed: `Name` Can not be empty (actual value: \"\")"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValidationError {
    /// A named field failed one rule.
    #[error("{context} validation failed: `{field}` {message} (actual value: {actual})")]
    Field {
        context: String,
        field: String,
        message: String,
        actual: String,
    },

    /// The rule engine could not evaluate the node at all.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The record sits deeper than the configured nesting limit.
    #[error("{context} validation failed: nesting depth exceeds {limit}")]
    DepthExceeded { context: String, limit: usize },
}

impl ValidationError {
    /// Creates a field violation.
    #[inline]
    pub fn field(
        context: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::Field {
            context: context.into(),
            field: field.into(),
            message: message.into(),
            actual: actual.into(),
        }
    }

    /// Qualified context of the error, if it carries one.
    ///
    /// Engine failures are surfaced as reported by the engine and have none.
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Field { context, .. } | Self::DepthExceeded { context, .. } => Some(context),
            Self::Engine(_) => None,
        }
    }

    /// Name of the offending field for field violations.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Field { field, .. } => Some(field),
            _ => None,
        }
    }

    #[inline]
    pub fn is_field_violation(&self) -> bool {
        matches!(self, Self::Field { .. })
    }
}

/// Outright failure of a rule engine on one node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EngineError {
    /// The value cannot be introspected as a record.
    #[error("{actual} must be a record or a reference to a record")]
    NotARecord { actual: String },

    /// A rule declaration on a field could not be understood.
    #[error("invalid rule `{rule}` on field `{field}`: {reason}")]
    InvalidRule {
        field: String,
        rule: String,
        reason: String,
    },

    /// Failure reported by a custom engine.
    #[error("{0}")]
    Other(String),
}

impl EngineError {
    /// Builds a [`EngineError::NotARecord`] from the debug rendering of `actual`.
    pub fn not_a_record(actual: &(impl core::fmt::Debug + ?Sized)) -> Self {
        Self::NotARecord {
            actual: format!("{actual:?}"),
        }
    }
}
