//! Error types and utilities.
//!
//! This module provides the values a validation pass produces: individual
//! [`ValidationError`]s, the ordered [`ValidationErrors`] list that collects
//! them, and [`ReportFormat`] for rendering a list for display or logs.
//!
//! # Examples
//!
//! ```
//! use validation_rail::types::{ReportFormat, ValidationError, ValidationErrors};
//!
//! let errors: ValidationErrors = [
//!     ValidationError::field("Person", "Name", "Can not be empty", "\"\""),
//!     ValidationError::field("Person", "Age", "Minimum is 18", "17"),
//! ]
//! .into_iter()
//! .collect();
//!
//! println!("{}", errors.format_with(&ReportFormat::numbered()));
//! // 1. Person validation failed: `Name` Can not be empty (actual value: "")
//! // 2. Person validation failed: `Age` Minimum is 18 (actual value: 17)
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod error_formatter;
pub mod validation_error;

pub use accumulator::ValidationErrors;
pub use error_formatter::{ReportFormat, ReportFormatter};
pub use validation_error::{EngineError, ValidationError};

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for a single element to avoid heap allocations
/// when a value has exactly one problem.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
