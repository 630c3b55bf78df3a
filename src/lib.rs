//! Recursive validation of nested records with full error aggregation.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `validation_rail::*` or pick focused pieces as needed.
//!
//! A value is validated by asking a [`RuleEngine`] about the root record's
//! own fields, then descending into every field that holds a record or a
//! list of records. All violations from the whole graph are returned
//! together, each prefixed with the chain of type names leading to it.
//!
//! # Examples
//!
//! ## Nested Records
//!
//! ```
//! use validation_rail::{record, validate};
//!
//! struct Employer {
//!     name: String,
//! }
//!
//! struct Person {
//!     name: String,
//!     age: u8,
//!     employer: Employer,
//! }
//!
//! record!(Employer as "Employer" { name as "Name": "Required" });
//! record!(Person as "Person" {
//!     name as "Name": "Required",
//!     age as "Age": "Required;Min(18)",
//!     employer as "Employer",
//! });
//!
//! let person = Person {
//!     name: "Sam".into(),
//!     age: 18,
//!     employer: Employer { name: String::new() },
//! };
//!
//! let errors = validate(&person);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(
//!     errors[0].to_string(),
//!     "Person.Employer validation failed: `Name` Can not be empty (actual value: \"\")"
//! );
//! ```
//!
//! ## Custom Engine and Settings
//!
//! ```
//! use validation_rail::engine::{engine_fn, RuleReport};
//! use validation_rail::{EngineError, Node, Validator, ValidatorConfig};
//!
//! let engine = engine_fn(|node: &Node<'_>| {
//!     node.as_record()
//!         .map(|_| RuleReport::valid())
//!         .ok_or_else(|| EngineError::not_a_record(node))
//! });
//!
//! let validator = Validator::new(engine).with_config(ValidatorConfig::field_paths());
//! assert!(validator.check(&"just text").is_err());
//! ```

/// Traversal settings
pub mod config;
/// The rule-engine seam and its report types
pub mod engine;
/// Record-building macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Reflection-free introspection of values
pub mod record;
/// Rule engine reading rule declarations attached to fields
pub mod rules;
/// Validation errors and report formatting
pub mod types;
/// The recursive validator
pub mod validation;

pub use config::{ContextStyle, ValidatorConfig, DEFAULT_MAX_DEPTH};
pub use engine::{RuleEngine, RuleReport, Violation};
pub use record::{Field, Inspect, Node, Record, Scalar};
pub use types::{EngineError, ErrorVec, ReportFormat, ValidationError, ValidationErrors};
pub use validation::{validate, validate_with_context, Validate, Validator};
