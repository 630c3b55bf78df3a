//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use validation_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`record!`], [`impl_inspect!`]
//! - **Types**: [`Validator`], [`ValidatorConfig`], [`ValidationError`], [`ValidationErrors`]
//! - **Traits**: [`Record`], [`Inspect`], [`Validate`], [`RuleEngine`]
//!
//! # Examples
//!
//! ```
//! use validation_rail::prelude::*;
//!
//! struct Signup {
//!     email: String,
//! }
//!
//! record!(Signup { email: "Required;Email" });
//!
//! fn accept(signup: &Signup) -> Result<(), ValidationErrors> {
//!     Validator::new(TagRules::new()).check(signup)
//! }
//!
//! assert!(accept(&Signup { email: "sam@widgets.io".into() }).is_ok());
//! assert!(!Signup { email: "sam".into() }.is_valid());
//! ```

// Macros
pub use crate::{impl_inspect, record};

// Core types
pub use crate::config::{ContextStyle, ValidatorConfig};
pub use crate::record::Field;
pub use crate::rules::TagRules;
pub use crate::types::{ValidationError, ValidationErrors};
pub use crate::validation::{validate, Validator};

// Traits
pub use crate::engine::RuleEngine;
pub use crate::record::{Inspect, Record};
pub use crate::validation::Validate;
