//! The recursive validator.
//!
//! This module provides [`Validator`], which walks an object graph and
//! collects every rule violation found anywhere in it, and the
//! [`validate`]/[`validate_with_context`] shortcuts using the tag rule
//! engine. Errors are never short-circuited across fields or branches: a
//! graph with problems at the root, in a nested record and in a collection
//! element reports all of them, in traversal order.
//!
//! # Examples
//!
//! ```
//! use validation_rail::validation::validate;
//!
//! // Bare scalars are not records; the engine refuses them.
//! let errors = validate(&42_u32);
//! assert_eq!(errors.len(), 1);
//! ```
pub mod core;
pub mod traits;

pub use self::core::*;
pub use self::traits::Validate;
