//! The seam between the traversal and field-level rule evaluation.
//!
//! A [`RuleEngine`] looks at one node and reports which fields of that
//! record broke which rule. It never descends into nested records; the
//! validator does that and calls the engine again for each of them.
//!
//! Any implementation works: the bundled [`TagRules`](crate::rules::TagRules)
//! reads rule strings attached to fields, while [`engine_fn`] turns a closure
//! into an engine for tests or hand-written checks.
//!
//! # Examples
//!
//! ```
//! use validation_rail::engine::{engine_fn, RuleReport, Violation};
//! use validation_rail::{EngineError, Node, Validator};
//!
//! let engine = engine_fn(|node: &Node<'_>| {
//!     let record = node.as_record().ok_or_else(|| EngineError::not_a_record(node))?;
//!     let violations = record
//!         .fields()
//!         .iter()
//!         .filter(|f| matches!(f.value(), Node::Scalar(s) if s.as_f64() == Some(0.0)))
//!         .map(|f| Violation::new(f.name(), "must not be zero", f.value()))
//!         .collect();
//!     Ok(RuleReport::from_violations(violations))
//! });
//!
//! let errors = Validator::new(engine).validate("not a record");
//! assert_eq!(errors.len(), 1);
//! ```

use crate::record::Node;
use crate::types::EngineError;
use core::fmt::Debug;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Evaluates field-level rules on one node.
///
/// Must fail with [`EngineError::NotARecord`] (or another [`EngineError`])
/// when the node cannot be introspected as a record.
pub trait RuleEngine {
    fn evaluate(&self, node: &Node<'_>) -> Result<RuleReport, EngineError>;
}

impl<E: RuleEngine + ?Sized> RuleEngine for &E {
    #[inline]
    fn evaluate(&self, node: &Node<'_>) -> Result<RuleReport, EngineError> {
        (**self).evaluate(node)
    }
}

impl<E: RuleEngine + ?Sized> RuleEngine for Box<E> {
    #[inline]
    fn evaluate(&self, node: &Node<'_>) -> Result<RuleReport, EngineError> {
        (**self).evaluate(node)
    }
}

impl<E: RuleEngine + ?Sized> RuleEngine for Arc<E> {
    #[inline]
    fn evaluate(&self, node: &Node<'_>) -> Result<RuleReport, EngineError> {
        (**self).evaluate(node)
    }
}

/// Outcome of evaluating one record.
///
/// The default report is [`RuleReport::valid`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleReport {
    valid: bool,
    violations: Vec<Violation>,
}

impl Default for RuleReport {
    fn default() -> Self {
        Self::valid()
    }
}

impl RuleReport {
    /// Every rule held.
    #[inline]
    pub fn valid() -> Self {
        Self {
            valid: true,
            violations: Vec::new(),
        }
    }

    #[inline]
    pub fn invalid(violations: Vec<Violation>) -> Self {
        Self {
            valid: false,
            violations,
        }
    }

    /// Valid exactly when `violations` is empty.
    #[inline]
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            valid: violations.is_empty(),
            violations,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[inline]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// One broken rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Violation {
    pub field: String,
    pub message: String,
    /// Debug rendering of the offending value.
    pub actual: String,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        actual: &(impl Debug + ?Sized),
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            actual: format!("{actual:?}"),
        }
    }
}

/// Engine backed by a closure. Created by [`engine_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnEngine<F> {
    evaluate_fn: F,
}

impl<F> RuleEngine for FnEngine<F>
where
    F: Fn(&Node<'_>) -> Result<RuleReport, EngineError>,
{
    #[inline]
    fn evaluate(&self, node: &Node<'_>) -> Result<RuleReport, EngineError> {
        (self.evaluate_fn)(node)
    }
}

/// Wraps a closure as a [`RuleEngine`].
pub fn engine_fn<F>(evaluate_fn: F) -> FnEngine<F>
where
    F: Fn(&Node<'_>) -> Result<RuleReport, EngineError>,
{
    FnEngine { evaluate_fn }
}
