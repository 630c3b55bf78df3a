//! Traversal configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nesting limit used by [`ValidatorConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How the context of an error is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContextStyle {
    /// Chain of type names: the root's type name, then the simple type name
    /// of each nested record, e.g. `Person.Employer`.
    ///
    /// Collection elements share their collection's context, and repeated
    /// types at different paths produce the same context.
    #[default]
    TypeChain,

    /// Dotted field path rooted at the root's type name, with list indices,
    /// e.g. `Person.employer` or `Team.people[1]`.
    FieldPath,
}

/// Settings of a [`Validator`](crate::Validator).
///
/// # Examples
///
/// ```
/// use validation_rail::{ContextStyle, ValidatorConfig};
///
/// let config = ValidatorConfig::default()
///     .with_context_style(ContextStyle::FieldPath)
///     .with_max_depth(Some(8));
/// assert_eq!(config.max_depth, Some(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidatorConfig {
    pub context_style: ContextStyle,
    /// Deepest nesting level that is still validated; the root is level 0.
    /// `None` removes the limit, so a cyclic graph recurses without bound.
    pub max_depth: Option<usize>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            context_style: ContextStyle::TypeChain,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ValidatorConfig {
    /// Default settings with dotted field paths as context.
    #[inline]
    pub fn field_paths() -> Self {
        Self {
            context_style: ContextStyle::FieldPath,
            ..Default::default()
        }
    }

    /// Default settings without a nesting limit.
    #[inline]
    pub fn unbounded() -> Self {
        Self {
            max_depth: None,
            ..Default::default()
        }
    }

    #[inline]
    pub fn with_context_style(mut self, style: ContextStyle) -> Self {
        self.context_style = style;
        self
    }

    #[inline]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}
