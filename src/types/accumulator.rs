use crate::types::error_formatter::{ReportFormat, ReportFormatter};
use crate::types::{ErrorVec, ValidationError};
use core::fmt::{self, Display};
use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered list of every error found by one validation call.
///
/// An empty list means the value passed validation; there is no separate
/// success flag. Errors keep the order in which the traversal produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationErrors {
    items: ErrorVec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: ErrorVec::new(),
        }
    }

    /// Appends a single error.
    #[inline]
    pub fn push(&mut self, error: ValidationError) {
        self.items.push(error);
    }

    /// Appends every error from an iterator, keeping its order.
    #[inline]
    pub fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.items.extend(iter);
    }

    /// Returns true if validation passed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ValidationError> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.items
    }

    /// Iterates only the field-level violations.
    pub fn field_violations(&self) -> impl Iterator<Item = &ValidationError> {
        self.items.iter().filter(|e| e.is_field_violation())
    }

    /// Errors attributed to exactly `context`.
    pub fn in_context<'a>(
        &'a self,
        context: &'a str,
    ) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.items.iter().filter(move |e| e.context() == Some(context))
    }

    /// Consumes the list and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<ValidationError> {
        self.items
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::{ValidationError, ValidationErrors};
    ///
    /// assert!(ValidationErrors::new().into_result().is_ok());
    ///
    /// let mut errors = ValidationErrors::new();
    /// errors.push(ValidationError::field("Person", "Name", "Can not be empty", "\"\""));
    /// assert_eq!(errors.into_result().unwrap_err().len(), 1);
    /// ```
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Renders the whole list with a custom layout.
    pub fn format_with(&self, format: &ReportFormat) -> String {
        format.format_report(self.items.iter().map(|e| e as &dyn Display))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(&ReportFormat::default()))
    }
}

impl std::error::Error for ValidationErrors {}

impl Index<usize> for ValidationErrors {
    type Output = ValidationError;

    fn index(&self, index: usize) -> &ValidationError {
        &self.items[index]
    }
}

impl From<ErrorVec<ValidationError>> for ValidationErrors {
    fn from(items: ErrorVec<ValidationError>) -> Self {
        Self { items }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            items: smallvec::smallvec![error],
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = smallvec::IntoIter<[ValidationError; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = core::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
