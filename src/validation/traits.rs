use crate::record::Inspect;
use crate::types::ValidationErrors;
use crate::validation::core::validate;

/// Method-call access to the default validator for every inspectable type.
///
/// Uses the tag rule engine and [`ValidatorConfig::default`]. Build a
/// [`Validator`](crate::Validator) for anything else.
///
/// [`ValidatorConfig::default`]: crate::ValidatorConfig::default
///
/// # Examples
///
/// ```
/// use validation_rail::{record, Validate};
///
/// struct Employer {
///     name: String,
/// }
///
/// record!(Employer { name: "Required" });
///
/// assert!(Employer { name: "Widgets, Inc.".into() }.is_valid());
/// assert_eq!(Employer { name: String::new() }.validate().len(), 1);
/// ```
pub trait Validate: Inspect {
    fn validate(&self) -> ValidationErrors {
        validate(self)
    }

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl<T: Inspect + ?Sized> Validate for T {}
