//! Macros for turning plain structs into validatable records.
//!
//! - [`macro@crate::record`] - Implements [`Record`](crate::record::Record) and
//!   [`Inspect`](crate::record::Inspect) from a compact field listing with
//!   optional display names and rule declarations.
//! - [`macro@crate::impl_inspect`] - Implements only `Inspect` for a type that
//!   already implements `Record` by hand.
//!
//! # Examples
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
//!     age: i32,
//!     employer: Employer,
//!     nickname: Option<String>,
//! }
//!
//! record!(Employer as "Employer" { name as "Name": "Required" });
//! record!(Person as "Person" {
//!     name as "Name": "Required",
//!     age as "Age": "Required;Min(18)",
//!     employer as "Employer",
//!     nickname: "MaxSize(12)",
//! });
//!
//! let person = Person {
//!     name: "Sam".into(),
//!     age: 18,
//!     employer: Employer { name: String::new() },
//!     nickname: Some("sammy-the-unstoppable".into()),
//! };
//!
//! let errors = validate(&person);
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].context(), Some("Person"));
//! assert_eq!(errors[0].field_name(), Some("nickname"));
//! assert_eq!(errors[1].context(), Some("Person.Employer"));
//! ```

/// Implements [`Record`](crate::record::Record) and [`Inspect`](crate::record::Inspect)
/// for a struct.
///
/// # Syntax
///
/// ```text
/// record!(Type { field, field: "Rules", field as "Name", field as "Name": "Rules" });
/// record!(Type as "TypeName" { ... });
/// ```
///
/// - `as "Name"` after a field changes the name used in error messages
///   (defaults to the Rust field name).
/// - `: "Rules"` attaches a rule declaration read by
///   [`TagRules`](crate::rules::TagRules).
/// - `as "TypeName"` after the type replaces [`core::any::type_name`] as the
///   record's type name.
///
/// Fields are reported in the order listed. Fields left out of the listing
/// are neither checked nor descended into. Generic types need a manual
/// `Record` impl plus [`impl_inspect!`](crate::impl_inspect).
///
/// # Examples
///
/// ```
/// use validation_rail::record::Record;
/// use validation_rail::record;
///
/// struct Team {
///     name: String,
///     members: Vec<String>,
/// }
///
/// record!(Team as "Team" { name: "Required;AlphaDash", members: "MinSize(1)" });
///
/// let team = Team { name: "core".into(), members: vec![] };
/// assert_eq!(team.type_name(), "Team");
/// assert_eq!(team.fields().len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    (
        $ty:ty $(as $type_name:literal)? {
            $($field:ident $(as $label:literal)? $(: $rules:literal)?),* $(,)?
        } $(;)?
    ) => {
        impl $crate::record::Record for $ty {
            $(
                fn type_name(&self) -> &str {
                    $type_name
                }
            )?

            fn fields(&self) -> ::std::vec::Vec<$crate::record::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::__record_field!(self, $field $(as $label)? $(: $rules)?)
                    ),*
                ]
            }
        }

        $crate::impl_inspect!($ty);
    };
}

/// Internal macro building one [`Field`](crate::record::Field).
#[macro_export]
#[doc(hidden)]
macro_rules! __record_field {
    ($this:ident, $field:ident) => {
        $crate::record::Field::new(::core::stringify!($field), &$this.$field)
    };

    ($this:ident, $field:ident as $label:literal) => {
        $crate::record::Field::new($label, &$this.$field)
    };

    ($this:ident, $field:ident : $rules:literal) => {
        $crate::record::Field::new(::core::stringify!($field), &$this.$field).with_rules($rules)
    };

    ($this:ident, $field:ident as $label:literal : $rules:literal) => {
        $crate::record::Field::new($label, &$this.$field).with_rules($rules)
    };
}

/// Implements [`Inspect`](crate::record::Inspect) for a type that implements
/// [`Record`](crate::record::Record), so it is seen as a record wherever it
/// appears in a graph.
///
/// # Examples
///
/// ```
/// use validation_rail::record::{Field, Record};
/// use validation_rail::{impl_inspect, validate};
///
/// struct Port(u16);
///
/// impl Record for Port {
///     fn fields(&self) -> Vec<Field<'_>> {
///         vec![Field::new("0", &self.0).with_rules("Min(1024)")]
///     }
/// }
///
/// impl_inspect!(Port);
///
/// assert_eq!(validate(&Port(80)).len(), 1);
/// ```
#[macro_export]
macro_rules! impl_inspect {
    ($ty:ty) => {
        impl $crate::record::Inspect for $ty {
            #[inline]
            fn to_node(&self) -> $crate::record::Node<'_> {
                $crate::record::Node::Record(self)
            }
        }
    };
}
