//! Reflection-free introspection of values.
//!
//! The validator never knows concrete types. It sees every value as a
//! [`Node`]: a [`Record`] with named fields, an ordered list of nodes, or a
//! [`Scalar`]. Types opt in to being records by implementing [`Record`]
//! (usually through the [`record!`](crate::record!) macro); everything else
//! inspects as a scalar and is never descended into.
//!
//! # Examples
//!
//! ```
//! use validation_rail::record::{Field, Inspect, Node, Record};
//!
//! struct Employer {
//!     name: String,
//! }
//!
//! impl Record for Employer {
//!     fn type_name(&self) -> &str {
//!         "Employer"
//!     }
//!
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![Field::new("Name", &self.name).with_rules("Required")]
//!     }
//! }
//!
//! validation_rail::impl_inspect!(Employer);
//!
//! let employer = Employer { name: String::new() };
//! assert!(matches!(employer.to_node(), Node::Record(_)));
//! assert!(matches!(String::from("x").to_node(), Node::Scalar(_)));
//! ```

mod inspect;

pub use inspect::Inspect;

use core::fmt;

/// A structured value with named fields, the unit of validation.
pub trait Record {
    /// Runtime type name, used as error context.
    ///
    /// Defaults to [`core::any::type_name`], which includes the module
    /// path. Nested records only contribute their trailing identifier.
    fn type_name(&self) -> &str {
        core::any::type_name::<Self>()
    }

    /// Fields in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// One named field of a [`Record`].
#[derive(Debug)]
pub struct Field<'a> {
    name: &'a str,
    value: Node<'a>,
    rules: Option<&'a str>,
}

impl<'a> Field<'a> {
    #[inline]
    pub fn new<T: Inspect + ?Sized>(name: &'a str, value: &'a T) -> Self {
        Self {
            name,
            value: value.to_node(),
            rules: None,
        }
    }

    /// Field holding a value that has no [`Inspect`] impl.
    ///
    /// The value is only ever rendered with its `Debug` output.
    #[inline]
    pub fn opaque(name: &'a str, value: &'a dyn fmt::Debug) -> Self {
        Self {
            name,
            value: Node::Scalar(Scalar::Opaque(value)),
            rules: None,
        }
    }

    /// Attaches a rule declaration such as `"Required;Min(18)"`.
    #[inline]
    pub fn with_rules(mut self, rules: &'a str) -> Self {
        self.rules = Some(rules);
        self
    }

    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    #[inline]
    pub fn value(&self) -> &Node<'a> {
        &self.value
    }

    #[inline]
    pub fn rules(&self) -> Option<&'a str> {
        self.rules
    }
}

/// Inspected view of a value.
pub enum Node<'a> {
    Record(&'a dyn Record),
    List(Vec<Node<'a>>),
    Scalar(Scalar<'a>),
}

impl<'a> Node<'a> {
    #[inline]
    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match self {
            Node::Record(record) => Some(*record),
            _ => None,
        }
    }

    #[inline]
    pub fn is_record(&self) -> bool {
        matches!(self, Node::Record(_))
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Record(record) => f
                .debug_struct(simple_type_name(record.type_name()))
                .finish_non_exhaustive(),
            Node::List(items) => f.debug_list().entries(items).finish(),
            Node::Scalar(scalar) => fmt::Debug::fmt(scalar, f),
        }
    }
}

/// Leaf value. Never descended into.
#[derive(Clone, Copy)]
pub enum Scalar<'a> {
    Str(&'a str),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    /// An absent optional value.
    Null,
    Opaque(&'a dyn fmt::Debug),
}

impl Scalar<'_> {
    /// Numeric value, if the scalar is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Scalar::Int(v) => Some(v as f64),
            Scalar::UInt(v) => Some(v as f64),
            Scalar::Float(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Debug for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => write!(f, "{s:?}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::UInt(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v:?}"),
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Char(c) => write!(f, "{c:?}"),
            Scalar::Null => f.write_str("None"),
            Scalar::Opaque(v) => fmt::Debug::fmt(v, f),
        }
    }
}

/// Strips the module path from a type name, keeping generic arguments.
///
/// ```
/// use validation_rail::record::simple_type_name;
///
/// assert_eq!(simple_type_name("app::model::Person"), "Person");
/// assert_eq!(simple_type_name("app::Page<app::model::Person>"), "Page<app::model::Person>");
/// assert_eq!(simple_type_name("Person"), "Person");
/// ```
pub fn simple_type_name(name: &str) -> &str {
    let base_end = name.find('<').unwrap_or(name.len());
    let start = name[..base_end].rfind("::").map_or(0, |i| i + 2);
    &name[start..]
}
