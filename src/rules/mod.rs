//! Rule engine driven by rule strings attached to fields.
//!
//! A field declares its rules with [`Field::with_rules`] (or the `: "..."`
//! suffix of the [`record!`](crate::record!) macro), e.g. `"Required;Min(18)"`.
//! [`TagRules`] parses each declaration once, evaluates every rule against
//! the field's value and reports one [`Violation`] per broken rule. Rules on a
//! field never short-circuit each other.
//!
//! | Rule | Applies to | Message |
//! |------|------------|---------|
//! | `Required` | any value | `Can not be empty` |
//! | `Min(n)` / `Max(n)` / `Range(a, b)` | numbers | `Minimum is n` / `Maximum is n` / `Range is a to b` |
//! | `MinSize(n)` / `MaxSize(n)` / `Length(n)` | strings, lists | `Minimum size is n` / `Maximum size is n` / `Required length is n` |
//! | `Alpha` / `Numeric` / `AlphaNumeric` / `AlphaDash` | strings | `Must be valid ... characters` |
//! | `Email` / `IP` | strings | `Must be a valid email address` / `Must be a valid ip address` |
//! | `Match(/re/)` / `NoMatch(/re/)` | strings | `Must match re` / `Must not match re` |
//!
//! [`Field::with_rules`]: crate::record::Field::with_rules

mod parse;

pub use parse::{parse_rules, RuleSyntaxError};

use crate::engine::{RuleEngine, RuleReport, Violation};
use crate::record::{Node, Scalar};
use crate::types::EngineError;
use core::fmt;
use moka::sync::Cache;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::{Arc, OnceLock};

/// One parsed field rule.
#[derive(Debug, Clone)]
pub enum Rule {
    Required,
    Min(f64),
    Max(f64),
    Range(f64, f64),
    MinSize(usize),
    MaxSize(usize),
    Length(usize),
    Alpha,
    Numeric,
    AlphaNumeric,
    AlphaDash,
    Email,
    Ip,
    Match(Regex),
    NoMatch(Regex),
}

impl Rule {
    /// Returns true if `value` satisfies the rule.
    ///
    /// An absent optional value only fails `Required`.
    pub fn is_satisfied(&self, value: &Node<'_>) -> bool {
        if matches!(value, Node::Scalar(Scalar::Null)) {
            return !matches!(self, Rule::Required);
        }
        match self {
            Rule::Required => is_present(value),
            Rule::Min(min) => number(value).is_some_and(|v| v >= *min),
            Rule::Max(max) => number(value).is_some_and(|v| v <= *max),
            Rule::Range(min, max) => number(value).is_some_and(|v| v >= *min && v <= *max),
            Rule::MinSize(size) => len(value).is_some_and(|n| n >= *size),
            Rule::MaxSize(size) => len(value).is_some_and(|n| n <= *size),
            Rule::Length(size) => len(value).is_some_and(|n| n == *size),
            Rule::Alpha => text(value).is_some_and(|s| s.chars().all(|c| c.is_ascii_alphabetic())),
            Rule::Numeric => text(value).is_some_and(|s| s.chars().all(|c| c.is_ascii_digit())),
            Rule::AlphaNumeric => {
                text(value).is_some_and(|s| s.chars().all(|c| c.is_ascii_alphanumeric()))
            }
            Rule::AlphaDash => text(value).is_some_and(|s| {
                s.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            }),
            Rule::Email => text(value).is_some_and(|s| email_pattern().is_match(s)),
            Rule::Ip => text(value).is_some_and(|s| s.parse::<Ipv4Addr>().is_ok()),
            Rule::Match(re) => text(value).is_some_and(|s| re.is_match(s)),
            Rule::NoMatch(re) => text(value).is_some_and(|s| !re.is_match(s)),
        }
    }

    /// Human-readable message reported when the rule is broken.
    pub fn message(&self) -> String {
        match self {
            Rule::Required => "Can not be empty".to_string(),
            Rule::Min(min) => format!("Minimum is {min}"),
            Rule::Max(max) => format!("Maximum is {max}"),
            Rule::Range(min, max) => format!("Range is {min} to {max}"),
            Rule::MinSize(size) => format!("Minimum size is {size}"),
            Rule::MaxSize(size) => format!("Maximum size is {size}"),
            Rule::Length(size) => format!("Required length is {size}"),
            Rule::Alpha => "Must be valid alpha characters".to_string(),
            Rule::Numeric => "Must be valid numeric characters".to_string(),
            Rule::AlphaNumeric => "Must be valid alpha or numeric characters".to_string(),
            Rule::AlphaDash => {
                "Must be valid alpha or numeric or dash(-_) characters".to_string()
            }
            Rule::Email => "Must be a valid email address".to_string(),
            Rule::Ip => "Must be a valid ip address".to_string(),
            Rule::Match(re) => format!("Must match {}", re.as_str()),
            Rule::NoMatch(re) => format!("Must not match {}", re.as_str()),
        }
    }
}

fn is_present(value: &Node<'_>) -> bool {
    match value {
        Node::Record(_) => true,
        Node::List(items) => !items.is_empty(),
        Node::Scalar(scalar) => match *scalar {
            Scalar::Str(s) => !s.trim().is_empty(),
            Scalar::Int(v) => v != 0,
            Scalar::UInt(v) => v != 0,
            Scalar::Float(v) => v != 0.0,
            Scalar::Bool(v) => v,
            Scalar::Char(c) => c != '\0',
            Scalar::Null => false,
            Scalar::Opaque(_) => true,
        },
    }
}

fn number(value: &Node<'_>) -> Option<f64> {
    match value {
        Node::Scalar(scalar) => scalar.as_f64(),
        _ => None,
    }
}

fn text<'n>(value: &'n Node<'_>) -> Option<&'n str> {
    match value {
        Node::Scalar(Scalar::Str(s)) => Some(*s),
        _ => None,
    }
}

fn len(value: &Node<'_>) -> Option<usize> {
    match value {
        Node::Scalar(Scalar::Str(s)) => Some(s.chars().count()),
        Node::List(items) => Some(items.len()),
        _ => None,
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(
            r"^[\w!#$%&'*+/=?^_`{|}~-]+(?:\.[\w!#$%&'*+/=?^_`{|}~-]+)*@(?:[\w](?:[\w-]*[\w])?\.)+[a-zA-Z0-9](?:[\w-]*[\w])?$",
        )
        .expect("email pattern is a valid regex")
    })
}

/// Parsed declarations kept by [`TagRules::new`] (1000 entries).
pub const DEFAULT_CACHE_CAPACITY: u64 = 1000;

/// Rule engine reading the rule declarations attached to record fields.
///
/// Parsed declarations are kept in a bounded LRU cache keyed by the
/// declaration text. Clones share the cache.
///
/// # Examples
///
/// ```
/// use validation_rail::rules::TagRules;
/// use validation_rail::{record, Inspect, RuleEngine};
///
/// struct Employer {
///     name: String,
/// }
///
/// record!(Employer as "Employer" { name: "Required" });
///
/// let employer = Employer { name: String::new() };
/// let report = TagRules::new().evaluate(&employer.to_node()).unwrap();
/// assert!(!report.is_valid());
/// assert_eq!(report.violations()[0].message, "Can not be empty");
/// ```
#[derive(Clone)]
pub struct TagRules {
    cache: Cache<String, Arc<[Rule]>>,
}

impl TagRules {
    /// Creates an engine with [`DEFAULT_CACHE_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Creates an engine caching at most `capacity` parsed declarations.
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Returns the number of cached declarations.
    pub fn cache_size(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn capacity(&self) -> u64 {
        self.cache.policy().max_capacity().unwrap_or(0)
    }

    fn rules_for(&self, declaration: &str) -> Result<Arc<[Rule]>, RuleSyntaxError> {
        if let Some(rules) = self.cache.get(declaration) {
            return Ok(rules);
        }

        let rules: Arc<[Rule]> = parse_rules(declaration)?.into();
        self.cache.insert(declaration.to_owned(), Arc::clone(&rules));
        Ok(rules)
    }
}

impl Default for TagRules {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TagRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagRules")
            .field("capacity", &self.capacity())
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl RuleEngine for TagRules {
    fn evaluate(&self, node: &Node<'_>) -> Result<RuleReport, EngineError> {
        let record = node
            .as_record()
            .ok_or_else(|| EngineError::not_a_record(node))?;

        let mut violations = Vec::new();
        for field in record.fields() {
            let Some(declaration) = field.rules() else {
                continue;
            };
            let rules = self
                .rules_for(declaration)
                .map_err(|err| EngineError::InvalidRule {
                    field: field.name().to_owned(),
                    rule: err.rule,
                    reason: err.reason,
                })?;

            for rule in rules.iter() {
                if !rule.is_satisfied(field.value()) {
                    violations.push(Violation::new(field.name(), rule.message(), field.value()));
                }
            }
        }

        Ok(RuleReport::from_violations(violations))
    }
}
