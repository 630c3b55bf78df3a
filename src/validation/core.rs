use crate::config::{ContextStyle, ValidatorConfig};
use crate::engine::RuleEngine;
use crate::record::{simple_type_name, Inspect, Node, Record};
use crate::rules::TagRules;
use crate::types::{ValidationError, ValidationErrors};

/// Recursive validator: a rule engine plus traversal settings.
///
/// The validator walks an object graph depth-first. At every record it asks
/// the engine for field-level violations, then descends into fields holding
/// a record or a non-empty list whose first element is a record. Every
/// error from every branch is collected; nothing short-circuits except an
/// engine failure, which ends only the branch it occurred in.
///
/// # Examples
///
/// ```
/// use validation_rail::rules::TagRules;
/// use validation_rail::{record, Validator};
///
/// struct Employer {
///     name: String,
/// }
///
/// struct Person {
///     name: String,
///     age: u32,
///     employer: Employer,
/// }
///
/// record!(Employer as "Employer" { name as "Name": "Required" });
/// record!(Person as "Person" {
///     name as "Name": "Required",
///     age as "Age": "Required;Min(18)",
///     employer as "Employer",
/// });
///
/// let person = Person {
///     name: String::new(),
///     age: 17,
///     employer: Employer { name: String::new() },
/// };
///
/// let errors = Validator::new(TagRules::new()).validate(&person);
/// let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
/// assert_eq!(
///     lines,
///     [
///         "Person validation failed: `Name` Can not be empty (actual value: \"\")",
///         "Person validation failed: `Age` Minimum is 18 (actual value: 17)",
///         "Person.Employer validation failed: `Name` Can not be empty (actual value: \"\")",
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Validator<R = TagRules> {
    engine: R,
    config: ValidatorConfig,
}

impl Default for Validator<TagRules> {
    fn default() -> Self {
        Self::new(TagRules::new())
    }
}

/// Where the node being visited sits, used to qualify its type name.
enum Scope<'p> {
    /// The node is the root and no context was supplied.
    Root,
    /// Qualify with `<parent>.<SimpleTypeName>`.
    Parent(&'p str),
    /// The context is already fully spelled out.
    Path(String),
}

impl Scope<'_> {
    fn qualify(&self, record: &dyn Record) -> String {
        match self {
            Scope::Root => record.type_name().to_owned(),
            Scope::Parent(parent) => {
                format!("{parent}.{}", simple_type_name(record.type_name()))
            }
            Scope::Path(path) => path.clone(),
        }
    }

    /// Context for a node that may not be a record.
    fn describe(&self, node: &Node<'_>) -> String {
        match (self, node.as_record()) {
            (_, Some(record)) => self.qualify(record),
            (Scope::Path(path), None) => path.clone(),
            (Scope::Parent(parent), None) => (*parent).to_owned(),
            (Scope::Root, None) => format!("{node:?}"),
        }
    }
}

impl<R: RuleEngine> Validator<R> {
    /// Creates a validator with the default [`ValidatorConfig`].
    #[inline]
    pub fn new(engine: R) -> Self {
        Self {
            engine,
            config: ValidatorConfig::default(),
        }
    }

    #[inline]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    #[inline]
    pub fn engine(&self) -> &R {
        &self.engine
    }

    /// Validates `value` and every record reachable from it.
    ///
    /// The result is empty when everything passed.
    pub fn validate<T: Inspect + ?Sized>(&self, value: &T) -> ValidationErrors {
        self.validate_in(value, None)
    }

    /// Like [`validate`](Self::validate), qualifying the root's type name
    /// with `parent_context` the way nested records are qualified.
    pub fn validate_in<T: Inspect + ?Sized>(
        &self,
        value: &T,
        parent_context: Option<&str>,
    ) -> ValidationErrors {
        let scope = match parent_context {
            Some(parent) => Scope::Parent(parent),
            None => Scope::Root,
        };

        let mut errors = ValidationErrors::new();
        self.visit(&value.to_node(), scope, 0, &mut errors);

        #[cfg(feature = "tracing")]
        tracing::debug!(errors = errors.len(), "validation finished");

        errors
    }

    /// `Ok(())` if `value` passed, otherwise every error found.
    pub fn check<T: Inspect + ?Sized>(&self, value: &T) -> Result<(), ValidationErrors> {
        self.validate(value).into_result()
    }

    fn visit(
        &self,
        node: &Node<'_>,
        scope: Scope<'_>,
        depth: usize,
        errors: &mut ValidationErrors,
    ) {
        if let Some(limit) = self.config.max_depth {
            if depth > limit {
                let context = scope.describe(node);
                #[cfg(feature = "tracing")]
                tracing::debug!(%context, limit, "nesting depth exceeded");
                errors.push(ValidationError::DepthExceeded { context, limit });
                return;
            }
        }

        let report = match self.engine.evaluate(node) {
            Ok(report) => report,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %err, depth, "rule engine rejected node");
                errors.push(ValidationError::Engine(err));
                return;
            }
        };

        // A custom engine may accept a non-record node; it has no fields to walk.
        let Some(record) = node.as_record() else {
            return;
        };
        let context = scope.qualify(record);

        #[cfg(feature = "tracing")]
        tracing::trace!(%context, depth, valid = report.is_valid(), "visited record");

        if !report.is_valid() {
            errors.extend(report.into_violations().into_iter().map(|v| {
                ValidationError::Field {
                    context: context.clone(),
                    field: v.field,
                    message: v.message,
                    actual: v.actual,
                }
            }));
        }

        for field in record.fields() {
            let value = field.value();
            match value {
                Node::Record(_) => {
                    let scope = self.child_scope(&context, field.name(), None);
                    self.visit(value, scope, depth + 1, errors);
                }
                Node::List(items) if items.first().is_some_and(Node::is_record) => {
                    for (index, item) in items.iter().enumerate() {
                        let scope = self.child_scope(&context, field.name(), Some(index));
                        self.visit(item, scope, depth + 1, errors);
                    }
                }
                _ => {}
            }
        }
    }

    fn child_scope<'p>(&self, context: &'p str, field: &str, index: Option<usize>) -> Scope<'p> {
        match self.config.context_style {
            ContextStyle::TypeChain => Scope::Parent(context),
            ContextStyle::FieldPath => Scope::Path(match index {
                Some(index) => format!("{context}.{field}[{index}]"),
                None => format!("{context}.{field}"),
            }),
        }
    }
}

/// Validates `value` with the tag rule engine and default settings.
///
/// # Examples
///
/// ```
/// let errors = validation_rail::validate("a string");
/// assert!(!errors.is_empty());
/// ```
pub fn validate<T: Inspect + ?Sized>(value: &T) -> ValidationErrors {
    Validator::<TagRules>::default().validate(value)
}

/// Validates `value` with the tag rule engine, qualifying its type name
/// with `parent_context`.
pub fn validate_with_context<T: Inspect + ?Sized>(
    value: &T,
    parent_context: &str,
) -> ValidationErrors {
    Validator::<TagRules>::default().validate_in(value, Some(parent_context))
}
