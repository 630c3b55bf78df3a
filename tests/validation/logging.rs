#![cfg(feature = "tracing")]

use crate::common::{person, Link};
use std::cell::Cell;
use tracing::Level;
use validation_rail::rules::TagRules;
use validation_rail::{validate, Validator, ValidatorConfig};

fn with_trace_subscriber<T>(f: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

#[test]
fn traversal_logs_without_changing_results() {
    let input = person("", 17, "");
    let expected = validate(&input);

    let logged = with_trace_subscriber(|| validate(&input));
    assert_eq!(logged, expected);
}

#[test]
fn engine_failures_and_depth_hits_are_logged() {
    let errors = with_trace_subscriber(|| validate("a string"));
    assert_eq!(errors.len(), 1);

    let link = Link {
        name: "a".into(),
        next: Cell::new(None),
    };
    link.next.set(Some(&link));

    let validator = Validator::new(TagRules::new())
        .with_config(ValidatorConfig::default().with_max_depth(Some(1)));
    let errors = with_trace_subscriber(|| validator.validate(&link));
    assert_eq!(errors.len(), 1);
}
