pub mod core;
pub mod logging;
pub mod traits;

use crate::common::{person, valid_person, Person};
use validation_rail::{validate, validate_with_context, EngineError, ValidationError};

#[test]
fn missing_name_and_employer_reports_three_errors_in_order() {
    let input = Person {
        age: 17,
        ..Default::default()
    };

    let lines: Vec<String> = validate(&input).iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        [
            "Person validation failed: `Name` Can not be empty (actual value: \"\")",
            "Person validation failed: `Age` Minimum is 18 (actual value: 17)",
            "Person.Employer validation failed: `Name` Can not be empty (actual value: \"\")",
        ]
    );
}

#[test]
fn only_nested_employer_invalid() {
    let errors = validate(&person("Sam", 18, ""));

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "Person.Employer validation failed: `Name` Can not be empty (actual value: \"\")"
    );
}

#[test]
fn fully_valid_graph_yields_no_errors() {
    let errors = validate(&valid_person());
    assert!(errors.is_empty());
}

#[test]
fn bare_string_is_not_a_record() {
    let errors = validate("a string");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0],
        ValidationError::Engine(EngineError::NotARecord {
            actual: "\"a string\"".into()
        })
    );
    assert_eq!(
        errors[0].to_string(),
        "\"a string\" must be a record or a reference to a record"
    );
}

#[test]
fn integers_and_lists_are_not_records_either() {
    assert_eq!(validate(&42).len(), 1);
    assert_eq!(validate(&vec![valid_person()]).len(), 1);
    assert!(matches!(
        validate(&Option::<Person>::None)[0],
        ValidationError::Engine(EngineError::NotARecord { .. })
    ));
}

#[test]
fn parent_context_prefixes_root_type() {
    let errors = validate_with_context(&person("", 30, "Acme"), "Company");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].context(), Some("Company.Person"));

    let errors = validate_with_context(&person("", 30, ""), "Company");
    assert_eq!(errors[1].context(), Some("Company.Person.Employer"));
}
