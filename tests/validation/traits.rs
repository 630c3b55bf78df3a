use crate::common::{person, valid_person, People};
use validation_rail::Validate;

#[test]
fn validate_trait_delegates_to_default_validator() {
    let invalid = person("", 17, "");
    assert_eq!(invalid.validate().len(), 3);
    assert!(!invalid.is_valid());
    assert!(valid_person().is_valid());
}

#[test]
fn validate_trait_works_through_references() {
    let people = People {
        people: vec![person("", 30, "Acme")],
    };
    let by_ref = &people;
    assert_eq!(by_ref.validate().len(), 1);
    assert!(!Box::new(people).is_valid());
}

#[test]
fn unsized_values_validate_too() {
    let text: &str = "plain";
    assert!(!text.is_valid());
}
