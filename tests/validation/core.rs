use crate::common::{employer, person, valid_person, People, Person, Team};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use validation_rail::engine::{engine_fn, RuleReport};
use validation_rail::record::{Field, Record};
use validation_rail::rules::TagRules;
use validation_rail::{
    impl_inspect, record, validate, ContextStyle, EngineError, Node, RuleEngine, Scalar,
    ValidationError, Validator, ValidatorConfig,
};

fn contexts(errors: &validation_rail::ValidationErrors) -> Vec<&str> {
    errors.iter().filter_map(ValidationError::context).collect()
}

#[test]
fn repeated_calls_return_identical_results() {
    let input = person("", 3, "");
    assert_eq!(validate(&input), validate(&input));

    let validator = Validator::new(TagRules::new());
    assert_eq!(validator.validate(&input), validator.validate(&input));
}

#[test]
fn references_and_smart_pointers_are_transparent() {
    let input = person("", 17, "");
    let expected = validate(&input);

    assert_eq!(validate(&&input), expected);
    assert_eq!(validate(&Box::new(input.clone())), expected);
    assert_eq!(validate(&Rc::new(input.clone())), expected);
    assert_eq!(validate(&Arc::new(input.clone())), expected);
    assert_eq!(validate(&Some(input.clone())), expected);
}

#[test]
fn every_level_contributes_errors() {
    let team = Team {
        title: String::new(),
        lead: person("Ann", 12, "Acme"),
        members: vec![valid_person(), person("", 40, "")],
        tags: vec!["x".into()],
        sponsor: Some(employer("")),
    };

    let errors = validate(&team);
    assert_eq!(
        contexts(&errors),
        [
            "Team",
            "Team.Person",
            "Team.Person",
            "Team.Person.Employer",
            "Team.Employer",
        ]
    );
    assert_eq!(errors[0].field_name(), Some("Title"));
    assert_eq!(errors[1].field_name(), Some("Age"));
    assert_eq!(errors[2].field_name(), Some("Name"));
    assert_eq!(errors.field_violations().count(), 5);
}

#[test]
fn collection_elements_share_context() {
    let people = People {
        people: vec![valid_person(), person("", 20, "Acme"), valid_person()],
    };

    let errors = validate(&people);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "People.Person validation failed: `Name` Can not be empty (actual value: \"\")"
    );
}

#[test]
fn collection_elements_are_visited_in_order() {
    let people = People {
        people: vec![person("", 20, "A"), person("B", 1, "B"), person("C", 30, "")],
    };

    let errors = validate(&people);
    let fields: Vec<_> = errors.iter().filter_map(ValidationError::field_name).collect();
    assert_eq!(fields, ["Name", "Age", "Name"]);
    assert_eq!(
        contexts(&errors),
        ["People.Person", "People.Person", "People.Person.Employer"]
    );
}

#[test]
fn scalars_empty_lists_and_scalar_lists_are_not_descended() {
    let calls = Cell::new(0);
    let engine = engine_fn(|node: &Node<'_>| {
        calls.set(calls.get() + 1);
        TagRules::new().evaluate(node)
    });

    let team = Team {
        title: "Core".into(),
        lead: valid_person(),
        tags: vec!["a".into(), "b".into()],
        ..Default::default()
    };
    let errors = Validator::new(&engine).validate(&team);

    // Team and its lead, plus the lead's employer. Members is empty, tags
    // holds strings and the sponsor is absent.
    assert_eq!(calls.get(), 3);
    assert!(errors.is_empty());
}

#[test]
fn engine_failure_only_stops_its_own_branch() {
    let engine = engine_fn(|node: &Node<'_>| {
        let record = node
            .as_record()
            .ok_or_else(|| EngineError::not_a_record(node))?;
        let exploding = record.type_name() == "Employer"
            && record
                .fields()
                .iter()
                .any(|f| matches!(f.value(), Node::Scalar(Scalar::Str("boom"))));
        if exploding {
            return Err(EngineError::Other("employer lookup failed".into()));
        }
        TagRules::new().evaluate(node)
    });

    let people = People {
        people: vec![person("", 20, "A"), person("", 20, "boom"), person("", 20, "")],
    };
    let errors = Validator::new(engine).validate(&people);

    let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("People.Person validation failed: `Name`"));
    assert!(lines[1].starts_with("People.Person validation failed: `Name`"));
    assert_eq!(lines[2], "employer lookup failed");
    assert!(lines[3].starts_with("People.Person validation failed: `Name`"));
    assert!(lines[4].starts_with("People.Person.Employer validation failed: `Name`"));
}

#[test]
fn malformed_rule_reports_one_engine_error_for_the_record() {
    struct Account {
        login: String,
        owner: Person,
    }
    record!(Account as "Account" { login: "Required;Between(1)", owner as "Owner" });

    let account = Account {
        login: String::new(),
        owner: person("", 30, "Acme"),
    };
    let errors = validate(&account);

    // The record the engine failed on is not descended into.
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ValidationError::Engine(EngineError::InvalidRule { field, rule, .. }) => {
            assert_eq!(field, "login");
            assert_eq!(rule, "Between");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn absent_optional_record_is_skipped() {
    let team = Team {
        title: "Core".into(),
        lead: valid_person(),
        sponsor: None,
        ..Default::default()
    };
    assert!(validate(&team).is_empty());

    let team = Team {
        sponsor: Some(employer("")),
        ..team
    };
    assert_eq!(contexts(&validate(&team)), ["Team.Employer"]);
}

#[test]
fn field_path_context_names_fields_and_indices() {
    let validator = Validator::new(TagRules::new()).with_config(ValidatorConfig::field_paths());
    let team = Team {
        title: "Core".into(),
        lead: person("Ann", 30, ""),
        members: vec![valid_person(), person("", 30, "")],
        ..Default::default()
    };

    let errors = validator.validate(&team);
    assert_eq!(
        contexts(&errors),
        ["Team.Lead.Employer", "Team.Members[1]", "Team.Members[1].Employer"]
    );
    assert_eq!(validator.config().context_style, ContextStyle::FieldPath);
}

#[test]
fn root_without_type_name_override_uses_full_type_name() {
    struct Inner {
        code: String,
    }
    struct Outer {
        inner: Inner,
    }
    record!(Inner { code: "Required" });
    record!(Outer { inner });

    let errors = validate(&Outer {
        inner: Inner { code: String::new() },
    });

    let context = errors[0].context().unwrap_or_default();
    assert!(context.contains("::Outer."), "context was {context}");
    assert!(context.ends_with(".Inner"), "context was {context}");
}

#[test]
fn engine_accepting_scalars_is_not_recursed() {
    let engine = engine_fn(|_: &Node<'_>| Ok(RuleReport::valid()));
    assert!(Validator::new(engine).validate("anything").is_empty());
}

#[test]
fn hand_written_record_with_opaque_field() {
    #[derive(Debug)]
    struct Token([u8; 2]);

    struct Session {
        user: String,
        token: Token,
    }

    impl Record for Session {
        fn type_name(&self) -> &str {
            "Session"
        }

        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("User", &self.user).with_rules("Required;AlphaNumeric"),
                Field::opaque("Token", &self.token).with_rules("Required"),
            ]
        }
    }
    impl_inspect!(Session);

    let errors = validate(&Session {
        user: "sam!".into(),
        token: Token([1, 2]),
    });
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "Session validation failed: `User` Must be valid alpha or numeric characters \
         (actual value: \"sam!\")"
    );
}
