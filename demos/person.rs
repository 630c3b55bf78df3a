//! Nested Record Example
//!
//! Validates a person with an employer and a team with a list of members,
//! printing every error found in the graph.
//!
//! Run with: cargo run --example person

use validation_rail::prelude::*;
use validation_rail::ReportFormat;

#[derive(Debug, Clone, Default)]
struct Employer {
    name: String,
}

#[derive(Debug, Clone, Default)]
struct Person {
    name: String,
    age: u32,
    employer: Employer,
}

#[derive(Debug, Clone, Default)]
struct Team {
    name: String,
    members: Vec<Person>,
}

record!(Employer as "Employer" { name as "Name": "Required" });
record!(Person as "Person" {
    name as "Name": "Required",
    age as "Age": "Required;Min(18)",
    employer as "Employer",
});
record!(Team as "Team" {
    name as "Name": "Required;AlphaDash",
    members as "Members",
});

fn report(title: &str, errors: &ValidationErrors) {
    println!("=== {title} ===");
    if errors.is_empty() {
        println!("valid\n");
    } else {
        println!("{}\n", errors.format_with(&ReportFormat::bulleted()));
    }
}

fn main() {
    let minor = Person {
        age: 17,
        ..Default::default()
    };
    report("Person with missing fields", &validate(&minor));

    let unemployed = Person {
        name: "Sam".into(),
        age: 18,
        ..Default::default()
    };
    report("Person with empty employer", &validate(&unemployed));

    let valid = Person {
        name: "John".into(),
        age: 35,
        employer: Employer {
            name: "Widgets, Inc.".into(),
        },
    };
    report("Valid person", &validate(&valid));

    let team = Team {
        name: "platform team".into(),
        members: vec![valid.clone(), unemployed, valid],
    };
    report("Team (type chain)", &validate(&team));

    let by_path = Validator::new(TagRules::new()).with_config(ValidatorConfig::field_paths());
    report("Team (field paths)", &by_path.validate(&team));

    report("Not a record", &validate("a string"));
}
