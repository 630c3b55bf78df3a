use crate::common::{employer, Employer};
use validation_rail::record::{simple_type_name, Field, Record};
use validation_rail::{validate, Inspect, Node, Scalar};

#[test]
fn options_convert_through_the_trait() {
    let present: Option<Employer> = Some(employer("Acme"));
    let absent: Option<Employer> = None;

    assert!(present.to_node().is_record());
    assert!(matches!(absent.to_node(), Node::Scalar(Scalar::Null)));
    assert!(matches!(Some(7_u16).to_node(), Node::Scalar(Scalar::UInt(7))));
    assert!(matches!(None::<u8>.to_node(), Node::Scalar(Scalar::Null)));
}

#[test]
fn option_fields_are_validated_when_present() {
    struct Contact {
        email: Option<String>,
    }

    impl Record for Contact {
        fn type_name(&self) -> &str {
            "Contact"
        }

        fn fields(&self) -> Vec<Field<'_>> {
            vec![Field::new("Email", &self.email).with_rules("Email")]
        }
    }

    validation_rail::impl_inspect!(Contact);

    assert!(validate(&Contact { email: None }).is_empty());
    assert_eq!(
        validate(&Contact {
            email: Some("nope".into())
        })
        .len(),
        1
    );
}

#[test]
fn node_debug_shows_simple_record_names() {
    let acme = employer("Acme");
    assert_eq!(format!("{:?}", acme.to_node()), "Employer { .. }");
    assert_eq!(format!("{:?}", vec![1_i8, -1].to_node()), "[1, -1]");
    assert_eq!(simple_type_name("crate::model::Employer"), "Employer");
}
