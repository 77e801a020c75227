//! Integration tests for runtime discrimination.
//!
//! Values arriving as `Box<dyn Any>` (for example from a plugin registry or
//! a heterogeneous message queue) are classified without knowing their
//! variant in advance.

use std::any::Any;

use rstest::rstest;
use totality::prelude::*;

#[derive(Debug)]
struct Envelope {
    #[allow(dead_code)]
    tag: &'static str,
}

fn inbox() -> Vec<Box<dyn Any>> {
    vec![
        Box::new(present(1_i32)),
        Box::new(absent::<i32>()),
        Box::new(success::<i32, String>(2)),
        Box::new(failure::<i32, String>("late".to_string())),
        Box::new(Some(3_i32)),
        Box::new(Ok::<i32, String>(4)),
        Box::new(Envelope { tag: "Present" }),
    ]
}

#[rstest]
fn classifies_heterogeneous_values() {
    let messages = inbox();
    let optionals = messages
        .iter()
        .map(|message| &**message)
        .filter(|message| is_optional_value::<i32>(*message))
        .count();
    let fallibles = messages
        .iter()
        .map(|message| &**message)
        .filter(|message| is_fallible_result::<i32, String>(*message))
        .count();

    assert_eq!(optionals, 2);
    assert_eq!(fallibles, 2);
}

#[rstest]
fn discriminators_require_matching_parameters() {
    let value: Box<dyn Any> = Box::new(present(1_u64));
    assert!(!is_optional_value::<i32>(&*value));
    assert!(is_optional_value::<u64>(&*value));

    let value: Box<dyn Any> = Box::new(failure::<i32, &'static str>("x"));
    assert!(!is_fallible_result::<i32, String>(&*value));
    assert!(is_fallible_result::<i32, &'static str>(&*value));
}

#[rstest]
fn classified_values_can_be_recovered() {
    let value: Box<dyn Any> = Box::new(success::<i32, String>(9));
    assert!(is_fallible_result::<i32, String>(&*value));
    let recovered = value.downcast_ref::<Fallible<i32, String>>();
    assert_eq!(recovered, Some(&success(9)));
}

#[rstest]
#[case(present(0).variant(), Variant::Present)]
#[case(absent::<u8>().variant(), Variant::Absent)]
#[case(success::<u8, ()>(0).variant(), Variant::Success)]
#[case(failure::<u8, ()>(()).variant(), Variant::Failure)]
fn reports_variant(#[case] actual: Variant, #[case] expected: Variant) {
    assert_eq!(actual, expected);
}

#[rstest]
fn variant_display_names() {
    let names: Vec<String> = [Variant::Present, Variant::Absent, Variant::Success, Variant::Failure]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(names, ["Present", "Absent", "Success", "Failure"]);
}

#[rstest]
fn algebraic_is_usable_generically() {
    fn count_settled<V: Algebraic>(values: &[V]) -> usize {
        values
            .iter()
            .filter(|value| matches!(value.variant(), Variant::Present | Variant::Success))
            .count()
    }

    assert_eq!(count_settled(&[present(1), absent(), present(3)]), 2);
    assert_eq!(count_settled(&[success::<u8, ()>(1), failure(())]), 1);
}
