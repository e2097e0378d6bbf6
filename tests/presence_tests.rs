//! Tests for blank/present checks.

use std::collections::{BTreeMap, HashMap};

use explicit::control::{Maybe, none, some};
use explicit::dynamic::Value;
use explicit::error::{CombinatorError, NotPresentError, TypeMismatchError};
use explicit::presence::Presence;
use rstest::rstest;

#[rstest]
fn presence_of_strings() {
    assert_eq!("hello".presence(), some("hello"));
    assert_eq!("".presence(), Maybe::None);
    assert_eq!(" \n".presence(), Maybe::None);
    assert!(String::from("x").is_present());
}

#[rstest]
fn presence_of_collections() {
    assert!(Vec::<u8>::new().is_blank());
    assert!(vec![0_u8].is_present());
    assert!([1, 2][..].is_present());
    assert!(HashMap::<String, i32>::new().is_blank());

    let mut scores = BTreeMap::new();
    scores.insert("alice", 3);
    assert_eq!(scores.presence().map(BTreeMap::len), some(1));
}

#[rstest]
fn presence_of_optionals_and_booleans() {
    assert!(None::<i32>.is_blank());
    assert!(Some(0).is_present());
    assert!(none::<i32>().is_blank());
    assert!(some(0).is_present());
    assert!(false.is_blank());
    assert!(true.is_present());
}

#[rstest]
fn presence_require_present_errors_for_blank_values() {
    assert_eq!(
        Value::Nil.require_present(),
        Err(NotPresentError { type_name: "Nil" })
    );
    assert_eq!("".require_present().unwrap_err().type_name, "str");
    assert_eq!(Value::from(3).require_present(), Ok(&Value::from(3)));
}

#[rstest]
fn presence_require_present_converts_into_combinator_error() {
    fn display_name(name: &str) -> Result<String, CombinatorError> {
        Ok(name.require_present()?.trim().to_string())
    }

    assert_eq!(display_name(" alice "), Ok("alice".to_string()));
    assert!(matches!(
        display_name("   "),
        Err(CombinatorError::NotPresent(_))
    ));
}

#[rstest]
#[case(Value::from("alice"), Value::from("guest"), Value::from("alice"))]
#[case(Value::from(""), Value::from("guest"), Value::from("guest"))]
#[case(Value::Nil, Value::from(0), Value::from(0))]
#[case(Value::Nil, Value::none(), Value::none())]
#[case(Value::Array(Vec::new()), Value::from(vec![Value::from(1)]), Value::from(vec![Value::from(1)]))]
fn presence_or_returns_receiver_or_fallback(
    #[case] receiver: Value,
    #[case] fallback: Value,
    #[case] expected: Value,
) {
    assert_eq!(receiver.presence_or(fallback), Ok(expected));
}

#[rstest]
#[case(Value::from(""), Value::from(0), "String", "Integer")]
#[case(Value::from(false), Value::from("no"), "Boolean", "String")]
fn presence_or_rejects_fallback_of_another_type(
    #[case] receiver: Value,
    #[case] fallback: Value,
    #[case] expected: &'static str,
    #[case] found: &'static str,
) {
    assert_eq!(
        receiver.presence_or(fallback),
        Err(TypeMismatchError { expected, found })
    );
}
