//! Unit tests for the `Outcome<T, E>` Result algebra.

use explicit::control::{Arbitrary, Outcome, err, err_arbitrary, ok, some};
use explicit::error::{ExpectError, UnwrapError};
use explicit::policy::{self, Policy};
use rstest::rstest;

fn never_called<T>() -> T {
    panic!("callback must not be invoked")
}

// =============================================================================
// Construction and Predicates
// =============================================================================

#[rstest]
fn outcome_arbitrary_and_explicit_errors_are_both_errors() {
    let bare: Outcome<i32> = err_arbitrary();
    let explicit: Outcome<i32, &str> = err("explicit");
    assert!(bare.is_err());
    assert!(explicit.is_err());
    assert_eq!(bare.unwrap_err(), Arbitrary);
    assert_eq!(explicit.unwrap_err(), "explicit");
}

#[rstest]
fn outcome_arbitrary_errors_are_equal_to_each_other() {
    assert_eq!(err_arbitrary::<i32>(), err_arbitrary::<i32>());
}

#[rstest]
fn outcome_equality_is_tag_sensitive() {
    let success: Outcome<i32, i32> = ok(1);
    let failure: Outcome<i32, i32> = err(1);
    assert_ne!(success, failure);
    assert_eq!(success, ok(1));
    assert_eq!(failure, err(1));
}

#[rstest]
fn outcome_ok_and_and_err_and() {
    assert!(ok::<i32, ()>(3).ok_and(|n| *n == 3));
    assert!(!err::<i32, &str>("e").ok_and(|_| never_called()));
    assert!(err::<i32, &str>("e").err_and(|e| e.starts_with('e')));
    assert!(!ok::<i32, &str>(1).err_and(|_| never_called()));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn outcome_unwrap_returns_value() {
    assert_eq!(ok::<i32, ()>(5).unwrap(), 5);
}

#[rstest]
#[should_panic(expected = "value is an Err")]
fn outcome_unwrap_err_variant_panics() {
    err::<i32, &str>("boom").unwrap();
}

#[rstest]
#[should_panic(expected = "value is an Ok")]
fn outcome_unwrap_err_on_ok_panics() {
    ok::<i32, &str>(1).unwrap_err();
}

#[rstest]
#[should_panic(expected = "config missing")]
fn outcome_expect_panics_with_message() {
    err::<i32, ()>(()).expect("config missing");
}

#[rstest]
fn outcome_try_forms_return_errors() {
    assert_eq!(err::<i32, &str>("e").try_unwrap(), Err(UnwrapError::err()));
    assert_eq!(ok::<i32, &str>(1).try_unwrap_err(), Err(UnwrapError::ok()));
    assert_eq!(
        err::<i32, &str>("e").try_expect("needed"),
        Err(ExpectError::new("needed"))
    );
    assert_eq!(ok::<i32, &str>(1).try_expect("needed"), Ok(1));
}

#[rstest]
fn outcome_unwrap_or_variants() {
    assert_eq!(ok::<i32, &str>(1).unwrap_or(0), 1);
    assert_eq!(err::<i32, &str>("e").unwrap_or(0), 0);
    assert_eq!(err::<usize, &str>("four").unwrap_or_else(str::len), 4);
    assert_eq!(ok::<usize, &str>(2).unwrap_or_else(|_| never_called()), 2);
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
fn outcome_and_returns_other_for_ok() {
    assert_eq!(ok::<i32, &str>(1).and(ok(2)).unwrap(), 2);
}

#[rstest]
fn outcome_and_keeps_original_err() {
    let failure = err::<i32, &str>("x");
    let combined = failure.and(ok::<i32, &str>(2));
    assert!(combined.is_err());
    assert_eq!(combined, failure);
}

#[rstest]
fn outcome_and_then_is_lazy_on_err() {
    let failure = err::<i32, &str>("e");
    let chained = failure.and_then(|_| -> Outcome<i32, &str> { panic!("boom") });
    assert_eq!(chained, err("e"));
}

#[rstest]
fn outcome_and_then_chains_ok() {
    let parsed = ok::<&str, String>("42")
        .and_then(|raw| Outcome::from(raw.parse::<i32>().map_err(|error| error.to_string())));
    assert_eq!(parsed, ok(42));
}

#[rstest]
fn outcome_or_and_or_else() {
    assert_eq!(err::<i32, &str>("e").or(ok::<i32, ()>(2)), ok(2));
    assert_eq!(ok::<i32, &str>(1).or(err::<i32, ()>(())), ok(1));
    assert_eq!(
        err::<i32, &str>("e").or_else(|reason| err::<i32, usize>(reason.len())),
        err(1)
    );
    assert_eq!(
        ok::<i32, &str>(1).or_else(|_| -> Outcome<i32, ()> { never_called() }),
        ok(1)
    );
}

#[rstest]
fn outcome_match_with_dispatches_once() {
    let mut calls = Vec::new();
    let label = ok::<i32, &str>(3).match_with(
        |n| {
            calls.push("ok");
            n * 2
        },
        |_| never_called(),
    );
    assert_eq!(label, 6);
    assert_eq!(calls, vec!["ok"]);
    assert_eq!(err::<i32, &str>("e").match_with(|_| never_called(), str::len), 1);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn outcome_ok_value_and_err_value() {
    assert_eq!(ok::<i32, &str>(1).ok_value(), some(1));
    assert!(ok::<i32, &str>(1).err_value().is_none());
    assert_eq!(err::<i32, &str>("e").err_value(), some("e"));
}

#[rstest]
fn outcome_converts_to_and_from_std_result() {
    let from_std: Outcome<i32, String> = Ok::<i32, String>(1).into();
    assert_eq!(from_std, ok(1));
    let back: Result<i32, String> = err::<i32, String>("bad".to_string()).into();
    assert_eq!(back, Err("bad".to_string()));
}

#[rstest]
fn outcome_as_ref_borrows() {
    let message: Outcome<String, String> = err("slow".to_string());
    assert_eq!(message.as_ref().err_value().map(String::len), some(4));
    assert!(message.is_err());
}

// =============================================================================
// Lenient Equality
// =============================================================================

#[rstest]
fn outcome_raw_comparison_is_refused_by_default() {
    let error = ok::<i32, ()>(1).try_eq_value(&1).unwrap_err();
    assert_eq!(error.left, "Result");
}

#[rstest]
fn outcome_raw_comparison_under_lenient_equality() {
    let lenient = Policy::new().with_lenient_equality(true);
    policy::scoped(lenient, || {
        assert_eq!(ok::<i32, ()>(1).try_eq_value(&1), Ok(true));
        assert_eq!(ok::<i32, ()>(1).try_eq_value(&2), Ok(false));
        assert_eq!(err::<i32, i32>(1).try_eq_value(&1), Ok(false));
    });
    assert!(ok::<i32, ()>(1).try_eq_value(&1).is_err());
}
