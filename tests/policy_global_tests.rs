//! Tests for the process-wide default policy.
//!
//! Kept in a separate test binary because changing the global default is
//! observable by every thread without an installed policy. All assertions
//! live in a single test so nothing runs concurrently with the change.

use std::thread;

use explicit::control::some;
use explicit::dynamic::Value;
use explicit::policy::{self, Policy};

#[test]
fn global_default_is_observed_by_threads_without_a_scope() {
    assert_eq!(policy::global_default(), Policy::new());

    let relaxed = Policy::new().with_strict_block_return_type(false);
    policy::set_global_default(relaxed);

    assert_eq!(Policy::current(), relaxed);
    let from_other_thread = thread::spawn(Policy::current)
        .join()
        .expect("thread finishes cleanly");
    assert_eq!(from_other_thread, relaxed);
    assert_eq!(
        some(Value::from(1)).and_then_value(|n| n),
        Ok(Value::from(1))
    );

    // A scoped override still wins over the global default.
    let strict = policy::scoped(Policy::new(), || {
        some(Value::from(1)).and_then_value(|n| n).is_err()
    });
    assert!(strict);

    policy::set_global_default(Policy::new());
    assert!(Policy::current().strict_block_return_type());
}
