//! Tests for `#[derive(Nullable)]`.

use explicit::Nullable;
use explicit::control::{Maybe, some};
use rstest::rstest;

#[derive(Debug, Clone, Nullable)]
struct Account {
    id: u64,
    #[nullable(delegate(method = "len", returns = "usize"))]
    #[nullable(delegate(method = "is_empty", returns = "bool"))]
    nickname: Option<String>,
    #[nullable(rename = "referrer_id")]
    referrer: Option<u64>,
    #[nullable(skip)]
    cache: Option<Vec<u8>>,
}

impl Account {
    // Would collide with a generated accessor if `skip` were ignored.
    fn cache(&self) -> usize {
        self.cache.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Nullable)]
struct Wrapper<T: Clone> {
    inner: Option<T>,
    label: &'static str,
}

fn account(nickname: Option<&str>, referrer: Option<u64>) -> Account {
    Account {
        id: 7,
        nickname: nickname.map(str::to_string),
        referrer,
        cache: Some(vec![1, 2, 3]),
    }
}

#[rstest]
fn derive_generates_borrowing_accessor() {
    let present = account(Some("al"), None);
    assert_eq!(present.nickname(), some(&"al".to_string()));
    assert_eq!(account(None, None).nickname(), Maybe::None);
    assert_eq!(present.id, 7);
}

#[rstest]
fn derive_generates_delegates() {
    let present = account(Some("al"), None);
    assert_eq!(present.nickname_len(), some(2));
    assert_eq!(present.nickname_is_empty(), some(false));
    assert_eq!(account(None, None).nickname_len(), Maybe::None);
}

#[rstest]
fn derive_renames_accessor() {
    assert_eq!(account(None, Some(42)).referrer_id(), some(&42));
    assert_eq!(account(None, None).referrer_id(), Maybe::None);
}

#[rstest]
fn derive_skips_field() {
    assert_eq!(account(None, None).cache(), 3);
}

#[rstest]
fn derive_supports_generics() {
    let wrapper = Wrapper {
        inner: Some(vec!['a']),
        label: "chars",
    };
    assert_eq!(wrapper.inner(), some(&vec!['a']));
    assert_eq!(wrapper.label, "chars");
}
