use std::sync::Arc;
use std::time::Duration;

use expecta::{
    action::Return,
    expect_call,
    matcher::{closure, deref, eq, inspect, ne, range, str_contains, str_ends_with},
    mock,
    types::Duration as Timeout,
};

pub trait Store {
    fn get(&self, key: &str) -> Option<usize>;
    fn put(&self, key: Arc<String>, value: usize);
    fn wait(&self, timeout: Duration) -> bool;
}

mock! {
    pub struct MockStore;

    impl Store for MockStore {
        fn get(&self, key: &str) -> Option<usize>;
        fn put(&self, key: Arc<String>, value: usize);
        fn wait(&self, timeout: Duration) -> bool;
    }
}

#[test]
fn string_matchers() {
    let store = MockStore::strict();

    expect_call!(store as Store, get(str_contains("user"))).will_once(Return(Some(1)));
    expect_call!(store as Store, get(str_ends_with(".tmp"))).will_once(Return(None));

    assert_eq!(None, store.get("cache.tmp"));
    assert_eq!(Some(1), store.get("user/42"));
}

#[test]
fn deref_forwards_to_the_target() {
    let store = MockStore::strict();

    expect_call!(store as Store, put(deref(eq("answer")), range(40..50usize)));

    store.put(Arc::new(String::from("answer")), 42);
}

#[test]
fn range_of_values() {
    let store = MockStore::strict();

    expect_call!(store as Store, put(_, range(..=10usize))).times(2);

    store.put(Arc::new(String::new()), 0);
    store.put(Arc::new(String::new()), 10);
}

#[test]
#[should_panic(expected = "unexpected call to Store::put")]
fn range_rejects_values_outside() {
    let store = MockStore::strict();

    expect_call!(store as Store, put(_, range(1..10usize)));

    store.put(Arc::new(String::new()), 10);
}

#[test]
fn duration_parsed_from_string() {
    let store = MockStore::strict();
    let timeout: Timeout = "1s 500ms".parse().unwrap();

    expect_call!(store as Store, wait(eq(timeout))).will_once(Return(true));
    expect_call!(store as Store, wait(range(Timeout::ZERO..timeout))).will_once(Return(false));

    assert!(!store.wait(Duration::from_millis(10)));
    assert!(store.wait(Duration::from_millis(1500)));
}

#[test]
fn closure_and_negation() {
    let store = MockStore::strict();

    expect_call!(store as Store, put(closure(|key: &Arc<String>| key.len() > 3), ne(0usize)));

    store.put(Arc::new(String::from("long")), 1);
}

#[test]
fn inspect_logs_comparisons() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();

    let store = MockStore::strict();

    expect_call!(store as Store, get(inspect(eq("key")))).will_once(Return(Some(3)));

    assert_eq!(Some(3), store.get("key"));
}
