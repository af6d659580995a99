use std::thread::spawn;

use expecta::{action::Return, expect_call, matcher::eq, mock};

pub trait Counter {
    fn next(&self) -> usize;
    fn reset(&self, value: usize);
}

mock! {
    #[derive(Clone)]
    pub struct MockCounter;

    impl Counter for MockCounter {
        fn next(&self) -> usize;
        fn reset(&self, value: usize);
    }
}

#[test]
fn clones_share_expectations() {
    let counter = MockCounter::strict();
    let clone = counter.clone();

    expect_call!(counter as Counter, next())
        .will_once(Return(1))
        .will_once(Return(2));

    assert_eq!(1, clone.next());
    assert_eq!(2, counter.next());
}

#[test]
fn expectations_of_a_clone_are_verified() {
    let counter = MockCounter::nice();

    {
        let clone = counter.clone();
        expect_call!(clone as Counter, reset(eq(5usize)));
    }

    counter.reset(5);
    assert!(counter.verify().is_ok());
}

#[test]
fn call_from_another_thread() {
    let counter = MockCounter::strict();

    expect_call!(counter as Counter, next()).will_repeatedly(Return(3));

    let clone = counter.clone();
    let sum = spawn(move || clone.next() + clone.next())
        .join()
        .unwrap();

    assert_eq!(6, sum);
    assert_eq!(3, counter.next());
}
