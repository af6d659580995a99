use std::time::Duration;

use expecta::{
    action::Return, expect_call, matcher::eq, mock, scope::guard, types::Duration as Timeout,
    InSequence,
};

pub trait Mutex {
    fn take(&self, timeout: Duration) -> bool;
    fn give(&self);
}

mock! {
    pub struct MockMutex;

    impl Mutex for MockMutex {
        fn take(&self, timeout: Duration) -> bool;
        fn give(&self);
    }
}

#[derive(Debug, Eq, PartialEq)]
enum Error {
    Timeout,
    Failed,
}

/// Execute `f` while `mutex` is taken. The mutex is given back on every path.
fn with_lock<M, F>(mutex: &M, timeout: Duration, f: F) -> Result<usize, Error>
where
    M: Mutex,
    F: FnOnce() -> Result<usize, Error>,
{
    if !mutex.take(timeout) {
        return Err(Error::Timeout);
    }

    let _lock = guard(mutex, |mutex| mutex.give());

    f()
}

fn timeout() -> Timeout {
    "5s".parse().unwrap()
}

#[test]
fn take_and_give_in_sequence() {
    let mutex = MockMutex::strict();

    {
        let _seq = InSequence::default();

        expect_call!(mutex as Mutex, take(eq(timeout()))).will_once(Return(true));
        expect_call!(mutex as Mutex, give());
    }

    assert_eq!(Ok(42), with_lock(&mutex, *timeout(), || Ok(42)));
}

#[test]
fn take_failed_does_not_give() {
    let mutex = MockMutex::strict();

    expect_call!(mutex as Mutex, take(eq(timeout()))).will_once(Return(false));
    expect_call!(mutex as Mutex, give()).times(0);

    assert_eq!(
        Err(Error::Timeout),
        with_lock(&mutex, Duration::from_secs(5), || Ok(1))
    );
}

#[test]
fn early_return_still_gives() {
    let mutex = MockMutex::strict();

    expect_call!(mutex as Mutex, take(_)).will_once(Return(true));
    expect_call!(mutex as Mutex, give());

    let ret = with_lock(&mutex, Duration::ZERO, || {
        let value: Result<usize, Error> = Err(Error::Failed);
        let value = value?;

        Ok(value + 1)
    });

    assert_eq!(Err(Error::Failed), ret);
}

#[test]
fn naggy_mock_warns_about_uninteresting_give() {
    let mutex = MockMutex::naggy();

    expect_call!(mutex as Mutex, take(_)).will_once(Return(true));

    assert!(mutex.take(Duration::from_millis(10)));
    mutex.give();

    assert_eq!(1, mutex.mock_handle().warnings().len());
}

#[test]
fn nice_mock_is_silent() {
    let mutex = MockMutex::nice();

    assert!(!mutex.take(Duration::from_millis(10)));
    mutex.give();

    assert!(mutex.mock_handle().warnings().is_empty());
    assert!(mutex.verify().is_ok());
}

#[test]
#[should_panic(expected = "unexpected call to Mutex::take")]
fn strict_mock_panics_on_uninteresting_take() {
    let mutex = MockMutex::strict();

    mutex.take(Duration::from_millis(10));
}

#[test]
#[should_panic(expected = "out of sequence")]
fn give_before_take_is_out_of_sequence() {
    let mutex = MockMutex::strict();

    {
        let _seq = InSequence::default();

        expect_call!(mutex as Mutex, take(_)).will_once(Return(true));
        expect_call!(mutex as Mutex, give());
    }

    mutex.give();
}

#[test]
#[should_panic(expected = "but it was called 0 times")]
fn missing_give_is_reported() {
    let mutex = MockMutex::strict();

    expect_call!(mutex as Mutex, take(_)).will_once(Return(true));
    expect_call!(mutex as Mutex, give());

    assert!(mutex.take(Duration::from_secs(1)));
}
