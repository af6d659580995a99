use std::sync::Arc;

use parking_lot::Mutex;

use expecta::{
    action::{invoke, return_, return_pointee, Return},
    expect_call,
    matcher::any,
    mock,
    pointee::Borrowed,
};

pub trait Source {
    fn next(&self) -> usize;
    fn label(&self, index: usize) -> String;
    fn scale(&self, a: usize, b: usize) -> usize;
}

mock! {
    pub struct MockSource;

    impl Source for MockSource {
        fn next(&self) -> usize;
        fn label(&self, index: usize) -> String;
        fn scale(&self, a: usize, b: usize) -> usize;
    }
}

#[test]
fn return_once() {
    let source = MockSource::strict();

    expect_call!(source as Source, label(any())).will_once(Return(String::from("one")));

    assert_eq!("one", source.label(1));
}

#[test]
fn return_function() {
    let source = MockSource::strict();

    expect_call!(source as Source, next())
        .will_once(return_(4))
        .will_once(return_(2));

    assert_eq!(4, source.next());
    assert_eq!(2, source.next());
}

#[test]
fn return_pointee_reads_the_value_at_call_time() {
    let source = MockSource::strict();
    let value = Arc::new(Mutex::new(1usize));

    expect_call!(source as Source, next()).will_repeatedly(return_pointee(value.clone()));

    assert_eq!(1, source.next());
    *value.lock() = 5;
    assert_eq!(5, source.next());
}

#[test]
fn return_pointee_std_mutex() {
    let source = MockSource::strict();
    let value = Arc::new(std::sync::Mutex::new(String::from("a")));

    expect_call!(source as Source, label(_)).will_repeatedly(return_pointee(value.clone()));

    assert_eq!("a", source.label(0));
    *value.lock().unwrap() = String::from("b");
    assert_eq!("b", source.label(0));
}

#[test]
fn return_pointee_borrowed() {
    let source = MockSource::strict();

    expect_call!(source as Source, label(_))
        .will_once(return_pointee(Borrowed(String::from("borrowed"))));

    assert_eq!("borrowed", source.label(0));
}

#[test]
fn invoke_receives_the_arguments() {
    let source = MockSource::strict();

    expect_call!(source as Source, scale(_, _)).will_repeatedly(invoke(|(a, b): (usize, usize)| a * b));
    expect_call!(source as Source, label(_)).will_once(invoke(|index: usize| format!("#{index}")));

    assert_eq!(6, source.scale(2, 3));
    assert_eq!(20, source.scale(4, 5));
    assert_eq!("#7", source.label(7));
}

#[test]
fn one_shot_closure_may_move_values() {
    let source = MockSource::strict();
    let owned = String::from("moved");

    expect_call!(source as Source, label(_)).will_once(move |_index: usize| owned);

    assert_eq!("moved", source.label(0));
}

#[test]
fn repeated_action_after_one_shot_actions() {
    let source = MockSource::strict();

    expect_call!(source as Source, next())
        .will_once(Return(1))
        .will_once(Return(2))
        .will_repeatedly(Return(0));

    let values = (0..4).map(|_| source.next()).collect::<Vec<_>>();
    assert_eq!(vec![1, 2, 0, 0], values);
}
