use expecta::{action::invoke, expect_call, matcher::eq, mock, on_call};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Widget {
    id: usize,
}

pub trait Factory {
    fn create(&self, id: usize) -> Widget;
    fn count(&self) -> usize;
}

mock! {
    pub struct MockFactory;

    impl Factory for MockFactory {
        #[expecta(no_default)]
        fn create(&self, id: usize) -> Widget;
        fn count(&self) -> usize;
    }
}

#[test]
fn closure_action_builds_the_result() {
    let factory = MockFactory::strict();

    expect_call!(factory as Factory, create(eq(3usize))).will_once(invoke(|id: usize| Widget { id }));

    assert_eq!(Widget { id: 3 }, factory.create(3));
}

#[test]
fn default_action_builds_the_result() {
    let factory = MockFactory::nice();

    on_call!(factory as Factory, create(_)).will_by_default(invoke(|id: usize| Widget { id: id * 2 }));

    assert_eq!(Widget { id: 8 }, factory.create(4));
    assert_eq!(0, factory.count());
}

#[test]
#[should_panic(expected = "No default action specified for call to Factory::create")]
fn missing_result_panics() {
    let factory = MockFactory::nice();

    factory.create(1);
}

#[test]
#[should_panic(expected = "No default action specified for call to Factory::create")]
fn expectation_without_action_panics() {
    let factory = MockFactory::strict();

    expect_call!(factory as Factory, create(_));

    factory.create(1);
}
