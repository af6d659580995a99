use expecta::{action::Return, expect_call, matcher::eq, mock, times::at_most, InSequence};

pub trait Stack<T> {
    fn push(&self, value: T);
    fn pop(&self) -> T;
    fn get_size(&self) -> usize;
}

mock! {
    #[derive(Clone)]
    pub struct MockStack<T>;

    impl<T> Stack<T> for MockStack<T> {
        fn push(&self, value: T);
        fn pop(&self) -> T;
        fn get_size(&self) -> usize;
    }
}

fn drain<S: Stack<i32>>(stack: &S) -> Vec<i32> {
    let mut ret = Vec::new();
    while stack.get_size() > 0 {
        ret.push(stack.pop());
    }

    ret
}

#[test]
fn one_shot_actions_then_default_value() {
    let stack = MockStack::<i32>::naggy();

    [9, 8, 7, 6, 5]
        .into_iter()
        .fold(stack.expect_get_size(), |builder, size| {
            builder.will_once(Return(size))
        });

    let sizes = (0..6).map(|_| stack.get_size()).collect::<Vec<_>>();
    assert_eq!(vec![9, 8, 7, 6, 5, 0], sizes);

    /* the sixth call is saturated and only reported as warning */
    assert_eq!(1, stack.mock_handle().warnings().len());
    assert!(stack.verify().is_ok());
}

#[test]
fn explicit_times_allow_more_calls_than_actions() {
    let stack = MockStack::<i32>::strict();

    stack
        .expect_get_size()
        .times(3)
        .will_once(Return(2))
        .will_once(Return(1));

    assert_eq!(2, stack.get_size());
    assert_eq!(1, stack.get_size());
    assert_eq!(0, stack.get_size());
}

#[test]
fn drain_pops_until_empty() {
    let stack = MockStack::<i32>::strict();

    {
        let _seq = InSequence::default();

        expect_call!(stack as Stack<i32>, get_size()).will_once(Return(2));
        expect_call!(stack as Stack<i32>, pop()).will_once(Return(7));
        expect_call!(stack as Stack<i32>, get_size()).will_once(Return(1));
        expect_call!(stack as Stack<i32>, pop()).will_once(Return(3));
        expect_call!(stack as Stack<i32>, get_size()).will_once(Return(0));
    }

    assert_eq!(vec![7, 3], drain(&stack));
}

#[test]
fn pop_at_most() {
    let stack = MockStack::<String>::strict();

    stack
        .expect_pop()
        .times(at_most(3))
        .will_repeatedly(Return(String::from("x")));

    assert_eq!("x", stack.pop());
    assert_eq!("x", stack.pop());
}

#[test]
#[should_panic(expected = "unexpected call to Stack::pop")]
fn pop_more_than_at_most() {
    let stack = MockStack::<String>::strict();

    stack
        .expect_pop()
        .times(at_most(1))
        .will_repeatedly(Return(String::from("x")));

    stack.pop();
    stack.pop();
}

#[test]
fn push_with_generic_argument() {
    let stack = MockStack::<String>::strict();

    expect_call!(stack as Stack<String>, push(eq("a")));
    expect_call!(stack as Stack<String>, push(eq("b")));

    stack.push("a".into());
    stack.push("b".into());
}

#[test]
fn different_type_arguments_are_different_mocks() {
    let ints = MockStack::<i32>::strict();
    let strings = MockStack::<String>::nice();

    ints.expect_push().with(eq(1));
    ints.push(1);

    strings.push(String::from("ignored"));
}
