use expecta::{
    action::Return,
    expect_call,
    matcher::{eq, gt, lt},
    mock, on_call,
};

pub trait Turtle {
    fn pen_down(&self);
    fn go_to(&self, x: i32, y: i32) -> bool;
    fn get_x(&self) -> i32;
}

mock! {
    pub struct MockTurtle;

    impl Turtle for MockTurtle {
        fn pen_down(&self);
        fn go_to(&self, x: i32, y: i32) -> bool;
        fn get_x(&self) -> i32;
    }
}

#[test]
fn default_answers_uninteresting_calls() {
    let turtle = MockTurtle::nice();

    on_call!(turtle as Turtle, get_x()).will_by_default(Return(100));

    assert_eq!(100, turtle.get_x());
    assert_eq!(100, turtle.get_x());
    assert!(turtle.verify().is_ok());
}

#[test]
fn default_answers_expectations_without_action() {
    let turtle = MockTurtle::strict();

    turtle.on_call_get_x().will_by_default(Return(7));
    expect_call!(turtle as Turtle, get_x()).times(2);

    assert_eq!(7, turtle.get_x());
    assert_eq!(7, turtle.get_x());
}

#[test]
fn default_for_exhausted_one_shot_actions() {
    let turtle = MockTurtle::strict();

    turtle.on_call_get_x().will_by_default(Return(-1));
    expect_call!(turtle as Turtle, get_x())
        .times(3)
        .will_once(Return(1));

    assert_eq!(1, turtle.get_x());
    assert_eq!(-1, turtle.get_x());
    assert_eq!(-1, turtle.get_x());
}

#[test]
fn defaults_select_by_arguments() {
    let turtle = MockTurtle::nice();

    on_call!(turtle as Turtle, go_to(_, _)).will_by_default(Return(true));
    on_call!(turtle as Turtle, go_to(lt(0), _)).will_by_default(Return(false));
    on_call!(turtle as Turtle, go_to(_, gt(1000))).will_by_default(Return(false));

    assert!(turtle.go_to(1, 1));
    assert!(!turtle.go_to(-1, 1));
    assert!(!turtle.go_to(1, 1001));
}

#[test]
fn expectation_action_takes_precedence() {
    let turtle = MockTurtle::strict();

    on_call!(turtle as Turtle, go_to(_, _)).will_by_default(Return(false));
    expect_call!(turtle as Turtle, go_to(eq(0), eq(0))).will_once(Return(true));

    assert!(turtle.go_to(0, 0));
}

#[test]
fn defaults_take_no_part_in_verification() {
    let turtle = MockTurtle::strict();

    on_call!(turtle as Turtle, get_x()).will_by_default(Return(1));
    expect_call!(turtle as Turtle, pen_down());

    turtle.pen_down();
}

#[test]
fn naggy_mock_warns_but_uses_default() {
    let turtle = MockTurtle::naggy();

    on_call!(turtle as Turtle, get_x()).will_by_default(Return(100));

    assert_eq!(100, turtle.get_x());
    assert_eq!(1, turtle.mock_handle().warnings().len());
    assert!(turtle.verify().is_ok());
}
