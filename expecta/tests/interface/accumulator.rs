use expecta::{action::Return, expect_call, matcher::eq, mock, Sequence};

pub trait Accumulator {
    fn add(&self, value: i32);
    fn add_all(&self, values: &[i32]);
    fn get_value(&self) -> i32;
}

pub trait PairAccumulator {
    fn add(&self, a: i32, b: i32);
}

mock! {
    pub struct MockAccumulator;

    impl Accumulator for MockAccumulator {
        fn add(&self, value: i32);
        fn add_all(&self, values: &[i32]);
        fn get_value(&self) -> i32;
    }

    impl PairAccumulator for MockAccumulator {
        fn add(&self, a: i32, b: i32);
    }
}

fn sum<A: Accumulator>(acc: &A, values: &[i32]) -> i32 {
    for value in values {
        acc.add(*value);
    }

    acc.get_value()
}

#[test]
fn sum_adds_every_value_in_order() {
    let acc = MockAccumulator::strict();
    let seq = Sequence::new();

    for value in [1i32, 2, 3] {
        expect_call!(acc as Accumulator, add(eq(value))).in_sequence(&seq);
    }
    expect_call!(acc as Accumulator, get_value())
        .in_sequence(&seq)
        .will_once(Return(6));

    assert_eq!(6, sum(&acc, &[1, 2, 3]));
}

#[test]
fn same_name_in_two_traits_are_different_operations() {
    let acc = MockAccumulator::strict();

    expect_call!(acc as Accumulator, add(eq(1)));
    expect_call!(acc as PairAccumulator, add(eq(1), eq(2)));

    Accumulator::add(&acc, 1);
    PairAccumulator::add(&acc, 1, 2);
}

#[test]
#[should_panic(expected = "unexpected call to PairAccumulator::add")]
fn overload_without_expectation_is_unexpected() {
    let acc = MockAccumulator::strict();

    expect_call!(acc as Accumulator, add(eq(1)));

    Accumulator::add(&acc, 1);
    PairAccumulator::add(&acc, 1, 2);
}

#[test]
fn slices_are_compared_deeply() {
    let acc = MockAccumulator::strict();

    expect_call!(acc as Accumulator, add_all(eq(vec![1, 2, 3])));
    expect_call!(acc as Accumulator, add_all(eq(Vec::<i32>::new())));

    acc.add_all(&[1, 2, 3]);
    acc.add_all(&[]);
}

#[test]
fn latest_expectation_wins() {
    let acc = MockAccumulator::strict();

    acc.expect_get_value().will_repeatedly(Return(1));
    acc.expect_get_value()
        .will_once(Return(2))
        .will_once(Return(3));

    let values = (0..5).map(|_| acc.get_value()).collect::<Vec<_>>();
    assert_eq!(vec![2, 3, 1, 1, 1], values);
}
