use expecta::{
    action::Return,
    expect_call,
    matcher::any,
    mock,
    times::{any_number, at_least, between},
};

pub trait Sensor {
    fn read(&self, channel: u8) -> u16;
}

mock! {
    pub struct MockSensor;

    impl Sensor for MockSensor {
        fn read(&self, channel: u8) -> u16;
    }
}

#[test]
fn at_least_accepts_more_calls() {
    let sensor = MockSensor::strict();

    sensor
        .expect_read()
        .times(at_least(2))
        .will_repeatedly(Return(1));

    for _ in 0..5 {
        assert_eq!(1, sensor.read(0));
    }
}

#[test]
fn exclusive_range() {
    let sensor = MockSensor::strict();

    sensor.expect_read().with(any()).times(1..3);

    sensor.read(1);
    sensor.read(2);
}

#[test]
fn any_number_accepts_no_call() {
    let sensor = MockSensor::strict();

    expect_call!(sensor as Sensor, read(_)).times(any_number());
}

#[test]
fn between_counts_calls() {
    let sensor = MockSensor::strict();

    expect_call!(sensor as Sensor, read(_))
        .times(between(1, 2))
        .will_repeatedly(Return(9));

    assert_eq!(9, sensor.read(3));

    let err = sensor.verify();
    assert!(err.is_ok());
}

#[test]
fn inferred_at_least_from_repeated_action() {
    let sensor = MockSensor::strict();

    expect_call!(sensor as Sensor, read(_))
        .will_once(Return(1))
        .will_repeatedly(Return(2));

    let err = sensor.verify().unwrap_err();
    assert!(err.to_string().contains("at least 1 time"));
}

#[test]
#[should_panic(expected = "to be called at least 3 times, but it was called 2 times")]
fn too_few_calls() {
    let sensor = MockSensor::strict();

    sensor
        .expect_read()
        .times(3..)
        .will_repeatedly(Return(0));

    sensor.read(0);
    sensor.read(0);
}
