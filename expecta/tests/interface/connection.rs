use expecta::{
    action::Return,
    expect_call,
    matcher::{any, eq, str_starts_with},
    mock, MockState,
};

pub trait Connection {
    fn open(&self) -> bool;
    fn send(&self, data: &str, len: usize) -> bool;
    fn close(&self);

    fn name(&self) -> String {
        String::from("connection")
    }
}

mock! {
    #[derive(Debug)]
    pub struct MockConnection;

    impl Connection for MockConnection {
        fn open(&self) -> bool;
        fn send(&self, data: &str, len: usize) -> bool;
        fn close(&self);

        fn name(&self) -> String {
            String::from("mock")
        }
    }
}

fn transmit<C: Connection>(conn: &C, message: &str) -> bool {
    if !conn.open() {
        return false;
    }

    let ret = conn.send(message, message.len());
    conn.close();

    ret
}

#[test]
fn transmit_success() {
    let conn = MockConnection::strict();

    expect_call!(conn as Connection, open()).will_once(Return(true));
    expect_call!(conn as Connection, send(_, _)).will_once(Return(true));
    expect_call!(conn as Connection, close());

    assert!(transmit(&conn, "Hello World!"));
}

#[test]
fn transmit_open_failed() {
    let conn = MockConnection::strict();

    expect_call!(conn as Connection, open()).will_once(Return(false));
    expect_call!(conn as Connection, send(_, _)).times(0);
    expect_call!(conn as Connection, close()).times(0);

    assert!(!transmit(&conn, "Hello World!"));
}

#[test]
fn transmit_checks_arguments() {
    let conn = MockConnection::strict();

    expect_call!(conn as Connection, open()).will_once(Return(true));
    expect_call!(conn as Connection, send(str_starts_with("Hello"), eq(12usize))).will_once(Return(true));
    expect_call!(conn as Connection, close());

    assert!(transmit(&conn, "Hello World!"));
    assert_eq!(MockState::Active, conn.mock_handle().state());
}

#[test]
#[should_panic(expected = "to be called exactly 1 time, but it was called 0 times")]
fn missing_call_fails_on_drop() {
    let conn = MockConnection::strict();

    expect_call!(conn as Connection, open()).will_once(Return(true));
    expect_call!(conn as Connection, send(eq("Hi"), eq(2usize))).will_once(Return(true));
    expect_call!(conn as Connection, close());

    assert!(conn.open());
    assert!(conn.send("Hi", 2));
}

#[test]
#[should_panic(expected = "unexpected call to Connection::send")]
fn strict_mock_rejects_wrong_arguments() {
    let conn = MockConnection::strict();

    expect_call!(conn as Connection, send(eq("Hello"), any())).will_once(Return(true));

    conn.send("Bye", 3);
}

#[test]
fn naggy_mock_collects_warnings() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let conn = MockConnection::naggy();

    expect_call!(conn as Connection, send(eq("Hello"), any())).will_once(Return(true));

    assert!(!conn.send("Bye", 3));
    assert!(conn.send("Hello", 5));

    let warnings = conn.mock_handle().warnings();
    assert_eq!(1, warnings.len());
    assert!(warnings[0].to_string().contains("arguments do not match"));

    assert!(conn.verify().is_ok());
}

#[test]
fn verify_reports_every_violation() {
    let conn = MockConnection::nice();

    expect_call!(conn as Connection, open()).will_once(Return(true));
    expect_call!(conn as Connection, close());

    let err = conn.verify().unwrap_err();
    assert_eq!(2, err.violations.len());
    assert!(err
        .to_string()
        .starts_with("Mocked object `MockConnection` has 2 unfulfilled expectation(s):"));
}

#[test]
fn methods_with_body_are_not_mocked() {
    let conn = MockConnection::strict();

    assert_eq!("mock", conn.name());
}

#[test]
fn checkpoint_verifies_the_current_phase() {
    let conn = MockConnection::strict();

    expect_call!(conn as Connection, open()).will_once(Return(true));
    assert!(conn.open());

    conn.checkpoint();

    expect_call!(conn as Connection, open()).will_once(Return(false));
    assert!(!conn.open());
}

#[test]
fn dyn_trait_object() {
    let conn = MockConnection::strict();
    expect_call!(conn as Connection, open()).will_once(Return(true));

    let boxed: Box<dyn Connection + Send + Sync> = Box::new(conn);

    assert!(boxed.open());
}
