use yamf::{call, expect_no_call, Error, MockObject};

#[test]
fn not_expected_and_not_called() {
    let m = MockObject::new();
    m.member("method").expect_must_not_be_called().unwrap();

    m.verify().unwrap();
}

#[test]
fn not_expected_but_called() {
    let m = MockObject::new();
    let ex = m.member("method").expect_must_not_be_called().unwrap();

    call!(m, method(1));
    assert!(ex.is_violated());

    let err = m.verify().unwrap_err();
    assert!(err
        .to_string()
        .contains("Method `method` was called 1 times, but expected to be never called"));
}

#[test]
fn violation_is_irreversible() {
    let m = MockObject::new();
    let ex = expect_no_call!(m, method).unwrap();

    call!(m, method());
    assert!(ex.verify().is_err());
    assert!(ex.verify().is_err());
    assert!(ex.is_violated());
}

#[test]
fn mixing_with_must_be_called_is_misuse() {
    let m = MockObject::new();
    m.member("method").expect_must_not_be_called().unwrap();

    let err = m.member("method").expect_must_be_called().unwrap_err();
    assert!(matches!(err, Error::Misuse(_)));
    assert!(err.to_string().contains("method"));
}

#[test]
fn other_methods_are_unaffected() {
    let m = MockObject::new();
    m.member("method").expect_must_not_be_called().unwrap();

    call!(m, other());
    m.verify().unwrap();
}
