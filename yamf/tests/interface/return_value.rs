use yamf::{args, call, MockObject, Value};

#[test]
fn no_return_value_by_default() {
    let m = MockObject::new();

    assert_eq!(call!(m, method()), None);
}

#[test]
fn setting_return_value() {
    let m = MockObject::new();
    m.member("method").set_return_value(9);

    assert_eq!(call!(m, method()), Some(Value::new(9)));
    assert_eq!(call!(m, method(1, 2)), Some(Value::new(9)));
    assert_eq!(call!(m, method(x = "y")), Some(Value::new(9)));
}

#[test]
fn return_value_with_expectation() {
    let m = MockObject::new();
    m.member("method")
        .expect_must_be_called()
        .unwrap()
        .returns(1);

    assert_eq!(call!(m, method()).and_then(|v| v.get::<i32>()), Some(1));
    m.verify().unwrap();
}

#[test]
fn return_value_with_expectation_count() {
    let m = MockObject::new();
    m.member("method")
        .expect_must_be_called()
        .unwrap()
        .once()
        .returns(1);

    assert_eq!(call!(m, method()), Some(Value::new(1)));
    m.verify().unwrap();
}

#[test]
fn return_value_with_expectation_args() {
    let m = MockObject::new();
    m.member("method")
        .expect_must_be_called()
        .unwrap()
        .with_args(args!(1))
        .returns(1);

    assert_eq!(call!(m, method(1)), Some(Value::new(1)));
    m.verify().unwrap();
}

#[test]
fn clearing_return_value() {
    let m = MockObject::new();
    let method = m.member("method");
    method.set_return_value(String::from("abc"));
    assert_eq!(
        method.return_value().and_then(|v| v.get::<String>()),
        Some(String::from("abc"))
    );

    method.clear_return_value();
    assert_eq!(call!(m, method()), None);
}
