use std::sync::Arc;

use parking_lot::Mutex;
use yamf::{args, call, Args, MockObject, Value};

#[test]
fn delegate_is_executed() {
    let m = MockObject::new();
    let executed = Arc::new(Mutex::new(Vec::new()));

    let seen = executed.clone();
    m.member("method")
        .set_delegate(move |args: &Args| seen.lock().push(args.clone()));

    call!(m, method(1, 2));

    assert_eq!(*executed.lock(), [args!(1, 2)]);
}

#[test]
fn delegate_is_executed_once_per_call_regardless_of_expectations() {
    let m = MockObject::new();
    m.member("method").expect_must_not_be_called().unwrap();

    let executed = Arc::new(Mutex::new(Vec::new()));
    let seen = executed.clone();
    m.member("method")
        .set_delegate(move |args: &Args| seen.lock().push(args.clone()));

    call!(m, method(a = 1));
    call!(m, method());

    assert_eq!(*executed.lock(), [args!(a = 1), args!()]);
    assert!(m.verify().is_err());
}

#[test]
fn return_value_takes_precedence() {
    let m = MockObject::new();
    let method = m.member("method");
    method.set_return_value(2);
    method.set_delegate(|_: &Args| ());

    assert_eq!(call!(m, method()), Some(Value::new(2)));
}

#[test]
fn delegate_can_inspect_its_method() {
    let m = MockObject::new();
    let method = m.member("method");

    let calls = Arc::new(Mutex::new(0));
    let inner = method.clone();
    let count = calls.clone();
    method.set_delegate(move |_: &Args| *count.lock() = inner.call_count());

    call!(m, method());
    call!(m, method());

    assert_eq!(*calls.lock(), 2);
}
