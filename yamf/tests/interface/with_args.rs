use yamf::{args, call, Args, MockObject};

#[test]
fn called_with_expected_args() {
    let m = MockObject::new();
    m.member("method")
        .expect_must_be_called()
        .unwrap()
        .with_args(args!(5));

    call!(m, method(5));
    m.verify().unwrap();
}

#[test]
fn called_without_args() {
    let m = MockObject::new();
    m.member("method")
        .expect_must_be_called()
        .unwrap()
        .with_args(args!(5));

    call!(m, method());

    let err = m.verify().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Verification failed: Method `method` was called 0 times with (5), but expected to be called at least once with (5)"
    );
}

#[test]
fn called_with_missing_named_arg() {
    let m = MockObject::new();
    m.member("method")
        .expect_must_be_called()
        .unwrap()
        .with_args(args!(5, name = "a"));

    call!(m, method(5));
    assert!(m.verify().is_err());

    call!(m, method(5, name = "a"));
    m.verify().unwrap();
}

#[test]
fn independent_expectations_any_order() {
    let m = MockObject::new();
    m.member("method")
        .expect_must_be_called()
        .unwrap()
        .with_args(args!(5));
    m.member("method")
        .expect_must_be_called()
        .unwrap()
        .with_args(args!(6));

    call!(m, method(6));
    call!(m, method(5));
    m.verify().unwrap();
}

#[test]
fn independent_expectations_one_missing() {
    let m = MockObject::new();
    m.member("method")
        .expect_must_be_called()
        .unwrap()
        .with_args(args!(5));
    m.member("method")
        .expect_must_be_called()
        .unwrap()
        .with_args(args!(6));

    call!(m, method(5));
    call!(m, method(5));

    let err = m.verify().unwrap_err();
    let failure = &err.report().unwrap().failures()[0];
    assert_eq!(failure.expected, "called at least once with (6)");
}

#[test]
fn chained_with_args_creates_sibling() {
    let m = MockObject::new();
    let method = m.member("method");
    let second = method
        .expect_must_be_called()
        .unwrap()
        .with_args(args!(5))
        .once()
        .with_args(args!(6));

    call!(m, method(6));
    assert!(second.is_satisfied());
    assert!(m.verify().is_err());

    call!(m, method(5));
    m.verify().unwrap();

    call!(m, method(5));
    assert!(m.verify().is_err());
}

#[test]
fn non_matching_calls_are_still_recorded() {
    let m = MockObject::new();
    m.member("method")
        .expect_must_be_called()
        .unwrap()
        .with_args(args!(1));

    call!(m, method(2));
    call!(m, method(key = 'x'));

    assert_eq!(
        m.member("method").history(),
        [Args::new().arg(2), Args::new().named("key", 'x')]
    );
}

#[test]
fn count_rule_only_counts_matching_calls() {
    let m = MockObject::new();
    m.member("method")
        .expect_must_be_called()
        .unwrap()
        .with_args(args!("a"))
        .times(2);

    call!(m, method("a"));
    call!(m, method("b"));
    call!(m, method("a"));
    m.verify().unwrap();
}
