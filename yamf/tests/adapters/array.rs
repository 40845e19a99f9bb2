use yamf::{args, Args, Config, Error, MockArray, Policy, Value};

#[test]
fn empty_array_is_misuse() {
    assert!(matches!(MockArray::new(0), Err(Error::Misuse(_))));
}

#[test]
fn calls_fan_out_to_every_mock() {
    let array = MockArray::new(3).unwrap();
    for mock in &array {
        mock.member("method")
            .expect_must_be_called()
            .unwrap()
            .with_args(args!(7))
            .once();
    }
    assert!(array.verify().is_err());

    let ret = array.member("method").call(args!(7));
    assert_eq!(ret.len(), 3);
    assert!(ret.iter().all(Option::is_none));

    array.verify().unwrap();
    for mock in array.iter() {
        assert_eq!(mock.member("method").history(), [args!(7)]);
    }
}

#[test]
fn per_index_setup() {
    let array = MockArray::new(2).unwrap();
    array[0].member("value").set_return_value(0);
    array[1].member("value").set_return_value(1);

    let ret = array.member("value").call(Args::new());
    assert_eq!(ret, [Some(Value::new(0)), Some(Value::new(1))]);
}

#[test]
fn verify_requires_every_mock() {
    let array = MockArray::new(2).unwrap();
    array[1].member("method").expect_must_be_called().unwrap();

    array[0].member("method").call(Args::new());
    let err = array.verify().unwrap_err();
    assert_eq!(err.report().unwrap().failures().len(), 1);

    array[1].member("method").call(Args::new());
    array.checkpoint();
}

#[test]
fn collect_all_over_mocks() {
    let array = MockArray::with_config(3, Config::new().policy(Policy::CollectAll)).unwrap();
    for mock in &array {
        mock.member("method").expect_must_be_called().unwrap();
    }

    let err = array.verify().unwrap_err();
    assert_eq!(err.report().unwrap().failures().len(), 3);
}

#[test]
fn index_out_of_range() {
    let array = MockArray::new(2).unwrap();

    assert_eq!(array.len(), 2);
    assert!(array.get(1).is_ok());
    assert!(matches!(
        array.get(2),
        Err(Error::IndexOutOfRange { index: 2, len: 2 })
    ));
}

#[test]
#[should_panic(expected = "Index 2 is out of range for mock array of length 2")]
fn index_operator_out_of_range() {
    let array = MockArray::new(2).unwrap();

    let _ = &array[2];
}

#[test]
fn array_is_callable() {
    let array = MockArray::new(1).unwrap();

    assert_eq!(array.call(args!(1)).len(), 1);
}

#[test]
fn declarations_fan_out_to_every_mock() {
    let array = MockArray::new(3).unwrap();
    let member = array.member("method");

    let expectations = member.expect_must_be_called().unwrap();
    assert_eq!(expectations.len(), 3);
    for ex in expectations {
        ex.with_args(args!(1)).once();
    }
    member.set_return_value(5);

    assert!(array.verify().is_err());

    let ret = member.call(args!(1));
    assert_eq!(ret, vec![Some(Value::new(5)); 3]);
    array.verify().unwrap();

    member.call(args!(1));
    assert!(array.verify().is_err());
}

#[test]
fn must_not_be_called_on_every_mock() {
    let array = MockArray::new(2).unwrap();
    let member = array.member("method");
    member.expect_must_not_be_called().unwrap();
    array.verify().unwrap();

    array[1].member("method").call(Args::new());
    let err = array.verify().unwrap_err();
    assert_eq!(err.report().unwrap().failures().len(), 1);

    assert!(matches!(
        member.expect_must_be_called(),
        Err(Error::Misuse(_))
    ));
}

#[test]
fn delegate_on_every_mock() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let array = MockArray::new(3).unwrap();
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = calls.clone();
    array.member("method").set_delegate(move |_: &Args| {
        counter.fetch_add(1, Ordering::Relaxed);
    });

    array.member("method").call(Args::new());

    assert_eq!(calls.load(Ordering::Relaxed), 3);
}
