use std::sync::Arc;

use yamf::{args, Args, Error, MockModule, Namespace, Value};

fn greet(ns: &Namespace, name: &str) -> Option<String> {
    ns.call("greet", args!(name.to_owned()))
        .ok()
        .flatten()
        .and_then(|value| value.get::<String>())
}

#[test]
fn mock_global_namespace_by_name() {
    let ns = Namespace::global("adapters_by_name");
    ns.bind("greet", |args: Args| {
        let name = args.get(0)?.get::<String>()?;

        Some(Value::new(format!("hello {name}")))
    });
    assert_eq!(greet(&ns, "bob").as_deref(), Some("hello bob"));

    let module = MockModule::new("adapters_by_name");
    module
        .member("greet")
        .expect_must_be_called()
        .unwrap()
        .with_args(args!(String::from("bob")))
        .once()
        .returns(String::from("mocked"));

    assert_eq!(greet(&ns, "bob").as_deref(), Some("mocked"));
    module.verify().unwrap();
}

#[test]
fn mock_namespace_by_reference() {
    let ns = Arc::new(Namespace::new("local"));
    let module = MockModule::new(&ns);

    assert!(Arc::ptr_eq(module.namespace(), &ns));

    module.member("greet").expect_must_not_be_called().unwrap();
    assert!(ns.is_bound("greet"));

    module.verify().unwrap();
    greet(&ns, "alice");

    let err = module.verify().unwrap_err();
    assert!(err
        .to_string()
        .contains("Method `greet` was called 1 times, but expected to be never called"));
}

#[test]
fn installing_overwrites_without_restore() {
    let ns = Arc::new(Namespace::new("overwrite"));
    let original = Arc::new(|_: Args| Some(Value::new(1)));
    ns.bind_function("value", original.clone());

    {
        let module = MockModule::new(&ns);
        module.member("value").set_return_value(2);
    }

    assert_eq!(ns.call("value", Args::new()).unwrap(), Some(Value::new(2)));

    let previous = ns.bind_function("value", original);
    assert!(previous.is_some());
    assert_eq!(ns.call("value", Args::new()).unwrap(), Some(Value::new(1)));
}

#[test]
fn verify_delegates_to_the_mocked_methods() {
    let ns = Arc::new(Namespace::new("verify"));
    let module = MockModule::new(&ns);
    module.member("a").expect_must_be_called().unwrap().times(2);
    module.member("b").expect_must_be_called().unwrap();

    ns.call("a", Args::new()).unwrap();
    ns.call("b", args!(1)).unwrap();
    assert!(module.verify().is_err());

    ns.call("a", Args::new()).unwrap();
    module.checkpoint();
    assert_eq!(module.mock().methods(), ["a", "b"]);
}

#[test]
fn calling_unbound_name() {
    let ns = Namespace::new("empty");

    let err = ns.call("missing", Args::new()).unwrap_err();
    assert!(matches!(err, Error::Unbound { .. }));
    assert_eq!(
        err.to_string(),
        "Name `missing` is not bound in namespace `empty`"
    );
}
