use static_assertions::assert_impl_all;
use yamf::{Args, CallExpectation, CallNotExpected, MockArray, MockMethod, MockModule, MockObject, Value};

assert_impl_all!(MockObject: Send, Sync, Clone);
assert_impl_all!(MockMethod: Send, Sync, Clone);
assert_impl_all!(MockModule: Send, Sync);
assert_impl_all!(MockArray: Send, Sync);
assert_impl_all!(CallExpectation: Send, Sync);
assert_impl_all!(CallNotExpected: Send, Sync);
assert_impl_all!(Args: Send, Sync, Clone);
assert_impl_all!(Value: Send, Sync, Clone);

#[test]
fn calls_from_other_threads() {
    let m = MockObject::new();
    m.member("method").expect_must_be_called().unwrap().times(4);

    let handles = (0..4)
        .map(|i| {
            let m = m.clone();

            std::thread::spawn(move || {
                yamf::call!(m, method(i));
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.join().unwrap();
    }

    m.verify().unwrap();
}
