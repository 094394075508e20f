#![no_main]

use libfuzzer_sys::fuzz_target;
use cachestore::builder::CacheBuilder;
use cachestore::listener::NoopListener;
use cachestore::policy::CachePolicy;

// Fuzz arbitrary put/get sequences on every policy
//
// First byte picks the policy, second the capacity. Checks the key-set and
// capacity invariants after every operation.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let policy = CachePolicy::ALL[data[0] as usize % CachePolicy::ALL.len()];
    let capacity = usize::from(data[1] % 16) + 1;
    let builder = if policy.is_bounded() {
        CacheBuilder::new(capacity)
    } else {
        CacheBuilder::unbounded()
    };
    let Ok(mut cache) = builder.try_build_with_listener::<u8, u8, _>(policy, NoopListener) else {
        return;
    };

    for pair in data[2..].chunks_exact(2) {
        let op = pair[0] % 4;
        let key = pair[1] % 48;

        match op {
            0 | 1 => {
                let previous = cache.peek(&key).copied();
                assert_eq!(cache.put(key, op), previous);
                assert_eq!(cache.peek(&key), Some(&op));
            },
            2 => {
                let expected = cache.peek(&key).copied();
                assert_eq!(cache.get(&key).copied(), expected);
            },
            3 => {
                let len = cache.len();
                assert_eq!(cache.put_opt(Some(key), None), None);
                assert_eq!(cache.len(), len);
            },
            _ => unreachable!(),
        }

        if policy.is_bounded() {
            assert!(cache.len() <= capacity);
        }
        assert!(cache.check_invariants().is_ok());
    }
});
