#![no_main]

use libfuzzer_sys::fuzz_target;
use cachestore::ds::OrderTrack;

// Fuzz arbitrary operation sequences on OrderTrack
//
// Tests random sequences of push_back, touch, remove, pop_front, pop_back,
// and clear against a Vec shadow of the expected order.
fuzz_target!(|data: &[u8]| {
    let mut track: OrderTrack<u8> = OrderTrack::new();
    let mut shadow: Vec<u8> = Vec::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 6;
        let key = pair[1] % 32;

        match op {
            0 => {
                // push_back moves an existing key instead of duplicating it
                track.push_back(key);
                shadow.retain(|&k| k != key);
                shadow.push(key);
                assert_eq!(track.back(), Some(&key));
            },
            1 => {
                // touch
                let present = shadow.contains(&key);
                assert_eq!(track.touch(&key), present);
                if present {
                    shadow.retain(|&k| k != key);
                    shadow.push(key);
                }
            },
            2 => {
                // remove
                let present = shadow.contains(&key);
                assert_eq!(track.remove(&key), present);
                shadow.retain(|&k| k != key);
                assert!(!track.contains(&key));
            },
            3 => {
                // pop_front
                let expected = if shadow.is_empty() { None } else { Some(shadow.remove(0)) };
                assert_eq!(track.pop_front(), expected);
            },
            4 => {
                // pop_back
                assert_eq!(track.pop_back(), shadow.pop());
            },
            5 => {
                // clear
                if key == 0 {
                    track.clear();
                    shadow.clear();
                }
            },
            _ => unreachable!(),
        }

        assert_eq!(track.len(), shadow.len());
        assert_eq!(track.front(), shadow.first());
        assert_eq!(track.back(), shadow.last());
    }

    assert!(track.iter().eq(shadow.iter()));
    track.debug_validate_invariants();
});
