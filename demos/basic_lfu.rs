use cachestore::policy::lfu::Lfu;
use cachestore::store::CacheStore;

fn main() {
    let mut cache = CacheStore::new(Some(3), Lfu::new());

    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);

    for _ in 0..3 {
        cache.get(&"a");
    }
    cache.get(&"b");
    cache.get(&"c");

    for key in ["a", "b", "c"] {
        println!("{key}: frequency {:?}", cache.policy().frequency(&key));
    }

    cache.put("d", 4);
    println!("contains b? {}", cache.contains(&"b"));
    println!("contains c? {}", cache.contains(&"c"));
}

// Expected output:
// a: frequency Some(4)
// b: frequency Some(2)
// c: frequency Some(2)
// contains b? false
// contains c? true
//
// Explanation: b and c tie at 2 uses; b was used less recently, so b goes.
