use cachestore::policy::mru::Mru;
use cachestore::store::CacheStore;

fn main() {
    let mut cache: CacheStore<u32, &str, Mru<u32>> = CacheStore::new(Some(2), Mru::new());

    cache.put(1, "alpha");
    cache.put(2, "beta");

    if let Some(value) = cache.get(&1) {
        println!("hit 1: {value}");
    }

    cache.put(3, "gamma");

    println!("contains 1? {}", cache.contains(&1));
    println!("contains 2? {}", cache.contains(&2));
}

// Expected output:
// hit 1: alpha
// contains 1? false
// contains 2? true
//
// Explanation: get(&1) makes key 1 the most recently used, so inserting
// key 3 evicts key 1 instead of key 2.
