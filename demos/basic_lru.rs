use cachestore::policy::lru::Lru;
use cachestore::store::CacheStore;

fn main() {
    let mut cache: CacheStore<u32, String, Lru<u32>> = CacheStore::new(Some(2), Lru::new());

    cache.put(1, "alpha".to_string());
    cache.put(2, "beta".to_string());

    if let Some(value) = cache.get(&1) {
        println!("hit 1: {}", value.as_str());
    }

    cache.put(3, "gamma".to_string());

    println!("contains 2? {}", cache.contains(&2));
}

// Expected output:
// hit 1: alpha
// contains 2? false
//
// Explanation: capacity=2; after get(&1), key 1 is MRU and key 2 is LRU.
// Inserting key 3 evicts key 2, so contains(2) is false.
