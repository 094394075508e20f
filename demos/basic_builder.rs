//! Example demonstrating runtime policy selection.
//!
//! Run with: cargo run --example basic_builder

use cachestore::builder::{CacheBuilder, CacheConfig, CachePolicy};
use cachestore::policy::EvictionPolicy;

fn main() {
    println!("=== CacheBuilder Examples ===\n");

    // Example 1: LRU Cache
    println!("1. LRU Cache");
    let mut lru = CacheBuilder::new(3).build::<u64, String>(CachePolicy::Lru);

    lru.put(1, "one".to_string());
    lru.put(2, "two".to_string());
    lru.put(3, "three".to_string());

    // Access key 1 to make it MRU
    lru.get(&1);

    // Insert key 4, evicts LRU (key 2)
    lru.put(4, "four".to_string());

    println!("   contains 1? {} (was accessed)", lru.contains(&1));
    println!("   contains 2? {} (evicted as LRU)", lru.contains(&2));
    println!("   contains 4? {} (just inserted)", lru.contains(&4));
    println!();

    // Example 2: FIFO Cache
    println!("2. FIFO Cache");
    let mut fifo = CacheBuilder::new(3).build::<u64, String>(CachePolicy::Fifo);

    fifo.put(1, "one".to_string());
    fifo.put(2, "two".to_string());
    fifo.put(3, "three".to_string());

    // Access doesn't affect FIFO order
    fifo.get(&1);

    // Insert key 4, evicts oldest (key 1)
    fifo.put(4, "four".to_string());

    println!("   contains 1? {} (evicted as oldest)", fifo.contains(&1));
    println!("   contains 2? {} (still present)", fifo.contains(&2));
    println!();

    // Example 3: policy chosen by name
    println!("3. Policy from a string");
    for name in ["lifo", "mru", "lfu", "arc"] {
        match name.parse::<CachePolicy>() {
            Ok(policy) => {
                let cache = CacheBuilder::new(8).build::<u64, u64>(policy);
                println!("   {name:>4} -> {}", cache.policy().kind());
            },
            Err(e) => println!("   {name:>4} -> error: {e}"),
        }
    }
    println!();

    // Example 4: unbounded
    println!("4. Unbounded Cache");
    let mut all = CacheBuilder::unbounded().build::<u64, u64>(CachePolicy::Unbounded);
    for i in 0..1_000 {
        all.put(i, i * i);
    }
    println!("   len = {}, capacity = {:?}", all.len(), all.capacity());
    println!();

    // Example 5: configuration validation
    println!("5. CacheConfig");
    let configs = [
        CacheConfig { capacity: Some(16), policy: CachePolicy::Lfu },
        CacheConfig { capacity: Some(0), policy: CachePolicy::Lru },
        CacheConfig { capacity: None, policy: CachePolicy::Fifo },
    ];
    for config in configs {
        match config.build::<u64, u64>() {
            Ok(cache) => println!("   {:?} -> ok, capacity {:?}", config, cache.capacity()),
            Err(e) => println!("   {:?} -> {}", config, e),
        }
    }
}
