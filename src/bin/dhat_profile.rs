//! DHAT heap profiler for cachestore.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use cachestore::builder::{Cache, CacheBuilder};
use cachestore::listener::NoopListener;
use cachestore::policy::CachePolicy;

const CAPACITY: usize = 4096;
const OPERATIONS: usize = 100_000;
const UNIVERSE: u64 = 16_384;

/// XorShift64 for deterministic workloads without a runtime RNG dependency.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (u64::MAX as f64);
        (self.next_u64() as f64) * SCALE
    }
}

type ProfileCache = Cache<u64, Box<u64>, NoopListener>;

/// 90% of accesses hit 10% of keys; misses are filled.
fn hotset_workload(cache: &mut ProfileCache, seed: u64) {
    let mut rng = XorShift64::new(seed);
    let hot_size = UNIVERSE / 10;

    for _ in 0..OPERATIONS {
        let key = if rng.next_f64() < 0.9 {
            rng.next_u64() % hot_size
        } else {
            hot_size + (rng.next_u64() % (UNIVERSE - hot_size))
        };

        if cache.get(&key).is_none() {
            cache.put(key, Box::new(key));
        }
    }
}

/// Sequential scan over the whole universe.
fn scan_workload(cache: &mut ProfileCache) {
    for i in 0..OPERATIONS / 2 {
        let key = (i as u64) % UNIVERSE;
        if cache.get(&key).is_none() {
            cache.put(key, Box::new(key));
        }
    }
}

/// Fresh keys only, so every insert evicts.
fn eviction_churn(cache: &mut ProfileCache) {
    for i in 0..OPERATIONS / 4 {
        let key = UNIVERSE + i as u64;
        cache.put(key, Box::new(key));
    }
}

fn profile(policy: CachePolicy) {
    println!("=== Profiling {} ===", policy.as_str().to_uppercase());

    let mut cache = match CacheBuilder::new(CAPACITY).try_build_with_listener(policy, NoopListener)
    {
        Ok(cache) => cache,
        Err(e) => {
            eprintln!("  skipped: {e}");
            return;
        },
    };

    for i in 0..CAPACITY as u64 {
        cache.put(i, Box::new(i));
    }

    hotset_workload(&mut cache, 42);
    scan_workload(&mut cache);
    eviction_churn(&mut cache);

    println!("  Final size: {}", cache.len());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("cachestore DHAT Heap Profiling");
    println!("==============================\n");

    for policy in CachePolicy::ALL.into_iter().filter(|p| p.is_bounded()) {
        profile(policy);
    }

    println!("\n==============================");
    println!("Profile written to dhat-heap.json");
}
