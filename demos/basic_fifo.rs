use cachestore::policy::fifo::Fifo;
use cachestore::store::CacheStore;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();

    let mut cache = CacheStore::new(Some(4), Fifo::new());

    cache.put("A", "Hello");
    cache.put("B", "World");
    cache.put("C", "Holberton");
    cache.put("D", "School");
    print!("{cache}");

    cache.put("E", "Battery");
    print!("{cache}");

    cache.put("C", "Street");
    print!("{cache}");

    cache.put("F", "Mission");
    print!("{cache}");
}

// Expected output (log lines abridged):
// Current cache:
// A: Hello
// B: World
// C: Holberton
// D: School
//  INFO cachestore::evict: DISCARD key="A"
// Current cache:
// B: World
// C: Holberton
// D: School
// E: Battery
// Current cache:
// B: World
// C: Street
// D: School
// E: Battery
//  INFO cachestore::evict: DISCARD key="B"
// Current cache:
// C: Street
// D: School
// E: Battery
// F: Mission
//
// Explanation: updating C does not move it; B is the oldest insert left.
