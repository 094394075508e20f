use cachestore::policy::lifo::Lifo;
use cachestore::store::CacheStore;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();

    let mut cache = CacheStore::new(Some(4), Lifo::new());

    cache.put("A", "Hello");
    cache.put("B", "World");
    cache.put("C", "Holberton");
    cache.put("D", "School");

    cache.put("E", "Battery");
    print!("{cache}");

    cache.put("C", "Street");
    cache.put("F", "Mission");
    print!("{cache}");
}

// Expected output (log lines abridged):
//  INFO cachestore::evict: DISCARD key="D"
// Current cache:
// A: Hello
// B: World
// C: Holberton
// E: Battery
//  INFO cachestore::evict: DISCARD key="E"
// Current cache:
// A: Hello
// B: World
// C: Street
// F: Mission
//
// Explanation: the victim is the newest key present before the insert. An
// update does not change insertion order, so E stays newest.
