//! Unbounded policy: keep everything.
//!
//! Tracks nothing and never produces a victim. A store using it must be
//! built without a capacity; [`CacheStore::try_new`](crate::store::CacheStore::try_new)
//! rejects the combination.

use crate::policy::{CachePolicy, EvictionPolicy};

/// Policy that never evicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbounded;

impl<K> EvictionPolicy<K> for Unbounded {
    #[inline]
    fn on_insert(&mut self, _key: &K) {}

    #[inline]
    fn on_access(&mut self, _key: &K) {}

    #[inline]
    fn on_update(&mut self, _key: &K) {}

    #[inline]
    fn select_victim(&mut self) -> Option<K> {
        None
    }

    fn len(&self) -> usize {
        0
    }

    fn contains(&self, _key: &K) -> bool {
        false
    }

    fn clear(&mut self) {}

    fn is_bounded(&self) -> bool {
        false
    }

    fn kind(&self) -> CachePolicy {
        CachePolicy::Unbounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_selects_a_victim() {
        let mut policy = Unbounded;
        for key in 0..100u32 {
            policy.on_insert(&key);
            policy.on_access(&key);
        }
        assert_eq!(EvictionPolicy::<u32>::select_victim(&mut policy), None);
        assert!(!EvictionPolicy::<u32>::is_bounded(&policy));
        assert_eq!(EvictionPolicy::<u32>::len(&policy), 0);
    }
}
