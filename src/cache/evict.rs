//! Eviction Module
//!
//! Picks the entry to drop when a new key arrives at a full store.
//!
//! The policy ignores recency, frequency and remaining TTL: the victim is the
//! first key the map yields. `HashMap` iteration order depends on its random
//! hash seed, so the choice is unspecified and may differ between runs.

use std::collections::HashMap;

// == Select Victim ==
/// Returns the key to evict, or None if `entries` is empty.
pub fn select_victim<E>(entries: &HashMap<String, E>) -> Option<String> {
    entries.keys().next().cloned()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_victim_empty() {
        let entries: HashMap<String, u32> = HashMap::new();
        assert_eq!(select_victim(&entries), None);
    }

    #[test]
    fn test_select_victim_single_entry() {
        let mut entries = HashMap::new();
        entries.insert("only".to_string(), 1u32);
        assert_eq!(select_victim(&entries), Some("only".to_string()));
    }

    #[test]
    fn test_select_victim_returns_present_key() {
        let mut entries = HashMap::new();
        for i in 0..16u32 {
            entries.insert(format!("key{}", i), i);
        }

        let victim = select_victim(&entries).unwrap();
        assert!(entries.contains_key(&victim));
    }
}
