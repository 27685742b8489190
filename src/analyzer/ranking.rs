//! Ranking tallies.
//!
//! Tallies are ordered maps, and every ranking is a stable sort over them,
//! so equal counts always come out in ascending key order.

use std::collections::BTreeMap;

/// Entries ordered by count, highest first; ties by ascending key.
pub fn rank_desc<K: Clone + Ord>(tally: &BTreeMap<K, usize>) -> Vec<(K, usize)> {
    let mut ranked: Vec<(K, usize)> = tally.iter().map(|(k, v)| (k.clone(), *v)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// The key with the highest count; the smallest such key on ties.
pub fn mode<K: Clone + Ord>(tally: &BTreeMap<K, usize>) -> Option<(K, usize)> {
    let mut best: Option<(&K, usize)> = None;
    for (key, &count) in tally {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((key, count));
        }
    }
    best.map(|(k, c)| (k.clone(), c))
}

/// The key with the lowest count; the smallest such key on ties.
pub fn least<K: Clone + Ord>(tally: &BTreeMap<K, usize>) -> Option<(K, usize)> {
    tally
        .iter()
        .min_by_key(|(_, count)| **count)
        .map(|(k, c)| (k.clone(), *c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(entries: &[(&str, usize)]) -> BTreeMap<String, usize> {
        entries.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn test_rank_desc_breaks_ties_by_key() {
        let t = tally(&[("pear", 2), ("apple", 2), ("fig", 5), ("kiwi", 1)]);
        let ranked = rank_desc(&t);
        let keys: Vec<&str> = ranked.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["fig", "apple", "pear", "kiwi"]);
    }

    #[test]
    fn test_mode() {
        let t = tally(&[("b", 3), ("a", 3), ("c", 1)]);
        assert_eq!(mode(&t), Some(("a".to_string(), 3)));

        let hours: BTreeMap<u32, usize> = [(22, 4), (9, 4), (13, 2)].into_iter().collect();
        assert_eq!(mode(&hours), Some((9, 4)));
    }

    #[test]
    fn test_least() {
        let t = tally(&[("Ana", 10), ("Bia", 3), ("Caio", 7)]);
        assert_eq!(least(&t), Some(("Bia".to_string(), 3)));

        let t = tally(&[("Zoe", 1), ("Ana", 1)]);
        assert_eq!(least(&t), Some(("Ana".to_string(), 1)));
    }

    #[test]
    fn test_empty_tally() {
        let t: BTreeMap<String, usize> = BTreeMap::new();
        assert!(mode(&t).is_none());
        assert!(least(&t).is_none());
        assert!(rank_desc(&t).is_empty());
    }
}
