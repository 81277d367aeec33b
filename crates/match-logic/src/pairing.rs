//! Round-robin pairing for tournament matches
//!
//! Every unordered pair of roster slots meets exactly once, enumerated in
//! roster order: (0,1), (0,2), ..., (0,n-1), (1,2), ...

/// Generate all match pairings for a roster
///
/// # Arguments
/// * `participant_count` - Number of agents in the roster
///
/// # Returns
/// Vector of (index_a, index_b) pairs, where index_a < index_b
pub fn round_robin_pairs(participant_count: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(calculate_match_count(participant_count));
    for a in 0..participant_count {
        for b in (a + 1)..participant_count {
            pairs.push((a, b));
        }
    }
    pairs
}

/// Calculate total number of matches: C(n, 2)
pub fn calculate_match_count(participant_count: usize) -> usize {
    participant_count * participant_count.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{prop_assert, prop_assert_eq, proptest};

    #[test]
    fn test_empty_tournament() {
        assert!(round_robin_pairs(0).is_empty());
        assert!(round_robin_pairs(1).is_empty());
        assert_eq!(calculate_match_count(0), 0);
        assert_eq!(calculate_match_count(1), 0);
    }

    #[test]
    fn test_two_players() {
        assert_eq!(round_robin_pairs(2), vec![(0, 1)]);
    }

    #[test]
    fn test_roster_order() {
        assert_eq!(
            round_robin_pairs(4),
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
    }

    #[test]
    fn test_match_count() {
        assert_eq!(calculate_match_count(4), 6);
        assert_eq!(calculate_match_count(10), 45);
    }

    proptest! {
        #[test]
        fn pairs_cover_each_pair_once(n in 0usize..40) {
            let pairs = round_robin_pairs(n);
            prop_assert_eq!(pairs.len(), n * n.saturating_sub(1) / 2);
            prop_assert_eq!(pairs.len(), calculate_match_count(n));

            let mut sorted = pairs.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), pairs.len());

            for (a, b) in &pairs {
                prop_assert!(a < b, "Pairing not ordered: {} >= {}", a, b);
                prop_assert!(*b < n);
            }
        }
    }
}
