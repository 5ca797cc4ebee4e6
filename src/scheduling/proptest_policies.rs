//! Property-based tests for the scheduling policies.
//!
//! These tests check completeness, determinism and the movement relations
//! between the sweep variants over random valid configurations.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use super::Policy;
use crate::models::{Direction, Track};

/// Strategy for a valid `(max_track, initial_position, requests)` triple.
fn config_strategy() -> impl Strategy<Value = (Track, Track, Vec<Track>)> {
    (1i64..500).prop_flat_map(|max_track| {
        (
            Just(max_track),
            0..=max_track,
            prop::collection::vec(0..=max_track, 1..40),
        )
    })
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::TowardLow), Just(Direction::TowardHigh)]
}

fn policy_strategy() -> impl Strategy<Value = Policy> {
    prop::sample::select(Policy::ALL.to_vec())
}

proptest! {
    /// Property: every request is visited exactly once, and any other visit
    /// is a boundary.
    #[test]
    fn prop_sequence_is_complete(
        (max_track, initial, requests) in config_strategy(),
        policy in policy_strategy(),
        direction in direction_strategy(),
    ) {
        let seq = policy
            .schedule(initial, max_track, &requests, Some(direction))
            .unwrap();
        prop_assert_eq!(seq.initial(), Some(initial));

        let mut counts: HashMap<Track, usize> = HashMap::new();
        for &track in seq.visits() {
            *counts.entry(track).or_insert(0) += 1;
        }
        let distinct: HashSet<Track> = requests.iter().copied().collect();
        for request in distinct {
            prop_assert_eq!(counts.remove(&request), Some(1));
        }
        for (track, count) in counts {
            prop_assert!(track == 0 || track == max_track);
            prop_assert_eq!(count, 1);
            prop_assert!(matches!(policy, Policy::Scan | Policy::CScan));
        }
    }

    /// Property: identical inputs give identical sequences.
    #[test]
    fn prop_schedule_is_deterministic(
        (max_track, initial, requests) in config_strategy(),
        policy in policy_strategy(),
        direction in direction_strategy(),
    ) {
        let first = policy.schedule(initial, max_track, &requests, Some(direction)).unwrap();
        let second = policy.schedule(initial, max_track, &requests, Some(direction)).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: dropping boundary visits never adds movement, so LOOK never
    /// moves further than SCAN and C-LOOK never further than C-SCAN.
    #[test]
    fn prop_look_variants_never_exceed_scan_variants(
        (max_track, initial, requests) in config_strategy(),
        direction in direction_strategy(),
    ) {
        let movement = |policy: Policy| {
            policy
                .schedule(initial, max_track, &requests, Some(direction))
                .map(|seq| seq.total_movement())
        };
        prop_assert!(movement(Policy::Look).unwrap() <= movement(Policy::Scan).unwrap());
        prop_assert!(movement(Policy::CLook).unwrap() <= movement(Policy::CScan).unwrap());
    }

    /// Property: LOOK and C-LOOK only ever visit requests.
    #[test]
    fn prop_look_variants_visit_only_requests(
        (max_track, initial, requests) in config_strategy(),
        direction in direction_strategy(),
    ) {
        for policy in [Policy::Look, Policy::CLook, Policy::Fcfs, Policy::Sstf] {
            let seq = policy.schedule(initial, max_track, &requests, Some(direction)).unwrap();
            for track in seq.visits() {
                prop_assert!(requests.contains(track));
            }
        }
    }

    /// Property: the sweep family services the travel side before the other.
    #[test]
    fn prop_sweeps_service_travel_side_first(
        (max_track, initial, requests) in config_strategy(),
        direction in direction_strategy(),
    ) {
        let ahead_count = requests
            .iter()
            .filter(|&&r| match direction {
                Direction::TowardHigh => r >= initial,
                Direction::TowardLow => r <= initial,
            })
            .collect::<HashSet<_>>()
            .len();

        for policy in [Policy::Scan, Policy::CScan, Policy::Look, Policy::CLook] {
            let seq = policy.schedule(initial, max_track, &requests, Some(direction)).unwrap();
            for &track in &seq.visits()[..ahead_count] {
                match direction {
                    Direction::TowardHigh => prop_assert!(track >= initial),
                    Direction::TowardLow => prop_assert!(track <= initial),
                }
            }
        }
    }
}
