//! Property-based tests for timelines and replay.

use proptest::prelude::*;

use super::Simulation;
use crate::models::{Direction, SimulationConfig, Track};
use crate::scheduling::Policy;

fn config_strategy() -> impl Strategy<Value = SimulationConfig> {
    (1i64..300)
        .prop_flat_map(|max_track| {
            (
                Just(max_track),
                0..=max_track,
                prop::collection::vec(0..=max_track, 1..30),
                prop::sample::select(Policy::ALL.to_vec()),
                prop::option::of(prop_oneof![
                    Just(Direction::TowardLow),
                    Just(Direction::TowardHigh)
                ]),
            )
        })
        .prop_map(|(max_track, initial, requests, policy, direction)| {
            let config = SimulationConfig::new(initial, requests)
                .with_max_track(max_track)
                .with_policy(policy);
            match direction {
                Some(d) => config.with_direction(d),
                None => config,
            }
        })
}

proptest! {
    /// Property: total movement is non-decreasing and equals the running
    /// sum of seek distances.
    #[test]
    fn prop_movement_is_running_sum(config in config_strategy()) {
        let run = Simulation::new(config).unwrap();
        let mut sum = 0;
        let mut previous_total = 0;
        for record in run.timeline().records() {
            sum += record.seek_distance;
            prop_assert_eq!(record.total_head_movement, sum);
            prop_assert!(record.total_head_movement >= previous_total);
            previous_total = record.total_head_movement;
        }
        prop_assert_eq!(sum, run.visit_sequence().total_movement());
    }

    /// Property: pending and serviced always partition the request set.
    #[test]
    fn prop_pending_and_serviced_partition_requests(config in config_strategy()) {
        let run = Simulation::new(config).unwrap();
        let mut expected: Vec<Track> = run.requests().sorted().to_vec();
        expected.sort_unstable();
        for record in run.timeline().records() {
            let mut union: Vec<Track> = record
                .pending_queue
                .iter()
                .chain(record.serviced_queue.iter())
                .copied()
                .collect();
            union.sort_unstable();
            prop_assert_eq!(&union, &expected);
        }
        prop_assert!(run.timeline().final_record().pending_queue.is_empty());
    }

    /// Property: jumping twice to the same step yields the same record and
    /// statistics, and stepping forward from 0 reproduces the final record.
    #[test]
    fn prop_replay_is_idempotent(config in config_strategy(), target in 0usize..64) {
        let run = Simulation::new(config).unwrap();
        let mut playback = run.playback();

        let first = playback.jump_to(target).clone();
        let first_stats = playback.statistics();
        let second = playback.jump_to(target).clone();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_stats, playback.statistics());

        playback.jump_to(0);
        for _ in 0..run.timeline().last_index() {
            playback.step_forward();
        }
        prop_assert_eq!(playback.current(), run.timeline().final_record());
    }

    /// Property: seeks at step i equal i, and the average is movement / i.
    #[test]
    fn prop_seek_count_matches_step(config in config_strategy()) {
        let run = Simulation::new(config).unwrap();
        for (i, record) in run.timeline().records().iter().enumerate() {
            prop_assert_eq!(record.seeks_count(), i);
            if i > 0 {
                let expected = record.total_head_movement as f64 / i as f64;
                prop_assert!((record.average_seek_time() - expected).abs() < 1e-9);
            }
        }
    }
}
