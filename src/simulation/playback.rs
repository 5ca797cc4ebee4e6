//! Replay cursor over a timeline.
//!
//! The cursor's only state is the current step index. Stepping and jumping
//! read existing records; nothing is recomputed.

use super::{RunStatistics, Timeline};
use crate::models::StepRecord;

/// A position within a [`Timeline`].
#[derive(Debug, Clone, Copy)]
pub struct Playback<'a> {
    timeline: &'a Timeline,
    current: usize,
}

impl<'a> Playback<'a> {
    /// Creates a cursor at step 0.
    pub fn new(timeline: &'a Timeline) -> Self {
        Self {
            timeline,
            current: 0,
        }
    }

    /// The underlying timeline.
    pub fn timeline(&self) -> &'a Timeline {
        self.timeline
    }

    /// Current step index.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Record at the current step.
    pub fn current(&self) -> &'a StepRecord {
        &self.timeline.records()[self.current]
    }

    /// Advances one step. Returns `None` (and stays put) at the end.
    pub fn step_forward(&mut self) -> Option<&'a StepRecord> {
        if self.is_at_end() {
            return None;
        }
        self.current += 1;
        Some(self.current())
    }

    /// Moves back one step. Returns `None` (and stays put) at step 0.
    pub fn step_backward(&mut self) -> Option<&'a StepRecord> {
        if self.is_at_start() {
            return None;
        }
        self.current -= 1;
        Some(self.current())
    }

    /// Jumps to `index`, clamped to the last step.
    pub fn jump_to(&mut self, index: usize) -> &'a StepRecord {
        self.current = index.min(self.timeline.last_index());
        self.current()
    }

    /// Returns to step 0.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Whether the cursor is at step 0.
    pub fn is_at_start(&self) -> bool {
        self.current == 0
    }

    /// Whether the cursor is at the last step.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.timeline.last_index()
    }

    /// Fraction of steps played, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let last = self.timeline.last_index();
        if last == 0 {
            1.0
        } else {
            self.current as f64 / last as f64
        }
    }

    /// Statistics as of the current step.
    pub fn statistics(&self) -> RunStatistics {
        RunStatistics::calculate(&self.timeline.records()[..=self.current])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VisitSequence;

    fn timeline() -> Timeline {
        let seq = VisitSequence::from_positions(vec![53, 65, 67, 37, 14]);
        Timeline::materialize(&seq, 53, 199, &[65, 67, 37, 14]).unwrap()
    }

    #[test]
    fn test_step_forward_to_end() {
        let timeline = timeline();
        let mut playback = Playback::new(&timeline);
        assert!(playback.is_at_start());

        let mut visited = vec![playback.current().head_position];
        while let Some(record) = playback.step_forward() {
            visited.push(record.head_position);
        }
        assert_eq!(visited, vec![53, 65, 67, 37, 14]);
        assert!(playback.is_at_end());
        assert!(playback.step_forward().is_none());
        assert_eq!(playback.current_index(), 4);
    }

    #[test]
    fn test_step_backward_stops_at_start() {
        let timeline = timeline();
        let mut playback = Playback::new(&timeline);
        assert!(playback.step_backward().is_none());
        playback.jump_to(2);
        assert_eq!(playback.step_backward().unwrap().head_position, 65);
        assert_eq!(playback.current_index(), 1);
    }

    #[test]
    fn test_jump_is_idempotent() {
        let timeline = timeline();
        let mut playback = Playback::new(&timeline);
        let first = playback.jump_to(3).clone();
        let stats_first = playback.statistics();
        let second = playback.jump_to(3).clone();
        assert_eq!(first, second);
        assert_eq!(stats_first, playback.statistics());
    }

    #[test]
    fn test_jump_clamps() {
        let timeline = timeline();
        let mut playback = Playback::new(&timeline);
        assert_eq!(playback.jump_to(100).step, 4);
    }

    #[test]
    fn test_reset_then_replay_reaches_final_record() {
        let timeline = timeline();
        let mut playback = Playback::new(&timeline);
        playback.jump_to(3);
        playback.reset();
        for _ in 0..timeline.last_index() {
            playback.step_forward();
        }
        assert_eq!(playback.current(), timeline.final_record());
        assert_eq!(playback.statistics(), timeline.statistics());
    }

    #[test]
    fn test_progress() {
        let timeline = timeline();
        let mut playback = Playback::new(&timeline);
        assert!((playback.progress() - 0.0).abs() < 1e-10);
        playback.jump_to(2);
        assert!((playback.progress() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_statistics_follow_cursor() {
        let timeline = timeline();
        let mut playback = Playback::new(&timeline);
        playback.jump_to(2);
        let stats = playback.statistics();
        assert_eq!(stats.total_head_movement, 14);
        assert_eq!(stats.serviced_count, 2);
        assert_eq!(stats.pending_count, 2);
    }
}
