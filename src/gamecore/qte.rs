//! `gamecore::qte` submodule implements [`QuickTimeEvent`] - a timed key sequence
//! the player has to follow.
//!

use crate::gamecore::inputs::Key;
use log::debug;

/// [`QteOutcome`] enum lists states a quick time event sequence can be in.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum QteOutcome {
    /// The sequence is still being played.
    ///
    Running,
    /// Every step was matched before the failure allowance ran out.
    ///
    Completed,
    /// The failure allowance ran out.
    ///
    Failed,
}

/// [`QuickTimeEvent`] struct represents a timed key sequence.
///
/// Every step is a key the player has to press within a time window. A wrong key
/// consumes one failure and keeps waiting on the same step; letting the window
/// expire consumes one failure and skips the step. The sequence fails once more
/// failures accumulate than the allowance permits, and completes when the last
/// step is passed.
///
/// Timing is frame-driven: the host loop advances the window timer through
/// [`QuickTimeEvent::update`] with the frame delta.
///
/// # Example
/// ```rust
/// # use driftengine::gamecore::inputs::Key;
/// # use driftengine::gamecore::qte::{QteOutcome, QuickTimeEvent};
/// let mut qte: QuickTimeEvent = QuickTimeEvent::new(
///     vec![(Key::B, 1.0), (Key::C, 2.0)],
///     1,
/// );
/// qte.next_input(Key::B);
/// qte.next_input(Key::C);
/// assert_eq!(qte.outcome(), QteOutcome::Completed);
/// ```
///
#[derive(Clone, Debug)]
pub struct QuickTimeEvent {
    /// Steps of the sequence: expected key and time window in seconds.
    ///
    steps: Vec<(Key, f32)>,
    /// Number of failures the sequence tolerates.
    ///
    allowed_failures: u32,

    /// Index of the step that is being waited on.
    ///
    current_step: usize,
    /// Failures accumulated so far.
    ///
    failures: u32,
    /// Time in seconds spent waiting on the current step.
    ///
    elapsed: f32,
}
impl QuickTimeEvent {
    /// Initializes [`QuickTimeEvent`] from steps (expected key plus time window in
    /// seconds) and the number of failures the sequence tolerates.
    ///
    pub fn new(steps: Vec<(Key, f32)>, allowed_failures: u32) -> Self {
        QuickTimeEvent {
            steps,
            allowed_failures,

            current_step: 0,
            failures: 0,
            elapsed: 0.0,
        }
    }

    /// Feeds the next pressed key into the sequence.
    ///
    /// A match advances to the next step and restarts the window timer; a mismatch
    /// consumes one failure and keeps waiting on the same step. Finished sequences
    /// ignore input.
    ///
    pub fn next_input(&mut self, key: Key) {
        if self.outcome() != QteOutcome::Running {
            return;
        }
        if self.steps[self.current_step].0 == key {
            self.current_step += 1;
            self.elapsed = 0.0;
        } else {
            debug!("wrong qte key {:?} on step {}", key, self.current_step);
            self.failures += 1;
        }
    }

    /// Advances the window timer of the current step by the frame delta.
    ///
    /// An expired window consumes one failure and skips the step. Finished
    /// sequences are not advanced.
    ///
    pub fn update(&mut self, dt: f32) {
        if self.outcome() != QteOutcome::Running {
            return;
        }
        self.elapsed += dt;
        if self.elapsed > self.steps[self.current_step].1 {
            debug!("qte step {} window expired", self.current_step);
            self.failures += 1;
            self.current_step += 1;
            self.elapsed = 0.0;
        }
    }

    /// Returns state the sequence is in.
    ///
    pub fn outcome(&self) -> QteOutcome {
        if self.failures > self.allowed_failures {
            QteOutcome::Failed
        } else if self.current_step >= self.steps.len() {
            QteOutcome::Completed
        } else {
            QteOutcome::Running
        }
    }

    /// Returns index of the step that is being waited on.
    ///
    pub fn current_step(&self) -> usize {
        self.current_step
    }
    /// Returns failures accumulated so far.
    ///
    pub fn failures(&self) -> u32 {
        self.failures
    }
    /// Returns the number of steps in the sequence.
    ///
    pub fn length(&self) -> usize {
        self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{QteOutcome, QuickTimeEvent};
    use crate::gamecore::inputs::Key;

    fn sequence(allowed_failures: u32) -> QuickTimeEvent {
        QuickTimeEvent::new(
            vec![(Key::B, 1.0), (Key::C, 2.0), (Key::F, 3.0)],
            allowed_failures,
        )
    }

    #[test]
    fn completes_on_correct_sequence() {
        let mut qte = sequence(0);
        qte.next_input(Key::B);
        qte.next_input(Key::C);
        qte.next_input(Key::F);
        assert_eq!(qte.outcome(), QteOutcome::Completed);
        assert_eq!(qte.failures(), 0);

        // finished sequences ignore both input and time
        qte.next_input(Key::Z);
        qte.update(100.0);
        assert_eq!(qte.outcome(), QteOutcome::Completed);
    }

    #[test]
    fn wrong_key_consumes_failure_and_stays_on_step() {
        let mut qte = sequence(1);
        qte.next_input(Key::Z);
        assert_eq!(qte.outcome(), QteOutcome::Running);
        assert_eq!(qte.current_step(), 0);
        assert_eq!(qte.failures(), 1);

        qte.next_input(Key::B);
        assert_eq!(qte.current_step(), 1);
    }

    #[test]
    fn window_expiry_consumes_failure_and_skips_step() {
        let mut qte = sequence(1);
        qte.update(0.6);
        assert_eq!(qte.current_step(), 0);
        qte.update(0.6);
        assert_eq!(qte.current_step(), 1);
        assert_eq!(qte.failures(), 1);
        assert_eq!(qte.outcome(), QteOutcome::Running);
    }

    #[test]
    fn fails_once_allowance_runs_out() {
        let mut qte = sequence(1);
        qte.next_input(Key::Z);
        qte.next_input(Key::Z);
        assert_eq!(qte.outcome(), QteOutcome::Failed);

        // failed sequences ignore further input
        qte.next_input(Key::B);
        assert_eq!(qte.current_step(), 0);
    }

    #[test]
    fn expiring_every_window_can_fail_the_sequence() {
        let mut qte = sequence(0);
        qte.update(1.1);
        assert_eq!(qte.outcome(), QteOutcome::Failed);
    }

    #[test]
    fn empty_sequence_is_immediately_complete() {
        let mut qte = QuickTimeEvent::new(Vec::new(), 0);
        assert_eq!(qte.outcome(), QteOutcome::Completed);
        qte.update(1.0);
        qte.next_input(Key::A);
        assert_eq!(qte.outcome(), QteOutcome::Completed);
    }
}
