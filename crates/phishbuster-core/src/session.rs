//! Quiz session state machine.
//!
//! Each round is either unanswered or answered. Submitting an answer moves
//! it to answered; only [`QuizSession::new_round`] (or a reset) starts the
//! next one. A session is owned by exactly one user and never shared.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::model::{Label, Sample};
use crate::statistics::{accuracy, SessionStats};
use crate::store::SampleSet;

/// What happened when an answer was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The round was already answered; nothing changed.
    Ignored,
    /// The answer was scored.
    Scored { correct: bool, expected: Label },
}

impl AnswerOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, AnswerOutcome::Ignored)
    }
}

/// Read-only view of a session, for display layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub current_index: usize,
    pub score: u32,
    pub rounds: u32,
    pub answered: bool,
    pub feedback: String,
    pub accuracy: f64,
}

/// Per-user quiz state over a shared sample set.
#[derive(Debug)]
pub struct QuizSession<R = StdRng> {
    samples: Arc<SampleSet>,
    rng: R,
    current_index: usize,
    score: u32,
    rounds: u32,
    answered: bool,
    feedback: String,
}

impl QuizSession<StdRng> {
    /// Start a session drawing rounds from an OS-seeded generator.
    pub fn new(samples: Arc<SampleSet>) -> Self {
        Self::with_rng(samples, StdRng::from_os_rng())
    }

    /// Start a session with a reproducible sequence of rounds.
    pub fn seeded(samples: Arc<SampleSet>, seed: u64) -> Self {
        Self::with_rng(samples, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuizSession<R> {
    /// Start a session with the given random source and pick the first round.
    pub fn with_rng(samples: Arc<SampleSet>, rng: R) -> Self {
        let mut session = Self {
            samples,
            rng,
            current_index: 0,
            score: 0,
            rounds: 0,
            answered: false,
            feedback: String::new(),
        };
        session.new_round();
        session
    }

    /// Pick a sample uniformly at random and clear per-round state.
    ///
    /// Repeats across rounds are allowed. Score and round count are kept.
    pub fn new_round(&mut self) {
        self.current_index = self.rng.random_range(0..self.samples.len());
        self.answered = false;
        self.feedback.clear();
        tracing::debug!(index = self.current_index, "new round");
    }

    /// Score `choice` against the current sample.
    ///
    /// A second submission in the same round is ignored, so a round can
    /// never be scored twice.
    pub fn submit_answer(&mut self, choice: Label) -> AnswerOutcome {
        if self.answered {
            tracing::debug!(index = self.current_index, "answer ignored, round already answered");
            return AnswerOutcome::Ignored;
        }

        let sample = &self.samples[self.current_index];
        let expected = sample.label;
        let correct = choice == expected;

        self.rounds += 1;
        let mut feedback = if correct {
            self.score += 1;
            String::from("Correct!")
        } else {
            format!("Not quite. It was {expected}.")
        };
        if !sample.clue.is_empty() {
            feedback.push(' ');
            feedback.push_str(&sample.clue);
        }
        self.feedback = feedback;
        self.answered = true;

        tracing::debug!(
            index = self.current_index,
            correct,
            score = self.score,
            rounds = self.rounds,
            "answer scored"
        );
        AnswerOutcome::Scored { correct, expected }
    }

    /// Zero the score and round count, then start a fresh round.
    pub fn reset(&mut self) {
        self.score = 0;
        self.rounds = 0;
        self.feedback.clear();
        self.answered = false;
        tracing::debug!("session reset");
        self.new_round();
    }
}

impl<R> QuizSession<R> {
    /// The sample shown in the current round.
    pub fn current_sample(&self) -> &Sample {
        &self.samples[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Feedback for the current round; empty until it is answered.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Percentage correct, recomputed on every call.
    pub fn accuracy(&self) -> f64 {
        accuracy(self.score, self.rounds)
    }

    pub fn samples(&self) -> &Arc<SampleSet> {
        &self.samples
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats::new(self.score, self.rounds)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_index: self.current_index,
            score: self.score,
            rounds: self.rounds,
            answered: self.answered,
            feedback: self.feedback.clone(),
            accuracy: self.accuracy(),
        }
    }
}
