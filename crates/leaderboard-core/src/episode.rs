//! Score and step accounting for one play session.
//!
//! The game loop feeds every environment step into an [`EpisodeTracker`].
//! Counting begins on the first FIRE press, so idle frames before the serve
//! never count against the step budget.

use serde::Serialize;
use strum::{Display, FromRepr, IntoStaticStr};
use tracing::info;

/// Steps between progress log lines
pub const PROGRESS_INTERVAL: u64 = 100;

/// Breakout action set (ALE action ids)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, FromRepr, IntoStaticStr, Display)]
#[repr(u8)]
pub enum Action {
    #[default]
    #[strum(serialize = "NOOP")]
    Noop = 0,
    #[strum(serialize = "FIRE")]
    Fire = 1,
    #[strum(serialize = "RIGHT")]
    Right = 2,
    #[strum(serialize = "LEFT")]
    Left = 3,
}

impl Action {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }
}

/// Why an episode stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EndReason {
    /// The step budget ran out
    #[strum(serialize = "steps")]
    #[serde(rename = "steps")]
    StepLimit,
    /// The environment reported terminated or truncated
    GameOver,
    /// The player closed the window
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Running,
    Ended(EndReason),
}

/// Final numbers of an episode, ready for the score store
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub score: f64,
    pub steps: u64,
    pub reason: EndReason,
}

#[derive(Debug, Clone)]
pub struct EpisodeTracker {
    max_steps: Option<u64>,
    started: bool,
    steps: u64,
    score: f64,
    ended: Option<EndReason>,
}

impl EpisodeTracker {
    /// `None` or `Some(0)` is free play without a step budget.
    pub fn new(max_steps: Option<u64>) -> Self {
        Self {
            max_steps: max_steps.filter(|&n| n > 0),
            started: false,
            steps: 0,
            score: 0.0,
            ended: None,
        }
    }

    /// Budget as given on the command line, where any value `<= 0` means free play.
    pub fn from_step_arg(steps: i64) -> Self {
        Self::new(u64::try_from(steps).ok())
    }

    pub fn max_steps(&self) -> Option<u64> {
        self.max_steps
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.ended
    }

    /// Account for one environment step.
    ///
    /// `action` is what the player held this frame, `reward` what the
    /// environment returned for it, and `game_over` whether it reported
    /// terminated or truncated. Game over wins when both it and the step
    /// budget end the episode on the same frame.
    pub fn observe(&mut self, action: Action, reward: f64, game_over: bool) -> StepOutcome {
        if let Some(reason) = self.ended {
            return StepOutcome::Ended(reason);
        }

        if !self.started && action == Action::Fire {
            self.started = true;
            info!(">>> COUNTER STARTED! <<<");
        }

        if self.started {
            self.steps += 1;
            self.score += reward;
        }

        let budget_spent = self
            .max_steps
            .is_some_and(|max| self.started && self.steps >= max);

        if game_over {
            self.ended = Some(EndReason::GameOver);
        } else if budget_spent {
            info!("Time's up! Reached {} steps.", self.steps);
            info!("FINAL SCORE: {}", self.score);
            self.ended = Some(EndReason::StepLimit);
        }

        if self.started && self.steps % PROGRESS_INTERVAL == 0 {
            match self.max_steps {
                Some(max) => info!("Step: {}/{} | Score: {}", self.steps, max, self.score),
                None => info!("Step: {} | Score: {}", self.steps, self.score),
            }
        }

        match self.ended {
            Some(reason) => StepOutcome::Ended(reason),
            None => StepOutcome::Running,
        }
    }

    /// Stop the episode because the player quit.
    pub fn quit(&mut self) -> EndReason {
        *self.ended.get_or_insert(EndReason::Quit)
    }

    /// Summary of a finished episode, `None` while it is still running.
    pub fn finish(&self) -> Option<EpisodeSummary> {
        self.ended.map(|reason| EpisodeSummary {
            score: self.score,
            steps: self.steps,
            reason,
        })
    }
}
