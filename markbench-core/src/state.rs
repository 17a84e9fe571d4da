// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Per-invocation run state machine.
//!
//! Implements the run lifecycle: Idle → Loading → Running → Reporting → Done,
//! with a single error exit to Failed from any non-terminal phase.
//! Invalid transitions result in PhaseTransitionError.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::PhaseTransitionError;

/// Run lifecycle phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Nothing has happened yet.
    Idle,

    /// The workload is being read into memory.
    Loading,

    /// The timed repetition loop is executing.
    Running,

    /// The measurement is being written out.
    Reporting,

    /// Terminal: the report was written.
    Done,

    /// Terminal: the first fault ended the run.
    Failed,
}

impl RunPhase {
    /// Get the phase name for error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading",
            Self::Running => "Running",
            Self::Reporting => "Reporting",
            Self::Done => "Done",
            Self::Failed => "Failed",
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Check if transition to the target phase is valid.
    pub fn can_transition_to(&self, target: RunPhase) -> bool {
        matches!(
            (self, target),
            (Self::Idle, Self::Loading)
                | (Self::Loading, Self::Running)
                | (Self::Running, Self::Reporting)
                | (Self::Reporting, Self::Done)
                | (Self::Idle | Self::Loading | Self::Running | Self::Reporting, Self::Failed)
        )
    }
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// State machine for one benchmark invocation.
/// Not re-entrant: once terminal, every further transition is rejected.
#[derive(Debug)]
pub struct RunStateMachine {
    current_phase: RunPhase,
    last_transition: Instant,
    transition_count: u64,
}

impl RunStateMachine {
    pub fn new() -> Self {
        Self {
            current_phase: RunPhase::Idle,
            last_transition: Instant::now(),
            transition_count: 0,
        }
    }

    /// Get the current phase.
    pub fn phase(&self) -> RunPhase {
        self.current_phase
    }

    /// Get time since last transition.
    pub fn time_in_current_phase(&self) -> std::time::Duration {
        self.last_transition.elapsed()
    }

    /// Get total number of transitions.
    pub fn transition_count(&self) -> u64 {
        self.transition_count
    }

    /// Attempt to transition to a new phase.
    pub fn transition_to(&mut self, target: RunPhase) -> Result<(), PhaseTransitionError> {
        if self.current_phase.is_terminal() {
            return Err(PhaseTransitionError::TerminalPhase {
                phase: self.current_phase.name(),
            });
        }

        if !self.current_phase.can_transition_to(target) {
            return Err(PhaseTransitionError::InvalidTransition {
                from: self.current_phase.name(),
                to: target.name(),
            });
        }

        let phase_ms = u64::try_from(self.time_in_current_phase().as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(
            from = self.current_phase.name(),
            to = target.name(),
            phase_ms,
            "Phase transition"
        );

        self.current_phase = target;
        self.last_transition = Instant::now();
        self.transition_count += 1;

        Ok(())
    }

    /// Move to Failed unless already terminal.
    pub fn fail(&mut self) {
        if !self.current_phase.is_terminal() {
            let _ = self.transition_to(RunPhase::Failed);
        }
    }
}

impl Default for RunStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
