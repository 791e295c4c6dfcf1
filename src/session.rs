//! Application state controller
//!
//! One session owns the current request, the current plan, and the
//! user-visible failure messages; every state transition goes through the
//! event methods here. The TUI and the batch command both drive the session -
//! rendering only reads it.
//!
//! Single-flight is enforced at this level, independent of any UI control
//! state: `submit` and `request_revision` refuse while a round-trip is in
//! flight. Each accepted round-trip carries a generation number; outcomes
//! presenting a stale generation (superseded request, or arriving after a
//! reset) are discarded.

use tracing::debug;

use crate::plan::{StudyPlan, StudyRequest};

/// Persistent banner shown when the initial submission fails
pub const SUBMIT_FAILURE_MESSAGE: &str = "The AI is overwhelmed by your life choices (or the API failed). Try again.";

/// Ephemeral notice shown when a regeneration fails
pub const REGENERATE_FAILURE_MESSAGE: &str = "Failed to update plan. The AI is stubborn today.";

/// Where the session is in the submit/display/regenerate cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No plan; form visible
    #[default]
    Idle,
    /// Initial request in flight
    Submitting,
    /// Plan present; form hidden
    Displaying,
    /// Revision request in flight over an existing plan
    Regenerating,
}

/// An accepted generation round-trip
///
/// Carries everything the round-trip needs, plus the generation number its
/// outcome must present to be applied.
#[derive(Debug, Clone)]
pub struct GenerationTicket {
    pub generation: u64,
    pub request: StudyRequest,
    pub feedback: Option<String>,
}

/// Single source of truth for the two-screen flow
#[derive(Debug, Default)]
pub struct PlannerSession {
    phase: Phase,
    request: Option<StudyRequest>,
    plan: Option<StudyPlan>,
    error: Option<String>,
    notice: Option<String>,
    generation: u64,
}

impl PlannerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The currently displayed plan, if any
    pub fn plan(&self) -> Option<&StudyPlan> {
        self.plan.as_ref()
    }

    /// The stored form data, retained across failures for reuse
    pub fn request(&self) -> Option<&StudyRequest> {
        self.request.as_ref()
    }

    /// Persistent error banner text (form screen)
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Take the ephemeral notice (plan screen), clearing it
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// True while a round-trip is outstanding
    pub fn in_flight(&self) -> bool {
        matches!(self.phase, Phase::Submitting | Phase::Regenerating)
    }

    /// Idle --submit--> Submitting
    ///
    /// Stores the form data, clears any prior error, and yields the ticket
    /// for the round-trip. Returns None when not Idle - in particular while
    /// a request is already in flight.
    pub fn submit(&mut self, request: StudyRequest) -> Option<GenerationTicket> {
        if self.phase != Phase::Idle {
            debug!(phase = ?self.phase, "submit: ignored, not idle");
            return None;
        }

        self.error = None;
        self.generation += 1;
        self.phase = Phase::Submitting;
        self.request = Some(request.clone());
        debug!(generation = self.generation, "submit: accepted");

        Some(GenerationTicket {
            generation: self.generation,
            request,
            feedback: None,
        })
    }

    /// Displaying --feedback--> Regenerating
    ///
    /// Reuses the stored form data with the feedback text appended. A no-op
    /// when no form data is stored, when the feedback is blank, or while a
    /// request is in flight.
    pub fn request_revision(&mut self, feedback: impl Into<String>) -> Option<GenerationTicket> {
        let feedback = feedback.into();
        if self.phase != Phase::Displaying {
            debug!(phase = ?self.phase, "request_revision: ignored, not displaying");
            return None;
        }
        if feedback.trim().is_empty() {
            debug!("request_revision: ignored, blank feedback");
            return None;
        }
        let request = match &self.request {
            Some(request) => request.clone(),
            None => {
                debug!("request_revision: ignored, no stored request");
                return None;
            }
        };

        self.notice = None;
        self.generation += 1;
        self.phase = Phase::Regenerating;
        debug!(generation = self.generation, "request_revision: accepted");

        Some(GenerationTicket {
            generation: self.generation,
            request,
            feedback: Some(feedback),
        })
    }

    /// Apply a successful round-trip outcome
    ///
    /// The plan replaces any prior plan wholesale. Stale generations are
    /// discarded.
    pub fn apply_success(&mut self, generation: u64, plan: StudyPlan) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "apply_success: stale, discarded");
            return;
        }

        match self.phase {
            Phase::Submitting | Phase::Regenerating => {
                debug!(generation, "apply_success: plan stored");
                self.plan = Some(plan);
                self.phase = Phase::Displaying;
            }
            _ => {
                debug!(phase = ?self.phase, "apply_success: no round-trip in flight");
            }
        }
    }

    /// Apply a failed round-trip outcome
    ///
    /// Initial-submission failure returns to the form with a persistent
    /// banner; regeneration failure keeps the existing plan untouched and
    /// raises only the ephemeral notice. Stale generations are discarded.
    pub fn apply_failure(&mut self, generation: u64) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "apply_failure: stale, discarded");
            return;
        }

        match self.phase {
            Phase::Submitting => {
                debug!(generation, "apply_failure: back to form with banner");
                self.phase = Phase::Idle;
                self.error = Some(SUBMIT_FAILURE_MESSAGE.to_string());
            }
            Phase::Regenerating => {
                debug!(generation, "apply_failure: plan kept, notice raised");
                self.phase = Phase::Displaying;
                self.notice = Some(REGENERATE_FAILURE_MESSAGE.to_string());
            }
            _ => {
                debug!(phase = ?self.phase, "apply_failure: no round-trip in flight");
            }
        }
    }

    /// Discard both plan and form data unconditionally
    ///
    /// Also bumps the generation so an outcome still in flight is discarded
    /// when it eventually lands.
    pub fn reset(&mut self) {
        debug!("reset: called");
        self.phase = Phase::Idle;
        self.request = None;
        self.plan = None;
        self.error = None;
        self.notice = None;
        self.generation += 1;
    }
}
