//! TUI application state
//!
//! Pure data structures for the TUI. No rendering logic here.
//!
//! The submit/display cycle itself lives in [`crate::session`]; this module
//! holds only screen-local state: the form draft, field focus, the feedback
//! box, and the pending actions the runner picks up on tick.

use std::time::{Duration, Instant};

use crate::plan::{StudyRequest, Vibe};

/// How long an ephemeral toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Rows of the form screen, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Semester,
    Subjects,
    Exams,
    FreeTime,
    Goals,
    Vibe,
    Submit,
}

impl FormField {
    /// All rows, in focus order
    pub const ORDER: [FormField; 7] = [
        FormField::Semester,
        FormField::Subjects,
        FormField::Exams,
        FormField::FreeTime,
        FormField::Goals,
        FormField::Vibe,
        FormField::Submit,
    ];

    /// The next row, stopping at the submit row
    pub fn next(&self) -> Self {
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(idx + 1).min(Self::ORDER.len() - 1)]
    }

    /// The previous row, stopping at the first field
    pub fn prev(&self) -> Self {
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[idx.saturating_sub(1)]
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Semester => "Current Semester / Year",
            Self::Subjects => "Subjects (The painful ones)",
            Self::Exams => "When are the exams?",
            Self::FreeTime => "Daily Free Time",
            Self::Goals => "What's the dream?",
            Self::Vibe => "Coach Personality",
            Self::Submit => "Generate My Plan",
        }
    }

    /// Placeholder shown while the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Semester => "e.g. 3rd Sem, Final Year, Drop out?",
            Self::Subjects => "e.g. Data Structures, OS, Networking, 3 Backlogs in Math",
            Self::Exams => "e.g. Next month, Tomorrow (help)",
            Self::FreeTime => "e.g. 2 hours, Only midnight",
            Self::Goals => "e.g. Crack Google interview, Build a SaaS, Just pass this semester",
            Self::Vibe | Self::Submit => "",
        }
    }

    /// True for rows that accept typed text
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Vibe | Self::Submit)
    }
}

/// Local draft of the form - empty strings, default vibe Chill
#[derive(Debug, Clone, Default)]
pub struct FormDraft {
    pub semester: String,
    pub subjects: String,
    pub exams: String,
    pub free_time: String,
    pub goals: String,
    pub vibe: Vibe,
}

impl FormDraft {
    /// The text buffer behind a field, if it has one
    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Semester => Some(&mut self.semester),
            FormField::Subjects => Some(&mut self.subjects),
            FormField::Exams => Some(&mut self.exams),
            FormField::FreeTime => Some(&mut self.free_time),
            FormField::Goals => Some(&mut self.goals),
            FormField::Vibe | FormField::Submit => None,
        }
    }

    /// The current text of a field, if it has one
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Semester => Some(&self.semester),
            FormField::Subjects => Some(&self.subjects),
            FormField::Exams => Some(&self.exams),
            FormField::FreeTime => Some(&self.free_time),
            FormField::Goals => Some(&self.goals),
            FormField::Vibe | FormField::Submit => None,
        }
    }

    /// Snapshot the draft as an immutable request
    pub fn to_request(&self) -> StudyRequest {
        StudyRequest {
            semester: self.semester.clone(),
            subjects: self.subjects.clone(),
            exams: self.exams.clone(),
            free_time: self.free_time.clone(),
            goals: self.goals.clone(),
            vibe: self.vibe,
        }
    }

    /// Presence validation only - every text field must be non-empty
    pub fn is_complete(&self) -> bool {
        self.to_request().is_complete()
    }
}

/// Ephemeral alert shown over the plan screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + TOAST_TTL,
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Main TUI application state
#[derive(Debug)]
pub struct AppState {
    /// Focused form row
    pub focus: FormField,
    /// Form draft being edited
    pub draft: FormDraft,
    /// Inline hint under the form (missing fields)
    pub form_hint: Option<String>,

    /// Feedback box visibility (plan screen)
    pub show_feedback: bool,
    /// Feedback text draft
    pub feedback_draft: String,
    /// Vertical scroll offset of the plan view
    pub plan_scroll: u16,

    /// Ephemeral alert
    pub toast: Option<Toast>,

    /// Should the app quit
    pub should_quit: bool,

    // === Pending actions consumed by the runner on tick ===
    pub pending_submit: Option<StudyRequest>,
    pub pending_feedback: Option<String>,
    pub pending_export: bool,
    pub pending_reset: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            focus: FormField::default(),
            draft: FormDraft::default(),
            form_hint: None,
            show_feedback: false,
            feedback_draft: String::new(),
            plan_scroll: 0,
            toast: None,
            should_quit: false,
            pending_submit: None,
            pending_feedback: None,
            pending_export: false,
            pending_reset: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick - called on each frame update
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.expired()) {
            self.toast = None;
        }
    }

    /// Show an ephemeral alert
    pub fn set_toast(&mut self, text: impl Into<String>) {
        self.toast = Some(Toast::new(text));
    }

    /// Fresh form draft - nothing pre-filled
    pub fn reset_form(&mut self) {
        self.draft = FormDraft::default();
        self.focus = FormField::default();
        self.form_hint = None;
        self.show_feedback = false;
        self.feedback_draft.clear();
        self.plan_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_order_stops_at_ends() {
        assert_eq!(FormField::Semester.prev(), FormField::Semester);
        assert_eq!(FormField::Submit.next(), FormField::Submit);
        assert_eq!(FormField::Goals.next(), FormField::Vibe);
        assert_eq!(FormField::Vibe.next(), FormField::Submit);
    }

    #[test]
    fn test_draft_defaults() {
        let draft = FormDraft::default();
        assert_eq!(draft.vibe, Vibe::Chill);
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_draft_text_access() {
        let mut draft = FormDraft::default();
        draft.text_mut(FormField::Goals).unwrap().push_str("Pass");
        assert_eq!(draft.text(FormField::Goals), Some("Pass"));
        assert!(draft.text_mut(FormField::Vibe).is_none());
    }

    #[test]
    fn test_draft_to_request_round_trip() {
        let draft = FormDraft {
            semester: "3rd Sem".to_string(),
            subjects: "OS".to_string(),
            exams: "soon".to_string(),
            free_time: "2h".to_string(),
            goals: "Pass".to_string(),
            vibe: Vibe::Hardcore,
        };

        let request = draft.to_request();
        assert!(draft.is_complete());
        assert_eq!(request.vibe, Vibe::Hardcore);
        assert_eq!(request.free_time, "2h");
    }

    #[test]
    fn test_reset_form_clears_everything() {
        let mut state = AppState::new();
        state.draft.semester = "3rd Sem".to_string();
        state.focus = FormField::Goals;
        state.show_feedback = true;
        state.feedback_draft = "more React".to_string();
        state.plan_scroll = 7;

        state.reset_form();

        assert!(state.draft.semester.is_empty());
        assert_eq!(state.focus, FormField::Semester);
        assert!(!state.show_feedback);
        assert!(state.feedback_draft.is_empty());
        assert_eq!(state.plan_scroll, 0);
    }
}
