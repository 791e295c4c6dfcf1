//! TUI application - keyboard handling
//!
//! The App struct owns the screen-local AppState and translates key events
//! into edits and pending actions. It never touches the session directly;
//! the runner consumes the pending actions and drives the session, so the
//! single-flight rule holds even if a key slips through a disabled control.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::session::{Phase, PlannerSession};

use super::state::{AppState, FormField};

/// TUI application
#[derive(Debug)]
pub struct App {
    /// Screen-local state
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        Self { state: AppState::new() }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key event
    ///
    /// The session is read-only here: the phase picks the active screen and
    /// gates the controls that must be disabled while a request is in flight.
    /// Returns true if the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent, session: &PlannerSession) -> bool {
        // Ctrl+C always quits immediately
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match session.phase() {
            Phase::Idle | Phase::Submitting => self.handle_form_key(key, session),
            Phase::Displaying | Phase::Regenerating => self.handle_plan_key(key, session),
        }

        false
    }

    /// Handle key on the form screen
    fn handle_form_key(&mut self, key: KeyEvent, session: &PlannerSession) {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                self.state.should_quit = true;
            }

            // === Focus movement ===
            (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.state.focus = self.state.focus.next();
            }
            (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) | (KeyCode::Up, _) => {
                self.state.focus = self.state.focus.prev();
            }

            // === Vibe selector (exactly one always selected) ===
            (KeyCode::Right, _) if self.state.focus == FormField::Vibe => {
                self.state.draft.vibe = self.state.draft.vibe.next();
            }
            (KeyCode::Left, _) if self.state.focus == FormField::Vibe => {
                self.state.draft.vibe = self.state.draft.vibe.prev();
            }

            // === Submit ===
            (KeyCode::Enter, _) if self.state.focus == FormField::Submit => {
                self.try_submit(session);
            }
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                self.try_submit(session);
            }
            // Enter in a text field moves on, like Tab in a browser form
            (KeyCode::Enter, _) => {
                self.state.focus = self.state.focus.next();
            }

            // === Text editing (disabled while a request is in flight) ===
            (KeyCode::Backspace, _) if !session.in_flight() => {
                if let Some(buf) = self.state.draft.text_mut(self.state.focus) {
                    buf.pop();
                }
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) if !session.in_flight() => {
                if let Some(buf) = self.state.draft.text_mut(self.state.focus) {
                    buf.push(c);
                    self.state.form_hint = None;
                }
            }

            _ => {}
        }
    }

    /// Validate the draft and queue the submit action
    ///
    /// The submit control is disabled while a request is in flight; presence
    /// validation is the only check performed.
    fn try_submit(&mut self, session: &PlannerSession) {
        if session.in_flight() {
            return;
        }

        if !self.state.draft.is_complete() {
            self.state.form_hint = Some("All fields are required. Be honest, I won't judge (much).".to_string());
            return;
        }

        self.state.pending_submit = Some(self.state.draft.to_request());
        // Fresh draft - the form does not pre-fill, even if the request fails
        self.state.reset_form();
    }

    /// Handle key on the plan screen
    fn handle_plan_key(&mut self, key: KeyEvent, session: &PlannerSession) {
        if self.state.show_feedback {
            self.handle_feedback_key(key, session);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.state.should_quit = true;
            }

            // Reveal the feedback box
            KeyCode::Char('t') => {
                self.state.show_feedback = true;
            }

            // Export the plan as Markdown
            KeyCode::Char('s') => {
                self.state.pending_export = true;
            }

            // Unconditional restart - discards plan and form data
            KeyCode::Char('r') => {
                self.state.pending_reset = true;
            }

            // === Scrolling ===
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.plan_scroll = self.state.plan_scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.plan_scroll = self.state.plan_scroll.saturating_sub(1);
            }
            KeyCode::Char('g') => {
                self.state.plan_scroll = 0;
            }

            _ => {}
        }
    }

    /// Handle key while the feedback box is open
    fn handle_feedback_key(&mut self, key: KeyEvent, session: &PlannerSession) {
        match key.code {
            // Cancel - hide the box and discard the draft
            KeyCode::Esc => {
                self.state.show_feedback = false;
                self.state.feedback_draft.clear();
            }

            // Apply - only with a non-empty draft and no regeneration in
            // flight; the box closes optimistically either way the request
            // turns out
            KeyCode::Enter => {
                if !session.in_flight() && !self.state.feedback_draft.trim().is_empty() {
                    let feedback = std::mem::take(&mut self.state.feedback_draft);
                    self.state.pending_feedback = Some(feedback);
                    self.state.show_feedback = false;
                }
            }

            KeyCode::Backspace => {
                self.state.feedback_draft.pop();
            }
            KeyCode::Char(c) => {
                self.state.feedback_draft.push(c);
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{StudyPlan, StudyRequest, Vibe};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn request() -> StudyRequest {
        StudyRequest {
            semester: "3rd Sem".to_string(),
            subjects: "OS".to_string(),
            exams: "soon".to_string(),
            free_time: "2h".to_string(),
            goals: "Pass".to_string(),
            vibe: Vibe::Chill,
        }
    }

    fn plan() -> StudyPlan {
        serde_json::from_value(serde_json::json!({
            "roast": "r",
            "motivationalQuote": "q",
            "weeklySchedule": [],
            "resources": [],
            "careerAdvice": "a"
        }))
        .unwrap()
    }

    fn displaying_session() -> PlannerSession {
        let mut session = PlannerSession::new();
        let ticket = session.submit(request()).unwrap();
        session.apply_success(ticket.generation, plan());
        session
    }

    fn fill_draft(app: &mut App) {
        app.state_mut().draft = super::super::state::FormDraft {
            semester: "3rd Sem".to_string(),
            subjects: "OS".to_string(),
            exams: "soon".to_string(),
            free_time: "2h".to_string(),
            goals: "Pass".to_string(),
            vibe: Vibe::Roast,
        };
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new();
        let session = PlannerSession::new();
        let quit = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &session);
        assert!(quit);
    }

    #[test]
    fn test_typing_into_focused_field() {
        let mut app = App::new();
        let session = PlannerSession::new();

        for c in "3rd".chars() {
            app.handle_key(key(KeyCode::Char(c)), &session);
        }
        assert_eq!(app.state().draft.semester, "3rd");

        app.handle_key(key(KeyCode::Backspace), &session);
        assert_eq!(app.state().draft.semester, "3r");
    }

    #[test]
    fn test_tab_moves_focus() {
        let mut app = App::new();
        let session = PlannerSession::new();

        app.handle_key(key(KeyCode::Tab), &session);
        assert_eq!(app.state().focus, FormField::Subjects);

        app.handle_key(key(KeyCode::BackTab), &session);
        assert_eq!(app.state().focus, FormField::Semester);
    }

    #[test]
    fn test_vibe_cycles_with_arrows() {
        let mut app = App::new();
        let session = PlannerSession::new();
        app.state_mut().focus = FormField::Vibe;

        app.handle_key(key(KeyCode::Right), &session);
        assert_eq!(app.state().draft.vibe, Vibe::Hardcore);

        app.handle_key(key(KeyCode::Left), &session);
        assert_eq!(app.state().draft.vibe, Vibe::Chill);

        app.handle_key(key(KeyCode::Left), &session);
        assert_eq!(app.state().draft.vibe, Vibe::Roast);
    }

    #[test]
    fn test_incomplete_submit_shows_hint() {
        let mut app = App::new();
        let session = PlannerSession::new();
        app.state_mut().focus = FormField::Submit;

        app.handle_key(key(KeyCode::Enter), &session);

        assert!(app.state().pending_submit.is_none());
        assert!(app.state().form_hint.is_some());
    }

    #[test]
    fn test_complete_submit_emits_request_and_resets_draft() {
        let mut app = App::new();
        let session = PlannerSession::new();
        fill_draft(&mut app);
        app.state_mut().focus = FormField::Submit;

        app.handle_key(key(KeyCode::Enter), &session);

        let emitted = app.state().pending_submit.clone().unwrap();
        assert_eq!(emitted.vibe, Vibe::Roast);
        assert_eq!(emitted.semester, "3rd Sem");
        // Fresh draft, nothing pre-filled
        assert!(app.state().draft.semester.is_empty());
        assert_eq!(app.state().draft.vibe, Vibe::Chill);
    }

    #[test]
    fn test_submit_disabled_while_in_flight() {
        let mut app = App::new();
        let mut session = PlannerSession::new();
        session.submit(request()).unwrap();
        assert!(session.in_flight());

        fill_draft(&mut app);
        app.state_mut().focus = FormField::Submit;
        app.handle_key(key(KeyCode::Enter), &session);

        assert!(app.state().pending_submit.is_none());
    }

    #[test]
    fn test_typing_disabled_while_in_flight() {
        let mut app = App::new();
        let mut session = PlannerSession::new();
        session.submit(request()).unwrap();

        app.handle_key(key(KeyCode::Char('x')), &session);
        assert!(app.state().draft.semester.is_empty());
    }

    #[test]
    fn test_feedback_box_open_cancel_discards_draft() {
        let mut app = App::new();
        let session = displaying_session();

        app.handle_key(key(KeyCode::Char('t')), &session);
        assert!(app.state().show_feedback);

        for c in "more React".chars() {
            app.handle_key(key(KeyCode::Char(c)), &session);
        }
        assert_eq!(app.state().feedback_draft, "more React");

        app.handle_key(key(KeyCode::Esc), &session);
        assert!(!app.state().show_feedback);
        assert!(app.state().feedback_draft.is_empty());
    }

    #[test]
    fn test_feedback_submit_closes_optimistically() {
        let mut app = App::new();
        let session = displaying_session();

        app.handle_key(key(KeyCode::Char('t')), &session);
        for c in "no weekends".chars() {
            app.handle_key(key(KeyCode::Char(c)), &session);
        }
        app.handle_key(key(KeyCode::Enter), &session);

        assert_eq!(app.state().pending_feedback.as_deref(), Some("no weekends"));
        assert!(!app.state().show_feedback);
        assert!(app.state().feedback_draft.is_empty());
    }

    #[test]
    fn test_empty_feedback_not_submitted() {
        let mut app = App::new();
        let session = displaying_session();

        app.handle_key(key(KeyCode::Char('t')), &session);
        app.handle_key(key(KeyCode::Enter), &session);

        assert!(app.state().pending_feedback.is_none());
        // Box stays open for the user to type something
        assert!(app.state().show_feedback);
    }

    #[test]
    fn test_feedback_submit_disabled_while_regenerating() {
        let mut app = App::new();
        let mut session = displaying_session();
        session.request_revision("first tweak").unwrap();
        assert!(session.in_flight());

        app.handle_key(key(KeyCode::Char('t')), &session);
        for c in "second tweak".chars() {
            app.handle_key(key(KeyCode::Char(c)), &session);
        }
        app.handle_key(key(KeyCode::Enter), &session);

        assert!(app.state().pending_feedback.is_none());
    }

    #[test]
    fn test_plan_screen_actions() {
        let mut app = App::new();
        let session = displaying_session();

        app.handle_key(key(KeyCode::Char('s')), &session);
        assert!(app.state().pending_export);

        app.handle_key(key(KeyCode::Char('r')), &session);
        assert!(app.state().pending_reset);

        app.handle_key(key(KeyCode::Char('j')), &session);
        app.handle_key(key(KeyCode::Char('j')), &session);
        app.handle_key(key(KeyCode::Char('k')), &session);
        assert_eq!(app.state().plan_scroll, 1);

        app.handle_key(key(KeyCode::Char('g')), &session);
        assert_eq!(app.state().plan_scroll, 0);
    }
}
