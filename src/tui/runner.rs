//! TUI Runner - main loop that owns terminal, session, and in-flight work
//!
//! The TuiRunner is responsible for:
//! - Initializing and restoring the terminal
//! - Dispatching events to App for handling
//! - Consuming the App's pending actions and driving the PlannerSession
//! - Spawning one tokio task per accepted generation round-trip and applying
//!   its outcome (tagged with the ticket's generation) back on tick

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use eyre::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::export;
use crate::llm::{GenerationError, GenerationRequest, PlanClient};
use crate::plan::{StudyPlan, schema};
use crate::prompts::PromptBuilder;
use crate::session::{GenerationTicket, PlannerSession};

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views;

/// Outcome of one generation round-trip, delivered back to the event loop
struct GenerationOutcome {
    generation: u64,
    result: Result<StudyPlan, GenerationError>,
}

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application (screen-local state + key handling)
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// State controller - single source of truth
    session: PlannerSession,
    /// Plan generation client
    client: Arc<dyn PlanClient>,
    /// Prompt builder
    prompts: PromptBuilder,
    /// Directory Markdown exports are written to
    export_dir: PathBuf,
    /// Event handler
    event_handler: EventHandler,
    /// Outcome channel: spawned round-trips report back here
    outcome_tx: mpsc::UnboundedSender<GenerationOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<GenerationOutcome>,
}

impl TuiRunner {
    /// Create a new TuiRunner
    pub fn new(terminal: Tui, client: Arc<dyn PlanClient>, prompts: PromptBuilder, export_dir: PathBuf) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        Self {
            app: App::new(),
            terminal,
            session: PlannerSession::new(),
            client,
            prompts,
            export_dir,
            event_handler: EventHandler::new(Duration::from_millis(33)), // ~30 FPS
            outcome_tx,
            outcome_rx,
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.terminal
                .draw(|frame| views::render(&self.session, self.app.state(), frame))?;

            match self.event_handler.next().await? {
                Event::Tick => {
                    self.handle_tick();
                }
                Event::Key(key_event) => {
                    if self.app.handle_key(key_event, &self.session) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
            }

            if self.app.state().should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle tick event - apply finished round-trips and pending actions
    fn handle_tick(&mut self) {
        self.app.state_mut().tick();

        // Apply outcomes first so a fresh regeneration-failure notice becomes
        // a toast in the same tick
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            match outcome.result {
                Ok(plan) => {
                    debug!(generation = outcome.generation, "tick: applying generated plan");
                    self.session.apply_success(outcome.generation, plan);
                }
                Err(e) => {
                    warn!(generation = outcome.generation, error = %e, "tick: generation failed");
                    self.session.apply_failure(outcome.generation);
                }
            }
        }

        if let Some(notice) = self.session.take_notice() {
            self.app.state_mut().set_toast(notice);
        }

        if let Some(request) = self.app.state_mut().pending_submit.take() {
            if let Some(ticket) = self.session.submit(request) {
                self.spawn_generation(ticket);
            }
        }

        if let Some(feedback) = self.app.state_mut().pending_feedback.take() {
            if let Some(ticket) = self.session.request_revision(feedback) {
                self.spawn_generation(ticket);
            }
        }

        if self.app.state().pending_export {
            self.app.state_mut().pending_export = false;
            self.export_plan();
        }

        if self.app.state().pending_reset {
            self.app.state_mut().pending_reset = false;
            self.session.reset();
            self.app.state_mut().reset_form();
        }
    }

    /// Spawn one generation round-trip for an accepted ticket
    fn spawn_generation(&mut self, ticket: GenerationTicket) {
        let prompt = match self.prompts.plan_prompt(&ticket.request, ticket.feedback.as_deref()) {
            Ok(prompt) => prompt,
            Err(e) => {
                // Broken user template override; surface like a failed request
                error!(error = %e, "spawn_generation: prompt rendering failed");
                self.session.apply_failure(ticket.generation);
                return;
            }
        };

        let request = GenerationRequest {
            prompt,
            system_instruction: self.prompts.system_instruction().to_string(),
            schema: schema::response_schema(),
        };

        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        let generation = ticket.generation;

        debug!(generation, "spawn_generation: round-trip started");
        tokio::spawn(async move {
            let result = client.generate(request).await;
            let _ = tx.send(GenerationOutcome { generation, result });
        });
    }

    /// Write the displayed plan as Markdown
    fn export_plan(&mut self) {
        let Some(plan) = self.session.plan() else {
            return;
        };

        match export::write_markdown(plan, &self.export_dir) {
            Ok(path) => {
                self.app.state_mut().set_toast(format!("Saved {}", path.display()));
            }
            Err(e) => {
                warn!(error = %e, "export_plan: failed");
                self.app.state_mut().set_toast("Export failed. Check the log.");
            }
        }
    }
}
