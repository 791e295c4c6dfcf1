//! Panic Planner - AI study-plan generator for CS students
//!
//! A terminal app that collects a student's academic situation through a
//! form, sends it to a generative-AI provider with a schema-constrained
//! prompt, and renders the returned structured study plan with an option to
//! refine it via free-text feedback.
//!
//! # Core Concepts
//!
//! - **One Source of Truth**: a single [`session::PlannerSession`] owns the
//!   form data, the current plan, and every state transition
//! - **Single Flight**: at most one provider request is outstanding, enforced
//!   by the session independent of UI control state
//! - **Stale Outcomes Discarded**: round-trips carry a generation number;
//!   late responses (after a reset or a newer request) are dropped
//! - **Trust Nothing Unparsed**: the provider response is validated by typed
//!   deserialization, with a distinct schema-mismatch error kind
//!
//! # Modules
//!
//! - [`llm`] - Plan generation client trait and Gemini implementation
//! - [`prompts`] - Handlebars prompt templates with embedded defaults
//! - [`plan`] - Request/plan domain types and the response schema descriptor
//! - [`session`] - The application state controller
//! - [`tui`] - Two-screen terminal UI (form, plan)
//! - [`export`] - Markdown export writer
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod export;
pub mod llm;
pub mod plan;
pub mod prompts;
pub mod session;
pub mod tui;

// Re-export commonly used types
pub use config::{Config, ExportConfig, LlmConfig};
pub use llm::{GeminiClient, GenerationError, GenerationRequest, PlanClient};
pub use plan::{DayPlan, Resource, StudyPlan, StudyRequest, StudyTask, Vibe};
pub use prompts::PromptBuilder;
pub use session::{GenerationTicket, Phase, PlannerSession};
