//! Prompt Builder
//!
//! Renders the plan prompt from a template, preferring a user override file
//! over the embedded default. Pure formatting - the builder has no error
//! conditions of its own beyond template syntax.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;
use crate::plan::StudyRequest;

/// Context for rendering the plan prompt template
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext {
    pub semester: String,
    pub subjects: String,
    pub exams: String,
    pub free_time: String,
    pub goals: String,
    /// Vibe name as it appears on the form ("chill", "hardcore", "roast")
    pub vibe: String,
    /// Tone instruction for the selected vibe
    pub tone: String,
    /// Adjustment feedback, present only on regeneration
    pub feedback: Option<String>,
}

impl PromptContext {
    /// Build a context from a request and optional feedback text
    pub fn new(request: &StudyRequest, feedback: Option<&str>) -> Self {
        Self {
            semester: request.semester.clone(),
            subjects: request.subjects.clone(),
            exams: request.exams.clone(),
            free_time: request.free_time.clone(),
            goals: request.goals.clone(),
            vibe: request.vibe.to_string(),
            tone: request.vibe.tone_instruction().to_string(),
            feedback: feedback.map(|f| f.to_string()),
        }
    }
}

/// Loads and renders the plan prompt template
pub struct PromptBuilder {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// User override directory (e.g. `~/.config/panic-planner/prompts/`)
    user_dir: Option<PathBuf>,
}

impl PromptBuilder {
    /// Create a builder that checks the standard user prompt directory
    pub fn new() -> Self {
        let user_dir = dirs::config_dir().map(|d| d.join("panic-planner").join("prompts"));

        Self {
            hbs: Handlebars::new(),
            user_dir: user_dir.filter(|d| d.exists()),
        }
    }

    /// Create a builder with an explicit override directory
    pub fn with_user_dir(user_dir: impl AsRef<Path>) -> Self {
        let user_dir = user_dir.as_ref().to_path_buf();

        Self {
            hbs: Handlebars::new(),
            user_dir: if user_dir.exists() { Some(user_dir) } else { None },
        }
    }

    /// Create a builder that only uses embedded prompts (for testing)
    pub fn embedded_only() -> Self {
        Self {
            hbs: Handlebars::new(),
            user_dir: None,
        }
    }

    /// Load a template by name
    ///
    /// Checks the user override (`{user_dir}/{name}.pmt`) first, then falls
    /// back to the embedded default.
    fn load_template(&self, name: &str) -> Result<String> {
        if let Some(ref user_dir) = self.user_dir {
            let path = user_dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!("Loading prompt from user override: {:?}", path);
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read user prompt {}: {}", path.display(), e));
            }
        }

        embedded::get_embedded(name)
            .map(|content| content.to_string())
            .ok_or_else(|| eyre!("Prompt template not found: {}", name))
    }

    /// Render the plan prompt for a request
    ///
    /// Embeds all six form fields verbatim plus the vibe-specific tone
    /// instruction; when feedback is present the adjustment request is
    /// appended after the base prompt.
    pub fn plan_prompt(&self, request: &StudyRequest, feedback: Option<&str>) -> Result<String> {
        let template = self.load_template("plan")?;
        let context = PromptContext::new(request, feedback);
        debug!(vibe = %context.vibe, has_feedback = %context.feedback.is_some(), "Rendering plan prompt");

        self.hbs
            .render_template(&template, &context)
            .map_err(|e| eyre!("Failed to render plan prompt: {}", e))
    }

    /// The fixed system instruction sent with every request
    pub fn system_instruction(&self) -> &'static str {
        embedded::SYSTEM_PERSONA
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Vibe;

    fn request() -> StudyRequest {
        StudyRequest {
            semester: "3rd Sem".to_string(),
            subjects: "OS, DSA & C++".to_string(),
            exams: "Next month".to_string(),
            free_time: "2 hours".to_string(),
            goals: "Pass".to_string(),
            vibe: Vibe::Roast,
        }
    }

    #[test]
    fn test_prompt_embeds_fields_verbatim() {
        let builder = PromptBuilder::embedded_only();
        let prompt = builder.plan_prompt(&request(), None).unwrap();

        assert!(prompt.contains("3rd Sem"));
        // Not HTML-escaped despite the ampersand
        assert!(prompt.contains("OS, DSA & C++"));
        assert!(prompt.contains("Next month"));
        assert!(prompt.contains("2 hours"));
        assert!(prompt.contains("Pass"));
    }

    #[test]
    fn test_prompt_tone_matches_vibe() {
        let builder = PromptBuilder::embedded_only();

        for vibe in Vibe::ALL {
            let mut req = request();
            req.vibe = vibe;
            let prompt = builder.plan_prompt(&req, None).unwrap();
            assert!(
                prompt.contains(vibe.tone_instruction()),
                "Prompt for {} should carry its tone instruction",
                vibe
            );
        }
    }

    #[test]
    fn test_prompt_without_feedback_has_no_adjustment() {
        let builder = PromptBuilder::embedded_only();
        let prompt = builder.plan_prompt(&request(), None).unwrap();

        assert!(!prompt.contains("ADJUSTMENT REQUEST"));
    }

    #[test]
    fn test_feedback_appended_after_base_prompt() {
        let builder = PromptBuilder::embedded_only();
        let prompt = builder
            .plan_prompt(&request(), Some("no weekends, more React"))
            .unwrap();

        let base_end = prompt.find("Desired Vibe").unwrap();
        let adjustment = prompt.find("ADJUSTMENT REQUEST").unwrap();
        assert!(adjustment > base_end);
        assert!(prompt.contains("no weekends, more React"));
    }

    #[test]
    fn test_user_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("plan.pmt"), "custom: {{{goals}}}").unwrap();

        let builder = PromptBuilder::with_user_dir(dir.path());
        let prompt = builder.plan_prompt(&request(), None).unwrap();

        assert_eq!(prompt, "custom: Pass");
    }

    #[test]
    fn test_unknown_template_errors() {
        let builder = PromptBuilder::embedded_only();
        assert!(builder.load_template("nonexistent").is_err());
    }
}
