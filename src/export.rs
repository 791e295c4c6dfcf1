//! Markdown export
//!
//! Renders a plan as a standalone Markdown document - the terminal analog of
//! the web app's save-as-PDF button - and writes it under the configured
//! export directory. Used by both the TUI export action and the batch
//! `generate` command.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use eyre::{Context, Result};
use tracing::info;

use crate::plan::StudyPlan;

/// Render a plan as a Markdown document
pub fn to_markdown(plan: &StudyPlan) -> String {
    let mut doc = String::new();

    doc.push_str("# Study Plan\n\n");
    doc.push_str(&format!("> \"{}\"\n\n", plan.roast));
    doc.push_str(&format!("*{}*\n\n", plan.motivational_quote));

    doc.push_str("## Weekly Schedule\n");
    for day in &plan.weekly_schedule {
        doc.push_str(&format!("\n### {} - {}\n\n", day.day, day.theme));
        for task in &day.tasks {
            doc.push_str(&format!("- **{}** {} - {}\n", task.time, task.activity, task.description));
        }
    }

    doc.push_str("\n## Resources\n\n");
    for resource in &plan.resources {
        doc.push_str(&format!("- **{}** ({}) - {}\n", resource.title, resource.kind, resource.description));
    }

    doc.push_str("\n## Career Cheat Codes\n\n");
    doc.push_str(&plan.career_advice);
    doc.push('\n');

    doc
}

/// Write a plan as `study-plan-<timestamp>.md` into the given directory
///
/// Creates the directory if needed; returns the written path.
pub fn write_markdown(plan: &StudyPlan, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).context(format!("Failed to create export directory {}", dir.display()))?;

    let filename = format!("study-plan-{}.md", Local::now().format("%Y%m%d-%H%M%S"));
    let path = dir.join(filename);

    fs::write(&path, to_markdown(plan)).context(format!("Failed to write {}", path.display()))?;

    info!("Exported plan to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> StudyPlan {
        serde_json::from_value(serde_json::json!({
            "roast": "Two hours a day and you want Google? Bold.",
            "motivationalQuote": "Compile errors build character.",
            "weeklySchedule": [{
                "day": "Monday",
                "theme": "Damage Assessment",
                "tasks": [{"time": "20:00", "activity": "OS revision", "description": "Paging, for real"}]
            }],
            "resources": [{"title": "OSTEP", "type": "Book", "description": "Free and good"}],
            "careerAdvice": "Ship one project before polishing the resume."
        }))
        .unwrap()
    }

    #[test]
    fn test_markdown_contains_all_sections() {
        let doc = to_markdown(&plan());

        assert!(doc.contains("Two hours a day and you want Google? Bold."));
        assert!(doc.contains("Compile errors build character."));
        assert!(doc.contains("### Monday - Damage Assessment"));
        assert!(doc.contains("**20:00** OS revision - Paging, for real"));
        assert!(doc.contains("**OSTEP** (Book) - Free and good"));
        assert!(doc.contains("Ship one project before polishing the resume."));
    }

    #[test]
    fn test_markdown_handles_empty_sequences() {
        let empty: StudyPlan = serde_json::from_value(serde_json::json!({
            "roast": "r",
            "motivationalQuote": "q",
            "weeklySchedule": [],
            "resources": [],
            "careerAdvice": "a"
        }))
        .unwrap();

        let doc = to_markdown(&empty);
        assert!(doc.contains("## Weekly Schedule"));
        assert!(doc.contains("## Resources"));
    }

    #[test]
    fn test_write_markdown_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("plans");

        let path = write_markdown(&plan(), &nested).unwrap();

        assert!(path.exists());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Study Plan"));
    }
}
