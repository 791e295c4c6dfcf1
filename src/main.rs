//! Panic Planner - AI study-plan generator
//!
//! CLI entry point: launches the TUI by default, or runs a single
//! generation round-trip in batch mode.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use panic_planner::cli::{Cli, Command, get_log_path};
use panic_planner::config::Config;
use panic_planner::export;
use panic_planner::llm::{self, GenerationRequest};
use panic_planner::plan::{StudyRequest, Vibe, schema};
use panic_planner::prompts::PromptBuilder;
use panic_planner::tui;

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("panic-planner")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Setup tracing subscriber - write to log file, not stdout (the TUI owns it)
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("panic-planner.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!(
        "Panic Planner loaded config: provider={}, model={}",
        config.llm.provider, config.llm.model
    );

    match cli.command {
        None | Some(Command::Tui) => tui::run(&config).await,
        Some(Command::Generate {
            semester,
            subjects,
            exams,
            free_time,
            goals,
            vibe,
            output,
        }) => {
            let request = StudyRequest {
                semester,
                subjects,
                exams,
                free_time,
                goals,
                vibe,
            };
            cmd_generate(&config, request, output).await
        }
        Some(Command::Logs { follow, lines }) => cmd_logs(follow, lines).await,
    }
}

/// Run one generation round-trip and print or write the plan as Markdown
async fn cmd_generate(config: &Config, request: StudyRequest, output: Option<PathBuf>) -> Result<()> {
    // The form's presence validation, applied to the flags
    if !request.is_complete() {
        return Err(eyre::eyre!("All fields are required and must be non-empty"));
    }

    let client = llm::create_client(&config.llm)?;
    let prompts = PromptBuilder::new();

    let prompt = prompts.plan_prompt(&request, None)?;
    let generation_request = GenerationRequest {
        prompt,
        system_instruction: prompts.system_instruction().to_string(),
        schema: schema::response_schema(),
    };

    println!("{}", "Summoning your study plan...".bright_cyan());
    println!("  Vibe: {}", vibe_line(request.vibe));
    println!();

    match client.generate(generation_request).await {
        Ok(plan) => {
            let markdown = export::to_markdown(&plan);
            match output {
                Some(path) => {
                    fs::write(&path, markdown).context(format!("Failed to write {}", path.display()))?;
                    println!("{} Plan written to {}", "ok:".bright_green(), path.display());
                }
                None => {
                    print!("{}", markdown);
                }
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "cmd_generate: generation failed");
            println!(
                "{} The AI is overwhelmed by your life choices (or the API failed). Try again.",
                "error:".bright_red()
            );
            std::process::exit(1);
        }
    }
}

fn vibe_line(vibe: Vibe) -> String {
    format!("{} ({})", vibe.label(), vibe.tone_instruction())
}

/// Show logs
async fn cmd_logs(follow: bool, lines: usize) -> Result<()> {
    let log_path = get_log_path();

    if !log_path.exists() {
        println!("No log file found at: {}", log_path.display());
        println!("The app may not have been run yet.");
        return Ok(());
    }

    if follow {
        println!("Following log file: {} (Ctrl+C to stop)", log_path.display());
        println!();

        // Use tail -f for following
        let mut child = std::process::Command::new("tail")
            .args(["-f", "-n", &lines.to_string()])
            .arg(&log_path)
            .spawn()
            .context("Failed to run tail -f")?;

        child.wait()?;
    } else {
        // Read last N lines
        let file = fs::File::open(&log_path).context("Failed to open log file")?;
        let reader = BufReader::new(file);
        let all_lines: Vec<String> = reader.lines().map_while(Result::ok).collect();

        let start = if all_lines.len() > lines { all_lines.len() - lines } else { 0 };

        for line in &all_lines[start..] {
            println!("{}", line);
        }
    }

    Ok(())
}
