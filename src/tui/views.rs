//! TUI views and rendering

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::plan::{StudyPlan, Vibe};
use crate::session::{Phase, PlannerSession};

use super::state::{AppState, FormField};

/// Busy label shown on the submit control while the initial request runs
const SUBMIT_BUSY_LABEL: &str = "Generating Miracles...";

/// Busy label shown while a revision request runs
const REGEN_BUSY_LABEL: &str = "Tweaking...";

/// Main render function
pub fn render(session: &PlannerSession, state: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);

    match session.phase() {
        Phase::Idle | Phase::Submitting => render_form(session, state, frame, chunks[1]),
        Phase::Displaying | Phase::Regenerating => render_plan(session, state, frame, chunks[1]),
    }

    render_footer(session, state, frame, chunks[2]);

    if state.show_feedback {
        render_feedback_box(state, frame);
    }

    if let Some(toast) = &state.toast {
        render_toast(&toast.text, frame);
    }
}

/// Render the header bar
fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Panic Planner", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled("v1.0.0 // CS_STUDENT_SAVER_BOT", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            "For students who have 100 backlog videos and 0 motivation.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the form screen
fn render_form(session: &PlannerSession, state: &AppState, frame: &mut Frame, area: Rect) {
    let mut constraints = Vec::new();
    if session.error().is_some() {
        constraints.push(Constraint::Length(3)); // Error banner
    }
    for _ in FormField::ORDER {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1)); // Hint line
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut idx = 0;
    if let Some(error) = session.error() {
        let banner = Paragraph::new(Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Red)));
        frame.render_widget(banner, chunks[idx]);
        idx += 1;
    }

    for field in FormField::ORDER {
        match field {
            FormField::Vibe => render_vibe_row(state, frame, chunks[idx]),
            FormField::Submit => render_submit_row(session, state, frame, chunks[idx]),
            _ => render_text_field(state, field, frame, chunks[idx]),
        }
        idx += 1;
    }

    if let Some(hint) = &state.form_hint {
        let hint_line = Paragraph::new(Line::from(Span::styled(hint.as_str(), Style::default().fg(Color::Yellow))));
        frame.render_widget(hint_line, chunks[idx]);
    }
}

/// Render one text input row
fn render_text_field(state: &AppState, field: FormField, frame: &mut Frame, area: Rect) {
    let focused = state.focus == field;
    let value = state.draft.text(field).unwrap_or("");

    let content = if value.is_empty() {
        Line::from(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
    } else if focused {
        // Trailing cursor marks the append point
        Line::from(vec![Span::raw(value), Span::styled("_", Style::default().fg(Color::Cyan))])
    } else {
        Line::from(Span::raw(value))
    };

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", field.label())),
    );
    frame.render_widget(input, area);
}

/// Render the three-way vibe selector
fn render_vibe_row(state: &AppState, frame: &mut Frame, area: Rect) {
    let focused = state.focus == FormField::Vibe;

    let mut spans = Vec::new();
    for vibe in Vibe::ALL {
        let color = match vibe {
            Vibe::Chill => Color::Green,
            Vibe::Hardcore => Color::Red,
            Vibe::Roast => Color::Yellow,
        };
        let selected = state.draft.vibe == vibe;
        let style = if selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", vibe.label()), style));
        spans.push(Span::raw("  "));
    }

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let selector = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", FormField::Vibe.label())),
    );
    frame.render_widget(selector, area);
}

/// Render the submit row, busy while the request is in flight
fn render_submit_row(session: &PlannerSession, state: &AppState, frame: &mut Frame, area: Rect) {
    let focused = state.focus == FormField::Submit;
    let busy = session.phase() == Phase::Submitting;

    let (label, style) = if busy {
        (SUBMIT_BUSY_LABEL, Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
    } else if focused {
        (FormField::Submit.label(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::REVERSED))
    } else {
        (FormField::Submit.label(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    };

    let border_style = if focused && !busy {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let submit = Paragraph::new(Line::from(Span::styled(label, style)))
        .centered()
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(submit, area);
}

/// Render the plan screen
fn render_plan(session: &PlannerSession, state: &AppState, frame: &mut Frame, area: Rect) {
    let Some(plan) = session.plan() else {
        // Unreachable in practice: the phase implies a plan is stored
        frame.render_widget(Paragraph::new("No plan yet"), area);
        return;
    };

    let title = if session.phase() == Phase::Regenerating {
        format!(" Study Plan ({}) ", REGEN_BUSY_LABEL)
    } else {
        " Study Plan ".to_string()
    };

    let content = Paragraph::new(plan_lines(plan))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((state.plan_scroll, 0));

    frame.render_widget(content, area);
}

/// Build the display lines for a plan
fn plan_lines(plan: &StudyPlan) -> Vec<Line<'_>> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "REALITY CHECK",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("\"{}\"", plan.roast),
        Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!("* {} *", plan.motivational_quote),
        Style::default().fg(Color::Yellow),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "The \"Get Your Life Together\" Schedule",
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));
    for day in &plan.weekly_schedule {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(day.day.as_str(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(format!("[{}]", day.theme), Style::default().fg(Color::Magenta)),
        ]));
        for task in &day.tasks {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<8}", task.time), Style::default().fg(Color::DarkGray)),
                Span::styled(task.activity.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("           {}", task.description),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Career Cheat Codes",
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));
    lines.push(Line::from(plan.career_advice.as_str()));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Loot Box",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));
    for resource in &plan.resources {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", resource.title), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" [{}]", resource.kind), Style::default().fg(Color::Green)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", resource.description),
            Style::default().fg(Color::Gray),
        )));
    }

    lines
}

/// Render the footer bar with keybindings for the active screen
fn render_footer(session: &PlannerSession, state: &AppState, frame: &mut Frame, area: Rect) {
    let text = match session.phase() {
        Phase::Idle => "Tab/Down next | Shift+Tab/Up prev | Left/Right vibe | Enter submit | Esc quit".to_string(),
        Phase::Submitting => format!("{}  (hang tight)", SUBMIT_BUSY_LABEL),
        Phase::Displaying if state.show_feedback => "Enter apply | Esc cancel".to_string(),
        Phase::Displaying => "t tweak plan | s save markdown | r restart | j/k scroll | q quit".to_string(),
        Phase::Regenerating => format!("{}  | j/k scroll", REGEN_BUSY_LABEL),
    };

    let footer = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(Color::DarkGray))))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Render the feedback box overlay
fn render_feedback_box(state: &AppState, frame: &mut Frame) {
    let area = centered_rect(60, 7, frame.area());
    frame.render_widget(Clear, area);

    let content = if state.feedback_draft.is_empty() {
        vec![
            Line::from(Span::styled(
                "e.g. 'I actually don't study on weekends' or 'I want more React practice'",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled("Enter apply | Esc cancel", Style::default().fg(Color::DarkGray))),
        ]
    } else {
        vec![
            Line::from(vec![
                Span::raw(state.feedback_draft.as_str()),
                Span::styled("_", Style::default().fg(Color::Cyan)),
            ]),
            Line::from(""),
            Line::from(Span::styled("Enter apply | Esc cancel", Style::default().fg(Color::DarkGray))),
        ]
    };

    let popup = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" What do you want to change? "),
    );
    frame.render_widget(popup, area);
}

/// Render an ephemeral toast near the bottom of the screen
fn render_toast(text: &str, frame: &mut Frame) {
    let frame_area = frame.area();
    let width = (text.len() as u16 + 4).min(frame_area.width);
    let area = Rect {
        x: frame_area.width.saturating_sub(width + 1),
        y: frame_area.height.saturating_sub(6),
        width,
        height: 3,
    };

    frame.render_widget(Clear, area);
    let toast = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(Color::Red))))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Red)));
    frame.render_widget(toast, area);
}

/// Centered rect helper for overlays
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
