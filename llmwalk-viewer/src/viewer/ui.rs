//! UI rendering logic
//!
//! Handles layout and rendering of the application using Ratatui.
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Input line (3 lines with border, fixed)
//! - Stage section (responsive height, bordered)
//! - Status line (1 line, fixed)

use super::app::{App, Focus};
use super::panel::Panel;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 50;
/// Height of the bordered input line
const INPUT_HEIGHT: u16 = 3;
/// Height of the status line
const STATUS_LINE_HEIGHT: u16 = 1;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Check minimum width
    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    // Split layout vertically: title, input, stage section, status line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                  // Title bar
            Constraint::Length(INPUT_HEIGHT),       // Input line
            Constraint::Min(1),                     // Stage section
            Constraint::Length(STATUS_LINE_HEIGHT), // Status line
        ])
        .split(size);

    render_title_bar(frame, chunks[0]);
    render_input_section(frame, chunks[1], app);
    render_stage_section(frame, chunks[2], app);
    render_status_line(frame, chunks[3], app);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = "llmwalk :: Large Language Model Simulator";
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_input_section(frame: &mut Frame, area: Rect, app: &App) {
    let focus_indicator = if app.focus == Focus::Input {
        " [FOCUSED]"
    } else {
        ""
    };

    let title = format!("Input Text{}", focus_indicator);
    let block = Block::default().borders(Borders::ALL).title(title);

    // Get inner area for content (inside the border)
    let inner_area = block.inner(area);

    // Render the border
    frame.render_widget(block, area);

    // Render the input panel's content
    app.input_panel.render(frame, inner_area, app);
}

fn render_stage_section(frame: &mut Frame, area: Rect, app: &App) {
    let focus_indicator = if app.focus == Focus::Pipeline {
        " [FOCUSED]"
    } else {
        ""
    };

    let title = format!("Pipeline{}", focus_indicator);
    let block = Block::default().borders(Borders::ALL).title(title);

    // Get inner area for content (inside the border)
    let inner_area = block.inner(area);

    // Render the border
    frame.render_widget(block, area);

    // Render the stage panel's content
    app.stage_panel.render(frame, inner_area, app);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    // The action label follows the walkthrough position, mirroring the
    // single button of the original walkthrough
    let action = if app.walk.at_final_stage() {
        "Generate Output"
    } else {
        "Next Step"
    };

    let mut spans = vec![
        Span::styled(
            format!("Enter: {}", action),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled("Tab: ", Style::default().fg(Color::Yellow)),
        Span::raw("switch focus"),
    ];

    match app.focus {
        Focus::Input => {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw("type to edit input"));
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("Ctrl-C: ", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw("quit"));
        }
        Focus::Pipeline => {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("n: ", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw("advance"));
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("r: ", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw("Reset"));
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("q: ", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw("quit"));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
