//! Stage panel - the stage strip and the current stage's body
//!
//! The strip shows all five stages with the current one highlighted and
//! completed ones marked; the body shows the current stage's name,
//! description, and illustration. Keyboard input while the pipeline has
//! focus drives the walkthrough: `n` advances, `r` resets, `q` quits.

use super::app::App;
use super::panel::{Panel, PanelEvent};
use super::preview;
use crossterm::event::{KeyCode, KeyEvent};
use llmwalk_core::WalkthroughController;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

#[derive(Debug, Default)]
pub struct StagePanel;

impl StagePanel {
    pub fn new() -> Self {
        StagePanel
    }

    /// Build the stage strip line
    fn strip_line(app: &App) -> Line<'static> {
        let current = app.walk.stage_index();
        let mut spans = Vec::new();

        for (i, stage) in app.walk.registry().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" → ", Style::default().fg(Color::DarkGray)));
            }

            let label = format!("{} {}", i + 1, stage.name);
            let style = if i == current {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if i < current {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(label, style));
        }

        Line::from(spans)
    }
}

impl Panel for StagePanel {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Stage strip
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Stage name
                Constraint::Length(3), // Description (wrapped)
                Constraint::Min(1),    // Illustration
            ])
            .split(area);

        frame.render_widget(Paragraph::new(Self::strip_line(app)), chunks[0]);

        let stage = app.walk.current_stage();
        let name = Line::from(Span::styled(
            stage.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(name), chunks[2]);

        let description = Paragraph::new(stage.description.clone()).wrap(Wrap { trim: true });
        frame.render_widget(description, chunks[3]);

        let illustration = preview::for_stage(
            stage.visualization,
            app.walk.current_input(),
            app.walk.current_output(),
            app.attention(),
            &app.config.preview,
        );
        frame.render_widget(Paragraph::new(illustration).wrap(Wrap { trim: false }), chunks[4]);
    }

    fn handle_key(&mut self, key: KeyEvent, _walk: &WalkthroughController) -> Option<PanelEvent> {
        if !key.modifiers.is_empty() {
            return None;
        }
        match key.code {
            KeyCode::Char('n') => Some(PanelEvent::Advance),
            KeyCode::Char('r') => Some(PanelEvent::Reset),
            KeyCode::Char('q') => Some(PanelEvent::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn app() -> App {
        let config = llmwalk_config::load_defaults().expect("defaults to load");
        App::new(config, None)
    }

    #[test]
    fn test_pipeline_keys() {
        let mut panel = StagePanel::new();
        let walk = WalkthroughController::new();

        assert_eq!(
            panel.handle_key(key(KeyCode::Char('n')), &walk),
            Some(PanelEvent::Advance)
        );
        assert_eq!(
            panel.handle_key(key(KeyCode::Char('r')), &walk),
            Some(PanelEvent::Reset)
        );
        assert_eq!(
            panel.handle_key(key(KeyCode::Char('q')), &walk),
            Some(PanelEvent::Quit)
        );
        assert_eq!(panel.handle_key(key(KeyCode::Char('x')), &walk), None);
    }

    #[test]
    fn test_strip_marks_current_stage() {
        let mut app = app();
        app.walk.advance();

        let line = StagePanel::strip_line(&app);
        let text: String = line
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert!(text.contains("1 Tokenization"));
        assert!(text.contains("2 Embedding"));
        assert!(text.contains("5 Output Generation"));
    }
}
