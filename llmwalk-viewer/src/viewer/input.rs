//! Input panel - edits the walkthrough input text
//!
//! A single-line prompt: printable characters append, backspace deletes.
//! The panel holds no text of its own; the walkthrough controller owns the
//! input, and the panel emits edit events the App applies through
//! `set_input`.

use super::app::App;
use super::panel::{Panel, PanelEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use llmwalk_core::WalkthroughController;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Placeholder shown while the input is empty
const PLACEHOLDER: &str = "Enter your text here";

#[derive(Debug, Default)]
pub struct InputPanel;

impl InputPanel {
    pub fn new() -> Self {
        InputPanel
    }
}

impl Panel for InputPanel {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let input = app.walk.current_input();

        let line = if input.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            let mut spans = vec![Span::raw(input.to_string())];
            if app.focus == super::app::Focus::Input {
                spans.push(Span::styled(
                    "█",
                    Style::default().fg(Color::Cyan),
                ));
            }
            Line::from(spans)
        };

        frame.render_widget(Paragraph::new(line), area);
    }

    fn handle_key(&mut self, key: KeyEvent, _walk: &WalkthroughController) -> Option<PanelEvent> {
        match key.code {
            KeyCode::Char(ch)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                Some(PanelEvent::Insert(ch))
            }
            KeyCode::Backspace => Some(PanelEvent::DeleteBack),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_printable_chars_insert() {
        let mut panel = InputPanel::new();
        let walk = WalkthroughController::new();

        assert_eq!(
            panel.handle_key(key(KeyCode::Char('h')), &walk),
            Some(PanelEvent::Insert('h'))
        );
    }

    #[test]
    fn test_shifted_chars_insert() {
        let mut panel = InputPanel::new();
        let walk = WalkthroughController::new();

        let shifted = KeyEvent::new(KeyCode::Char('H'), KeyModifiers::SHIFT);
        assert_eq!(
            panel.handle_key(shifted, &walk),
            Some(PanelEvent::Insert('H'))
        );
    }

    #[test]
    fn test_backspace_deletes() {
        let mut panel = InputPanel::new();
        let walk = WalkthroughController::new();

        assert_eq!(
            panel.handle_key(key(KeyCode::Backspace), &walk),
            Some(PanelEvent::DeleteBack)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut panel = InputPanel::new();
        let walk = WalkthroughController::new();

        assert_eq!(panel.handle_key(key(KeyCode::Up), &walk), None);
        assert_eq!(panel.handle_key(key(KeyCode::Esc), &walk), None);
    }
}
