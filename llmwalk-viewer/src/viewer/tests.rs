//! Test infrastructure for the llmwalk viewer
//!
//! Provides utilities for testing the full application including:
//! - TestApp: wrapper for testing the application over a test backend
//! - Keyboard helpers: easy creation of keyboard events
//! - Render helpers: getting and verifying UI output

use super::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::{Backend, TestBackend};
use ratatui::Terminal;

/// Test application wrapper with test backend
pub struct TestApp {
    app: App,
    terminal: Terminal<TestBackend>,
}

impl TestApp {
    /// Create a new test app with no initial input
    pub fn new() -> Self {
        Self::with_input(None)
    }

    /// Create a test app seeded with input text
    pub fn with_text(text: &str) -> Self {
        Self::with_input(Some(text.to_string()))
    }

    fn with_input(initial_text: Option<String>) -> Self {
        let config = llmwalk_config::load_defaults().expect("defaults to load");
        let app = App::new(config, initial_text);

        // Create terminal with reasonable default size (80x24)
        let backend = TestBackend::new(80, 24);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");

        TestApp { app, terminal }
    }

    /// Send a keyboard event and return the rendered output
    pub fn send_key(&mut self, code: KeyCode) -> String {
        self.send_key_with_modifiers(code, KeyModifiers::empty())
    }

    /// Send a keyboard event with modifiers and return the rendered output
    pub fn send_key_with_modifiers(&mut self, code: KeyCode, modifiers: KeyModifiers) -> String {
        let key = KeyEvent::new(code, modifiers);
        let _ = self.app.handle_key(key);
        self.render()
    }

    /// Type a string through the input panel
    pub fn type_text(&mut self, text: &str) -> String {
        for ch in text.chars() {
            let _ = self.app.handle_key(KeyEvent::new(
                KeyCode::Char(ch),
                KeyModifiers::empty(),
            ));
        }
        self.render()
    }

    /// Render the current application state and return output
    pub fn render(&mut self) -> String {
        use super::ui;

        self.terminal
            .draw(|frame| {
                ui::render(frame, &self.app);
            })
            .expect("Failed to draw");

        self.terminal_output()
    }

    /// Get the current terminal output as a string
    fn terminal_output(&self) -> String {
        let backend = self.terminal.backend();
        let (width, height) = (
            backend.size().unwrap().width,
            backend.size().unwrap().height,
        );
        let mut output = String::new();

        for y in 0..height {
            for x in 0..width {
                if let Some(cell) = backend.buffer().cell((x, y)) {
                    output.push_str(cell.symbol());
                } else {
                    output.push(' ');
                }
            }
            output.push('\n');
        }

        output
    }

    /// Get reference to the app for assertions
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Check if the input panel is focused
    pub fn is_input_focused(&self) -> bool {
        self.app.focus == Focus::Input
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.app.should_quit
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_initial_render_shows_first_stage() {
    let mut app = TestApp::new();
    let output = app.render();

    assert!(output.contains("llmwalk :: Large Language Model Simulator"));
    assert!(output.contains("Tokenization"));
    assert!(output.contains("Next Step"));
    assert!(app.is_input_focused());
}

#[test]
fn test_typing_edits_input() {
    let mut app = TestApp::new();
    let output = app.type_text("hello world");

    assert_eq!(app.app().walk.current_input(), "hello world");
    assert!(output.contains("hello world"));
}

#[test]
fn test_backspace_removes_characters() {
    let mut app = TestApp::with_text("hi");
    app.send_key(KeyCode::Backspace);

    assert_eq!(app.app().walk.current_input(), "h");
}

#[test]
fn test_token_chips_appear_on_first_stage() {
    let mut app = TestApp::with_text("hello world");
    let output = app.render();

    assert!(output.contains(" hello "));
    assert!(output.contains(" world "));
}

#[test]
fn test_enter_advances_through_stages() {
    let mut app = TestApp::with_text("hello world");

    let output = app.send_key(KeyCode::Enter);
    assert_eq!(app.app().walk.stage_index(), 1);
    assert!(output.contains("Embedding"));
    assert!(output.contains("[0.2, -0.5, 0.8, ...]"));
}

#[test]
fn test_terminal_stage_switches_action_label() {
    let mut app = TestApp::with_text("hello world");

    let mut output = String::new();
    for _ in 0..4 {
        output = app.send_key(KeyCode::Enter);
    }

    assert_eq!(app.app().walk.stage_index(), 4);
    assert!(app.app().walk.at_final_stage());
    assert!(output.contains("Generate Output"));
    assert!(!output.contains("Next Step"));
}

#[test]
fn test_generation_renders_output_words() {
    let mut app = TestApp::with_text("hello world");

    let mut output = String::new();
    for _ in 0..5 {
        output = app.send_key(KeyCode::Enter);
    }

    let generated = app.app().walk.current_output().to_string();
    assert!(!generated.is_empty());
    for word in generated.split_whitespace() {
        assert!(word == "hello" || word == "world");
        assert!(output.contains(word));
    }
}

#[test]
fn test_network_diagram_on_feed_forward_stage() {
    let mut app = TestApp::with_text("hello");

    let mut output = String::new();
    for _ in 0..3 {
        output = app.send_key(KeyCode::Enter);
    }

    assert!(output.contains("Feed Forward"));
    assert!(output.contains("Hidden"));
}

#[test]
fn test_tab_moves_focus_to_pipeline() {
    let mut app = TestApp::new();
    let output = app.send_key(KeyCode::Tab);

    assert!(!app.is_input_focused());
    assert!(output.contains("Pipeline [FOCUSED]"));
}

#[test]
fn test_pipeline_keys_only_work_when_focused() {
    let mut app = TestApp::with_text("hello");

    // While the input has focus, 'n' types rather than advancing
    app.send_key(KeyCode::Char('n'));
    assert_eq!(app.app().walk.stage_index(), 0);
    assert_eq!(app.app().walk.current_input(), "hellon");

    // After Tab, 'n' advances
    app.send_key(KeyCode::Tab);
    app.send_key(KeyCode::Char('n'));
    assert_eq!(app.app().walk.stage_index(), 1);
}

#[test]
fn test_reset_key_restores_initial_state() {
    let mut app = TestApp::with_text("hello world");
    for _ in 0..5 {
        app.send_key(KeyCode::Enter);
    }

    app.send_key(KeyCode::Tab);
    let output = app.send_key(KeyCode::Char('r'));

    assert_eq!(app.app().walk.stage_index(), 0);
    assert_eq!(app.app().walk.current_input(), "");
    assert_eq!(app.app().walk.current_output(), "");
    assert!(output.contains("Tokenization"));
}

#[test]
fn test_quit_keys() {
    let mut app = TestApp::new();
    app.send_key(KeyCode::Tab);
    app.send_key(KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = TestApp::new();
    app.send_key_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.should_quit());
}

#[test]
fn test_empty_input_shows_hint() {
    let mut app = TestApp::new();
    let output = app.render();

    assert!(output.contains("Type input text to see this stage illustrated"));
}

#[test]
fn test_narrow_terminal_shows_error() {
    let config = llmwalk_config::load_defaults().expect("defaults to load");
    let app = App::new(config, None);
    let backend = TestBackend::new(30, 10);
    let mut terminal = Terminal::new(backend).expect("Failed to create terminal");

    terminal
        .draw(|frame| super::ui::render(frame, &app))
        .expect("Failed to draw");

    let mut output = String::new();
    for y in 0..10u16 {
        for x in 0..30u16 {
            if let Some(cell) = terminal.backend().buffer().cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }
    assert!(output.contains("Terminal too narrow"));
}
