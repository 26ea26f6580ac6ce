//! Panel trait and event types
//!
//! The Panel trait defines a common interface for UI components that:
//! - Render themselves given the application state and an area
//! - Handle keyboard input and return events
//!
//! This abstraction allows the input line and the stage panel to be
//! treated uniformly by the main App.

use super::app::App;
use crossterm::event::KeyEvent;
use llmwalk_core::WalkthroughController;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Events that can be emitted by panels
///
/// These represent walkthrough mutations that should be applied after
/// handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// Append a character to the input text
    Insert(char),
    /// Delete the last character of the input text
    DeleteBack,
    /// Step the walkthrough forward (or generate at the terminal stage)
    Advance,
    /// Reset the walkthrough to its initial state
    Reset,
    /// Quit the application
    Quit,
}

/// Trait for UI panels
///
/// A panel is a component that:
/// - Knows how to render itself given the application state
/// - Knows how to interpret keyboard input while focused
/// - Emits PanelEvents when user interactions require state changes
pub trait Panel {
    /// Render this panel to the given area
    ///
    /// Rendering sees the whole App: panels draw from the walkthrough state,
    /// the loaded configuration, and the cached preview scores.
    fn render(&self, frame: &mut Frame, area: Rect, app: &App);

    /// Handle a keyboard event and return the resulting event
    ///
    /// Input handling sees only the walkthrough, so the App can delegate to
    /// a panel field while it holds the rest of itself.
    fn handle_key(&mut self, key: KeyEvent, walk: &WalkthroughController) -> Option<PanelEvent>;
}
