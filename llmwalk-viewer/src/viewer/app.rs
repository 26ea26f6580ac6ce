//! Main application state and event handling
//!
//! The App struct brings together:
//! - WalkthroughController (the walkthrough state)
//! - InputPanel and StagePanel (the UI components)
//! - Focus management (which panel has keyboard focus)
//! - Global key handling (quit, focus switching, delegating to panels)
//!
//! Attention preview scores live here rather than in the render path: the
//! terminal redraws every tick, and drawing fresh random scores per frame
//! would flicker. Scores are refreshed whenever the input changes or the
//! walkthrough resets.

use super::input::InputPanel;
use super::panel::{Panel, PanelEvent};
use super::stagepanel::StagePanel;
use crossterm::event::KeyEvent;
use llmwalk_config::WalkConfig;
use llmwalk_core::{words, WalkthroughController};
use rand::rngs::ThreadRng;
use rand::Rng;

/// Which panel currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Pipeline,
}

impl Focus {
    /// The other focus
    pub fn toggle(self) -> Self {
        match self {
            Focus::Input => Focus::Pipeline,
            Focus::Pipeline => Focus::Input,
        }
    }
}

/// The main application
pub struct App {
    /// The walkthrough state machine
    pub walk: WalkthroughController,

    /// Input panel (edits the walkthrough input)
    pub input_panel: InputPanel,

    /// Stage panel (stage strip and per-stage illustration)
    pub stage_panel: StagePanel,

    /// Which panel currently has focus
    pub focus: Focus,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Loaded configuration
    pub config: WalkConfig,

    /// Cached attention preview scores, one per shown word
    attention: Vec<f64>,

    rng: ThreadRng,
}

impl App {
    /// Create a new application, optionally seeded with initial input text
    pub fn new(config: WalkConfig, initial_text: Option<String>) -> Self {
        let mut app = App {
            walk: WalkthroughController::new(),
            input_panel: InputPanel::new(),
            stage_panel: StagePanel::new(),
            focus: Focus::default(),
            should_quit: false,
            config,
            attention: Vec::new(),
            rng: rand::thread_rng(),
        };
        if let Some(text) = initial_text {
            app.walk.set_input(text);
            app.refresh_attention();
        }
        app
    }

    /// Toggle focus between panels
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// The cached attention preview scores
    pub fn attention(&self) -> &[f64] {
        &self.attention
    }

    /// Handle a keyboard event
    ///
    /// Returns whether the state changed (needed for re-rendering)
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        use crossterm::event::{KeyCode, KeyModifiers};

        // Global keys work regardless of focus
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return true;
            }
            KeyCode::Tab => {
                self.toggle_focus();
                return true;
            }
            KeyCode::Enter => {
                return self.process_panel_event(PanelEvent::Advance);
            }
            _ => {}
        }

        // Delegate to the focused panel
        let event = match self.focus {
            Focus::Input => self.input_panel.handle_key(key, &self.walk),
            Focus::Pipeline => self.stage_panel.handle_key(key, &self.walk),
        };

        if let Some(event) = event {
            self.process_panel_event(event)
        } else {
            false
        }
    }

    /// Process a panel event and update the walkthrough
    fn process_panel_event(&mut self, event: PanelEvent) -> bool {
        match event {
            PanelEvent::Insert(ch) => {
                let mut text = self.walk.current_input().to_string();
                text.push(ch);
                self.walk.set_input(text);
                self.refresh_attention();
                true
            }
            PanelEvent::DeleteBack => {
                let mut text = self.walk.current_input().to_string();
                text.pop();
                self.walk.set_input(text);
                self.refresh_attention();
                true
            }
            PanelEvent::Advance => {
                self.walk.advance();
                true
            }
            PanelEvent::Reset => {
                self.walk.reset();
                self.refresh_attention();
                true
            }
            PanelEvent::Quit => {
                self.should_quit = true;
                true
            }
        }
    }

    /// Redraw the attention preview scores for the current input
    fn refresh_attention(&mut self) {
        let shown = words(self.walk.current_input())
            .len()
            .min(self.config.preview.max_words);
        self.attention = (0..shown).map(|_| self.rng.gen_range(0.5..1.0)).collect();
    }
}
