//! Walkthrough controller that steps through the stage table
//!
//! The controller owns the walkthrough state (input text, stage position,
//! synthesized output) and exposes the three mutations driven by a frontend:
//! `set_input`, `advance`, and `reset`. Exactly one actor drives the
//! controller; every operation runs to completion before the next.
//!
//! Stage position always satisfies `stage_index < registry.len()`. There is
//! no terminal state: `advance()` at the last stage re-synthesizes the output
//! and stays put, so pressing "Generate Output" repeatedly rolls new output.

use crate::walk::stages::{StageDefinition, StageRegistry};
use crate::walk::synthesis;
use rand::rngs::ThreadRng;
use rand::Rng;

/// The mutable state of one walkthrough session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalkthroughState {
    /// The text being walked through the pipeline
    pub input: String,
    /// Zero-based position in the stage table
    pub stage_index: usize,
    /// Synthesized output; empty until generation has run
    pub output: String,
}

/// What an `advance()` call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved forward one stage; carries the stage now current
    Stepped(StageDefinition),
    /// Already at the terminal stage; carries the freshly synthesized output
    Generated(String),
}

/// Drives a walkthrough over a stage registry
///
/// Generic over the randomness source so tests can inject a seeded
/// generator; the default is the thread-local generator.
pub struct WalkthroughController<R: Rng = ThreadRng> {
    registry: StageRegistry,
    state: WalkthroughState,
    rng: R,
}

impl WalkthroughController<ThreadRng> {
    /// Create a controller over the standard stage table
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for WalkthroughController<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WalkthroughController<R> {
    /// Create a controller over the standard stage table with a caller-supplied
    /// randomness source
    pub fn with_rng(rng: R) -> Self {
        Self::with_registry(StageRegistry::with_defaults(), rng)
    }

    /// Create a controller over a custom registry
    pub fn with_registry(registry: StageRegistry, rng: R) -> Self {
        WalkthroughController {
            registry,
            state: WalkthroughState::default(),
            rng,
        }
    }

    /// Replace the input text.
    ///
    /// Stage position and any previously synthesized output are left alone:
    /// editing mid-walkthrough is allowed, and stale output stays visible
    /// until the next generation or reset.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.input = text.into();
    }

    /// Step forward one stage, or synthesize output at the terminal stage.
    ///
    /// Below the terminal stage this increments the position by exactly one.
    /// At the terminal stage the position is unchanged and the output is
    /// re-synthesized from the current input, so repeated calls roll new
    /// output values.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.state.stage_index < self.registry.last_index() {
            self.state.stage_index += 1;
            AdvanceOutcome::Stepped(self.current_stage().clone())
        } else {
            let output = synthesis::synthesize(&self.state.input, &mut self.rng);
            self.state.output = output.clone();
            AdvanceOutcome::Generated(output)
        }
    }

    /// Return to the initial state: empty input, empty output, first stage
    pub fn reset(&mut self) {
        self.state = WalkthroughState::default();
    }

    /// The stage at the current position
    pub fn current_stage(&self) -> &StageDefinition {
        // stage_index stays below registry.len() through every mutation
        self.registry
            .get(self.state.stage_index)
            .expect("stage index within registry bounds")
    }

    /// The current input text
    pub fn current_input(&self) -> &str {
        &self.state.input
    }

    /// The synthesized output, empty before generation
    pub fn current_output(&self) -> &str {
        &self.state.output
    }

    /// Zero-based position in the stage table
    pub fn stage_index(&self) -> usize {
        self.state.stage_index
    }

    /// Whether the walkthrough sits at the terminal stage
    ///
    /// Frontends switch their action label ("Next Step" vs "Generate
    /// Output") on this.
    pub fn at_final_stage(&self) -> bool {
        self.state.stage_index == self.registry.last_index()
    }

    /// The registry this controller walks
    pub fn registry(&self) -> &StageRegistry {
        &self.registry
    }

    /// The whole session state, for frontends that poll
    pub fn state(&self) -> &WalkthroughState {
        &self.state
    }
}
