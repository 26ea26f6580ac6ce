//! # llmwalk-core
//!
//! Walkthrough engine for the llmwalk pipeline simulator.
//!
//! The crate models a guided tour through the conceptual stages a large
//! language model runs when it turns text input into text output. Nothing
//! here does real inference: the stages are a fixed, ordered table of
//! illustrations, and the "generated" output is a random resampling of the
//! input's own words.
//!
//! The pieces:
//!   - `walk::stages` — the stage table and its registry
//!   - `walk::controller` — the state machine that steps through the table
//!   - `walk::synthesis` — the output resampler run at the terminal stage
//!   - `walk::lexing` — the word lexer shared by synthesis and frontends
//!
//! Frontends (the `llmwalkv` terminal viewer, the `llmwalk` CLI) drive a
//! [`walk::controller::WalkthroughController`] and render its state. The
//! engine itself performs no I/O and draws randomness only through an
//! injected `rand::Rng`.

pub mod walk;

pub use walk::{
    synthesize, tokenize, tokenize_with_spans, words, AdvanceOutcome, RegistryError,
    StageDefinition, StageRegistry, Token, VisualizationKind, WalkthroughController,
    WalkthroughState, MAX_EXTRA_WORDS, STANDARD_STAGES,
};
