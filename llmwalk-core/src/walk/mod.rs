//! Main module for the walkthrough engine

pub mod controller;
pub mod lexing;
pub mod stages;
pub mod synthesis;

pub use controller::{AdvanceOutcome, WalkthroughController, WalkthroughState};
pub use lexing::{tokenize, tokenize_with_spans, words, Token};
pub use stages::{
    RegistryError, StageDefinition, StageRegistry, VisualizationKind, STANDARD_STAGES,
};
pub use synthesis::{synthesize, MAX_EXTRA_WORDS};
