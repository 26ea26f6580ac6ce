//! Stage definitions for the walkthrough pipeline
//!
//! This module defines the ordered table of conceptual stages the
//! walkthrough steps through, and the registry that serves them to the
//! controller and to frontends. The table is fixed for the lifetime of the
//! process; stages carry a visualization kind so frontends can pick an
//! illustration without the engine knowing anything about rendering.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

/// How a frontend should illustrate a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualizationKind {
    /// The input split into word tokens
    Tokens,

    /// A placeholder embedding vector per token
    VectorPlaceholders,

    /// An illustrative attention score per token
    AttentionScores,

    /// A static network-layer diagram
    NetworkDiagram,

    /// The synthesized output text
    FinalOutput,
}

/// A named stage in the walkthrough pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageDefinition {
    pub name: String,
    pub description: String,
    pub visualization: VisualizationKind,
}

/// Errors during registry construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A walkthrough needs at least one stage
    Empty,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Empty => write!(f, "Stage table must contain at least one stage"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Ordered, immutable registry of walkthrough stages
///
/// Non-empty by construction: `from_stages` rejects an empty table, so every
/// registry has a first and a last stage.
#[derive(Debug, Clone)]
pub struct StageRegistry {
    stages: Vec<StageDefinition>,
}

impl StageRegistry {
    /// Create a registry from an ordered stage list
    ///
    /// Fails with [`RegistryError::Empty`] when the list is empty.
    pub fn from_stages(stages: Vec<StageDefinition>) -> Result<Self, RegistryError> {
        if stages.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(StageRegistry { stages })
    }

    /// Create a registry with the standard five-stage pipeline
    pub fn with_defaults() -> Self {
        StageRegistry {
            stages: standard_stage_table(),
        }
    }

    /// Get a stage by index
    pub fn get(&self, index: usize) -> Option<&StageDefinition> {
        self.stages.get(index)
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false: registries are non-empty by construction
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Index of the terminal stage
    pub fn last_index(&self) -> usize {
        self.stages.len() - 1
    }

    /// Iterate stages in pipeline order
    pub fn iter(&self) -> impl Iterator<Item = &StageDefinition> {
        self.stages.iter()
    }
}

impl Default for StageRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// The standard pipeline table shared across the process
pub static STANDARD_STAGES: Lazy<StageRegistry> = Lazy::new(StageRegistry::with_defaults);

/// Build the standard five-stage table
fn standard_stage_table() -> Vec<StageDefinition> {
    vec![
        StageDefinition {
            name: "Tokenization".into(),
            description: "The input text is broken down into tokens (words or subwords). \
                          This process converts the raw text into a format the model can \
                          understand."
                .into(),
            visualization: VisualizationKind::Tokens,
        },
        StageDefinition {
            name: "Embedding".into(),
            description: "Each token is converted into a numerical vector representation. \
                          This allows the model to process the text mathematically."
                .into(),
            visualization: VisualizationKind::VectorPlaceholders,
        },
        StageDefinition {
            name: "Attention Mechanism".into(),
            description: "The model calculates attention scores to understand the \
                          relationships between different parts of the input."
                .into(),
            visualization: VisualizationKind::AttentionScores,
        },
        StageDefinition {
            name: "Feed Forward".into(),
            description: "The embedded and attention-weighted inputs are processed through \
                          multiple neural network layers."
                .into(),
            visualization: VisualizationKind::NetworkDiagram,
        },
        StageDefinition {
            name: "Output Generation".into(),
            description: "The model generates output tokens based on the processed input \
                          and the temperature setting."
                .into(),
            visualization: VisualizationKind::FinalOutput,
        },
    ]
}
