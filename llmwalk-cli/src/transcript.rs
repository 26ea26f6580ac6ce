//! Walkthrough transcripts
//!
//! Runs a whole walkthrough non-interactively and captures it as a
//! serializable transcript: the input, its word tokens, every stage in
//! order, and the synthesized output.

use llmwalk_core::{words, VisualizationKind, WalkthroughController};
use rand::Rng;
use serde::Serialize;

/// A completed walkthrough, ready for serialization
#[derive(Debug, Serialize)]
pub struct Transcript {
    pub input: String,
    pub words: Vec<String>,
    pub stages: Vec<StageRecord>,
    pub output: String,
}

/// One stage of the pipeline as it appeared in the walkthrough
#[derive(Debug, Serialize)]
pub struct StageRecord {
    pub index: usize,
    pub name: String,
    pub visualization: VisualizationKind,
    pub description: String,
}

/// Step a controller through every stage and capture the transcript
pub fn run_walkthrough(input: &str, rng: impl Rng) -> Transcript {
    let mut walk = WalkthroughController::with_rng(rng);
    walk.set_input(input);

    let stages = walk
        .registry()
        .iter()
        .enumerate()
        .map(|(index, stage)| StageRecord {
            index,
            name: stage.name.clone(),
            visualization: stage.visualization,
            description: stage.description.clone(),
        })
        .collect();

    // Step to the terminal stage, then generate
    while !walk.at_final_stage() {
        walk.advance();
    }
    walk.advance();

    Transcript {
        input: input.to_string(),
        words: words(input).into_iter().map(str::to_string).collect(),
        stages,
        output: walk.current_output().to_string(),
    }
}

impl Transcript {
    /// Render the transcript as plain text
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Input:  {}\n", self.input));
        out.push_str(&format!("Words:  {}\n\n", self.words.join(", ")));

        for stage in &self.stages {
            out.push_str(&format!("  {}. {}\n", stage.index + 1, stage.name));
            out.push_str(&format!("     {}\n\n", stage.description));
        }

        out.push_str(&format!("Output: {}\n", self.output));
        out
    }
}
