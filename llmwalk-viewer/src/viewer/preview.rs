//! Per-stage illustration builders
//!
//! Pure functions from walkthrough state to styled lines. The engine only
//! tags each stage with a visualization kind; everything rendered here is
//! an illustrative placeholder, not real model internals.

use llmwalk_config::PreviewConfig;
use llmwalk_core::{words, VisualizationKind};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Hint shown for input-driven previews while the input is empty
const EMPTY_INPUT_HINT: &str = "Type input text to see this stage illustrated";

/// Hint shown on the final stage before generation has run
const PENDING_OUTPUT_HINT: &str = "Press Enter (Generate Output) to synthesize output";

/// Placeholder vector components, cycled up to the configured width
const PLACEHOLDER_COMPONENTS: [f64; 3] = [0.2, -0.5, 0.8];

/// Build the illustration for a stage
pub fn for_stage(
    kind: VisualizationKind,
    input: &str,
    output: &str,
    attention: &[f64],
    config: &PreviewConfig,
) -> Vec<Line<'static>> {
    match kind {
        VisualizationKind::Tokens => token_chips(input),
        VisualizationKind::VectorPlaceholders => vector_placeholders(input, config),
        VisualizationKind::AttentionScores => attention_scores(input, attention, config),
        VisualizationKind::NetworkDiagram => network_diagram(),
        VisualizationKind::FinalOutput => final_output(output),
    }
}

fn hint(text: &str) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ))]
}

/// One chip per input word
pub fn token_chips(input: &str) -> Vec<Line<'static>> {
    let words = words(input);
    if words.is_empty() {
        return hint(EMPTY_INPUT_HINT);
    }

    let mut spans = Vec::with_capacity(words.len() * 2);
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", word),
            Style::default().fg(Color::Black).bg(Color::Blue),
        ));
    }
    vec![Line::from(spans)]
}

/// A placeholder embedding vector per shown word
pub fn vector_placeholders(input: &str, config: &PreviewConfig) -> Vec<Line<'static>> {
    let words = words(input);
    if words.is_empty() {
        return hint(EMPTY_INPUT_HINT);
    }

    words
        .iter()
        .take(config.max_words)
        .map(|word| {
            Line::from(vec![
                Span::styled(format!("{:>12} ", word), Style::default().fg(Color::Green)),
                Span::raw(placeholder_vector(config.vector_width)),
            ])
        })
        .collect()
}

/// Format a fixed placeholder vector of the given width
fn placeholder_vector(width: usize) -> String {
    let components: Vec<String> = PLACEHOLDER_COMPONENTS
        .iter()
        .cycle()
        .take(width)
        .map(|c| format!("{:.1}", c))
        .collect();
    format!("[{}, ...]", components.join(", "))
}

/// An illustrative attention score per shown word
pub fn attention_scores(
    input: &str,
    attention: &[f64],
    config: &PreviewConfig,
) -> Vec<Line<'static>> {
    let words = words(input);
    if words.is_empty() {
        return hint(EMPTY_INPUT_HINT);
    }

    words
        .iter()
        .take(config.max_words)
        .zip(attention.iter())
        .map(|(word, score)| {
            Line::from(vec![
                Span::styled(format!("{:>12} ", word), Style::default().fg(Color::Yellow)),
                Span::raw("→ "),
                Span::styled(
                    format!("{:.prec$}", score, prec = config.attention_decimals),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect()
}

/// A static layer diagram
pub fn network_diagram() -> Vec<Line<'static>> {
    [
        "Input    ○  ○  ○  ○",
        "          \\ |  | /",
        "Hidden    ○  ○  ○",
        "           \\ | /",
        "Output     ○  ○",
    ]
    .iter()
    .map(|row| {
        Line::from(Span::styled(
            row.to_string(),
            Style::default().fg(Color::Magenta),
        ))
    })
    .collect()
}

/// The synthesized output, or a hint before generation
pub fn final_output(output: &str) -> Vec<Line<'static>> {
    if output.is_empty() {
        return hint(PENDING_OUTPUT_HINT);
    }
    vec![Line::from(Span::styled(
        output.to_string(),
        Style::default().fg(Color::Red),
    ))]
}
