//! End-to-end walkthrough scenarios
//!
//! Full sessions driven the way a frontend drives the controller: type
//! input, step through every stage, generate, reset.

use llmwalk_core::{AdvanceOutcome, VisualizationKind, WalkthroughController};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn controller(seed: u64) -> WalkthroughController<StdRng> {
    WalkthroughController::with_rng(StdRng::seed_from_u64(seed))
}

#[test]
fn hello_world_walkthrough() {
    let mut walk = controller(42);
    walk.set_input("hello world");

    // Step through the four intermediate transitions
    let mut visited = vec![walk.current_stage().name.clone()];
    for _ in 0..4 {
        walk.advance();
        visited.push(walk.current_stage().name.clone());
    }

    assert_eq!(
        visited,
        vec![
            "Tokenization",
            "Embedding",
            "Attention Mechanism",
            "Feed Forward",
            "Output Generation",
        ]
    );
    assert_eq!(walk.stage_index(), 4);
    assert_eq!(walk.current_stage().name, "Output Generation");
    assert_eq!(walk.current_output(), "");

    // The fifth advance generates without moving
    let outcome = walk.advance();
    assert_eq!(walk.stage_index(), 4);
    assert!(matches!(outcome, AdvanceOutcome::Generated(_)));

    let output_words: Vec<_> = walk.current_output().split_whitespace().collect();
    assert!((2..=6).contains(&output_words.len()));
    for word in &output_words {
        assert!(*word == "hello" || *word == "world");
    }
}

#[test]
fn reset_after_generation_restores_initial_state() {
    let mut walk = controller(42);
    walk.set_input("hello world");
    for _ in 0..5 {
        walk.advance();
    }
    assert!(!walk.current_output().is_empty());

    walk.reset();
    assert_eq!(walk.stage_index(), 0);
    assert_eq!(walk.current_input(), "");
    assert_eq!(walk.current_output(), "");
    assert_eq!(walk.current_stage().name, "Tokenization");
}

#[test]
fn empty_input_never_produces_output() {
    let mut walk = controller(0);

    // Step to the terminal stage and keep generating
    for _ in 0..10 {
        walk.advance();
        assert_eq!(walk.current_output(), "");
    }
    assert_eq!(walk.stage_index(), 4);
}

#[test]
fn editing_input_mid_walkthrough_keeps_position() {
    let mut walk = controller(13);
    walk.set_input("draft one");
    walk.advance();
    walk.advance();

    walk.set_input("draft two rewritten");
    assert_eq!(walk.stage_index(), 2);
    assert_eq!(
        walk.current_stage().visualization,
        VisualizationKind::AttentionScores
    );

    // Generation picks up the edited input
    walk.advance();
    walk.advance();
    walk.advance();
    for word in walk.current_output().split_whitespace() {
        assert!(["draft", "two", "rewritten"].contains(&word));
    }
}
