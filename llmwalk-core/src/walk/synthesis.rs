//! Output synthesis for the terminal walkthrough stage
//!
//! When the walkthrough reaches Output Generation, the "model output" is
//! synthesized by resampling the input's own words: the result has between
//! `word_count` and `word_count + MAX_EXTRA_WORDS` words, each drawn
//! uniformly with replacement from the input word list. The output looks
//! plausible at a glance and means nothing, which is the point.
//!
//! Randomness is injected so callers can pass a seeded generator for
//! reproducible output.

use crate::walk::lexing::words;
use rand::Rng;

/// Upper bound on the words added beyond the input's word count
pub const MAX_EXTRA_WORDS: usize = 4;

/// Synthesize an output string from `input`, drawing randomness from `rng`.
///
/// Inputs with no words (empty or whitespace-only) synthesize to the empty
/// string; without this guard the degenerate split would sample empty
/// tokens.
pub fn synthesize(input: &str, rng: &mut impl Rng) -> String {
    let words = words(input);
    if words.is_empty() {
        return String::new();
    }

    let extra = rng.gen_range(0..=MAX_EXTRA_WORDS);
    let output_len = words.len() + extra;

    let mut sampled = Vec::with_capacity(output_len);
    for _ in 0..output_len {
        sampled.push(words[rng.gen_range(0..words.len())]);
    }

    sampled.join(" ")
}
