//! Word tokenization for walkthrough input
//!
//! This module defines the tokens produced from walkthrough input text.
//! The tokens are defined using the logos derive macro for efficient
//! tokenization. Input is split into maximal runs of non-whitespace (words)
//! and whitespace; this is the word list the Tokenization stage displays and
//! the synthesizer samples from.

use logos::Logos;

/// All possible tokens in walkthrough input
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// A maximal run of non-whitespace characters
    #[regex(r"\S+")]
    Word,

    /// A maximal run of whitespace (spaces, tabs, newlines)
    #[regex(r"\s+")]
    Whitespace,
}

impl Token {
    /// Check if this token is a word
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word)
    }

    /// Check if this token is whitespace
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }
}

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

/// Collect the word slices of `source`, in input order.
///
/// Empty and whitespace-only sources yield an empty list.
pub fn words(source: &str) -> Vec<&str> {
    let mut lexer = Token::lexer(source);
    let mut words = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(Token::Word) = result {
            words.push(lexer.slice());
        }
    }

    words
}
