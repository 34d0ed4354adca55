//! Whitespace tokenization with negation merging.
//!
//! A token equal to the negation marker absorbs the token that follows it,
//! producing a single negated token. The lookahead is one token deep:
//! "not very good" negates "very", not "good".

/// The word that triggers negation merging.
pub const NEGATION_MARKER: &str = "not";

/// A single token; `negated` marks that it was preceded by the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub base: String,
    pub negated: bool,
}

impl Token {
    pub fn plain(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            negated: false,
        }
    }

    pub fn negated(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            negated: true,
        }
    }
}

/// Split cleaned text and merge negation markers into their following token.
///
/// A trailing marker with nothing after it is emitted as a plain token.
/// The consumed follower is never re-emitted on its own.
pub fn tokenize_with_negation(cleaned: &str) -> Vec<Token> {
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    let mut out = Vec::with_capacity(words.len());

    let mut i = 0;
    while i < words.len() {
        if words[i] == NEGATION_MARKER && i + 1 < words.len() {
            out.push(Token::negated(words[i + 1]));
            i += 2;
        } else {
            out.push(Token::plain(words[i]));
            i += 1;
        }
    }
    out
}
