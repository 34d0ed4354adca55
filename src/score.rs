//! Weighted token scoring and label classification.
//!
//! Pure functions over the token stream and the lexicon tables. No I/O and
//! no failure paths: any finite token sequence produces a result.

use serde::Serialize;

use crate::lexicon::{Lexicon, LexiconProfile};
use crate::tokenize::Token;

/// Below this much accumulated magnitude the result is forced to neutral.
pub const DEFAULT_NEUTRAL_THRESHOLD: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

/// Final classification: label plus a normalized score in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub label: Label,
    pub score: f32,
}

/// Accumulate positive and negative magnitude over one left-to-right pass.
///
/// An explicit index is used so an intensifier can consume the token that
/// follows it: the intensifier itself carries no sentiment, and its scale
/// applies to that one token only — two intensifiers in a row never stack.
/// Negation flips which sum a known base contributes to.
pub fn score_tokens(tokens: &[Token], profile: &LexiconProfile, lex: &Lexicon) -> (f32, f32) {
    let mut positive_sum = 0.0f32;
    let mut negative_sum = 0.0f32;

    let mut i = 0;
    while i < tokens.len() {
        let mut tok = &tokens[i];
        let mut scale = 1.0f32;

        if !tok.negated {
            if let Some(factor) = lex.intensifier(&tok.base) {
                if i + 1 < tokens.len() {
                    scale = factor;
                    i += 1;
                    tok = &tokens[i];
                }
            }
        }

        if tok.negated {
            if profile.positive.contains(&tok.base) {
                negative_sum += lex.positive_weight(&tok.base) * scale;
            } else if profile.negative.contains(&tok.base) {
                positive_sum += lex.negative_weight(&tok.base) * scale;
            }
        } else if profile.positive.contains(&tok.base) {
            positive_sum += lex.positive_weight(&tok.base) * scale;
        } else if profile.negative.contains(&tok.base) {
            negative_sum += lex.negative_weight(&tok.base) * scale;
        }

        i += 1;
    }

    (positive_sum, negative_sum)
}

/// Map the two magnitude sums to a label and a score in [-1, 1].
///
/// Total magnitude under `neutral_threshold` is treated as insufficient
/// evidence and yields neutral with score 0.0, so a single weak match
/// cannot dominate the result.
pub fn classify(positive_sum: f32, negative_sum: f32, neutral_threshold: f32) -> Prediction {
    let total = positive_sum + negative_sum;
    if total < neutral_threshold {
        return Prediction {
            label: Label::Neutral,
            score: 0.0,
        };
    }

    let score = (positive_sum - negative_sum) / total.max(1e-9);
    let label = if score > 0.0 {
        Label::Positive
    } else if score < 0.0 {
        Label::Negative
    } else {
        Label::Neutral
    };
    Prediction { label, score }
}
