//! # Sentiment Analyzer
//!
//! End-to-end pipeline: preprocess → tokenize/merge negations →
//! per-language normalization → weighted scoring → classification.
//!
//! Stateless per call; the tables are built once at startup and shared
//! read-only, so any number of requests can run concurrently with zero
//! coordination.

use crate::lexicon::Lexicon;
use crate::score::{self, Prediction, DEFAULT_NEUTRAL_THRESHOLD};
use crate::{preprocess, stem, tokenize};

pub const ENV_NEUTRAL_THRESHOLD: &str = "SENTIMENT_NEUTRAL_THRESHOLD";

#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
    neutral_threshold: f32,
}

impl SentimentAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            neutral_threshold: DEFAULT_NEUTRAL_THRESHOLD,
        }
    }

    /// Build from the environment: lexicon config path plus an optional
    /// neutral-threshold override.
    pub fn from_env() -> Self {
        let lexicon = Lexicon::from_env();
        let neutral_threshold = parse_threshold_env(std::env::var(ENV_NEUTRAL_THRESHOLD).ok())
            .unwrap_or(DEFAULT_NEUTRAL_THRESHOLD);
        Self {
            lexicon,
            neutral_threshold,
        }
    }

    #[cfg(test)]
    pub fn with_threshold(mut self, neutral_threshold: f32) -> Self {
        self.neutral_threshold = neutral_threshold;
        self
    }

    /// Classify one snippet. Total over any string input: unknown words and
    /// unknown languages degrade to zero contribution and the default
    /// profile, never to an error.
    pub fn predict(&self, text: &str, lang: &str) -> Prediction {
        let code = lang.trim().to_lowercase();
        let profile = self.lexicon.resolve(&code);

        let cleaned = preprocess::normalize(text);
        let mut tokens = tokenize::tokenize_with_negation(&cleaned);
        for tok in &mut tokens {
            tok.base = stem::normalize_base(&tok.base, &code);
        }

        let (positive_sum, negative_sum) = score::score_tokens(&tokens, profile, &self.lexicon);
        score::classify(positive_sum, negative_sum, self.neutral_threshold)
    }
}

// parse optional float env; negative thresholds make no sense
fn parse_threshold_env(raw: Option<String>) -> Option<f32> {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .map(|v| v.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Label;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::new(Lexicon::default_seed())
    }

    #[test]
    fn positive_snippet() {
        let pred = analyzer().predict("I love this great product", "en");
        assert_eq!(pred.label, Label::Positive);
        assert!(pred.score > 0.0);
    }

    #[test]
    fn negative_snippet() {
        let pred = analyzer().predict("This is the worst and I hate it", "en");
        assert_eq!(pred.label, Label::Negative);
        assert!(pred.score < 0.0);
    }

    #[test]
    fn not_bad_reads_positive() {
        let pred = analyzer().predict("The movie is not bad", "en");
        assert_eq!(pred.label, Label::Positive);
    }

    #[test]
    fn not_good_reads_negative() {
        let pred = analyzer().predict("The product is not good", "en");
        assert_eq!(pred.label, Label::Negative);
    }

    #[test]
    fn no_sentiment_words_is_neutral() {
        let pred = analyzer().predict("This is a table", "en");
        assert_eq!(pred.label, Label::Neutral);
        assert_eq!(pred.score, 0.0);
    }

    #[test]
    fn empty_text_is_neutral() {
        let pred = analyzer().predict("", "en");
        assert_eq!(pred.label, Label::Neutral);
        assert_eq!(pred.score, 0.0);
    }

    #[test]
    fn unknown_language_matches_default_profile() {
        let a = analyzer();
        let text = "I love this great product";
        assert_eq!(a.predict(text, "xx"), a.predict(text, "en"));
    }

    #[test]
    fn turkish_stemming_reaches_lexicon() {
        // "kötüydü" stems to "kötü" before lookup
        let pred = analyzer().predict("film kötüydü", "tr");
        assert_eq!(pred.label, Label::Negative);
    }

    #[test]
    fn turkish_positive() {
        let pred = analyzer().predict("yemek çok lezzetli ve taze", "tr");
        assert_eq!(pred.label, Label::Positive);
    }

    #[test]
    fn language_code_case_insensitive() {
        let a = analyzer();
        let text = "harika bir ürün";
        assert_eq!(a.predict(text, "TR"), a.predict(text, "tr"));
    }

    #[test]
    fn not_very_good_negates_the_intensifier_only() {
        // single-token negation lookahead: "very" is negated, "good" is not
        let pred = analyzer().predict("not very good", "en");
        assert_eq!(pred.label, Label::Positive);
    }

    #[test]
    fn intensifier_amplifies_magnitude() {
        let a = analyzer();
        let plain = a.predict("good", "en");
        let strong = a.predict("very good and bad", "en");
        assert_eq!(plain.label, Label::Positive);
        assert_eq!(strong.label, Label::Positive);
        // 1.3 vs 1.0 against the same 1.0 negative mass
        assert!(strong.score < plain.score);
        assert!(strong.score > 0.0);
    }

    #[test]
    fn threshold_override_forces_more_neutral() {
        let strict = analyzer().with_threshold(3.0);
        let pred = strict.predict("good good", "en");
        assert_eq!(pred.label, Label::Neutral);
        assert_eq!(pred.score, 0.0);
    }

    #[test]
    fn parse_threshold_env_accepts_floats_only() {
        assert_eq!(parse_threshold_env(Some("0.8".into())), Some(0.8));
        assert_eq!(parse_threshold_env(Some(" 1.5 ".into())), Some(1.5));
        assert_eq!(parse_threshold_env(Some("-1".into())), Some(0.0));
        assert_eq!(parse_threshold_env(Some("nope".into())), None);
        assert_eq!(parse_threshold_env(None), None);
    }
}
