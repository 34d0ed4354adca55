//! # Lexicon Store
//!
//! Process-wide sentiment tables: per-language word profiles, polarity
//! weight overrides, and intensifier scale factors.
//!
//! - Loads from a TOML config (profiles + weights + intensifiers).
//! - Case-insensitive language lookup; unknown codes fall back to the
//!   default profile instead of failing.
//! - Ships a built-in `default_seed()` used whenever no config is found.
//!
//! Built once at startup and never mutated afterwards. Adding a language
//! means registering one more profile entry; the scorer never changes.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_LEXICON_PATH: &str = "config/lexicon.toml";
pub const ENV_LEXICON_PATH: &str = "SENTIMENT_LEXICON_PATH";

/// Word sets for one language.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconProfile {
    #[serde(default)]
    pub positive: HashSet<String>,
    #[serde(default)]
    pub negative: HashSet<String>,
}

static EMPTY_PROFILE: Lazy<LexiconProfile> = Lazy::new(LexiconProfile::default);

/// All sentiment tables for the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Lexicon {
    /// Profile used when the requested language has none registered.
    #[serde(default = "default_lang_seed")]
    pub default_lang: String,
    #[serde(default)]
    pub profiles: HashMap<String, LexiconProfile>,
    /// Per-word magnitude overrides for positive matches; absent words weigh 1.0.
    #[serde(default)]
    pub positive_weights: HashMap<String, f32>,
    /// Per-word magnitude overrides for negative matches; absent words weigh 1.0.
    #[serde(default)]
    pub negative_weights: HashMap<String, f32>,
    /// Words that scale the sentiment of the single token that follows them.
    #[serde(default)]
    pub intensifiers: HashMap<String, f32>,
}

fn default_lang_seed() -> String {
    "en".to_string()
}

impl Lexicon {
    /// Load tables from a TOML file.
    /// Falls back to `default_seed()` when the file is missing or malformed.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(s) => match toml::from_str::<Lexicon>(&s) {
                Ok(lex) => lex,
                Err(e) => {
                    warn!(error = %e, "invalid lexicon config, using built-in seed");
                    Self::default_seed()
                }
            },
            Err(_) => Self::default_seed(),
        }
    }

    /// Resolve the config path from the environment and load.
    pub fn from_env() -> Self {
        let path = std::env::var(ENV_LEXICON_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LEXICON_PATH));
        Self::load_from_file(path)
    }

    /// Profile for a language code, case-insensitive.
    /// Unregistered codes get the default profile.
    pub fn resolve(&self, lang: &str) -> &LexiconProfile {
        let code = lang.trim().to_lowercase();
        self.profiles
            .get(&code)
            .or_else(|| self.profiles.get(&self.default_lang))
            .unwrap_or(&EMPTY_PROFILE)
    }

    /// Magnitude for a positive match; 1.0 when not listed. Never negative.
    pub fn positive_weight(&self, word: &str) -> f32 {
        self.positive_weights
            .get(word)
            .copied()
            .unwrap_or(1.0)
            .max(0.0)
    }

    /// Magnitude for a negative match; 1.0 when not listed. Never negative.
    pub fn negative_weight(&self, word: &str) -> f32 {
        self.negative_weights
            .get(word)
            .copied()
            .unwrap_or(1.0)
            .max(0.0)
    }

    /// Scale factor if the word is a registered intensifier.
    pub fn intensifier(&self, word: &str) -> Option<f32> {
        self.intensifiers.get(word).copied()
    }

    /// Built-in English + Turkish seed, used when no config file is present.
    pub fn default_seed() -> Self {
        let mut profiles = HashMap::new();

        profiles.insert(
            "en".to_string(),
            LexiconProfile {
                positive: words(&[
                    "good", "great", "love", "excellent", "amazing", "happy", "like", "awesome",
                    "nice", "fantastic", "cool", "dope", "lit", "fire", "wonderful", "satisfied",
                    "recommend", "perfect", "superb", "fast", "smooth", "delicious", "tasty",
                    "fresh", "crispy", "affordable", "clean",
                ]),
                negative: words(&[
                    "bad", "terrible", "hate", "awful", "sad", "angry", "dislike", "poor",
                    "worst", "boring", "trash", "lame", "broken", "buggy", "useless",
                    "disappointed", "refund", "slow", "noisy", "overpriced", "bland", "stale",
                    "overcooked", "dirty", "rude", "cold",
                ]),
            },
        );

        profiles.insert(
            "tr".to_string(),
            LexiconProfile {
                positive: words(&[
                    "iyi", "harika", "mükemmel", "mukemmel", "sevdim", "bayıldım", "bayildim",
                    "güzel", "guzel", "mutlu", "hızlı", "hizli", "temiz", "lezzetli", "taze",
                    "tavsiye", "muhteşem", "muhtesem", "süper", "super",
                ]),
                negative: words(&[
                    "kötü", "kotu", "berbat", "nefret", "rezalet", "fena", "yavaş", "yavas",
                    "kirli", "bayat", "pahalı", "pahali", "bozuk", "kırık", "kirik",
                    "gürültülü", "gurultulu", "iğrenç", "igrenc",
                ]),
            },
        );

        let mut positive_weights = HashMap::new();
        for (w, v) in [
            ("excellent", 2.0),
            ("fantastic", 2.0),
            ("amazing", 1.5),
            ("perfect", 1.5),
        ] {
            positive_weights.insert(w.to_string(), v);
        }

        let mut negative_weights = HashMap::new();
        for (w, v) in [
            ("worst", 2.0),
            ("terrible", 1.8),
            ("awful", 1.5),
            ("broken", 1.2),
        ] {
            negative_weights.insert(w.to_string(), v);
        }

        let mut intensifiers = HashMap::new();
        for (w, v) in [
            ("very", 1.3),
            ("too", 1.2),
            ("extremely", 1.5),
            ("so", 1.2),
            ("really", 1.15),
            ("slightly", 0.8), // weakening example
        ] {
            intensifiers.insert(w.to_string(), v);
        }

        Self {
            default_lang: "en".to_string(),
            profiles,
            positive_weights,
            negative_weights,
            intensifiers,
        }
    }
}

fn words(list: &[&str]) -> HashSet<String> {
    list.iter().map(|w| w.to_string()).collect()
}
