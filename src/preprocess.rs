//! Text preprocessing: Unicode case folding and punctuation cleanup.
//!
//! Output is a single-space-separated string ready for the tokenizer.
//! Pure and deterministic; running it twice yields the same result.

use once_cell::sync::Lazy;
use regex::Regex;

// Keep word chars, whitespace and apostrophes; everything else becomes a space.
static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?u)[^\w\s']").expect("cleanup regex"));
static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Case-fold and clean raw text.
///
/// Uses full Unicode case folding rather than plain lowercasing, so
/// e.g. German `ß` folds to `ss` and non-ASCII capitals fold correctly.
pub fn normalize(raw: &str) -> String {
    let folded = caseless::default_case_fold_str(raw);
    let cleaned = NON_WORD_RE.replace_all(&folded, " ");
    WS_RE.replace_all(&cleaned, " ").trim().to_string()
}
