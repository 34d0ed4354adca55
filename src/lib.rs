// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod analyzer;
pub mod api;
pub mod lexicon;
pub mod preprocess;
pub mod score;
pub mod stem;
pub mod tokenize;

// ---- Re-exports for stable public API ----
pub use crate::analyzer::SentimentAnalyzer;
pub use crate::api::{router, AppState};
pub use crate::lexicon::Lexicon;
pub use crate::score::{Label, Prediction};
