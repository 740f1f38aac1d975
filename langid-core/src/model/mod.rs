//! Character n-gram language identification.
//!
//! This module provides:
//! - Gram extraction over boundary-padded text (`GramExtractor`)
//! - Per-language count models and their smoothed form (`NGramModel`, `SmoothedModel`)
//! - Training of all languages over a shared vocabulary (`Trainer`)
//! - Classification with an "other" fallback (`Classifier`)
//! - A high-level train-then-classify interface (`LanguageIdentifier`)

/// High-level interface tying training, classification and file I/O together.
pub mod identifier;

/// Maximum log-likelihood classification with the unseen-gram fallback.
pub mod classifier;

/// Builds one smoothed model per language from labelled lines.
pub mod trainer;

/// Fixed-order gram counts (`n >= 2`), add-one smoothing and text scoring.
pub mod ngram_model;

/// Boundary padding and overlapping gram extraction.
pub mod gram;

/// Trained languages and the synthetic "other" prediction.
pub mod language;
