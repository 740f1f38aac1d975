//! Character n-gram language identification library.
//!
//! This crate provides:
//! - Character-level n-gram models with add-one smoothing
//! - Training of one model per language over a shared gram vocabulary
//! - Log-likelihood classification with an "other" fallback for texts
//!   whose grams were mostly never seen in training
//! - TOML configuration and file-based train / test pipelines

/// Core n-gram models, training and classification.
pub mod model;

/// Run configuration (gram size, fallback threshold, delimiter).
pub mod config;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (line loading, prediction writing).
///
/// Not exposed
pub(crate) mod io;

pub use config::LangIdConfig;
pub use error::{LangIdError, Result};
pub use model::classifier::{Classification, Classifier};
pub use model::identifier::{ClassificationSummary, LanguageIdentifier};
pub use model::language::{Language, Prediction};
