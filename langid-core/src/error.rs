use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, LangIdError>;

/// Errors that may occur while training or applying the language models.
///
/// Every variant is fatal for a run: the input corpora are assumed to be
/// well-formed, so there is no recovery path.
#[derive(Debug, Error)]
pub enum LangIdError {
	/// Failed to read an input file.
	#[error("Failed to read {path}: {source}")]
	Read {
		/// Path that failed to read.
		path: PathBuf,
		/// Underlying IO error.
		source: std::io::Error,
	},
	/// Failed to write the prediction file.
	#[error("Failed to write {path}: {source}")]
	Write {
		/// Path that failed to write.
		path: PathBuf,
		/// Underlying IO error.
		source: std::io::Error,
	},
	/// A training line has no label delimiter.
	#[error("Malformed training line {line}: expected `<label><delimiter><text>`, got {content:?}")]
	MalformedLine {
		/// 1-based line number.
		line: usize,
		/// Raw line content.
		content: String,
	},
	/// A training line carries a label outside the known languages.
	#[error("Unknown label {label:?} on training line {line}")]
	UnknownLabel {
		/// 1-based line number.
		line: usize,
		/// Label token as found in the file.
		label: String,
	},
	/// Gram size below 2.
	#[error("Gram size must be >= 2, got {0}")]
	InvalidGramSize(usize),
	/// Fallback threshold outside `[0, 1]`.
	#[error("Other threshold must be between 0.0 and 1.0, got {0}")]
	InvalidThreshold(f64),
	/// Failed to parse the TOML configuration.
	#[error("Invalid config at {path}: {source}")]
	ParseConfig {
		/// TOML file path.
		path: PathBuf,
		/// TOML parse error.
		source: toml::de::Error,
	},
}
