use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LangIdError, Result};
use crate::model::gram::GramExtractor;

/// Default gram length.
pub const DEFAULT_GRAM_SIZE: usize = 4;

/// Default unseen-gram fraction at or above which a text is labelled "other".
pub const DEFAULT_OTHER_THRESHOLD: f64 = 0.6;

/// Default separator between label and text in training files.
pub const DEFAULT_DELIMITER: char = ' ';

/// Parameters shared by training and classification.
///
/// `LangIdConfig` can be deserialized from TOML (missing keys take their
/// defaults) and then adjusted through validated setters.
///
/// # Invariants (after [`validate`](Self::validate) or the setters)
/// - `gram_size` is >= 2
/// - `other_threshold` lies in `[0.0, 1.0]`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LangIdConfig {
	/// Number of characters per gram.
	gram_size: usize,

	/// Unseen-gram fraction at or above which a text falls back to "other".
	other_threshold: f64,

	/// Separator between the label token and the text in training lines.
	pub delimiter: char,

	/// Lowercase texts before cutting them into grams.
	pub case_fold: bool,
}

impl Default for LangIdConfig {
	fn default() -> Self {
		Self {
			gram_size: DEFAULT_GRAM_SIZE,
			other_threshold: DEFAULT_OTHER_THRESHOLD,
			delimiter: DEFAULT_DELIMITER,
			case_fold: false,
		}
	}
}

impl LangIdConfig {
	/// Loads a configuration from a TOML file and validates it.
	///
	/// # Errors
	/// - `Read` if the file cannot be read
	/// - `ParseConfig` if the TOML is invalid
	/// - `InvalidGramSize` / `InvalidThreshold` for out-of-range values
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path)
			.map_err(|source| LangIdError::Read { path: path.to_path_buf(), source })?;
		let config: Self = toml::from_str(&text)
			.map_err(|source| LangIdError::ParseConfig { path: path.to_path_buf(), source })?;
		config.validate()?;
		Ok(config)
	}

	/// Checks the invariants of a deserialized configuration.
	pub fn validate(&self) -> Result<()> {
		self.extractor()?;
		Self::check_threshold(self.other_threshold)
	}

	/// Returns the gram length.
	pub fn gram_size(&self) -> usize {
		self.gram_size
	}

	/// Returns the fallback threshold.
	pub fn other_threshold(&self) -> f64 {
		self.other_threshold
	}

	/// Sets the gram length.
	///
	/// # Errors
	/// Returns an error if `gram_size < 2`.
	pub fn set_gram_size(&mut self, gram_size: usize) -> Result<()> {
		if gram_size < 2 {
			return Err(LangIdError::InvalidGramSize(gram_size));
		}
		self.gram_size = gram_size;
		Ok(())
	}

	/// Sets the fallback threshold (0.0..=1.0).
	///
	/// # Errors
	/// Returns an error if the value is outside the valid range.
	pub fn set_other_threshold(&mut self, threshold: f64) -> Result<()> {
		Self::check_threshold(threshold)?;
		self.other_threshold = threshold;
		Ok(())
	}

	/// Returns this configuration with `delimiter` as the training separator.
	pub fn with_delimiter(mut self, delimiter: char) -> Self {
		self.delimiter = delimiter;
		self
	}

	/// Builds the gram extractor described by this configuration.
	pub fn extractor(&self) -> Result<GramExtractor> {
		GramExtractor::new(self.gram_size, self.case_fold)
	}

	/// Checks that `threshold` lies in `[0.0, 1.0]`.
	pub(crate) fn check_threshold(threshold: f64) -> Result<()> {
		// NaN fails the range check too
		if !(0.0..=1.0).contains(&threshold) {
			return Err(LangIdError::InvalidThreshold(threshold));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_working_configuration() {
		let config = LangIdConfig::default();
		assert_eq!(config.gram_size(), 4);
		assert_eq!(config.other_threshold(), 0.6);
		assert_eq!(config.delimiter, ' ');
		assert!(!config.case_fold);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn setters_reject_invalid_values() {
		let mut config = LangIdConfig::default();

		assert!(matches!(config.set_gram_size(1), Err(LangIdError::InvalidGramSize(1))));
		assert!(config.set_other_threshold(1.5).is_err());
		assert!(config.set_other_threshold(-0.1).is_err());
		assert!(config.set_other_threshold(f64::NAN).is_err());
		assert_eq!(config, LangIdConfig::default());

		config.set_gram_size(3).unwrap();
		config.set_other_threshold(1.0).unwrap();
		assert_eq!(config.gram_size(), 3);
		assert_eq!(config.other_threshold(), 1.0);
	}

	#[test]
	fn with_delimiter_keeps_validated_fields() {
		let config = LangIdConfig::default().with_delimiter('|');

		assert_eq!(config.delimiter, '|');
		assert_eq!(config.gram_size(), DEFAULT_GRAM_SIZE);
		assert_eq!(config.other_threshold(), DEFAULT_OTHER_THRESHOLD);
	}

	#[test]
	fn load_fills_missing_keys_with_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("langid.toml");
		std::fs::write(&path, "other_threshold = 0.75\ndelimiter = \"|\"\n").unwrap();

		let config = LangIdConfig::load(&path).unwrap();
		assert_eq!(config.gram_size(), DEFAULT_GRAM_SIZE);
		assert_eq!(config.other_threshold(), 0.75);
		assert_eq!(config.delimiter, '|');
	}

	#[test]
	fn load_rejects_out_of_range_values() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("langid.toml");
		std::fs::write(&path, "gram_size = 1\n").unwrap();

		assert!(matches!(LangIdConfig::load(&path), Err(LangIdError::InvalidGramSize(1))));
	}

	#[test]
	fn load_reports_parse_errors() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("langid.toml");
		std::fs::write(&path, "gram_size = \"four\"\n").unwrap();

		assert!(matches!(LangIdConfig::load(&path), Err(LangIdError::ParseConfig { .. })));
	}
}
