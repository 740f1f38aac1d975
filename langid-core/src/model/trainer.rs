use std::collections::HashMap;

use tracing::info;

use crate::config::LangIdConfig;
use crate::error::{LangIdError, Result};

use super::language::Language;
use super::ngram_model::{NGramModel, SmoothedModel, Vocabulary};

/// The smoothed models of every trained language.
///
/// # Invariants
/// - Exactly one model per `Language`, stored in `Language::ALL` order
/// - All models were smoothed over the same vocabulary
#[derive(Clone, Debug, PartialEq)]
pub struct LanguageModels {
	models: Vec<SmoothedModel>,
	vocabulary_size: usize,
}

impl LanguageModels {
	/// Iterates over the models in tie-breaking order.
	pub fn iter(&self) -> impl Iterator<Item = &SmoothedModel> {
		self.models.iter()
	}

	/// Returns the model trained for `language`.
	pub fn get(&self, language: Language) -> Option<&SmoothedModel> {
		self.models.iter().find(|model| model.language() == language)
	}

	/// Size of the vocabulary shared by all models.
	pub fn vocabulary_size(&self) -> usize {
		self.vocabulary_size
	}
}

/// Builds one smoothed model per language from labelled lines.
#[derive(Clone, Debug)]
pub struct Trainer {
	config: LangIdConfig,
}

impl Trainer {
	pub fn new(config: LangIdConfig) -> Self {
		Self { config }
	}

	/// Trains the models on `lines`, each formatted `<label><delimiter><text>`.
	///
	/// # Behavior
	/// - Routes every text to the model of its label
	/// - Computes the vocabulary as the union of every model's grams
	/// - Smooths every model over that shared vocabulary
	///
	/// # Errors
	/// - `MalformedLine` if a line has no delimiter
	/// - `UnknownLabel` if a label is outside the known languages
	/// - `InvalidGramSize` if the configured gram size is below 2
	pub fn train<I, S>(&self, lines: I) -> Result<LanguageModels>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		info!("building language models...");

		let extractor = self.config.extractor()?;
		let mut models: Vec<NGramModel> = Language::ALL
			.iter()
			.map(|language| NGramModel::new(*language, extractor))
			.collect();
		let mut lines_per_language: HashMap<Language, usize> = HashMap::new();

		for (index, line) in lines.into_iter().enumerate() {
			let (language, text) = parse_labelled_line(line.as_ref(), self.config.delimiter, index + 1)?;
			if let Some(model) = models.iter_mut().find(|model| model.language() == language) {
				model.train_on_text(text);
			}
			*lines_per_language.entry(language).or_insert(0) += 1;
		}

		let vocabulary: Vocabulary = models
			.iter()
			.flat_map(|model| model.seen_grams())
			.map(str::to_owned)
			.collect();

		for language in Language::ALL {
			info!(
				"{}: {} lines",
				language,
				lines_per_language.get(&language).copied().unwrap_or(0)
			);
		}
		info!("shared vocabulary: {} grams", vocabulary.len());

		Ok(LanguageModels {
			models: models.into_iter().map(|model| model.smooth(&vocabulary)).collect(),
			vocabulary_size: vocabulary.len(),
		})
	}
}

/// Splits a training line on the first `delimiter` into its language and text.
///
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_labelled_line(line: &str, delimiter: char, line_number: usize) -> Result<(Language, &str)> {
	let (label, text) = line.split_once(delimiter).ok_or_else(|| LangIdError::MalformedLine {
		line: line_number,
		content: line.to_owned(),
	})?;

	let language = Language::from_label(label).ok_or_else(|| LangIdError::UnknownLabel {
		line: line_number,
		label: label.to_owned(),
	})?;

	Ok((language, text))
}
