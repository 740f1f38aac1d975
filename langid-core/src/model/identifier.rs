use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::config::LangIdConfig;
use crate::error::Result;
use crate::io;

use super::classifier::{Classification, Classifier};
use super::language::Prediction;
use super::trainer::{LanguageModels, Trainer};

/// Totals of one classification run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassificationSummary {
	/// Number of classified lines.
	pub lines: usize,

	/// Number of lines per predicted label.
	pub per_prediction: BTreeMap<Prediction, usize>,
}

/// High-level interface: trains the language models, then labels texts.
///
/// # Responsibilities
/// - Read and parse the labelled training file
/// - Build and smooth one model per language
/// - Classify single texts or a whole test file into a prediction file
#[derive(Clone, Debug)]
pub struct LanguageIdentifier {
	classifier: Classifier,
}

impl LanguageIdentifier {
	/// Trains the models on in-memory labelled lines.
	///
	/// # Errors
	/// Returns an error for an invalid configuration or a malformed line.
	pub fn train<I, S>(lines: I, config: &LangIdConfig) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		config.validate()?;
		let models = Trainer::new(config.clone()).train(lines)?;
		Ok(Self { classifier: Classifier::new(models, config.other_threshold())? })
	}

	/// Trains the models on a labelled training file.
	///
	/// # Behavior
	/// - Reads the file up to its first empty line
	/// - Each line is `<label><delimiter><text>`
	///
	/// # Errors
	/// - `Read` if the file cannot be read
	/// - `MalformedLine` / `UnknownLabel` for bad training lines
	pub fn train_from_file<P: AsRef<Path>>(path: P, config: &LangIdConfig) -> Result<Self> {
		let path = path.as_ref();
		info!("reading training data from {}", path.display());
		let lines = io::read_lines(path)?;
		Self::train(lines, config)
	}

	/// Returns the trained models.
	pub fn models(&self) -> &LanguageModels {
		self.classifier.models()
	}

	/// Classifies one text.
	pub fn classify(&self, text: &str) -> Classification {
		self.classifier.classify(text)
	}

	/// Labels every line of `test_path` and writes one label per line to `output_path`.
	///
	/// # Behavior
	/// - Reads the test file up to its first empty line
	/// - Writes the labels in input order
	///
	/// # Errors
	/// - `Read` if the test file cannot be read
	/// - `Write` if the prediction file cannot be written
	pub fn classify_file<PT, PO>(&self, test_path: PT, output_path: PO) -> Result<ClassificationSummary>
	where
		PT: AsRef<Path>,
		PO: AsRef<Path>,
	{
		info!("testing language models...");

		let texts = io::read_lines(test_path)?;
		let predictions = self.classifier.classify_all(&texts);
		io::write_lines(output_path, predictions.iter().map(|prediction| prediction.label()))?;

		let mut summary = ClassificationSummary { lines: predictions.len(), ..Default::default() };
		for prediction in predictions {
			*summary.per_prediction.entry(prediction).or_insert(0) += 1;
		}
		for (prediction, count) in &summary.per_prediction {
			info!("{}: {} lines", prediction, count);
		}

		Ok(summary)
	}
}
