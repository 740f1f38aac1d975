use tracing::debug;

use crate::config::LangIdConfig;
use crate::error::Result;

use super::language::{Language, Prediction};
use super::ngram_model::TextScore;
use super::trainer::LanguageModels;

/// Outcome of classifying one text.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
	/// Final label, after the "other" fallback.
	pub prediction: Prediction,

	/// Language with the highest total log-probability.
	pub best: Language,

	/// Score of the text under every model, in tie-breaking order.
	pub scores: Vec<(Language, TextScore)>,
}

impl Classification {
	/// Score under the best model.
	pub fn best_score(&self) -> Option<&TextScore> {
		self.scores
			.iter()
			.find(|(language, _)| *language == self.best)
			.map(|(_, score)| score)
	}
}

/// Labels texts with the most probable trained language.
///
/// # Behavior
/// - Scores the text under every model
/// - Keeps the language with the highest log-probability; ties go to the
///   language declared first in [`Language`]
/// - Falls back to [`Prediction::Other`] when the unseen-gram fraction under
///   the best model reaches `other_threshold`
#[derive(Clone, Debug)]
pub struct Classifier {
	models: LanguageModels,
	other_threshold: f64,
}

impl Classifier {
	/// Creates a classifier over trained `models`.
	///
	/// # Errors
	/// Returns an error if `other_threshold` is outside `[0.0, 1.0]`.
	pub fn new(models: LanguageModels, other_threshold: f64) -> Result<Self> {
		LangIdConfig::check_threshold(other_threshold)?;
		Ok(Self { models, other_threshold })
	}

	/// Returns the trained models.
	pub fn models(&self) -> &LanguageModels {
		&self.models
	}

	/// Classifies a single text.
	pub fn classify(&self, text: &str) -> Classification {
		let scores: Vec<(Language, TextScore)> = self
			.models
			.iter()
			.map(|model| (model.language(), model.score(text)))
			.collect();

		// `LanguageModels` holds one model per language, so `scores` is never empty.
		// Strict comparison: the first maximum in declaration order wins.
		let mut best = 0;
		for (index, (_, score)) in scores.iter().enumerate().skip(1) {
			if score.log_probability > scores[best].1.log_probability {
				best = index;
			}
		}
		let (best_language, best_score) = scores[best];

		let prediction = if best_score.unseen_fraction() >= self.other_threshold {
			Prediction::Other
		} else {
			Prediction::Language(best_language)
		};

		debug!(
			"{:?} -> {} (best {}: log_p {:.4}, unseen {}/{})",
			text, prediction, best_language, best_score.log_probability, best_score.unseen, best_score.grams
		);

		Classification { prediction, best: best_language, scores }
	}

	/// Classifies every text, preserving the input order.
	pub fn classify_all<I, S>(&self, texts: I) -> Vec<Prediction>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		texts
			.into_iter()
			.map(|text| self.classify(text.as_ref()).prediction)
			.collect()
	}
}
