use std::collections::{HashMap, HashSet};

use super::gram::GramExtractor;
use super::language::Language;

/// Union of the grams seen by every model during training.
pub type Vocabulary = HashSet<String>;

/// Raw gram counts for one language, accumulated during training.
///
/// # Responsibilities
/// - Cut training texts into padded grams
/// - Accumulate raw occurrence counts (no normalization at this stage)
/// - Turn into a [`SmoothedModel`] once the shared vocabulary is known
///
/// # Invariants
/// - `total` is the sum of all values in `occurrences`
/// - All stored counts are >= 1
#[derive(Clone, Debug)]
pub struct NGramModel {
	/// Language this model is trained for.
	language: Language,

	/// How texts are cut into grams.
	extractor: GramExtractor,

	/// Mapping from a gram to the number of times it was observed.
	occurrences: HashMap<String, usize>,

	/// Total number of grams counted.
	total: usize,
}

impl NGramModel {
	/// Creates an empty model for `language`.
	pub fn new(language: Language, extractor: GramExtractor) -> Self {
		Self { language, extractor, occurrences: HashMap::new(), total: 0 }
	}

	pub fn language(&self) -> Language {
		self.language
	}

	/// Adds a text to the model.
	///
	/// Every overlapping gram of the padded text increments its count by one.
	pub fn train_on_text(&mut self, text: &str) {
		for gram in self.extractor.grams(text) {
			*self.occurrences.entry(gram).or_insert(0) += 1;
			self.total += 1;
		}
	}

	/// Returns the raw count of `gram` (0 when never observed).
	pub fn count(&self, gram: &str) -> usize {
		self.occurrences.get(gram).copied().unwrap_or(0)
	}

	/// Total number of grams counted so far.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Returns every gram observed by this model.
	pub fn seen_grams(&self) -> impl Iterator<Item = &str> {
		self.occurrences.keys().map(String::as_str)
	}

	/// Applies add-one smoothing over the shared `vocabulary`.
	///
	/// Each gram `g` of the vocabulary receives
	/// `ln((count(g) + 1) / (total + |vocabulary|))`.
	///
	/// # Notes
	/// - `vocabulary` must be the union of the grams of *all* models, so that
	///   every model can score every observed gram. Grams this model never saw
	///   receive the smoothed baseline `1 / (total + |vocabulary|)`.
	/// - Consumes the model: counts are frozen once smoothed.
	pub fn smooth(self, vocabulary: &Vocabulary) -> SmoothedModel {
		let denominator = (self.total + vocabulary.len()) as f64;
		let log_probabilities = vocabulary
			.iter()
			.map(|gram| {
				let numerator = (self.count(gram) + 1) as f64;
				(gram.clone(), (numerator / denominator).ln())
			})
			.collect();

		SmoothedModel { language: self.language, extractor: self.extractor, log_probabilities }
	}
}

/// Immutable, add-one smoothed model used for scoring.
///
/// # Invariants
/// - Holds exactly one log-probability per gram of the shared vocabulary
/// - The matching probabilities sum to 1
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothedModel {
	language: Language,
	extractor: GramExtractor,
	/// Natural-log probability per vocabulary gram.
	log_probabilities: HashMap<String, f64>,
}

impl SmoothedModel {
	pub fn language(&self) -> Language {
		self.language
	}

	/// Number of grams this model can score.
	pub fn vocabulary_size(&self) -> usize {
		self.log_probabilities.len()
	}

	/// Returns the smoothed natural-log probability of `gram`.
	///
	/// Returns `None` when the gram is outside the shared vocabulary, i.e. no
	/// model saw it during training. Such grams are left out of text scores
	/// instead of being penalized.
	pub fn log_probability(&self, gram: &str) -> Option<f64> {
		self.log_probabilities.get(gram).copied()
	}

	/// Returns the smoothed probability of `gram`, or `None` outside the vocabulary.
	pub fn probability(&self, gram: &str) -> Option<f64> {
		self.log_probability(gram).map(f64::exp)
	}

	/// Iterates over `(gram, log-probability)` pairs of the whole vocabulary.
	pub fn log_probabilities(&self) -> impl Iterator<Item = (&str, f64)> {
		self.log_probabilities.iter().map(|(gram, log_p)| (gram.as_str(), *log_p))
	}

	/// Scores `text` under this model.
	///
	/// Sums the log-probabilities of every gram of the padded text and counts
	/// the grams that fell outside the vocabulary.
	pub fn score(&self, text: &str) -> TextScore {
		let mut score = TextScore::default();
		for gram in self.extractor.grams(text) {
			score.grams += 1;
			match self.log_probability(&gram) {
				Some(log_p) => score.log_probability += log_p,
				None => score.unseen += 1,
			}
		}
		score
	}
}

/// Score of one text under one model.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextScore {
	/// Sum of the log-probabilities of the in-vocabulary grams.
	pub log_probability: f64,

	/// Number of grams extracted from the text.
	pub grams: usize,

	/// Number of grams outside the shared vocabulary.
	pub unseen: usize,
}

impl TextScore {
	/// Fraction of grams outside the vocabulary, 0 when the text produced no gram.
	pub fn unseen_fraction(&self) -> f64 {
		if self.grams == 0 {
			return 0.0;
		}
		self.unseen as f64 / self.grams as f64
	}
}
