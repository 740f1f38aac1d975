use std::fmt;

/// The closed set of trained languages.
///
/// The declaration order is significant: it is the order in which models
/// are scored, so it decides ties between equal log-probabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
	Malaysian,
	Indonesian,
	Tamil,
}

impl Language {
	/// Every trained language, in tie-breaking order.
	pub const ALL: [Language; 3] = [Language::Malaysian, Language::Indonesian, Language::Tamil];

	/// Label token used in training and output files.
	pub fn label(self) -> &'static str {
		match self {
			Language::Malaysian => "malaysian",
			Language::Indonesian => "indonesian",
			Language::Tamil => "tamil",
		}
	}

	/// Parses a label token, returning `None` for anything outside the closed set.
	pub fn from_label(label: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|language| language.label() == label)
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Label assigned to a classified text.
///
/// `Other` is synthetic: no model is trained for it, it is the fallback for
/// texts whose grams are mostly absent from the shared vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prediction {
	Language(Language),
	Other,
}

impl Prediction {
	/// Label token written to the prediction file.
	pub fn label(self) -> &'static str {
		match self {
			Prediction::Language(language) => language.label(),
			Prediction::Other => "other",
		}
	}
}

impl fmt::Display for Prediction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl From<Language> for Prediction {
	fn from(language: Language) -> Self {
		Prediction::Language(language)
	}
}
