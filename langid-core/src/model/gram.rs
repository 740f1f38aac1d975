use crate::error::{LangIdError, Result};

/// Marker prepended to every text before it is cut into grams.
pub const START_CHAR: char = '<';

/// Marker appended to every text before it is cut into grams.
pub const END_CHAR: char = '>';

/// Cuts texts into overlapping, fixed-length character grams.
///
/// The text is padded with `n - 1` start markers and `n - 1` end markers, so
/// the first and last grams record the string boundaries and a text shorter
/// than `n` still produces grams. A text of `k` characters yields
/// `k + n - 1` grams; the empty text yields `n - 1` grams of padding alone.
///
/// # Limitations
/// The markers are ordinary characters: a text that itself contains `<` or
/// `>` produces grams indistinguishable from boundary grams (`"<<a"` and
/// `"a"` share `"<<<a"` at `n = 4`). The training corpora hold plain prose, so
/// the collision only shifts counts for such texts and never fails.
///
/// # Invariants
/// - `n` is always >= 2
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GramExtractor {
	n: usize,
	case_fold: bool,
}

impl GramExtractor {
	/// Creates an extractor for grams of `n` characters.
	///
	/// # Errors
	/// Returns an error if `n < 2`.
	pub fn new(n: usize, case_fold: bool) -> Result<Self> {
		if n < 2 {
			return Err(LangIdError::InvalidGramSize(n));
		}
		Ok(Self { n, case_fold })
	}

	/// Returns the padded character sequence of `text`.
	///
	/// # Notes
	/// - UTF-8 safe: works on characters, not bytes.
	/// - Lowercases the text first when case folding is enabled.
	fn pad(&self, text: &str) -> Vec<char> {
		let padding = self.n - 1;
		let mut chars = Vec::with_capacity(text.len() + 2 * padding);
		chars.extend(std::iter::repeat_n(START_CHAR, padding));
		if self.case_fold {
			chars.extend(text.chars().flat_map(char::to_lowercase));
		} else {
			chars.extend(text.chars());
		}
		chars.extend(std::iter::repeat_n(END_CHAR, padding));
		chars
	}

	/// Returns every overlapping gram of the padded `text`, in order.
	pub fn grams(&self, text: &str) -> Vec<String> {
		self.pad(text)
			.windows(self.n)
			.map(|window| window.iter().collect())
			.collect()
	}
}
