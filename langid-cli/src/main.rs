use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use langid_core::{LangIdConfig, LanguageIdentifier};
use tracing_subscriber::EnvFilter;

/// Character n-gram language identifier.
///
/// Trains one model per language on the labelled training file, then writes
/// one predicted label per line of the test file to the output file.
#[derive(Parser, Debug)]
#[command(name = "langid", version)]
struct Args {
	/// Labelled training file (`<label><delimiter><text>` per line)
	train: PathBuf,

	/// Unlabelled test file (one text per line)
	test: PathBuf,

	/// Prediction file (one label per line)
	output: PathBuf,

	/// TOML configuration file
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Number of characters per gram
	#[arg(short = 'n', long)]
	gram_size: Option<usize>,

	/// Unseen-gram fraction at or above which a text is labelled "other"
	#[arg(short, long)]
	threshold: Option<f64>,

	/// Separator between label and text in the training file
	#[arg(short, long)]
	delimiter: Option<char>,

	/// Lowercase texts before extracting grams
	#[arg(long)]
	case_fold: bool,

	/// Increase log verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

impl Args {
	/// Loads the configuration file (if any), then applies command-line overrides.
	fn config(&self) -> Result<LangIdConfig> {
		let mut config = match &self.config {
			Some(path) => LangIdConfig::load(path)
				.with_context(|| format!("loading config {}", path.display()))?,
			None => LangIdConfig::default(),
		};

		if let Some(gram_size) = self.gram_size {
			config.set_gram_size(gram_size)?;
		}
		if let Some(threshold) = self.threshold {
			config.set_other_threshold(threshold)?;
		}
		if let Some(delimiter) = self.delimiter {
			config.delimiter = delimiter;
		}
		if self.case_fold {
			config.case_fold = true;
		}

		Ok(config)
	}

	fn log_level(&self) -> &'static str {
		match self.verbose {
			0 => "warn",
			1 => "info",
			2 => "debug",
			_ => "trace",
		}
	}
}

fn main() -> Result<()> {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::new(args.log_level()))
		.with_writer(std::io::stderr)
		.init();

	let config = args.config()?;

	let identifier = LanguageIdentifier::train_from_file(&args.train, &config)
		.with_context(|| format!("training on {}", args.train.display()))?;

	let summary = identifier
		.classify_file(&args.test, &args.output)
		.with_context(|| format!("classifying {}", args.test.display()))?;

	println!("Labelled {} lines into {}", summary.lines, args.output.display());
	for (prediction, count) in &summary.per_prediction {
		println!("  {prediction}: {count}");
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn positional_paths_are_required_in_order() {
		let args = Args::try_parse_from(["langid", "train.txt", "test.txt", "out.txt"]).unwrap();
		assert_eq!(args.train, PathBuf::from("train.txt"));
		assert_eq!(args.test, PathBuf::from("test.txt"));
		assert_eq!(args.output, PathBuf::from("out.txt"));

		assert!(Args::try_parse_from(["langid", "train.txt", "test.txt"]).is_err());
	}

	#[test]
	fn flags_override_defaults() {
		let args = Args::try_parse_from([
			"langid", "a", "b", "c", "-n", "3", "-t", "0.5", "-d", "|", "--case-fold", "-vv",
		])
		.unwrap();
		let config = args.config().unwrap();

		assert_eq!(config.gram_size(), 3);
		assert_eq!(config.other_threshold(), 0.5);
		assert_eq!(config.delimiter, '|');
		assert!(config.case_fold);
		assert_eq!(args.log_level(), "debug");
	}

	#[test]
	fn invalid_threshold_is_rejected() {
		let args = Args::try_parse_from(["langid", "a", "b", "c", "--threshold", "2"]).unwrap();
		assert!(args.config().is_err());
	}
}
