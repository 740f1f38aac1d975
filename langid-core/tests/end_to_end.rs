use std::fs;
use std::path::{Path, PathBuf};

use langid_core::{LangIdConfig, LangIdError, Language, LanguageIdentifier, Prediction};
use tempfile::TempDir;

const TRAINING: &str = "\
malaysian|kenapa awak buat macam itu
malaysian|saya tidak suka makan nasi lemak
indonesian|kenapa kamu begitu
indonesian|aku tidak tahu apa yang terjadi
tamil|நீ ஏன் அப்படி செய்தாய்
tamil|எனக்கு தெரியாது
";

const TEST: &str = "\
kenapa awak buat itu
aku tidak tahu apa yang terjadi
நீ ஏன் அப்படி
Привет, как дела?
";

fn pipe_config() -> LangIdConfig {
	LangIdConfig::default().with_delimiter('|')
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
	let path = dir.path().join(name);
	fs::write(&path, contents).unwrap();
	path
}

fn run(dir: &TempDir, train: &Path, test: &Path, output: &str) -> String {
	let identifier = LanguageIdentifier::train_from_file(train, &pipe_config()).unwrap();
	let output = dir.path().join(output);
	identifier.classify_file(test, &output).unwrap();
	fs::read_to_string(output).unwrap()
}

#[test]
fn labels_every_test_line_in_order() {
	let dir = tempfile::tempdir().unwrap();
	let train = write(&dir, "train.txt", TRAINING);
	let test = write(&dir, "test.txt", TEST);

	let output = run(&dir, &train, &test, "out.txt");
	let labels: Vec<&str> = output.lines().collect();

	assert_eq!(labels, vec!["malaysian", "indonesian", "tamil", "other"]);
	assert!(output.ends_with('\n'));
}

#[test]
fn summary_counts_each_prediction() {
	let dir = tempfile::tempdir().unwrap();
	let train = write(&dir, "train.txt", TRAINING);
	let test = write(&dir, "test.txt", TEST);

	let identifier = LanguageIdentifier::train_from_file(&train, &pipe_config()).unwrap();
	let summary = identifier.classify_file(&test, dir.path().join("out.txt")).unwrap();

	assert_eq!(summary.lines, 4);
	assert_eq!(summary.per_prediction.get(&Prediction::Other), Some(&1));
	assert_eq!(summary.per_prediction.get(&Prediction::Language(Language::Tamil)), Some(&1));
}

#[test]
fn repeated_runs_are_byte_identical() {
	let dir = tempfile::tempdir().unwrap();
	let train = write(&dir, "train.txt", TRAINING);
	let test = write(&dir, "test.txt", TEST);

	let first = run(&dir, &train, &test, "first.txt");
	let second = run(&dir, &train, &test, "second.txt");
	assert_eq!(first, second);
}

#[test]
fn blank_line_ends_test_input() {
	let dir = tempfile::tempdir().unwrap();
	let train = write(&dir, "train.txt", TRAINING);
	let test = write(&dir, "test.txt", "kenapa awak\n\nnot classified\n");

	let output = run(&dir, &train, &test, "out.txt");
	assert_eq!(output, "malaysian\n");
}

#[test]
fn space_delimited_corpus_uses_default_config() {
	let dir = tempfile::tempdir().unwrap();
	let train = write(&dir, "train.txt", &TRAINING.replace('|', " "));

	let identifier = LanguageIdentifier::train_from_file(&train, &LangIdConfig::default()).unwrap();
	assert_eq!(
		identifier.classify("kenapa awak buat itu").prediction,
		Prediction::Language(Language::Malaysian)
	);
}

#[test]
fn malformed_training_line_is_fatal() {
	let dir = tempfile::tempdir().unwrap();
	let train = write(&dir, "train.txt", "malaysian|kenapa\nno delimiter here\n");

	let result = LanguageIdentifier::train_from_file(&train, &pipe_config());
	assert!(matches!(result, Err(LangIdError::MalformedLine { line: 2, .. })));
}

#[test]
fn missing_input_files_are_reported() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("missing.txt");

	let result = LanguageIdentifier::train_from_file(&missing, &pipe_config());
	assert!(matches!(result, Err(LangIdError::Read { .. })));

	let train = write(&dir, "train.txt", TRAINING);
	let identifier = LanguageIdentifier::train_from_file(&train, &pipe_config()).unwrap();
	let result = identifier.classify_file(&missing, dir.path().join("out.txt"));
	assert!(matches!(result, Err(LangIdError::Read { .. })));
}
