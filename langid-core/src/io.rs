use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::{LangIdError, Result};

/// Reads a text file and returns its data lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Stops at the first empty line, which ends the data section
pub(crate) fn read_lines<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let path = filename.as_ref();
	let read_error = |source| LangIdError::Read { path: path.to_path_buf(), source };

	let mut contents = String::new();
	File::open(path)
		.map_err(read_error)?
		.read_to_string(&mut contents)
		.map_err(read_error)?;

	Ok(contents
		.lines()
		.take_while(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

/// Writes every item on its own `\n`-terminated line, truncating the file first.
pub(crate) fn write_lines<P, I, T>(filename: P, lines: I) -> Result<()>
where
	P: AsRef<Path>,
	I: IntoIterator<Item = T>,
	T: AsRef<str>,
{
	let path = filename.as_ref();
	let write_error = |source| LangIdError::Write { path: path.to_path_buf(), source };

	let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
	for line in lines {
		writer.write_all(line.as_ref().as_bytes()).map_err(write_error)?;
		writer.write_all(b"\n").map_err(write_error)?;
	}
	writer.flush().map_err(write_error)
}
