use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Streams a text source line by line into `f`.
///
/// - Splits on `\n` / `\r\n`
/// - Decodes lossily: invalid UTF-8 (e.g. a Latin-1 corpus) becomes U+FFFD
///   instead of failing the whole read
pub(crate) fn for_each_line<R: Read, F: FnMut(&str)>(reader: R, mut f: F) -> io::Result<()> {
	let mut reader = BufReader::new(reader);
	let mut buffer = Vec::new();
	loop {
		buffer.clear();
		if reader.read_until(b'\n', &mut buffer)? == 0 {
			return Ok(());
		}
		let line = buffer.strip_suffix(b"\n").unwrap_or(&buffer[..]);
		let line = line.strip_suffix(b"\r").unwrap_or(line);
		f(&*String::from_utf8_lossy(line));
	}
}

/// Reads a text source and returns all its lines as a `Vec<String>`.
///
/// Reads the entire source into memory, decoded as in `for_each_line`.
pub(crate) fn read_lines<R: Read>(reader: R) -> io::Result<Vec<String>> {
	let mut lines = Vec::new();
	for_each_line(reader, |line| lines.push(line.to_owned()))?;
	Ok(lines)
}

/// Reads a text file and returns all its lines.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	read_lines(File::open(filename)?)
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/input.txt` + `"bin"` → `data/input.bin`
pub(crate) fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

/// Returns `true` if `derived` exists and was modified no earlier than `source`.
///
/// Any metadata failure counts as stale.
pub(crate) fn is_fresh<P: AsRef<Path>, Q: AsRef<Path>>(derived: P, source: Q) -> bool {
	let modified = |p: &Path| fs::metadata(p).and_then(|m| m.modified());
	match (modified(derived.as_ref()), modified(source.as_ref())) {
		(Ok(derived), Ok(source)) => derived >= source,
		_ => false,
	}
}
