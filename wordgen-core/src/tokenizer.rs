//! Splits raw corpus text into lowercase word tokens.

/// Returns `true` for characters that separate two tokens.
///
/// Anything that is not a letter, a digit or an underscore ends a token.
fn is_boundary(c: char) -> bool {
	!(c.is_alphanumeric() || c == '_')
}

/// Lowercases a raw token and keeps its letters only.
///
/// Digits and underscores survive the boundary split but are not part of the
/// model, so they are dropped here.
fn normalize(raw: &str) -> String {
	raw.chars()
		.filter(|c| c.is_alphabetic())
		.flat_map(char::to_lowercase)
		.collect()
}

/// Lazily splits `text` into lowercase tokens.
///
/// - Splits on runs of non-word characters
/// - Strips any remaining non-letter character
/// - Skips empty tokens (leading/trailing punctuation never yields one)
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
	text.split(is_boundary)
		.map(normalize)
		.filter(|token| !token.is_empty())
}
