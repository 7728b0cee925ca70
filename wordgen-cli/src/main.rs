use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use wordgen_core::{
    CorpusConfig, CorpusSource, DEFAULT_COUNT, DEFAULT_LENGTH, Error, MAX_COUNT, MAX_LENGTH,
    WORDS_PER_LINE, WordGenerator, WordRequest,
};

/// Built-in sample corpus, used when no file is given or the file is unreadable.
const DEFAULT_CORPUS: &str = include_str!("../../data/default_corpus.txt");

/// Generate pronounceable random words from the chunks of a text.
#[derive(Parser, Debug)]
#[command(name = "wordgen", version)]
struct Args {
    /// Corpus file (defaults to a built-in speech)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Length of each word, at most 20
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Number of words, at most 1000
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Load or write a binary snapshot of the corpus table next to the file
    #[arg(long)]
    cache: bool,

    /// Print the chunk table and adjacency index first
    #[arg(long)]
    debug: bool,
}

/// Joins words into lines of `per_line` words.
fn batch_lines(words: &[String], per_line: usize) -> Vec<String> {
    words.chunks(per_line.max(1)).map(|line| line.join(" ")).collect()
}

/// Generates up to `request.count()` words, stopping at the first failure.
fn collect_words(generator: &WordGenerator, request: &WordRequest) -> (Vec<String>, Option<Error>) {
    let mut words = Vec::with_capacity(request.count());
    for _ in 0..request.count() {
        match generator.generate(request.length()) {
            Ok(word) => words.push(word),
            Err(err) => return (words, Some(err)),
        }
    }
    (words, None)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.length > MAX_LENGTH {
        warn!("length {} clamped to {MAX_LENGTH}", args.length);
    }
    if args.count > MAX_COUNT {
        warn!("count {} clamped to {MAX_COUNT}", args.count);
    }
    let request = WordRequest::new(args.length, args.count)?;

    // The built-in corpus is both the default source and the fallback
    // for an unreadable file
    let source = match args.file {
        Some(path) => CorpusSource::File(path),
        None => CorpusSource::Text(DEFAULT_CORPUS.to_owned()),
    };
    let config = CorpusConfig::new(source)
        .with_fallback(DEFAULT_CORPUS)
        .with_cache(args.cache);
    let generator = WordGenerator::from_config(&config).context("could not build the word generator")?;

    if args.debug {
        println!("{}", generator.inspect());
    }

    // Words generated before a failure are still printed
    let (words, failure) = collect_words(&generator, &request);
    for line in batch_lines(&words, WORDS_PER_LINE) {
        println!("{line}");
    }
    if let Some(err) = failure {
        return Err(err.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_corpus_builds() {
        let generator = WordGenerator::from_text(DEFAULT_CORPUS).unwrap();
        assert!(generator.stats().distinct_chunks > 100);
    }

    #[test]
    fn batches_of_five() {
        let words: Vec<String> = (0..12).map(|i| format!("w{i}")).collect();
        let lines = batch_lines(&words, WORDS_PER_LINE);
        assert_eq!(lines, vec!["w0 w1 w2 w3 w4", "w5 w6 w7 w8 w9", "w10 w11"]);
    }

    #[test]
    fn collects_the_full_count() {
        let generator = WordGenerator::from_text("banana").unwrap();
        let (words, failure) = collect_words(&generator, &WordRequest::new(7, 12).unwrap());
        assert!(failure.is_none());
        assert_eq!(words.len(), 12);
        assert_eq!(batch_lines(&words, WORDS_PER_LINE).len(), 3);
    }

    #[test]
    fn collection_stops_at_the_first_failure() {
        // "abc" has no follower, so no word longer than 3 can be walked
        let generator = WordGenerator::from_text("abc").unwrap();
        let (words, failure) = collect_words(&generator, &WordRequest::new(5, 10).unwrap());
        assert!(words.is_empty());
        assert!(matches!(failure, Some(Error::GenerationExhausted { length: 5, .. })));
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["wordgen"]);
        assert_eq!((args.length, args.count), (6, 150));
        assert!(args.file.is_none());
    }

    #[test]
    fn short_flags() {
        let args = Args::parse_from(["wordgen", "-f", "speech.txt", "-l", "9", "-n", "20", "--cache"]);
        assert_eq!(args.file, Some(PathBuf::from("speech.txt")));
        assert_eq!((args.length, args.count, args.cache), (9, 20, true));
    }
}
