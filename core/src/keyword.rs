use crate::source::WordFile;
use anyhow::Result;
use lazy_static::lazy_static;
use std::collections::HashSet;
use std::path::Path;

/// Punctuation stripped from the end of a candidate keyword.
const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

lazy_static! {
    static ref DEFAULT_NOISE: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","cannot","could",
            "did","do","does","doing","down","during",
            "each","few","for","from","further",
            "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","it","its","itself",
            "me","more","most","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","should","so","some","such",
            "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","very",
            "was","we","were","what","when","where","which","while","who","whom","why","with","would",
            "you","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// The set of words excluded from indexing. Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        Self { words: words.into_iter().map(|w| w.to_lowercase()).collect() }
    }

    /// Built-in English noise words, for callers without a noise-word file.
    pub fn default_english() -> Self {
        Self { words: DEFAULT_NOISE.iter().map(|w| (*w).to_string()).collect() }
    }

    /// Read a noise-word file: whitespace-separated words, loaded once.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(WordFile::open(path)?))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Reduce a raw token to its canonical keyword form, or `None` if the token
/// is not a keyword.
///
/// The token is trimmed, lower-cased, and stripped of trailing punctuation
/// (`.` `,` `?` `:` `;` `!`). What remains must be non-empty, purely
/// alphabetic, and absent from the noise-word set.
pub fn normalize(token: &str, noise: &NoiseWords) -> Option<String> {
    let mut word = token.trim().to_lowercase();
    while word.ends_with(&TRAILING_PUNCTUATION[..]) {
        word.pop();
    }
    if word.is_empty() {
        return None;
    }
    if !word.chars().all(char::is_alphabetic) {
        return None;
    }
    if noise.contains(&word) {
        return None;
    }
    Some(word)
}
