use anyhow::Result;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Lazy stream of whitespace-delimited tokens read from a text file.
///
/// Opening a missing or unreadable file fails; iteration itself does not.
/// The same stream shape serves all three inputs of an index build: the
/// document-name list, the noise-word list, and each document body.
pub struct WordFile {
    lines: Lines<BufReader<File>>,
    pending: VecDeque<String>,
}

impl WordFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self { lines: BufReader::new(file).lines(), pending: VecDeque::new() })
    }
}

impl Iterator for WordFile {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Some(word);
            }
            // a read error past open ends the stream
            let line = self.lines.next()?.ok()?;
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Per-document word source: resolves a document name to its token stream.
pub trait Corpus {
    type Words: Iterator<Item = String>;

    /// Open the named document's word stream. Fails if the document cannot
    /// be found; the caller treats that as fatal for the whole build.
    fn open(&self, document: &str) -> Result<Self::Words>;
}

/// Corpus rooted at a directory: document names resolve to paths relative
/// to the root.
#[derive(Debug, Clone)]
pub struct DirCorpus {
    root: PathBuf,
}

impl DirCorpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Corpus for DirCorpus {
    type Words = WordFile;

    fn open(&self, document: &str) -> Result<WordFile> {
        WordFile::open(self.root.join(document))
    }
}
