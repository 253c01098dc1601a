use crate::index::KeywordIndex;
use crate::keyword::NoiseWords;
use crate::loader::load_document;
use crate::search::top_search;
use crate::source::Corpus;
use anyhow::Result;

/// Accumulates documents into a [`KeywordIndex`].
///
/// Consuming the builder with [`finish`](IndexBuilder::finish) is the only
/// way to obtain a [`SearchEngine`], so queries can only ever run against a
/// fully built index.
pub struct IndexBuilder {
    noise: NoiseWords,
    index: KeywordIndex,
}

impl IndexBuilder {
    pub fn new(noise: NoiseWords) -> Self {
        Self { noise, index: KeywordIndex::new() }
    }

    /// Load one document's words and merge them into the index.
    pub fn add_document(&mut self, document: &str, words: impl IntoIterator<Item = String>) {
        let keywords = load_document(document, words, &self.noise);
        tracing::debug!(document, keywords = keywords.len(), "merged document");
        self.index.merge(keywords);
    }

    /// Complete the build phase. The index is read-only from here on.
    pub fn finish(self) -> SearchEngine {
        SearchEngine { index: self.index }
    }
}

/// Read-only query engine over a fully built keyword index.
pub struct SearchEngine {
    index: KeywordIndex,
}

impl SearchEngine {
    /// Build an index over `documents` in the order given, reading each
    /// through `corpus`. A document that cannot be opened aborts the whole
    /// build and the partial index is dropped with the builder.
    pub fn build<C: Corpus>(
        documents: impl IntoIterator<Item = String>,
        noise: NoiseWords,
        corpus: &C,
    ) -> Result<SearchEngine> {
        let mut builder = IndexBuilder::new(noise);
        for document in documents {
            let words = corpus.open(&document)?;
            builder.add_document(&document, words);
        }
        let engine = builder.finish();
        tracing::info!(
            documents = engine.index.document_count(),
            keywords = engine.index.keyword_count(),
            "index build complete"
        );
        Ok(engine)
    }

    /// Top-5 OR query over two keywords. Keywords are matched verbatim
    /// against the index's canonical lower-case keys; lower-casing query
    /// terms is the caller's job.
    pub fn search(&self, keyword1: &str, keyword2: &str) -> Vec<String> {
        top_search(&self.index, keyword1, keyword2)
    }

    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split_whitespace().map(str::to_string)
    }

    #[test]
    fn builder_feeds_documents_into_the_index() {
        let mut builder = IndexBuilder::new(NoiseWords::new(["the".to_string()]));
        builder.add_document("d1", words("the cat sat on the cat"));
        builder.add_document("d2", words("cat nap"));
        let engine = builder.finish();

        assert_eq!(engine.index().document_count(), 2);
        assert_eq!(engine.index().postings("cat").len(), 2);
        assert_eq!(engine.index().postings("cat")[0].frequency, 2);
        assert_eq!(engine.search("cat", "nap"), vec!["d1", "d2"]);
    }
}
