use crate::index::Occurrence;
use crate::keyword::{normalize, NoiseWords};
use std::collections::HashMap;

/// Count keyword occurrences in one document.
///
/// Consumes the word stream in a single pass. Words that do not normalize to
/// a keyword are skipped; the first sighting of a keyword creates an
/// occurrence with frequency 1 and later sightings increment it.
pub fn load_document(
    document: &str,
    words: impl IntoIterator<Item = String>,
    noise: &NoiseWords,
) -> HashMap<String, Occurrence> {
    let mut keywords: HashMap<String, Occurrence> = HashMap::new();
    for word in words {
        if let Some(keyword) = normalize(&word, noise) {
            keywords
                .entry(keyword)
                .and_modify(|occ| occ.frequency += 1)
                .or_insert_with(|| Occurrence::new(document, 1));
        }
    }
    keywords
}
