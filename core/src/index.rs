use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One keyword's appearance in one document: the document name and how many
/// times the keyword occurs there. Fixed once its document has been loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

/// In-memory inverted index: keyword → posting list sorted by descending
/// frequency.
///
/// Each posting list holds at most one occurrence per document; entries with
/// equal frequency keep the order in which their documents were merged.
/// The index only grows while documents are being merged and is read-only
/// thereafter.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    postings: HashMap<String, Vec<Occurrence>>,
    document_count: u32,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one document's keyword map into the index. New keywords start a
    /// singleton posting list; existing keywords get the occurrence appended
    /// and moved into sorted position. Order across keywords does not affect
    /// the final state.
    pub fn merge(&mut self, keywords: HashMap<String, Occurrence>) {
        for (keyword, occurrence) in keywords {
            let list = self.postings.entry(keyword).or_default();
            list.push(occurrence);
            insert_last_occurrence(list);
        }
        self.document_count += 1;
    }

    /// The posting list for `keyword`, empty if the keyword is not indexed.
    pub fn postings(&self, keyword: &str) -> &[Occurrence] {
        self.postings.get(keyword).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    pub fn keyword_count(&self) -> usize {
        self.postings.len()
    }

    pub fn document_count(&self) -> u32 {
        self.document_count
    }
}

/// Move the last element of `occs` (the freshly appended occurrence) into
/// its sorted position, assuming `occs[..n-1]` is already sorted by
/// descending frequency. Returns the index the element landed at.
///
/// The insertion point comes from a binary search over the sorted prefix.
/// The probe stops early on an equal frequency, and an item that is not
/// strictly greater than the final probe is placed after it, so documents
/// merged earlier stay ahead of later ones at the same frequency.
pub fn insert_last_occurrence(occs: &mut Vec<Occurrence>) -> usize {
    if occs.len() <= 1 {
        return 0;
    }
    let item = occs.remove(occs.len() - 1);

    let mut lo: isize = 0;
    let mut hi: isize = occs.len() as isize - 1;
    let mut mid: isize = 0;
    while lo <= hi {
        mid = (lo + hi) / 2;
        let probe = occs[mid as usize].frequency;
        if item.frequency == probe {
            break;
        }
        if item.frequency < probe {
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }

    let at = if item.frequency > occs[mid as usize].frequency {
        mid as usize
    } else {
        mid as usize + 1
    };
    occs.insert(at, item);
    at
}
