use crate::index::{KeywordIndex, Occurrence};
use std::collections::HashSet;

/// Maximum number of documents a query returns.
pub const MAX_RESULTS: usize = 5;

/// Answer an OR query over two keywords with the top matching documents.
///
/// Each keyword's posting list is looked up (a missing keyword counts as
/// empty) and truncated to its first `MAX_RESULTS` entries, which is enough
/// to produce a correct global top 5 from two descending lists. The two
/// lists are then merged in frequency order. Keywords are matched verbatim
/// against the index's canonical lower-case keys.
pub fn top_search(index: &KeywordIndex, keyword1: &str, keyword2: &str) -> Vec<String> {
    merge_ranked(head(index.postings(keyword1)), head(index.postings(keyword2)))
}

fn head(occs: &[Occurrence]) -> &[Occurrence] {
    &occs[..occs.len().min(MAX_RESULTS)]
}

/// Two-pointer merge of two descending-frequency lists into at most
/// `MAX_RESULTS` document names.
///
/// Equal head frequencies favor the first list. The same document heading
/// both lists is consumed from both and contributes one entry at the rank
/// where it first surfaced. A document already in the result is never added
/// again, whichever list it resurfaces in.
fn merge_ranked(first: &[Occurrence], second: &[Occurrence]) -> Vec<String> {
    let mut ranked = Vec::new();
    let mut emitted: HashSet<&str> = HashSet::new();
    let (mut i, mut j) = (0, 0);

    while ranked.len() < MAX_RESULTS {
        let pick = match (first.get(i), second.get(j)) {
            (Some(a), Some(b)) if a.document == b.document => {
                i += 1;
                j += 1;
                a
            }
            (Some(a), Some(b)) => {
                if a.frequency >= b.frequency {
                    i += 1;
                    a
                } else {
                    j += 1;
                    b
                }
            }
            (Some(a), None) => {
                i += 1;
                a
            }
            (None, Some(b)) => {
                j += 1;
                b
            }
            (None, None) => break,
        };
        if emitted.insert(pick.document.as_str()) {
            ranked.push(pick.document.clone());
        }
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Occurrence;
    use std::collections::HashMap;

    fn list(entries: &[(&str, u32)]) -> Vec<Occurrence> {
        entries.iter().map(|(d, f)| Occurrence::new(*d, *f)).collect()
    }

    fn index_with(lists: &[(&str, &[(&str, u32)])]) -> KeywordIndex {
        // feed documents through merge one occurrence at a time, lowest
        // frequency first, so each posting list comes out as written
        let mut index = KeywordIndex::new();
        for (keyword, entries) in lists {
            let mut reversed: Vec<_> = entries.to_vec();
            reversed.reverse();
            for (doc, freq) in reversed {
                let mut kws = HashMap::new();
                kws.insert(keyword.to_string(), Occurrence::new(doc, freq));
                index.merge(kws);
            }
        }
        for (keyword, entries) in lists {
            assert_eq!(index.postings(keyword), list(entries), "fixture for {keyword}");
        }
        index
    }

    #[test]
    fn merges_in_frequency_order_with_first_keyword_winning_ties() {
        let index = index_with(&[
            ("cat", &[("d1", 5), ("d2", 3)]),
            ("dog", &[("d3", 5), ("d1", 3)]),
        ]);
        assert_eq!(top_search(&index, "cat", "dog"), vec!["d1", "d3", "d2"]);
    }

    #[test]
    fn missing_keywords_produce_empty_result() {
        let index = index_with(&[("cat", &[("d1", 2)])]);
        assert!(top_search(&index, "bird", "fish").is_empty());
        assert_eq!(top_search(&index, "cat", "fish"), vec!["d1"]);
    }

    #[test]
    fn identical_keywords_self_merge_without_duplicates() {
        let seven: &[(&str, u32)] =
            &[("d1", 9), ("d2", 8), ("d3", 7), ("d4", 6), ("d5", 5), ("d6", 4), ("d7", 3)];
        let index = index_with(&[("fox", seven)]);
        assert_eq!(top_search(&index, "fox", "fox"), vec!["d1", "d2", "d3", "d4", "d5"]);
    }

    #[test]
    fn disjoint_full_lists_fill_all_five_slots() {
        let index = index_with(&[
            ("cat", &[("a1", 10), ("a2", 9), ("a3", 8), ("a4", 7), ("a5", 6), ("a6", 5)]),
            ("dog", &[("b1", 10), ("b2", 9), ("b3", 8), ("b4", 7), ("b5", 6)]),
        ]);
        let result = top_search(&index, "cat", "dog");
        assert_eq!(result.len(), MAX_RESULTS);
        assert_eq!(result, vec!["a1", "b1", "a2", "b2", "a3"]);
    }

    #[test]
    fn duplicates_deep_in_the_result_are_still_suppressed() {
        // "b" resurfaces from the second list after three entries are out;
        // a partial scan of the result would re-add it
        let result = merge_ranked(
            &list(&[("a", 9), ("b", 8)]),
            &list(&[("c", 7), ("b", 6), ("d", 5)]),
        );
        assert_eq!(result, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn drain_phase_deduplicates_too() {
        let result = merge_ranked(
            &list(&[("a", 9)]),
            &list(&[("b", 8), ("a", 7), ("c", 6)]),
        );
        assert_eq!(result, vec!["a", "b", "c"]);
    }

    #[test]
    fn shared_head_document_is_consumed_from_both_lists() {
        let result = merge_ranked(
            &list(&[("x", 4), ("y", 2)]),
            &list(&[("x", 4), ("z", 3)]),
        );
        assert_eq!(result, vec!["x", "z", "y"]);
    }

    #[test]
    fn empty_inputs_yield_empty_result() {
        assert!(merge_ranked(&[], &[]).is_empty());
        assert_eq!(merge_ranked(&list(&[("a", 1)]), &[]), vec!["a"]);
        assert_eq!(merge_ranked(&[], &list(&[("a", 1)])), vec!["a"]);
    }
}
