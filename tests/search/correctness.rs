//! Core search correctness: every occurrence found, snippets faithful to
//! the corpus, matching case-insensitive.

use super::common::{
    build_searcher, match_offset, naive_offsets, soliloquy_searcher, strip_marks, SOLILOQUY,
};
use concord::MARK_OPEN;

#[test]
fn one_hit_per_occurrence() {
    let searcher = soliloquy_searcher();

    for query in ["to", "the", "of", "To be", "s"] {
        let hits = searcher.search(query).unwrap();
        let offsets: Vec<usize> = hits.iter().map(match_offset).collect();
        assert_eq!(offsets, naive_offsets(SOLILOQUY, query), "query {:?}", query);
    }
}

#[test]
fn snippet_concatenation_equals_corpus_slice() {
    let searcher = soliloquy_searcher();

    for hit in searcher.search("the").unwrap() {
        assert_eq!(
            strip_marks(&hit.snippet),
            SOLILOQUY[hit.context_start..hit.context_end],
            "snippet must reassemble into the exact corpus slice"
        );
    }
}

#[test]
fn matching_is_case_insensitive() {
    let searcher = soliloquy_searcher();

    // "To be" appears capitalized at the start and lowercase later.
    let hits = searcher.search("TO BE").unwrap();
    assert_eq!(hits.len(), 2);

    let lower: Vec<usize> = searcher
        .search("to be")
        .unwrap()
        .iter()
        .map(match_offset)
        .collect();
    let upper: Vec<usize> = hits.iter().map(match_offset).collect();
    assert_eq!(lower, upper);
}

#[test]
fn snippets_preserve_original_casing() {
    let searcher = soliloquy_searcher();

    let hits = searcher.search("to be,").unwrap();
    assert!(hits[0].snippet.starts_with("<mark>To be,</mark>"));
    assert!(hits[1].snippet.contains("<mark>to be,</mark>"));
}

#[test]
fn to_be_example_returns_marked_matches() {
    let searcher = soliloquy_searcher();

    let hits = searcher.search("to be").unwrap();
    assert!(hits.len() >= 2);
    for hit in &hits {
        let folded = hit.snippet.to_ascii_lowercase();
        assert!(folded.contains("<mark>to be</mark>"));
    }
}

#[test]
fn hits_are_ordered_by_ascending_offset() {
    let searcher = soliloquy_searcher();

    let offsets: Vec<usize> = searcher
        .search("t")
        .unwrap()
        .iter()
        .map(match_offset)
        .collect();
    let mut sorted = offsets.clone();
    sorted.sort_unstable();
    assert_eq!(offsets, sorted);
}

#[test]
fn absent_query_returns_empty_sequence() {
    let searcher = soliloquy_searcher();
    assert!(searcher.search("yorick").unwrap().is_empty());
}

#[test]
fn overlapping_occurrences_are_all_reported() {
    let searcher = build_searcher("banana banana");

    let hits = searcher.search("ana").unwrap();
    let offsets: Vec<usize> = hits.iter().map(match_offset).collect();
    assert_eq!(offsets, vec![1, 3, 8, 10]);
}

#[test]
fn every_hit_contains_exactly_one_marked_region() {
    let searcher = soliloquy_searcher();

    for hit in searcher.search("or").unwrap() {
        assert_eq!(hit.snippet.matches(MARK_OPEN).count(), 1);
        assert_eq!(hit.snippet.matches("</mark>").count(), 1);
    }
}
