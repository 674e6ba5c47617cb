//! End-to-end tests: build a dictionary, query it through a transducer.

use lazy_levenshtein::prelude::*;
use lazy_levenshtein::transducer::{search, Candidate, TransducerAttributes};
use std::collections::HashSet;

fn sorted_candidates<I: Iterator<Item = Candidate>>(iter: I) -> Vec<(String, usize)> {
    let mut results: Vec<_> = iter.map(|c| (c.term, c.distance)).collect();
    results.sort();
    results
}

#[test]
fn test_basic_query() {
    let dict = Dawg::from_terms(vec!["test", "testing", "tested", "tester"]);
    let transducer = Transducer::new(dict, Algorithm::Standard);

    let results: Vec<_> = transducer.query("test", 0).collect();
    assert_eq!(results, vec!["test"]);

    let results: HashSet<_> = transducer.query("test", 2).collect();
    let expected: HashSet<_> = ["test", "tested", "tester"].iter().map(|s| s.to_string()).collect();
    assert_eq!(results, expected);
}

#[test]
fn test_misspelled_vowel() {
    let dict = Dawg::build(["bat", "cat", "cats"], true).unwrap();
    let transducer = Transducer::standard(dict);

    assert_eq!(
        sorted_candidates(transducer.query_with_distance("cot", 1)),
        vec![("cat".to_string(), 1)]
    );
}

#[test]
fn test_longer_term_and_prefix() {
    let dict = Dawg::build(["bat", "cat", "cats"], true).unwrap();
    let transducer = Transducer::standard(dict);

    assert_eq!(
        sorted_candidates(transducer.query_with_distance("cats", 1)),
        vec![("cat".to_string(), 1), ("cats".to_string(), 0)]
    );
}

#[test]
fn test_transposition_only_counts_once_with_transposition() {
    let dict = Dawg::build(["ab"], true).unwrap();

    let standard = Transducer::standard(dict.clone());
    assert_eq!(standard.query_with_distance("ba", 1).count(), 0);
    assert_eq!(
        sorted_candidates(standard.query_with_distance("ba", 2)),
        vec![("ab".to_string(), 2)]
    );

    let transposition = Transducer::with_transposition(dict);
    assert_eq!(
        sorted_candidates(transposition.query_with_distance("ba", 1)),
        vec![("ab".to_string(), 1)]
    );
}

#[test]
fn test_merge_and_split_ocr_confusions() {
    let dict = Dawg::from_terms(vec!["modern", "corn", "clean"]);
    let transducer = Transducer::with_merge_split(dict);

    // "m" read as "rn"
    let results: Vec<_> = transducer.query("modem", 1).collect();
    assert_eq!(results, vec!["modern"]);
    // "rn" read as "m"
    assert_eq!(
        sorted_candidates(transducer.query_with_distance("rnodern", 1)),
        vec![("modern".to_string(), 1)]
    );
    // "d" read as "cl"
    assert_eq!(
        sorted_candidates(transducer.query_with_distance("dean", 1)),
        vec![("clean".to_string(), 1)]
    );
}

#[test]
fn test_zero_distance_is_membership() {
    let terms = ["alpha", "beta", "gamma", "delta"];
    let dict = Dawg::from_terms(terms);
    let transducer = Transducer::standard(dict);

    for term in terms {
        let results: Vec<_> = transducer.query_with_distance(term, 0).collect();
        assert_eq!(results, vec![Candidate::new(term, 0)]);
    }
    assert_eq!(transducer.query("epsilon", 0).count(), 0);
}

#[test]
fn test_empty_dictionary_yields_nothing() {
    let dict = Dawg::build(Vec::<String>::new(), true).unwrap();
    let transducer = Transducer::standard(dict);

    assert_eq!(transducer.query("", 5).count(), 0);
    assert_eq!(transducer.query("anything", 5).count(), 0);
}

#[test]
fn test_empty_query_matches_short_terms() {
    let dict = Dawg::from_terms(vec!["a", "ab", "abc", "b"]);
    let transducer = Transducer::standard(dict);

    assert_eq!(
        sorted_candidates(transducer.query_with_distance("", 1)),
        vec![("a".to_string(), 1), ("b".to_string(), 1)]
    );
}

#[test]
fn test_empty_term_in_dictionary() {
    let dict = Dawg::build(["", "a"], true).unwrap();
    let transducer = Transducer::standard(dict);

    let results: Vec<_> = transducer.query_with_distance("", 0).collect();
    assert_eq!(results, vec![Candidate::new("", 0)]);

    let results: Vec<_> = transducer.query_with_distance("a", 1).collect();
    assert_eq!(results, vec![Candidate::new("", 1), Candidate::new("a", 0)]);
}

#[test]
fn test_no_duplicate_candidates() {
    let dict = Dawg::from_terms(vec!["aa", "aaa", "aab", "ab", "aba", "b", "ba", "bab"]);
    for algorithm in Algorithm::ALL {
        let transducer = Transducer::new(dict.clone(), algorithm);
        let results: Vec<_> = transducer.query("aba", 3).collect();
        let unique: HashSet<_> = results.iter().cloned().collect();
        assert_eq!(results.len(), unique.len(), "{} produced duplicates", algorithm);
    }
}

#[test]
fn test_unicode_terms() {
    let dict = Dawg::from_terms(vec!["café", "cafe", "naïve", "日本語"]);
    let transducer = Transducer::standard(dict);

    assert_eq!(
        sorted_candidates(transducer.query_with_distance("cafè", 1)),
        vec![("cafe".to_string(), 1), ("café".to_string(), 1)]
    );
    assert_eq!(
        sorted_candidates(transducer.query_with_distance("日本", 1)),
        vec![("日本語".to_string(), 1)]
    );
}

#[test]
fn test_large_distance_returns_everything() {
    let terms = ["a", "bb", "ccc", "dddd"];
    let dict = Dawg::from_terms(terms);
    let transducer = Transducer::standard(dict);

    let results: HashSet<_> = transducer.query("", 10).collect();
    assert_eq!(results.len(), terms.len());
}

#[test]
fn test_builder_driven_search() {
    let dict = Dawg::from_terms(vec!["color", "colour", "collar"]);
    let transducer = TransducerBuilder::new()
        .dictionary(dict)
        .algorithm_name("standard")
        .default_max_distance(1)
        .build()
        .unwrap();

    let mut results: Vec<_> = transducer.search("colr").collect();
    results.sort_by(|a, b| a.term().cmp(b.term()));
    assert_eq!(results, vec![Match::Candidate(Candidate::new("color", 1))]);
}

#[test]
fn test_search_entry_point_with_custom_factory() {
    let dict = Dawg::from_terms(vec!["spell", "spill", "spelt"]);
    let attributes = TransducerAttributes::with_factory(dict, Algorithm::Standard, 1, |term: String, d: usize| {
        format!("{}={}", term, d)
    });

    let mut results: Vec<_> = search("spell", 1, &attributes).collect();
    results.sort();
    assert_eq!(results, vec!["spell=0", "spelt=1", "spill=1"]);
}

#[test]
fn test_query_iterator_is_lazy() {
    // A dictionary with many matches still returns the first quickly and
    // leaves the rest unexplored until asked.
    let terms: Vec<String> = (0..2000).map(|i| format!("w{:04}", i)).collect();
    let dict = Dawg::from_terms(&terms);
    let transducer = Transducer::standard(dict);

    let first: Vec<_> = transducer.query("w0000", 2).take(1).collect();
    assert_eq!(first.len(), 1);
}

#[test]
fn test_very_long_term_query_and_drop() {
    let term = "a".repeat(300_000);
    let dict = Dawg::build([&term], true).unwrap();
    let transducer = Transducer::standard(dict);

    let mut iter = transducer.query(&term, 0);
    assert_eq!(iter.next().as_deref(), Some(term.as_str()));
    // Dropping the search releases a 300k-deep parent chain
    drop(iter);
    assert_eq!(transducer.query("a", 0).count(), 0);
}
