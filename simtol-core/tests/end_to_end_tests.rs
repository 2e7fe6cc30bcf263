//! End-to-end tests for the comparison pipeline

use simtol_core::*;

const FOX_A: &str = "the quick brown fox jumps over the lazy dog";
const FOX_B: &str = "a quick brown fox jumps over a very lazy dog";

fn words(min_match: usize, merge_gap: usize, min_display: usize) -> MatchConfig {
    MatchConfig::builder()
        .granularity(Granularity::Word)
        .min_match_length(min_match)
        .merge_gap_threshold(merge_gap)
        .min_display_length(min_display)
        .build()
        .unwrap()
}

#[test]
fn test_fox_scenario_three_word_minimum() {
    let config = MatchConfig::builder()
        .granularity(Granularity::Word)
        .min_match_length(3)
        .merge_gap_threshold(5)
        .build()
        .unwrap();

    let spans = find_similar_patterns(FOX_A, FOX_B, &config).unwrap();

    // "lazy dog" is only two words long, so it never forms a block of its own
    assert_eq!(spans, vec![MergedSpan::new(4, 30, 2, 28)]);
    assert_eq!(spans[0].text_a(FOX_A), "quick brown fox jumps over");
    assert_eq!(spans[0].text_b(FOX_B), "quick brown fox jumps over");
}

#[test]
fn test_fox_scenario_bridges_gap_to_lazy_dog() {
    let spans = find_similar_patterns(FOX_A, FOX_B, &words(2, 6, 5)).unwrap();

    assert_eq!(spans, vec![MergedSpan::new(4, 43, 2, 44)]);
    assert_eq!(
        spans[0].text_a(FOX_A),
        "quick brown fox jumps over the lazy dog"
    );
    assert_eq!(
        spans[0].text_b(FOX_B),
        "quick brown fox jumps over a very lazy dog"
    );
}

#[test]
fn test_gap_equal_to_threshold_is_not_merged() {
    let spans = find_similar_patterns(FOX_A, FOX_B, &words(2, 5, 5)).unwrap();

    assert_eq!(
        spans,
        vec![
            MergedSpan::new(4, 30, 2, 28),
            MergedSpan::new(35, 43, 36, 44)
        ]
    );
}

#[test]
fn test_insertion_in_b_is_bridged() {
    let a = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
    let b = "alpha beta gamma delta epsilon inserted zeta eta theta iota kappa";

    let spans = find_similar_patterns(a, b, &words(5, 20, 20)).unwrap();

    assert_eq!(spans, vec![MergedSpan::new(0, 56, 0, 65)]);
    assert_eq!(spans[0].text_b(b), b);
}

#[test]
fn test_identity_character_mode() {
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";
    let len = text.chars().count();

    let spans = find_similar_patterns(text, text, &MatchConfig::characters()).unwrap();

    assert_eq!(spans, vec![MergedSpan::new(0, len, 0, len)]);
}

#[test]
fn test_identity_word_mode() {
    let text = "one two three four five six seven eight nine ten eleven twelve";
    let len = text.chars().count();

    let spans = find_similar_patterns(text, text, &MatchConfig::words()).unwrap();

    assert_eq!(spans, vec![MergedSpan::new(0, len, 0, len)]);
}

#[test]
fn test_disjoint_texts_yield_nothing() {
    let a = "abcdefghijklmnopqrstuvwxyz abcdefghijklmnopqrstuvwxyz";
    let b = "0123456789 0123456789 0123456789 0123456789 0123456789";

    for config in [MatchConfig::characters(), MatchConfig::words()] {
        assert!(find_similar_patterns(a, b, &config).unwrap().is_empty());
    }
}

#[test]
fn test_empty_inputs_are_not_errors() {
    for config in [MatchConfig::characters(), MatchConfig::words()] {
        assert!(find_similar_patterns("", "", &config).unwrap().is_empty());
        assert!(find_similar_patterns("abc", "", &config).unwrap().is_empty());
        assert!(find_similar_patterns("", "abc", &config).unwrap().is_empty());
    }
}

#[test]
fn test_zero_min_match_length_is_invalid_for_any_input() {
    let config = MatchConfig {
        min_match_length: Some(0),
        ..MatchConfig::default()
    };

    for (a, b) in [("", ""), ("abc", ""), (FOX_A, FOX_B)] {
        let err = find_similar_patterns(a, b, &config).unwrap_err();
        assert!(matches!(err, MatchError::InvalidConfiguration { .. }));
    }
}

#[test]
fn test_case_normalization() {
    let upper = FOX_A.to_uppercase();

    let spans = find_similar_patterns(&upper, FOX_A, &words(3, 5, 20)).unwrap();
    assert_eq!(spans.len(), 1);
    // Offsets address the original, un-normalized text
    assert_eq!(spans[0].text_a(&upper), upper.as_str());
    assert_eq!(spans[0].text_b(FOX_A), FOX_A);

    let case_sensitive = MatchConfig::builder()
        .min_match_length(3)
        .normalize_case(false)
        .build()
        .unwrap();
    assert!(find_similar_patterns(&upper, FOX_A, &case_sensitive)
        .unwrap()
        .is_empty());
}

#[test]
fn test_multibyte_offsets_are_characters() {
    let a = "Ünïcödé text: the quick brown fox jumps";
    let b = "prefix — the quick brown fox jumps";

    let spans = find_similar_patterns(a, b, &words(3, 5, 20)).unwrap();

    assert_eq!(spans, vec![MergedSpan::new(14, 39, 9, 34)]);
    assert_eq!(spans[0].text_a(a), "the quick brown fox jumps");
    assert_eq!(spans[0].text_b(b), "the quick brown fox jumps");
}

#[test]
fn test_character_mode_tolerates_small_edits() {
    let a = "The committee approved the annual budget after a long and heated debate.";
    let b = "The committee has approved the annual budget after a long and heated debate!";
    let config = MatchConfig::builder()
        .granularity(Granularity::Character)
        .min_match_length(10)
        .min_display_length(10)
        .merge_gap_threshold(20)
        .build()
        .unwrap();

    let spans = find_similar_patterns(a, b, &config).unwrap();

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].a_start, 0);
    assert_eq!(
        spans[0].text_a(a),
        "The committee approved the annual budget after a long and heated debate"
    );
}

#[test]
fn test_finder_is_deterministic() {
    let finder = SimilarityFinder::builder()
        .min_match_length(2)
        .min_display_length(5)
        .build()
        .unwrap();

    let first = finder.compare(FOX_A, FOX_B).unwrap();
    for _ in 0..5 {
        assert_eq!(finder.find(FOX_A, FOX_B).unwrap(), first.spans);
    }
}

#[test]
fn test_comparison_stats() {
    let finder = SimilarityFinder::with_config(words(2, 6, 5)).unwrap();
    let comparison = finder.compare(FOX_A, FOX_B).unwrap();

    assert_eq!(comparison.stats.units_a, 9);
    assert_eq!(comparison.stats.units_b, 10);
    assert_eq!(comparison.stats.blocks_found, 2);
    assert_eq!(comparison.stats.blocks_kept, 2);
    assert_eq!(comparison.stats.chars_a, 43);
    assert_eq!(comparison.stats.covered_chars_a, 39);
}

#[test]
fn test_finder_shared_across_threads() {
    let finder = std::sync::Arc::new(SimilarityFinder::with_config(words(3, 5, 20)).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let finder = std::sync::Arc::clone(&finder);
            std::thread::spawn(move || finder.find(FOX_A, FOX_B).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![MergedSpan::new(4, 30, 2, 28)]);
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_spans_serialize_to_json() {
    let spans = find_similar_patterns(FOX_A, FOX_B, &words(3, 5, 20)).unwrap();
    let json = serde_json::to_string(&spans).unwrap();
    assert_eq!(
        json,
        r#"[{"a_start":4,"a_end":30,"b_start":2,"b_end":28}]"#
    );
}
