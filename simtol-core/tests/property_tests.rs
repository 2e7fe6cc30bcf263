//! Property tests for the comparison pipeline

use proptest::prelude::*;
use simtol_core::*;

/// Texts over a tiny vocabulary so that shared runs are common
fn text_strategy(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["alpha", "beta", "gamma", "delta", "Alpha", "x"]),
        0..max_words,
    )
    .prop_map(|words| words.join(" "))
}

fn config_strategy() -> impl Strategy<Value = MatchConfig> {
    (
        prop::bool::ANY,
        1usize..6,
        0usize..30,
        0usize..25,
        prop::bool::ANY,
    )
        .prop_map(
            |(chars, min_match, merge_gap, min_display, normalize)| MatchConfig {
                granularity: if chars {
                    Granularity::Character
                } else {
                    Granularity::Word
                },
                min_match_length: Some(min_match),
                merge_gap_threshold: merge_gap,
                min_display_length: min_display,
                normalize_case: normalize,
            },
        )
}

proptest! {
    #[test]
    fn prop_deterministic(
        a in text_strategy(40),
        b in text_strategy(40),
        config in config_strategy(),
    ) {
        let first = find_similar_patterns(&a, &b, &config).unwrap();
        let second = find_similar_patterns(&a, &b, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_sorted_and_separated_in_a(
        a in text_strategy(40),
        b in text_strategy(40),
        config in config_strategy(),
    ) {
        let spans = find_similar_patterns(&a, &b, &config).unwrap();
        for pair in spans.windows(2) {
            prop_assert!(pair[0].a_start <= pair[1].a_start);
            prop_assert!(pair[1].a_start >= pair[0].a_end);
            // Consecutive outputs were never eligible for merging
            prop_assert!(pair[1].a_start - pair[0].a_end >= config.merge_gap_threshold);
        }
    }

    #[test]
    fn prop_offsets_within_original_texts(
        a in text_strategy(40),
        b in text_strategy(40),
        config in config_strategy(),
    ) {
        let len_a = a.chars().count();
        let len_b = b.chars().count();
        for span in find_similar_patterns(&a, &b, &config).unwrap() {
            prop_assert!(span.a_start < span.a_end);
            prop_assert!(span.a_end <= len_a);
            prop_assert!(span.b_start.max(span.b_end) <= len_b);
        }
    }

    #[test]
    fn prop_merging_is_monotone(
        a in text_strategy(40),
        b in text_strategy(40),
        config in config_strategy(),
        extra_gap in 0usize..40,
    ) {
        let wider = MatchConfig {
            merge_gap_threshold: config.merge_gap_threshold + extra_gap,
            ..config.clone()
        };
        let narrow_count = find_similar_patterns(&a, &b, &config).unwrap().len();
        let wide_count = find_similar_patterns(&a, &b, &wider).unwrap().len();
        prop_assert!(wide_count <= narrow_count);
    }

    #[test]
    fn prop_identity_is_one_full_span(text in text_strategy(30)) {
        let len = text.chars().count();
        prop_assume!(len >= 5);

        let config = MatchConfig::builder()
            .granularity(Granularity::Character)
            .min_match_length(5)
            .min_display_length(3)
            .build()
            .unwrap();

        let spans = find_similar_patterns(&text, &text, &config).unwrap();
        prop_assert_eq!(spans, vec![MergedSpan::new(0, len, 0, len)]);
    }

    #[test]
    fn prop_blocks_are_equal_runs(
        a in prop::collection::vec(0u8..4, 0..80),
        b in prop::collection::vec(0u8..4, 0..80),
        min_length in 1usize..6,
    ) {
        let blocks = find_blocks(&a, &b, min_length).unwrap();
        let mut last_end = 0;
        for block in blocks {
            prop_assert!(block.len >= min_length);
            prop_assert!(block.pos_a >= last_end);
            prop_assert_eq!(
                &a[block.pos_a..block.end_a()],
                &b[block.pos_b..block.end_b()]
            );
            last_end = block.end_a();
        }
    }
}
