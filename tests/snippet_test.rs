//! Integration tests for snippet extraction.

use docsect::{
    extract_snippet, preprocess_for_matching, select_normalizer, PageRecord, ScoringWeights,
    SectionPipeline, SnippetScorer,
};

const PETS: &str = "Cats are mammals. Dogs are great pets and very loyal companions to humans everywhere. Birds can fly.";

#[test]
fn test_dogs_sentence_is_selected() {
    let snippet = extract_snippet(PETS, "dogs loyal", 250);
    assert_eq!(
        snippet,
        "Dogs are great pets and very loyal companions to humans everywhere."
    );
}

#[test]
fn test_dogs_sentence_too_long_for_cap() {
    // the only candidate does not fit, so its prefix is returned
    let snippet = extract_snippet(PETS, "dogs loyal", 20);
    assert_eq!(snippet, "Dogs are great pets ");
    assert_eq!(snippet.chars().count(), 20);
}

#[test]
fn test_snippet_never_exceeds_cap() {
    let body = "Segmentation splits each page at the lines that look like headers. \
                Every header starts a new section with an empty body accumulator. \
                Short sections are discarded after the whole page has been processed. \
                The snippet scorer ranks sentences by overlap with the query terms.";
    for max in 0..300 {
        let snippet = extract_snippet(body, "snippet query sentences", max);
        assert!(snippet.chars().count() <= max);
    }
}

#[test]
fn test_weights_change_ranking() {
    let body = "An opening sentence that mentions nothing of interest at all. \
                A later sentence about parsing tables and parsing figures.";

    let default_ranked = SnippetScorer::default().rank(body, "parsing");
    assert_eq!(default_ranked[0].index, 1);

    // a heavy position bonus outweighs the query overlap
    let weights = ScoringWeights {
        position_weight: 2.0,
        ..ScoringWeights::default()
    };
    let ranked = SnippetScorer::default().with_weights(weights).rank(body, "parsing");
    assert_eq!(ranked[0].index, 0);
}

#[test]
fn test_snippet_from_pipeline_section() {
    let pipeline = SectionPipeline::default();
    let page = PageRecord::new(
        1,
        "Discussion\nThe model struggles with rotated scans of older reports. \
         Header detection improves when font sizes are aligned with lines. \
         Future work covers multi column layouts in depth.",
    );
    let sections = pipeline.process_page("eval.txt", &page);
    assert_eq!(sections.len(), 1);

    let snippet = pipeline
        .snippet_scorer()
        .extract(&sections[0].body, "font sizes aligned");
    assert!(snippet.starts_with("Header detection improves"));
}

#[test]
fn test_normalized_query_matches_terms() {
    let normalizer = select_normalizer(None);
    let query = preprocess_for_matching("Loyal DOGS, obviously!", normalizer.as_ref());
    assert_eq!(query, "loyal dogs obviously");

    let body = "A short opening line about nothing much at all here. \
                Dogs are loyal and friendly animals for most families.";
    let snippet = SnippetScorer::new(60).extract(body, &query);
    assert_eq!(snippet, "Dogs are loyal and friendly animals for most families.");
}
