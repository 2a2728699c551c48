//! Integration tests for segmentation and annotation.

use docsect::ingest::JsonPageReader;
use docsect::model::UNTITLED_SECTION;
use docsect::{
    HeaderClassifier, PageRecord, SectionOptions, SectionPipeline, SectionSegmenter, SectionType,
};

const REPORT: &str = "Overview\n\
                      first body line one.\n\
                      first body line two.\n\
                      CHAPTER TWO\n\
                      second body here.\n\
                      another line.\n\
                      3. Final Notes\n\
                      the last body.";

#[test]
fn test_header_lines_and_bodies_rebuild_page() {
    let classifier = HeaderClassifier::new();
    let segments = SectionSegmenter::new(&classifier).segment_text(REPORT);
    assert_eq!(segments.len(), 3);

    let lines: Vec<&str> = REPORT.split('\n').collect();
    let mut rebuilt = Vec::new();
    for segment in &segments {
        let header = segment.header_line.expect("every segment has a header");
        assert_eq!(lines[header], segment.title);
        rebuilt.push(segment.title.clone());
        rebuilt.push(segment.body.clone());
    }
    assert_eq!(rebuilt.join("\n"), REPORT);
}

#[test]
fn test_resegmenting_a_body_is_stable() {
    let classifier = HeaderClassifier::new();
    let segmenter = SectionSegmenter::new(&classifier);

    for segment in segmenter.segment_text(REPORT) {
        let again = segmenter.segment_text(&segment.body);
        assert_eq!(again.len(), 1);
        assert_eq!(again[0].body, segment.body);
        assert_eq!(again[0].title, UNTITLED_SECTION);
    }
}

#[test]
fn test_page_without_headers() {
    let text = "\n  every line here ends with a period.\nso nothing is a header.\n";
    let pipeline = SectionPipeline::default();
    let sections = pipeline.process_page("plain.txt", &PageRecord::new(1, text));

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, UNTITLED_SECTION);
    assert_eq!(sections[0].body, text.trim());
    assert_eq!(sections[0].section_type, SectionType::Content);
}

#[test]
fn test_admission_threshold_at_pipeline_level() {
    let pipeline = SectionPipeline::new(SectionOptions::new().with_min_section_length(30));
    let body29 = format!("{}.", "b".repeat(28));
    let body30 = format!("{}.", "b".repeat(29));

    let dropped = pipeline.process_page("d", &PageRecord::new(1, format!("Results\n{}", body29)));
    let kept = pipeline.process_page("d", &PageRecord::new(1, format!("Results\n{}", body30)));

    assert!(dropped.is_empty());
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].char_count, 30);
    assert_eq!(kept[0].section_type, SectionType::Results);
}

#[test]
fn test_records_are_trimmed_and_counted() {
    let pipeline = SectionPipeline::default();
    let page = PageRecord::new(
        7,
        "References\n   [1] Smith, J. Layout analysis. 2019.\n   [2] Doe, A. Parsing.   \n",
    );
    let sections = pipeline.process_page("paper.txt", &page);

    assert_eq!(sections.len(), 1);
    let section = &sections[0];
    assert_eq!(section.page_number, 7);
    assert_eq!(section.section_type, SectionType::References);
    assert!(section.body.starts_with("[1]"));
    assert!(section.body.ends_with("Parsing."));
    assert_eq!(section.char_count, section.body.chars().count());
    assert_eq!(section.word_count, section.body.split_whitespace().count());
    assert!(section.has_references);
    assert!(section.has_numbers);
}

#[test]
fn test_line_aligned_fonts_from_json() {
    let json = r#"[
        {
            "page_number": 1,
            "text": "an emphasized opening line about the study\nits body continues in plain text.\nand keeps going for a while longer.",
            "font_spans": [
                {"size": 16.0, "flags": 16, "font": "Times-Bold", "text": "an emphasized opening line about the study"},
                {"size": 10.0, "flags": 0, "font": "Times-Roman"},
                {"size": 10.0, "flags": 0, "font": "Times-Roman"}
            ],
            "alignment": "per_line"
        }
    ]"#;
    let pages = JsonPageReader.parse_str(json).unwrap();
    let sections = SectionPipeline::default().process_document("typed.json", &pages);

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "an emphasized opening line about the study");
    assert_eq!(
        sections[0].body,
        "its body continues in plain text.\nand keeps going for a while longer."
    );
}
