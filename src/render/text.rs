//! Plain text rendering for section output.

use std::fmt::Write;

use crate::model::SectionRecord;

/// Render sections as readable plain text, one block per section.
pub fn to_text(sections: &[SectionRecord]) -> String {
    let mut output = String::new();

    for section in sections {
        let _ = writeln!(output, "## {}", section.title);
        let _ = writeln!(
            output,
            "[{} | {} | {} words, {} sentences]",
            section.location(),
            section.section_type,
            section.word_count,
            section.sentence_count
        );
        output.push('\n');
        output.push_str(&section.body);
        output.push_str("\n\n");
    }

    output.trim_end().to_string()
}
