use std::fmt::Write;

/// Formats the trailing citations block, or an empty string when there is
/// nothing to show.
pub fn render_citations(citations: &[String]) -> String {
    if citations.is_empty() {
        return String::new();
    }

    let mut block = String::from("\n\nCitations:\n");
    for (i, citation) in citations.iter().enumerate() {
        let _ = writeln!(block, "[{}]: {}", i + 1, citation);
    }
    block
}
