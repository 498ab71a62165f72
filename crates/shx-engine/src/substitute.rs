//! Final content assembly.
//!
//! Splices one replacement string per invocation span into a fresh output
//! buffer, left to right. Literal text between spans is copied verbatim, so
//! earlier replacements never shift the offsets of later spans.

use crate::parser::Span;

/// Rewrite `content` by substituting each span with its replacement.
///
/// `replacements` must be ordered by span start and non-overlapping, which
/// is what the parser produces.
pub(crate) fn splice(content: &str, replacements: &[(Span, String)]) -> String {
    let mut output = String::with_capacity(content.len());
    let mut cursor = 0;

    for (span, replacement) in replacements {
        debug_assert!(span.start >= cursor && span.end >= span.start);
        output.push_str(&content[cursor..span.start]);
        output.push_str(replacement);
        cursor = span.end;
    }

    output.push_str(&content[cursor..]);
    output
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn span(start: usize, end: usize) -> Span {
        Span { start, end }
    }

    #[test]
    fn test_no_replacements_is_identity() {
        assert_eq!(splice("unchanged content", &[]), "unchanged content");
    }

    #[test]
    fn test_single_replacement() {
        // "A<x>B" with <x> replaced
        let replacements = vec![(span(1, 4), "out".to_owned())];
        assert_eq!(splice("A<x>B", &replacements), "AoutB");
    }

    #[test]
    fn test_multiple_replacements_keep_gaps() {
        // "a<1>b<2>c"
        let replacements = vec![
            (span(1, 4), "X".to_owned()),
            (span(5, 8), "Y".to_owned()),
        ];
        assert_eq!(splice("a<1>b<2>c", &replacements), "aXbYc");
    }

    #[test]
    fn test_adjacent_spans() {
        let replacements = vec![
            (span(0, 2), "A".to_owned()),
            (span(2, 4), "B".to_owned()),
        ];
        assert_eq!(splice("1234", &replacements), "AB");
    }

    #[test]
    fn test_span_at_start_and_end() {
        let replacements = vec![
            (span(0, 1), "begin".to_owned()),
            (span(4, 5), "end".to_owned()),
        ];
        assert_eq!(splice("S...E", &replacements), "begin...end");
    }

    #[test]
    fn test_replacement_longer_and_shorter() {
        let replacements = vec![
            (span(0, 3), "".to_owned()),
            (span(4, 5), "wide output".to_owned()),
        ];
        assert_eq!(splice("cut x.", &replacements), " wide output.");
    }

    #[test]
    fn test_whole_content_span() {
        let replacements = vec![(span(0, 5), "done".to_owned())];
        assert_eq!(splice("whole", &replacements), "done");
    }
}
