//! Region extraction
//!
//! Authors fence the interesting part of a demo file with `start` and `end`
//! marker comments. When both markers are present, only the text strictly
//! between them survives; the marker comments themselves never appear in
//! the output.

use crate::snipmark::extraction::markers::MarkerPatterns;
use crate::snipmark::file_type::FileType;

/// Extracts the slice between the first `start` and first `end` markers.
///
/// Pass-through when either marker is missing or when the first `end`
/// marker begins before the first `start` marker has ended. Markers in the
/// wrong order, or overlapping ones, are not an error; the text is simply
/// left alone.
pub struct ExtractRegion {
    patterns: &'static MarkerPatterns,
}

impl ExtractRegion {
    pub fn new(file_type: FileType) -> ExtractRegion {
        ExtractRegion {
            patterns: MarkerPatterns::for_file_type(file_type),
        }
    }

    /// Run region extraction over one source text.
    pub fn apply(&self, content: &str) -> String {
        let start = self.patterns.region_start.find(content);
        let end = self.patterns.region_end.find(content);
        match (start, end) {
            (Some(start), Some(end)) if end.start() >= start.end() => {
                content[start.end()..end.start()].trim().to_string()
            }
            _ => content.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(file_type: FileType, content: &str) -> String {
        ExtractRegion::new(file_type).apply(content)
    }

    #[test]
    fn keeps_only_the_fenced_slice() {
        let content = "setup();\n// start\nconst x = 1;\n// end\nteardown();\n";
        assert_eq!(extract(FileType::Script, content), "const x = 1;");
    }

    #[test]
    fn passes_through_without_markers() {
        let content = "const x = 1;\nconst y = 2;\n";
        assert_eq!(extract(FileType::Script, content), content);
    }

    #[test]
    fn passes_through_with_only_a_start_marker() {
        let content = "// start\nconst x = 1;\n";
        assert_eq!(extract(FileType::Script, content), content);
    }

    #[test]
    fn passes_through_with_only_an_end_marker() {
        let content = "const x = 1;\n// end\n";
        assert_eq!(extract(FileType::Script, content), content);
    }

    #[test]
    fn passes_through_when_end_comes_first() {
        let content = "// end\nconst x = 1;\n// start\n";
        assert_eq!(extract(FileType::Script, content), content);
    }

    #[test]
    fn passes_through_when_the_markers_overlap() {
        // The trailing slash of the start comment and the following star
        // form a comment opener, so the end marker starts inside the start
        // marker.
        let content = "/* start */* end */";
        assert_eq!(extract(FileType::Script, content), content);
        assert_eq!(extract(FileType::Stylesheet, content), content);
    }

    #[test]
    fn uses_the_first_pair_only() {
        let content = "// start\nfirst\n// end\n// start\nsecond\n// end\n";
        assert_eq!(extract(FileType::Script, content), "first");
    }

    #[test]
    fn later_start_markers_are_inert_text() {
        let content = "// start\nkeep\n// start\nalso kept\n// end\n";
        assert_eq!(extract(FileType::Script, content), "keep\n// start\nalso kept");
    }

    #[test]
    fn adjacent_markers_yield_an_empty_region() {
        assert_eq!(extract(FileType::Script, "// start\n// end\n"), "");
    }

    #[test]
    fn markup_regions_use_markup_comments() {
        let content = "<header></header>\n<!-- start -->\n<p>hello</p>\n<!-- end -->\n";
        assert_eq!(extract(FileType::Markup, content), "<p>hello</p>");
    }

    #[test]
    fn component_regions_accept_braced_markers() {
        let content = "{/* start */}\n<Widget />\n{/* end */}\n";
        assert_eq!(extract(FileType::TypedScriptComponent, content), "<Widget />");
    }

    #[test]
    fn stylesheet_regions_use_block_comments() {
        let content = "/* start */\nbody { margin: 0; }\n/* end */\n";
        assert_eq!(extract(FileType::Stylesheet, content), "body { margin: 0; }");
    }

    #[test]
    fn inner_whitespace_is_trimmed() {
        let content = "// start\n\n\n  spaced\n\n// end\n";
        assert_eq!(extract(FileType::Script, content), "spaced");
    }
}
