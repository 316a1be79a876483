//! Ignore-block stripping
//!
//! `ignoreStart` / `ignoreEnd` marker pairs fence spans that should never
//! reach readers: credentials, scaffolding, noisy glue. Unlike region
//! extraction, which keeps the first pair only, every ignore span in the
//! text is removed.

use crate::snipmark::extraction::markers::MarkerPatterns;
use crate::snipmark::file_type::FileType;

/// Removes every `ignoreStart ... ignoreEnd` span from the text.
///
/// Spans are matched non-greedily, so back-to-back blocks are removed
/// independently. An `ignoreStart` with no later `ignoreEnd` removes
/// nothing. The result is trimmed of leading and trailing whitespace
/// whether or not any span was removed.
pub struct StripIgnoreBlocks {
    patterns: &'static MarkerPatterns,
}

impl StripIgnoreBlocks {
    pub fn new(file_type: FileType) -> StripIgnoreBlocks {
        StripIgnoreBlocks {
            patterns: MarkerPatterns::for_file_type(file_type),
        }
    }

    /// Run ignore-block stripping over one source text.
    pub fn apply(&self, content: &str) -> String {
        self.patterns
            .ignore_blocks
            .replace_all(content, "")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(file_type: FileType, content: &str) -> String {
        StripIgnoreBlocks::new(file_type).apply(content)
    }

    #[test]
    fn removes_a_fenced_span_and_keeps_the_blank_line() {
        let content = "const a = 1;\n// ignoreStart\nconst secret = 2;\n// ignoreEnd\nconst b = 3;";
        assert_eq!(
            strip(FileType::Script, content),
            "const a = 1;\n\nconst b = 3;"
        );
    }

    #[test]
    fn removes_every_span() {
        let content = "keep1\n// ignoreStart\na\n// ignoreEnd\nkeep2\n// ignoreStart\nb\n// ignoreEnd\nkeep3";
        assert_eq!(strip(FileType::Script, content), "keep1\n\nkeep2\n\nkeep3");
    }

    #[test]
    fn unmatched_ignore_start_removes_nothing() {
        let content = "const a = 1;\n// ignoreStart\nconst b = 2;";
        assert_eq!(strip(FileType::Script, content), content);
    }

    #[test]
    fn unmatched_ignore_end_removes_nothing() {
        let content = "const a = 1;\n// ignoreEnd\nconst b = 2;";
        assert_eq!(strip(FileType::Script, content), content);
    }

    #[test]
    fn output_is_trimmed_even_without_markers() {
        assert_eq!(strip(FileType::Script, "  \nconst a = 1;\n  \n"), "const a = 1;");
    }

    #[test]
    fn mixed_comment_forms_pair_up() {
        let content = "keep\n/* ignoreStart */\nsecret\n// ignoreEnd\nalso kept";
        assert_eq!(strip(FileType::Script, content), "keep\n\nalso kept");
    }

    #[test]
    fn markup_blocks_are_removed() {
        let content = "<p>shown</p>\n<!-- ignoreStart -->\n<p>hidden</p>\n<!-- ignoreEnd -->\n<p>also shown</p>";
        assert_eq!(
            strip(FileType::Markup, content),
            "<p>shown</p>\n\n<p>also shown</p>"
        );
    }

    #[test]
    fn component_blocks_accept_braced_markers() {
        let content = "<Shown />\n{/* ignoreStart */}\n<Hidden />\n{/* ignoreEnd */}\n<AlsoShown />";
        assert_eq!(
            strip(FileType::ScriptComponent, content),
            "<Shown />\n\n<AlsoShown />"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(strip(FileType::Script, ""), "");
    }
}
