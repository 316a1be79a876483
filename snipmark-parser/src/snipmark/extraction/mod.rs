//! The extraction pipeline
//!
//! [`extract`] turns the raw text of a demo source file into the artifacts
//! the presentation surfaces need. The stages run in a fixed order:
//!
//! 1. [`normalize::normalize_line_endings`] - CRLF pairs become LF
//! 2. [`region::ExtractRegion`] - keep the slice between `start`/`end`
//! 3. [`ignore_block::StripIgnoreBlocks`] - drop `ignoreStart`/`ignoreEnd`
//!    spans and trim
//! 4. [`render_skip::FilterRenderSkipped`] - derive the preview text by
//!    dropping render-skipped lines
//!
//! Stages 1-3 produce the displayed code; stage 4 runs on that result, so
//! the preview is always a line-subset of what the reader sees. Every stage
//! is total and the pipeline never fails: malformed or missing markers mean
//! the relevant stage passes the text through.

mod markers;

pub mod ignore_block;
pub mod normalize;
pub mod region;
pub mod render_skip;

use serde::{Deserialize, Serialize};

use crate::snipmark::file_type::FileType;
use ignore_block::StripIgnoreBlocks;
use normalize::normalize_line_endings;
use region::ExtractRegion;
use render_skip::FilterRenderSkipped;

/// The artifacts extracted from one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedContent {
    /// What a reader sees in the code view: region-extracted,
    /// ignore-stripped, trimmed.
    pub code_for_display: String,
    /// What a preview surface renders: the displayed code minus
    /// render-skipped lines.
    pub renderable_preview_content: String,
    /// The code shown alongside a live preview. Currently identical to
    /// `code_for_display`; kept separate because the surfaces consume it
    /// separately.
    pub original_preview_code: String,
}

/// Extract the presentation artifacts from raw source text.
///
/// Total over its inputs: any string and any file type produce a
/// [`ParsedContent`]. Inputs without markers come through unchanged except
/// for line-ending normalization and whitespace trimming.
///
/// ```rust
/// use snipmark_parser::snipmark::extraction::extract;
/// use snipmark_parser::snipmark::file_type::FileType;
///
/// let parsed = extract("// start\nconst x = 1;\n// end\n", FileType::Script);
/// assert_eq!(parsed.code_for_display, "const x = 1;");
/// ```
pub fn extract(raw_content: &str, file_type: FileType) -> ParsedContent {
    let normalized = normalize_line_endings(raw_content);
    let region = ExtractRegion::new(file_type).apply(&normalized);
    let code_for_display = StripIgnoreBlocks::new(file_type).apply(&region);
    let renderable_preview_content = FilterRenderSkipped::new(file_type).apply(&code_for_display);

    ParsedContent {
        original_preview_code: code_for_display.clone(),
        code_for_display,
        renderable_preview_content,
    }
}
