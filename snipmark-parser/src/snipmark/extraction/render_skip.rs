//! Render-skip line filtering
//!
//! An `ignore render` marker keeps its own line in the displayed code but
//! drops the line that follows it from the renderable preview. This lets a
//! demo show, say, a `<script>` include to readers without executing it in
//! the live preview.
//!
//! The filter is a two-state walk over the lines: in the normal state a
//! line is kept, and if it is a marker the next line is dropped; a dropped
//! line is never inspected, so markers cannot chain. A marker on the last
//! line has nothing to drop and expires silently.

use crate::snipmark::comment_style::CommentStyle;
use crate::snipmark::extraction::markers::RENDER_SKIP;
use crate::snipmark::file_type::FileType;

/// Drops the line after each `ignore render` marker.
///
/// Markup files write the marker as a complete comment on its own line
/// (`<!-- ignore render -->`); script-family files write it as a line
/// starting with the single-line comment token (`// ignore render`). For
/// every other file type the filter is the identity. The needle is matched
/// case-sensitively.
pub struct FilterRenderSkipped {
    file_type: FileType,
    style: &'static CommentStyle,
}

impl FilterRenderSkipped {
    pub fn new(file_type: FileType) -> FilterRenderSkipped {
        FilterRenderSkipped {
            file_type,
            style: CommentStyle::for_file_type(file_type),
        }
    }

    /// Whether a line is a render-skip marker for this file type.
    fn is_marker_line(&self, line: &str) -> bool {
        let trimmed = line.trim();
        match self.file_type {
            FileType::Markup => {
                trimmed.starts_with(self.style.single_line)
                    && trimmed.ends_with(self.style.block_end)
                    && trimmed.contains(RENDER_SKIP)
            }
            FileType::Script
            | FileType::TypedScript
            | FileType::ScriptComponent
            | FileType::TypedScriptComponent => trimmed
                .strip_prefix(self.style.single_line)
                .map(|rest| rest.trim_start().starts_with(RENDER_SKIP))
                .unwrap_or(false),
            _ => false,
        }
    }

    /// Run the filter over one source text.
    pub fn apply(&self, content: &str) -> String {
        let mut kept = Vec::new();
        let mut skip_next = false;
        for line in content.split('\n') {
            if skip_next {
                skip_next = false;
                continue;
            }
            kept.push(line);
            if self.is_marker_line(line) {
                skip_next = true;
            }
        }
        kept.join("\n")
    }
}
