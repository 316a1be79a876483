//! Comment styles for marker recognition
//!
//! Extraction markers are written as comments in the host language, so the
//! extractor needs to know what a comment looks like for each file type.
//! Four styles cover every supported type; file types without a style of
//! their own (structured data, prose, unknown files) borrow the script
//! style, which keeps marker resolution total.

use crate::snipmark::file_type::FileType;

/// Comment tokens for one family of source languages.
///
/// `single_line` opens a comment that runs to the end of the line;
/// `block_start`/`block_end` delimit an inline block comment. For markup
/// the two forms share the `<!--` opener and differ only in how they are
/// terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
    pub single_line: &'static str,
    pub block_start: &'static str,
    pub block_end: &'static str,
}

/// `<!-- ... -->` markup comments.
pub static MARKUP: CommentStyle = CommentStyle {
    single_line: "<!--",
    block_start: "<!--",
    block_end: "-->",
};

/// `/* ... */` stylesheet comments. Stylesheets have no single-line form,
/// so the block opener doubles as the single-line token.
pub static STYLESHEET: CommentStyle = CommentStyle {
    single_line: "/*",
    block_start: "/*",
    block_end: "*/",
};

/// `//` and `/* ... */` script comments.
pub static SCRIPT: CommentStyle = CommentStyle {
    single_line: "//",
    block_start: "/*",
    block_end: "*/",
};

/// Component-file comments: `//` in script position, `{/* ... */}` inside
/// markup position.
pub static COMPONENT: CommentStyle = CommentStyle {
    single_line: "//",
    block_start: "{/*",
    block_end: "*/}",
};

impl CommentStyle {
    /// The comment style used for a file type.
    ///
    /// Total: file types without a dedicated style use [`SCRIPT`].
    pub fn for_file_type(file_type: FileType) -> &'static CommentStyle {
        match file_type {
            FileType::Markup => &MARKUP,
            FileType::Stylesheet => &STYLESHEET,
            FileType::ScriptComponent | FileType::TypedScriptComponent => &COMPONENT,
            FileType::Script
            | FileType::TypedScript
            | FileType::StructuredData
            | FileType::Prose
            | FileType::Other => &SCRIPT,
        }
    }
}
