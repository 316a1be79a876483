//! Compiled marker patterns
//!
//! A marker is a comment whose entire content is one of the marker words
//! (`start`, `end`, `ignoreStart`, `ignoreEnd`). Each comment style gets one
//! compiled pattern set, built on first use and shared afterwards.
//!
//! Every marker is recognized in two forms:
//!
//! * single-line: the single-line token, the word, then either the block
//!   terminator or the end of the line. The end-of-line alternative is
//!   zero-width, so a marker comment never consumes its own line break.
//! * block: the block opener, the word, the block terminator.
//!
//! Marker words match case-insensitively.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::snipmark::comment_style::{self, CommentStyle};
use crate::snipmark::file_type::FileType;

pub(crate) const REGION_START: &str = "start";
pub(crate) const REGION_END: &str = "end";
pub(crate) const IGNORE_START: &str = "ignoreStart";
pub(crate) const IGNORE_END: &str = "ignoreEnd";

/// The render-skip needle. Unlike the words above it is matched as a
/// case-sensitive literal, by the line filter rather than by regex.
pub(crate) const RENDER_SKIP: &str = "ignore render";

/// Marker patterns compiled for one comment style.
pub(crate) struct MarkerPatterns {
    /// The style these patterns were compiled from.
    pub(crate) style: &'static CommentStyle,
    /// Matches one `start` marker comment.
    pub(crate) region_start: Regex,
    /// Matches one `end` marker comment.
    pub(crate) region_end: Regex,
    /// Matches a whole `ignoreStart ... ignoreEnd` span, non-greedy.
    pub(crate) ignore_blocks: Regex,
}

/// Both comment forms of one marker word, as an uncompiled alternation.
fn marker_pattern(style: &CommentStyle, word: &str) -> String {
    let single = format!(
        r"{}\s*{}\s*(?:{}|$)",
        regex::escape(style.single_line),
        word,
        regex::escape(style.block_end)
    );
    let block = format!(
        r"{}\s*{}\s*{}",
        regex::escape(style.block_start),
        word,
        regex::escape(style.block_end)
    );
    format!("(?:{single})|(?:{block})")
}

fn compile_marker(style: &CommentStyle, word: &str) -> Regex {
    Regex::new(&format!("(?im){}", marker_pattern(style, word))).unwrap()
}

fn compile_ignore_blocks(style: &CommentStyle) -> Regex {
    Regex::new(&format!(
        r"(?im)(?:{})[\s\S]*?(?:{})",
        marker_pattern(style, IGNORE_START),
        marker_pattern(style, IGNORE_END)
    ))
    .unwrap()
}

impl MarkerPatterns {
    fn compile(style: &'static CommentStyle) -> MarkerPatterns {
        MarkerPatterns {
            style,
            region_start: compile_marker(style, REGION_START),
            region_end: compile_marker(style, REGION_END),
            ignore_blocks: compile_ignore_blocks(style),
        }
    }

    /// The compiled patterns for a file type.
    ///
    /// Follows the same grouping as [`CommentStyle::for_file_type`]; the
    /// `style` field records which style was used so the two resolvers can
    /// be checked against each other.
    pub(crate) fn for_file_type(file_type: FileType) -> &'static MarkerPatterns {
        match file_type {
            FileType::Markup => &MARKUP_PATTERNS,
            FileType::Stylesheet => &STYLESHEET_PATTERNS,
            FileType::ScriptComponent | FileType::TypedScriptComponent => &COMPONENT_PATTERNS,
            FileType::Script
            | FileType::TypedScript
            | FileType::StructuredData
            | FileType::Prose
            | FileType::Other => &SCRIPT_PATTERNS,
        }
    }
}

static MARKUP_PATTERNS: Lazy<MarkerPatterns> =
    Lazy::new(|| MarkerPatterns::compile(&comment_style::MARKUP));

static STYLESHEET_PATTERNS: Lazy<MarkerPatterns> =
    Lazy::new(|| MarkerPatterns::compile(&comment_style::STYLESHEET));

static SCRIPT_PATTERNS: Lazy<MarkerPatterns> =
    Lazy::new(|| MarkerPatterns::compile(&comment_style::SCRIPT));

static COMPONENT_PATTERNS: Lazy<MarkerPatterns> =
    Lazy::new(|| MarkerPatterns::compile(&comment_style::COMPONENT));
