//! File type tags for snippet sources
//!
//! Every snippet source carries a `FileType` tag. The tag decides which
//! comment style the extraction markers use and what kind of preview a
//! viewer can offer. Resolution is total: unknown tags and unknown
//! extensions fall back to [`FileType::Other`], which behaves like a plain
//! script file as far as markers are concerned.

use std::fmt;
use std::path::Path;

/// The kind of source file a snippet comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Angle-bracket markup (HTML and friends)
    Markup,
    /// Plain scripting language source
    Script,
    /// Typed dialect of the scripting language
    TypedScript,
    /// Component files mixing script and markup
    ScriptComponent,
    /// Typed component files
    TypedScriptComponent,
    /// Stylesheets
    Stylesheet,
    /// Structured data files (JSON and friends)
    StructuredData,
    /// Prose formats (Markdown and friends)
    Prose,
    /// Anything unrecognized
    Other,
}

/// What a preview surface can do with a file of a given type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// The renderable preview content can be shown directly
    Markup,
    /// A registered preview unit is required to show anything live
    Component,
    /// No preview; surfaces show the code instead
    Unavailable,
}

impl FileType {
    /// Resolve a file type from a tag name.
    ///
    /// Accepts the canonical tag names (`"markup"`, `"script"`, ...) as well
    /// as the common extension aliases (`"html"`, `"tsx"`, ...), ASCII
    /// case-insensitively. Anything unrecognized resolves to
    /// [`FileType::Other`].
    pub fn from_tag(tag: &str) -> FileType {
        match tag.to_ascii_lowercase().as_str() {
            "markup" | "html" | "htm" => FileType::Markup,
            "script" | "js" | "mjs" | "cjs" => FileType::Script,
            "typed-script" | "ts" | "mts" | "cts" => FileType::TypedScript,
            "script-component" | "jsx" => FileType::ScriptComponent,
            "typed-script-component" | "tsx" => FileType::TypedScriptComponent,
            "stylesheet" | "css" => FileType::Stylesheet,
            "structured-data" | "json" => FileType::StructuredData,
            "prose" | "md" | "mdx" => FileType::Prose,
            _ => FileType::Other,
        }
    }

    /// Resolve a file type from a path's extension.
    ///
    /// Paths without an extension, and extensions that are not recognized,
    /// resolve to [`FileType::Other`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> FileType {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) => FileType::from_tag(ext),
            None => FileType::Other,
        }
    }

    /// The canonical tag name for this file type.
    pub fn tag(&self) -> &'static str {
        match self {
            FileType::Markup => "markup",
            FileType::Script => "script",
            FileType::TypedScript => "typed-script",
            FileType::ScriptComponent => "script-component",
            FileType::TypedScriptComponent => "typed-script-component",
            FileType::Stylesheet => "stylesheet",
            FileType::StructuredData => "structured-data",
            FileType::Prose => "prose",
            FileType::Other => "other",
        }
    }

    /// Whether this is one of the component file types.
    pub fn is_component(&self) -> bool {
        matches!(
            self,
            FileType::ScriptComponent | FileType::TypedScriptComponent
        )
    }

    /// How a preview surface treats this file type.
    ///
    /// Markup previews render the extracted content directly. Component
    /// previews need an instantiated preview unit. Everything else has no
    /// preview and surfaces fall back to showing the code.
    pub fn preview_kind(&self) -> PreviewKind {
        match self {
            FileType::Markup => PreviewKind::Markup,
            FileType::ScriptComponent | FileType::TypedScriptComponent => PreviewKind::Component,
            _ => PreviewKind::Unavailable,
        }
    }

    /// All file types, in tag order. Used by enumeration surfaces.
    pub fn all() -> &'static [FileType] {
        &[
            FileType::Markup,
            FileType::Script,
            FileType::TypedScript,
            FileType::ScriptComponent,
            FileType::TypedScriptComponent,
            FileType::Stylesheet,
            FileType::StructuredData,
            FileType::Prose,
            FileType::Other,
        ]
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
