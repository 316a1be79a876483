//! Snippet loading utilities
//!
//! This module provides `SnippetLoader` - a utility for loading snippet
//! source text from files or strings and running the extraction pipeline on
//! it. This is used by both production code and tests.
//!
//! # Example
//!
//! ```rust
//! use snipmark_parser::snipmark::loader::SnippetLoader;
//! use snipmark_parser::snipmark::file_type::FileType;
//!
//! // From file; the file type comes from the extension
//! let loader = SnippetLoader::from_path("demo/sample.html").unwrap();
//! let parsed = loader.extract();
//!
//! // From string
//! let loader = SnippetLoader::from_string("// start\nlet x = 1;\n// end\n", FileType::Script);
//! assert_eq!(loader.display_code(), "let x = 1;");
//! ```

use std::fs;
use std::path::Path;

use crate::snipmark::extraction::{self, ParsedContent};
use crate::snipmark::file_type::FileType;

/// Error that can occur when loading snippet sources
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading a file; carries the path and the cause
    IoError(String),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

/// Snippet loader with extraction shortcuts
///
/// `SnippetLoader` pairs one source text with its file type and offers
/// shortcut methods for the individual extraction artifacts.
///
/// # Example
///
/// ```rust
/// use snipmark_parser::snipmark::loader::SnippetLoader;
///
/// let code = SnippetLoader::from_path("demo/sample.js")
///     .unwrap()
///     .display_code();
/// ```
#[derive(Debug)]
pub struct SnippetLoader {
    content: String,
    file_type: FileType,
}

impl SnippetLoader {
    /// Load from a file path, resolving the file type from the extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|err| LoaderError::IoError(format!("{}: {}", path.display(), err)))?;
        Ok(SnippetLoader {
            content,
            file_type: FileType::from_path(path),
        })
    }

    /// Load from a string with an explicit file type.
    pub fn from_string<S: Into<String>>(content: S, file_type: FileType) -> Self {
        SnippetLoader {
            content: content.into(),
            file_type,
        }
    }

    /// Override the file type resolved from the path.
    ///
    /// Useful when a file's extension does not reflect its content, or when
    /// a caller wants the fallback marker behavior on purpose.
    pub fn with_file_type(mut self, file_type: FileType) -> Self {
        self.file_type = file_type;
        self
    }

    /// Run the extraction pipeline on the loaded source.
    pub fn extract(&self) -> ParsedContent {
        extraction::extract(&self.content, self.file_type)
    }

    /// Shortcut for the displayed code artifact.
    pub fn display_code(&self) -> String {
        self.extract().code_for_display
    }

    /// Shortcut for the renderable preview artifact.
    pub fn preview_content(&self) -> String {
        self.extract().renderable_preview_content
    }

    /// Shortcut for the code shown alongside a live preview.
    pub fn original_preview(&self) -> String {
        self.extract().original_preview_code
    }

    /// The raw loaded source.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The file type extraction will use.
    pub fn file_type(&self) -> FileType {
        self.file_type
    }
}
