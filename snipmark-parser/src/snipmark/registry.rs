//! Source registry for snippet discovery and lookup
//!
//! This module provides a centralized registry for all snippet sources a
//! demo site serves. Sources are registered up front, either one at a time
//! or by mounting a directory, and are looked up by logical path.
//!
//! A logical path uses `/` separators regardless of platform and begins
//! with the mount root it was registered under, e.g.
//! `src/components/Widget.tsx` or `public/demos/sample.js`. Lookups outside
//! every known root are rejected as unsupported rather than merely missing,
//! mirroring how the original surfaces only served files under their
//! designated roots.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::snipmark::extraction::{self, ParsedContent};
use crate::snipmark::file_type::FileType;

/// A loaded source ready for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub content: String,
    pub file_type: FileType,
}

/// Error that can occur when mounting or resolving snippet sources
#[derive(Debug, Clone)]
pub enum RegistryError {
    /// The key does not start with any known root
    UnsupportedPath(String),
    /// The root is known but nothing is registered under the key
    NotFound(String),
    /// The backing file existed at mount time but could not be read
    ReadFailed { key: String, message: String },
    /// The mounted directory could not be walked
    MountFailed { path: String, message: String },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::UnsupportedPath(key) => write!(
                f,
                "Unsupported source path: {}. Paths must start with a mounted root",
                key
            ),
            RegistryError::NotFound(key) => {
                write!(f, "Source not found in registry: {}", key)
            }
            RegistryError::ReadFailed { key, message } => {
                write!(f, "Failed to read source {}: {}", key, message)
            }
            RegistryError::MountFailed { path, message } => {
                write!(f, "Failed to mount {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

enum SourceContent {
    Inline(String),
    OnDisk(PathBuf),
}

struct SourceEntry {
    file_type: FileType,
    content: SourceContent,
}

/// Registry of snippet sources
///
/// Built once at startup, then serves synchronous key lookups. In-memory
/// sources are registered directly; directory mounts record the backing
/// paths and read file contents lazily at lookup time.
///
/// # Examples
///
/// ```ignore
/// let mut registry = SourceRegistry::new();
/// registry.mount("src", "demo/src")?;
///
/// let parsed = registry.extract("src/components/Widget.tsx")?;
/// ```
pub struct SourceRegistry {
    entries: HashMap<String, SourceEntry>,
    roots: Vec<String>,
}

fn root_of(key: &str) -> &str {
    key.split('/').next().unwrap_or("")
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn logical_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

impl SourceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        SourceRegistry {
            entries: HashMap::new(),
            roots: Vec::new(),
        }
    }

    fn add_root(&mut self, root: &str) {
        if !root.is_empty() && !self.roots.iter().any(|r| r == root) {
            self.roots.push(root.to_string());
        }
    }

    /// Register an in-memory source under a logical path.
    ///
    /// If a source with the same key already exists, it is replaced. The
    /// key's root becomes a known root, so later misses under it report
    /// "not found" rather than "unsupported".
    pub fn register<S: Into<String>>(&mut self, key: &str, file_type: FileType, content: S) {
        self.add_root(root_of(key));
        self.entries.insert(
            key.to_string(),
            SourceEntry {
                file_type,
                content: SourceContent::Inline(content.into()),
            },
        );
    }

    /// Mount a directory under a root, registering every recognized file.
    ///
    /// Walks `dir` recursively, skipping hidden entries, and registers each
    /// file whose extension resolves to a known file type under
    /// `root/<relative path>`. Files with unrecognized extensions are not
    /// served, matching the original discovery globs. Contents are read at
    /// lookup time, not at mount time. Returns the number of sources
    /// registered.
    pub fn mount<P: AsRef<Path>>(&mut self, root: &str, dir: P) -> Result<usize, RegistryError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(RegistryError::MountFailed {
                path: dir.display().to_string(),
                message: "not a directory".to_string(),
            });
        }

        let mut registered = 0;
        for entry in WalkDir::new(dir)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            let file_type = FileType::from_path(path);
            if file_type == FileType::Other {
                continue;
            }
            let rel = match path.strip_prefix(dir) {
                Ok(rel) => rel,
                Err(_) => continue,
            };
            let key = format!("{}/{}", root, logical_path(rel));
            self.entries.insert(
                key,
                SourceEntry {
                    file_type,
                    content: SourceContent::OnDisk(path.to_path_buf()),
                },
            );
            registered += 1;
        }

        self.add_root(root_of(root));
        Ok(registered)
    }

    /// Check if a source exists under a key
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The file type registered for a key, if any
    pub fn file_type(&self, key: &str) -> Option<FileType> {
        self.entries.get(key).map(|entry| entry.file_type)
    }

    /// List all registered keys (sorted)
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// The number of registered sources
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no sources
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a source by key and load its content.
    pub fn lookup(&self, key: &str) -> Result<RawDocument, RegistryError> {
        match self.entries.get(key) {
            Some(entry) => {
                let content = match &entry.content {
                    SourceContent::Inline(text) => text.clone(),
                    SourceContent::OnDisk(path) => {
                        fs::read_to_string(path).map_err(|err| RegistryError::ReadFailed {
                            key: key.to_string(),
                            message: err.to_string(),
                        })?
                    }
                };
                Ok(RawDocument {
                    content,
                    file_type: entry.file_type,
                })
            }
            None if self.roots.iter().any(|r| r == root_of(key)) => {
                Err(RegistryError::NotFound(key.to_string()))
            }
            None => Err(RegistryError::UnsupportedPath(key.to_string())),
        }
    }

    /// Look up a source and run the extraction pipeline on it.
    pub fn extract(&self, key: &str) -> Result<ParsedContent, RegistryError> {
        let document = self.lookup(key)?;
        Ok(extraction::extract(&document.content, document.file_type))
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
