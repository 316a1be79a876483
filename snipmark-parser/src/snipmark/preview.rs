//! Preview units for live component demos
//!
//! Component sources (`script-component`, `typed-script-component`) cannot
//! be previewed from their text alone; the original surfaces paired each
//! one with a lazily loaded live component. This module re-expresses that
//! pairing: a [`PreviewUnit`] renders a textual preview on demand, and a
//! [`PreviewRegistry`] maps logical source paths to unit factories.
//!
//! Factories are only invoked when a unit is actually requested, so
//! registering a unit is free and a unit that is never shown is never
//! built.

use std::collections::HashMap;

/// Error that can occur when resolving or rendering a preview unit
#[derive(Debug, Clone)]
pub enum PreviewError {
    /// No unit factory is registered for the key
    UnitMissing(String),
    /// The unit was built but failed to render
    RenderFailed(String),
}

impl std::fmt::Display for PreviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreviewError::UnitMissing(key) => {
                write!(f, "No preview unit registered for: {}", key)
            }
            PreviewError::RenderFailed(message) => {
                write!(f, "Preview unit failed to render: {}", message)
            }
        }
    }
}

impl std::error::Error for PreviewError {}

/// A live preview for one component source
pub trait PreviewUnit: Send + Sync {
    /// Display name of the unit
    fn name(&self) -> &str;

    /// Render the unit's current output
    fn render(&self) -> Result<String, PreviewError>;
}

type UnitFactory = Box<dyn Fn() -> Box<dyn PreviewUnit> + Send + Sync>;

/// Registry of preview unit factories
///
/// Keyed by the same logical paths as the source registry; a surface that
/// wants a live preview for `src/components/Widget.tsx` asks this registry
/// to instantiate the unit registered under that key.
pub struct PreviewRegistry {
    factories: HashMap<String, UnitFactory>,
}

impl PreviewRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        PreviewRegistry {
            factories: HashMap::new(),
        }
    }

    /// Register a unit factory under a key
    ///
    /// If a factory with the same key already exists, it is replaced. The
    /// factory is not invoked until the unit is first instantiated.
    pub fn register<F>(&mut self, key: &str, factory: F)
    where
        F: Fn() -> Box<dyn PreviewUnit> + Send + Sync + 'static,
    {
        self.factories.insert(key.to_string(), Box::new(factory));
    }

    /// Check if a unit is registered for a key
    pub fn contains(&self, key: &str) -> bool {
        self.factories.contains_key(key)
    }

    /// List all registered keys (sorted)
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Build the unit registered under a key.
    pub fn instantiate(&self, key: &str) -> Result<Box<dyn PreviewUnit>, PreviewError> {
        self.factories
            .get(key)
            .map(|factory| factory())
            .ok_or_else(|| PreviewError::UnitMissing(key.to_string()))
    }

    /// Instantiate the unit for a key and render it.
    pub fn render(&self, key: &str) -> Result<String, PreviewError> {
        self.instantiate(key)?.render()
    }
}

impl Default for PreviewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A preview unit that renders a fixed string
///
/// Useful for demos whose preview is static, and as a stand-in in tests.
pub struct StaticPreview {
    name: String,
    output: String,
}

impl StaticPreview {
    pub fn new<N: Into<String>, O: Into<String>>(name: N, output: O) -> Self {
        StaticPreview {
            name: name.into(),
            output: output.into(),
        }
    }
}

impl PreviewUnit for StaticPreview {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self) -> Result<String, PreviewError> {
        Ok(self.output.clone())
    }
}
