//! Core modules for annotation-aware snippet extraction

pub mod comment_style;
pub mod extraction;
pub mod file_type;
pub mod loader;
pub mod preview;
pub mod registry;
