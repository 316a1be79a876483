//! # snipmark
//!
//! Annotation-aware snippet extraction for code demos.
//!
//! Demo source files carry comment-based annotations that control how they
//! are presented: region markers (`start`/`end`) select the interesting
//! slice, ignore blocks (`ignoreStart`/`ignoreEnd`) hide private spans, and
//! render-skip markers (`ignore render`) keep a line visible in the code
//! view while dropping the following line from the rendered preview.
//!
//! The extraction itself lives in [`snipmark::extraction`] and is total: any
//! input string produces a [`snipmark::extraction::ParsedContent`], never an
//! error. Loading files, resolving file types and enumerating demo sources
//! are layered on top in [`snipmark::loader`] and [`snipmark::registry`].

pub mod snipmark;
