//! Sprite Indexer
//!
//! Validates 16-color battle spritesheets and writes indexed sprites and
//! palettes. The palette logic lives in `palette-align`; this crate handles
//! files, configuration and reporting.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
