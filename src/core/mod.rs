//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - The fixed inclusion policy
//! - The export model (IncludedFile, ExportSet, errors)
//! - Path normalization and anchor slugs
//! - Lossy file reading
//! - Markdown rendering

pub mod file_reader;
pub mod model;
pub mod paths;
pub mod policy;
pub mod render;
