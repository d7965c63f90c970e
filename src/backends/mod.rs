//! Backends module - Filesystem collectors
//!
//! This module provides:
//! - Root-level file collection
//! - Recursive walking of the included directories

pub mod scan;
