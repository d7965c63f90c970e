//! Flows module - Multi-step commands
//!
//! This module provides:
//! - export: collect, render and write export_code.md

pub mod export;
