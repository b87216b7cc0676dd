//! # dircols
//!
//! dircols is a library and command-line tool for listing directories in
//! colored, terminal-width columns.
//!
//! ## Features
//!
//! * Directory scanning - Classify entries into directories, files and read-only files
//! * Suffix filtering - Keep only files whose names end with a given string
//! * Column rendering - Pack names into a column-major grid that fits the terminal

/// Command-line interpretation into a scan request
pub mod cli;
/// Per-directory orchestration of scanning and rendering
pub mod listing;
/// Column-major, colorized grid output
pub mod render;
/// Directory enumeration and entry classification
pub mod scan;
/// Structured logging setup
pub mod telemetry;
/// Terminal width, ANSI support and color policy
pub mod terminal;
