//! Error types for the Zitemizer plugin.
//!
//! This module defines the centralized error type [`ZitemizerError`] and a type
//! alias [`Result`] used throughout the plugin. All variants are implemented
//! with the `thiserror` crate.
//!
//! Field-level validation failures are deliberately NOT represented here: they
//! are recoverable UI state held in the form session's error map, surfaced
//! inline next to the offending field, and never escalate into an error value.

use thiserror::Error;

/// The main error type for Zitemizer plugin operations.
///
/// Consolidates the internal failure conditions of the plugin: theme loading,
/// configuration parsing, and seed-catalog decoding. I/O errors convert
/// automatically via `#[from]`.
#[derive(Debug, Error)]
pub enum ZitemizerError {
    /// Theme parsing or loading failed.
    ///
    /// Occurs when a built-in theme fails to parse or a custom theme file
    /// cannot be read or decoded.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The embedded seed catalog could not be decoded.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Only the log writer performs I/O; everything else is in-memory.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Zitemizer operations.
pub type Result<T> = std::result::Result<T, ZitemizerError>;
