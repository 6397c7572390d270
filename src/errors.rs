//! Error types for the case repository engine
//!
//! This module defines the error types for all components of the library.
//! Resolution misses (missing directories, unpublished data) are not errors and
//! degrade to empty results; the types here cover invalid requests, broken
//! configuration, and import failures on files the caller explicitly asked for.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// Unknown geographic code in the forbidden-formats table
    #[error("Unknown geographic code in forbidden-formats table: {token}")]
    UnknownGeographicCode { token: String },

    /// I/O error reading configuration
    #[error("I/O error reading configuration")]
    Io(#[from] std::io::Error),
}

/// Case resolution and loading errors
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Snapshot requests describe the instant itself; a forecast distance is
    /// only meaningful for forecast requests
    #[error("Forecast distance must be absent or zero for a snapshot request")]
    ForecastDistanceOnSnapshot,

    /// An existing case file failed structural import
    #[error("Failed to import case {base_name} in {format} format")]
    Import {
        format: String,
        base_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// I/O error while walking the repository tree
    #[error("I/O error while scanning the case repository")]
    Io(#[from] std::io::Error),
}

/// Top-level library error that can represent any error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Repository error
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl Error {
    /// Get error category for logging and diagnostics
    pub fn category(&self) -> &'static str {
        match self {
            Error::Config(_) => "config",
            Error::Repository(_) => "repository",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Repository result type alias
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;
