//! Error types for the fp-situacion library.

use thiserror::Error;

/// Result type alias for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Invalid selection: {0}")]
    Selection(#[from] SelectionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while turning a block sequence into PDF bytes.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Could not load fonts: {0}")]
    Fonts(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("PDF engine error: {0}")]
    Engine(String),
}

/// Errors that occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid TOML: {0}")]
    Toml(String),
}

/// Errors reported by a completion provider.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Provider error: {message}")]
    Provider { message: String },

    #[error("The provider returned an empty completion")]
    EmptyCompletion,
}

/// Errors found when checking a selection against the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown training cycle: {0}")]
    UnknownCycle(String),

    #[error("Unknown module: {0}")]
    UnknownModule(String),
}
