use thiserror::Error;

/// Error taxonomy for the import pipeline
///
/// Validation and configuration problems are caught before any external
/// effect; extraction and publication wrap failures of the two external
/// collaborators. Route handlers map each variant onto the route's
/// documented JSON shape, so none escapes as an unhandled fault.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    /// The scraper wrote diagnostics to stderr or emitted unparseable output
    #[error("{message}")]
    Extraction { message: String, details: String },

    #[error("{0}")]
    Configuration(String),

    /// WordPress rejected the request, or it could not be reached
    #[error("{0}")]
    Publication(String),
}
