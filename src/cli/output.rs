//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, GenerationError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Generation(GenerationError::PreconditionViolated { .. }) => {
            format!("error: {}\nhint: run `snipgen check` to list every offending template", e)
        }
        _ => format!("error: {}", e),
    }
}
