//! Error types for the Course actor.

use thiserror::Error;

/// Errors that can occur during course operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CourseError {
    /// The requested course was not found.
    #[error("Course not found: {0}")]
    NotFound(String),

    /// The course data provided is invalid.
    #[error("Course validation error: {0}")]
    ValidationError(String),

    /// Provisioning or removing the course's curriculum failed.
    #[error("Curriculum provisioning failed: {0}")]
    CurriculumProvisioningFailed(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CourseError {
    fn from(msg: String) -> Self {
        CourseError::ActorCommunicationError(msg)
    }
}
