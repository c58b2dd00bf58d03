//! Error types for the Curriculum actor.

use thiserror::Error;

/// Errors that can occur during curriculum operations.
///
/// Inside the engine itself failures are typed as
/// [`ReorderError`](crate::model::ReorderError); once an edit crosses the actor
/// boundary the rejection reason travels as its display message in
/// [`CurriculumError::EditRejected`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CurriculumError {
    /// The requested curriculum was not found.
    #[error("Curriculum not found: {0}")]
    NotFound(String),

    /// The actor refused the edit (unknown section/lesson id or an
    /// out-of-range position); the stored curriculum is unchanged.
    #[error("Edit rejected: {0}")]
    EditRejected(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CurriculumError {
    fn from(msg: String) -> Self {
        CurriculumError::ActorCommunicationError(msg)
    }
}
