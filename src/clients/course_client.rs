use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::actor_client::ActorClient;
use crate::course_actor::{CourseAction, CourseActionResult, CourseError};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Course, CourseCreate, CourseUpdate};

/// Client for interacting with the Course actor.
///
/// Curriculum provisioning happens in the Course actor's `on_create` hook, so
/// callers get back a course whose `curriculum_id` is already populated.
#[derive(Clone)]
pub struct CourseClient {
    inner: ResourceClient<Course>,
}

impl CourseClient {
    pub fn new(inner: ResourceClient<Course>) -> Self {
        Self { inner }
    }

    /// Creates a course (and, via the actor hook, its empty curriculum).
    #[instrument(skip(self, params))]
    pub async fn create_course(&self, params: CourseCreate) -> Result<String, CourseError> {
        debug!(?params, "create_course called");
        self.inner.create(params).await.map_err(|e| match e {
            // Rejected payloads and failed provisioning both surface here.
            FrameworkError::Custom(msg) => CourseError::ValidationError(msg),
            other => CourseError::ActorCommunicationError(other.to_string()),
        })
    }

    /// Updates course metadata (title, description).
    #[instrument(skip(self))]
    pub async fn update_course(
        &self,
        id: String,
        update: CourseUpdate,
    ) -> Result<Course, CourseError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Publishes the course. Returns `true` if the status changed.
    #[instrument(skip(self))]
    pub async fn publish(&self, id: String) -> Result<bool, CourseError> {
        debug!("Sending request");
        match self.inner.perform_action(id, CourseAction::Publish).await {
            Ok(CourseActionResult::Publish(changed)) => Ok(changed),
            Ok(other) => Err(CourseError::ActorCommunicationError(format!(
                "unexpected action result: {:?}",
                other
            ))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Takes the course back to draft. Returns `true` if the status changed.
    #[instrument(skip(self))]
    pub async fn unpublish(&self, id: String) -> Result<bool, CourseError> {
        debug!("Sending request");
        match self.inner.perform_action(id, CourseAction::Unpublish).await {
            Ok(CourseActionResult::Unpublish(changed)) => Ok(changed),
            Ok(other) => Err(CourseError::ActorCommunicationError(format!(
                "unexpected action result: {:?}",
                other
            ))),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Course> for CourseClient {
    type Error = CourseError;

    fn inner(&self) -> &ResourceClient<Course> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CourseError::NotFound(id),
            other => CourseError::ActorCommunicationError(other.to_string()),
        }
    }
}
