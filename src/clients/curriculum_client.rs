use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::actor_client::ActorClient;
use crate::curriculum_actor::{CurriculumAction, CurriculumActionResult, CurriculumError};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Curriculum, CurriculumCreate, LessonDraft, LessonPatch};

/// Client for interacting with the Curriculum actor.
///
/// One typed method per editor operation; each wraps the corresponding
/// [`CurriculumAction`] so callers never touch raw message passing. The drag
/// layer of a UI only has to compute `(from, to, target)` and call in here.
#[derive(Clone)]
pub struct CurriculumClient {
    inner: ResourceClient<Curriculum>,
}

impl CurriculumClient {
    pub fn new(inner: ResourceClient<Curriculum>) -> Self {
        Self { inner }
    }

    fn unexpected(other: CurriculumActionResult) -> CurriculumError {
        CurriculumError::ActorCommunicationError(format!(
            "unexpected action result: {:?}",
            other
        ))
    }

    /// Creates an empty curriculum owned by `course_id`.
    #[instrument(skip(self))]
    pub async fn create_curriculum(&self, course_id: String) -> Result<String, CurriculumError> {
        debug!("Sending request");
        self.inner
            .create(CurriculumCreate { course_id })
            .await
            .map_err(Self::map_error)
    }

    /// Moves a section from one position to another.
    #[instrument(skip(self))]
    pub async fn move_section(
        &self,
        curriculum_id: String,
        from: usize,
        to: usize,
    ) -> Result<(), CurriculumError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(curriculum_id, CurriculumAction::MoveSection { from, to })
            .await
        {
            Ok(CurriculumActionResult::MoveSection(())) => Ok(()),
            Ok(other) => Err(Self::unexpected(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Moves a lesson within its section, or into another section when
    /// `target_section_id` is given.
    #[instrument(skip(self))]
    pub async fn move_lesson(
        &self,
        curriculum_id: String,
        section_id: String,
        from: usize,
        to: usize,
        target_section_id: Option<String>,
    ) -> Result<(), CurriculumError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(
                curriculum_id,
                CurriculumAction::MoveLesson {
                    section_id,
                    from,
                    to,
                    target_section_id,
                },
            )
            .await
        {
            Ok(CurriculumActionResult::MoveLesson(())) => Ok(()),
            Ok(other) => Err(Self::unexpected(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Appends an empty section and returns its freshly minted id.
    #[instrument(skip(self))]
    pub async fn add_section(
        &self,
        curriculum_id: String,
        title: String,
    ) -> Result<String, CurriculumError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(curriculum_id, CurriculumAction::AddSection { title })
            .await
        {
            Ok(CurriculumActionResult::AddSection(section_id)) => Ok(section_id),
            Ok(other) => Err(Self::unexpected(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Appends a lesson to the named section and returns its id.
    #[instrument(skip(self, draft))]
    pub async fn add_lesson(
        &self,
        curriculum_id: String,
        section_id: String,
        draft: LessonDraft,
    ) -> Result<String, CurriculumError> {
        debug!(?draft, "Sending request");
        match self
            .inner
            .perform_action(curriculum_id, CurriculumAction::AddLesson { section_id, draft })
            .await
        {
            Ok(CurriculumActionResult::AddLesson(lesson_id)) => Ok(lesson_id),
            Ok(other) => Err(Self::unexpected(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Deletes a section and all of its lessons.
    #[instrument(skip(self))]
    pub async fn remove_section(
        &self,
        curriculum_id: String,
        section_id: String,
    ) -> Result<(), CurriculumError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(curriculum_id, CurriculumAction::RemoveSection { section_id })
            .await
        {
            Ok(CurriculumActionResult::RemoveSection(())) => Ok(()),
            Ok(other) => Err(Self::unexpected(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Deletes a single lesson.
    #[instrument(skip(self))]
    pub async fn remove_lesson(
        &self,
        curriculum_id: String,
        section_id: String,
        lesson_id: String,
    ) -> Result<(), CurriculumError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(
                curriculum_id,
                CurriculumAction::RemoveLesson {
                    section_id,
                    lesson_id,
                },
            )
            .await
        {
            Ok(CurriculumActionResult::RemoveLesson(())) => Ok(()),
            Ok(other) => Err(Self::unexpected(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Replaces a section's title.
    #[instrument(skip(self))]
    pub async fn rename_section(
        &self,
        curriculum_id: String,
        section_id: String,
        title: String,
    ) -> Result<(), CurriculumError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(
                curriculum_id,
                CurriculumAction::RenameSection { section_id, title },
            )
            .await
        {
            Ok(CurriculumActionResult::RenameSection(())) => Ok(()),
            Ok(other) => Err(Self::unexpected(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Applies a field-level patch to a lesson.
    #[instrument(skip(self, patch))]
    pub async fn update_lesson(
        &self,
        curriculum_id: String,
        section_id: String,
        lesson_id: String,
        patch: LessonPatch,
    ) -> Result<(), CurriculumError> {
        debug!(?patch, "Sending request");
        match self
            .inner
            .perform_action(
                curriculum_id,
                CurriculumAction::UpdateLesson {
                    section_id,
                    lesson_id,
                    patch,
                },
            )
            .await
        {
            Ok(CurriculumActionResult::UpdateLesson(())) => Ok(()),
            Ok(other) => Err(Self::unexpected(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Curriculum> for CurriculumClient {
    type Error = CurriculumError;

    fn inner(&self) -> &ResourceClient<Curriculum> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CurriculumError::NotFound(id),
            FrameworkError::Custom(msg) => CurriculumError::EditRejected(msg),
            other => CurriculumError::ActorCommunicationError(other.to_string()),
        }
    }
}
