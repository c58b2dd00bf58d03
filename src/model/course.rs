use serde::{Deserialize, Serialize};

/// Publication state of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    Draft,
    Published,
}

/// Represents a course in the instructor's catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity)
/// trait (see [`crate::course_actor::entity`]), allowing it to be managed by a
/// [`ResourceActor`](crate::framework::ResourceActor). Its `on_create` hook
/// provisions the course's curriculum through the Curriculum actor and records
/// the resulting `curriculum_id`; `on_delete` cascades the removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: CourseStatus,
    pub curriculum_id: String,
}

impl Course {
    /// Creates a new Course instance.
    ///
    /// # Notes
    /// New courses always start in [`CourseStatus::Draft`]. The `curriculum_id`
    /// is empty until the `on_create` hook fills it in.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        curriculum_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            status: CourseStatus::Draft,
            curriculum_id: curriculum_id.into(),
        }
    }
}

/// Payload for creating a new course.
#[derive(Debug, Clone)]
pub struct CourseCreate {
    pub title: String,
    pub description: String,
}

/// DTOs for Course updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}
