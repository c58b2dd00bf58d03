//! Entity trait implementation for the Course domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables
//! [`Course`] to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor).
//!
//! The Course actor depends on the Curriculum actor: its injected context is a
//! [`CurriculumClient`]. `on_create` provisions an empty curriculum for the new
//! course and `on_delete` cascades its removal, so a course and its curriculum
//! always exist together.

use async_trait::async_trait;

use super::actions::{CourseAction, CourseActionResult};
use crate::clients::{ActorClient, CurriculumClient};
use crate::framework::ActorEntity;
use crate::model::{Course, CourseCreate, CourseStatus, CourseUpdate};

#[async_trait]
impl ActorEntity for Course {
    type Id = String;
    type CreateParams = CourseCreate;
    type UpdateParams = CourseUpdate;
    type Action = CourseAction;
    type ActionResult = CourseActionResult;
    type Context = CurriculumClient;

    /// Creates a new Course from creation parameters.
    ///
    /// The `curriculum_id` stays empty here; it is filled in by `on_create`
    /// once the curriculum has been provisioned.
    fn from_create_params(id: String, params: CourseCreate) -> Result<Self, String> {
        if params.title.trim().is_empty() {
            return Err("course title must not be empty".to_string());
        }
        Ok(Course::new(id, params.title, params.description, ""))
    }

    /// Provisions the course's curriculum through the Curriculum actor.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), String> {
        let curriculum_id = ctx
            .create_curriculum(self.id.clone())
            .await
            .map_err(|e| e.to_string())?;
        self.curriculum_id = curriculum_id;
        Ok(())
    }

    /// Handles updates to the Course entity.
    ///
    /// # Fields Updated
    /// - `title`: Course title (must stay non-empty)
    /// - `description`: Course description
    async fn on_update(&mut self, update: CourseUpdate, _ctx: &Self::Context) -> Result<(), String> {
        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err("course title must not be empty".to_string());
            }
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    /// Cascades removal of the course's curriculum.
    async fn on_delete(&self, ctx: &Self::Context) -> Result<(), String> {
        ctx.delete(self.curriculum_id.clone())
            .await
            .map_err(|e| e.to_string())
    }

    /// Handles custom actions for the Course entity.
    ///
    /// # Actions
    /// - `Publish`: Moves the course to `Published`; reports whether it changed
    /// - `Unpublish`: Moves the course back to `Draft`; reports whether it changed
    async fn handle_action(
        &mut self,
        action: CourseAction,
        _ctx: &Self::Context,
    ) -> Result<CourseActionResult, String> {
        match action {
            CourseAction::Publish => {
                if self.status == CourseStatus::Published {
                    Ok(CourseActionResult::Publish(false))
                } else {
                    self.status = CourseStatus::Published;
                    Ok(CourseActionResult::Publish(true))
                }
            }
            CourseAction::Unpublish => {
                if self.status == CourseStatus::Draft {
                    Ok(CourseActionResult::Unpublish(false))
                } else {
                    self.status = CourseStatus::Draft;
                    Ok(CourseActionResult::Unpublish(true))
                }
            }
        }
    }
}
