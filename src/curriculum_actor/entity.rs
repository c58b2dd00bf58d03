//! Entity trait implementation for the Curriculum domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables
//! [`Curriculum`] to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor).
//!
//! All edits arrive as [`CurriculumAction`]s and are applied through the pure
//! engine methods on the value: the handler computes a full replacement
//! curriculum and swaps it in only on success, so a rejected edit never leaves
//! partial state behind.

use async_trait::async_trait;

use super::actions::{CurriculumAction, CurriculumActionResult};
use crate::framework::ActorEntity;
use crate::model::{Curriculum, CurriculumCreate};

#[async_trait]
impl ActorEntity for Curriculum {
    type Id = String;
    type CreateParams = CurriculumCreate;
    type UpdateParams = ();
    type Action = CurriculumAction;
    type ActionResult = CurriculumActionResult;
    type Context = ();

    /// Creates an empty Curriculum for the owning course.
    fn from_create_params(id: String, params: CurriculumCreate) -> Result<Self, String> {
        Ok(Curriculum::new(id, params.course_id))
    }

    /// The curriculum root has no updatable fields; titles live on the Course
    /// and everything else goes through actions.
    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Dispatches an editor action to the matching engine operation.
    ///
    /// Engine failures (`NotFound`, `IndexOutOfRange`) surface to the caller as
    /// the rejection message; the stored value is only replaced on success.
    async fn handle_action(
        &mut self,
        action: CurriculumAction,
        _ctx: &Self::Context,
    ) -> Result<CurriculumActionResult, String> {
        match action {
            CurriculumAction::MoveSection { from, to } => {
                *self = self.move_section(from, to).map_err(|e| e.to_string())?;
                Ok(CurriculumActionResult::MoveSection(()))
            }
            CurriculumAction::MoveLesson {
                section_id,
                from,
                to,
                target_section_id,
            } => {
                *self = self
                    .move_lesson(&section_id, from, to, target_section_id.as_deref())
                    .map_err(|e| e.to_string())?;
                Ok(CurriculumActionResult::MoveLesson(()))
            }
            CurriculumAction::AddSection { title } => {
                let (next, section_id) = self.add_section(title);
                *self = next;
                Ok(CurriculumActionResult::AddSection(section_id))
            }
            CurriculumAction::AddLesson { section_id, draft } => {
                let (next, lesson_id) = self
                    .add_lesson(&section_id, draft)
                    .map_err(|e| e.to_string())?;
                *self = next;
                Ok(CurriculumActionResult::AddLesson(lesson_id))
            }
            CurriculumAction::RemoveSection { section_id } => {
                *self = self.remove_section(&section_id).map_err(|e| e.to_string())?;
                Ok(CurriculumActionResult::RemoveSection(()))
            }
            CurriculumAction::RemoveLesson {
                section_id,
                lesson_id,
            } => {
                *self = self
                    .remove_lesson(&section_id, &lesson_id)
                    .map_err(|e| e.to_string())?;
                Ok(CurriculumActionResult::RemoveLesson(()))
            }
            CurriculumAction::RenameSection { section_id, title } => {
                *self = self
                    .rename_section(&section_id, title)
                    .map_err(|e| e.to_string())?;
                Ok(CurriculumActionResult::RenameSection(()))
            }
            CurriculumAction::UpdateLesson {
                section_id,
                lesson_id,
                patch,
            } => {
                *self = self
                    .update_lesson(&section_id, &lesson_id, patch)
                    .map_err(|e| e.to_string())?;
                Ok(CurriculumActionResult::UpdateLesson(()))
            }
        }
    }
}
