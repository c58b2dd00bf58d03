//! Custom actions for the Curriculum actor.
//!
//! This module defines the domain-specific operations (Actions) that can be
//! performed on a [`Curriculum`](crate::model::Curriculum) entity — every
//! reorder, add, remove, and field-level edit the course editor can request.
//! The actor applies each one through the pure engine methods on the value, so
//! an action either fully succeeds or leaves the stored curriculum untouched.

use crate::model::{LessonDraft, LessonPatch};

/// Custom actions for Curriculum entities.
///
/// Index-carrying variants use splice semantics: the element is removed first
/// and `to` is interpreted against the already-shortened sequence.
#[derive(Debug, Clone)]
pub enum CurriculumAction {
    /// Moves a section to a new position in the curriculum.
    MoveSection { from: usize, to: usize },
    /// Moves a lesson within its section, or into `target_section_id` when one
    /// is given.
    MoveLesson {
        section_id: String,
        from: usize,
        to: usize,
        target_section_id: Option<String>,
    },
    /// Appends an empty section.
    AddSection { title: String },
    /// Appends a lesson to the named section.
    AddLesson {
        section_id: String,
        draft: LessonDraft,
    },
    /// Deletes a section and all of its lessons.
    RemoveSection { section_id: String },
    /// Deletes a single lesson.
    RemoveLesson {
        section_id: String,
        lesson_id: String,
    },
    /// Replaces a section's title.
    RenameSection { section_id: String, title: String },
    /// Applies a field-level patch to a lesson.
    UpdateLesson {
        section_id: String,
        lesson_id: String,
        patch: LessonPatch,
    },
}

/// Results from CurriculumActions - variants match 1:1 with CurriculumAction
#[derive(Debug, Clone)]
pub enum CurriculumActionResult {
    MoveSection(()),
    MoveLesson(()),
    /// Returns the freshly minted section id.
    AddSection(String),
    /// Returns the freshly minted lesson id.
    AddLesson(String),
    RemoveSection(()),
    RemoveLesson(()),
    RenameSection(()),
    UpdateLesson(()),
}
