//! Custom actions for the Course actor.
//!
//! This module defines the domain-specific operations (Actions) that can be
//! performed on a [`Course`](crate::model::Course) entity beyond standard CRUD,
//! namely the publish lifecycle.

/// Custom actions for Course entities.
#[derive(Debug, Clone)]
pub enum CourseAction {
    /// Makes the course visible to students.
    Publish,
    /// Takes the course back to draft.
    Unpublish,
}

/// Results from CourseActions - variants match 1:1 with CourseAction.
///
/// The boolean reports whether the status actually changed, so callers can
/// distinguish "published" from "was already published".
#[derive(Debug, Clone)]
pub enum CourseActionResult {
    Publish(bool),
    Unpublish(bool),
}
