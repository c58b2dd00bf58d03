//! Course-specific resource logic, including the publish lifecycle.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CourseClient;
use crate::framework::ResourceActor;
use crate::model::Course;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Course actor and its client.
///
/// The actor's curriculum dependency is injected later, when `run()` is called
/// with a `CurriculumClient` as context.
pub fn new() -> (ResourceActor<Course>, CourseClient) {
    let course_id_counter = Arc::new(AtomicU64::new(1));
    let next_course_id = move || {
        let id = course_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("course_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_course_id);
    let client = CourseClient::new(generic_client);

    (actor, client)
}
