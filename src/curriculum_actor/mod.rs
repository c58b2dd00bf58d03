//! Curriculum-specific resource logic, including the reorder actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CurriculumClient;
use crate::framework::ResourceActor;
use crate::model::Curriculum;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Curriculum actor and its client.
pub fn new() -> (ResourceActor<Curriculum>, CurriculumClient) {
    let curriculum_id_counter = Arc::new(AtomicU64::new(1));
    let next_curriculum_id = move || {
        let id = curriculum_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("curriculum_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_curriculum_id);
    let client = CurriculumClient::new(generic_client);

    (actor, client)
}
