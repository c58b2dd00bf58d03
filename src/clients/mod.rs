//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod course_client;
pub mod curriculum_client;

pub use actor_client::*;
pub use course_client::*;
pub use curriculum_client::*;
