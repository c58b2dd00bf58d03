//! Pure data structures implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.
//!
//! The curriculum types ([`Curriculum`], [`Section`], [`Lesson`]) double as the
//! reorder engine: every edit is a pure method on [`Curriculum`] returning a new
//! value. The actor layer never touches lesson vectors directly.

pub mod course;
pub mod curriculum;
pub mod lesson;
pub mod section;

pub use course::*;
pub use curriculum::*;
pub use lesson::*;
pub use section::*;
