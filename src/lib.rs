#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Curriculum Studio
//!
//! > **A backend for a learning platform's curriculum editor, built on resource-oriented actors.**
//!
//! This crate powers the instructor-facing course editor of a learning platform.
//! The heart of it is a small, pure reorder engine over a [`Curriculum`](model::Curriculum)
//! value (ordered sections, each holding ordered lessons), wrapped in a type-safe
//! actor system built on Tokio.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Pure core, actor shell
//!
//! Drag-and-drop editors are easy to get wrong when reordering logic lives inside
//! UI event handlers. Here the split is strict:
//! - **The engine** ([`model::Curriculum`]) is a pure value type: every edit
//!   (`move_section`, `move_lesson`, `add_lesson`, ...) takes `&self` and returns a
//!   *new* curriculum, or a typed error. No I/O, no locks, trivially testable.
//! - **The actors** own the curricula and apply edits one message at a time, so
//!   concurrent editors are serialized without any locking.
//!
//! ### Why ROA + Actor Model?
//!
//! The framework combines **Resource-Oriented Architecture** (standard CRUD
//! operations on well-defined resources) with the **Actor Model** (isolated state
//! with message-passing concurrency). We wrote the message-processing loop
//! **once** ([`framework::ResourceActor`]), and it works for Courses and
//! Curricula alike.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! The engine has a two-variant taxonomy ([`model::ReorderError`]): an edit either
//! names an id that does not exist (`NotFound`) or a position that is out of
//! bounds (`IndexOutOfRange`). There is no clamping and no partial mutation — a
//! failed edit leaves the curriculum untouched. Each actor wraps this in its own
//! error type (`CurriculumError`, `CourseError`) implementing `std::error::Error`.
//!
//! ### 2. Async Context Injection
//! Dependencies are injected at runtime via the actor's `run()` method, not at
//! construction time. The Course actor receives a `CurriculumClient` this way and
//! uses it to provision a curriculum for every new course.
//!
//! ### 3. Concurrency Model
//! Each [`ResourceActor`](framework::ResourceActor) runs in its own Tokio task and
//! processes messages sequentially (no locks needed for internal state), but the
//! Course and Curriculum actors run in parallel.
//!
//! ### 4. Observability
//! We use `tracing` everywhere with structured logging. See
//! [`lifecycle::tracing`] for setup and example output.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`model`])
//! Pure data: [`Curriculum`](model::Curriculum), [`Section`](model::Section),
//! [`Lesson`](model::Lesson), and every reorder/add/remove/update operation.
//!
//! ### 2. The Plumbing ([`framework`])
//! The generic [`ResourceActor<T>`](framework::ResourceActor) that turns any
//! [`ActorEntity`](framework::ActorEntity) into a running actor, plus
//! [`mock`](framework::mock) utilities for testing clients in isolation.
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! [`StudioSystem`](lifecycle::StudioSystem) spins up the actors, wires their
//! dependencies, and shuts them down gracefully.
//!
//! ### 4. The Interface ([`clients`])
//! Domain-specific clients ([`CourseClient`](clients::CourseClient),
//! [`CurriculumClient`](clients::CurriculumClient)) that hide raw message passing
//! behind typed methods.
//!
//! ### 5. The Implementations ([`course_actor`], [`curriculum_actor`])
//! Concrete [`ActorEntity`](framework::ActorEntity) implementations for the two
//! resources.
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! let studio = StudioSystem::new();
//!
//! let course_id = studio.course_client
//!     .create_course(CourseCreate { title: "Rust 101".into(), description: "".into() })
//!     .await?;
//! let course = studio.course_client.get(course_id).await?.unwrap();
//!
//! studio.curriculum_client
//!     .add_section(course.curriculum_id.clone(), "Getting Started".into())
//!     .await?;
//!
//! studio.shutdown().await?;
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=debug cargo test
//! ```

pub mod clients;
pub mod course_actor;
pub mod curriculum_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
