//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the whole studio.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate. The format is compact and hides the crate/module prefix
//! (`with_target(false)`) — the actor loop already tags every line with the
//! `entity_type` it is working on, which is the more useful dimension here.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, and final store size
//! - **Entity Operations**: Create, Get, List, Update, Delete, and custom Actions
//! - **Request Flow**: Hierarchical spans from client method to actor handler
//! - **Errors**: Rejected edits with entity IDs and failure reasons
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo test
//!
//! # Show full payloads (drafts, patches) at function entry points
//! RUST_LOG=debug cargo test
//!
//! # Filter to the actor loop only
//! RUST_LOG=curriculum_studio::framework=debug cargo test
//! ```
//!
//! ## Workflow Trace Example
//!
//! Creating a course and rearranging its curriculum, with `RUST_LOG=info`:
//!
//! ```text
//! INFO Actor started entity_type="Curriculum"
//! INFO Actor started entity_type="Course"
//! INFO Created entity_type="Curriculum" id="curriculum_1" size=1
//! INFO Created entity_type="Course" id="course_1" size=1
//! INFO Action ok entity_type="Curriculum" id="curriculum_1"
//! INFO Action ok entity_type="Curriculum" id="curriculum_1"
//! ```
//!
//! With `RUST_LOG=debug` the action payloads appear as structured fields:
//!
//! ```text
//! DEBUG Action id="curriculum_1" action=MoveLesson { section_id: "section_1", from: 1, to: 0, target_section_id: Some("section_2") }
//! INFO Action ok entity_type="Curriculum" id="curriculum_1"
//! ```
//!
//! A rejected edit logs the reason and changes nothing:
//!
//! ```text
//! WARN Action failed entity_type="Curriculum" id="curriculum_1" error=index 5 out of range (len 2)
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline
        .init();
}
