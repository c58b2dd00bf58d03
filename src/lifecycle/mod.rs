//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for managing the application's
//! runtime environment, including:
//!
//! - **Actor lifecycle management**: Starting, wiring, and shutting down actors
//! - **System orchestration**: Coordinating dependencies between actors
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`StudioSystem`] - The primary orchestrator that manages both actors and
//!   their dependencies
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod studio;
pub mod tracing;

pub use studio::*;
pub use tracing::*;
