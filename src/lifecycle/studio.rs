use crate::clients::{CourseClient, CurriculumClient};
use tracing::{error, info};

/// The main runtime orchestrator for the curriculum editing backend.
///
/// `StudioSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Connecting actors that depend on each other
///   (the Course actor needs a CurriculumClient)
/// - **Resource Coordination**: Managing shared resources like ID generators
///
/// # Architecture
///
/// The system consists of two actors:
/// - **Curriculum Actor**: Owns the curriculum values and applies every edit
///   (reorders, adds, removes) one message at a time
/// - **Course Actor**: Manages course metadata and the publish lifecycle, and
///   provisions a curriculum for every new course
///
/// # Example
///
/// ```ignore
/// let studio = StudioSystem::new();
///
/// let course_id = studio.course_client.create_course(params).await?;
/// let course = studio.course_client.get(course_id).await?.unwrap();
/// let section_id = studio.curriculum_client
///     .add_section(course.curriculum_id, "Week 1".into())
///     .await?;
///
/// // Gracefully shut down when done
/// studio.shutdown().await?;
/// ```
pub struct StudioSystem {
    /// Client for interacting with the Course actor
    pub course_client: CourseClient,

    /// Client for interacting with the Curriculum actor
    pub curriculum_client: CurriculumClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StudioSystem {
    /// Creates and initializes a new `StudioSystem` with all actors running.
    ///
    /// This method:
    /// 1. Creates ID generators for each entity type
    /// 2. Spawns ResourceActors for Curriculum and Course
    /// 3. Wires up dependencies (the Course actor receives the CurriculumClient)
    /// 4. Spawns each actor in its own Tokio task
    pub fn new() -> Self {
        // 1. Create actors (no dependencies yet)
        let (curriculum_actor, curriculum_client) = crate::curriculum_actor::new();
        let (course_actor, course_client) = crate::course_actor::new();

        // 2. Start actors with injected context
        // Curriculum has no dependencies (Context = ())
        let curriculum_handle = tokio::spawn(curriculum_actor.run(()));

        // Course actor needs the Curriculum client (Context = CurriculumClient)
        let course_handle = tokio::spawn(course_actor.run(curriculum_client.clone()));

        Self {
            course_client,
            curriculum_client,
            handles: vec![curriculum_handle, course_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their channels; each `ResourceActor` detects
    /// the closed channel and exits its event loop. The method then waits for
    /// every actor task and reports any panic.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down studio...");

        // Close all channels by dropping clients. The course actor still holds
        // its own clone of the curriculum client as context; it drops it when
        // its loop exits, which in turn lets the curriculum actor finish.
        drop(self.course_client);
        drop(self.curriculum_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Studio shutdown complete.");
        Ok(())
    }
}

impl Default for StudioSystem {
    fn default() -> Self {
        Self::new()
    }
}
