use curriculum_studio::clients::ActorClient;
use curriculum_studio::curriculum_actor::CurriculumError;
use curriculum_studio::lifecycle::StudioSystem;
use curriculum_studio::model::{CourseCreate, CourseStatus, LessonDraft, LessonKind};

fn draft(title: &str, kind: LessonKind) -> LessonDraft {
    LessonDraft {
        title: title.to_string(),
        kind,
        duration_secs: 600,
        body: None,
    }
}

/// Full end-to-end integration test with all real actors.
/// This tests the entire system working together: course creation provisions a
/// curriculum, the editor rearranges it, and deletion cascades.
#[tokio::test]
async fn test_full_studio_integration() {
    let studio = StudioSystem::new();

    // Create a course; the Course actor provisions its curriculum
    let course_id = studio
        .course_client
        .create_course(CourseCreate {
            title: "Rust 101".to_string(),
            description: "Ownership from scratch".to_string(),
        })
        .await
        .expect("Failed to create course");

    let course = studio
        .course_client
        .get(course_id.clone())
        .await
        .expect("Failed to get course")
        .expect("Course not found");
    assert_eq!(course.title, "Rust 101");
    assert_eq!(course.status, CourseStatus::Draft);
    assert!(!course.curriculum_id.is_empty(), "Curriculum should be provisioned");

    let curriculum_id = course.curriculum_id.clone();
    let curriculum = studio
        .curriculum_client
        .get(curriculum_id.clone())
        .await
        .expect("Failed to get curriculum")
        .expect("Curriculum not found");
    assert_eq!(curriculum.course_id, course_id);
    assert!(curriculum.sections.is_empty());

    // Build out two sections with lessons
    let s1 = studio
        .curriculum_client
        .add_section(curriculum_id.clone(), "Basics".to_string())
        .await
        .expect("Failed to add section");
    let s2 = studio
        .curriculum_client
        .add_section(curriculum_id.clone(), "Advanced".to_string())
        .await
        .expect("Failed to add section");

    let l1 = studio
        .curriculum_client
        .add_lesson(curriculum_id.clone(), s1.clone(), draft("Intro", LessonKind::Video))
        .await
        .expect("Failed to add lesson");
    let l2 = studio
        .curriculum_client
        .add_lesson(curriculum_id.clone(), s1.clone(), draft("Setup", LessonKind::Text))
        .await
        .expect("Failed to add lesson");
    let l3 = studio
        .curriculum_client
        .add_lesson(curriculum_id.clone(), s2.clone(), draft("Traits", LessonKind::Quiz))
        .await
        .expect("Failed to add lesson");

    // Drag the "Setup" lesson to the top of the Advanced section
    studio
        .curriculum_client
        .move_lesson(curriculum_id.clone(), s1.clone(), 1, 0, Some(s2.clone()))
        .await
        .expect("Failed to move lesson");

    let curriculum = studio
        .curriculum_client
        .get(curriculum_id.clone())
        .await
        .unwrap()
        .unwrap();

    let basics = curriculum.section(&s1).unwrap();
    let advanced = curriculum.section(&s2).unwrap();
    assert_eq!(
        basics.lessons.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(),
        vec![l1.as_str()]
    );
    assert_eq!(
        advanced.lessons.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(),
        vec![l2.as_str(), l3.as_str()]
    );
    for (i, lesson) in advanced.lessons.iter().enumerate() {
        assert_eq!(lesson.order, i);
    }

    // Swap the sections themselves
    studio
        .curriculum_client
        .move_section(curriculum_id.clone(), 0, 1)
        .await
        .expect("Failed to move section");
    let curriculum = studio
        .curriculum_client
        .get(curriculum_id.clone())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        curriculum.sections.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
        vec![s2.as_str(), s1.as_str()]
    );
    assert_eq!(curriculum.sections[0].order, 0);
    assert_eq!(curriculum.sections[1].order, 1);

    // Remove the Basics section entirely
    studio
        .curriculum_client
        .remove_section(curriculum_id.clone(), s1.clone())
        .await
        .expect("Failed to remove section");
    let curriculum = studio
        .curriculum_client
        .get(curriculum_id.clone())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(curriculum.sections.len(), 1);
    assert_eq!(curriculum.sections[0].id, s2);
    assert_eq!(curriculum.sections[0].order, 0);

    // Publish lifecycle: first publish flips the status, the second is a no-op
    let changed = studio.course_client.publish(course_id.clone()).await.unwrap();
    assert!(changed);
    let changed_again = studio.course_client.publish(course_id.clone()).await.unwrap();
    assert!(!changed_again);

    // Deleting the course cascades to its curriculum
    studio
        .course_client
        .delete(course_id.clone())
        .await
        .expect("Failed to delete course");
    let gone = studio
        .curriculum_client
        .get(curriculum_id.clone())
        .await
        .unwrap();
    assert!(gone.is_none(), "Curriculum should be removed with its course");

    studio.shutdown().await.expect("Failed to shutdown studio");
}

/// A rejected edit must fail loudly and leave the stored curriculum untouched.
#[tokio::test]
async fn test_rejected_edit_changes_nothing() {
    let studio = StudioSystem::new();

    let course_id = studio
        .course_client
        .create_course(CourseCreate {
            title: "Drag and drop".to_string(),
            description: String::new(),
        })
        .await
        .unwrap();
    let curriculum_id = studio
        .course_client
        .get(course_id)
        .await
        .unwrap()
        .unwrap()
        .curriculum_id;

    studio
        .curriculum_client
        .add_section(curriculum_id.clone(), "Only section".to_string())
        .await
        .unwrap();
    let before = studio
        .curriculum_client
        .get(curriculum_id.clone())
        .await
        .unwrap()
        .unwrap();

    // Destination is one past the end: out of range, not clamped
    let result = studio
        .curriculum_client
        .move_section(curriculum_id.clone(), 0, 1)
        .await;
    assert!(matches!(result, Err(CurriculumError::EditRejected(_))));

    // Unknown section id
    let result = studio
        .curriculum_client
        .move_lesson(curriculum_id.clone(), "missing".to_string(), 0, 0, None)
        .await;
    assert!(matches!(result, Err(CurriculumError::EditRejected(_))));

    // Unknown curriculum id fails at the actor, not the engine
    let result = studio
        .curriculum_client
        .move_section("missing".to_string(), 0, 0)
        .await;
    assert!(matches!(result, Err(CurriculumError::NotFound(_))));

    let after = studio
        .curriculum_client
        .get(curriculum_id.clone())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after, before);

    studio.shutdown().await.unwrap();
}

/// Concurrent editors are serialized by the actor: every add lands, orders stay
/// contiguous, and no id is handed out twice.
#[tokio::test]
async fn test_concurrent_section_adds() {
    let studio = StudioSystem::new();

    let course_id = studio
        .course_client
        .create_course(CourseCreate {
            title: "Busy course".to_string(),
            description: String::new(),
        })
        .await
        .unwrap();
    let curriculum_id = studio
        .course_client
        .get(course_id)
        .await
        .unwrap()
        .unwrap()
        .curriculum_id;

    let mut handles = vec![];
    for i in 0..10 {
        let client = studio.curriculum_client.clone();
        let cid = curriculum_id.clone();
        handles.push(tokio::spawn(async move {
            client.add_section(cid, format!("Week {}", i)).await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap().expect("add_section failed"));
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10, "Every add should mint a distinct id");

    let curriculum = studio
        .curriculum_client
        .get(curriculum_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(curriculum.sections.len(), 10);
    for (i, section) in curriculum.sections.iter().enumerate() {
        assert_eq!(section.order, i);
    }

    studio.shutdown().await.unwrap();
}

/// Courses with empty titles are rejected before any curriculum is provisioned.
#[tokio::test]
async fn test_create_course_validation() {
    let studio = StudioSystem::new();

    let result = studio
        .course_client
        .create_course(CourseCreate {
            title: "   ".to_string(),
            description: String::new(),
        })
        .await;
    assert!(result.is_err());

    let courses = studio.course_client.list().await.unwrap();
    assert!(courses.is_empty());
    let curricula = studio.curriculum_client.list().await.unwrap();
    assert!(curricula.is_empty(), "No curriculum should be provisioned");

    studio.shutdown().await.unwrap();
}
