use serde::{Deserialize, Serialize};

use crate::model::Lesson;

/// An ordered grouping of lessons within a curriculum.
///
/// `order` is the section's zero-based position in its curriculum and the
/// `lessons` vec holds its lessons in display order. Both are maintained by
/// [`Curriculum`](crate::model::Curriculum) operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub order: usize,
    pub lessons: Vec<Lesson>,
}

impl Section {
    pub(crate) fn new(id: impl Into<String>, title: impl Into<String>, order: usize) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            order,
            lessons: Vec::new(),
        }
    }

    /// Looks up a lesson by id.
    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    /// Rewrites every lesson's `order` to match its vec position.
    pub(crate) fn renumber(&mut self) {
        for (i, lesson) in self.lessons.iter_mut().enumerate() {
            lesson.order = i;
        }
    }
}
