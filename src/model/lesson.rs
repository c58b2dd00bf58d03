use serde::{Deserialize, Serialize};

/// The kind of content a lesson carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonKind {
    Video,
    Text,
    Quiz,
    Assignment,
    Image,
}

/// Kind-specific payload for a lesson.
///
/// A video lesson points at its media, a text lesson carries its body, an
/// assignment its instructions. Quizzes and images keep their payload in the
/// delivery system, so `body` stays `None` for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum LessonBody {
    VideoUrl { url: String },
    RichText { html: String },
    Instructions { text: String },
}

/// The smallest addressable unit of course content.
///
/// A lesson belongs to exactly one [`Section`](crate::model::Section); its
/// `order` is its zero-based position there and is maintained by the
/// [`Curriculum`](crate::model::Curriculum) operations, never set by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub kind: LessonKind,
    pub duration_secs: u32,
    pub order: usize,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<LessonBody>,
}

/// Payload for adding a new lesson to a section.
///
/// The id and order are assigned by the curriculum; new lessons always start
/// unpublished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonDraft {
    pub title: String,
    pub kind: LessonKind,
    #[serde(default)]
    pub duration_secs: u32,
    #[serde(default)]
    pub body: Option<LessonBody>,
}

/// Field-level patch for an existing lesson. `None` fields are left untouched.
/// Ordering and membership are never changed by a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonPatch {
    pub title: Option<String>,
    pub duration_secs: Option<u32>,
    pub is_published: Option<bool>,
    pub body: Option<LessonBody>,
}

impl Lesson {
    pub(crate) fn from_draft(id: impl Into<String>, order: usize, draft: LessonDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            kind: draft.kind,
            duration_secs: draft.duration_secs,
            order,
            is_published: false,
            body: draft.body,
        }
    }

    pub(crate) fn apply_patch(&mut self, patch: LessonPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(duration_secs) = patch.duration_secs {
            self.duration_secs = duration_secs;
        }
        if let Some(is_published) = patch.is_published {
            self.is_published = is_published;
        }
        if let Some(body) = patch.body {
            self.body = Some(body);
        }
    }
}
