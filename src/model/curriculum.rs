//! The curriculum value type and its reorder engine.
//!
//! Every edit is a pure function: it borrows the current curriculum, validates
//! the request, and returns a brand-new value (or a [`ReorderError`], leaving
//! the input untouched). This keeps the engine UI-framework-agnostic and makes
//! snapshot-based undo trivial for callers that want it — they just keep the
//! previous value.
//!
//! Move operations use splice semantics: the element is removed first and the
//! destination index is interpreted against the already-shortened list. That is
//! the standard "drag to position" behavior, not "insert before the original
//! position".

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Lesson, LessonDraft, LessonPatch, Section};

/// Why an edit was rejected.
///
/// Both variants are hard failures: indices are never clamped and ids are never
/// invented, because either would silently corrupt the ordering invariants.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReorderError {
    /// The referenced section or lesson id does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The requested position violates the sequence bounds.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// The full ordered tree of sections and lessons for one course being edited.
///
/// # Invariants
///
/// After every operation:
/// - `sections[i].order == i` for all `i` (contiguous, zero-based, gapless);
/// - within each section, `lessons[j].order == j` likewise;
/// - every lesson belongs to exactly one section;
/// - ids are unique for the lifetime of the curriculum and never reused.
///
/// Fresh ids are minted from a private sequence counter owned by the value, so
/// the add operations stay pure and deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curriculum {
    pub id: String,
    pub course_id: String,
    pub sections: Vec<Section>,
    next_seq: u64,
}

impl Curriculum {
    /// Creates an empty curriculum for the given course.
    pub fn new(id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            course_id: course_id.into(),
            sections: Vec::new(),
            next_seq: 1,
        }
    }

    /// Looks up a section by id.
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    fn section_index(&self, section_id: &str) -> Result<usize, ReorderError> {
        self.sections
            .iter()
            .position(|s| s.id == section_id)
            .ok_or_else(|| ReorderError::NotFound(section_id.to_string()))
    }

    fn mint_id(&mut self, prefix: &str) -> String {
        let id = format!("{}_{}", prefix, self.next_seq);
        self.next_seq += 1;
        id
    }

    fn renumber_sections(&mut self) {
        for (i, section) in self.sections.iter_mut().enumerate() {
            section.order = i;
        }
    }

    // --- Move operations ---

    /// Moves the section at `from` to position `to`.
    ///
    /// Both indices must name existing positions (`< section count`); the engine
    /// fails with [`ReorderError::IndexOutOfRange`] rather than clamping.
    /// Lessons keep their order and membership.
    pub fn move_section(&self, from: usize, to: usize) -> Result<Curriculum, ReorderError> {
        let len = self.sections.len();
        if from >= len {
            return Err(ReorderError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(ReorderError::IndexOutOfRange { index: to, len });
        }
        let mut next = self.clone();
        let section = next.sections.remove(from);
        next.sections.insert(to, section);
        next.renumber_sections();
        Ok(next)
    }

    /// Moves the lesson at `from` in `section_id` to position `to`, optionally
    /// into another section.
    ///
    /// With no target (or the target equal to the source), this is a reorder
    /// within one section; `from == to` is a no-op returning an equivalent
    /// curriculum. With a different target, the lesson leaves the source
    /// section (which is renumbered gapless) and is inserted at `to` in the
    /// target, where `to` may equal the target's lesson count to append.
    ///
    /// Fails with [`ReorderError::NotFound`] for an unresolvable section id and
    /// [`ReorderError::IndexOutOfRange`] for bad positions.
    pub fn move_lesson(
        &self,
        section_id: &str,
        from: usize,
        to: usize,
        target_section_id: Option<&str>,
    ) -> Result<Curriculum, ReorderError> {
        let src_idx = self.section_index(section_id)?;
        let src_len = self.sections[src_idx].lessons.len();
        if from >= src_len {
            return Err(ReorderError::IndexOutOfRange {
                index: from,
                len: src_len,
            });
        }

        match target_section_id {
            Some(target_id) if target_id != section_id => {
                let tgt_idx = self.section_index(target_id)?;
                let tgt_len = self.sections[tgt_idx].lessons.len();
                // `to == tgt_len` appends; anything beyond is out of range.
                if to > tgt_len {
                    return Err(ReorderError::IndexOutOfRange {
                        index: to,
                        len: tgt_len,
                    });
                }
                let mut next = self.clone();
                let lesson = next.sections[src_idx].lessons.remove(from);
                next.sections[src_idx].renumber();
                next.sections[tgt_idx].lessons.insert(to, lesson);
                next.sections[tgt_idx].renumber();
                Ok(next)
            }
            _ => {
                if to >= src_len {
                    return Err(ReorderError::IndexOutOfRange {
                        index: to,
                        len: src_len,
                    });
                }
                if from == to {
                    return Ok(self.clone());
                }
                let mut next = self.clone();
                let section = &mut next.sections[src_idx];
                let lesson = section.lessons.remove(from);
                section.lessons.insert(to, lesson);
                section.renumber();
                Ok(next)
            }
        }
    }

    // --- Add operations ---

    /// Appends an empty section with a freshly minted id.
    pub fn add_section(&self, title: impl Into<String>) -> (Curriculum, String) {
        let mut next = self.clone();
        let id = next.mint_id("section");
        let order = next.sections.len();
        next.sections.push(Section::new(id.clone(), title, order));
        (next, id)
    }

    /// Appends a lesson built from `draft` to the named section.
    pub fn add_lesson(
        &self,
        section_id: &str,
        draft: LessonDraft,
    ) -> Result<(Curriculum, String), ReorderError> {
        let idx = self.section_index(section_id)?;
        let mut next = self.clone();
        let id = next.mint_id("lesson");
        let section = &mut next.sections[idx];
        let order = section.lessons.len();
        section.lessons.push(Lesson::from_draft(id.clone(), order, draft));
        Ok((next, id))
    }

    // --- Remove operations ---

    /// Deletes a section and all of its lessons; remaining sections are
    /// renumbered to stay contiguous.
    pub fn remove_section(&self, section_id: &str) -> Result<Curriculum, ReorderError> {
        let idx = self.section_index(section_id)?;
        let mut next = self.clone();
        next.sections.remove(idx);
        next.renumber_sections();
        Ok(next)
    }

    /// Deletes a lesson; the section's remaining lessons are renumbered.
    pub fn remove_lesson(
        &self,
        section_id: &str,
        lesson_id: &str,
    ) -> Result<Curriculum, ReorderError> {
        let sec_idx = self.section_index(section_id)?;
        let lesson_idx = self.sections[sec_idx]
            .lessons
            .iter()
            .position(|l| l.id == lesson_id)
            .ok_or_else(|| ReorderError::NotFound(lesson_id.to_string()))?;
        let mut next = self.clone();
        next.sections[sec_idx].lessons.remove(lesson_idx);
        next.sections[sec_idx].renumber();
        Ok(next)
    }

    // --- Field-level updates (no reordering) ---

    /// Replaces a section's title.
    pub fn rename_section(
        &self,
        section_id: &str,
        title: impl Into<String>,
    ) -> Result<Curriculum, ReorderError> {
        let idx = self.section_index(section_id)?;
        let mut next = self.clone();
        next.sections[idx].title = title.into();
        Ok(next)
    }

    /// Applies a field-level patch to a lesson.
    pub fn update_lesson(
        &self,
        section_id: &str,
        lesson_id: &str,
        patch: LessonPatch,
    ) -> Result<Curriculum, ReorderError> {
        let sec_idx = self.section_index(section_id)?;
        let lesson_idx = self.sections[sec_idx]
            .lessons
            .iter()
            .position(|l| l.id == lesson_id)
            .ok_or_else(|| ReorderError::NotFound(lesson_id.to_string()))?;
        let mut next = self.clone();
        next.sections[sec_idx].lessons[lesson_idx].apply_patch(patch);
        Ok(next)
    }
}

/// Payload for creating a new curriculum.
///
/// Normally sent by the Course actor's `on_create` hook rather than by hand.
#[derive(Debug, Clone)]
pub struct CurriculumCreate {
    pub course_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LessonKind;

    fn draft(title: &str, kind: LessonKind) -> LessonDraft {
        LessonDraft {
            title: title.to_string(),
            kind,
            duration_secs: 300,
            body: None,
        }
    }

    /// Two sections: the first with two lessons, the second with one.
    fn sample() -> (Curriculum, String, String, Vec<String>) {
        let c = Curriculum::new("curriculum_1", "course_1");
        let (c, s1) = c.add_section("Basics");
        let (c, s2) = c.add_section("Advanced");
        let (c, l1) = c.add_lesson(&s1, draft("Intro", LessonKind::Video)).unwrap();
        let (c, l2) = c.add_lesson(&s1, draft("Setup", LessonKind::Text)).unwrap();
        let (c, l3) = c.add_lesson(&s2, draft("Traits", LessonKind::Quiz)).unwrap();
        (c, s1, s2, vec![l1, l2, l3])
    }

    fn section_ids(c: &Curriculum) -> Vec<&str> {
        c.sections.iter().map(|s| s.id.as_str()).collect()
    }

    fn lesson_ids<'a>(c: &'a Curriculum, section_id: &str) -> Vec<&'a str> {
        c.section(section_id)
            .unwrap()
            .lessons
            .iter()
            .map(|l| l.id.as_str())
            .collect()
    }

    fn assert_contiguous(c: &Curriculum) {
        for (i, section) in c.sections.iter().enumerate() {
            assert_eq!(section.order, i, "section {} has gap", section.id);
            for (j, lesson) in section.lessons.iter().enumerate() {
                assert_eq!(lesson.order, j, "lesson {} has gap", lesson.id);
            }
        }
    }

    #[test]
    fn add_operations_assign_contiguous_orders_and_fresh_ids() {
        let (c, s1, s2, lessons) = sample();
        assert_contiguous(&c);
        assert_eq!(section_ids(&c), vec![s1.as_str(), s2.as_str()]);
        assert_eq!(lesson_ids(&c, &s1), vec![lessons[0].as_str(), lessons[1].as_str()]);
        // All five ids minted from one sequence, so none collide.
        let mut all = vec![s1.clone(), s2.clone()];
        all.extend(lessons.clone());
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn move_section_reorders_and_renumbers() {
        let (c, s1, s2, _) = sample();
        let (c, s3) = c.add_section("Extras");

        let moved = c.move_section(0, 2).unwrap();
        assert_eq!(section_ids(&moved), vec![s2.as_str(), s3.as_str(), s1.as_str()]);
        assert_contiguous(&moved);
        // Lessons ride along untouched.
        assert_eq!(moved.section(&s1).unwrap().lessons.len(), 2);
    }

    #[test]
    fn move_section_round_trip_restores_order() {
        let (c, _, _, _) = sample();
        let (c, _) = c.add_section("Extras");
        let original = section_ids(&c)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        let back = c.move_section(0, 2).unwrap().move_section(2, 0).unwrap();
        assert_eq!(section_ids(&back), original);
        assert_contiguous(&back);
    }

    #[test]
    fn move_section_rejects_out_of_range_without_clamping() {
        let (c, _, _, _) = sample();
        let m = c.sections.len();
        assert_eq!(
            c.move_section(0, m),
            Err(ReorderError::IndexOutOfRange { index: m, len: m })
        );
        assert_eq!(
            c.move_section(m, 0),
            Err(ReorderError::IndexOutOfRange { index: m, len: m })
        );
    }

    #[test]
    fn move_lesson_within_section() {
        let (c, s1, _, lessons) = sample();
        let moved = c.move_lesson(&s1, 1, 0, None).unwrap();
        assert_eq!(lesson_ids(&moved, &s1), vec![lessons[1].as_str(), lessons[0].as_str()]);
        assert_contiguous(&moved);
    }

    #[test]
    fn move_lesson_same_index_is_a_noop() {
        let (c, s1, _, _) = sample();
        let unchanged = c.move_lesson(&s1, 1, 1, None).unwrap();
        assert_eq!(unchanged, c);
    }

    #[test]
    fn move_lesson_explicit_same_target_behaves_like_reorder() {
        let (c, s1, _, lessons) = sample();
        let moved = c.move_lesson(&s1, 0, 1, Some(&s1)).unwrap();
        assert_eq!(lesson_ids(&moved, &s1), vec![lessons[1].as_str(), lessons[0].as_str()]);
    }

    #[test]
    fn move_lesson_across_sections() {
        // [S1{L1,L2}, S2{L3}] + move(S1, 1, 0, S2) => S1{L1}, S2{L2,L3}
        let (c, s1, s2, lessons) = sample();
        let moved = c.move_lesson(&s1, 1, 0, Some(&s2)).unwrap();

        assert_eq!(lesson_ids(&moved, &s1), vec![lessons[0].as_str()]);
        assert_eq!(lesson_ids(&moved, &s2), vec![lessons[1].as_str(), lessons[2].as_str()]);
        assert_contiguous(&moved);

        // The moved lesson keeps its fields.
        let l2 = moved.section(&s2).unwrap().lesson(&lessons[1]).unwrap();
        assert_eq!(l2.title, "Setup");
        assert_eq!(l2.kind, LessonKind::Text);
        assert_eq!(l2.order, 0);
    }

    #[test]
    fn move_lesson_across_sections_can_append() {
        let (c, s1, s2, lessons) = sample();
        let moved = c.move_lesson(&s1, 0, 1, Some(&s2)).unwrap();
        assert_eq!(lesson_ids(&moved, &s2), vec![lessons[2].as_str(), lessons[0].as_str()]);
        assert_contiguous(&moved);
    }

    #[test]
    fn move_lesson_rejects_bad_indices() {
        let (c, s1, s2, _) = sample();
        assert_eq!(
            c.move_lesson(&s1, 2, 0, None),
            Err(ReorderError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            c.move_lesson(&s1, 0, 2, None),
            Err(ReorderError::IndexOutOfRange { index: 2, len: 2 })
        );
        // Past the insertion point of the target section.
        assert_eq!(
            c.move_lesson(&s1, 0, 2, Some(&s2)),
            Err(ReorderError::IndexOutOfRange { index: 2, len: 1 })
        );
    }

    #[test]
    fn move_lesson_rejects_unknown_ids() {
        let (c, s1, _, _) = sample();
        assert_eq!(
            c.move_lesson("missing", 0, 0, None),
            Err(ReorderError::NotFound("missing".to_string()))
        );
        assert_eq!(
            c.move_lesson(&s1, 0, 0, Some("missing")),
            Err(ReorderError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn failed_move_leaves_input_untouched() {
        let (c, _, _, _) = sample();
        let before = c.clone();
        let m = c.sections.len();
        assert!(c.move_section(0, m).is_err());
        assert_eq!(c, before);
    }

    #[test]
    fn remove_section_drops_lessons_and_renumbers() {
        let (c, s1, s2, lessons) = sample();
        let next = c.remove_section(&s1).unwrap();

        assert_eq!(section_ids(&next), vec![s2.as_str()]);
        assert_eq!(next.section(&s2).unwrap().order, 0);
        assert_eq!(lesson_ids(&next, &s2), vec![lessons[2].as_str()]);
        assert_contiguous(&next);
    }

    #[test]
    fn remove_lesson_renumbers_survivors() {
        let (c, s1, _, lessons) = sample();
        let next = c.remove_lesson(&s1, &lessons[0]).unwrap();

        assert_eq!(lesson_ids(&next, &s1), vec![lessons[1].as_str()]);
        assert_eq!(next.section(&s1).unwrap().lesson(&lessons[1]).unwrap().order, 0);

        assert_eq!(
            next.remove_lesson(&s1, &lessons[0]),
            Err(ReorderError::NotFound(lessons[0].clone()))
        );
    }

    #[test]
    fn removed_ids_are_never_reused() {
        let (c, s1, _, _) = sample();
        let next = c.remove_section(&s1).unwrap();
        let (next, fresh) = next.add_section("Replacement");
        assert_ne!(fresh, s1);
        assert!(next.section(&fresh).is_some());
    }

    #[test]
    fn rename_section_replaces_title_only() {
        let (c, s1, _, _) = sample();
        let next = c.rename_section(&s1, "Fundamentals").unwrap();
        assert_eq!(next.section(&s1).unwrap().title, "Fundamentals");
        assert_eq!(next.section(&s1).unwrap().order, 0);
        assert_eq!(
            c.rename_section("missing", "x"),
            Err(ReorderError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn update_lesson_patches_fields_without_reordering() {
        let (c, s1, _, lessons) = sample();
        let patch = LessonPatch {
            title: Some("Welcome".to_string()),
            is_published: Some(true),
            ..LessonPatch::default()
        };
        let next = c.update_lesson(&s1, &lessons[0], patch).unwrap();

        let lesson = next.section(&s1).unwrap().lesson(&lessons[0]).unwrap();
        assert_eq!(lesson.title, "Welcome");
        assert!(lesson.is_published);
        assert_eq!(lesson.duration_secs, 300);
        assert_eq!(lesson.order, 0);
        assert_eq!(lesson_ids(&next, &s1), lesson_ids(&c, &s1));
    }

    #[test]
    fn empty_sections_are_legal() {
        let c = Curriculum::new("curriculum_1", "course_1");
        let (c, s1) = c.add_section("Placeholder");
        let (c, l1) = c.add_lesson(&s1, draft("Only", LessonKind::Image)).unwrap();
        let c = c.remove_lesson(&s1, &l1).unwrap();
        assert!(c.section(&s1).unwrap().lessons.is_empty());
        assert_contiguous(&c);
    }
}
