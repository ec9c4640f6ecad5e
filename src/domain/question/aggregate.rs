//! Question aggregate entity.
//!
//! A question is submitted anonymously into an experience, starts out
//! pending, and is either deleted by an admin or approved with an answer.
//! Approved questions (and, independently, pending ones an admin chooses
//! to share) can be pushed to the experience's forum.

use crate::domain::foundation::{
    ExperienceId, PostId, QuestionId, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Maximum length for submitted question text, in characters.
pub const MAX_QUESTION_LENGTH: usize = 100;

/// Review status of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionStatus {
    Pending,
    Approved,
}

impl QuestionStatus {
    /// Stable string form used in the database and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionStatus::Pending => "PENDING",
            QuestionStatus::Approved => "APPROVED",
        }
    }

    /// Parses the stable string form.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "PENDING" => Ok(QuestionStatus::Pending),
            "APPROVED" => Ok(QuestionStatus::Approved),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}

/// Question aggregate - one anonymously submitted question.
///
/// # Invariants
///
/// - `id` is globally unique and immutable
/// - `question` is 1..=100 characters and immutable after creation
/// - `experience_id` never changes
/// - `status` moves Pending -> Approved exactly once, never back
/// - `pushed_to_forum` moves false -> true, never back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier.
    id: QuestionId,

    /// Experience this question was submitted into.
    experience_id: ExperienceId,

    /// The submitted text.
    question: String,

    /// Review status.
    status: QuestionStatus,

    /// Admin-provided answer, set at approval.
    answer: Option<String>,

    /// When the question was answered/approved.
    answered_at: Option<Timestamp>,

    /// Whether a forum post was created for this question.
    pushed_to_forum: bool,

    /// Id of the forum post, once pushed.
    forum_post_id: Option<PostId>,

    /// When the question was submitted.
    created_at: Timestamp,
}

impl Question {
    /// Creates a new pending question.
    ///
    /// # Errors
    ///
    /// `ValidationError` if the text is empty, whitespace-only, or longer
    /// than [`MAX_QUESTION_LENGTH`] characters.
    pub fn new(
        id: QuestionId,
        experience_id: ExperienceId,
        question: String,
    ) -> Result<Self, ValidationError> {
        Self::validate_text(&question)?;

        Ok(Self {
            id,
            experience_id,
            question,
            status: QuestionStatus::Pending,
            answer: None,
            answered_at: None,
            pushed_to_forum: false,
            forum_post_id: None,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitutes a question from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: QuestionId,
        experience_id: ExperienceId,
        question: String,
        status: QuestionStatus,
        answer: Option<String>,
        answered_at: Option<Timestamp>,
        pushed_to_forum: bool,
        forum_post_id: Option<PostId>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            experience_id,
            question,
            status,
            answer,
            answered_at,
            pushed_to_forum,
            forum_post_id,
            created_at,
        }
    }

    fn validate_text(text: &str) -> Result<(), ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("question"));
        }
        let len = text.chars().count();
        if len > MAX_QUESTION_LENGTH {
            return Err(ValidationError::length_out_of_range(
                "question",
                1,
                MAX_QUESTION_LENGTH,
                len,
            ));
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Returns the owning experience id.
    pub fn experience_id(&self) -> &ExperienceId {
        &self.experience_id
    }

    /// Returns the submitted text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Returns the review status.
    pub fn status(&self) -> QuestionStatus {
        self.status
    }

    /// Returns the answer, if approved.
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    /// Returns when the question was answered.
    pub fn answered_at(&self) -> Option<&Timestamp> {
        self.answered_at.as_ref()
    }

    /// Returns whether a forum post exists for this question.
    pub fn is_pushed_to_forum(&self) -> bool {
        self.pushed_to_forum
    }

    /// Returns the forum post id, once pushed.
    pub fn forum_post_id(&self) -> Option<&PostId> {
        self.forum_post_id.as_ref()
    }

    /// Returns when the question was submitted.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns true while the question awaits review.
    pub fn is_pending(&self) -> bool {
        self.status == QuestionStatus::Pending
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Approves the question with an answer.
    ///
    /// Marks the question approved, records the answer and the approval
    /// time, and links the forum post created for the Q&A. The transition
    /// is one-way: approving twice is an error.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyField` if the answer is blank
    /// - `ValidationError::InvalidFormat` if already approved
    pub fn approve(&mut self, answer: String, forum_post_id: PostId) -> Result<(), ValidationError> {
        if answer.trim().is_empty() {
            return Err(ValidationError::empty_field("answer"));
        }
        if self.status == QuestionStatus::Approved {
            return Err(ValidationError::invalid_format(
                "status",
                "question is already approved",
            ));
        }

        self.status = QuestionStatus::Approved;
        self.answer = Some(answer);
        self.answered_at = Some(Timestamp::now());
        self.pushed_to_forum = true;
        self.forum_post_id = Some(forum_post_id);
        Ok(())
    }

    /// Records that the question was pushed to the forum.
    ///
    /// Does not touch status or answer; `pushed_to_forum` is monotonic, so
    /// recording a second push keeps the original post id.
    pub fn record_forum_push(&mut self, forum_post_id: PostId) {
        self.pushed_to_forum = true;
        if self.forum_post_id.is_none() {
            self.forum_post_id = Some(forum_post_id);
        }
    }
}
