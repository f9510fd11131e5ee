//! Input validation for board posts and reservations.
//!
//! Validation collects every failing field in one pass instead of stopping
//! at the first error, so the page layer can show the visitor the complete
//! list at once.

use std::fmt;

use thiserror::Error;

use crate::board::{BoardKind, NewPost};
use crate::reserve::NewReservation;
use crate::text::normalize_phone;

/// Minimum post content length in characters, after trimming.
pub const MIN_CONTENT_LENGTH: usize = 5;

/// A single failed field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Post or reservation name is missing.
    #[error("이름을 입력해주세요.")]
    NameRequired,

    /// Post title is empty after trimming.
    #[error("제목을 입력해주세요.")]
    TitleRequired,

    /// Post content is shorter than [`MIN_CONTENT_LENGTH`] characters.
    #[error("내용을 {MIN_CONTENT_LENGTH}자 이상 입력해주세요.")]
    ContentTooShort,

    /// Reservation date is missing.
    #[error("날짜를 선택해주세요.")]
    DateRequired,

    /// Reservation time is missing.
    #[error("시간을 선택해주세요.")]
    TimeRequired,

    /// Reservation phone number is missing or contains no digits.
    #[error("연락처를 입력해주세요.")]
    PhoneRequired,

    /// Reservation birth date is missing.
    #[error("생년월일을 입력해주세요.")]
    BirthRequired,
}

impl FieldError {
    /// Name of the input field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::NameRequired => "name",
            FieldError::TitleRequired => "title",
            FieldError::ContentTooShort => "content",
            FieldError::DateRequired => "date",
            FieldError::TimeRequired => "time",
            FieldError::PhoneRequired => "phone",
            FieldError::BirthRequired => "birth",
        }
    }
}

/// All field errors from one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// The individual field errors, in form order.
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Whether the given field failed.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a post draft for the given board.
///
/// Title must be non-empty after trimming and content at least
/// [`MIN_CONTENT_LENGTH`] characters; the consultation board additionally
/// requires the poster's name.
pub fn validate_post(draft: &NewPost, kind: BoardKind) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if kind.requires_name() && draft.name.as_deref().map_or(true, |name| name.trim().is_empty()) {
        errors.push(FieldError::NameRequired);
    }
    if draft.title.trim().is_empty() {
        errors.push(FieldError::TitleRequired);
    }
    if draft.content.trim().chars().count() < MIN_CONTENT_LENGTH {
        errors.push(FieldError::ContentTooShort);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Validate a reservation draft.
///
/// Date, time, name, phone (after digit normalization), and birth date are
/// all required.
pub fn validate_reservation(draft: &NewReservation) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if draft.date.trim().is_empty() {
        errors.push(FieldError::DateRequired);
    }
    if draft.time.trim().is_empty() {
        errors.push(FieldError::TimeRequired);
    }
    if draft.name.trim().is_empty() {
        errors.push(FieldError::NameRequired);
    }
    if normalize_phone(&draft.phone).is_empty() {
        errors.push(FieldError::PhoneRequired);
    }
    if draft.birth.trim().is_empty() {
        errors.push(FieldError::BirthRequired);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
