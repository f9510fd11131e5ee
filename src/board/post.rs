//! Post model for the JSON-backed boards.

use serde::{Deserialize, Serialize};

/// Status assigned to consultation posts that have not been answered yet.
pub const PENDING_STATUS: &str = "대기";

/// The three boards, each persisted to its own JSON store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardKind {
    /// Online consultation requests (온라인 상담).
    Consult,
    /// Clinic notices (공지사항).
    Notice,
    /// Clinic news and events (병원소식).
    News,
}

impl BoardKind {
    /// File name of the persisted store for this board.
    pub fn file_name(&self) -> &'static str {
        match self {
            BoardKind::Consult => "consult.json",
            BoardKind::Notice => "notice.json",
            BoardKind::News => "news.json",
        }
    }

    /// Whether free-text search also matches the poster's name and phone.
    pub(crate) fn searches_author_fields(&self) -> bool {
        matches!(self, BoardKind::Consult)
    }

    /// Whether a poster name is required to write on this board.
    pub(crate) fn requires_name(&self) -> bool {
        matches!(self, BoardKind::Consult)
    }
}

/// A single board record.
///
/// The optional fields cover the store-specific shapes: consultation posts
/// carry `name`, `phone`, `is_private`, `post_password`, and `status`; news
/// posts may carry `image_url`. Fields that are `None` are left out of the
/// persisted JSON so each board keeps its own shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique id within the store, assigned from the sequence counter.
    pub id: u64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Poster name (consultation board).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Poster phone number (consultation board).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether the post is hidden behind a password prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    /// Password protecting a private post, if the poster set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_password: Option<String>,
    /// Consultation handling status, [`PENDING_STATUS`] when unanswered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Attached image for news posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Creation timestamp, `YYYY-MM-DD HH:MM:SS` in UTC.
    pub created_at: String,
}

impl Post {
    /// Whether this post is hidden behind a password prompt.
    pub fn is_private(&self) -> bool {
        self.is_private.unwrap_or(false)
    }

    /// Case-insensitive substring match against this post's searchable
    /// fields. `q` must already be lowercased.
    pub(crate) fn matches_query(&self, q: &str, kind: BoardKind) -> bool {
        if self.title.to_lowercase().contains(q) || self.content.to_lowercase().contains(q) {
            return true;
        }
        if kind.searches_author_fields() {
            let name_hit = self
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(q));
            let phone_hit = self
                .phone
                .as_deref()
                .is_some_and(|phone| phone.to_lowercase().contains(q));
            return name_hit || phone_hit;
        }
        false
    }
}

/// Draft for a new post, built by the write forms.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Poster name.
    pub name: Option<String>,
    /// Poster phone number.
    pub phone: Option<String>,
    /// Hide the post behind a password prompt.
    pub is_private: bool,
    /// Password for a private post.
    pub post_password: Option<String>,
    /// Attached image URL.
    pub image_url: Option<String>,
}

impl NewPost {
    /// Create a new draft with the required fields.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the poster name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the poster phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Mark the post private, optionally protected by a password.
    pub fn private(mut self, post_password: Option<String>) -> Self {
        self.is_private = true;
        self.post_password = post_password;
        self
    }

    /// Attach an image URL.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Finalize the draft into a stored post.
    ///
    /// Text fields are trimmed; empty optionals are dropped. Consultation
    /// posts always carry `is_private` and start in [`PENDING_STATUS`].
    pub(crate) fn into_post(self, kind: BoardKind, id: u64, created_at: String) -> Post {
        let non_empty = |value: Option<String>| {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Post {
            id,
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            name: non_empty(self.name),
            phone: non_empty(self.phone),
            is_private: (kind == BoardKind::Consult).then_some(self.is_private),
            post_password: non_empty(self.post_password),
            status: (kind == BoardKind::Consult).then(|| PENDING_STATUS.to_string()),
            image_url: non_empty(self.image_url),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        NewPost::new("치아교정 문의", "교정 비용이 궁금합니다.")
            .with_name("홍길동")
            .with_phone("01012345678")
            .into_post(BoardKind::Consult, 1, "2024-01-15 10:30:00".to_string())
    }

    #[test]
    fn test_into_post_consult_shape() {
        let post = sample_post();
        assert_eq!(post.id, 1);
        assert_eq!(post.name.as_deref(), Some("홍길동"));
        assert_eq!(post.is_private, Some(false));
        assert_eq!(post.status.as_deref(), Some(PENDING_STATUS));
        assert!(post.post_password.is_none());
    }

    #[test]
    fn test_into_post_notice_shape() {
        let post = NewPost::new("정기 휴진 안내", "5월 1일은 휴진입니다.").into_post(
            BoardKind::Notice,
            3,
            "2024-01-15 10:30:00".to_string(),
        );
        assert!(post.name.is_none());
        assert!(post.is_private.is_none());
        assert!(post.status.is_none());
        assert!(post.image_url.is_none());
    }

    #[test]
    fn test_into_post_trims_fields() {
        let post = NewPost::new("  제목  ", "  내용입니다  ")
            .with_name("  홍길동  ")
            .into_post(BoardKind::Consult, 1, "2024-01-15 10:30:00".to_string());
        assert_eq!(post.title, "제목");
        assert_eq!(post.content, "내용입니다");
        assert_eq!(post.name.as_deref(), Some("홍길동"));
    }

    #[test]
    fn test_into_post_private_with_password() {
        let post = NewPost::new("비밀 상담", "비밀 상담 내용입니다.")
            .with_name("홍길동")
            .private(Some("1234".to_string()))
            .into_post(BoardKind::Consult, 2, "2024-01-15 10:30:00".to_string());
        assert!(post.is_private());
        assert_eq!(post.post_password.as_deref(), Some("1234"));
    }

    #[test]
    fn test_into_post_empty_password_dropped() {
        let post = NewPost::new("비밀 상담", "비밀 상담 내용입니다.")
            .with_name("홍길동")
            .private(Some("  ".to_string()))
            .into_post(BoardKind::Consult, 2, "2024-01-15 10:30:00".to_string());
        assert!(post.is_private());
        assert!(post.post_password.is_none());
    }

    #[test]
    fn test_serialized_notice_omits_consult_fields() {
        let post = NewPost::new("공지", "공지 내용입니다.").into_post(
            BoardKind::Notice,
            1,
            "2024-01-15 10:30:00".to_string(),
        );
        let json = serde_json::to_string(&post).unwrap();
        assert!(!json.contains("is_private"));
        assert!(!json.contains("post_password"));
        assert!(!json.contains("image_url"));
    }

    #[test]
    fn test_matches_query_title_and_content() {
        let post = sample_post();
        assert!(post.matches_query("교정", BoardKind::Consult));
        assert!(post.matches_query("비용", BoardKind::Consult));
        assert!(!post.matches_query("임플란트", BoardKind::Consult));
    }

    #[test]
    fn test_matches_query_case_insensitive() {
        let post = NewPost::new("Scaling 안내", "SCALING EVENT").into_post(
            BoardKind::News,
            1,
            "2024-01-15 10:30:00".to_string(),
        );
        assert!(post.matches_query("scaling", BoardKind::News));
    }

    #[test]
    fn test_matches_query_author_fields_consult_only() {
        let post = sample_post();
        assert!(post.matches_query("홍길동", BoardKind::Consult));
        assert!(post.matches_query("0101234", BoardKind::Consult));
        // Notice/news boards only search title and content.
        assert!(!post.matches_query("홍길동", BoardKind::Notice));
    }

    #[test]
    fn test_board_kind_file_names() {
        assert_eq!(BoardKind::Consult.file_name(), "consult.json");
        assert_eq!(BoardKind::Notice.file_name(), "notice.json");
        assert_eq!(BoardKind::News.file_name(), "news.json");
    }
}
