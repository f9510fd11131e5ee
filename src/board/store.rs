//! Board store: append, remove, list, preview, and lookup over one board.

use std::path::Path;
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::datetime::now_stamp;
use crate::validation::validate_post;
use crate::Result;

use super::post::{BoardKind, NewPost, Post};
use super::query::{paginate, ListQuery, Page, SortOrder, PAGE_SIZE};
use super::storage::{JsonFileStore, MemoryStore, StoreBackend};

/// Paginated, searchable post store for one board.
///
/// Every operation reads the whole store from the backend, works on it in
/// memory, and (for mutations) writes the whole store back. Mutations on
/// one handle are serialized by an internal guard; writers going through
/// separate handles to the same file still race last-writer-wins, which is
/// accepted for the traffic this serves.
pub struct BoardStore<B: StoreBackend> {
    kind: BoardKind,
    backend: B,
    write_guard: Mutex<()>,
}

impl BoardStore<JsonFileStore> {
    /// Open the JSON-file-backed store for `kind` under `data_dir`.
    pub fn open(kind: BoardKind, data_dir: impl AsRef<Path>) -> Self {
        let path = data_dir.as_ref().join(kind.file_name());
        Self::with_backend(kind, JsonFileStore::new(path))
    }
}

impl BoardStore<MemoryStore> {
    /// Create an in-memory store, mainly for tests.
    pub fn in_memory(kind: BoardKind) -> Self {
        Self::with_backend(kind, MemoryStore::new())
    }
}

impl<B: StoreBackend> BoardStore<B> {
    /// Create a store over an explicit backend.
    pub fn with_backend(kind: BoardKind, backend: B) -> Self {
        Self {
            kind,
            backend,
            write_guard: Mutex::new(()),
        }
    }

    /// The board this store belongs to.
    pub fn kind(&self) -> BoardKind {
        self.kind
    }

    /// Validate and append a new post.
    ///
    /// Assigns the next sequence id, stamps the creation time (UTC, second
    /// precision), persists the whole store, and returns the stored post.
    pub fn append(&self, draft: NewPost) -> Result<Post> {
        validate_post(&draft, self.kind)?;

        let _guard = self.write_guard.lock().expect("board write guard poisoned");
        let mut data = self.backend.load()?;
        data.seq += 1;
        let post = draft.into_post(self.kind, data.seq, now_stamp());
        data.items.push(post.clone());
        self.backend.save(&data)?;

        debug!(board = ?self.kind, id = post.id, "post appended");
        Ok(post)
    }

    /// Remove the post with the given id, reporting whether one existed.
    ///
    /// The store is persisted either way; a missing id comes back as
    /// `false`, not an error.
    pub fn remove(&self, id: u64) -> Result<bool> {
        let _guard = self.write_guard.lock().expect("board write guard poisoned");
        let mut data = self.backend.load()?;
        let before = data.items.len();
        data.items.retain(|post| post.id != id);
        let removed = data.items.len() < before;
        self.backend.save(&data)?;

        if removed {
            debug!(board = ?self.kind, id, "post removed");
        }
        Ok(removed)
    }

    /// Run a listing query: filter, sort, paginate.
    ///
    /// Search is a case-insensitive substring match over title and content
    /// (plus poster name and phone on the consultation board). Sorting is
    /// stable, so posts with equal timestamps keep their insertion order.
    pub fn list(&self, query: &ListQuery) -> Result<Page<Post>> {
        let mut items = self.backend.load()?.items;

        let q = query.q.trim().to_lowercase();
        if !q.is_empty() {
            items.retain(|post| post.matches_query(&q, self.kind));
        }

        match query.sort {
            SortOrder::Oldest => items.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::Latest => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        Ok(paginate(items, query.page, PAGE_SIZE))
    }

    /// Up to `limit` newest posts, for front-page summaries.
    ///
    /// Never fails: a store that cannot be read yields an empty list.
    pub fn preview(&self, limit: usize) -> Vec<Post> {
        let mut items = match self.backend.load() {
            Ok(data) => data.items,
            Err(e) => {
                warn!(board = ?self.kind, error = %e, "preview load failed");
                return Vec::new();
            }
        };

        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items.truncate(limit);
        items
    }

    /// Look up a post by id. Absence is a normal outcome, not an error.
    pub fn find_by_id(&self, id: u64) -> Result<Option<Post>> {
        let data = self.backend.load()?;
        Ok(data.items.into_iter().find(|post| post.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    fn notice_store() -> BoardStore<MemoryStore> {
        BoardStore::in_memory(BoardKind::Notice)
    }

    fn consult_store() -> BoardStore<MemoryStore> {
        BoardStore::in_memory(BoardKind::Consult)
    }

    fn draft(title: &str) -> NewPost {
        NewPost::new(title, format!("{title} 내용입니다."))
    }

    #[test]
    fn test_append_assigns_sequential_ids() {
        let store = notice_store();
        let first = store.append(draft("첫 글")).unwrap();
        let second = store.append(draft("둘째 글")).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_append_rejects_invalid_draft() {
        let store = notice_store();
        let err = store.append(NewPost::new("제목", "abcd")).unwrap_err();
        let crate::MoredentError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.errors(), &[FieldError::ContentTooShort]);
        // Nothing was persisted.
        assert_eq!(store.list(&ListQuery::new()).unwrap().total, 0);
    }

    #[test]
    fn test_ids_never_reused_after_remove() {
        let store = notice_store();
        let first = store.append(draft("첫 글")).unwrap();
        let second = store.append(draft("둘째 글")).unwrap();
        assert!(store.remove(second.id).unwrap());

        let third = store.append(draft("셋째 글")).unwrap();
        assert_eq!(third.id, 3);
        assert!(third.id > first.id);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = notice_store();
        let post = store.append(draft("삭제될 글")).unwrap();

        assert!(store.remove(post.id).unwrap());
        assert!(!store.remove(post.id).unwrap());
        assert_eq!(store.list(&ListQuery::new()).unwrap().total, 0);
    }

    #[test]
    fn test_remove_missing_id_is_not_an_error() {
        let store = notice_store();
        assert!(!store.remove(999).unwrap());
    }

    #[test]
    fn test_find_by_id() {
        let store = notice_store();
        let post = store.append(draft("찾을 글")).unwrap();

        let found = store.find_by_id(post.id).unwrap();
        assert_eq!(found.map(|p| p.title), Some("찾을 글".to_string()));
        assert!(store.find_by_id(999).unwrap().is_none());
    }

    #[test]
    fn test_list_filters_by_query() {
        let store = consult_store();
        store
            .append(draft("치아교정 문의").with_name("홍길동"))
            .unwrap();
        store
            .append(draft("임플란트 문의").with_name("김철수"))
            .unwrap();

        let page = store
            .list(&ListQuery::new().with_q("교정"))
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].title, "치아교정 문의");
    }

    #[test]
    fn test_list_searches_consult_author_fields() {
        let store = consult_store();
        store
            .append(draft("상담 요청").with_name("홍길동").with_phone("01012345678"))
            .unwrap();

        assert_eq!(store.list(&ListQuery::new().with_q("길동")).unwrap().total, 1);
        assert_eq!(store.list(&ListQuery::new().with_q("1234")).unwrap().total, 1);
    }

    #[test]
    fn test_list_empty_query_returns_everything() {
        let store = notice_store();
        for n in 1..=3 {
            store.append(draft(&format!("글 {n}"))).unwrap();
        }
        assert_eq!(store.list(&ListQuery::new()).unwrap().total, 3);
    }

    #[test]
    fn test_list_sort_ties_keep_insertion_order() {
        // Posts created within the same second share a timestamp; the sort
        // must keep their insertion order in both directions.
        let store = notice_store();
        let ids: Vec<u64> = (1..=4)
            .map(|n| store.append(draft(&format!("글 {n}"))).unwrap().id)
            .collect();

        let page = store.list(&ListQuery::new()).unwrap();
        let same_stamp = page
            .items
            .iter()
            .all(|p| p.created_at == page.items[0].created_at);

        if same_stamp {
            let listed: Vec<u64> = page.items.iter().map(|p| p.id).collect();
            assert_eq!(listed, ids);

            let oldest = store
                .list(&ListQuery::new().with_sort(SortOrder::Oldest))
                .unwrap();
            let listed: Vec<u64> = oldest.items.iter().map(|p| p.id).collect();
            assert_eq!(listed, ids);
        }
    }

    #[test]
    fn test_list_paginates_at_ten() {
        let store = notice_store();
        for n in 1..=23 {
            store.append(draft(&format!("글 {n}"))).unwrap();
        }

        let first = store.list(&ListQuery::new()).unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.pages, 3);

        let last = store.list(&ListQuery::new().with_page(3)).unwrap();
        assert_eq!(last.items.len(), 3);
        assert!(!last.has_next);

        // Out-of-range page clamps to the last page.
        let clamped = store.list(&ListQuery::new().with_page(99)).unwrap();
        assert_eq!(clamped.page, 3);
    }

    #[test]
    fn test_preview_returns_newest_first() {
        use super::super::storage::{StoreBackend, StoreData};

        let backend = MemoryStore::new();
        let mut data = StoreData::default();
        for (n, stamp) in [
            (1, "2024-01-01 09:00:00"),
            (2, "2024-03-01 09:00:00"),
            (3, "2024-02-01 09:00:00"),
        ] {
            data.seq = n;
            data.items.push(
                NewPost::new(format!("글 {n}"), "내용입니다.").into_post(
                    BoardKind::Notice,
                    n,
                    stamp.to_string(),
                ),
            );
        }
        backend.save(&data).unwrap();

        let store = BoardStore::with_backend(BoardKind::Notice, backend);
        let preview = store.preview(2);
        let ids: Vec<u64> = preview.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_preview_empty_store() {
        let store = notice_store();
        assert!(store.preview(5).is_empty());
    }
}
