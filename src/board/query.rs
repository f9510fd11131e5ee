//! Listing queries and pagination for boards.

/// Number of posts per listing page.
pub const PAGE_SIZE: usize = 10;

/// Sort order for board listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first (`created_at` descending).
    #[default]
    Latest,
    /// Oldest first (`created_at` ascending).
    Oldest,
}

impl SortOrder {
    /// Parse a query-string value. Anything other than `"oldest"` means
    /// [`SortOrder::Latest`].
    pub fn parse(value: &str) -> Self {
        if value.trim() == "oldest" {
            SortOrder::Oldest
        } else {
            SortOrder::Latest
        }
    }
}

/// A listing query: free-text search, sort order, and a 1-based page number.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Free-text search; empty means no filtering.
    pub q: String,
    /// Sort order.
    pub sort: SortOrder,
    /// Requested page, 1-based. Clamped into range when out of bounds.
    pub page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            q: String::new(),
            sort: SortOrder::Latest,
            page: 1,
        }
    }
}

impl ListQuery {
    /// The default query: no filter, newest first, first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search string.
    pub fn with_q(mut self, q: impl Into<String>) -> Self {
        self.q = q.into();
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Set the requested page number.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/// One page of a sorted/filtered listing plus navigation metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// The clamped page number this slice came from.
    pub page: usize,
    /// Page size used for the slice.
    pub per_page: usize,
    /// Total number of items across all pages.
    pub total: usize,
    /// Total number of pages, never below 1.
    pub pages: usize,
    /// Whether a previous page exists.
    pub has_prev: bool,
    /// Whether a next page exists.
    pub has_next: bool,
    /// `page - 1`; only meaningful when `has_prev` is true.
    pub prev_num: usize,
    /// `page + 1`; only meaningful when `has_next` is true.
    pub next_num: usize,
}

/// Slice `items` into the requested page.
///
/// The page count has a floor of 1 even for an empty list, and the
/// requested page is clamped into `[1, pages]`.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let total = items.len();
    let pages = std::cmp::max(1, total.div_ceil(per_page));
    let page = page.clamp(1, pages);
    let start = (page - 1) * per_page;
    let items: Vec<T> = items.into_iter().skip(start).take(per_page).collect();

    Page {
        items,
        page,
        per_page,
        total,
        pages,
        has_prev: page > 1,
        has_next: page < pages,
        prev_num: page - 1,
        next_num: page + 1,
    }
}
