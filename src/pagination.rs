//! Offset pagination with lazy total counting.
//!
//! [`Page::fetch_with_count`] receives the already loaded content of a page
//! window and only invokes the supplied count query when the content alone
//! cannot prove how many rows match in total.

use crate::domain::types::TypeConstraintError;

/// Default number of rows per page when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// A zero-based page number together with a page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    /// Creates a page window. The size must be at least one.
    pub fn new(page: usize, size: usize) -> Result<Self, TypeConstraintError> {
        if size == 0 {
            return Err(TypeConstraintError::InvalidValue(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of rows skipped before this window.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Returns the total row count when it is implied by the page content.
///
/// On the first page a short page is the whole result. On later pages a
/// short, non-empty page ends the result. An empty later page proves
/// nothing: the window may simply lie past the end.
pub fn known_total(request: PageRequest, content_len: usize) -> Option<usize> {
    let offset = request.offset();
    if offset == 0 {
        return (content_len < request.size()).then_some(content_len);
    }
    (content_len != 0 && content_len < request.size()).then(|| offset + content_len)
}

/// One window of an ordered result set plus the total number of matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    request: PageRequest,
    total: usize,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total: usize) -> Self {
        Self {
            content,
            request,
            total,
        }
    }

    /// Packages `content`, calling `count` only when the total is not implied.
    pub fn fetch_with_count<E, F>(content: Vec<T>, request: PageRequest, count: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<usize, E>,
    {
        let total = match known_total(request, content.len()) {
            Some(total) => {
                log::debug!(
                    "Skipping count query for page {} (size {}): total is {total}",
                    request.page(),
                    request.size()
                );
                total
            }
            None => count()?,
        };
        Ok(Self::new(content, request, total))
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Zero-based page number.
    pub fn number(&self) -> usize {
        self.request.page()
    }

    pub fn size(&self) -> usize {
        self.request.size()
    }

    pub fn offset(&self) -> usize {
        self.request.offset()
    }

    pub fn total_elements(&self) -> usize {
        self.total
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.request.size())
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.offset() + self.content.len() < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.offset() > 0
    }

    pub fn is_first(&self) -> bool {
        !self.has_previous()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    /// Converts the content while keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::convert::Infallible;

    use super::*;

    fn request(page: usize, size: usize) -> PageRequest {
        PageRequest::new(page, size).unwrap()
    }

    /// Pages `rows` the way a store would and records whether counting ran.
    fn fetch(rows: usize, req: PageRequest) -> (Page<usize>, bool) {
        let counted = Cell::new(false);
        let content = (0..rows).skip(req.offset()).take(req.size()).collect();
        let page = Page::fetch_with_count(content, req, || {
            counted.set(true);
            Ok::<_, Infallible>(rows)
        })
        .unwrap();
        (page, counted.get())
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(PageRequest::new(0, 0).is_err());
        assert_eq!(request(2, 5).offset(), 10);
    }

    #[test]
    fn four_rows_in_pages_of_three() {
        let (first, _) = fetch(4, request(0, 3));
        assert_eq!(first.content(), &[0, 1, 2]);
        assert!(first.has_next());
        assert!(!first.has_previous());
        assert!(first.is_first());
        assert!(!first.is_last());
        assert_eq!(first.total_pages(), 2);

        let (second, counted) = fetch(4, request(1, 3));
        assert_eq!(second.content(), &[3]);
        assert!(!second.has_next());
        assert!(second.has_previous());
        assert!(second.is_last());
        assert!(!counted);
        assert_eq!(second.total_elements(), 4);
    }

    #[test]
    fn short_first_page_skips_count() {
        let (page, counted) = fetch(2, request(0, 5));
        assert!(!counted);
        assert_eq!(page.total_elements(), 2);
        assert!(page.is_first() && page.is_last());
    }

    #[test]
    fn full_page_and_empty_tail_page_count() {
        let (_, counted) = fetch(6, request(0, 3));
        assert!(counted);

        let (past_end, counted) = fetch(6, request(5, 3));
        assert!(counted);
        assert!(!past_end.has_content());
        assert_eq!(past_end.total_elements(), 6);
        assert!(past_end.is_last());
    }

    #[test]
    fn lazy_and_explicit_totals_agree() {
        for rows in 0..12 {
            for size in 1..6 {
                for page in 0..5 {
                    let req = request(page, size);
                    let (lazy, _) = fetch(rows, req);
                    assert_eq!(lazy.total_elements(), rows, "rows={rows} size={size} page={page}");
                }
            }
        }
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Page::new(vec![1, 2], request(1, 2), 5).map(|n| n * 10);
        assert_eq!(page.content(), &[10, 20]);
        assert_eq!(page.total_elements(), 5);
        assert_eq!(page.number(), 1);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let (page, _) = fetch(0, request(0, 3));
        assert_eq!(page.total_pages(), 0);
        assert!(page.is_last());
    }
}
