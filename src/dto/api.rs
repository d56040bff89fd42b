//! JSON payloads returned to callers of the paginated search.

use serde::{Deserialize, Serialize};

use crate::dto::member::MemberTeamDto;
use crate::pagination::Page;

/// Paginated member search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberPageResponse {
    /// Rows of the current page.
    pub members: Vec<MemberTeamDto>,
    /// One-based number of the current page.
    pub now_page_number: usize,
    pub total_page: usize,
    pub page_size: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

impl From<Page<MemberTeamDto>> for MemberPageResponse {
    fn from(page: Page<MemberTeamDto>) -> Self {
        Self {
            now_page_number: page.number() + 1,
            total_page: page.total_pages(),
            page_size: page.size(),
            has_next_page: page.has_next(),
            has_previous_page: page.has_previous(),
            is_first_page: page.is_first(),
            is_last_page: page.is_last(),
            members: page.into_content(),
        }
    }
}
