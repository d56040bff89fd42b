//! Query-string form for member searches.
//!
//! Accepts Spring-style paging parameters: zero-based `page`, `size` and a
//! repeatable `sort=property,direction`.

use serde::Deserialize;
use validator::Validate;

use crate::domain::search::{MemberSearchCondition, Sort};
use crate::forms::FormError;
use crate::pagination::PageRequest;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Raw search parameters as received from a caller.
pub struct MemberSearchForm {
    pub user_name: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
    /// Free-text, case-insensitive user name search.
    pub search: Option<String>,
    /// Zero-based page number.
    #[serde(default)]
    pub page: usize,
    /// Rows per page; the configured default applies when absent.
    #[validate(range(min = 1, max = 2000))]
    pub size: Option<usize>,
    #[serde(default)]
    pub sort: Vec<String>,
}

impl MemberSearchForm {
    /// Parses and validates a URL query string such as
    /// `teamName=teamB&ageGoe=35&page=0&size=10&sort=age,desc`.
    pub fn from_query_string(query: &str) -> Result<Self, FormError> {
        let form: Self = serde_html_form::from_str(query.trim_start_matches('?'))
            .map_err(|err| FormError::InvalidQuery(err.to_string()))?;
        form.validate()?;
        Ok(form)
    }

    pub fn condition(&self) -> MemberSearchCondition {
        MemberSearchCondition {
            user_name: self.user_name.clone(),
            team_name: self.team_name.clone(),
            age_goe: self.age_goe,
            age_loe: self.age_loe,
            search: self.search.clone(),
        }
    }

    pub fn sort(&self) -> Sort {
        Sort::parse(&self.sort)
    }

    pub fn page_request(&self, default_size: usize) -> Result<PageRequest, FormError> {
        Ok(PageRequest::new(
            self.page,
            self.size.unwrap_or(default_size),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::{SortField, SortOrder};

    #[test]
    fn parses_filters_paging_and_sort() {
        let form = MemberSearchForm::from_query_string(
            "?teamName=teamB&ageGoe=35&ageLoe=40&page=2&size=5&sort=userName,desc&sort=age",
        )
        .unwrap();

        assert_eq!(
            form.condition(),
            MemberSearchCondition::new()
                .team_name("teamB")
                .age_between(35, 40)
        );
        let request = form.page_request(20).unwrap();
        assert_eq!((request.page(), request.size()), (2, 5));
        assert_eq!(
            form.sort().orders(),
            &[
                SortOrder::desc(SortField::UserName),
                SortOrder::asc(SortField::Age)
            ]
        );
    }

    #[test]
    fn empty_query_uses_defaults() {
        let form = MemberSearchForm::from_query_string("").unwrap();
        assert!(form.condition().predicates().is_empty());
        assert!(form.sort().is_unsorted());
        assert_eq!(form.page_request(20).unwrap(), PageRequest::default());
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            MemberSearchForm::from_query_string("size=0"),
            Err(FormError::Validation(_))
        ));
        let form = MemberSearchForm::default();
        assert!(matches!(
            form.page_request(0),
            Err(FormError::InvalidValue(_))
        ));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert!(matches!(
            MemberSearchForm::from_query_string("ageGoe=old"),
            Err(FormError::InvalidQuery(_))
        ));
    }

    #[test]
    fn negative_age_bounds_are_plain_filters() {
        let form = MemberSearchForm::from_query_string("ageGoe=-5&ageLoe=-1").unwrap();
        assert_eq!(
            form.condition(),
            MemberSearchCondition::new().age_between(-5, -1)
        );
    }
}
