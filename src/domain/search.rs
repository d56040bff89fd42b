//! Search conditions, filter predicates and sort specifications for members.
//!
//! A [`MemberSearchCondition`] is a bag of independently optional filters. It
//! is turned into a flat list of [`MemberPredicate`]s, absent filters simply
//! produce no predicate, and the repository AND-s whatever remains. The same
//! predicates can be evaluated in memory against a `(Member, Option<Team>)`
//! row, which keeps the storage and in-memory semantics side by side.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::member::Member;
use crate::domain::team::Team;

/// Optional filters applied to a member search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchCondition {
    /// Exact, case-sensitive user name.
    pub user_name: Option<String>,
    /// Exact, case-sensitive team name.
    pub team_name: Option<String>,
    /// Inclusive lower age bound.
    pub age_goe: Option<i32>,
    /// Inclusive upper age bound.
    pub age_loe: Option<i32>,
    /// Case-insensitive substring matched against the user name.
    pub search: Option<String>,
}

impl MemberSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Closed age range; `loe < goe` is allowed and matches nothing.
    pub fn age_between(self, goe: i32, loe: i32) -> Self {
        self.age_goe(goe).age_loe(loe)
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Returns one predicate per present filter.
    ///
    /// Blank strings count as absent. An empty result means "match all".
    pub fn predicates(&self) -> Vec<MemberPredicate> {
        [
            has_text(self.user_name.as_deref()).map(MemberPredicate::UserNameEq),
            has_text(self.team_name.as_deref()).map(MemberPredicate::TeamNameEq),
            self.age_goe.map(MemberPredicate::AgeGoe),
            self.age_loe.map(MemberPredicate::AgeLoe),
            has_text(self.search.as_deref())
                .map(MemberPredicate::UserNameContains),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Evaluates the whole condition against a joined row.
    pub fn matches(&self, member: &Member, team: Option<&Team>) -> bool {
        self.predicates()
            .iter()
            .all(|predicate| predicate.matches(member, team))
    }
}

fn has_text(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

/// A single constraint over the member/team relation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemberPredicate {
    UserNameEq(String),
    /// Never matches a member without a team.
    TeamNameEq(String),
    AgeGoe(i32),
    AgeLoe(i32),
    UserNameContains(String),
}

impl MemberPredicate {
    pub fn matches(&self, member: &Member, team: Option<&Team>) -> bool {
        match self {
            MemberPredicate::UserNameEq(name) => member.user_name.as_deref() == Some(name.as_str()),
            MemberPredicate::TeamNameEq(name) => team.is_some_and(|team| team.name.as_str() == name),
            MemberPredicate::AgeGoe(age) => member.age >= *age,
            MemberPredicate::AgeLoe(age) => member.age <= *age,
            MemberPredicate::UserNameContains(term) => {
                let term = term.to_lowercase();
                member
                    .user_name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&term))
            }
        }
    }
}

/// Columns a search may be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortField {
    MemberId,
    UserName,
    Age,
    TeamName,
}

impl SortField {
    /// Resolves a caller-facing property name; unknown names yield `None`.
    pub fn from_property(property: &str) -> Option<Self> {
        match property.trim() {
            "memberId" | "id" => Some(SortField::MemberId),
            "userName" => Some(SortField::UserName),
            "age" => Some(SortField::Age),
            "teamName" => Some(SortField::TeamName),
            _ => None,
        }
    }

    pub fn property(self) -> &'static str {
        match self {
            SortField::MemberId => "memberId",
            SortField::UserName => "userName",
            SortField::Age => "age",
            SortField::TeamName => "teamName",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_str_opt(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("asc") {
            Some(SortDirection::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Parses `property` or `property,direction`.
    ///
    /// Returns `None` for unknown properties or directions.
    pub fn parse(key: &str) -> Option<Self> {
        let mut parts = key.splitn(2, ',');
        let field = SortField::from_property(parts.next()?)?;
        let direction = match parts.next() {
            Some(direction) => SortDirection::from_str_opt(direction)?,
            None => SortDirection::Asc,
        };
        Some(Self { field, direction })
    }

    /// Compares two joined rows by this key. Missing values sort first.
    pub fn compare(
        &self,
        left: (&Member, Option<&Team>),
        right: (&Member, Option<&Team>),
    ) -> Ordering {
        let ordering = match self.field {
            SortField::MemberId => left.0.id.cmp(&right.0.id),
            SortField::UserName => left.0.user_name.cmp(&right.0.user_name),
            SortField::Age => left.0.age.cmp(&right.0.age),
            SortField::TeamName => left
                .1
                .map(|team| &team.name)
                .cmp(&right.1.map(|team| &team.name)),
        };
        self.direction.apply(ordering)
    }
}

/// Ordered list of sort keys requested by a caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sort {
    orders: Vec<SortOrder>,
}

impl Sort {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(order: SortOrder) -> Self {
        Self::unsorted().and(order)
    }

    /// Appends a key unless the same field is already present.
    pub fn and(mut self, order: SortOrder) -> Self {
        if !self.orders.iter().any(|o| o.field == order.field) {
            self.orders.push(order);
        }
        self
    }

    /// Builds a sort from `property,direction` strings, skipping unknown ones.
    pub fn parse<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys
            .into_iter()
            .filter_map(|key| SortOrder::parse(key.as_ref()))
            .fold(Self::unsorted(), Self::and)
    }

    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn orders(&self) -> &[SortOrder] {
        &self.orders
    }

    /// The effective ordering applied to a query.
    ///
    /// Without recognized keys this is `memberId DESC`. Otherwise the
    /// requested keys followed by `memberId ASC` when the id is not already
    /// one of them.
    pub fn resolve(&self) -> Vec<SortOrder> {
        if self.orders.is_empty() {
            return vec![SortOrder::desc(SortField::MemberId)];
        }
        let mut orders = self.orders.clone();
        if !orders.iter().any(|o| o.field == SortField::MemberId) {
            orders.push(SortOrder::asc(SortField::MemberId));
        }
        orders
    }

    /// Compares two joined rows using [`Sort::resolve`].
    pub fn compare(
        &self,
        left: (&Member, Option<&Team>),
        right: (&Member, Option<&Team>),
    ) -> Ordering {
        self.resolve()
            .iter()
            .map(|order| order.compare(left, right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}
