//! Fluent query construction for list endpoints.
//!
//! [`QueryBuilder`] accumulates filter, sort, and pagination clauses and
//! freezes them into a [`Query`] with [`build`](QueryBuilder::build). The
//! builder is deterministic: identical call sequences always produce
//! identical wire parameters, with no clock or random dependence. Parameters
//! keep insertion order and keys are unique (last write wins).
//!
//! Invalid values (a `per_page` outside `1..=100`, a page number of 0) are
//! recorded as the builder is used and surfaced as
//! [`Error::InvalidQuery`] when `build()` is called.
//!
//! # Example
//!
//! ```rust
//! use wordpress_api::{QueryBuilder, Order, PostStatus};
//!
//! let query = QueryBuilder::new()
//!     .per_page(10)
//!     .status([PostStatus::Publish])
//!     .order_by("date", Order::Desc)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     query.params(),
//!     &[
//!         ("per_page".to_string(), "10".to_string()),
//!         ("status".to_string(), "publish".to_string()),
//!         ("orderby".to_string(), "date".to_string()),
//!         ("order".to_string(), "desc".to_string()),
//!     ]
//! );
//! ```

use chrono::{DateTime, Utc};

use crate::error::Error;
use crate::resources::{Context, PostStatus};

/// Maximum `per_page` value accepted by the WordPress REST API.
pub const MAX_PER_PAGE: u32 = 100;

/// Sort direction for [`QueryBuilder::order_by`].
///
/// Defaults to ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl Order {
    /// Returns the wire value (`asc` or `desc`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A frozen, immutable set of wire query parameters.
///
/// Produced by [`QueryBuilder::build`]; no clause can be added afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    /// Returns an empty query.
    #[must_use]
    pub const fn none() -> Self {
        Self { params: Vec::new() }
    }

    /// Returns the ordered wire parameters.
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Fluent builder for [`Query`] values.
///
/// Every method consumes and returns the builder; nothing is shared, so a
/// builder can be assembled across helper functions without side effects.
#[derive(Clone, Debug, Default)]
pub struct QueryBuilder {
    params: Vec<(String, String)>,
    invalid: Option<String>,
}

impl QueryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number (1-based).
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        if page == 0 {
            return self.mark_invalid("page must be at least 1");
        }
        self.set("page", page.to_string());
        self
    }

    /// Sets the number of items per page (`1..=100`).
    #[must_use]
    pub fn per_page(mut self, count: u32) -> Self {
        if count == 0 || count > MAX_PER_PAGE {
            return self.mark_invalid(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}, got {count}"
            ));
        }
        self.set("per_page", count.to_string());
        self
    }

    /// Sets the result offset.
    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.set("offset", offset.to_string());
        self
    }

    /// Sets a full-text search term.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.set("search", term.into());
        self
    }

    /// Sets the sort field and direction.
    ///
    /// Common fields: `date`, `id`, `title`, `slug`, `author`, `modified`.
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, order: Order) -> Self {
        self.set("orderby", field.into());
        self.set("order", order.as_str().to_string());
        self
    }

    /// Sets the response context (view, embed, or edit).
    #[must_use]
    pub fn context(mut self, context: Context) -> Self {
        self.set("context", context.as_str().to_string());
        self
    }

    /// Filters by publication status.
    #[must_use]
    pub fn status(mut self, statuses: impl IntoIterator<Item = PostStatus>) -> Self {
        let joined = statuses
            .into_iter()
            .map(|s| s.as_str().to_string())
            .collect::<Vec<_>>()
            .join(",");
        if !joined.is_empty() {
            self.set("status", joined);
        }
        self
    }

    /// Filters by author IDs.
    #[must_use]
    pub fn author(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.set_ids("author", ids);
        self
    }

    /// Excludes the given author IDs.
    #[must_use]
    pub fn author_exclude(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.set_ids("author_exclude", ids);
        self
    }

    /// Filters by category membership.
    #[must_use]
    pub fn categories(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.set_ids("categories", ids);
        self
    }

    /// Excludes the given categories.
    #[must_use]
    pub fn categories_exclude(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.set_ids("categories_exclude", ids);
        self
    }

    /// Filters by tag membership.
    #[must_use]
    pub fn tags(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.set_ids("tags", ids);
        self
    }

    /// Excludes the given tags.
    #[must_use]
    pub fn tags_exclude(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.set_ids("tags_exclude", ids);
        self
    }

    /// Restricts results to the given IDs.
    #[must_use]
    pub fn include(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.set_ids("include", ids);
        self
    }

    /// Excludes the given IDs.
    #[must_use]
    pub fn exclude(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.set_ids("exclude", ids);
        self
    }

    /// Filters by slug.
    #[must_use]
    pub fn slug(mut self, slugs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let joined = slugs
            .into_iter()
            .map(Into::into)
            .collect::<Vec<_>>()
            .join(",");
        if !joined.is_empty() {
            self.set("slug", joined);
        }
        self
    }

    /// Restricts results to sticky (or non-sticky) posts.
    #[must_use]
    pub fn sticky(mut self, sticky: bool) -> Self {
        self.set("sticky", sticky.to_string());
        self
    }

    /// Returns items published after the given instant.
    #[must_use]
    pub fn after(mut self, date: DateTime<Utc>) -> Self {
        self.set("after", date.to_rfc3339());
        self
    }

    /// Returns items published before the given instant.
    #[must_use]
    pub fn before(mut self, date: DateTime<Utc>) -> Self {
        self.set("before", date.to_rfc3339());
        self
    }

    /// Returns items modified after the given instant.
    #[must_use]
    pub fn modified_after(mut self, date: DateTime<Utc>) -> Self {
        self.set("modified_after", date.to_rfc3339());
        self
    }

    /// Returns items modified before the given instant.
    #[must_use]
    pub fn modified_before(mut self, date: DateTime<Utc>) -> Self {
        self.set("modified_before", date.to_rfc3339());
        self
    }

    /// Filters by parent IDs (pages, categories, comments).
    #[must_use]
    pub fn parent(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.set_ids("parent", ids);
        self
    }

    /// Excludes the given parent IDs.
    #[must_use]
    pub fn parent_exclude(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.set_ids("parent_exclude", ids);
        self
    }

    /// Hides terms with no attached content (categories, tags).
    #[must_use]
    pub fn hide_empty(mut self, hide: bool) -> Self {
        self.set("hide_empty", hide.to_string());
        self
    }

    /// Sets a raw parameter for endpoints or plugins this builder does not
    /// model.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key.into(), value.into());
        self
    }

    /// Freezes the builder into an immutable [`Query`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuery`] if any clause was given an invalid
    /// value (the first offending clause is reported).
    pub fn build(self) -> Result<Query, Error> {
        match self.invalid {
            Some(message) => Err(Error::InvalidQuery { message }),
            None => Ok(Query {
                params: self.params,
            }),
        }
    }

    fn set(&mut self, key: impl Into<String>, value: String) {
        let key = key.into();
        self.params.retain(|(existing, _)| *existing != key);
        self.params.push((key, value));
    }

    fn set_ids(&mut self, key: &'static str, ids: impl IntoIterator<Item = u64>) {
        let joined = ids
            .into_iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        if !joined.is_empty() {
            self.set(key, joined);
        }
    }

    fn mark_invalid(mut self, message: impl Into<String>) -> Self {
        if self.invalid.is_none() {
            self.invalid = Some(message.into());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_build_is_deterministic() {
        let build = || {
            QueryBuilder::new()
                .per_page(20)
                .status([PostStatus::Publish, PostStatus::Draft])
                .categories([3, 7])
                .order_by("title", Order::Asc)
                .build()
                .unwrap()
        };

        assert_eq!(build(), build());
    }

    #[test]
    fn test_documented_wire_mapping() {
        let query = QueryBuilder::new()
            .per_page(10)
            .status([PostStatus::Publish])
            .order_by("date", Order::Desc)
            .build()
            .unwrap();

        assert_eq!(
            query.params(),
            &[
                ("per_page".to_string(), "10".to_string()),
                ("status".to_string(), "publish".to_string()),
                ("orderby".to_string(), "date".to_string()),
                ("order".to_string(), "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_per_page_bounds() {
        assert!(matches!(
            QueryBuilder::new().per_page(0).build(),
            Err(Error::InvalidQuery { .. })
        ));
        assert!(matches!(
            QueryBuilder::new().per_page(101).build(),
            Err(Error::InvalidQuery { .. })
        ));
        assert!(QueryBuilder::new().per_page(100).build().is_ok());
    }

    #[test]
    fn test_page_must_be_positive() {
        assert!(matches!(
            QueryBuilder::new().page(0).build(),
            Err(Error::InvalidQuery { .. })
        ));
    }

    #[test]
    fn test_first_invalid_clause_is_reported() {
        let result = QueryBuilder::new().per_page(0).page(0).build();
        match result {
            Err(Error::InvalidQuery { message }) => {
                assert!(message.contains("per_page"));
            }
            other => panic!("expected InvalidQuery, got {other:?}"),
        }
    }

    #[test]
    fn test_last_write_wins_keeps_keys_unique() {
        let query = QueryBuilder::new()
            .per_page(10)
            .per_page(25)
            .build()
            .unwrap();

        assert_eq!(
            query.params(),
            &[("per_page".to_string(), "25".to_string())]
        );
    }

    #[test]
    fn test_id_lists_join_comma_separated() {
        let query = QueryBuilder::new()
            .categories([1, 2, 3])
            .tags_exclude([9])
            .build()
            .unwrap();

        assert_eq!(
            query.params(),
            &[
                ("categories".to_string(), "1,2,3".to_string()),
                ("tags_exclude".to_string(), "9".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_id_list_adds_nothing() {
        let query = QueryBuilder::new().categories([]).build().unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_date_clauses_use_rfc3339() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let query = QueryBuilder::new().after(date).build().unwrap();

        assert_eq!(query.params()[0].0, "after");
        assert!(query.params()[0].1.starts_with("2024-05-01T12:00:00"));
    }

    #[test]
    fn test_context_and_raw_params() {
        let query = QueryBuilder::new()
            .context(Context::Edit)
            .param("password", "hunter2")
            .build()
            .unwrap();

        assert_eq!(
            query.params(),
            &[
                ("context".to_string(), "edit".to_string()),
                ("password".to_string(), "hunter2".to_string()),
            ]
        );
    }
}
