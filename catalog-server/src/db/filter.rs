//! Dynamic filter predicate construction for catalog queries
//!
//! [`QueryBuilder`] accumulates WHERE condition fragments together with their
//! bind values, so placeholder positions and argument order stay aligned by
//! construction. The same builder instance is applied to both the COUNT
//! query and the row-fetch query, which keeps the total count and the
//! returned page describing the same logical result set.

use serde::Deserialize;
use sqlx::{Sqlite, query::Query};

use crate::error::{CatalogError, CatalogResult};

/// Query builder for constructing SQL queries with dynamic WHERE conditions
#[derive(Debug)]
pub struct QueryBuilder {
    conditions: Vec<String>,
    bindings: Vec<BindValue>,
}

#[derive(Debug, Clone)]
pub enum BindValue {
    Text(String),
    Integer(i64),
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
            bindings: Vec::new(),
        }
    }

    /// Add a condition fragment
    pub fn add_condition(&mut self, condition: &str) -> &mut Self {
        self.conditions.push(condition.to_string());
        self
    }

    /// Add a text binding
    pub fn bind_text(&mut self, value: String) -> &mut Self {
        self.bindings.push(BindValue::Text(value));
        self
    }

    /// Add an integer binding
    pub fn bind_i64(&mut self, value: i64) -> &mut Self {
        self.bindings.push(BindValue::Integer(value));
        self
    }

    /// Add an IN condition, one placeholder per value
    pub fn add_in_condition(&mut self, field: &str, values: &[String]) -> &mut Self {
        let placeholders: Vec<&str> = values.iter().map(|_| "?").collect();
        let condition = format!("{} IN ({})", field, placeholders.join(", "));
        self.conditions.push(condition);

        for val in values {
            self.bindings.push(BindValue::Text(val.clone()));
        }

        self
    }

    /// Build WHERE clause (empty if no conditions)
    pub fn build_where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    #[cfg(test)]
    fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Apply bindings to a SQLx query
    pub fn apply_bindings<'a, 'b>(
        &'b self,
        mut query: Query<'a, Sqlite, <Sqlite as sqlx::Database>::Arguments<'a>>,
    ) -> Query<'a, Sqlite, <Sqlite as sqlx::Database>::Arguments<'a>>
    where
        'b: 'a,
    {
        for binding in &self.bindings {
            query = match binding {
                BindValue::Text(s) => query.bind(s),
                BindValue::Integer(i) => query.bind(*i),
            };
        }
        query
    }

    /// Apply bindings to a SQLx query_as
    pub fn apply_bindings_as<'a, 'b, O>(
        &'b self,
        mut query: sqlx::query::QueryAs<'a, Sqlite, O, <Sqlite as sqlx::Database>::Arguments<'a>>,
    ) -> sqlx::query::QueryAs<'a, Sqlite, O, <Sqlite as sqlx::Database>::Arguments<'a>>
    where
        'b: 'a,
    {
        for binding in &self.bindings {
            query = match binding {
                BindValue::Text(s) => query.bind(s),
                BindValue::Integer(i) => query.bind(*i),
            };
        }
        query
    }

    /// Apply bindings to a SQLx query_scalar
    pub fn apply_bindings_scalar<'a, 'b, O>(
        &'b self,
        mut query: sqlx::query::QueryScalar<'a, Sqlite, O, <Sqlite as sqlx::Database>::Arguments<'a>>,
    ) -> sqlx::query::QueryScalar<'a, Sqlite, O, <Sqlite as sqlx::Database>::Arguments<'a>>
    where
        O: Send + Unpin,
        'b: 'a,
    {
        for binding in &self.bindings {
            query = match binding {
                BindValue::Text(s) => query.bind(s),
                BindValue::Integer(i) => query.bind(*i),
            };
        }
        query
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Default page size when `pageSize` is absent or unparsable
pub const DEFAULT_PAGE_SIZE: i64 = 20;
/// Upper bound on page size to keep result sets bounded
pub const MAX_PAGE_SIZE: i64 = 200;

/// Resolved pagination window, offset is always >= 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub limit: i64,
    pub offset: i64,
}

impl PageParams {
    /// Resolve raw 1-based page / page-size strings into LIMIT/OFFSET
    ///
    /// Non-numeric or non-positive values coerce to page 1 and the default
    /// page size rather than producing a negative offset.
    pub fn from_raw(page: Option<&str>, page_size: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);
        let limit = page_size
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|s| *s >= 1)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);

        Self {
            limit,
            // saturate: a huge page number must not wrap to a negative offset
            offset: (page - 1).saturating_mul(limit),
        }
    }
}

/// Optional, independently-combinable filter criteria for product queries
///
/// All fields arrive as raw strings from the HTTP layer (the original wire
/// format uses camelCase parameter names). Absent or empty fields impose no
/// constraint; present fields are ANDed together, except the comma-separated
/// manufacturer values which are ORed among themselves.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilter {
    pub category: Option<String>,
    /// One or more manufacturer names, comma-separated, matched exactly
    pub manufacturer: Option<String>,
    pub store: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<String>,
    /// Inclusive upper price bound
    pub max_price: Option<String>,
    /// Case-insensitive substring match
    pub title: Option<String>,
    /// 1-based page number
    pub page: Option<String>,
    pub page_size: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Parse a price bound, surfacing unparsable values as a query error
/// naming the offending field.
fn parse_price(field: &'static str, raw: &str) -> CatalogResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| CatalogError::Query {
        field,
        value: raw.to_string(),
    })
}

impl ProductFilter {
    /// Build the predicate once; callers apply it to both the count and the
    /// fetch query.
    pub fn predicate(&self) -> CatalogResult<QueryBuilder> {
        let mut builder = QueryBuilder::new();

        if let Some(category) = non_empty(&self.category) {
            builder.add_condition("category = ?").bind_text(category.to_string());
        }
        if let Some(manufacturer) = non_empty(&self.manufacturer) {
            // Names are trimmed but otherwise taken literally, including
            // empty or unknown ones.
            let names: Vec<String> = manufacturer
                .split(',')
                .map(|name| name.trim().to_string())
                .collect();
            builder.add_in_condition("manufacturer", &names);
        }
        if let Some(store) = non_empty(&self.store) {
            builder.add_condition("store = ?").bind_text(store.to_string());
        }
        if let Some(min_price) = non_empty(&self.min_price) {
            builder
                .add_condition("price >= ?")
                .bind_i64(parse_price("minPrice", min_price)?);
        }
        if let Some(max_price) = non_empty(&self.max_price) {
            builder
                .add_condition("price <= ?")
                .bind_i64(parse_price("maxPrice", max_price)?);
        }
        if let Some(title) = non_empty(&self.title) {
            // SQLite LIKE is case-insensitive for ASCII, matching ILIKE
            builder
                .add_condition("title LIKE ?")
                .bind_text(format!("%{title}%"));
        }

        Ok(builder)
    }

    /// Resolve the pagination window for this filter
    pub fn page_params(&self) -> PageParams {
        PageParams::from_raw(self.page.as_deref(), self.page_size.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(f: impl FnOnce(&mut ProductFilter)) -> ProductFilter {
        let mut filter = ProductFilter::default();
        f(&mut filter);
        filter
    }

    #[test]
    fn test_empty_where_clause() {
        let builder = ProductFilter::default().predicate().unwrap();
        assert_eq!(builder.build_where_clause(), "");
        assert_eq!(builder.binding_count(), 0);
    }

    #[test]
    fn test_single_condition() {
        let builder = filter(|f| f.category = Some("cpu".into()))
            .predicate()
            .unwrap();
        assert_eq!(builder.build_where_clause(), " WHERE category = ?");
        assert_eq!(builder.binding_count(), 1);
    }

    #[test]
    fn test_empty_fields_impose_no_constraint() {
        let builder = filter(|f| {
            f.category = Some(String::new());
            f.store = Some(String::new());
            f.title = Some(String::new());
        })
        .predicate()
        .unwrap();
        assert_eq!(builder.build_where_clause(), "");
    }

    #[test]
    fn test_conditions_are_conjunctive() {
        let builder = filter(|f| {
            f.category = Some("gpu".into());
            f.store = Some("TechStore".into());
            f.min_price = Some("100".into());
        })
        .predicate()
        .unwrap();
        assert_eq!(
            builder.build_where_clause(),
            " WHERE category = ? AND store = ? AND price >= ?"
        );
        assert_eq!(builder.binding_count(), 3);
    }

    #[test]
    fn test_manufacturer_in_condition_trims_names() {
        let builder = filter(|f| f.manufacturer = Some("Intel, AMD".into()))
            .predicate()
            .unwrap();
        assert_eq!(builder.build_where_clause(), " WHERE manufacturer IN (?, ?)");
        assert_eq!(builder.binding_count(), 2);
    }

    #[test]
    fn test_manufacturer_keeps_empty_names_literally() {
        let builder = filter(|f| f.manufacturer = Some("Intel,,AMD".into()))
            .predicate()
            .unwrap();
        assert_eq!(
            builder.build_where_clause(),
            " WHERE manufacturer IN (?, ?, ?)"
        );
        assert_eq!(builder.binding_count(), 3);
    }

    #[test]
    fn test_title_wildcard_binding() {
        let builder = filter(|f| f.title = Some("ryzen".into())).predicate().unwrap();
        assert_eq!(builder.build_where_clause(), " WHERE title LIKE ?");
        assert_eq!(builder.binding_count(), 1);
    }

    #[test]
    fn test_non_numeric_price_is_a_query_error() {
        let err = filter(|f| f.min_price = Some("cheap".into()))
            .predicate()
            .unwrap_err();
        match err {
            CatalogError::Query { field, value } => {
                assert_eq!(field, "minPrice");
                assert_eq!(value, "cheap");
            }
            other => panic!("expected query error, got {other:?}"),
        }
    }

    #[test]
    fn test_page_defaults() {
        assert_eq!(
            PageParams::from_raw(None, None),
            PageParams { limit: 20, offset: 0 }
        );
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(
            PageParams::from_raw(Some("2"), Some("10")),
            PageParams { limit: 10, offset: 10 }
        );
        assert_eq!(
            PageParams::from_raw(Some("3"), Some("25")),
            PageParams { limit: 25, offset: 50 }
        );
    }

    #[test]
    fn test_page_coercion() {
        // non-positive and non-numeric inputs coerce, never a negative offset
        assert_eq!(
            PageParams::from_raw(Some("0"), Some("-5")),
            PageParams { limit: 20, offset: 0 }
        );
        assert_eq!(
            PageParams::from_raw(Some("abc"), Some("xyz")),
            PageParams { limit: 20, offset: 0 }
        );
    }

    #[test]
    fn test_huge_page_number_saturates() {
        let params = PageParams::from_raw(Some("9223372036854775807"), Some("200"));
        assert_eq!(params.limit, 200);
        assert!(params.offset >= 0);
    }

    #[test]
    fn test_page_size_cap() {
        let params = PageParams::from_raw(Some("1"), Some("10000"));
        assert_eq!(params.limit, MAX_PAGE_SIZE);
    }
}
