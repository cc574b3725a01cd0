//! PostgREST query-string construction.
//!
//! Filters use PostgREST operator syntax (`column=eq.value`), ordering uses
//! `order=column.asc|desc`. Only the handful of shapes the console issues
//! are supported.

use std::fmt;

/// Sort direction for `order=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A request against one table: optional projection, equality filters,
/// ordering, and limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    table: &'static str,
    select: Option<&'static str>,
    filters: Vec<(&'static str, String)>,
    order: Option<(&'static str, Order)>,
    limit: Option<u32>,
}

impl TableQuery {
    /// Start a `SELECT *` query.
    #[must_use]
    pub fn select(table: &'static str) -> Self {
        Self { table, select: Some("*"), filters: Vec::new(), order: None, limit: None }
    }

    /// Start a filter-only query (update / delete targets).
    #[must_use]
    pub fn on(table: &'static str) -> Self {
        Self { table, select: None, filters: Vec::new(), order: None, limit: None }
    }

    #[must_use]
    pub fn eq(mut self, column: &'static str, value: impl fmt::Display) -> Self {
        self.filters.push((column, format!("eq.{value}")));
        self
    }

    #[must_use]
    pub fn order(mut self, column: &'static str, order: Order) -> Self {
        self.order = Some((column, order));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Query-string pairs in a stable order: `select`, filters, `order`, `limit`.
    #[must_use]
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.filters.len() + 3);
        if let Some(select) = self.select {
            out.push(("select".to_owned(), select.to_owned()));
        }
        for (column, filter) in &self.filters {
            out.push(((*column).to_owned(), filter.clone()));
        }
        if let Some((column, order)) = self.order {
            out.push(("order".to_owned(), format!("{column}.{}", order.as_str())));
        }
        if let Some(limit) = self.limit {
            out.push(("limit".to_owned(), limit.to_string()));
        }
        out
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
