//! Filter expressions for gateway queries.
//!
//! A [`Filter`] captures the only query shapes the core needs: exact-match
//! predicates, an optional descending sort, and an optional projection. The
//! REST store renders it as PostgREST query parameters; in-memory stores can
//! evaluate it directly against JSON records.

use serde_json::Value;

/// A filter expression for a single gateway call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    eq: Vec<(String, String)>,
    select: Option<String>,
    order_desc: Option<String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `column` to equal `value` exactly.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.eq.push((column.into(), value.into()));
        self
    }

    /// Set the column projection (PostgREST `select=` syntax).
    pub fn select(mut self, projection: impl Into<String>) -> Self {
        self.select = Some(projection.into());
        self
    }

    /// Sort results by `column`, descending.
    pub fn order_desc(mut self, column: impl Into<String>) -> Self {
        self.order_desc = Some(column.into());
        self
    }

    /// The equality predicates, in insertion order.
    pub fn eq_pairs(&self) -> &[(String, String)] {
        &self.eq
    }

    /// The descending sort column, if any.
    pub fn order_desc_column(&self) -> Option<&str> {
        self.order_desc.as_deref()
    }

    /// Evaluate the equality predicates against a JSON record.
    ///
    /// Used by in-memory store implementations; the REST store pushes the
    /// same predicates down to the server instead.
    pub fn matches(&self, record: &Value) -> bool {
        self.eq.iter().all(|(column, expected)| {
            match record.get(column) {
                Some(Value::String(s)) => s == expected,
                Some(Value::Number(n)) => n.to_string() == *expected,
                Some(Value::Bool(b)) => b.to_string() == *expected,
                _ => false,
            }
        })
    }

    /// Render as PostgREST query parameters.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .eq
            .iter()
            .map(|(column, value)| (column.clone(), format!("eq.{value}")))
            .collect();
        if let Some(ref projection) = self.select {
            pairs.push(("select".to_string(), projection.clone()));
        }
        if let Some(ref column) = self.order_desc {
            pairs.push(("order".to_string(), format!("{column}.desc")));
        }
        pairs
    }

    /// Render as a literal query string, for logging and tests.
    pub fn to_query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}
