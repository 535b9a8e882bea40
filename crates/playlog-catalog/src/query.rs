//! Apicalypse query builder.
//!
//! ```
//! use playlog_catalog::CatalogQuery;
//!
//! let q = CatalogQuery::new()
//!     .fields(["name", "rating"])
//!     .condition("rating != null")
//!     .sort("rating desc")
//!     .limit(5);
//! assert_eq!(
//!     q.build(),
//!     "fields name,rating; where rating != null; sort rating desc; limit 5; offset 0;"
//! );
//! ```

/// Default number of results when none is requested.
pub const DEFAULT_LIMIT: u32 = 10;

/// Request body for a catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    fields: Vec<String>,
    conditions: Vec<String>,
    sort: Option<String>,
    limit: u32,
    offset: u32,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            fields: vec!["*".to_string()],
            conditions: Vec::new(),
            sort: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl CatalogQuery {
    /// `fields *; limit 10; offset 0;`
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the requested fields.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        if self.fields.is_empty() {
            self.fields.push("*".to_string());
        }
        self
    }

    /// Add a `where` condition. Conditions are combined with `&`.
    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        let sort = sort.into();
        self.sort = (!sort.trim().is_empty()).then_some(sort);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Render the query text.
    pub fn build(&self) -> String {
        let mut parts = vec![format!("fields {};", self.fields.join(","))];
        if !self.conditions.is_empty() {
            parts.push(format!("where {};", self.conditions.join(" & ")));
        }
        if let Some(sort) = &self.sort {
            parts.push(format!("sort {sort};"));
        }
        parts.push(format!("limit {};", self.limit));
        parts.push(format!("offset {};", self.offset));
        parts.join(" ")
    }
}

/// Quote a user-supplied string for use inside a condition.
pub fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
