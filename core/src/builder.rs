//! Fluent `QueryBuilder`: one resource name, one document.

use serde_json::Value;
use strapi_query_types::{FilterOperator, LogicalOperator, Sort, SortDirection, Status};

use crate::document::{Pagination, Populate, PopulateEntry, QueryDocument};
use crate::error::Result;
use crate::filters::Filters;
use crate::qs::{self, StringifyOptions};

/// Builds the query parameters for one REST resource.
///
/// Every method takes the builder by value and hands it back, so calls chain:
///
/// ```
/// use strapi_query_core::QueryBuilder;
/// use strapi_query_core::types::SortDirection;
///
/// let books = QueryBuilder::new("books")
///     .r#where("title.$containsi", "rust")
///     .sort_by("publishedAt", SortDirection::Desc)
///     .page_size(10);
///
/// assert_eq!(
///     books.to_resource_url(),
///     "books?sort[0]=publishedAt%3Adesc&filters[title][$containsi]=rust&pagination[pageSize]=10"
/// );
/// ```
///
/// Nothing is validated: unknown operators and odd paths end up as literal
/// keys in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder {
    resource: String,
    document: QueryDocument,
}

impl QueryBuilder {
    /// Creates an empty builder for `resource`.
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            document: QueryDocument::new(),
        }
    }

    pub fn resource_name(&self) -> &str {
        &self.resource
    }

    fn filters(&mut self) -> &mut Filters {
        self.document.filters.get_or_insert_with(Filters::new)
    }

    fn pagination(&mut self) -> &mut Pagination {
        self.document.pagination.get_or_insert_with(Pagination::default)
    }

    // =========================================================================
    // Filters
    // =========================================================================

    /// Shallow-merges a filter object into `filters`; colliding top-level keys
    /// are replaced.
    pub fn filter(mut self, filters: impl Into<Filters>) -> Self {
        crate::query_trace_op!(self.resource, "filter");
        let filters = filters.into();
        self.filters().merge(filters);
        self
    }

    /// Sets `value` at a dotted path such as `"author.name.$eq"`.
    ///
    /// Intermediate mappings are created as needed; other branches of the
    /// filter tree are left alone.
    pub fn r#where(mut self, path: impl AsRef<str>, value: impl Into<Value>) -> Self {
        let path = path.as_ref();
        crate::query_trace_op!(self.resource, "where", path);
        self.filters().set_path(path, value.into());
        self
    }

    /// [`r#where`](Self::r#where) with a typed operator:
    /// `where_op("title", FilterOperator::Eq, "x")` sets `title.$eq`.
    pub fn where_op(
        self,
        field: impl AsRef<str>,
        operator: FilterOperator,
        value: impl Into<Value>,
    ) -> Self {
        let path = operator.path(field.as_ref());
        self.r#where(path, value)
    }

    /// Builds a filter tree with a separate builder named `path` and sets it
    /// at `path`.
    ///
    /// ```
    /// use serde_json::json;
    /// use strapi_query_core::QueryBuilder;
    ///
    /// let q = QueryBuilder::new("books").where_nested("author", |author| {
    ///     author.r#where("name.$eq", "Kai").r#where("age.$gt", 30)
    /// });
    /// assert_eq!(
    ///     q.document().to_value(),
    ///     json!({ "filters": { "author": { "name": { "$eq": "Kai" }, "age": { "$gt": 30 } } } })
    /// );
    /// ```
    pub fn where_nested<F>(mut self, path: impl AsRef<str>, f: F) -> Self
    where
        F: FnOnce(QueryBuilder) -> QueryBuilder,
    {
        let path = path.as_ref();
        crate::query_trace_op!(self.resource, "where_nested", path);
        let nested = f(QueryBuilder::new(path)).build().filters.unwrap_or_default();
        self.filters().set_path(path, nested.into());
        self
    }

    /// Appends filter trees to `$and`.
    pub fn and<I>(self, trees: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.logical(LogicalOperator::And, trees)
    }

    /// Appends filter trees to `$or`.
    pub fn or<I>(self, trees: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.logical(LogicalOperator::Or, trees)
    }

    /// Appends filter trees to `$not`.
    pub fn not<I>(self, trees: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.logical(LogicalOperator::Not, trees)
    }

    fn logical<I>(mut self, op: LogicalOperator, trees: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        crate::query_trace_op!(self.resource, "logical", op);
        self.filters()
            .push_logical(op, trees.into_iter().map(Into::into));
        self
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Appends an ascending sort on `field`. A field that already ends in
    /// `:asc` or `:desc` is kept as given.
    pub fn sort(self, field: impl AsRef<str>) -> Self {
        self.sort_by(field, SortDirection::Asc)
    }

    /// Appends `field:direction` to the sort list. A field that already ends
    /// in `:asc` or `:desc` is kept as given.
    pub fn sort_by(mut self, field: impl AsRef<str>, direction: SortDirection) -> Self {
        let entry = Sort::render(field.as_ref(), direction).into_owned();
        crate::query_trace_op!(self.resource, "sort", entry);
        self.document.sort.get_or_insert_with(Vec::new).push(entry);
        self
    }

    pub fn asc(self, field: impl AsRef<str>) -> Self {
        self.sort_by(field, SortDirection::Asc)
    }

    pub fn desc(self, field: impl AsRef<str>) -> Self {
        self.sort_by(field, SortDirection::Desc)
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    pub fn page(mut self, page: u32) -> Self {
        crate::query_trace_op!(self.resource, "page");
        self.pagination().page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        crate::query_trace_op!(self.resource, "page_size");
        self.pagination().page_size = Some(page_size);
        self
    }

    /// Asks the server to include (or omit) the total count in the response.
    /// Pass `true` to request the count, `false` to skip it; nothing is sent
    /// until this is called.
    pub fn with_count(mut self, with_count: bool) -> Self {
        crate::query_trace_op!(self.resource, "with_count");
        self.pagination().with_count = Some(with_count);
        self
    }

    pub fn start(mut self, start: u32) -> Self {
        crate::query_trace_op!(self.resource, "start");
        self.pagination().start = Some(start);
        self
    }

    /// Sets the offset-pagination limit; `-1` returns every entry.
    pub fn limit(mut self, limit: i32) -> Self {
        crate::query_trace_op!(self.resource, "limit");
        self.pagination().limit = Some(limit);
        self
    }

    // =========================================================================
    // Status, locale and fields
    // =========================================================================

    pub fn status(mut self, status: Status) -> Self {
        crate::query_trace_op!(self.resource, "status", status);
        self.document.status = Some(status);
        self
    }

    pub fn drafts(self) -> Self {
        self.status(Status::Draft)
    }

    pub fn published(self) -> Self {
        self.status(Status::Published)
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        crate::query_trace_op!(self.resource, "locale");
        self.document.locale = Some(locale.into());
        self
    }

    /// Replaces the selected field list.
    pub fn fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        crate::query_trace_op!(self.resource, "fields");
        self.document.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Alias of [`fields`](Self::fields).
    pub fn select<I>(self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.fields(fields)
    }

    // =========================================================================
    // Population
    // =========================================================================

    /// Replaces `populate` with a plain list of relation paths.
    pub fn populate<I>(mut self, relations: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        crate::query_trace_op!(self.resource, "populate");
        self.document.populate = Some(Populate::Relations(
            relations.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Sets a raw sub-query for `relation`.
    ///
    /// A relation list set earlier is converted to mapping form with its
    /// entries kept. An existing entry for `relation` is replaced.
    pub fn populate_relation(mut self, relation: impl Into<String>, document: QueryDocument) -> Self {
        let relation = relation.into();
        crate::query_trace_op!(self.resource, "populate_relation", relation);
        self.document
            .insert_populate(relation, PopulateEntry::Query(document));
        self
    }

    /// Builds the sub-query for `relation` with a separate builder named
    /// `relation`. Nests to any depth.
    ///
    /// ```
    /// use serde_json::json;
    /// use strapi_query_core::QueryBuilder;
    ///
    /// let q = QueryBuilder::new("books").populate_nested("user", |user| {
    ///     user.fields(["name"])
    ///         .populate_nested("friends", |friends| friends.r#where("name.$eq", "Jane"))
    /// });
    /// assert_eq!(
    ///     q.document().to_value(),
    ///     json!({
    ///         "populate": {
    ///             "user": {
    ///                 "populate": { "friends": { "filters": { "name": { "$eq": "Jane" } } } },
    ///                 "fields": ["name"]
    ///             }
    ///         }
    ///     })
    /// );
    /// ```
    pub fn populate_nested<F>(self, relation: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(QueryBuilder) -> QueryBuilder,
    {
        let relation = relation.into();
        let document = f(QueryBuilder::new(relation.as_str())).build();
        self.populate_relation(relation, document)
    }

    /// Installs another builder's document under that builder's resource
    /// name.
    pub fn populate_query(self, query: QueryBuilder) -> Self {
        let QueryBuilder { resource, document } = query;
        self.populate_relation(resource, document)
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Encodes the document as a query string; empty when nothing is set.
    pub fn to_query_string(&self) -> String {
        self.to_query_string_with(&StringifyOptions::default())
    }

    pub fn to_query_string_with(&self, options: &StringifyOptions) -> String {
        let encoded = qs::stringify_with(&self.document.to_value(), options);
        crate::query_trace_encode!(self.resource, encoded.len());
        encoded
    }

    /// `"{resource}?{query string}"`
    pub fn to_resource_url(&self) -> String {
        format!("{}?{}", self.resource, self.to_query_string())
    }

    /// Pretty-printed JSON of the document.
    pub fn to_json(&self) -> Result<String> {
        self.document.to_json()
    }

    /// The live document. Later builder calls are visible through it.
    pub fn document(&self) -> &QueryDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut QueryDocument {
        &mut self.document
    }

    /// Consumes the builder and returns its document.
    pub fn build(self) -> QueryDocument {
        self.document
    }
}

impl core::fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl From<QueryBuilder> for QueryDocument {
    fn from(builder: QueryBuilder) -> Self {
        builder.document
    }
}
