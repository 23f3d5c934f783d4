//! Page-scoped table state: one record set plus filter, sort and pagination.
//!
//! This is the single engine behind every board. A view owns its records for
//! the lifetime of the page; applying a query or clicking a sort header
//! mutates the view in place and resets the page to 1.

use crate::page::Pager;
use crate::query::{AliasTable, Parser, Query};
use crate::record::Record;
use crate::schema::Schema;
use crate::sort::{sort_records, SortDirection, SortState};

/// A filterable, sortable, paginated view over one record set.
#[derive(Debug, Clone)]
pub struct TableView {
    schema: Schema,
    aliases: AliasTable,
    rows: Vec<Record>,
    filtered: Vec<Record>,
    query: Query,
    sort: SortState,
    pager: Pager,
}

impl TableView {
    /// Creates a view showing all records, unsorted, on page 1.
    #[must_use]
    pub fn new(schema: Schema, aliases: AliasTable, rows: Vec<Record>, per_page: usize) -> Self {
        let filtered = rows.clone();
        Self {
            schema,
            aliases,
            rows,
            filtered,
            query: Query::default(),
            sort: SortState::default(),
            pager: Pager::new(per_page),
        }
    }

    /// Applies a free-text query. The filtered set is rebuilt from the full
    /// record set, the sort state clears, and the page resets to 1. An empty
    /// query restores the full set.
    pub fn apply_query(&mut self, input: &str) {
        self.query = Parser::parse(input, &self.aliases);
        self.filtered = self.query.filter(&self.rows);
        self.sort.clear();
        self.pager.reset();
    }

    /// Registers a sort-header click and re-sorts the filtered set.
    /// Resets the page to 1. Returns the resulting direction.
    pub fn sort_by(&mut self, column: &str) -> SortDirection {
        let direction = self.sort.click(column);
        sort_records(&mut self.filtered, &self.schema, column, direction);
        self.pager.reset();
        direction
    }

    /// Sorts explicitly by column and direction, bypassing toggle logic.
    /// Resets the page to 1.
    pub fn set_sort(&mut self, column: &str, direction: SortDirection) {
        self.sort.set(column, direction);
        sort_records(&mut self.filtered, &self.schema, column, direction);
        self.pager.reset();
    }

    /// Keeps only filtered records matching `keep`. Resets the page to 1.
    pub fn retain(&mut self, keep: impl FnMut(&Record) -> bool) {
        self.filtered.retain(keep);
        self.pager.reset();
    }

    /// Requests a page (clamped when sliced).
    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page);
    }

    /// The records on the current page.
    #[must_use]
    pub fn page_records(&self) -> &[Record] {
        self.pager.slice(&self.filtered)
    }

    /// Total page count for the current filtered set.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.filtered.len())
    }

    /// The current (clamped) page number.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.pager.clamped_page(self.filtered.len())
    }

    /// The whole filtered set, in display order.
    #[must_use]
    pub fn filtered(&self) -> &[Record] {
        &self.filtered
    }

    /// Number of records in the filtered set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    /// Returns true when the filtered set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// The view's schema.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The active query.
    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The active sort state.
    #[must_use]
    pub fn sort(&self) -> &SortState {
        &self.sort
    }
}
