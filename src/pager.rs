use crate::dataset::{TripRecord, TripTable};

/// Rows shown per page of raw trip data.
pub const PAGE_SIZE: usize = 5;

/// A window of consecutive rows and the index of its first row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a> {
    pub offset: usize,
    pub rows: &'a [TripRecord],
}

impl Page<'_> {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Walks a table in windows of [`PAGE_SIZE`] rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pager {
    start: usize,
}

impl Pager {
    #[must_use]
    pub const fn new() -> Self {
        Self { start: 0 }
    }

    /// Index of the first row of the next page.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Rows `[start, start + PAGE_SIZE)`, clipped to the table; empty past the end.
    #[must_use]
    pub fn current<'a>(&self, table: &'a TripTable) -> Page<'a> {
        let records = table.records();
        let begin = self.start.min(records.len());
        let end = self.start.saturating_add(PAGE_SIZE).min(records.len());
        Page {
            offset: self.start,
            rows: &records[begin..end],
        }
    }

    /// Return the current page and move the window forward by [`PAGE_SIZE`].
    pub fn next_page<'a>(&mut self, table: &'a TripTable) -> Page<'a> {
        let page = self.current(table);
        self.start = self.start.saturating_add(PAGE_SIZE);
        page
    }
}
