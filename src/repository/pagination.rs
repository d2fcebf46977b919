// Copyright (c) 2025 - Cowboy AI, Inc.
//! Offset pagination
//!
//! The first response decides the page size and the total; later pages
//! only move the offset. Draining issues at most `ceil(total / limit)`
//! requests and never repeats one.

use std::future::Future;
use tracing::debug;

use crate::transport::{Page, PageRequest};
use crate::wire::PageMetadata;

/// Cursor over an offset-paginated list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: i64,
    total_count: i64,
    offset: i64,
}

impl Pagination {
    pub fn new(limit: i64, total_count: i64, offset: i64) -> Self {
        Self {
            limit,
            total_count,
            offset,
        }
    }

    pub fn from_metadata(metadata: &PageMetadata) -> Self {
        Self::new(metadata.limit, metadata.total_count, metadata.offset)
    }

    /// Whether another page exists after the current one
    ///
    /// A non-positive limit or total stops immediately, as does an offset
    /// that would overflow.
    pub fn can_increment(&self) -> bool {
        self.limit > 0
            && self.total_count > 0
            && self
                .offset
                .checked_add(self.limit)
                .is_some_and(|next| next < self.total_count)
    }

    /// Advance to the next page
    pub fn next_page(&mut self) -> PageRequest {
        self.offset = self.offset.saturating_add(self.limit);
        PageRequest::new(Some(self.limit), self.offset)
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn total_count(&self) -> i64 {
        self.total_count
    }
}

/// Fetch every page starting at `first`, converting records as they arrive
///
/// The first failure, fetch or conversion, aborts the drain.
pub async fn drain<Raw, Out, E, F, Fut, C>(
    first: PageRequest,
    mut fetch: F,
    mut convert: C,
) -> Result<Vec<Out>, E>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Page<Raw>, E>>,
    C: FnMut(Raw) -> Result<Out, E>,
{
    let page = fetch(first).await?;
    let mut pagination = Pagination::from_metadata(&page.metadata);
    let mut records = Vec::with_capacity(page.items.len());

    for raw in page.items {
        records.push(convert(raw)?);
    }

    while pagination.can_increment() {
        let request = pagination.next_page();
        debug!(
            offset = request.offset,
            total_count = pagination.total_count,
            "Fetching next page"
        );

        let page = fetch(request).await?;
        for raw in page.items {
            records.push(convert(raw)?);
        }
    }

    Ok(records)
}
