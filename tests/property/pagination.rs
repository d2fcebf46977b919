// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Offset Pagination
//!
//! Draining a list of `total` records with page size `limit` yields every
//! record once and issues `max(1, ceil(total / limit))` requests.

use proptest::prelude::*;
use std::cell::RefCell;

use public_cloud_core::repository::pagination::drain;
use public_cloud_core::transport::{Page, PageRequest};
use public_cloud_core::wire::PageMetadata;

/// Serve `0..total` the way the API does
fn serve(total: i64, default_limit: i64, request: PageRequest) -> Page<i64> {
    let limit = request.limit.unwrap_or(default_limit);
    let end = (request.offset + limit).min(total);

    Page {
        items: (request.offset.min(total)..end).collect(),
        metadata: PageMetadata {
            total_count: total,
            offset: request.offset,
            limit,
        },
    }
}

fn expected_requests(total: i64, limit: i64) -> usize {
    let pages = (total + limit - 1) / limit;
    pages.max(1) as usize
}

proptest! {
    /// Property: every record arrives once, in order
    #[test]
    fn prop_drain_yields_every_record(total in 0i64..500, limit in 1i64..60) {
        let records: Result<Vec<i64>, ()> = tokio_test::block_on(drain(
            PageRequest::new(Some(limit), 0),
            |request| async move { Ok(serve(total, limit, request)) },
            Ok,
        ));

        prop_assert_eq!(records.unwrap(), (0..total).collect::<Vec<_>>());
    }

    /// Property: the request count is the page count, offsets never repeat
    #[test]
    fn prop_drain_request_count(total in 0i64..500, limit in 1i64..60) {
        let offsets = RefCell::new(Vec::new());

        let records: Result<Vec<i64>, ()> = tokio_test::block_on(drain(
            PageRequest::first(),
            |request| {
                offsets.borrow_mut().push(request.offset);
                async move { Ok(serve(total, limit, request)) }
            },
            Ok,
        ));

        prop_assert!(records.is_ok());
        let offsets = offsets.into_inner();
        prop_assert_eq!(offsets.len(), expected_requests(total, limit));
        prop_assert!(offsets.windows(2).all(|pair| pair[1] == pair[0] + limit));
    }
}
