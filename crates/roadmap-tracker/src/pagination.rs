//! Iteration pagination.
//!
//! The Tracker returns iterations in bounded pages and reports the window
//! it served in response headers. [`collect_iterations`] walks those pages
//! strictly in order until the reported total is exhausted.

use roadmap_core::Iteration;

use crate::TrackerApi;
use crate::error::TrackerError;

/// Window metadata reported with every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total: u32,
    pub limit: u32,
    pub offset: u32,
    pub returned: u32,
}

impl Pagination {
    /// Offset of the first item after this page.
    #[must_use]
    pub const fn next_offset(&self) -> u32 {
        self.offset.saturating_add(self.returned)
    }

    /// Whether this page reaches the end of the collection.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.next_offset() >= self.total
    }
}

/// One page of iterations and its window metadata.
#[derive(Debug, Clone)]
pub struct IterationPage {
    pub iterations: Vec<Iteration>,
    pub pagination: Pagination,
}

/// Fetch every iteration of a project from `start_offset` onwards.
///
/// Requests are issued one at a time with increasing offsets and the pages
/// are concatenated in order. Stops when `offset + returned >= total`.
///
/// # Errors
///
/// Propagates the first page error. Returns
/// [`TrackerError::PaginationStalled`] when a page before the end does not
/// move the offset forward, instead of requesting the same window again.
pub async fn collect_iterations<A: TrackerApi>(
    api: &A,
    project_id: u64,
    start_offset: u32,
    limit: u32,
) -> Result<Vec<Iteration>, TrackerError> {
    let mut iterations = Vec::new();
    let mut offset = start_offset;

    loop {
        let page = api.iterations_page(project_id, offset, limit).await?;
        let pagination = page.pagination;
        tracing::debug!(
            project_id,
            offset = pagination.offset,
            returned = pagination.returned,
            total = pagination.total,
            "fetched iteration page"
        );
        iterations.extend(page.iterations);

        if pagination.is_last() {
            break;
        }

        let next = pagination.next_offset();
        if pagination.returned == 0 || next <= offset {
            return Err(TrackerError::PaginationStalled {
                project_id,
                offset: next,
                total: pagination.total,
            });
        }
        offset = next;
    }

    Ok(iterations)
}
