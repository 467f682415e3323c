//! Ancestry walks over the page tree
//!
//! [`Rootline`] is the only place that follows parent links through a
//! repository. The resolvers either consume it lazily (flex-form sources) or
//! collect it up front into an [`AncestorChain`] (template configuration).

use tracing::{trace, warn};

use super::record::{PageId, PageRecord};
use super::repository::PageRepository;

/// Default number of records a single walk may visit
pub const DEFAULT_MAX_DEPTH: usize = 99;

/// Iterator over a page and its ancestors, nearest first
///
/// Stops at the root, at a missing record, at a record with uid 0, or once
/// the depth limit is reached.
pub struct Rootline<'a, R: PageRepository + ?Sized> {
    repository: &'a R,
    next: PageId,
    remaining: usize,
}

impl<'a, R: PageRepository + ?Sized> Rootline<'a, R> {
    pub fn new(repository: &'a R, start: PageId) -> Self {
        Self::with_limit(repository, start, DEFAULT_MAX_DEPTH)
    }

    pub fn with_limit(repository: &'a R, start: PageId, max_depth: usize) -> Self {
        Self {
            repository,
            next: start,
            remaining: max_depth,
        }
    }
}

impl<R: PageRepository + ?Sized> Iterator for Rootline<'_, R> {
    type Item = PageRecord;

    fn next(&mut self) -> Option<PageRecord> {
        if self.next.is_root() {
            return None;
        }
        if self.remaining == 0 {
            warn!(page = %self.next, "rootline depth limit reached, stopping walk");
            self.next = PageId::ROOT;
            return None;
        }
        self.remaining -= 1;

        let Some(record) = self.repository.find_page(self.next) else {
            trace!(page = %self.next, "page not found, ending rootline");
            self.next = PageId::ROOT;
            return None;
        };
        if record.uid.is_root() {
            self.next = PageId::ROOT;
            return None;
        }

        self.next = record.ancestry_parent();
        Some(record)
    }
}

/// A page followed by its ancestors, root last
///
/// Never empty: index 0 is always the page being resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorChain {
    records: Vec<PageRecord>,
}

impl AncestorChain {
    /// Wrap pre-fetched records; `None` if there are none
    pub fn new(records: Vec<PageRecord>) -> Option<Self> {
        if records.is_empty() {
            None
        } else {
            Some(Self { records })
        }
    }

    /// Fetch the chain for `subject` through a repository
    ///
    /// A version record stands in for its live page, so the live page is
    /// stepped over: its next-level layout belongs to the live page's
    /// children, not to the version. The chain continues with the live
    /// page's ancestors.
    pub fn fetch<R: PageRepository + ?Sized>(
        repository: &R,
        subject: PageId,
        max_depth: usize,
    ) -> Option<Self> {
        let mut rootline = Rootline::with_limit(repository, subject, max_depth);
        let first = rootline.next()?;
        if !first.version_overlay_id.is_root() {
            if let Some(live) = rootline.next() {
                trace!(page = %first.uid, live = %live.uid, "version record, skipping live page");
            }
        }

        let mut records = vec![first];
        records.extend(rootline);
        Self::new(records)
    }

    /// The page being resolved
    pub fn subject(&self) -> &PageRecord {
        &self.records[0]
    }

    /// Ancestors of the subject, nearest first
    pub fn ancestors(&self) -> &[PageRecord] {
        &self.records[1..]
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
