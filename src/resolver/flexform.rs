//! Inherited flexible-form source lookup

use tracing::trace;

use crate::page::{PageId, PageRepository, Rootline, DEFAULT_MAX_DEPTH};

/// Find the nearest form definition source for `subject`
///
/// Walks the page and its ancestors through `repository`, following version
/// overlays to their live page. The null id resolves to `None` without a
/// lookup, as does a walk that reaches the root or a missing record.
pub fn resolve_flex_form_source<R: PageRepository + ?Sized>(
    repository: &R,
    subject: PageId,
) -> Option<String> {
    resolve_flex_form_source_with_limit(repository, subject, DEFAULT_MAX_DEPTH)
}

pub fn resolve_flex_form_source_with_limit<R: PageRepository + ?Sized>(
    repository: &R,
    subject: PageId,
    max_depth: usize,
) -> Option<String> {
    if subject.is_root() {
        return None;
    }

    let found = Rootline::with_limit(repository, subject, max_depth).find_map(|page| {
        page.flex_form_source().map(|source| {
            trace!(page = %subject, from = %page.uid, "found flex form source");
            source.to_owned()
        })
    });
    if found.is_none() {
        trace!(page = %subject, "no flex form source in rootline");
    }
    found
}
