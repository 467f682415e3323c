//! Page service: resolution entry points bound to a repository

use tracing::trace;

use crate::config::ResolverConfig;
use crate::page::{AncestorChain, PageId, PageRepository, ResolvedConfiguration};
use crate::resolver::{resolve_flex_form_source_with_limit, resolve_template_configuration};

/// Resolves page configuration by uid through a page repository
#[derive(Debug, Clone)]
pub struct PageService<R> {
    repository: R,
    config: ResolverConfig,
}

impl<R: PageRepository> PageService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, ResolverConfig::default())
    }

    pub fn with_config(repository: R, config: ResolverConfig) -> Self {
        Self { repository, config }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Controller action pair for the page, if this crate's layout applies
    pub fn page_template_configuration(&self, uid: PageId) -> Option<ResolvedConfiguration> {
        if uid.is_root() {
            return None;
        }
        let chain = AncestorChain::fetch(&self.repository, uid, self.config.max_depth)?;
        trace!(page = %uid, depth = chain.len(), "fetched ancestor chain");
        resolve_template_configuration(&chain, &self.config.layout_marker)
    }

    /// Nearest raw form definition source for the page
    pub fn page_flex_form_source(&self, uid: PageId) -> Option<String> {
        resolve_flex_form_source_with_limit(&self.repository, uid, self.config.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::config::DEFAULT_LAYOUT_MARKER;
    use crate::page::{MemoryRepository, PageRecord};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_uid_returns_none_without_lookup() {
        let calls = Cell::new(0);
        let fetch = |_: PageId| -> Option<PageRecord> {
            calls.set(calls.get() + 1);
            None
        };
        let service = PageService::new(fetch);
        assert_eq!(service.page_template_configuration(PageId::ROOT), None);
        assert_eq!(service.page_flex_form_source(PageId::ROOT), None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_unknown_page_is_absent() {
        let service = PageService::new(MemoryRepository::new());
        assert_eq!(service.page_template_configuration(PageId(4)), None);
    }

    #[test]
    fn test_configured_marker_is_used() {
        let repository = MemoryRepository::from_records([
            PageRecord::new(1).with_next_level_layout("custom").with_sub_action("S"),
            PageRecord::new(2).with_parent(1),
        ])
        .expect("Unique uids");

        let default_service = PageService::new(repository.clone());
        assert_eq!(default_service.page_template_configuration(PageId(2)), None);

        let custom = PageService::with_config(
            repository,
            ResolverConfig::new().with_layout_marker("custom"),
        );
        assert_eq!(
            custom.page_template_configuration(PageId(2)),
            Some(ResolvedConfiguration::inherited("S"))
        );
    }

    #[test]
    fn test_empty_marker_from_builder_resolves_nothing() {
        let repository = MemoryRepository::from_records([
            PageRecord::new(1).with_sub_action("S"),
            PageRecord::new(2).with_parent(1),
        ])
        .expect("Unique uids");
        let service =
            PageService::with_config(repository, ResolverConfig::new().with_layout_marker(""));
        assert_eq!(service.page_template_configuration(PageId(1)), None);
        assert_eq!(service.page_template_configuration(PageId(2)), None);
    }

    #[test]
    fn test_max_depth_cuts_chain_before_activating_page() {
        let repository = MemoryRepository::from_records([
            PageRecord::new(1)
                .with_next_level_layout(DEFAULT_LAYOUT_MARKER)
                .with_sub_action("S"),
            PageRecord::new(2).with_parent(1),
            PageRecord::new(3).with_parent(2),
        ])
        .expect("Unique uids");

        let shallow = PageService::with_config(
            repository.clone(),
            ResolverConfig::new().with_max_depth(2),
        );
        assert_eq!(shallow.page_template_configuration(PageId(3)), None);

        let deep = PageService::with_config(repository, ResolverConfig::new().with_max_depth(3));
        assert_eq!(
            deep.page_template_configuration(PageId(3)),
            Some(ResolvedConfiguration::inherited("S"))
        );
    }

    #[test]
    fn test_max_depth_limits_flex_form_walk() {
        let repository = MemoryRepository::from_records([
            PageRecord::new(1).with_flex_form_source("X"),
            PageRecord::new(2).with_parent(1),
            PageRecord::new(3).with_parent(2),
        ])
        .expect("Unique uids");
        let service = PageService::with_config(repository, ResolverConfig::new().with_max_depth(2));
        assert_eq!(service.page_flex_form_source(PageId(3)), None);
        assert_eq!(service.page_flex_form_source(PageId(2)), Some("X".to_string()));
    }
}
