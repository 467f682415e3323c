//! Page Layout Resolver - inherited page template configuration for content trees
//!
//! This library decides which controller action a page renders with by walking
//! the page's ancestors and applying layout ownership rules, and finds the
//! nearest flexible-form source a page inherits.
//!
//! # Example
//!
//! ```rust
//! use page_layout_resolver::{MemoryRepository, PageId, PageRecord, PageService};
//!
//! let repository = MemoryRepository::from_records([
//!     PageRecord::new(1)
//!         .with_next_level_layout("fluidpages__fluidpages")
//!         .with_sub_action("Page->sub"),
//!     PageRecord::new(2).with_parent(1),
//! ])
//! .unwrap();
//!
//! let service = PageService::new(repository);
//! let config = service.page_template_configuration(PageId(2)).unwrap();
//! assert_eq!(config.action, "Page->sub");
//! ```

pub mod config;
pub mod error;
pub mod page;
pub mod resolver;
pub mod service;

pub use config::{ResolverConfig, DEFAULT_LAYOUT_MARKER};
pub use error::LoadError;
pub use page::{
    AncestorChain, MemoryRepository, PageId, PageRecord, PageRepository, ResolvedConfiguration,
    Rootline,
};
pub use resolver::{resolve_flex_form_source, resolve_template_configuration};
pub use service::PageService;
