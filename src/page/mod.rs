//! Page rows, record access and ancestry walks

mod record;
mod repository;
mod rootline;

pub use record::{PageId, PageRecord, ResolvedConfiguration};
pub use repository::{MemoryRepository, PageRepository};
pub use rootline::{AncestorChain, Rootline, DEFAULT_MAX_DEPTH};
