//! Error types for loading page trees and resolver configuration
//!
//! Resolution itself never fails: a page without an applicable configuration
//! resolves to `None`. Only the file-backed inputs can be malformed.

use thiserror::Error;

use crate::page::PageId;

/// Errors that can occur when loading a page tree or a resolver config
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The same uid appears twice in one page tree
    #[error("duplicate page uid {uid}")]
    DuplicatePage { uid: PageId },

    /// A layout marker must name something
    #[error("layout marker must not be empty")]
    EmptyLayoutMarker,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_page_display() {
        let err = LoadError::DuplicatePage { uid: PageId(7) };
        assert_eq!(err.to_string(), "duplicate page uid 7");
    }

    #[test]
    fn test_parse_error_converts() {
        let toml_err = toml::from_str::<toml::Table>("not = = toml").unwrap_err();
        let err: LoadError = toml_err.into();
        assert!(err.to_string().starts_with("failed to parse TOML"));
    }
}
