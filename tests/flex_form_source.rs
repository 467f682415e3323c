//! Flex form source resolution against a closure-backed record store

use std::cell::RefCell;

use page_layout_resolver::{resolve_flex_form_source, PageId, PageRecord};

#[test]
fn test_source_from_root_level_parent() {
    let requested = RefCell::new(Vec::new());
    let fetch = |uid: PageId| -> Option<PageRecord> {
        requested.borrow_mut().push(uid.0);
        match uid.0 {
            1 => Some(PageRecord::new(1).with_parent(2)),
            2 => Some(PageRecord::new(3).with_flex_form_source("test")),
            _ => None,
        }
    };

    assert_eq!(resolve_flex_form_source(&fetch, PageId(1)), Some("test".to_string()));
    assert_eq!(*requested.borrow(), vec![1, 2]);
}

#[test]
fn test_no_source_anywhere() {
    let fetch = |uid: PageId| -> Option<PageRecord> {
        match uid.0 {
            1 => Some(PageRecord::new(1).with_parent(2)),
            2 => Some(PageRecord::new(2)),
            _ => None,
        }
    };
    assert_eq!(resolve_flex_form_source(&fetch, PageId(1)), None);
}

#[test]
fn test_zero_uid_is_absent() {
    let fetch = |_: PageId| -> Option<PageRecord> { panic!("no lookup expected") };
    assert_eq!(resolve_flex_form_source(&fetch, PageId::ROOT), None);
}
