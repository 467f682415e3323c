//! Resolution of inherited page configuration
//!
//! Both resolvers are pure over the records they are given or fetch; nothing
//! is cached between calls.

mod action;
mod flexform;

pub use action::resolve_template_configuration;
pub use flexform::{resolve_flex_form_source, resolve_flex_form_source_with_limit};
