//! Page records and the resolved configuration pair

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Identifier of a page in the content tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u32);

impl PageId {
    /// The null identifier; the parent of every top-level page
    pub const ROOT: PageId = PageId(0);

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl From<u32> for PageId {
    fn from(uid: u32) -> Self {
        PageId(uid)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of one page row
///
/// Text fields use the empty string for "not set", matching how the rows come
/// out of the record store. The CMS column names are accepted as aliases, and
/// the negative `pid` that version rows carry reads as no parent; their
/// ancestry follows `version_overlay_id` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub uid: PageId,

    /// Structural parent, `PageId::ROOT` at the top of the tree
    #[serde(default, alias = "pid", deserialize_with = "deserialize_parent_id")]
    pub parent_id: PageId,

    /// Live page this record is a version of, `PageId::ROOT` for live pages
    #[serde(default, alias = "t3ver_oid")]
    pub version_overlay_id: PageId,

    /// Layout this page renders itself with
    #[serde(default, alias = "backend_layout")]
    pub own_layout: String,

    /// Layout this page declares for its direct children
    #[serde(default, alias = "backend_layout_next_level")]
    pub next_level_layout: String,

    #[serde(default, alias = "tx_fed_page_controller_action")]
    pub own_action: String,

    /// Controller action declared for child pages
    #[serde(default, alias = "tx_fed_page_controller_action_sub")]
    pub sub_action: String,

    /// Raw form definition owned by this page
    #[serde(default, alias = "tx_fed_page_flexform")]
    pub flex_form_source: String,
}

impl PageRecord {
    pub fn new(uid: u32) -> Self {
        Self {
            uid: PageId(uid),
            ..Self::default()
        }
    }

    pub fn with_parent(mut self, parent: u32) -> Self {
        self.parent_id = PageId(parent);
        self
    }

    pub fn with_version_overlay(mut self, live: u32) -> Self {
        self.version_overlay_id = PageId(live);
        self
    }

    pub fn with_own_layout(mut self, layout: impl Into<String>) -> Self {
        self.own_layout = layout.into();
        self
    }

    pub fn with_next_level_layout(mut self, layout: impl Into<String>) -> Self {
        self.next_level_layout = layout.into();
        self
    }

    pub fn with_own_action(mut self, action: impl Into<String>) -> Self {
        self.own_action = action.into();
        self
    }

    pub fn with_sub_action(mut self, action: impl Into<String>) -> Self {
        self.sub_action = action.into();
        self
    }

    pub fn with_flex_form_source(mut self, source: impl Into<String>) -> Self {
        self.flex_form_source = source.into();
        self
    }

    /// The page an ancestry walk visits after this one
    ///
    /// A version record continues through its live counterpart, which then
    /// acts as its first parent. Everything else follows the stored parent.
    pub fn ancestry_parent(&self) -> PageId {
        if self.version_overlay_id.is_root() {
            self.parent_id
        } else {
            self.version_overlay_id
        }
    }

    pub fn own_action(&self) -> Option<&str> {
        non_empty(&self.own_action)
    }

    pub fn sub_action(&self) -> Option<&str> {
        non_empty(&self.sub_action)
    }

    pub fn next_level_layout(&self) -> Option<&str> {
        non_empty(&self.next_level_layout)
    }

    pub fn flex_form_source(&self) -> Option<&str> {
        non_empty(&self.flex_form_source)
    }
}

/// Negative parents mark version placeholders and map to `PageId::ROOT`
fn deserialize_parent_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PageId, D::Error> {
    let pid = i64::deserialize(deserializer)?;
    if pid < 0 {
        return Ok(PageId::ROOT);
    }
    u32::try_from(pid).map(PageId).map_err(de::Error::custom)
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// The controller action pair a page renders with
///
/// `sub_action` may be empty when a page owns its layout and action but
/// declares nothing for its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfiguration {
    pub action: String,
    pub sub_action: String,
}

impl ResolvedConfiguration {
    pub fn new(action: impl Into<String>, sub_action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            sub_action: sub_action.into(),
        }
    }

    /// Both fields set to the same inherited action
    pub fn inherited(action: &str) -> Self {
        Self::new(action, action)
    }
}

impl fmt::Display for ResolvedConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.action, self.sub_action)
    }
}
