//! Controller action resolution for a page and its ancestors
//!
//! A page renders with this crate's layout either because it claims the
//! layout marker itself (own mode) or because an ancestor declares the marker
//! as the layout for the levels below it (inherit mode). In inherit mode the
//! first non-empty next-level layout found walking upwards decides which
//! provider owns the subtree; a foreign one blocks everything above it.

use tracing::{debug, trace};

use crate::page::{AncestorChain, PageRecord, ResolvedConfiguration};

/// How an ancestor's next-level layout relates to the layout marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextLevel {
    /// Declares the marker for its descendants
    Match,
    /// Declares some other provider's layout
    Foreign,
    Unset,
}

impl NextLevel {
    fn classify(page: &PageRecord, layout_marker: &str) -> Self {
        match page.next_level_layout() {
            Some(layout) if layout == layout_marker => Self::Match,
            Some(_) => Self::Foreign,
            None => Self::Unset,
        }
    }
}

/// Resolve the controller action pair for `chain.subject()`
///
/// Returns `None` when this crate's layout does not apply to the page or no
/// page in the chain names an action. An empty marker names no layout, so
/// nothing resolves against it.
pub fn resolve_template_configuration(
    chain: &AncestorChain,
    layout_marker: &str,
) -> Option<ResolvedConfiguration> {
    let subject = chain.subject();
    if layout_marker.is_empty() {
        debug!(page = %subject.uid, "empty layout marker, nothing to resolve");
        return None;
    }
    if subject.own_layout == layout_marker {
        resolve_owned(subject, chain.ancestors())
    } else {
        resolve_inherited(subject, chain.ancestors(), layout_marker)
    }
}

/// The subject claims the layout itself; ancestors only supply actions
fn resolve_owned(
    subject: &PageRecord,
    ancestors: &[PageRecord],
) -> Option<ResolvedConfiguration> {
    if let Some(action) = subject.own_action() {
        trace!(page = %subject.uid, action, "page owns layout and action");
        return Some(ResolvedConfiguration::new(action, subject.sub_action.as_str()));
    }

    let inherited = ancestors.iter().find_map(|page| {
        page.sub_action().map(|sub| {
            trace!(page = %subject.uid, from = %page.uid, sub, "inherited sub action");
            ResolvedConfiguration::inherited(sub)
        })
    });
    if inherited.is_none() {
        debug!(page = %subject.uid, "page owns layout but no action is declared");
    }
    inherited
}

/// The subject depends on an ancestor activating the layout
fn resolve_inherited(
    subject: &PageRecord,
    ancestors: &[PageRecord],
    layout_marker: &str,
) -> Option<ResolvedConfiguration> {
    let mut activated = false;
    let mut sub_action: Option<&str> = None;

    for page in ancestors {
        if !activated {
            match NextLevel::classify(page, layout_marker) {
                NextLevel::Match => {
                    trace!(page = %subject.uid, from = %page.uid, "layout activated by ancestor");
                    activated = true;
                }
                NextLevel::Foreign => {
                    debug!(
                        page = %subject.uid,
                        from = %page.uid,
                        layout = %page.next_level_layout,
                        "subtree claimed by another layout provider"
                    );
                    return None;
                }
                NextLevel::Unset => {}
            }
        }

        if sub_action.is_none() {
            sub_action = page.sub_action();
        }

        if let (true, Some(sub)) = (activated, sub_action) {
            let action = subject.own_action().unwrap_or(sub);
            trace!(page = %subject.uid, action, sub, "resolved inherited configuration");
            return Some(ResolvedConfiguration::new(action, sub));
        }
    }

    debug!(page = %subject.uid, activated, "no inherited configuration");
    None
}
