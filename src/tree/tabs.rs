//! Locate the tab group around the focused window.
//!
//! Tab-order navigation does not move between the visible windows but
//! between the *tabs* of the innermost tabbed/stacked container holding the
//! focused window.  A tab may itself be a whole subtree, so each tab is
//! represented by the window that was last focused inside it; switching to
//! that window restores the tab exactly as the user left it.

use super::{Branch, Container};
use log::debug;

/// The tabs of one tabbed/stacked container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabGroup {
    /// One representative container id per tab, in tab order.
    pub ids: Vec<String>,
    /// Position of the tab that holds the focused window.
    pub current: usize,
}

/// Find the deepest tabbed/stacked container on the focus path below
/// `root` and describe its tabs.
///
/// Returns an empty group when the focus path crosses no such container.
pub fn locate_tab_group(root: &Container) -> TabGroup {
    let Some(group) = deepest_focused_switching(root) else {
        debug!("no tabbed or stacked container on the focus path");
        return TabGroup::default();
    };

    let ids: Vec<String> = group
        .children
        .iter()
        .map(|tab| deepest_focused(tab).id().to_string())
        .collect();
    let current = group.focused_child().map(|(index, _)| index).unwrap_or(0);
    debug!("tab group {}: {:?} at {}", group.id, ids, current);

    TabGroup { ids, current }
}

fn deepest_focused_switching(node: &Container) -> Option<&Branch> {
    let (_, child) = node.focused_child()?;
    deepest_focused_switching(child).or(match node {
        Container::Switching(branch) => Some(branch),
        _ => None,
    })
}

/// Follow the active children down from `node` as far as they go.
fn deepest_focused(node: &Container) -> &Container {
    match node.focused_child() {
        Some((_, child)) => deepest_focused(child),
        None => node,
    }
}
