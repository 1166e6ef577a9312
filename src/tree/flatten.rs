//! Reduce a layout tree to the windows that can currently be seen.

use super::{Branch, Container};
use crate::geometry::Window;
use crate::traits::{Diagnostic, Diagnostics};
use log::debug;

/// List every visible window below `root`, depth first, in document order.
///
/// * Every child of a split container is visible.  The container's
///   floating windows come first, then its children.
/// * Only the active child of a tabbed/stacked container is visible; a
///   container without a resolvable active child shows nothing.
/// * Dock areas show nothing.
/// * A container with an unknown layout shows nothing and is reported to
///   `diagnostics`; the rest of the tree is still visited.
///
/// Windows with zero width or height are never returned.
pub fn flatten<D: Diagnostics + ?Sized>(root: &Container, diagnostics: &D) -> Vec<Window> {
    let mut windows = Vec::new();
    collect(root, diagnostics, &mut windows);
    windows
}

fn collect<D: Diagnostics + ?Sized>(node: &Container, diagnostics: &D, out: &mut Vec<Window>) {
    match node {
        Container::Leaf(leaf) => {
            if leaf.rect.is_empty() {
                debug!("skipping invisible container {}", leaf.id);
            } else {
                out.push(leaf.to_window());
            }
        }
        Container::Split(branch) => {
            push_floating(branch, out);
            for child in &branch.children {
                collect(child, diagnostics, out);
            }
        }
        Container::Switching(branch) => match branch.focused_child() {
            Some((_, child)) => collect(child, diagnostics, out),
            None => debug!("no active child in container {}", branch.id),
        },
        Container::Dock(_) => {}
        Container::Unsupported { layout, branch } => diagnostics.report(Diagnostic::UnsupportedLayout {
            id: branch.id,
            layout: layout.clone(),
        }),
    }
}

fn push_floating(branch: &Branch, out: &mut Vec<Window>) {
    out.extend(
        branch
            .floating
            .iter()
            .filter(|f| !f.rect.is_empty())
            .map(|f| f.to_window()),
    );
}
