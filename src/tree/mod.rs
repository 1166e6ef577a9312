//! The window manager's layout tree.
//!
//! A snapshot arrives as a [`LayoutNode`] document (the reply to a GET_TREE
//! request) and is converted once into a [`Container`] tree.  Each container
//! kind only carries the fields its layout needs, so traversals are plain
//! `match`es instead of repeated field probing.
//!
//! * [`flatten`](flatten::flatten) lists the windows that are currently
//!   visible.
//! * [`locate_tab_group`](tabs::locate_tab_group) finds the tabbed/stacked
//!   container around the focused window and one representative per tab.

pub mod flatten;
pub mod tabs;

use crate::geometry::{Rect, Window};
use serde::Deserialize;

/// Name of the hidden output that holds the scratchpad workspace.
const SCRATCHPAD_OUTPUT: &str = "__i3";

//  Wire document

/// One node of the layout tree exactly as the window manager reports it.
///
/// Only the fields navigation needs are kept; everything else in the reply
/// is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutNode {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub layout: String,
    #[serde(default)]
    pub rect: Rect,
    #[serde(default)]
    pub focused: bool,
    /// Child ids, most recently focused first.
    #[serde(default)]
    pub focus: Vec<i64>,
    #[serde(default)]
    pub nodes: Vec<LayoutNode>,
    #[serde(default)]
    pub floating_nodes: Vec<LayoutNode>,
}

/// The `type` field of a [`LayoutNode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Root,
    Output,
    #[default]
    Con,
    FloatingCon,
    Workspace,
    Dockarea,
    #[serde(other)]
    Other,
}

/// The snapshot does not have the shape the window manager promises.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("floating container {id} wraps {children} windows instead of one")]
    AmbiguousFloating { id: i64, children: usize },
}

//  Validated tree

/// A container that has no children and stands for one real window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub id: i64,
    pub rect: Rect,
    pub focused: bool,
}

/// A floating window: identity and focus of the wrapped window, geometry of
/// the floating wrapper around it.
///
/// i3 wraps every floating window in a `floating_con`; sway reports the
/// window as a childless `floating_con` of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floating {
    pub id: i64,
    pub rect: Rect,
    pub focused: bool,
}

/// A container with children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub id: i64,
    /// Id of the active child (`focus[0]` on the wire).
    pub focus: Option<i64>,
    pub children: Vec<Container>,
    pub floating: Vec<Floating>,
}

/// A layout tree node, classified by how its children are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container {
    Leaf(Leaf),
    /// All children are visible side by side.
    Split(Branch),
    /// Only the active child is visible (tabbed or stacked).
    Switching(Branch),
    /// Bars, other docked clients and the scratchpad; never focus targets.
    Dock(Branch),
    /// A layout this tool does not know.
    Unsupported { layout: String, branch: Branch },
}

impl Leaf {
    pub fn to_window(&self) -> Window {
        Window {
            id: self.id.to_string(),
            rect: self.rect,
            focused: self.focused,
            floating: false,
        }
    }
}

impl Floating {
    fn from_node(node: &LayoutNode) -> Result<Self, TreeError> {
        let window = match node.nodes.as_slice() {
            [] => node,
            [window] => window,
            children => {
                return Err(TreeError::AmbiguousFloating {
                    id: node.id,
                    children: children.len(),
                })
            }
        };
        Ok(Self {
            id: window.id,
            rect: node.rect,
            focused: window.focused,
        })
    }

    pub fn to_window(&self) -> Window {
        Window {
            id: self.id.to_string(),
            rect: self.rect,
            focused: self.focused,
            floating: true,
        }
    }
}

impl Branch {
    fn from_node(node: &LayoutNode) -> Result<Self, TreeError> {
        Ok(Self {
            id: node.id,
            focus: node.focus.first().copied(),
            children: node
                .nodes
                .iter()
                .map(Container::from_node)
                .collect::<Result<_, _>>()?,
            floating: node
                .floating_nodes
                .iter()
                .map(Floating::from_node)
                .collect::<Result<_, _>>()?,
        })
    }

    /// Resolve the active child against `children`.
    ///
    /// Returns its position and the child itself, or `None` when there is
    /// no focus pointer or it names no child.
    pub fn focused_child(&self) -> Option<(usize, &Container)> {
        let id = self.focus?;
        self.children.iter().enumerate().find(|(_, c)| c.id() == id)
    }
}

impl Container {
    /// Validate and classify a wire node and its whole subtree.
    pub fn from_node(node: &LayoutNode) -> Result<Self, TreeError> {
        if node.nodes.is_empty() && node.kind == NodeKind::Con {
            return Ok(Container::Leaf(Leaf {
                id: node.id,
                rect: node.rect,
                focused: node.focused,
            }));
        }

        let branch = Branch::from_node(node)?;

        // The scratchpad output keeps hidden windows.
        if node.kind == NodeKind::Output && node.name.as_deref() == Some(SCRATCHPAD_OUTPUT) {
            return Ok(Container::Dock(branch));
        }

        // Of the workspaces of an output only the focused one is on screen.
        // i3 keeps them in the output's `content` container, sway directly in
        // the output.
        if node.nodes.iter().any(|n| n.kind == NodeKind::Workspace) {
            return Ok(Container::Switching(branch));
        }

        Ok(match node.layout.as_str() {
            "splith" | "splitv" | "output" => Container::Split(branch),
            "tabbed" | "stacked" => Container::Switching(branch),
            "dockarea" => Container::Dock(branch),
            other => Container::Unsupported {
                layout: other.to_string(),
                branch,
            },
        })
    }

    pub fn id(&self) -> i64 {
        match self {
            Container::Leaf(leaf) => leaf.id,
            Container::Split(b) | Container::Switching(b) | Container::Dock(b) => b.id,
            Container::Unsupported { branch, .. } => branch.id,
        }
    }

    pub fn branch(&self) -> Option<&Branch> {
        match self {
            Container::Leaf(_) => None,
            Container::Split(b) | Container::Switching(b) | Container::Dock(b) => Some(b),
            Container::Unsupported { branch, .. } => Some(branch),
        }
    }

    /// See [`Branch::focused_child`]; a leaf has no children.
    pub fn focused_child(&self) -> Option<(usize, &Container)> {
        self.branch()?.focused_child()
    }
}

impl TryFrom<&LayoutNode> for Container {
    type Error = TreeError;

    fn try_from(node: &LayoutNode) -> Result<Self, Self::Error> {
        Container::from_node(node)
    }
}
