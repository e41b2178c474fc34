//! Hierarchical value rendering.
//!
//! Builds a display tree from an arbitrary [`DynamicValue`]. The tree is
//! pure data: the gpui layer in `render/card_view.rs` maps it to elements
//! and wires up click handlers, and the tests exercise it directly.
//!
//! Per-node expand/collapse state is keyed by [`NodePath`], the stable
//! identity of a node from its row root. Rendering the same value with
//! the same state store always produces the same tree, and toggling one
//! path only ever changes that node's subtree.

use crate::constants::{MARKER_COLLAPSED, MARKER_EXPANDED, TRUNCATE_THRESHOLD};
use crate::types::DynamicValue;
use std::collections::HashMap;

/// Stable identity of a rendered node: the ordered key sequence from the
/// tabular row root down to the value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<String>);

impl NodePath {
    /// Root path for one displayed row.
    pub fn row(index: usize) -> Self {
        NodePath(vec![format!("row:{}", index)])
    }

    /// Path of a child reached through `key`.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.to_string());
        NodePath(segments)
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

/// Mutable display state of one node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeState {
    /// Mapping nodes: children visible
    pub expanded: bool,
    /// Long text nodes: full text visible
    pub truncated_open: bool,
}

/// Path-keyed store of per-node display state.
///
/// Owned by the presentation layer. Unknown paths read as the default
/// (collapsed, truncated) state, so the store only ever holds nodes the
/// user has interacted with. Cleared wholesale when the dataset is
/// replaced; never persisted across runs.
#[derive(Debug, Default)]
pub struct NodeStateStore {
    states: HashMap<NodePath, NodeState>,
}

impl NodeStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &NodePath) -> NodeState {
        self.states.get(path).copied().unwrap_or_default()
    }

    /// Toggle the expand/collapse state of a mapping node.
    pub fn toggle_expanded(&mut self, path: &NodePath) {
        let state = self.states.entry(path.clone()).or_default();
        state.expanded = !state.expanded;
    }

    /// Toggle the truncation state of a long text node.
    pub fn toggle_truncated(&mut self, path: &NodePath) {
        let state = self.states.entry(path.clone()).or_default();
        state.truncated_open = !state.truncated_open;
    }

    /// Forget all state, e.g. when a new dataset replaces the rows.
    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// What a rendered node is, which drives styling and interactivity.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Null value, shown in the attention/error style. Never interactive.
    Error,
    /// Plain non-interactive line (short text, booleans, numbers,
    /// stringified fallback values).
    Static,
    /// Text over the truncation threshold. Clicking toggles between the
    /// truncated and the full form.
    Truncatable { open: bool },
    /// Mapping label. Clicking toggles child visibility.
    Branch { expanded: bool },
    /// Image reference; the label is the bare key and the slot itself is
    /// resolved asynchronously, keyed by `reference`.
    Image { reference: String },
}

/// One addressable node in the rendered display tree.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderNode {
    pub path: NodePath,
    /// Complete display text for this line.
    pub label: String,
    pub kind: NodeKind,
    /// Nesting depth below the row root, for indentation.
    pub depth: usize,
    /// Present only on expanded Branch nodes.
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    /// True if clicking this node changes anything.
    pub fn is_interactive(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Truncatable { .. } | NodeKind::Branch { .. }
        )
    }
}

/// Render one (key, value) pair into a display node.
///
/// Pure with respect to its inputs: equal inputs and equal stored state
/// yield an equal tree. Dispatch order matters: the image-reference
/// check runs before the truncation check, so a text value like "/a" is
/// an image slot no matter how short it is.
pub fn render(
    key: &str,
    value: &DynamicValue,
    path: &NodePath,
    store: &NodeStateStore,
) -> RenderNode {
    render_at_depth(key, value, path, store, 0)
}

fn render_at_depth(
    key: &str,
    value: &DynamicValue,
    path: &NodePath,
    store: &NodeStateStore,
    depth: usize,
) -> RenderNode {
    match value {
        DynamicValue::Null => RenderNode {
            path: path.clone(),
            label: format!("{}: null", key),
            kind: NodeKind::Error,
            depth,
            children: Vec::new(),
        },
        DynamicValue::Text(text) if value.is_image_reference() => RenderNode {
            path: path.clone(),
            label: format!("{}:", key),
            kind: NodeKind::Image {
                reference: text.clone(),
            },
            depth,
            children: Vec::new(),
        },
        DynamicValue::Text(text) => {
            if text.chars().count() > TRUNCATE_THRESHOLD {
                let open = store.get(path).truncated_open;
                let label = if open {
                    format!("{}: {}", key, text)
                } else {
                    let head: String = text.chars().take(TRUNCATE_THRESHOLD).collect();
                    format!("{}: {}...", key, head)
                };
                RenderNode {
                    path: path.clone(),
                    label,
                    kind: NodeKind::Truncatable { open },
                    depth,
                    children: Vec::new(),
                }
            } else {
                RenderNode {
                    path: path.clone(),
                    label: format!("{}: {}", key, text),
                    kind: NodeKind::Static,
                    depth,
                    children: Vec::new(),
                }
            }
        }
        DynamicValue::Boolean(b) => RenderNode {
            path: path.clone(),
            label: format!("{}: {}", key, if *b { "Yes" } else { "No" }),
            kind: NodeKind::Static,
            depth,
            children: Vec::new(),
        },
        DynamicValue::Integer(_) | DynamicValue::Float(_) => RenderNode {
            path: path.clone(),
            label: format!("{}: {}", key, value.display()),
            kind: NodeKind::Static,
            depth,
            children: Vec::new(),
        },
        DynamicValue::Mapping(pairs) => {
            let expanded = store.get(path).expanded;
            let marker = if expanded {
                MARKER_EXPANDED
            } else {
                MARKER_COLLAPSED
            };
            let children = if expanded {
                pairs
                    .iter()
                    .map(|(nested_key, nested_value)| {
                        let child_path = path.child(nested_key);
                        render_at_depth(nested_key, nested_value, &child_path, store, depth + 1)
                    })
                    .collect()
            } else {
                Vec::new()
            };
            RenderNode {
                path: path.clone(),
                label: format!("{}{}", marker, key),
                kind: NodeKind::Branch { expanded },
                depth,
                children,
            }
        }
        // Sequences and anything else fall back to generic
        // stringification without recursing into elements.
        DynamicValue::Sequence(_) => RenderNode {
            path: path.clone(),
            label: format!("{}: {}", key, value.display()),
            kind: NodeKind::Static,
            depth,
            children: Vec::new(),
        },
    }
}
