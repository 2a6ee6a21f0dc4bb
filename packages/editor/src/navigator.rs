//! Selection navigation.
//!
//! All four directions are pure functions of the tree and the current
//! selection; a move with no valid target returns the selection
//! unchanged.

use chisel_document::node::NodeKind;
use chisel_document::{store, Node, Path, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Compute the selection one step in `direction`.
pub fn navigate(direction: Direction, tree: &Node, selected: &Path) -> Path {
    match direction {
        Direction::Down => descend(tree, selected),
        Direction::Up => ascend(selected),
        Direction::Left => lateral(tree, selected, false),
        Direction::Right => lateral(tree, selected, true),
    }
}

fn descend(tree: &Node, selected: &Path) -> Path {
    let Some(node) = store::node_at(tree, selected) else {
        return selected.clone();
    };
    match node.kind() {
        NodeKind::Array | NodeKind::Object | NodeKind::Program => {
            let Some(field) = node.collection_field() else {
                return selected.clone();
            };
            let empty = node.collection().map(|c| c.is_empty()).unwrap_or(true);
            if empty {
                selected.clone().field(field).end()
            } else {
                selected.clone().field(field).index(0)
            }
        }
        NodeKind::Property => selected.clone().field("value"),
        NodeKind::Declaration => selected.clone().field("init"),
        // Leaves have nothing to enter.
        NodeKind::Null
        | NodeKind::Boolean
        | NodeKind::Number
        | NodeKind::String
        | NodeKind::Identifier => selected.clone(),
    }
}

fn ascend(selected: &Path) -> Path {
    match selected.steps() {
        [] => selected.clone(),
        // An element slot exits past its collection field to the owner.
        [.., Step::Field(_), Step::Index(_) | Step::End] => selected.popped(2),
        [..] => selected.popped(1),
    }
}

fn lateral(tree: &Node, selected: &Path, to_right: bool) -> Path {
    let Some(position) = selected.last_collection_position() else {
        return selected.clone();
    };
    let collection = selected.truncated(position + 1);
    let Some(list) = store::list_at(tree, &collection) else {
        return selected.clone();
    };
    let len = list.len();
    match (selected.steps().get(position + 1), to_right) {
        (Some(Step::Index(i)), true) => {
            if i + 1 < len {
                collection.index(i + 1)
            } else if i + 1 == len {
                collection.end()
            } else {
                selected.clone()
            }
        }
        (Some(&Step::Index(i)), false) => {
            if i == 0 {
                selected.clone()
            } else {
                collection.index(i - 1)
            }
        }
        (Some(Step::End), false) if len > 0 => collection.index(len - 1),
        _ => selected.clone(),
    }
}
