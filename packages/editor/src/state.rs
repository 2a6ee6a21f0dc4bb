//! Editor state snapshots.

use chisel_document::{store, Node, Path};

/// A (tree, selection) snapshot. History entries are whole states and
/// compare by value.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub tree: Node,
    pub selected: Path,
}

impl EditorState {
    pub fn new(tree: Node, selected: Path) -> Self {
        Self { tree, selected }
    }

    /// Selection invariant: the path resolves in the tree, or ends with
    /// the `End` sentinel of a collection that does.
    pub fn selection_is_valid(&self) -> bool {
        store::selection_resolves(&self.tree, &self.selected)
    }
}

/// Canonical selection for a fresh document: the first slot of the
/// program body, the body's append position when it is empty, the root
/// for anything that is not a program.
pub fn initial_selection(root: &Node) -> Path {
    match root {
        Node::Program { body } if body.is_empty() => Path::new().field("body").end(),
        Node::Program { .. } => Path::new().field("body").index(0),
        _ => Path::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_selection_enters_the_body() {
        let root = Node::program(vec![Node::NullLiteral]);
        assert_eq!(initial_selection(&root), Path::new().field("body").index(0));

        let empty = Node::program(vec![]);
        assert_eq!(initial_selection(&empty), Path::new().field("body").end());

        assert_eq!(initial_selection(&Node::NullLiteral), Path::new());
    }

    #[test]
    fn selection_validity_tracks_the_tree() {
        let state = EditorState::new(
            Node::program(vec![Node::array(vec![])]),
            Path::new().field("body").index(0),
        );
        assert!(state.selection_is_valid());

        let stale = EditorState::new(state.tree.clone(), Path::new().field("body").index(3));
        assert!(!stale.selection_is_valid());

        let sentinel = EditorState::new(
            state.tree.clone(),
            Path::new().field("body").index(0).field("elements").end(),
        );
        assert!(sentinel.selection_is_valid());
    }
}
