//! Bounded undo/redo history over whole editor states.
//!
//! The deque holds the current state at its head plus up to 99 older
//! states; the redo stack grows only through [`History::undo`] and is
//! cleared whenever an edit records a new state.

use std::collections::VecDeque;

use chisel_document::store::{self, Value};
use chisel_document::{canonical_number, Node, Path, Step};

use crate::state::EditorState;

/// Maximum retained states, current included.
pub const MAX_HISTORY: usize = 100;

/// Outcome of a commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Nothing changed; nothing was recorded.
    Noop,
    /// Only the selection moved; recorded, but change listeners stay
    /// quiet.
    SelectionChanged,
    /// The tree itself changed; change listeners should fire.
    TreeChanged,
}

#[derive(Debug)]
pub struct History {
    /// Past states, current first. Never empty.
    entries: VecDeque<EditorState>,
    /// States undone from the head, most recent last.
    future: Vec<EditorState>,
}

impl History {
    pub fn new(initial: EditorState) -> Self {
        let mut entries = VecDeque::new();
        entries.push_front(initial);
        Self {
            entries,
            future: Vec::new(),
        }
    }

    pub fn current(&self) -> &EditorState {
        // The deque is never empty.
        &self.entries[0]
    }

    /// Number of retained states, current included.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn can_undo(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Oldest retained state, for inspection.
    pub fn oldest(&self) -> &EditorState {
        &self.entries[self.entries.len() - 1]
    }

    /// Run `update` against the current state and record the result.
    ///
    /// Before the update runs, a numeric literal whose `"value"` text the
    /// previous selection was editing is re-normalized, and a selection
    /// that no longer resolves (and is not the `End` sentinel) falls back
    /// to the empty path. The update declining (`None`) merges back to
    /// that prepared state, so the preparation itself can be what gets
    /// recorded. A result equal to the previous state records nothing.
    pub fn commit<F>(&mut self, update: F) -> Commit
    where
        F: FnOnce(&Node, &Path) -> Option<EditorState>,
    {
        let previous = self.current().clone();
        let base = prepare(&previous);
        let next = update(&base.tree, &base.selected).unwrap_or_else(|| base.clone());
        if next == previous {
            return Commit::Noop;
        }
        let tree_changed = next.tree != previous.tree;
        self.entries.push_front(next);
        self.entries.truncate(MAX_HISTORY);
        self.future.clear();
        if tree_changed {
            Commit::TreeChanged
        } else {
            Commit::SelectionChanged
        }
    }

    /// Step back one state. No-op when only the current state remains.
    pub fn undo(&mut self) -> Option<&EditorState> {
        if self.entries.len() < 2 {
            return None;
        }
        let head = self.entries.pop_front()?;
        self.future.push(head);
        Some(self.current())
    }

    /// Step forward into the undone states, if any.
    pub fn redo(&mut self) -> Option<&EditorState> {
        let state = self.future.pop()?;
        self.entries.push_front(state);
        Some(self.current())
    }
}

/// Commit pre-step. Normalization is deliberately tied to commit time
/// and keyed off the previous selection: partial numeric text survives
/// pure navigation until the next commit begins.
fn prepare(state: &EditorState) -> EditorState {
    let mut tree = state.tree.clone();
    if let Some(Step::Field(name)) = state.selected.last() {
        if name.as_str() == "value" {
            let owner = state.selected.popped(1);
            if let Some(node) = store::node_at(&tree, &owner) {
                if let Node::NumericLiteral { value } = &*node {
                    let canonical = canonical_number(value);
                    if canonical != *value {
                        if let Some(updated) =
                            store::set(&tree, &state.selected, Value::Text(canonical))
                        {
                            tree = updated;
                        }
                    }
                }
            }
        }
    }
    let selected = if state.selected.ends_with_end() || store::resolves(&tree, &state.selected) {
        state.selected.clone()
    } else {
        Path::new()
    };
    EditorState::new(tree, selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_state(text: &str) -> EditorState {
        EditorState::new(
            Node::program(vec![Node::number(text)]),
            Path::new().field("body").index(0),
        )
    }

    #[test]
    fn commit_records_tree_changes() {
        let mut history = History::new(numeric_state("1"));
        let outcome = history.commit(|tree, selected| {
            crate::mutations::Edit::AddToNumber { delta: 1.0 }.apply(tree, selected)
        });
        assert_eq!(outcome, Commit::TreeChanged);
        assert_eq!(history.depth(), 2);
    }

    #[test]
    fn commit_records_selection_only_changes_quietly() {
        let mut history = History::new(numeric_state("1"));
        let outcome = history.commit(|tree, _| {
            Some(EditorState::new(tree.clone(), Path::new().field("body").end()))
        });
        assert_eq!(outcome, Commit::SelectionChanged);
        assert_eq!(history.depth(), 2);
    }

    #[test]
    fn declined_and_equal_updates_record_nothing() {
        let mut history = History::new(numeric_state("1"));
        assert_eq!(history.commit(|_, _| None), Commit::Noop);
        let current = history.current().clone();
        assert_eq!(
            history.commit(move |_, _| Some(current)),
            Commit::Noop
        );
        assert_eq!(history.depth(), 1);
    }

    #[test]
    fn undo_and_redo_walk_the_states_exactly() {
        let mut history = History::new(numeric_state("1"));
        let first = history.current().clone();
        history.commit(|tree, selected| {
            crate::mutations::Edit::AddToNumber { delta: 1.0 }.apply(tree, selected)
        });
        let second = history.current().clone();

        assert_eq!(history.undo(), Some(&first));
        assert!(history.can_redo());
        assert_eq!(history.redo(), Some(&second));
        assert!(!history.can_redo());

        // Nothing older than the initial state.
        history.undo();
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn a_new_commit_clears_the_future() {
        let mut history = History::new(numeric_state("1"));
        history.commit(|tree, selected| {
            crate::mutations::Edit::AddToNumber { delta: 1.0 }.apply(tree, selected)
        });
        history.undo();
        assert!(history.can_redo());

        history.commit(|tree, selected| {
            crate::mutations::Edit::AddToNumber { delta: 5.0 }.apply(tree, selected)
        });
        assert!(!history.can_redo());
    }

    #[test]
    fn the_cap_drops_the_oldest_states() {
        let mut history = History::new(numeric_state("0"));
        for _ in 0..(MAX_HISTORY + 1) {
            history.commit(|tree, selected| {
                crate::mutations::Edit::AddToNumber { delta: 1.0 }.apply(tree, selected)
            });
        }
        assert_eq!(history.depth(), MAX_HISTORY);
        // 102 states existed; the two oldest are gone.
        assert_eq!(history.oldest(), &numeric_state("2"));
    }

    #[test]
    fn prepare_normalizes_numeric_text_left_by_editing() {
        let state = EditorState::new(
            Node::program(vec![Node::number("12.")]),
            Path::new().field("body").index(0).field("value"),
        );
        let mut history = History::new(state);
        // The declined update still records the normalization delta.
        let outcome = history.commit(|_, _| None);
        assert_eq!(outcome, Commit::TreeChanged);
        assert_eq!(
            history.current().tree,
            Node::program(vec![Node::number("12")])
        );
    }

    #[test]
    fn prepare_drops_a_stale_selection() {
        let state = EditorState::new(
            Node::program(vec![Node::number("1")]),
            Path::new().field("body").index(9),
        );
        let mut history = History::new(state);
        let outcome = history.commit(|_, _| None);
        assert_eq!(outcome, Commit::SelectionChanged);
        assert_eq!(history.current().selected, Path::new());
    }

    #[test]
    fn prepare_keeps_a_sentinel_selection() {
        let state = EditorState::new(
            Node::program(vec![]),
            Path::new().field("body").end(),
        );
        let mut history = History::new(state.clone());
        assert_eq!(history.commit(|_, _| None), Commit::Noop);
        assert_eq!(history.current(), &state);
    }
}
