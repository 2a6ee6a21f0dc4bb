//! The dispatch surface: named actions in, committed edits out.
//!
//! An [`Editor`] owns the history, the keymap table and the syntax
//! service. External events reach it three ways: resolved key events
//! ([`Editor::handle_key`]), direct action dispatch
//! ([`Editor::dispatch`]), and clipboard traffic ([`Editor::copy`],
//! [`Editor::cut`], [`Editor::paste`]). Every mutation funnels through
//! [`crate::history::History::commit`], and the change listener fires
//! exactly once per tree-changing commit with the generated text of the
//! new tree.

use std::sync::Arc;

use chisel_document::store;
use chisel_document::store::Value;
use chisel_document::{json, DeclarationKind, Node, Path, Syntax};
use serde_json::Value as JsonValue;

use crate::errors::EditorError;
use crate::history::{Commit, History};
use crate::keymap::{default_keymap, resolve, KeyEvent, KeyRule};
use crate::mutations::{Edit, MoveDirection};
use crate::navigator::{navigate, Direction};
use crate::state::{initial_selection, EditorState};

/// Change listener invoked with the rendered document text.
pub type ChangeSink = Box<dyn FnMut(&str)>;

pub struct Editor<S: Syntax> {
    history: History,
    keymap: Vec<KeyRule>,
    syntax: S,
    on_change: Option<ChangeSink>,
}

impl<S: Syntax> Editor<S> {
    /// Build an editor over an already parsed document root, selected at
    /// the canonical root position.
    pub fn new(root: Node, syntax: S) -> Self {
        let selected = initial_selection(&root);
        Self {
            history: History::new(EditorState::new(root, selected)),
            keymap: default_keymap(),
            syntax,
            on_change: None,
        }
    }

    /// Swap in a host-supplied keymap table.
    pub fn with_keymap(mut self, keymap: Vec<KeyRule>) -> Self {
        self.keymap = keymap;
        self
    }

    /// Register the change listener. It fires once per tree-changing
    /// commit; selection-only commits stay quiet.
    pub fn set_on_change(&mut self, sink: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(sink));
    }

    pub fn state(&self) -> &EditorState {
        self.history.current()
    }

    pub fn tree(&self) -> &Node {
        &self.state().tree
    }

    pub fn selected(&self) -> &Path {
        &self.state().selected
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn selected_node(&self) -> Option<Arc<Node>> {
        store::node_at(self.tree(), self.selected())
    }

    /// Resolve a key event against the keymap and run the action.
    /// Unknown action names in the table are logged and swallowed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Commit {
        // Digit keys coerce a selected null directly, bypassing the
        // table; the selection lands on the new value text so typing can
        // continue.
        if event.modifiers.is_empty() && is_digit_key(&event.key) {
            if let Some(node) = self.selected_node() {
                if matches!(&*node, Node::NullLiteral) {
                    let digit = event.key.clone();
                    return self.commit_edit(Edit::Replace {
                        node: Node::number(digit),
                        sub_selection: Path::new().field("value"),
                    });
                }
            }
        }
        let node = self.selected_node();
        let selected = self.selected().clone();
        let Some(action) = resolve(&self.keymap, event, node.as_deref(), &selected).cloned() else {
            return Commit::Noop;
        };
        match self.dispatch(&action.name, action.param.as_ref()) {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!(key = %event.key, %error, "dropping key event");
                Commit::Noop
            }
        }
    }

    /// Run a named action. Unknown names report an error and leave the
    /// state untouched.
    pub fn dispatch(
        &mut self,
        name: &str,
        param: Option<&JsonValue>,
    ) -> Result<Commit, EditorError> {
        let outcome = match name {
            "UP" => self.navigate_commit(Direction::Up),
            "DOWN" => self.navigate_commit(Direction::Down),
            "LEFT" => self.navigate_commit(Direction::Left),
            "RIGHT" => self.navigate_commit(Direction::Right),
            "INSERT" => {
                let node = param.map(json::from_value).unwrap_or(Node::NullLiteral);
                self.commit_edit(Edit::Insert { node })
            }
            "DELETE" => self.commit_edit(Edit::Delete),
            "MOVE_UP" => self.commit_edit(Edit::Move {
                direction: MoveDirection::Up,
            }),
            "MOVE_DOWN" => self.commit_edit(Edit::Move {
                direction: MoveDirection::Down,
            }),
            "UNDO" => self.undo(),
            "REDO" => self.redo(),
            "SET_BOOLEAN" => {
                let value = param.and_then(JsonValue::as_bool).unwrap_or(true);
                self.commit_edit(Edit::SetBoolean { value })
            }
            "ADD_TO_NUMBER" => {
                let delta = param.and_then(JsonValue::as_f64).unwrap_or(1.0);
                self.commit_edit(Edit::AddToNumber { delta })
            }
            "UPDATE_TEXT" => {
                let text = param
                    .and_then(JsonValue::as_str)
                    .unwrap_or_default()
                    .to_string();
                self.commit_edit(Edit::UpdateText { text })
            }
            "TO_STRING" => self.commit_edit(Edit::ToString),
            "TO_NUMBER" => self.commit_edit(Edit::ToNumber),
            "TO_ARRAY" => self.commit_edit(Edit::ToArray),
            "TO_OBJECT" => self.commit_edit(Edit::ToObject),
            "TO_NULL" => self.commit_edit(Edit::ToNull),
            "CHANGE_DECLARATION_KIND" => {
                match param
                    .and_then(JsonValue::as_str)
                    .and_then(DeclarationKind::from_keyword)
                {
                    Some(kind) => self.commit_edit(Edit::SetDeclarationKind { kind }),
                    None => Commit::Noop,
                }
            }
            _ => {
                tracing::warn!(action = name, "unknown action");
                return Err(EditorError::UnknownAction(name.to_string()));
            }
        };
        Ok(outcome)
    }

    /// Apply a text transform to the selected leaf's textual content.
    pub fn update_value(&mut self, f: impl FnOnce(&str) -> String) -> Commit {
        let Some(current) = self.selected_text() else {
            return Commit::Noop;
        };
        let text = f(&current);
        self.commit_edit(Edit::UpdateText { text })
    }

    fn selected_text(&self) -> Option<String> {
        match store::get(self.tree(), self.selected())? {
            Value::Text(text) => Some(text),
            Value::Node(node) => node.text().map(str::to_string),
            Value::List(_) => None,
        }
    }

    /// Step back one state. Fires the change listener when the tree
    /// differs.
    pub fn undo(&mut self) -> Commit {
        let before = self.history.current().tree.clone();
        if self.history.undo().is_none() {
            return Commit::Noop;
        }
        self.after_history_step(&before)
    }

    /// Step forward into the undone states, if any.
    pub fn redo(&mut self) -> Commit {
        let before = self.history.current().tree.clone();
        if self.history.redo().is_none() {
            return Commit::Noop;
        }
        self.after_history_step(&before)
    }

    fn after_history_step(&mut self, before: &Node) -> Commit {
        if self.history.current().tree != *before {
            self.emit_change();
            Commit::TreeChanged
        } else {
            Commit::SelectionChanged
        }
    }

    /// Rendered text of the effective selection: the selected element,
    /// or the enclosing element when the selection is the `End`
    /// sentinel. Editable leaves return `None` and are left to the
    /// host's own text selection.
    pub fn copy(&self) -> Option<String> {
        let target = self.effective_selection()?;
        let node = store::node_at(self.tree(), &target)?;
        if node.is_editable_leaf() {
            return None;
        }
        Some(self.syntax.generate(&node))
    }

    fn effective_selection(&self) -> Option<Path> {
        let selected = self.selected();
        if selected.ends_with_end() {
            // Back off the collection-field/sentinel pair to the
            // enclosing element.
            if selected.len() < 2 {
                return None;
            }
            Some(selected.popped(2))
        } else {
            Some(selected.clone())
        }
    }

    /// Copy, then delete the exported element.
    pub fn cut(&mut self) -> Option<String> {
        let text = self.copy()?;
        self.commit_edit(Edit::Delete);
        Some(text)
    }

    /// Parse clipboard text and insert the result at the selection.
    /// Parse failures abort with the state untouched.
    pub fn paste(&mut self, source: &str) -> Result<Commit, EditorError> {
        let node = match self.syntax.parse(source) {
            Ok(node) => node,
            Err(error) => {
                tracing::warn!(%error, "ignoring paste");
                return Err(error.into());
            }
        };
        Ok(self.commit_edit(Edit::Insert { node }))
    }

    fn navigate_commit(&mut self, direction: Direction) -> Commit {
        self.commit_with(|tree, selected| {
            let next = navigate(direction, tree, selected);
            if next == *selected {
                None
            } else {
                Some(EditorState::new(tree.clone(), next))
            }
        })
    }

    fn commit_edit(&mut self, edit: Edit) -> Commit {
        self.commit_with(|tree, selected| edit.apply(tree, selected))
    }

    fn commit_with<F>(&mut self, update: F) -> Commit
    where
        F: FnOnce(&Node, &Path) -> Option<EditorState>,
    {
        let outcome = self.history.commit(update);
        if outcome == Commit::TreeChanged {
            self.emit_change();
        }
        outcome
    }

    fn emit_change(&mut self) {
        let Some(sink) = self.on_change.as_mut() else {
            return;
        };
        let text = self.syntax.generate(&self.history.current().tree);
        sink(&text);
    }
}

fn is_digit_key(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_ascii_digit()
    )
}
