//! # Chisel Editor
//!
//! Structural editing engine for Chisel documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: raw value / text → tree           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: selection + mutations + history     │
//! │  - Navigate by collection/field shape       │
//! │  - Apply structural edits with re-selection │
//! │  - Record bounded undo/redo snapshots       │
//! │  - Resolve key events, clipboard traffic    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: tree → generated text             │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The tree is always well-formed**: every edit yields a jointly
//!    valid (tree, selection) pair or declines as a no-op
//! 2. **Everything is a value**: trees, paths and states compare by
//!    value; history entries are whole snapshots
//! 3. **Boundaries are no-ops, not errors**: navigation and moves at
//!    collection edges never corrupt state or record spurious entries
//! 4. **Syntax is a service**: parsing and rendering stay behind the
//!    [`chisel_document::Syntax`] seam
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chisel_document::{json, JsonSyntax};
//! use chisel_editor::{Editor, KeyEvent};
//!
//! let root = json::document_from_value(&serde_json::json!({ "a": 1 }));
//! let mut editor = Editor::new(root, JsonSyntax);
//! editor.set_on_change(|text| println!("{text}"));
//!
//! editor.handle_key(&KeyEvent::new("ArrowDown"));
//! editor.dispatch("INSERT", None)?;
//! editor.undo();
//! ```

mod actions;
mod errors;
mod history;
mod keymap;
mod mutations;
mod navigator;
mod state;

pub use actions::{ChangeSink, Editor};
pub use errors::EditorError;
pub use history::{Commit, History, MAX_HISTORY};
pub use keymap::{default_keymap, resolve, Action, KeyEvent, KeyRule, Modifier, ModifierSpec};
pub use mutations::{Edit, MoveDirection};
pub use navigator::{navigate, Direction};
pub use state::{initial_selection, EditorState};

// Re-export common types for convenience
pub use chisel_document::{DeclarationKind, Node, NodeKind, Path, Step};
