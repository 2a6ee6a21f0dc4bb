//! Structural edits.
//!
//! Every edit is a pure function of the current tree and selection: it
//! either yields a new jointly valid `(tree, selection)` pair or declines
//! with `None`. Declining is not an error — boundary conditions (no
//! sibling to swap with, no enclosing collection to insert into) are
//! well-defined no-ops and must never corrupt the tree or record a
//! spurious history entry.

use std::sync::Arc;

use chisel_document::node::NodeKind;
use chisel_document::store::{self, Value};
use chisel_document::{canonical_number, DeclarationKind, Node, Path, Step};
use serde::{Deserialize, Serialize};

use crate::navigator::{navigate, Direction};
use crate::state::EditorState;

/// Vertical direction for structural moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Structural edit operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Edit {
    /// Insert a node into the closest enclosing collection. Object
    /// collections wrap the node as an empty-keyed property and select
    /// the new key; arrays and the program body select the new element.
    Insert { node: Node },

    /// Remove the element at the nearest indexable ancestor of the
    /// selection; with no such ancestor the whole document collapses to
    /// a null literal.
    Delete,

    /// Reorder the selected element relative to its sibling: relocate
    /// into a nested object, cross the collection boundary outward, or
    /// swap in place.
    Move { direction: MoveDirection },

    /// Replace the selected node, then refine the selection by
    /// `sub_selection`.
    Replace { node: Node, sub_selection: Path },

    /// Atomic replacement of the selected leaf's text.
    UpdateText { text: String },

    SetBoolean { value: bool },

    /// Float-parse the selected numeric literal, add `delta`,
    /// re-stringify.
    AddToNumber { delta: f64 },

    ToString,
    ToNumber,
    ToArray,
    ToObject,
    ToNull,

    SetDeclarationKind { kind: DeclarationKind },
}

impl Edit {
    /// Apply this edit. `None` means the edit declines to act.
    pub fn apply(&self, tree: &Node, selected: &Path) -> Option<EditorState> {
        match self {
            Edit::Insert { node } => apply_insert(tree, selected, node),
            Edit::Delete => apply_delete(tree, selected),
            Edit::Move { direction } => apply_move(tree, selected, *direction),
            Edit::Replace {
                node,
                sub_selection,
            } => apply_replace(tree, selected, node.clone(), sub_selection),
            Edit::UpdateText { text } => apply_update_text(tree, selected, text),
            Edit::SetBoolean { value } => {
                store::node_at(tree, selected)?;
                apply_replace(tree, selected, Node::boolean(*value), &Path::new())
            }
            Edit::AddToNumber { delta } => apply_add_to_number(tree, selected, *delta),
            Edit::ToString => {
                let node = store::node_at(tree, selected)?;
                apply_replace(tree, selected, Node::string(node.scalar_text()), &Path::new())
            }
            Edit::ToNumber => {
                let node = store::node_at(tree, selected)?;
                let value = node.scalar_text().parse::<f64>().unwrap_or(0.0);
                apply_replace(tree, selected, Node::number_from(value), &Path::new())
            }
            Edit::ToArray => {
                let node = store::node_at(tree, selected)?;
                let array = Node::ArrayExpression {
                    elements: vec![node],
                };
                apply_replace(tree, selected, array, &Path::new())
            }
            Edit::ToObject => {
                let node = store::node_at(tree, selected)?;
                let object = Node::ObjectExpression {
                    properties: vec![Arc::new(Node::ObjectProperty {
                        key: Arc::new(Node::string("")),
                        value: node,
                    })],
                };
                let sub = Path::new().field("properties").index(0).field("key");
                apply_replace(tree, selected, object, &sub)
            }
            Edit::ToNull => {
                store::node_at(tree, selected)?;
                apply_replace(tree, selected, Node::NullLiteral, &Path::new())
            }
            Edit::SetDeclarationKind { kind } => apply_set_declaration_kind(tree, selected, *kind),
        }
    }
}

/// Locate the collection an insert at `selected` targets, and the index
/// of the new element: the selected node's own collection (at its head)
/// when it is one, else the nearest enclosing collection, after the
/// selected element or at the append position for the `End` sentinel.
fn insertion_point(tree: &Node, selected: &Path) -> Option<(Path, usize)> {
    if let Some(node) = store::node_at(tree, selected) {
        if let Some(field) = node.collection_field() {
            return Some((selected.clone().field(field), 0));
        }
    }
    let position = selected.last_collection_position()?;
    let collection = selected.truncated(position + 1);
    let len = store::list_at(tree, &collection)?.len();
    let index = match selected.steps().get(position + 1) {
        Some(Step::Index(i)) => (i + 1).min(len),
        Some(Step::End) => len,
        _ => 0,
    };
    Some((collection, index))
}

fn apply_insert(tree: &Node, selected: &Path, node: &Node) -> Option<EditorState> {
    let (collection, index) = insertion_point(tree, selected)?;
    // The collection's owner decides the element shape.
    let owner = store::node_at(tree, &collection.popped(1))?;
    let (element, key_step) = match owner.kind() {
        NodeKind::Object => (
            Node::property(Node::string(""), node.clone()),
            Some(Step::field("key")),
        ),
        _ => (node.clone(), None),
    };
    let new_tree = store::update(tree, &collection, |value| match value {
        Value::List(mut list) => {
            let at = index.min(list.len());
            list.insert(at, Arc::new(element));
            Value::List(list)
        }
        other => other,
    })?;
    let mut new_selected = collection.index(index);
    if let Some(step) = key_step {
        new_selected.push(step);
    }
    Some(EditorState::new(new_tree, new_selected))
}

fn apply_delete(tree: &Node, selected: &Path) -> Option<EditorState> {
    // Sentinel selections: a bare sentinel deletes the document,
    // anywhere deeper it only clears the selection.
    if selected.ends_with_end() {
        if selected.len() <= 1 {
            return Some(EditorState::new(Node::NullLiteral, Path::new()));
        }
        return Some(EditorState::new(tree.clone(), Path::new()));
    }
    let Some(position) = selected.last_index_position() else {
        // The selection is the whole document.
        return Some(EditorState::new(Node::NullLiteral, Path::new()));
    };
    let element = selected.truncated(position + 1);
    let new_tree = store::delete(tree, &element)?;
    // Re-resolve a valid neighbor: exit the old slot, re-enter the new
    // collection.
    let owner = navigate(Direction::Up, tree, &element);
    let new_selected = navigate(Direction::Down, &new_tree, &owner);
    Some(EditorState::new(new_tree, new_selected))
}

fn apply_move(tree: &Node, selected: &Path, direction: MoveDirection) -> Option<EditorState> {
    let position = selected.last_index_position()?;
    let i = selected.steps()[position].as_index()?;
    let collection = selected.truncated(position);
    let sub = Path::from_steps(selected.steps()[position + 1..].to_vec());
    let list = store::list_at(tree, &collection)?;
    if i >= list.len() {
        return None;
    }

    let target = match direction {
        MoveDirection::Up => i.checked_sub(1),
        MoveDirection::Down => (i + 1 < list.len()).then_some(i + 1),
    };
    match target {
        Some(t) => {
            // Relocation into a nested object wins over a plain swap.
            if sibling_accepts_properties(&list[i], &list[t]) {
                return move_into_sibling(tree, &collection, i, t, direction, &sub);
            }
            let new_tree = store::update(tree, &collection, |value| match value {
                Value::List(mut l) => {
                    l.swap(i, t);
                    Value::List(l)
                }
                other => other,
            })?;
            Some(EditorState::new(new_tree, collection.index(t).joined(&sub)))
        }
        None => move_across_boundary(tree, &collection, i, direction, &sub),
    }
}

/// Both element and target are properties and the target's value is an
/// object the element can move into.
fn sibling_accepts_properties(element: &Node, target: &Node) -> bool {
    if !matches!(element, Node::ObjectProperty { .. }) {
        return false;
    }
    match target {
        Node::ObjectProperty { value, .. } => matches!(&**value, Node::ObjectExpression { .. }),
        _ => false,
    }
}

fn move_into_sibling(
    tree: &Node,
    collection: &Path,
    i: usize,
    t: usize,
    direction: MoveDirection,
    sub: &Path,
) -> Option<EditorState> {
    let list = store::list_at(tree, collection)?;
    let element = list.get(i)?.clone();
    let removed = store::update(tree, collection, |value| match value {
        Value::List(mut l) => {
            l.remove(i);
            Value::List(l)
        }
        other => other,
    })?;
    // The sibling shifts down when it sat after the removed slot.
    let sibling = if t > i { t - 1 } else { t };
    let nested = collection
        .clone()
        .index(sibling)
        .field("value")
        .field("properties");
    let len = store::list_at(&removed, &nested)?.len();
    let at = match direction {
        MoveDirection::Up => 0,
        MoveDirection::Down => len,
    };
    let new_tree = store::update(&removed, &nested, |value| match value {
        Value::List(mut l) => {
            l.insert(at.min(l.len()), element);
            Value::List(l)
        }
        other => other,
    })?;
    Some(EditorState::new(new_tree, nested.index(at).joined(sub)))
}

fn move_across_boundary(
    tree: &Node,
    collection: &Path,
    i: usize,
    direction: MoveDirection,
    sub: &Path,
) -> Option<EditorState> {
    // Only properties can hop out, and only when the enclosing object is
    // itself the value of a property in an outer object.
    let list = store::list_at(tree, collection)?;
    let element = list.get(i)?.clone();
    if !matches!(&*element, Node::ObjectProperty { .. }) {
        return None;
    }
    let owner = collection.popped(1);
    let steps = owner.steps();
    let n = steps.len();
    if n < 3 {
        return None;
    }
    let parent_index = match (&steps[n - 3], &steps[n - 2], &steps[n - 1]) {
        (Step::Field(outer), Step::Index(k), Step::Field(value))
            if outer.as_str() == "properties" && value.as_str() == "value" =>
        {
            *k
        }
        _ => return None,
    };
    let outer_collection = owner.truncated(n - 2);
    let at = match direction {
        MoveDirection::Up => parent_index,
        MoveDirection::Down => parent_index + 1,
    };
    let removed = store::update(tree, collection, |value| match value {
        Value::List(mut l) => {
            l.remove(i);
            Value::List(l)
        }
        other => other,
    })?;
    let new_tree = store::update(&removed, &outer_collection, |value| match value {
        Value::List(mut l) => {
            l.insert(at.min(l.len()), element);
            Value::List(l)
        }
        other => other,
    })?;
    Some(EditorState::new(
        new_tree,
        outer_collection.index(at).joined(sub),
    ))
}

fn apply_replace(
    tree: &Node,
    selected: &Path,
    node: Node,
    sub_selection: &Path,
) -> Option<EditorState> {
    if selected.ends_with_end() {
        return None;
    }
    // Property slots only hold properties, and properties belong nowhere
    // else; keep the tree well-formed.
    let property_slot = matches!(
        selected.steps(),
        [.., Step::Field(name), Step::Index(_)] if name.as_str() == "properties"
    );
    if property_slot != matches!(node, Node::ObjectProperty { .. }) {
        return None;
    }
    let new_tree = store::set(tree, selected, Value::Node(Arc::new(node)))?;
    Some(EditorState::new(new_tree, selected.joined(sub_selection)))
}

fn apply_update_text(tree: &Node, selected: &Path, text: &str) -> Option<EditorState> {
    let target = text_target(tree, selected)?;
    let new_tree = store::set(tree, &target, Value::Text(text.to_string()))?;
    Some(EditorState::new(new_tree, selected.clone()))
}

/// The text position a value edit addresses: the selection itself when
/// it already points at text, else the selected leaf's own text field.
fn text_target(tree: &Node, selected: &Path) -> Option<Path> {
    match store::get(tree, selected)? {
        Value::Text(_) => Some(selected.clone()),
        Value::Node(node) => match &*node {
            Node::StringLiteral { .. } | Node::NumericLiteral { .. } => {
                Some(selected.clone().field("value"))
            }
            Node::Identifier { .. } => Some(selected.clone().field("name")),
            _ => None,
        },
        Value::List(_) => None,
    }
}

fn apply_add_to_number(tree: &Node, selected: &Path, delta: f64) -> Option<EditorState> {
    let node = store::node_at(tree, selected)?;
    let Node::NumericLiteral { value } = &*node else {
        return None;
    };
    let current = canonical_number(value).parse::<f64>().unwrap_or(0.0);
    apply_replace(
        tree,
        selected,
        Node::number_from(current + delta),
        &Path::new(),
    )
}

fn apply_set_declaration_kind(
    tree: &Node,
    selected: &Path,
    kind: DeclarationKind,
) -> Option<EditorState> {
    let node = store::node_at(tree, selected)?;
    if !matches!(&*node, Node::VariableDeclaration { .. }) {
        return None;
    }
    let kind_path = selected.clone().field("kind");
    let new_tree = store::set(tree, &kind_path, Value::Text(kind.keyword().to_string()))?;
    Some(EditorState::new(new_tree, selected.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object_doc() -> (Node, Path) {
        // { "a": 1, "b": 2 } selected at property "a"
        let tree = Node::program(vec![Node::object(vec![
            Node::property(Node::string("a"), Node::number("1")),
            Node::property(Node::string("b"), Node::number("2")),
        ])]);
        let selected = Path::new().field("body").index(0).field("properties").index(0);
        (tree, selected)
    }

    #[test]
    fn insert_into_an_object_wraps_and_selects_the_key() {
        let (tree, selected) = object_doc();
        let state = Edit::Insert {
            node: Node::NullLiteral,
        }
        .apply(&tree, &selected)
        .unwrap();

        let properties = Path::new().field("body").index(0).field("properties");
        assert_eq!(store::list_at(&state.tree, &properties).unwrap().len(), 3);
        assert_eq!(state.selected, properties.clone().index(1).field("key"));
        assert_eq!(
            store::node_at(&state.tree, &properties.index(1)).unwrap().as_ref(),
            &Node::property(Node::string(""), Node::NullLiteral)
        );
    }

    #[test]
    fn insert_into_a_selected_collection_starts_at_its_head() {
        let tree = Node::program(vec![Node::array(vec![Node::number("1")])]);
        let selected = Path::new().field("body").index(0);
        let state = Edit::Insert {
            node: Node::boolean(true),
        }
        .apply(&tree, &selected)
        .unwrap();

        let elements = Path::new().field("body").index(0).field("elements");
        assert_eq!(state.selected, elements.clone().index(0));
        assert_eq!(
            store::node_at(&state.tree, &elements.index(0)).unwrap().as_ref(),
            &Node::boolean(true)
        );
    }

    #[test]
    fn insert_at_the_sentinel_appends() {
        let tree = Node::program(vec![Node::array(vec![Node::number("1")])]);
        let selected = Path::new().field("body").index(0).field("elements").end();
        let state = Edit::Insert {
            node: Node::number("2"),
        }
        .apply(&tree, &selected)
        .unwrap();

        let elements = Path::new().field("body").index(0).field("elements");
        assert_eq!(state.selected, elements.clone().index(1));
        assert_eq!(store::list_at(&state.tree, &elements).unwrap().len(), 2);
    }

    #[test]
    fn insert_without_an_enclosing_collection_declines() {
        let tree = Node::NullLiteral;
        assert_eq!(
            Edit::Insert {
                node: Node::number("1")
            }
            .apply(&tree, &Path::new()),
            None
        );
    }

    #[test]
    fn delete_removes_the_nearest_indexed_ancestor() {
        let (tree, _) = object_doc();
        // Selection sits on the key of property "b"; the property goes.
        let selected = Path::new()
            .field("body")
            .index(0)
            .field("properties")
            .index(1)
            .field("key");
        let state = Edit::Delete.apply(&tree, &selected).unwrap();

        let properties = Path::new().field("body").index(0).field("properties");
        assert_eq!(store::list_at(&state.tree, &properties).unwrap().len(), 1);
        assert_eq!(state.selected, properties.index(0));
        assert!(state.selection_is_valid());
    }

    #[test]
    fn delete_of_the_last_element_selects_the_sentinel() {
        let tree = Node::program(vec![Node::array(vec![Node::number("1")])]);
        let selected = Path::new().field("body").index(0).field("elements").index(0);
        let state = Edit::Delete.apply(&tree, &selected).unwrap();
        assert_eq!(
            state.selected,
            Path::new().field("body").index(0).field("elements").end()
        );
        assert!(state.selection_is_valid());
    }

    #[test]
    fn delete_without_an_index_collapses_the_document() {
        let tree = Node::program(vec![Node::number("1")]);
        let state = Edit::Delete.apply(&tree, &Path::new()).unwrap();
        assert_eq!(state.tree, Node::NullLiteral);
        assert_eq!(state.selected, Path::new());
    }

    #[test]
    fn delete_at_a_nested_sentinel_only_clears_the_selection() {
        let tree = Node::program(vec![Node::array(vec![])]);
        let selected = Path::new().field("body").index(0).field("elements").end();
        let state = Edit::Delete.apply(&tree, &selected).unwrap();
        assert_eq!(state.tree, tree);
        assert_eq!(state.selected, Path::new());
    }

    #[test]
    fn move_swaps_adjacent_siblings() {
        let (tree, selected) = object_doc();
        let state = Edit::Move {
            direction: MoveDirection::Down,
        }
        .apply(&tree, &selected)
        .unwrap();

        let properties = Path::new().field("body").index(0).field("properties");
        assert_eq!(state.selected, properties.clone().index(1));
        let first = store::node_at(&state.tree, &properties.clone().index(0)).unwrap();
        assert_eq!(
            first.as_ref(),
            &Node::property(Node::string("b"), Node::number("2"))
        );
    }

    #[test]
    fn move_keeps_a_deeper_sub_selection() {
        let (tree, selected) = object_doc();
        let key = selected.clone().field("key");
        let state = Edit::Move {
            direction: MoveDirection::Down,
        }
        .apply(&tree, &key)
        .unwrap();
        assert_eq!(
            state.selected,
            Path::new()
                .field("body")
                .index(0)
                .field("properties")
                .index(1)
                .field("key")
        );
    }

    #[test]
    fn move_at_a_boundary_without_an_outer_object_declines() {
        let tree = Node::program(vec![Node::array(vec![Node::number("1")])]);
        let selected = Path::new().field("body").index(0).field("elements").index(0);
        assert_eq!(
            Edit::Move {
                direction: MoveDirection::Down
            }
            .apply(&tree, &selected),
            None
        );
        assert_eq!(
            Edit::Move {
                direction: MoveDirection::Up
            }
            .apply(&tree, &selected),
            None
        );
    }

    #[test]
    fn move_relocates_a_property_into_a_nested_object() {
        // { "a": 1, "b": { "c": 2 } }: moving "a" down enters "b".
        let tree = Node::program(vec![Node::object(vec![
            Node::property(Node::string("a"), Node::number("1")),
            Node::property(
                Node::string("b"),
                Node::object(vec![Node::property(Node::string("c"), Node::number("2"))]),
            ),
        ])]);
        let selected = Path::new().field("body").index(0).field("properties").index(0);
        let state = Edit::Move {
            direction: MoveDirection::Down,
        }
        .apply(&tree, &selected)
        .unwrap();

        let outer = Path::new().field("body").index(0).field("properties");
        assert_eq!(store::list_at(&state.tree, &outer).unwrap().len(), 1);
        let nested = outer.index(0).field("value").field("properties");
        let list = store::list_at(&state.tree, &nested).unwrap();
        assert_eq!(list.len(), 2);
        // Moving down enters at the tail.
        assert_eq!(
            list[1].as_ref(),
            &Node::property(Node::string("a"), Node::number("1"))
        );
        assert_eq!(state.selected, nested.index(1));
    }

    #[test]
    fn move_hops_a_property_out_of_a_nested_object() {
        // { "a": { "b": 1 } }: moving "b" up lands before "a".
        let tree = Node::program(vec![Node::object(vec![Node::property(
            Node::string("a"),
            Node::object(vec![Node::property(Node::string("b"), Node::number("1"))]),
        )])]);
        let selected = Path::new()
            .field("body")
            .index(0)
            .field("properties")
            .index(0)
            .field("value")
            .field("properties")
            .index(0);
        let state = Edit::Move {
            direction: MoveDirection::Up,
        }
        .apply(&tree, &selected)
        .unwrap();

        let outer = Path::new().field("body").index(0).field("properties");
        let list = store::list_at(&state.tree, &outer).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(
            list[0].as_ref(),
            &Node::property(Node::string("b"), Node::number("1"))
        );
        assert_eq!(state.selected, outer.index(0));
        assert!(state.selection_is_valid());
    }

    #[test]
    fn replace_refines_the_selection() {
        let tree = Node::program(vec![Node::NullLiteral]);
        let selected = Path::new().field("body").index(0);
        let state = Edit::Replace {
            node: Node::number("4"),
            sub_selection: Path::new().field("value"),
        }
        .apply(&tree, &selected)
        .unwrap();
        assert_eq!(state.selected, selected.field("value"));
        assert!(state.selection_is_valid());
    }

    #[test]
    fn replace_keeps_property_slots_well_formed() {
        let (tree, selected) = object_doc();
        // A bare literal cannot stand in a property slot.
        assert_eq!(
            Edit::Replace {
                node: Node::number("9"),
                sub_selection: Path::new()
            }
            .apply(&tree, &selected),
            None
        );
    }

    #[test]
    fn coercions_carry_scalar_values() {
        let tree = Node::program(vec![Node::number("4.5")]);
        let selected = Path::new().field("body").index(0);

        let as_string = Edit::ToString.apply(&tree, &selected).unwrap();
        assert_eq!(
            store::node_at(&as_string.tree, &selected).unwrap().as_ref(),
            &Node::string("4.5")
        );

        let back = Edit::ToNumber.apply(&as_string.tree, &selected).unwrap();
        assert_eq!(
            store::node_at(&back.tree, &selected).unwrap().as_ref(),
            &Node::number("4.5")
        );
    }

    #[test]
    fn to_number_of_unparsable_text_yields_zero() {
        let tree = Node::program(vec![Node::string("")]);
        let selected = Path::new().field("body").index(0);
        let state = Edit::ToNumber.apply(&tree, &selected).unwrap();
        assert_eq!(
            store::node_at(&state.tree, &selected).unwrap().as_ref(),
            &Node::number("0")
        );
    }

    #[test]
    fn to_array_wraps_the_prior_node() {
        let tree = Node::program(vec![Node::string("x")]);
        let selected = Path::new().field("body").index(0);
        let state = Edit::ToArray.apply(&tree, &selected).unwrap();
        assert_eq!(
            store::node_at(&state.tree, &selected).unwrap().as_ref(),
            &Node::array(vec![Node::string("x")])
        );
    }

    #[test]
    fn to_object_wraps_and_selects_the_new_key() {
        let tree = Node::program(vec![Node::number("7")]);
        let selected = Path::new().field("body").index(0);
        let state = Edit::ToObject.apply(&tree, &selected).unwrap();
        assert_eq!(
            state.selected,
            selected.clone().field("properties").index(0).field("key")
        );
        assert_eq!(
            store::node_at(&state.tree, &selected).unwrap().as_ref(),
            &Node::object(vec![Node::property(Node::string(""), Node::number("7"))])
        );
    }

    #[test]
    fn add_to_number_requires_a_numeric_selection() {
        let tree = Node::program(vec![Node::number("41")]);
        let selected = Path::new().field("body").index(0);
        let state = Edit::AddToNumber { delta: 1.0 }.apply(&tree, &selected).unwrap();
        assert_eq!(
            store::node_at(&state.tree, &selected).unwrap().as_ref(),
            &Node::number("42")
        );

        let strings = Node::program(vec![Node::string("x")]);
        assert_eq!(Edit::AddToNumber { delta: 1.0 }.apply(&strings, &selected), None);
    }

    #[test]
    fn update_text_edits_the_leaf_from_node_or_field_selection() {
        let tree = Node::program(vec![Node::string("old")]);
        let node_selected = Path::new().field("body").index(0);
        let state = Edit::UpdateText {
            text: "new".to_string(),
        }
        .apply(&tree, &node_selected)
        .unwrap();
        assert_eq!(
            store::node_at(&state.tree, &node_selected).unwrap().as_ref(),
            &Node::string("new")
        );

        let field_selected = node_selected.clone().field("value");
        let state = Edit::UpdateText {
            text: "direct".to_string(),
        }
        .apply(&tree, &field_selected)
        .unwrap();
        assert_eq!(
            store::node_at(&state.tree, &node_selected).unwrap().as_ref(),
            &Node::string("direct")
        );
        assert_eq!(state.selected, field_selected);
    }

    #[test]
    fn set_declaration_kind_rewrites_the_keyword() {
        let tree = Node::program(vec![Node::declaration(
            DeclarationKind::Let,
            "x",
            Node::number("1"),
        )]);
        let selected = Path::new().field("body").index(0);
        let state = Edit::SetDeclarationKind {
            kind: DeclarationKind::Const,
        }
        .apply(&tree, &selected)
        .unwrap();
        assert_eq!(
            store::node_at(&state.tree, &selected).unwrap().as_ref(),
            &Node::declaration(DeclarationKind::Const, "x", Node::number("1"))
        );

        // Not a declaration: decline.
        let other = Node::program(vec![Node::number("1")]);
        assert_eq!(
            Edit::SetDeclarationKind {
                kind: DeclarationKind::Var
            }
            .apply(&other, &selected),
            None
        );
    }
}
