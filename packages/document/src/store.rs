//! Persistent, path-addressed reads and writes over the document tree.
//!
//! All operations are pure: writes rebuild only the nodes along the path
//! spine and share every untouched subtree through its `Arc` edge. A path
//! that does not resolve yields `None`, which callers treat as a
//! structural no-op.
//!
//! Paths can address three shapes of position, captured by [`Value`]:
//! nodes, element collections (the `"elements"` / `"properties"` /
//! `"body"` fields), and editable text (the `"value"` of a literal, an
//! identifier's `"name"`, a declaration's `"kind"`). The `End` sentinel
//! addresses no existing position and never resolves here; selection
//! validity for sentinel paths is checked by [`selection_resolves`].

use std::sync::Arc;

use crate::node::{DeclarationKind, Node};
use crate::path::{Path, Step};

/// A value read from, or written to, a tree position.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Node(Arc<Node>),
    List(Vec<Arc<Node>>),
    Text(String),
}

/// Borrowed view of one field of a node.
enum FieldRef<'a> {
    Node(&'a Arc<Node>),
    List(&'a [Arc<Node>]),
    Text(&'a str),
}

fn field_of<'a>(node: &'a Node, name: &str) -> Option<FieldRef<'a>> {
    match (node, name) {
        (Node::Program { body }, "body") => Some(FieldRef::List(body)),
        (Node::ArrayExpression { elements }, "elements") => Some(FieldRef::List(elements)),
        (Node::ObjectExpression { properties }, "properties") => Some(FieldRef::List(properties)),
        (Node::ObjectProperty { key, .. }, "key") => Some(FieldRef::Node(key)),
        (Node::ObjectProperty { value, .. }, "value") => Some(FieldRef::Node(value)),
        (Node::VariableDeclaration { id, .. }, "id") => Some(FieldRef::Node(id)),
        (Node::VariableDeclaration { init, .. }, "init") => Some(FieldRef::Node(init)),
        (Node::VariableDeclaration { kind, .. }, "kind") => Some(FieldRef::Text(kind.keyword())),
        (Node::StringLiteral { value }, "value") => Some(FieldRef::Text(value)),
        (Node::NumericLiteral { value }, "value") => Some(FieldRef::Text(value)),
        (Node::Identifier { name }, "name") => Some(FieldRef::Text(name)),
        _ => None,
    }
}

fn with_node_field(node: &Node, name: &str, new: Arc<Node>) -> Option<Node> {
    match (node, name) {
        (Node::ObjectProperty { value, .. }, "key") => Some(Node::ObjectProperty {
            key: new,
            value: value.clone(),
        }),
        (Node::ObjectProperty { key, .. }, "value") => Some(Node::ObjectProperty {
            key: key.clone(),
            value: new,
        }),
        (Node::VariableDeclaration { kind, init, .. }, "id") => Some(Node::VariableDeclaration {
            kind: *kind,
            id: new,
            init: init.clone(),
        }),
        (Node::VariableDeclaration { kind, id, .. }, "init") => Some(Node::VariableDeclaration {
            kind: *kind,
            id: id.clone(),
            init: new,
        }),
        _ => None,
    }
}

fn with_list_field(node: &Node, name: &str, new: Vec<Arc<Node>>) -> Option<Node> {
    match (node, name) {
        (Node::Program { .. }, "body") => Some(Node::Program { body: new }),
        (Node::ArrayExpression { .. }, "elements") => Some(Node::ArrayExpression { elements: new }),
        (Node::ObjectExpression { .. }, "properties") => {
            Some(Node::ObjectExpression { properties: new })
        }
        _ => None,
    }
}

fn with_text_field(node: &Node, name: &str, text: &str) -> Option<Node> {
    match (node, name) {
        (Node::StringLiteral { .. }, "value") => Some(Node::StringLiteral { value: text.into() }),
        (Node::NumericLiteral { .. }, "value") => Some(Node::NumericLiteral { value: text.into() }),
        (Node::Identifier { .. }, "name") => Some(Node::Identifier { name: text.into() }),
        (Node::VariableDeclaration { id, init, .. }, "kind") => DeclarationKind::from_keyword(text)
            .map(|kind| Node::VariableDeclaration {
                kind,
                id: id.clone(),
                init: init.clone(),
            }),
        _ => None,
    }
}

/// Read the value at `path`. The empty path yields the root node.
pub fn get(root: &Node, path: &Path) -> Option<Value> {
    get_in(root, path.steps())
}

fn get_in(node: &Node, steps: &[Step]) -> Option<Value> {
    let Some((first, rest)) = steps.split_first() else {
        return Some(Value::Node(Arc::new(node.clone())));
    };
    let Step::Field(name) = first else {
        // Indices and the sentinel only occur inside a collection field.
        return None;
    };
    match field_of(node, name)? {
        FieldRef::Node(child) => {
            if rest.is_empty() {
                Some(Value::Node(child.clone()))
            } else {
                get_in(child, rest)
            }
        }
        FieldRef::List(list) => get_in_list(list, rest),
        FieldRef::Text(text) => {
            if rest.is_empty() {
                Some(Value::Text(text.to_string()))
            } else {
                None
            }
        }
    }
}

fn get_in_list(list: &[Arc<Node>], steps: &[Step]) -> Option<Value> {
    let Some((first, rest)) = steps.split_first() else {
        return Some(Value::List(list.to_vec()));
    };
    match first {
        Step::Index(i) => {
            let child = list.get(*i)?;
            if rest.is_empty() {
                Some(Value::Node(child.clone()))
            } else {
                get_in(child, rest)
            }
        }
        // The sentinel addresses no existing position.
        Step::End => None,
        Step::Field(_) => None,
    }
}

/// Apply `f` to the value at `path`, rebuilding the spine. The
/// replacement must keep the position's shape; `None` when the path does
/// not resolve or the shape would change.
pub fn update<F>(root: &Node, path: &Path, f: F) -> Option<Node>
where
    F: FnOnce(Value) -> Value,
{
    update_in(root, path.steps(), f)
}

fn update_in<F>(node: &Node, steps: &[Step], f: F) -> Option<Node>
where
    F: FnOnce(Value) -> Value,
{
    let Some((first, rest)) = steps.split_first() else {
        return match f(Value::Node(Arc::new(node.clone()))) {
            Value::Node(new) => Some((*new).clone()),
            _ => None,
        };
    };
    let Step::Field(name) = first else {
        return None;
    };
    match field_of(node, name)? {
        FieldRef::Node(child) => {
            let new_child = if rest.is_empty() {
                match f(Value::Node(child.clone())) {
                    Value::Node(new) => new,
                    _ => return None,
                }
            } else {
                Arc::new(update_in(child, rest, f)?)
            };
            with_node_field(node, name, new_child)
        }
        FieldRef::List(list) => {
            let new_list = update_list(list, rest, f)?;
            with_list_field(node, name, new_list)
        }
        FieldRef::Text(text) => {
            if !rest.is_empty() {
                return None;
            }
            match f(Value::Text(text.to_string())) {
                Value::Text(new) => with_text_field(node, name, &new),
                _ => None,
            }
        }
    }
}

fn update_list<F>(list: &[Arc<Node>], steps: &[Step], f: F) -> Option<Vec<Arc<Node>>>
where
    F: FnOnce(Value) -> Value,
{
    let Some((first, rest)) = steps.split_first() else {
        return match f(Value::List(list.to_vec())) {
            Value::List(new) => Some(new),
            _ => None,
        };
    };
    let i = first.as_index()?;
    let child = list.get(i)?;
    let new_child = if rest.is_empty() {
        match f(Value::Node(child.clone())) {
            Value::Node(new) => new,
            _ => return None,
        }
    } else {
        Arc::new(update_in(child, rest, f)?)
    };
    let mut out = list.to_vec();
    out[i] = new_child;
    Some(out)
}

/// Replace the value at `path`.
pub fn set(root: &Node, path: &Path, value: Value) -> Option<Node> {
    update(root, path, move |_| value)
}

/// Remove the element addressed by `path` from its collection. The last
/// step must be an index.
pub fn delete(root: &Node, path: &Path) -> Option<Node> {
    let (last, parent_steps) = path.steps().split_last()?;
    let i = last.as_index()?;
    let parent = Path::from_steps(parent_steps.to_vec());
    match get(root, &parent)? {
        Value::List(list) if i < list.len() => {}
        _ => return None,
    }
    update(root, &parent, |value| match value {
        Value::List(mut list) => {
            list.remove(i);
            Value::List(list)
        }
        other => other,
    })
}

/// Whether `path` resolves to an existing position.
pub fn resolves(root: &Node, path: &Path) -> bool {
    get(root, path).is_some()
}

/// Selection validity: the path resolves, or it ends with the `End`
/// sentinel and the rest of it resolves to a collection.
pub fn selection_resolves(root: &Node, path: &Path) -> bool {
    if path.ends_with_end() {
        matches!(get(root, &path.popped(1)), Some(Value::List(_)))
    } else {
        resolves(root, path)
    }
}

/// The node at `path`, if the path addresses one.
pub fn node_at(root: &Node, path: &Path) -> Option<Arc<Node>> {
    match get(root, path)? {
        Value::Node(node) => Some(node),
        _ => None,
    }
}

/// The collection at `path`, if the path addresses one.
pub fn list_at(root: &Node, path: &Path) -> Option<Vec<Arc<Node>>> {
    match get(root, path)? {
        Value::List(list) => Some(list),
        _ => None,
    }
}
