//! Document tree nodes.
//!
//! A document is a tree of tagged, immutable values rooted at a
//! [`Node::Program`]. Child edges are [`Arc`]s so that persistent updates
//! (see [`crate::store`]) share every untouched subtree; equality stays
//! deep value equality with a pointer fast path through the `Arc`s.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Declaration keyword of a [`Node::VariableDeclaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Const,
    Let,
    Var,
}

impl DeclarationKind {
    /// The source keyword for this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            DeclarationKind::Const => "const",
            DeclarationKind::Let => "let",
            DeclarationKind::Var => "var",
        }
    }

    /// Parse a source keyword back into a kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "const" => Some(DeclarationKind::Const),
            "let" => Some(DeclarationKind::Let),
            "var" => Some(DeclarationKind::Var),
            _ => None,
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A single tagged element of the document tree.
///
/// Numeric literals hold their *textual* value: while a value field is
/// being edited the text may be partial (`"12."`), and it is
/// re-normalized to canonical form when the next edit is committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    NullLiteral,

    BooleanLiteral {
        value: bool,
    },

    /// Number held as text; see [`canonical_number`].
    NumericLiteral {
        value: String,
    },

    StringLiteral {
        value: String,
    },

    Identifier {
        name: String,
    },

    ArrayExpression {
        elements: Vec<Arc<Node>>,
    },

    ObjectExpression {
        properties: Vec<Arc<Node>>,
    },

    /// One `key: value` entry of an object expression.
    ObjectProperty {
        key: Arc<Node>,
        value: Arc<Node>,
    },

    VariableDeclaration {
        kind: DeclarationKind,
        id: Arc<Node>,
        init: Arc<Node>,
    },

    /// Document root holding the statement list.
    Program {
        body: Vec<Arc<Node>>,
    },
}

/// Shape discriminant for exhaustive dispatch without ad hoc predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Null,
    Boolean,
    Number,
    String,
    Identifier,
    Array,
    Object,
    Property,
    Declaration,
    Program,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::NullLiteral => NodeKind::Null,
            Node::BooleanLiteral { .. } => NodeKind::Boolean,
            Node::NumericLiteral { .. } => NodeKind::Number,
            Node::StringLiteral { .. } => NodeKind::String,
            Node::Identifier { .. } => NodeKind::Identifier,
            Node::ArrayExpression { .. } => NodeKind::Array,
            Node::ObjectExpression { .. } => NodeKind::Object,
            Node::ObjectProperty { .. } => NodeKind::Property,
            Node::VariableDeclaration { .. } => NodeKind::Declaration,
            Node::Program { .. } => NodeKind::Program,
        }
    }

    /// Field name of this node's element collection, if it has one.
    pub fn collection_field(&self) -> Option<&'static str> {
        match self {
            Node::ArrayExpression { .. } => Some("elements"),
            Node::ObjectExpression { .. } => Some("properties"),
            Node::Program { .. } => Some("body"),
            _ => None,
        }
    }

    /// The elements of this node's collection, if it has one.
    pub fn collection(&self) -> Option<&[Arc<Node>]> {
        match self {
            Node::ArrayExpression { elements } => Some(elements),
            Node::ObjectExpression { properties } => Some(properties),
            Node::Program { body } => Some(body),
            _ => None,
        }
    }

    /// Leaves whose text the user edits in place.
    pub fn is_editable_leaf(&self) -> bool {
        matches!(
            self,
            Node::StringLiteral { .. } | Node::NumericLiteral { .. } | Node::Identifier { .. }
        )
    }

    /// Editable text of this node, if it has any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::StringLiteral { value } => Some(value),
            Node::NumericLiteral { value } => Some(value),
            Node::Identifier { name } => Some(name),
            _ => None,
        }
    }

    /// Scalar carry-over text used by type coercions: literal text where
    /// the node has some, empty otherwise.
    pub fn scalar_text(&self) -> String {
        match self {
            Node::BooleanLiteral { value } => value.to_string(),
            other => other.text().unwrap_or_default().to_string(),
        }
    }

    pub fn boolean(value: bool) -> Node {
        Node::BooleanLiteral { value }
    }

    pub fn number(raw: impl Into<String>) -> Node {
        Node::NumericLiteral { value: raw.into() }
    }

    pub fn number_from(value: f64) -> Node {
        Node::NumericLiteral {
            value: value.to_string(),
        }
    }

    pub fn string(value: impl Into<String>) -> Node {
        Node::StringLiteral {
            value: value.into(),
        }
    }

    pub fn identifier(name: impl Into<String>) -> Node {
        Node::Identifier { name: name.into() }
    }

    pub fn array(elements: Vec<Node>) -> Node {
        Node::ArrayExpression {
            elements: elements.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn object(properties: Vec<Node>) -> Node {
        Node::ObjectExpression {
            properties: properties.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn property(key: Node, value: Node) -> Node {
        Node::ObjectProperty {
            key: Arc::new(key),
            value: Arc::new(value),
        }
    }

    pub fn declaration(kind: DeclarationKind, name: impl Into<String>, init: Node) -> Node {
        Node::VariableDeclaration {
            kind,
            id: Arc::new(Node::identifier(name)),
            init: Arc::new(init),
        }
    }

    pub fn program(body: Vec<Node>) -> Node {
        Node::Program {
            body: body.into_iter().map(Arc::new).collect(),
        }
    }
}

/// Canonical textual form of a numeric value: float-parse and
/// re-stringify, `"0"` when the text does not parse at all.
pub fn canonical_number(text: &str) -> String {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value.to_string(),
        _ => "0".to_string(),
    }
}
