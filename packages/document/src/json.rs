//! Conversion from raw JSON values into document trees.

use serde_json::Value as JsonValue;

use crate::error::SyntaxResult;
use crate::node::{canonical_number, Node};

/// Convert a raw value into an expression tree. Numbers are
/// canonicalized on the way in.
pub fn from_value(value: &JsonValue) -> Node {
    match value {
        JsonValue::Null => Node::NullLiteral,
        JsonValue::Bool(b) => Node::boolean(*b),
        JsonValue::Number(n) => Node::number(canonical_number(&n.to_string())),
        JsonValue::String(s) => Node::string(s.clone()),
        JsonValue::Array(items) => Node::ArrayExpression {
            elements: items
                .iter()
                .map(|item| std::sync::Arc::new(from_value(item)))
                .collect(),
        },
        JsonValue::Object(entries) => Node::ObjectExpression {
            properties: entries
                .iter()
                .map(|(key, value)| {
                    std::sync::Arc::new(Node::property(Node::string(key.clone()), from_value(value)))
                })
                .collect(),
        },
    }
}

/// Wrap a raw document value in a program root.
pub fn document_from_value(value: &JsonValue) -> Node {
    Node::program(vec![from_value(value)])
}

/// Parse source text into an expression tree.
pub fn parse_source(source: &str) -> SyntaxResult<Node> {
    let value: JsonValue = serde_json::from_str(source)?;
    Ok(from_value(&value))
}
