//! The parse/generate pair the editing engine consumes as an opaque
//! service.

use crate::error::SyntaxResult;
use crate::generator;
use crate::json;
use crate::node::Node;

/// External syntax services: text to tree, tree to text.
///
/// Both calls are synchronous and effect-free; `generate` accepts any
/// subtree so clipboard export can render a single element.
pub trait Syntax {
    fn parse(&self, source: &str) -> SyntaxResult<Node>;
    fn generate(&self, node: &Node) -> String;
}

/// JSON-backed syntax pair.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSyntax;

impl Syntax for JsonSyntax {
    fn parse(&self, source: &str) -> SyntaxResult<Node> {
        json::parse_source(source)
    }

    fn generate(&self, node: &Node) -> String {
        generator::generate(node)
    }
}
