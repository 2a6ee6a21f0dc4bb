pub mod error;
pub mod generator;
pub mod json;
pub mod node;
pub mod path;
pub mod store;
pub mod syntax;

pub use error::{SyntaxError, SyntaxResult};
pub use generator::{generate, Generator};
pub use node::{canonical_number, DeclarationKind, Node, NodeKind};
pub use path::{Path, Step};
pub use store::Value;
pub use syntax::{JsonSyntax, Syntax};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_then_generate_is_stable() {
        let syntax = JsonSyntax;
        let first = syntax.generate(&syntax.parse("[1, {\"a\": true}]").unwrap());
        let second = syntax.generate(&syntax.parse(&first).unwrap());
        assert_eq!(first, second);
    }
}
