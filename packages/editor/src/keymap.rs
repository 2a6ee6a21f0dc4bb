//! Declarative keymap resolution.
//!
//! A keymap is an ordered tree of rules. Resolution walks it depth-first
//! and short-circuits at the first rule whose key, modifiers and
//! predicate all match and that names an action (nested mappings refine
//! their parent and win over the parent's own action). The table is
//! data: hosts can swap in their own.

use chisel_document::{Node, Path};
use serde_json::{json, Value as JsonValue};
use std::collections::BTreeSet;

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Modifier {
    Shift,
    Ctrl,
    Alt,
    Meta,
}

/// A key press as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub modifiers: BTreeSet<Modifier>,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: BTreeSet::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }
}

/// Shape/selection predicate attached to a rule.
pub type RuleTest = fn(Option<&Node>, &Path) -> bool;

/// Modifier requirement: a fixed set, or computed from the selection.
/// Required modifiers must all be pressed; rule order disambiguates
/// events carrying extras.
#[derive(Clone)]
pub enum ModifierSpec {
    Exactly(&'static [Modifier]),
    When(fn(Option<&Node>, &Path) -> &'static [Modifier]),
}

/// A resolved action: the name the dispatch surface understands plus an
/// optional parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub name: String,
    pub param: Option<JsonValue>,
}

impl Action {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            param: None,
        }
    }

    pub fn with_param(name: &str, param: JsonValue) -> Self {
        Self {
            name: name.to_string(),
            param: Some(param),
        }
    }
}

/// One rule of the keymap table.
#[derive(Clone, Default)]
pub struct KeyRule {
    /// Literal keys this rule matches; `None` matches any key.
    pub keys: Option<Vec<String>>,
    pub modifiers: Option<ModifierSpec>,
    pub test: Option<RuleTest>,
    pub action: Option<Action>,
    /// Nested refinements, consulted before this rule's own action.
    pub mappings: Vec<KeyRule>,
}

/// Depth-first resolution against the table.
pub fn resolve<'a>(
    rules: &'a [KeyRule],
    event: &KeyEvent,
    node: Option<&Node>,
    selected: &Path,
) -> Option<&'a Action> {
    for rule in rules {
        if !rule_matches(rule, event, node, selected) {
            continue;
        }
        if let Some(found) = resolve(&rule.mappings, event, node, selected) {
            return Some(found);
        }
        if let Some(action) = &rule.action {
            return Some(action);
        }
    }
    None
}

fn rule_matches(rule: &KeyRule, event: &KeyEvent, node: Option<&Node>, selected: &Path) -> bool {
    if let Some(keys) = &rule.keys {
        if !keys.iter().any(|key| key == &event.key) {
            return false;
        }
    }
    if let Some(spec) = &rule.modifiers {
        let required = match spec {
            ModifierSpec::Exactly(set) => *set,
            ModifierSpec::When(f) => f(node, selected),
        };
        if !required.iter().all(|m| event.modifiers.contains(m)) {
            return false;
        }
    }
    if let Some(test) = rule.test {
        if !test(node, selected) {
            return false;
        }
    }
    true
}

fn keys(keys: &[&str]) -> Option<Vec<String>> {
    Some(keys.iter().map(|k| k.to_string()).collect())
}

fn node_selected(node: Option<&Node>, _selected: &Path) -> bool {
    node.is_some()
}

fn numeric_selected(node: Option<&Node>, _selected: &Path) -> bool {
    matches!(node, Some(Node::NumericLiteral { .. }))
}

fn declaration_selected(node: Option<&Node>, _selected: &Path) -> bool {
    matches!(node, Some(Node::VariableDeclaration { .. }))
}

/// The standard table. Order matters: modifier-bearing rules come before
/// their plain-key counterparts.
pub fn default_keymap() -> Vec<KeyRule> {
    vec![
        KeyRule {
            keys: keys(&["ArrowUp"]),
            modifiers: Some(ModifierSpec::Exactly(&[Modifier::Alt])),
            action: Some(Action::named("MOVE_UP")),
            ..Default::default()
        },
        KeyRule {
            keys: keys(&["ArrowDown"]),
            modifiers: Some(ModifierSpec::Exactly(&[Modifier::Alt])),
            action: Some(Action::named("MOVE_DOWN")),
            ..Default::default()
        },
        KeyRule {
            keys: keys(&["ArrowUp"]),
            modifiers: Some(ModifierSpec::Exactly(&[Modifier::Shift])),
            test: Some(numeric_selected),
            action: Some(Action::with_param("ADD_TO_NUMBER", json!(1))),
            ..Default::default()
        },
        KeyRule {
            keys: keys(&["ArrowDown"]),
            modifiers: Some(ModifierSpec::Exactly(&[Modifier::Shift])),
            test: Some(numeric_selected),
            action: Some(Action::with_param("ADD_TO_NUMBER", json!(-1))),
            ..Default::default()
        },
        KeyRule {
            keys: keys(&["ArrowUp"]),
            action: Some(Action::named("UP")),
            ..Default::default()
        },
        KeyRule {
            keys: keys(&["ArrowDown"]),
            action: Some(Action::named("DOWN")),
            ..Default::default()
        },
        KeyRule {
            keys: keys(&["ArrowLeft"]),
            action: Some(Action::named("LEFT")),
            ..Default::default()
        },
        KeyRule {
            keys: keys(&["ArrowRight"]),
            action: Some(Action::named("RIGHT")),
            ..Default::default()
        },
        KeyRule {
            keys: keys(&["Enter"]),
            action: Some(Action::named("INSERT")),
            ..Default::default()
        },
        KeyRule {
            keys: keys(&["Backspace", "Delete"]),
            action: Some(Action::named("DELETE")),
            ..Default::default()
        },
        KeyRule {
            keys: keys(&["z"]),
            modifiers: Some(ModifierSpec::Exactly(&[Modifier::Ctrl, Modifier::Shift])),
            action: Some(Action::named("REDO")),
            ..Default::default()
        },
        KeyRule {
            keys: keys(&["z"]),
            modifiers: Some(ModifierSpec::Exactly(&[Modifier::Ctrl])),
            action: Some(Action::named("UNDO")),
            ..Default::default()
        },
        KeyRule {
            keys: keys(&["y"]),
            modifiers: Some(ModifierSpec::Exactly(&[Modifier::Ctrl])),
            action: Some(Action::named("REDO")),
            ..Default::default()
        },
        // Shape changes only apply while a node is selected.
        KeyRule {
            test: Some(node_selected),
            mappings: vec![
                KeyRule {
                    keys: keys(&["t"]),
                    action: Some(Action::with_param("SET_BOOLEAN", json!(true))),
                    ..Default::default()
                },
                KeyRule {
                    keys: keys(&["f"]),
                    action: Some(Action::with_param("SET_BOOLEAN", json!(false))),
                    ..Default::default()
                },
                KeyRule {
                    keys: keys(&["s"]),
                    action: Some(Action::named("TO_STRING")),
                    ..Default::default()
                },
                KeyRule {
                    keys: keys(&["n"]),
                    action: Some(Action::named("TO_NUMBER")),
                    ..Default::default()
                },
                KeyRule {
                    keys: keys(&["["]),
                    action: Some(Action::named("TO_ARRAY")),
                    ..Default::default()
                },
                KeyRule {
                    keys: keys(&["{"]),
                    action: Some(Action::named("TO_OBJECT")),
                    ..Default::default()
                },
                KeyRule {
                    keys: keys(&["x"]),
                    action: Some(Action::named("TO_NULL")),
                    ..Default::default()
                },
                KeyRule {
                    keys: keys(&["c", "l", "v"]),
                    test: Some(declaration_selected),
                    mappings: vec![
                        KeyRule {
                            keys: keys(&["c"]),
                            action: Some(Action::with_param(
                                "CHANGE_DECLARATION_KIND",
                                json!("const"),
                            )),
                            ..Default::default()
                        },
                        KeyRule {
                            keys: keys(&["l"]),
                            action: Some(Action::with_param(
                                "CHANGE_DECLARATION_KIND",
                                json!("let"),
                            )),
                            ..Default::default()
                        },
                        KeyRule {
                            keys: keys(&["v"]),
                            action: Some(Action::with_param(
                                "CHANGE_DECLARATION_KIND",
                                json!("var"),
                            )),
                            ..Default::default()
                        },
                    ],
                    ..Default::default()
                },
            ],
            ..Default::default()
        },
    ]
}
