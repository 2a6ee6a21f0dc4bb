//! Paths addressing locations inside the document tree.
//!
//! A path is an ordered sequence of steps: named fields, collection
//! indices, and the `End` sentinel marking the insertion point after the
//! last element of a collection. The sentinel addresses no existing node
//! and is only valid as a trailing step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// A named field (`"value"`, `"key"`, `"properties"`, ...).
    Field(String),
    /// A position inside a collection.
    Index(usize),
    /// The append position after the last element of a collection.
    End,
}

impl Step {
    pub fn field(name: impl Into<String>) -> Step {
        Step::Field(name.into())
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Step::Index(i) => Some(*i),
            _ => None,
        }
    }

    /// Whether this step names an element collection.
    pub fn is_collection_field(&self) -> bool {
        matches!(self, Step::Field(name) if matches!(name.as_str(), "elements" | "properties" | "body"))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Field(name) => f.write_str(name),
            Step::Index(i) => write!(f, "{}", i),
            Step::End => f.write_str("end"),
        }
    }
}

/// An ordered sequence of steps, compared by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    /// The empty path: the document root.
    pub fn new() -> Path {
        Path { steps: Vec::new() }
    }

    pub fn from_steps(steps: Vec<Step>) -> Path {
        Path { steps }
    }

    /// Append a field step.
    pub fn field(mut self, name: impl Into<String>) -> Path {
        self.steps.push(Step::Field(name.into()));
        self
    }

    /// Append an index step.
    pub fn index(mut self, i: usize) -> Path {
        self.steps.push(Step::Index(i));
        self
    }

    /// Append the end sentinel.
    pub fn end(mut self) -> Path {
        self.steps.push(Step::End);
        self
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn ends_with_end(&self) -> bool {
        matches!(self.last(), Some(Step::End))
    }

    /// This path with the last `n` steps removed.
    pub fn popped(&self, n: usize) -> Path {
        let keep = self.steps.len().saturating_sub(n);
        Path {
            steps: self.steps[..keep].to_vec(),
        }
    }

    /// The first `len` steps of this path.
    pub fn truncated(&self, len: usize) -> Path {
        Path {
            steps: self.steps[..len.min(self.steps.len())].to_vec(),
        }
    }

    /// This path followed by every step of `other`.
    pub fn joined(&self, other: &Path) -> Path {
        let mut steps = self.steps.clone();
        steps.extend(other.steps.iter().cloned());
        Path { steps }
    }

    /// Position of the deepest index step, if any.
    pub fn last_index_position(&self) -> Option<usize> {
        self.steps
            .iter()
            .rposition(|step| matches!(step, Step::Index(_)))
    }

    /// Position of the deepest collection field step, if any.
    pub fn last_collection_position(&self) -> Option<usize> {
        self.steps.iter().rposition(Step::is_collection_field)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("(root)");
        }
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
