//! Formula trees built from `AND`, `OR` and literal nodes.

use crate::errors::{DnfError, Result};
use itertools::Itertools;
use smartstring::alias::String;
use std::fmt;
use std::rc::Rc;
use strum_macros::{Display, EnumString};

mod dump;

pub use dump::TreeDump;


/// Shared reference to a formula node.
///
/// Rewrites re-use unchanged subtrees instead of copying them, so a single
/// node can have more than one parent.
pub type FormulaRef = Rc<FormulaNode>;

/// The logical kind of a formula node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FormulaKind {
    And,
    Or,
    Literal,
}

impl FormulaKind {
    /// Parses the lowercase name of a kind, e.g. `and`.
    pub fn from_name(name: &str) -> Result<FormulaKind> {
        name.parse().map_err(|_: strum::ParseError| DnfError::UnknownKind(name.to_string()))
    }
}

/// A single node of a formula tree.
///
/// The derived `PartialEq` compares the whole subtree by value. Use
/// [`Rc::ptr_eq`] when node identity is needed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormulaNode {
    kind: FormulaKind,
    label: String,
    children: Vec<FormulaRef>,
}

impl FormulaNode {
    /// Creates a new node of any kind.
    ///
    /// Fails if a literal would get children.
    pub fn new(kind: FormulaKind, label: &str, children: Vec<FormulaRef>) -> Result<FormulaRef> {
        if kind == FormulaKind::Literal && !children.is_empty() {
            return Err(DnfError::LiteralWithChildren {
                id: format!("{}:{}", kind, label),
                count: children.len(),
            });
        }
        Ok(Rc::new(FormulaNode {
            kind,
            label: label.into(),
            children,
        }))
    }

    pub fn literal(label: &str) -> FormulaRef {
        Rc::new(FormulaNode {
            kind: FormulaKind::Literal,
            label: label.into(),
            children: Vec::new(),
        })
    }

    pub fn and(children: Vec<FormulaRef>) -> FormulaRef {
        FormulaNode::connective(FormulaKind::And, "", children)
    }

    pub fn or(children: Vec<FormulaRef>) -> FormulaRef {
        FormulaNode::connective(FormulaKind::Or, "", children)
    }

    /// Creates an `AND` or `OR` node. Only called with a connective kind.
    pub(crate) fn connective(
        kind: FormulaKind,
        label: &str,
        children: Vec<FormulaRef>,
    ) -> FormulaRef {
        debug_assert!(kind != FormulaKind::Literal);
        Rc::new(FormulaNode {
            kind,
            label: label.into(),
            children,
        })
    }

    /// Returns a copy of this node with another label. The children are shared.
    pub fn with_label(&self, label: &str) -> FormulaRef {
        Rc::new(FormulaNode {
            kind: self.kind,
            label: label.into(),
            children: self.children.clone(),
        })
    }

    pub fn kind(&self) -> FormulaKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[FormulaRef] {
        &self.children
    }

    pub fn is_and(&self) -> bool {
        self.kind == FormulaKind::And
    }

    pub fn is_or(&self) -> bool {
        self.kind == FormulaKind::Or
    }

    pub fn is_literal(&self) -> bool {
        self.kind == FormulaKind::Literal
    }

    /// Identifier of the form `kind:label` used in the tree dump.
    pub fn id(&self) -> std::string::String {
        format!("{}:{}", self.kind, self.label)
    }

    /// Number of literal occurrences in this subtree.
    ///
    /// A shared subtree is counted once for every path leading to it.
    pub fn literal_count(&self) -> usize {
        if self.is_literal() {
            1
        } else {
            self.children.iter().map(|c| c.literal_count()).sum()
        }
    }

    /// Checks that every `AND` and `OR` node has at least one child.
    ///
    /// The rewrites accept empty connectives (an empty `AND` is *true*, an
    /// empty `OR` is *false*), but callers that consider them malformed can
    /// reject a tree up front with this check.
    pub fn validate(&self) -> Result<()> {
        self.validate_at(0)
    }

    fn validate_at(&self, depth: usize) -> Result<()> {
        match self.kind {
            FormulaKind::Literal => {
                if !self.children.is_empty() {
                    return Err(DnfError::LiteralWithChildren {
                        id: self.id(),
                        count: self.children.len(),
                    });
                }
            }
            FormulaKind::And | FormulaKind::Or => {
                if self.children.is_empty() {
                    return Err(DnfError::EmptyConnective {
                        id: self.id(),
                        depth,
                    });
                }
            }
        }
        for c in self.children.iter() {
            c.validate_at(depth + 1)?;
        }
        Ok(())
    }

    /// Returns a value that renders this subtree as an indented tree when it
    /// is formatted. Nothing is rendered before that.
    pub fn dump(&self) -> TreeDump<'_> {
        TreeDump::new(self)
    }
}

impl fmt::Display for FormulaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FormulaKind::Literal => write!(f, "{}", self.label),
            FormulaKind::And => write!(f, "AND({})", self.children.iter().join(", ")),
            FormulaKind::Or => write!(f, "OR({})", self.children.iter().join(", ")),
        }
    }
}
