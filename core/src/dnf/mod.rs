//! Transformation of formula trees into the Disjunctive Normal Form.

use crate::formula::{FormulaKind, FormulaRef};
use std::rc::Rc;
use strum_macros::Display;

mod distribute;
mod normalize;

pub use distribute::distribute;
pub use normalize::normalize;


/// Transforms a formula to the Disjunctive Normal Form by distributing it and
/// flattening the result.
pub fn to_dnf(root: &FormulaRef) -> FormulaRef {
    normalize(&distribute(root))
}

/// The steps of a [`Pipeline`] run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Stage {
    Original,
    Normalized,
    Distributed,
}

/// Configures which steps are executed around the distribution.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Pipeline {
    /// Flatten the formula before distributing it.
    pub normalize_before: bool,
    /// Flatten the distributed formula.
    pub normalize_after: bool,
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline {
            normalize_before: false,
            normalize_after: true,
        }
    }
}

/// The intermediate formulas of a [`Pipeline`] run.
#[derive(Debug)]
pub struct PipelineResult {
    stages: Vec<(Stage, FormulaRef)>,
    result: FormulaRef,
}

impl PipelineResult {
    /// All stages in execution order, starting with the original formula.
    pub fn stages(&self) -> &[(Stage, FormulaRef)] {
        &self.stages
    }

    pub fn result(&self) -> &FormulaRef {
        &self.result
    }
}

impl Pipeline {
    pub fn run(&self, root: &FormulaRef) -> PipelineResult {
        let mut stages = Vec::with_capacity(4);
        let mut record = |stage: Stage, node: &FormulaRef| {
            debug!("{} formula {}\n{}", stage, node, node.dump());
            stages.push((stage, Rc::clone(node)));
        };

        record(Stage::Original, root);
        let mut current = Rc::clone(root);
        if self.normalize_before {
            current = normalize(&current);
            record(Stage::Normalized, &current);
        }
        current = distribute(&current);
        record(Stage::Distributed, &current);
        if self.normalize_after {
            current = normalize(&current);
            record(Stage::Normalized, &current);
        }

        PipelineResult {
            stages,
            result: current,
        }
    }
}

/// Returns `true` if no `AND` node has an `AND` child and no `OR` node has
/// an `OR` child.
pub fn is_flat(node: &FormulaRef) -> bool {
    node.children().iter().all(|c| c.kind() != node.kind() && is_flat(c))
}

/// Returns `true` if no `OR` node is located below an `AND` node.
pub fn is_dnf(node: &FormulaRef) -> bool {
    match node.kind() {
        FormulaKind::Literal => true,
        FormulaKind::Or => node.children().iter().all(is_dnf),
        FormulaKind::And => node.children().iter().all(is_conjunctive),
    }
}

fn is_conjunctive(node: &FormulaRef) -> bool {
    match node.kind() {
        FormulaKind::Literal => true,
        FormulaKind::Or => false,
        FormulaKind::And => node.children().iter().all(is_conjunctive),
    }
}

/// Collects the literals of each clause of a formula in DNF.
///
/// The toplevel `OR` nodes separate the clauses. A formula without a toplevel
/// `OR` is a single clause. The formula must be in DNF (see [`is_dnf`]),
/// otherwise the disjunctions below an `AND` would be lost.
pub fn clauses(node: &FormulaRef) -> Vec<Vec<FormulaRef>> {
    debug_assert!(is_dnf(node), "{} is not in DNF", node);

    let mut non_or_roots = Vec::new();
    find_all_children_for_or(node, &mut non_or_roots);

    let mut result = Vec::with_capacity(non_or_roots.len());
    for root in non_or_roots {
        let mut literals = Vec::new();
        find_all_children_for_and(&root, &mut literals);
        result.push(literals);
    }
    result
}

fn find_all_children_for_or(node: &FormulaRef, followers: &mut Vec<FormulaRef>) {
    if node.is_or() {
        for c in node.children() {
            find_all_children_for_or(c, followers);
        }
    } else {
        // add the node itself
        followers.push(Rc::clone(node));
    }
}

fn find_all_children_for_and(node: &FormulaRef, followers: &mut Vec<FormulaRef>) {
    match node.kind() {
        FormulaKind::Literal => followers.push(Rc::clone(node)),
        FormulaKind::And => {
            for c in node.children() {
                find_all_children_for_and(c, followers);
            }
        }
        FormulaKind::Or => {}
    }
}
