use crate::formula::{FormulaKind, FormulaNode, FormulaRef};
use std::rc::Rc;

/// Pushes all `AND` nodes below the `OR` nodes.
///
/// In DNF all OR relations must be toplevel. Thus constructions like
/// ```plaintext
///  AND             AND
///  / \      or     / \
/// X  OR          OR   X
///    / \        /  \
///   Y   Z       Y  Z
/// ```
/// are illegal and will be replaced with
/// ```plaintext
///       OR
///     /    \
///   AND    AND
///   / \    / \
///  X   Y  X   Z
/// ```
/// according to the distributivity rule of Boolean Algebra.
///
/// The children of a node are always distributed before the node itself.
/// Subtrees that don't need a rewrite are returned as they are, and the
/// remaining factors of a conjunction are shared by all new conjunctions
/// instead of being copied. The result is not flattened, use
/// [`normalize`](super::normalize) afterwards to merge nested `AND` or `OR`
/// nodes.
///
/// A node that is rebuilt because its children changed keeps its label, all
/// nodes created by the expansion itself have an empty label.
///
/// * `node` The root of the formula to distribute
///
pub fn distribute(node: &FormulaRef) -> FormulaRef {
    match node.kind() {
        FormulaKind::Literal => Rc::clone(node),
        FormulaKind::Or => {
            let (mut alternatives, changed) = distribute_children(node);
            if alternatives.len() == 1 {
                alternatives.remove(0)
            } else if changed {
                FormulaNode::connective(FormulaKind::Or, node.label(), alternatives)
            } else {
                Rc::clone(node)
            }
        }
        FormulaKind::And => {
            let (factors, changed) = distribute_children(node);
            // only the left-most disjunction is expanded here, the others are
            // handled when distributing the new conjunctions
            if let Some(or_pos) = factors.iter().position(|f| f.is_or()) {
                expand_disjunction(&factors, or_pos)
            } else if changed {
                FormulaNode::connective(FormulaKind::And, node.label(), factors)
            } else {
                Rc::clone(node)
            }
        }
    }
}

/// Distributes all children and reports whether any of them was rewritten.
fn distribute_children(node: &FormulaNode) -> (Vec<FormulaRef>, bool) {
    let mut changed = false;
    let children: Vec<FormulaRef> = node
        .children()
        .iter()
        .map(|c| {
            let result = distribute(c);
            changed |= !Rc::ptr_eq(&result, c);
            result
        })
        .collect();
    (children, changed)
}

/// Replaces the conjunction of `factors` with a disjunction that has one
/// conjunction per alternative of the factor at `or_pos`.
fn expand_disjunction(factors: &[FormulaRef], or_pos: usize) -> FormulaRef {
    let disjunction = &factors[or_pos];

    // the same node might have been added twice, which is fine to drop since AND is idempotent
    let mut rest: Vec<FormulaRef> = factors
        .iter()
        .filter(|f| !Rc::ptr_eq(f, disjunction))
        .cloned()
        .collect();
    let rest = if rest.is_empty() {
        // AND(OR(...)) is the same as the disjunction itself
        return Rc::clone(disjunction);
    } else if rest.len() == 1 {
        rest.remove(0)
    } else {
        distribute(&FormulaNode::and(rest))
    };

    trace!(
        "distributing {} alternatives of {} over {}",
        disjunction.children().len(),
        disjunction,
        rest
    );

    let mut alternatives: Vec<FormulaRef> = Vec::with_capacity(disjunction.children().len());
    for arg in disjunction.children() {
        // keep the alternative on the side the disjunction was on
        let conjunction = if or_pos == 0 {
            FormulaNode::and(vec![Rc::clone(arg), Rc::clone(&rest)])
        } else {
            FormulaNode::and(vec![Rc::clone(&rest), Rc::clone(arg)])
        };
        alternatives.push(distribute(&conjunction));
    }

    if alternatives.len() == 1 {
        alternatives.remove(0)
    } else {
        FormulaNode::or(alternatives)
    }
}
