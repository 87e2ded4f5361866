use crate::formula::{FormulaKind, FormulaNode, FormulaRef};
use rand::{rngs::SmallRng, Rng};
use std::collections::HashSet;

/// Labels used by [`random_formula`]. Small enough to evaluate a formula for
/// every possible assignment.
pub(crate) const LABELS: [&str; 5] = ["a", "b", "c", "d", "e"];

pub(crate) fn lit(label: &str) -> FormulaRef {
    FormulaNode::literal(label)
}

pub(crate) fn and(children: &[&FormulaRef]) -> FormulaRef {
    FormulaNode::and(children.iter().map(|c| (*c).clone()).collect())
}

pub(crate) fn or(children: &[&FormulaRef]) -> FormulaRef {
    FormulaNode::or(children.iter().map(|c| (*c).clone()).collect())
}

fn labeled(kind: FormulaKind, label: &str, children: Vec<FormulaRef>) -> FormulaRef {
    FormulaNode::new(kind, label, children).unwrap()
}

/// Creates the formula
///
/// ```plain
///          and:one
///         /       \
///    or:two       and:three
///    /    \       /     \
/// two_1  two_2 three_1 three_2
/// ```
pub(crate) fn create_labeled_conjunction() -> FormulaRef {
    let two = labeled(FormulaKind::Or, "two", vec![lit("two_1"), lit("two_2")]);
    let three = labeled(FormulaKind::And, "three", vec![lit("three_1"), lit("three_2")]);
    labeled(FormulaKind::And, "one", vec![two, three])
}

/// `OR(AND(two_1, two_2), AND(three_1, three_2))`, which is already in DNF.
pub(crate) fn create_disjunction_of_conjunctions() -> FormulaRef {
    or(&[
        &and(&[&lit("two_1"), &lit("two_2")]),
        &and(&[&lit("three_1"), &lit("three_2")]),
    ])
}

/// `AND(OR(two_1, two_2), three)`
pub(crate) fn create_disjunction_and_literal() -> FormulaRef {
    and(&[&or(&[&lit("two_1"), &lit("two_2")]), &lit("three")])
}

/// `AND(OR(two_1, two_2), three_1, three_2, three_3)`
pub(crate) fn create_disjunction_and_literals() -> FormulaRef {
    and(&[
        &or(&[&lit("two_1"), &lit("two_2")]),
        &lit("three_1"),
        &lit("three_2"),
        &lit("three_3"),
    ])
}

/// `AND(OR(two_1, two_2), OR(three_1, three_2))`
pub(crate) fn create_two_disjunctions() -> FormulaRef {
    and(&[
        &or(&[&lit("two_1"), &lit("two_2")]),
        &or(&[&lit("three_1"), &lit("three_2")]),
    ])
}

/// Creates a random formula with at most `depth` levels of connectives and up
/// to three children per connective. All literals are taken from [`LABELS`].
pub(crate) fn random_formula(rng: &mut SmallRng, depth: usize) -> FormulaRef {
    if depth == 0 || rng.gen_bool(0.3) {
        return lit(LABELS[rng.gen_range(0..LABELS.len())]);
    }
    let child_count = rng.gen_range(1..=3);
    let children: Vec<FormulaRef> = (0..child_count)
        .map(|_| random_formula(rng, depth - 1))
        .collect();
    if rng.gen_bool(0.5) {
        FormulaNode::and(children)
    } else {
        FormulaNode::or(children)
    }
}

/// Evaluates the formula with all literals in `assignment` set to true.
pub(crate) fn evaluate(node: &FormulaNode, assignment: &HashSet<&str>) -> bool {
    match node.kind() {
        FormulaKind::Literal => assignment.contains(node.label()),
        FormulaKind::And => node.children().iter().all(|c| evaluate(c, assignment)),
        FormulaKind::Or => node.children().iter().any(|c| evaluate(c, assignment)),
    }
}

/// All subsets of [`LABELS`].
pub(crate) fn all_assignments() -> Vec<HashSet<&'static str>> {
    (0..(1_usize << LABELS.len()))
        .map(|bits| {
            LABELS
                .iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .map(|(_, l)| *l)
                .collect()
        })
        .collect()
}
