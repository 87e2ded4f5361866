use crate::formula::{FormulaKind, FormulaNode, FormulaRef};
use std::rc::Rc;

/// Flattens nested `AND` and `OR` chains.
///
/// Constructions like
/// ```plaintext
///    AND
///   /   \
///  X    AND
///       / \
///      Y   Z
/// ```
/// are replaced with a single node that has the union of the children:
/// ```plaintext
///    AND
///   / | \
///  X  Y  Z
/// ```
/// The children of each node are flattened until no child of the same kind
/// is left, before the children themselves are normalized.
///
/// The input is never modified. Unchanged subtrees are returned as they are,
/// so calling this on an already normalized formula returns the same node.
pub fn normalize(node: &FormulaRef) -> FormulaRef {
    if node.is_literal() {
        return Rc::clone(node);
    }

    let (flattened, mut changed) = flatten_level(node);
    let children: Vec<FormulaRef> = flattened
        .iter()
        .map(|c| {
            let result = normalize(c);
            changed |= !Rc::ptr_eq(&result, c);
            result
        })
        .collect();

    if changed {
        FormulaNode::connective(node.kind(), node.label(), children)
    } else {
        Rc::clone(node)
    }
}

/// Splices the children of every child with the same kind as `node` into the
/// child list. This is repeated until a full scan does not find any such child,
/// since a spliced child can bring up another one of the same kind.
fn flatten_level(node: &FormulaNode) -> (Vec<FormulaRef>, bool) {
    let kind: FormulaKind = node.kind();
    let mut children: Vec<FormulaRef> = node.children().to_vec();
    let mut spliced = false;

    while children.iter().any(|c| c.kind() == kind) {
        children = children
            .into_iter()
            .flat_map(|c| {
                if c.kind() == kind {
                    c.children().to_vec()
                } else {
                    vec![c]
                }
            })
            .collect();
        spliced = true;
    }

    if spliced {
        trace!("flattened {} to {} children", node.id(), children.len());
    }

    (children, spliced)
}
