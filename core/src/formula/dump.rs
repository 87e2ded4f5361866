use super::FormulaNode;
use std::fmt::{self, Write};

/// Lazily rendered dump of a formula tree.
///
/// Every node is printed on its own line in pre-order. The line starts with
/// one `-` per level of depth, followed by the `kind:label` identifier and
/// the address of the node, e.g.
///
/// ```plaintext
/// and:one, 0x55d0c4b1e2a0
/// -or:two, 0x55d0c4b1e1f0
/// --literal:two_1, 0x55d0c4b1e0d0
/// ```
///
/// Shared subtrees print the same address below each parent.
pub struct TreeDump<'a> {
    root: &'a FormulaNode,
    identity: bool,
}

impl<'a> TreeDump<'a> {
    pub(super) fn new(root: &'a FormulaNode) -> TreeDump<'a> {
        TreeDump {
            root,
            identity: true,
        }
    }

    /// Omit the node addresses, which makes the output deterministic.
    pub fn without_identity(mut self) -> TreeDump<'a> {
        self.identity = false;
        self
    }

    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        node: &FormulaNode,
        depth: usize,
    ) -> fmt::Result {
        for _ in 0..depth {
            f.write_char('-')?;
        }
        f.write_str(&node.id())?;
        if self.identity {
            write!(f, ", {:p}", node)?;
        }
        f.write_char('\n')?;
        for c in node.children() {
            self.write_node(f, c, depth + 1)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for TreeDump<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.root, 0)
    }
}
