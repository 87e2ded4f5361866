#![warn(clippy::panic)]
#![warn(clippy::expect_used)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod dnf;
pub mod errors;
pub mod formula;

#[cfg(test)]
pub(crate) mod util;

pub use crate::dnf::{distribute, normalize, to_dnf, Pipeline};
pub use crate::formula::{FormulaKind, FormulaNode, FormulaRef};
