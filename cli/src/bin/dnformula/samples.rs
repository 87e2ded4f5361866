use dnformula_core::errors::Result;
use dnformula_core::{FormulaKind, FormulaNode, FormulaRef};

/// A named formula that is used to demonstrate the transformation.
pub struct Sample {
    pub name: &'static str,
    build: fn() -> Result<FormulaRef>,
}

impl Sample {
    pub fn build(&self) -> Result<FormulaRef> {
        (self.build)()
    }
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "or-of-ands",
        build: or_of_ands,
    },
    Sample {
        name: "labeled-and",
        build: labeled_and,
    },
    Sample {
        name: "or-and-literal",
        build: or_and_literal,
    },
    Sample {
        name: "or-and-literals",
        build: or_and_literals,
    },
    Sample {
        name: "two-ors",
        build: two_ors,
    },
    Sample {
        name: "nested-and",
        build: nested_and,
    },
    Sample {
        name: "nested-or",
        build: nested_or,
    },
    Sample {
        name: "deep-and",
        build: deep_and,
    },
    Sample {
        name: "three-ors",
        build: three_ors,
    },
];

pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.name == name)
}

fn lit(label: &str) -> FormulaRef {
    FormulaNode::literal(label)
}

fn node(kind: &str, label: &str, children: Vec<FormulaRef>) -> Result<FormulaRef> {
    FormulaNode::new(FormulaKind::from_name(kind)?, label, children)
}

fn or_of_ands() -> Result<FormulaRef> {
    Ok(FormulaNode::or(vec![
        FormulaNode::and(vec![lit("two_1"), lit("two_2")]),
        FormulaNode::and(vec![lit("three_1"), lit("three_2")]),
    ]))
}

fn labeled_and() -> Result<FormulaRef> {
    let two = node("or", "two", vec![lit("two_1"), lit("two_2")])?;
    let three = FormulaNode::and(vec![lit("three_1"), lit("three_2")]).with_label("three");
    node("and", "one", vec![two, three])
}

fn or_and_literal() -> Result<FormulaRef> {
    Ok(FormulaNode::and(vec![
        FormulaNode::or(vec![lit("two_1"), lit("two_2")]),
        lit("three"),
    ]))
}

fn or_and_literals() -> Result<FormulaRef> {
    Ok(FormulaNode::and(vec![
        FormulaNode::or(vec![lit("two_1"), lit("two_2")]),
        lit("three_1"),
        lit("three_2"),
        lit("three_3"),
    ]))
}

fn two_ors() -> Result<FormulaRef> {
    Ok(FormulaNode::and(vec![
        FormulaNode::or(vec![lit("two_1"), lit("two_2")]),
        FormulaNode::or(vec![lit("three_1"), lit("three_2")]),
    ]))
}

fn nested_and() -> Result<FormulaRef> {
    Ok(FormulaNode::and(vec![
        lit("a"),
        FormulaNode::and(vec![lit("b"), lit("c")]),
    ]))
}

fn nested_or() -> Result<FormulaRef> {
    Ok(FormulaNode::or(vec![
        FormulaNode::or(vec![lit("p"), lit("q")]),
        lit("r"),
    ]))
}

/// The OR is only reachable through an AND without a direct OR child.
fn deep_and() -> Result<FormulaRef> {
    Ok(FormulaNode::and(vec![
        lit("a"),
        FormulaNode::and(vec![
            lit("b"),
            FormulaNode::or(vec![lit("c"), lit("d")]),
        ]),
    ]))
}

fn three_ors() -> Result<FormulaRef> {
    Ok(FormulaNode::and(vec![
        FormulaNode::or(vec![lit("a"), lit("b")]),
        FormulaNode::or(vec![lit("c"), lit("d")]),
        FormulaNode::or(vec![lit("e"), lit("f")]),
    ]))
}
