pub(crate) mod example_formulas;
