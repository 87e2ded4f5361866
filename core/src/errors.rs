use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DnfError {
    #[error("connective {id} at depth {depth} has no children")]
    EmptyConnective { id: String, depth: usize },
    #[error("literal {id} can't have children, but got {count}")]
    LiteralWithChildren { id: String, count: usize },
    #[error("invalid formula kind {0}, expected one of and/or/literal")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, DnfError>;
