use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Type chart CSV is empty")]
    EmptyInput,

    #[error("Select at least one attacking type")]
    NoAttackTypes,

    #[error("Unknown type: {0}")]
    UnknownType(String),
}
