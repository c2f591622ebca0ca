use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LightsOutError {
    /// A board needs at least one row and one column.
    #[error("board {axis} must be at least 1, got {value}")]
    #[diagnostic(
        code(lights_out::invalid_dimension),
        help("pass a size such as `5x5`, where both sides are positive")
    )]
    InvalidDimension { axis: &'static str, value: usize },
}
