#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// The text is neither an interval literal nor a valid compound
    /// expression.  `position` is the byte offset where parsing stopped.
    #[error("Invalid expression '{expr}' (at offset {position})")]
    InvalidExpression { expr: String, position: usize },

    #[error("Lower bound must be lower than upper bound in {0}")]
    InvalidBounds(String),

    /// A valid expression that evaluates to several disjoint intervals was
    /// used where a single interval is expected.
    #[error("{0} does not reduce to a single interval")]
    NotAnInterval(String),
}

pub type Result<T> = std::result::Result<T, IntervalError>;
