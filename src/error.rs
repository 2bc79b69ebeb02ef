use thiserror::Error;

pub type Result<T> = std::result::Result<T, CasError>;

/// Failures of the expression layer (parsing and algebra).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CasError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("division by zero in {0}")]
    DivisionByZero(String),
    #[error("outside the domain: {0}")]
    Domain(String),
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

/// Failures that abort an analysis call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("incorrect format: '{input}' (expected M(x,y)*dx + N(x,y)*dy = 0)")]
    Format { input: String },
    #[error("cannot process M='{m}' or N='{n}': {reason}")]
    Coefficient { m: String, n: String, reason: String },
    #[error("cannot compute partial derivatives: {0}")]
    Derivative(String),
    #[error("degenerate equation '{input}': both M and N are zero")]
    Degenerate { input: String },
}

/// Failures of the numeric trajectory solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericError {
    #[error("the equation has no explicit form dy/dx = f(x, y)")]
    Undefined,
    #[error("cannot read slope expression: {0}")]
    Parse(String),
    #[error("slope is not finite at x = {x}, y = {y}")]
    Singular { x: f64, y: f64 },
    #[error("step size underflow near x = {x}")]
    StepSize { x: f64 },
    #[error("invalid solver options: {0}")]
    InvalidOptions(String),
}

impl From<CasError> for NumericError {
    fn from(err: CasError) -> Self {
        NumericError::Parse(err.to_string())
    }
}
