use crate::config::ZeroTestOptions;
use crate::error::{AnalysisError, CasError};
use crate::expr::{Expr, sub, zero};
use crate::calculus::partial;
use crate::simplify::{ZeroEvidence, canonical, fraction_to_expr, zero_evidence};

/// Partial derivatives of a coefficient pair and the exactness verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exactness {
    pub dm_dy: Expr,
    pub dn_dx: Expr,
    /// `∂M/∂y - ∂N/∂x` in canonical form; `0` whenever `is_exact` holds.
    pub difference: Expr,
    pub is_exact: bool,
    /// `is_exact` rests on the numeric fallback, not on symbolic cancellation.
    pub sampled: bool,
}

pub fn check(m: &Expr, n: &Expr) -> Result<Exactness, AnalysisError> {
    check_with(m, n, &ZeroTestOptions::default())
}

pub fn check_with(m: &Expr, n: &Expr, zero_test: &ZeroTestOptions) -> Result<Exactness, AnalysisError> {
    let dm_dy = partial("y", m).map_err(derivative_error)?;
    let dn_dx = partial("x", n).map_err(derivative_error)?;
    let diff = canonical(&sub(dm_dy.clone(), dn_dx.clone())).map_err(derivative_error)?;
    let evidence = zero_evidence(&diff, zero_test);
    let is_exact = evidence.is_some();
    Ok(Exactness {
        dm_dy,
        dn_dx,
        difference: if is_exact { zero() } else { fraction_to_expr(&diff) },
        is_exact,
        sampled: evidence == Some(ZeroEvidence::Sampled),
    })
}

pub(crate) fn derivative_error(err: CasError) -> AnalysisError {
    AnalysisError::Derivative(err.to_string())
}
