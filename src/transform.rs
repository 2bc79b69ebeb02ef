use crate::config::ZeroTestOptions;
use crate::error::AnalysisError;
use crate::exactness::{check_with, derivative_error};
use crate::expr::{Expr, mul};
use crate::search::{AcceptedFactor, StrategyKind};
use crate::simplify::normalize;

/// `μM dx + μN dy = 0`, re-derived from scratch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformedEquation {
    pub factor: Expr,
    pub strategy: StrategyKind,
    pub label: String,
    pub m_new: Expr,
    pub n_new: Expr,
    pub dm_new_dy: Expr,
    pub dn_new_dx: Expr,
    pub difference_new: Expr,
    pub is_exact_new: bool,
    /// `is_exact_new` came from numeric sampling.
    pub sampled_new: bool,
}

/// Multiply both coefficients by the accepted factor and recheck exactness.
pub fn apply(
    m: &Expr,
    n: &Expr,
    accepted: &AcceptedFactor,
    zero_test: &ZeroTestOptions,
) -> Result<TransformedEquation, AnalysisError> {
    let factor = &accepted.candidate.factor;
    let m_new = normalize(&mul(factor.clone(), m.clone())).map_err(derivative_error)?;
    let n_new = normalize(&mul(factor.clone(), n.clone())).map_err(derivative_error)?;
    let check = check_with(&m_new, &n_new, zero_test)?;
    Ok(TransformedEquation {
        factor: normalize(factor).map_err(derivative_error)?,
        strategy: accepted.strategy,
        label: accepted.candidate.label.clone(),
        m_new,
        n_new,
        dm_new_dy: check.dm_dy,
        dn_new_dx: check.dn_dx,
        difference_new: check.difference,
        is_exact_new: check.is_exact,
        sampled_new: check.sampled,
    })
}
