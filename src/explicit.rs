use crate::error::Result;
use crate::expr::Expr;
use crate::simplify::is_zero;

/// Returned by [`explicit`] when `N` vanishes identically.
pub const UNDEFINED_EXPLICIT: &str = "undefined (equation cannot be expressed in explicit form)";

/// `dy/dx = -(M)/(N)`, or [`UNDEFINED_EXPLICIT`] when `N ≡ 0`.
pub fn explicit(m: &Expr, n: &Expr) -> Result<String> {
    if is_zero(n)? {
        return Ok(UNDEFINED_EXPLICIT.to_string());
    }
    Ok(format!("dy/dx = -({m})/({n})"))
}
