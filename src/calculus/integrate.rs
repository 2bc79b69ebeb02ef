use crate::calculus::differentiate;
use crate::error::Result;
use crate::expr::{Expr, Rational};
use crate::polynomial::{Atom, Fraction, Monomial, Poly};
use crate::simplify::{canonical, fraction_to_expr};
use num_traits::One;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Term by term over a Laurent polynomial.
    Direct,
    /// `c * p'/p` integrates to `c * log(p)`.
    LogDerivative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReasonCode {
    /// A term outside the table of elementary antiderivatives.
    UnsupportedTerm(String),
    /// A quotient whose numerator is not a constant multiple of the
    /// denominator's derivative.
    NonLogDerivative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrationResult {
    Integrated { result: Expr, strategy: Strategy },
    NotIntegrable(ReasonCode),
}

impl IntegrationResult {
    pub fn antiderivative(&self) -> Option<&Expr> {
        match self {
            IntegrationResult::Integrated { result, .. } => Some(result),
            IntegrationResult::NotIntegrable(_) => None,
        }
    }
}

/// Indefinite integral of `expr` with respect to `var`, constant omitted.
///
/// Symbols other than `var` are treated as constants.
pub fn integrate(var: &str, expr: &Expr) -> Result<IntegrationResult> {
    let f = canonical(expr)?;
    if f.is_polynomial() {
        let mut total = Fraction::zero();
        for (m, c) in f.numer().terms() {
            match integrate_term(var, c, m)? {
                Some(part) => total = total.add(&part),
                None => {
                    let term = fraction_to_expr(&Fraction::from_poly(Poly::term(c.clone(), m.clone())));
                    return Ok(IntegrationResult::NotIntegrable(ReasonCode::UnsupportedTerm(
                        term.to_string(),
                    )));
                }
            }
        }
        return Ok(IntegrationResult::Integrated {
            result: fraction_to_expr(&total),
            strategy: Strategy::Direct,
        });
    }

    let den = fraction_to_expr(&Fraction::from_poly(f.denom().clone()));
    let dden = canonical(&differentiate(var, &den))?;
    if dden.is_zero() {
        return Ok(IntegrationResult::NotIntegrable(ReasonCode::NonLogDerivative));
    }
    let ratio = Fraction::from_poly(f.numer().clone()).div(&dden)?;
    if ratio.mentions(var) {
        return Ok(IntegrationResult::NotIntegrable(ReasonCode::NonLogDerivative));
    }
    let log = canonical(&Expr::Log(den.boxed()))?;
    Ok(IntegrationResult::Integrated {
        result: fraction_to_expr(&ratio.mul(&log)),
        strategy: Strategy::LogDerivative,
    })
}

fn integrate_term(var: &str, coeff: &Rational, m: &Monomial) -> Result<Option<Fraction>> {
    let mut rest = Monomial::unit();
    let mut dependent = Vec::new();
    for (atom, e) in m.factors() {
        if atom.mentions(var) {
            dependent.push((atom, e));
        } else {
            rest = rest.mul(&Monomial::power(atom.clone(), e.clone()));
        }
    }
    let scale = Fraction::from_poly(Poly::term(coeff.clone(), rest));
    let x = Atom::Symbol(var.to_string());

    let antiderivative = match dependent.as_slice() {
        [] => Fraction::atom_power(x, Rational::one()),
        [(Atom::Symbol(_), n)] if **n == -Rational::one() => {
            canonical(&Expr::Log(Expr::var(var).boxed()))?
        }
        [(Atom::Symbol(_), n)] => {
            let k = *n + Rational::one();
            Fraction::from_poly(Poly::term(k.recip(), Monomial::power(x, k)))
        }
        [(Atom::Exp(inner), k)] => {
            // exp(r*var)^k with r free of var
            let slope = inner.mul(&Monomial::atom(x).inv());
            if slope.mentions(var) {
                return Ok(None);
            }
            let factor = Poly::term(k.recip(), slope.inv());
            Fraction::atom_power(Atom::Exp(inner.clone()), (*k).clone())
                .mul(&Fraction::from_poly(factor))
        }
        [(Atom::Opaque(Expr::Sin(arg)), e)] if e.is_one() => match linear_slope(var, arg)? {
            Some(a) => canonical(&Expr::Cos(arg.clone()))?.neg().div(&a)?,
            None => return Ok(None),
        },
        [(Atom::Opaque(Expr::Cos(arg)), e)] if e.is_one() => match linear_slope(var, arg)? {
            Some(a) => canonical(&Expr::Sin(arg.clone()))?.div(&a)?,
            None => return Ok(None),
        },
        _ => return Ok(None),
    };
    Ok(Some(scale.mul(&antiderivative)))
}

/// `d(arg)/d(var)` when it is nonzero and free of `var`.
fn linear_slope(var: &str, arg: &Expr) -> Result<Option<Fraction>> {
    let slope = canonical(&differentiate(var, arg))?;
    if slope.is_zero() || slope.mentions(var) {
        Ok(None)
    } else {
        Ok(Some(slope))
    }
}

