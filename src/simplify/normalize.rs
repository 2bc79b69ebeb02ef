use std::collections::HashMap;

use crate::config::ZeroTestOptions;
use crate::error::{CasError, Result};
use crate::eval::eval_f64;
use crate::expr::{Expr, Rational, one, zero};
use crate::polynomial::{Atom, Fraction, Monomial, Poly, exact_root};
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};

/// Integer powers of sums above this are kept as opaque atoms instead of expanded.
const EXPANSION_LIMIT: i64 = 12;

/// Positive sample coordinates for the numeric zero fallback.
const SAMPLE_POINTS: [(f64, f64); 6] = [
    (0.37, 1.21),
    (1.73, 0.59),
    (2.31, 2.87),
    (0.83, 3.41),
    (3.07, 1.49),
    (1.19, 0.27),
];

/// Rewrite `expr` into canonical form.
///
/// Two expressions that agree as rational functions of their atoms normalize
/// to the same tree.
pub fn normalize(expr: &Expr) -> Result<Expr> {
    Ok(fraction_to_expr(&canonical(expr)?))
}

/// Map an expression to its reduced quotient of Laurent polynomials.
pub fn canonical(expr: &Expr) -> Result<Fraction> {
    Ok(match expr {
        Expr::Variable(name) => Fraction::atom_power(Atom::Symbol(name.clone()), Rational::one()),
        Expr::Constant(c) => Fraction::constant(c.clone()),
        Expr::Add(a, b) => canonical(a)?.add(&canonical(b)?),
        Expr::Sub(a, b) => canonical(a)?.sub(&canonical(b)?),
        Expr::Mul(a, b) => canonical(a)?.mul(&canonical(b)?),
        Expr::Div(a, b) => {
            let divisor = canonical(b)?;
            if divisor.is_zero() {
                return Err(CasError::DivisionByZero(expr.to_string()));
            }
            canonical(a)?.div(&divisor)?
        }
        Expr::Neg(a) => canonical(a)?.neg(),
        Expr::Pow(base, exp) => canonical_pow(base, exp)?,
        Expr::Sin(a) => canonical_trig(a, Trig::Sin)?,
        Expr::Cos(a) => canonical_trig(a, Trig::Cos)?,
        Expr::Tan(a) => canonical_trig(a, Trig::Sin)?.div(&canonical_trig(a, Trig::Cos)?)?,
        Expr::Exp(a) => canonical_exp(&canonical(a)?)?,
        Expr::Log(a) => canonical_log(&canonical(a)?)?,
    })
}

fn canonical_pow(base: &Expr, exp: &Expr) -> Result<Fraction> {
    let Some(r) = canonical(exp)?.as_constant() else {
        // b^e = exp(e*log(b)) for a symbolic exponent
        let rewritten = Expr::Exp(Expr::Mul(exp.clone().boxed(), Expr::Log(base.clone().boxed()).boxed()).boxed());
        return canonical(&rewritten);
    };
    rational_power(&canonical(base)?, &r)
}

/// `base^r` for a rational exponent.
pub fn rational_power(base: &Fraction, r: &Rational) -> Result<Fraction> {
    if r.is_zero() {
        return Ok(Fraction::one());
    }
    if base.is_zero() {
        return if r.is_positive() {
            Ok(Fraction::zero())
        } else {
            Err(CasError::DivisionByZero(format!("0^({r})")))
        };
    }

    if base.is_polynomial() {
        if let Some((m, c)) = base.numer().as_term() {
            let coeff = constant_power(c, r);
            let power = Fraction::from_poly(Poly::term(Rational::one(), m.pow(r)));
            return Ok(coeff.mul(&power));
        }
    }

    if r.is_integer() {
        if let Some(k) = r.to_integer().to_i64().filter(|k| k.abs() <= EXPANSION_LIMIT) {
            return base.powi(k);
        }
        return Ok(Fraction::atom_power(Atom::Opaque(fraction_to_expr(base)), r.clone()));
    }

    let root = Expr::Pow(
        fraction_to_expr(base).boxed(),
        Expr::Constant(Rational::new(1.into(), r.denom().clone())).boxed(),
    );
    Ok(Fraction::atom_power(
        Atom::Opaque(root),
        Rational::from_integer(r.numer().clone()),
    ))
}

fn constant_power(c: &Rational, r: &Rational) -> Fraction {
    let opaque = || Fraction::atom_power(Atom::Opaque(Expr::Constant(c.clone())), r.clone());
    let (Some(p), Some(q)) = (r.numer().to_i32(), r.denom().to_u32()) else {
        return opaque();
    };
    let raised: Rational = Pow::pow(c, p);
    match (exact_root(raised.numer(), q), exact_root(raised.denom(), q)) {
        (Some(n), Some(d)) => Fraction::constant(Rational::new(n, d)),
        _ => opaque(),
    }
}

#[derive(Clone, Copy)]
enum Trig {
    Sin,
    Cos,
}

fn canonical_trig(arg: &Expr, kind: Trig) -> Result<Fraction> {
    let u = canonical(arg)?;
    if u.is_zero() {
        return Ok(match kind {
            Trig::Sin => Fraction::zero(),
            Trig::Cos => Fraction::one(),
        });
    }
    // sin(-u) = -sin(u), cos(-u) = cos(u)
    let flip = u.leading_is_negative();
    let inner = fraction_to_expr(&if flip { u.neg() } else { u }).boxed();
    Ok(match kind {
        Trig::Sin => {
            let value = Fraction::atom_power(Atom::Opaque(Expr::Sin(inner)), Rational::one());
            if flip { value.neg() } else { value }
        }
        Trig::Cos => Fraction::atom_power(Atom::Opaque(Expr::Cos(inner)), Rational::one()),
    })
}

fn canonical_exp(u: &Fraction) -> Result<Fraction> {
    if !u.is_polynomial() {
        return Ok(Fraction::atom_power(
            Atom::Opaque(Expr::Exp(fraction_to_expr(u).boxed())),
            Rational::one(),
        ));
    }
    let mut result = Fraction::one();
    for (m, c) in u.numer().terms() {
        // exp(c*log(v)) = v^c
        if let Some((Atom::Opaque(Expr::Log(v)), e)) = m.single() {
            if e.is_one() {
                result = result.mul(&rational_power(&canonical(v)?, c)?);
                continue;
            }
        }
        result = result.mul(&Fraction::atom_power(Atom::Exp(m.clone()), c.clone()));
    }
    Ok(result)
}

fn canonical_log(u: &Fraction) -> Result<Fraction> {
    if u.is_zero() {
        return Err(CasError::Domain("log(0)".into()));
    }
    if u.as_constant().is_some_and(|c| c.is_one()) {
        return Ok(Fraction::zero());
    }
    if u.is_polynomial() {
        if let Some((m, c)) = u.numer().as_term() {
            if c.is_one() && m.factors().all(|(atom, _)| matches!(atom, Atom::Exp(_))) {
                // log(exp(a)^p * exp(b)^q) = p*a + q*b
                let mut sum = Poly::zero();
                for (atom, e) in m.factors() {
                    if let Atom::Exp(inner) = atom {
                        sum = sum.add(&Poly::term(e.clone(), inner.clone()));
                    }
                }
                return Ok(Fraction::from_poly(sum));
            }
        }
    }
    Ok(Fraction::atom_power(
        Atom::Opaque(Expr::Log(fraction_to_expr(u).boxed())),
        Rational::one(),
    ))
}

/// Render a canonical fraction as an expression tree.
pub fn fraction_to_expr(f: &Fraction) -> Expr {
    let num = poly_to_expr(f.numer());
    if f.is_polynomial() {
        num
    } else {
        Expr::Div(num.boxed(), poly_to_expr(f.denom()).boxed())
    }
}

fn poly_to_expr(p: &Poly) -> Expr {
    let mut acc: Option<Expr> = None;
    for (m, c) in p.sorted_terms() {
        let term = term_to_expr(&c.abs(), m);
        acc = Some(match acc {
            None if c.is_negative() => term.negate(),
            None => term,
            Some(prev) if c.is_negative() => Expr::Sub(prev.boxed(), term.boxed()),
            Some(prev) => Expr::Add(prev.boxed(), term.boxed()),
        });
    }
    acc.unwrap_or_else(zero)
}

fn signed_term(c: &Rational, m: &Monomial) -> Expr {
    let term = term_to_expr(&c.abs(), m);
    if c.is_negative() { term.negate() } else { term }
}

// `coeff` is positive; negative exponents land in the denominator and all
// exp atoms merge into a single exp(...) factor.
fn term_to_expr(coeff: &Rational, m: &Monomial) -> Expr {
    let mut numer = Vec::new();
    let mut denom = Vec::new();
    if !coeff.numer().is_one() {
        numer.push(Expr::integer(coeff.numer().clone()));
    }
    if !coeff.denom().is_one() {
        denom.push(Expr::integer(coeff.denom().clone()));
    }

    let mut exp_arg = Poly::zero();
    for (atom, e) in m.factors() {
        let base = match atom {
            Atom::Exp(inner) => {
                exp_arg = exp_arg.add(&Poly::term(e.clone(), inner.clone()));
                continue;
            }
            Atom::Symbol(name) => Expr::Variable(name.clone()),
            Atom::Opaque(expr) => expr.clone(),
        };
        if e.is_negative() {
            denom.push(power_expr(base, -e.clone()));
        } else {
            numer.push(power_expr(base, e.clone()));
        }
    }
    if !exp_arg.is_zero() {
        numer.push(Expr::Exp(poly_to_expr(&exp_arg).boxed()));
    }

    let top = product(numer);
    if denom.is_empty() {
        top
    } else {
        Expr::Div(top.boxed(), product(denom).boxed())
    }
}

fn power_expr(base: Expr, e: Rational) -> Expr {
    if e.is_one() {
        base
    } else {
        Expr::Pow(base.boxed(), Expr::Constant(e).boxed())
    }
}

fn product(factors: Vec<Expr>) -> Expr {
    factors
        .into_iter()
        .reduce(|acc, f| Expr::Mul(acc.boxed(), f.boxed()))
        .unwrap_or_else(one)
}

/// Symbolic zero test with the default options.
pub fn is_zero(expr: &Expr) -> Result<bool> {
    is_zero_with(expr, &ZeroTestOptions::default())
}

pub fn is_zero_with(expr: &Expr, options: &ZeroTestOptions) -> Result<bool> {
    Ok(fraction_is_zero(&canonical(expr)?, options))
}

/// How a zero verdict was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZeroEvidence {
    /// The canonical numerator cancelled.
    Symbolic,
    /// Only the numeric fallback saw the numerator vanish.
    Sampled,
}

pub fn fraction_is_zero(f: &Fraction, options: &ZeroTestOptions) -> bool {
    zero_evidence(f, options).is_some()
}

/// `Some` when `f` is zero, saying how that was established. Numerators that
/// keep opaque atoms are sampled, since identities such as
/// `sin^2 + cos^2 = 1` are invisible to the polynomial layer.
pub fn zero_evidence(f: &Fraction, options: &ZeroTestOptions) -> Option<ZeroEvidence> {
    if f.is_zero() {
        return Some(ZeroEvidence::Symbolic);
    }
    if !options.numeric_fallback || !f.numer().has_opaque() {
        return None;
    }
    vanishes_at_samples(f.numer(), options).then_some(ZeroEvidence::Sampled)
}

fn vanishes_at_samples(p: &Poly, options: &ZeroTestOptions) -> bool {
    let terms: Vec<Expr> = p.terms().map(|(m, c)| signed_term(c, m)).collect();
    let symbols: Vec<String> = p.free_symbols().into_iter().collect();

    let mut valid = 0;
    for point in SAMPLE_POINTS {
        let bindings: HashMap<&str, f64> = symbols
            .iter()
            .enumerate()
            .map(|(j, name)| (name.as_str(), sample_coordinate(point, j)))
            .collect();
        let values: Option<Vec<f64>> = terms
            .iter()
            .map(|t| eval_f64(t, &bindings).ok().filter(|v| v.is_finite()))
            .collect();
        let Some(values) = values else {
            continue;
        };
        let sum: f64 = values.iter().sum();
        let scale = values.iter().map(|v| v.abs()).sum::<f64>().max(1.0);
        if sum.abs() > options.tolerance * scale {
            return false;
        }
        valid += 1;
    }
    valid >= options.min_valid_samples
}

fn sample_coordinate((a, b): (f64, f64), index: usize) -> f64 {
    let base = if index % 2 == 0 { a } else { b };
    base + 0.17 * (index / 2) as f64
}
