use std::collections::HashMap;

use crate::expr::{Expr, Rational, one, zero};
use num_traits::{One, Pow, ToPrimitive, Zero};

/// Local, structure-preserving cleanup: constant folding and the identities of
/// `0` and `1`. Algebraic normalisation lives in [`crate::simplify::normalize`].
pub fn simplify(expr: Expr) -> Expr {
    let mut cache = HashMap::new();
    simplify_cached(expr, &mut cache)
}

fn simplify_cached(expr: Expr, cache: &mut HashMap<Expr, Expr>) -> Expr {
    if let Some(hit) = cache.get(&expr) {
        return hit.clone();
    }

    let key = expr.clone();
    let result = match expr {
        Expr::Add(a, b) => simplify_add(simplify_cached(*a, cache), simplify_cached(*b, cache)),
        Expr::Sub(a, b) => simplify_sub(simplify_cached(*a, cache), simplify_cached(*b, cache)),
        Expr::Mul(a, b) => simplify_mul(simplify_cached(*a, cache), simplify_cached(*b, cache)),
        Expr::Div(a, b) => simplify_div(simplify_cached(*a, cache), simplify_cached(*b, cache)),
        Expr::Pow(a, b) => simplify_pow(simplify_cached(*a, cache), simplify_cached(*b, cache)),
        Expr::Neg(a) => simplify_neg(simplify_cached(*a, cache)),

        Expr::Sin(a) => match simplify_cached(*a, cache) {
            x if is_zero(&x) => zero(),
            Expr::Neg(inner) => simplify_neg(Expr::Sin(inner)),
            x => Expr::Sin(x.boxed()),
        },

        Expr::Cos(a) => match simplify_cached(*a, cache) {
            x if is_zero(&x) => one(),
            Expr::Neg(inner) => Expr::Cos(inner),
            x => Expr::Cos(x.boxed()),
        },

        Expr::Tan(a) => match simplify_cached(*a, cache) {
            x if is_zero(&x) => zero(),
            Expr::Neg(inner) => simplify_neg(Expr::Tan(inner)),
            x => Expr::Tan(x.boxed()),
        },

        Expr::Exp(a) => match simplify_cached(*a, cache) {
            x if is_zero(&x) => one(),
            Expr::Log(inner) => *inner,
            x => Expr::Exp(x.boxed()),
        },

        Expr::Log(a) => match simplify_cached(*a, cache) {
            x if is_one(&x) => zero(),
            Expr::Exp(inner) => *inner,
            x => Expr::Log(x.boxed()),
        },

        e => e,
    };

    cache.insert(key, result.clone());
    result
}

pub fn simplify_add(x: Expr, y: Expr) -> Expr {
    match (x, y) {
        (Expr::Constant(a), Expr::Constant(b)) => Expr::Constant(a + b),
        (x, y) if is_zero(&x) => y,
        (x, y) if is_zero(&y) => x,
        (x, Expr::Neg(y)) => simplify_sub(x, *y),
        (x, Expr::Constant(c)) if c < Rational::zero() => {
            Expr::Sub(x.boxed(), Expr::Constant(-c).boxed())
        }
        (x, y) => Expr::Add(x.boxed(), y.boxed()),
    }
}

pub fn simplify_sub(x: Expr, y: Expr) -> Expr {
    match (x, y) {
        (Expr::Constant(a), Expr::Constant(b)) => Expr::Constant(a - b),
        (x, y) if is_zero(&y) => x,
        (x, y) if is_zero(&x) => simplify_neg(y),
        (x, y) if x == y => zero(),
        (x, Expr::Neg(y)) => simplify_add(x, *y),
        (x, y) => Expr::Sub(x.boxed(), y.boxed()),
    }
}

pub fn simplify_mul(x: Expr, y: Expr) -> Expr {
    match (x, y) {
        (Expr::Constant(a), Expr::Constant(b)) => Expr::Constant(a * b),
        (x, y) if is_zero(&x) || is_zero(&y) => zero(),
        (x, y) if is_one(&x) => y,
        (x, y) if is_one(&y) => x,
        (Expr::Neg(x), y) => simplify_neg(simplify_mul(*x, y)),
        (x, Expr::Neg(y)) => simplify_neg(simplify_mul(x, *y)),
        (x, Expr::Constant(c)) => Expr::Mul(Expr::Constant(c).boxed(), x.boxed()),
        (x, y) => Expr::Mul(x.boxed(), y.boxed()),
    }
}

pub fn simplify_div(x: Expr, y: Expr) -> Expr {
    match (x, y) {
        // a zero divisor is left in place for the canonical form to report
        (x, y) if is_zero(&y) => Expr::Div(x.boxed(), y.boxed()),
        (Expr::Constant(n), Expr::Constant(d)) => Expr::Constant(n / d),
        (x, _) if is_zero(&x) => zero(),
        (x, y) if is_one(&y) => x,
        (x, y) if x == y => one(),
        (x, y) => Expr::Div(x.boxed(), y.boxed()),
    }
}

pub fn simplify_pow(x: Expr, y: Expr) -> Expr {
    match (x, y) {
        (_, Expr::Constant(e)) if e.is_zero() => one(),
        (base, Expr::Constant(e)) if e.is_one() => base,
        (Expr::Constant(b), Expr::Constant(e)) if e.is_integer() && !b.is_zero() => {
            match e.to_integer().to_i32() {
                Some(k) => Expr::Constant(Pow::pow(&b, k)),
                None => Expr::Pow(Expr::Constant(b).boxed(), Expr::Constant(e).boxed()),
            }
        }
        (Expr::Pow(base, inner), Expr::Constant(e)) => match *inner {
            Expr::Constant(k) if k.is_integer() && e.is_integer() => {
                simplify_pow(*base, Expr::Constant(k * e))
            }
            inner => Expr::Pow(Expr::Pow(base, inner.boxed()).boxed(), Expr::Constant(e).boxed()),
        },
        (x, y) => Expr::Pow(x.boxed(), y.boxed()),
    }
}

pub fn simplify_neg(expr: Expr) -> Expr {
    match expr {
        Expr::Constant(x) => Expr::Constant(-x),
        Expr::Neg(x) => *x,
        other => Expr::Neg(other.boxed()),
    }
}

fn is_zero(expr: &Expr) -> bool {
    matches!(expr, Expr::Constant(r) if r.is_zero())
}

fn is_one(expr: &Expr) -> bool {
    matches!(expr, Expr::Constant(r) if r.is_one())
}
