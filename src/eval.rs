use std::collections::HashMap;

use crate::error::{CasError, Result};
use crate::expr::{Expr, Rational};
use num_traits::ToPrimitive;

/// Evaluate `expr` in floating point. Unbound variables are an error; domain
/// violations (`log` of a negative number, division by zero) surface as
/// non-finite values for the caller to judge.
pub fn eval_f64(expr: &Expr, bindings: &HashMap<&str, f64>) -> Result<f64> {
    Ok(match expr {
        Expr::Variable(name) => *bindings
            .get(name.as_str())
            .ok_or_else(|| CasError::Unsupported(format!("unbound variable '{name}'")))?,
        Expr::Constant(c) => rational_to_f64(c),
        Expr::Add(a, b) => eval_f64(a, bindings)? + eval_f64(b, bindings)?,
        Expr::Sub(a, b) => eval_f64(a, bindings)? - eval_f64(b, bindings)?,
        Expr::Mul(a, b) => eval_f64(a, bindings)? * eval_f64(b, bindings)?,
        Expr::Div(a, b) => eval_f64(a, bindings)? / eval_f64(b, bindings)?,
        Expr::Pow(a, b) => {
            let base = eval_f64(a, bindings)?;
            match b.as_ref() {
                Expr::Constant(c) if c.is_integer() => match c.to_integer().to_i32() {
                    Some(k) => base.powi(k),
                    None => base.powf(rational_to_f64(c)),
                },
                other => base.powf(eval_f64(other, bindings)?),
            }
        }
        Expr::Neg(a) => -eval_f64(a, bindings)?,
        Expr::Sin(a) => eval_f64(a, bindings)?.sin(),
        Expr::Cos(a) => eval_f64(a, bindings)?.cos(),
        Expr::Tan(a) => eval_f64(a, bindings)?.tan(),
        Expr::Exp(a) => eval_f64(a, bindings)?.exp(),
        Expr::Log(a) => eval_f64(a, bindings)?.ln(),
    })
}

/// Evaluate an expression in `x` and `y`.
pub fn eval_xy(expr: &Expr, x: f64, y: f64) -> Result<f64> {
    let bindings = HashMap::from([("x", x), ("y", y)]);
    eval_f64(expr, &bindings)
}

pub fn rational_to_f64(r: &Rational) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}
