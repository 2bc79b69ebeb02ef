use crate::expr::Expr;
use num_rational::BigRational;
use num_traits::{One, Signed};

// Precedence levels: 1 sums, 2 products and negation, 3 powers, 4 atoms.
pub fn pretty(expr: &Expr) -> String {
    fn pp(ctx: u8, expr: &Expr) -> String {
        match expr {
            Expr::Variable(v) => v.clone(),
            Expr::Constant(r) => {
                let prec = if r.is_negative() {
                    2
                } else if r.denom().is_one() {
                    4
                } else {
                    2
                };
                bracket(ctx, prec, show_rational(r))
            }

            Expr::Add(a, b) => {
                let (neg_b, b_inner) = split_neg(b);
                let op = if neg_b { "-" } else { "+" };
                bracket(ctx, 1, format!("{}{op}{}", pp(1, a), pp(2, &b_inner)))
            }

            Expr::Sub(a, b) => {
                let (neg_b, b_inner) = split_neg(b);
                let op = if neg_b { "+" } else { "-" };
                bracket(ctx, 1, format!("{}{op}{}", pp(1, a), pp(2, &b_inner)))
            }

            Expr::Mul(a, b) => bracket(ctx, 2, format!("{}*{}", pp(2, a), pp(3, b))),

            Expr::Div(a, b) => bracket(ctx, 2, format!("{}/{}", pp(2, a), pp(3, b))),

            Expr::Pow(a, b) => bracket(ctx, 3, format!("{}^{}", pp(4, a), pp(4, b))),

            Expr::Neg(a) => bracket(ctx, 2, format!("-{}", pp(2, a))),

            Expr::Sin(a) => format!("sin({})", pp(0, a)),
            Expr::Cos(a) => format!("cos({})", pp(0, a)),
            Expr::Tan(a) => format!("tan({})", pp(0, a)),
            Expr::Exp(a) => format!("exp({})", pp(0, a)),
            Expr::Log(a) => format!("log({})", pp(0, a)),
        }
    }

    pp(0, expr)
}

fn split_neg(expr: &Expr) -> (bool, Expr) {
    match expr {
        Expr::Neg(inner) => (true, *inner.clone()),
        Expr::Constant(r) if r.is_negative() => (true, Expr::Constant(-r)),
        other => (false, other.clone()),
    }
}

fn bracket(ctx: u8, prec: u8, body: String) -> String {
    if prec < ctx {
        format!("({body})")
    } else {
        body
    }
}

fn show_rational(r: &BigRational) -> String {
    if r.denom().is_one() {
        format!("{}", r.numer())
    } else {
        format!("{}/{}", r.numer(), r.denom())
    }
}
