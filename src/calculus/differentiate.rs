use crate::error::Result;
use crate::expr::{Expr, Rational};
use crate::simplify::{normalize, simplify, simplify_add, simplify_mul, simplify_neg, simplify_sub};
use num_traits::{One, Zero};

/// Partial derivative of `expr` with respect to `var`, lightly simplified.
pub fn differentiate(var: &str, expr: &Expr) -> Expr {
    Differentiator { var }.derive(expr)
}

/// Partial derivative in canonical form.
pub fn partial(var: &str, expr: &Expr) -> Result<Expr> {
    normalize(&differentiate(var, expr))
}

struct Differentiator<'a> {
    var: &'a str,
}

impl Differentiator<'_> {
    fn derive(&self, expr: &Expr) -> Expr {
        if !expr.mentions(self.var) {
            return Expr::Constant(Rational::zero());
        }
        match expr {
            Expr::Variable(_) => Expr::Constant(Rational::one()),
            Expr::Constant(_) => Expr::Constant(Rational::zero()),

            Expr::Add(a, b) => simplify_add(self.derive(a), self.derive(b)),
            Expr::Sub(a, b) => simplify_sub(self.derive(a), self.derive(b)),
            Expr::Mul(a, b) => self.product_rule(a, b),
            Expr::Div(a, b) => self.quotient_rule(a, b),
            Expr::Pow(a, b) => self.power_rule(a, b),
            Expr::Neg(a) => simplify_neg(self.derive(a)),

            Expr::Sin(a) => self.chain_rule(a, Expr::Cos(a.clone())),
            Expr::Cos(a) => simplify_neg(self.chain_rule(a, Expr::Sin(a.clone()))),
            Expr::Tan(a) => {
                let sec2 = Expr::Pow(
                    Expr::Cos(a.clone()).boxed(),
                    Expr::Constant(Rational::from_integer((-2).into())).boxed(),
                );
                self.chain_rule(a, sec2)
            }
            Expr::Exp(a) => self.chain_rule(a, Expr::Exp(a.clone())),
            Expr::Log(a) => simplify(Expr::Div(self.derive(a).boxed(), a.clone().boxed())),
        }
    }

    fn product_rule(&self, a: &Expr, b: &Expr) -> Expr {
        simplify_add(
            simplify_mul(self.derive(a), b.clone()),
            simplify_mul(a.clone(), self.derive(b)),
        )
    }

    fn quotient_rule(&self, a: &Expr, b: &Expr) -> Expr {
        let da = self.derive(a);
        let db = self.derive(b);
        if db.is_zero() {
            return simplify(Expr::Div(da.boxed(), b.clone().boxed()));
        }
        simplify(Expr::Div(
            Expr::Sub(
                Expr::Mul(da.boxed(), b.clone().boxed()).boxed(),
                Expr::Mul(a.clone().boxed(), db.boxed()).boxed(),
            )
            .boxed(),
            Expr::Pow(
                b.clone().boxed(),
                Expr::Constant(Rational::from_integer(2.into())).boxed(),
            )
            .boxed(),
        ))
    }

    fn power_rule(&self, base: &Expr, exp: &Expr) -> Expr {
        if !exp.mentions(self.var) {
            // d(u^n) = n*u^(n-1)*u'
            let lowered = simplify(Expr::Pow(
                base.clone().boxed(),
                Expr::Sub(exp.clone().boxed(), Expr::Constant(Rational::one()).boxed()).boxed(),
            ));
            return simplify_mul(simplify_mul(exp.clone(), lowered), self.derive(base));
        }
        // d(u^v) = u^v*(v'*log(u) + v*u'/u)
        let f = Expr::Pow(base.clone().boxed(), exp.clone().boxed());
        let da = self.derive(base);
        let db = self.derive(exp);
        simplify_mul(
            f,
            simplify_add(
                simplify_mul(db, Expr::Log(base.clone().boxed())),
                simplify(Expr::Div(
                    Expr::Mul(exp.clone().boxed(), da.boxed()).boxed(),
                    base.clone().boxed(),
                )),
            ),
        )
    }

    fn chain_rule(&self, arg: &Expr, outer_derivative: Expr) -> Expr {
        simplify_mul(self.derive(arg), outer_derivative)
    }
}
