use crate::expr::Expr;

/// Substitute variable `var` with `replacement` throughout `expr`.
pub fn substitute(expr: &Expr, var: &str, replacement: &Expr) -> Expr {
    let sub = |e: &Expr| substitute(e, var, replacement).boxed();
    match expr {
        Expr::Variable(name) if name == var => replacement.clone(),
        Expr::Variable(_) | Expr::Constant(_) => expr.clone(),
        Expr::Add(a, b) => Expr::Add(sub(a), sub(b)),
        Expr::Sub(a, b) => Expr::Sub(sub(a), sub(b)),
        Expr::Mul(a, b) => Expr::Mul(sub(a), sub(b)),
        Expr::Div(a, b) => Expr::Div(sub(a), sub(b)),
        Expr::Pow(a, b) => Expr::Pow(sub(a), sub(b)),
        Expr::Neg(a) => Expr::Neg(sub(a)),
        Expr::Sin(a) => Expr::Sin(sub(a)),
        Expr::Cos(a) => Expr::Cos(sub(a)),
        Expr::Tan(a) => Expr::Tan(sub(a)),
        Expr::Exp(a) => Expr::Exp(sub(a)),
        Expr::Log(a) => Expr::Log(sub(a)),
    }
}

/// Apply several substitutions simultaneously.
pub fn substitute_all(expr: &Expr, bindings: &[(&str, Expr)]) -> Expr {
    match expr {
        Expr::Variable(name) => bindings
            .iter()
            .find(|(var, _)| var == name)
            .map(|(_, replacement)| replacement.clone())
            .unwrap_or_else(|| expr.clone()),
        Expr::Constant(_) => expr.clone(),
        Expr::Add(a, b) => Expr::Add(
            substitute_all(a, bindings).boxed(),
            substitute_all(b, bindings).boxed(),
        ),
        Expr::Sub(a, b) => Expr::Sub(
            substitute_all(a, bindings).boxed(),
            substitute_all(b, bindings).boxed(),
        ),
        Expr::Mul(a, b) => Expr::Mul(
            substitute_all(a, bindings).boxed(),
            substitute_all(b, bindings).boxed(),
        ),
        Expr::Div(a, b) => Expr::Div(
            substitute_all(a, bindings).boxed(),
            substitute_all(b, bindings).boxed(),
        ),
        Expr::Pow(a, b) => Expr::Pow(
            substitute_all(a, bindings).boxed(),
            substitute_all(b, bindings).boxed(),
        ),
        Expr::Neg(a) => Expr::Neg(substitute_all(a, bindings).boxed()),
        Expr::Sin(a) => Expr::Sin(substitute_all(a, bindings).boxed()),
        Expr::Cos(a) => Expr::Cos(substitute_all(a, bindings).boxed()),
        Expr::Tan(a) => Expr::Tan(substitute_all(a, bindings).boxed()),
        Expr::Exp(a) => Expr::Exp(substitute_all(a, bindings).boxed()),
        Expr::Log(a) => Expr::Log(substitute_all(a, bindings).boxed()),
    }
}
