//! Candidate generators, one per [`StrategyKind`].

use tracing::trace;

use crate::calculus::{IntegrationResult, integrate};
use crate::config::ZeroTestOptions;
use crate::error::Result;
use crate::expr::{Expr, add, div, exp, mul, pow, sub};
use crate::parser::parse_expr;
use crate::polynomial::{Fraction, Poly};
use crate::search::tables;
use crate::search::{Candidate, SearchContext, StrategyKind};
use crate::simplify::{canonical, fraction_to_expr, is_zero_with, normalize, substitute_all};

/// Every candidate a strategy would try, in order.
pub fn propose(kind: StrategyKind, ctx: &SearchContext<'_>) -> Vec<Candidate> {
    match kind {
        StrategyKind::MuX => mu_x(ctx),
        StrategyKind::MuY => mu_y(ctx),
        StrategyKind::MuYPattern => mu_y_pattern(ctx),
        StrategyKind::Enumerated => from_table(tables::ENUMERATED),
        StrategyKind::RationalForm => rational_form(ctx),
        StrategyKind::ExtendedCommon => from_table(tables::EXTENDED_COMMON),
        StrategyKind::ExponentGrid => exponent_grid(ctx.options.exponent_grid),
        StrategyKind::LinearCombination => from_table(tables::LINEAR_COMBINATIONS),
        StrategyKind::RationalSingularity => rational_singularity(ctx),
        StrategyKind::DegreeRatio => degree_ratio(ctx),
        StrategyKind::Trigonometric => trigonometric(ctx),
        StrategyKind::PolynomialHeuristic => polynomial_heuristic(ctx),
    }
}

/// `(∂M/∂y - ∂N/∂x)/N`, absent when `N` is zero.
pub fn quotient_x(ctx: &SearchContext<'_>) -> Result<Option<Fraction>> {
    if ctx.n.is_zero() {
        return Ok(None);
    }
    canonical(&div(sub(ctx.dm_dy.clone(), ctx.dn_dx.clone()), ctx.n.clone())).map(Some)
}

/// `(∂N/∂x - ∂M/∂y)/M`, absent when `M` is zero.
pub fn quotient_y(ctx: &SearchContext<'_>) -> Result<Option<Fraction>> {
    if ctx.m.is_zero() {
        return Ok(None);
    }
    canonical(&div(sub(ctx.dn_dx.clone(), ctx.dm_dy.clone()), ctx.m.clone())).map(Some)
}

fn mu_x(ctx: &SearchContext<'_>) -> Vec<Candidate> {
    settle(quotient_x(ctx), "x-quotient")
        .and_then(|q| exponential_of_integral(&q, "x", "y", "μ(x)"))
        .into_iter()
        .collect()
}

fn mu_y(ctx: &SearchContext<'_>) -> Vec<Candidate> {
    settle(quotient_y(ctx), "y-quotient")
        .and_then(|q| exponential_of_integral(&q, "y", "x", "μ(y)"))
        .into_iter()
        .collect()
}

/// `exp(∫ q d(var))` when `q` is nonzero and free of `other`.
fn exponential_of_integral(q: &Fraction, var: &str, other: &str, label: &str) -> Option<Candidate> {
    if q.is_zero() || q.mentions(other) {
        return None;
    }
    match integrate(var, &fraction_to_expr(q)) {
        Ok(IntegrationResult::Integrated { result, .. }) => match normalize(&exp(result)) {
            Ok(factor) => Some(Candidate::new(factor, label)),
            Err(err) => {
                trace!(label, error = %err, "cannot exponentiate integral");
                None
            }
        },
        Ok(IntegrationResult::NotIntegrable(reason)) => {
            trace!(label, ?reason, "quotient not integrable");
            None
        }
        Err(err) => {
            trace!(label, error = %err, "integration failed");
            None
        }
    }
}

fn mu_y_pattern(ctx: &SearchContext<'_>) -> Vec<Candidate> {
    match settle(quotient_y(ctx), "y-quotient") {
        Some(q) => match_quotient(&q, tables::QUOTIENT_Y_PATTERNS),
        None => Vec::new(),
    }
}

/// Candidates from the rows of `table` whose quotient shape equals `q`.
fn match_quotient(q: &Fraction, table: &[(&str, &str, &str)]) -> Vec<Candidate> {
    table
        .iter()
        .filter(|(shape, _, _)| {
            parse_expr(shape)
                .and_then(|e| canonical(&e))
                .is_ok_and(|expected| expected == *q)
        })
        .filter_map(|(_, factor, label)| parse_candidate(factor, label))
        .collect()
}

fn rational_form(ctx: &SearchContext<'_>) -> Vec<Candidate> {
    let mut out = from_table(tables::RATIONAL_BASE);
    if let Some(s) = binomial_subterm(ctx) {
        let x = Expr::var("x");
        let text = s.to_string();
        out.push(Candidate::new(div(Expr::integer(1), s.clone()), format!("μ = 1/({text})")));
        out.push(Candidate::new(div(x.clone(), s.clone()), format!("μ = x/({text})")));
        out.push(Candidate::new(div(s, x), format!("μ = ({text})/x")));
    }
    out
}

/// A two-term sub-polynomial of M or N shaped like `1 + k·m`, where the
/// monomial `m` involves both `x` and `y`.
fn binomial_subterm(ctx: &SearchContext<'_>) -> Option<Expr> {
    let fractions: Vec<Fraction> = [ctx.m, ctx.n]
        .into_iter()
        .filter_map(|e| canonical(e).ok())
        .collect();
    fractions
        .iter()
        .flat_map(|f| [f.numer(), f.denom()])
        .find_map(|p| {
            if p.len() != 2 {
                return None;
            }
            let constant = p.terms().find(|(m, _)| m.is_unit()).map(|(_, c)| c.clone())?;
            let (m, _) = p.terms().find(|(m, _)| !m.is_unit())?;
            if !(m.mentions("x") && m.mentions("y")) {
                return None;
            }
            let normalized: Poly = p.scale(&constant.recip());
            Some(fraction_to_expr(&Fraction::from_poly(normalized)))
        })
}

fn exponent_grid(radius: i32) -> Vec<Candidate> {
    let mut out = Vec::new();
    for m in -radius..=radius {
        for n in -radius..=radius {
            if m == 0 && n == 0 {
                continue;
            }
            out.push(Candidate::new(
                monomial_factor(m, n),
                format!("μ = x^{m} * y^{n}"),
            ));
        }
    }
    out
}

fn rational_singularity(ctx: &SearchContext<'_>) -> Vec<Candidate> {
    let mut out = Vec::new();
    if ctx.m.to_string().contains("1/x") {
        out.extend((1..=3).map(|k| {
            Candidate::new(monomial_factor(k, 0), format!("μ = x^{k} (removing singularity)"))
        }));
    }
    if ctx.n.to_string().contains("1/y") {
        out.extend((1..=3).map(|k| {
            Candidate::new(monomial_factor(0, k), format!("μ = y^{k} (removing singularity)"))
        }));
    }
    out
}

fn degree_ratio(ctx: &SearchContext<'_>) -> Vec<Candidate> {
    let mut out = Vec::new();
    let radius = ctx.options.ratio_range;
    let difference = sub(ctx.dm_dy.clone(), ctx.dn_dx.clone());
    let (x, y) = (Expr::var("x"), Expr::var("y"));

    for a in -radius..=radius {
        for b in -radius..=radius {
            if a == 0 && b == 0 {
                continue;
            }
            // μ = x^a y^b works iff M_y - N_x = a N/x - b M/y
            let rhs = sub(
                div(mul(Expr::integer(a), ctx.n.clone()), x.clone()),
                div(mul(Expr::integer(b), ctx.m.clone()), y.clone()),
            );
            match is_zero_with(&sub(difference.clone(), rhs), &ctx.options.zero_test) {
                Ok(true) => out.push(Candidate::new(
                    monomial_factor(a, b),
                    format!("μ = x^{a} * y^{b}"),
                )),
                Ok(false) => {}
                Err(err) => trace!(a, b, error = %err, "ratio condition failed"),
            }
        }
    }

    let max = ctx.options.max_homogeneous_degree;
    let degrees = (
        homogeneous_degree(ctx.m, max, &ctx.options.zero_test),
        homogeneous_degree(ctx.n, max, &ctx.options.zero_test),
    );
    if let (Some(dm), Some(dn)) = degrees {
        if dm == dn {
            let bound = dm as i32 + 1;
            for i in 0..=bound {
                for j in 0..=bound {
                    if i == 0 && j == 0 {
                        continue;
                    }
                    out.push(Candidate::new(
                        monomial_factor(-i, -j),
                        format!("μ = 1/(x^{i} * y^{j})"),
                    ));
                }
            }
            // the classical factor of a homogeneous equation
            let xm_yn = add(mul(x, ctx.m.clone()), mul(y, ctx.n.clone()));
            if is_zero_with(&xm_yn, &ctx.options.zero_test).is_ok_and(|zero| !zero) {
                out.push(Candidate::new(div(Expr::integer(1), xm_yn), "μ = 1/(xM + yN)"));
            }
        }
    }
    out
}

/// Smallest `k ≤ max` with `f(tx, ty) = t^k f(x, y)`.
pub fn homogeneous_degree(expr: &Expr, max: u32, zero_test: &ZeroTestOptions) -> Option<u32> {
    let t = Expr::var("t");
    let scaled = substitute_all(
        expr,
        &[
            ("x", mul(t.clone(), Expr::var("x"))),
            ("y", mul(t.clone(), Expr::var("y"))),
        ],
    );
    (0..=max).find(|k| {
        let residual = sub(scaled.clone(), mul(pow(t.clone(), Expr::integer(*k)), expr.clone()));
        is_zero_with(&residual, zero_test).unwrap_or(false)
    })
}

fn trigonometric(ctx: &SearchContext<'_>) -> Vec<Candidate> {
    if ctx.m.has_trig() || ctx.n.has_trig() {
        from_table(tables::TRIGONOMETRIC)
    } else {
        Vec::new()
    }
}

fn polynomial_heuristic(ctx: &SearchContext<'_>) -> Vec<Candidate> {
    let mut out = Vec::new();
    if let Some(q) = settle(quotient_y(ctx), "y-quotient") {
        out.extend(match_quotient(&q, tables::QUOTIENT_Y));
    }
    if let Some(q) = settle(quotient_x(ctx), "x-quotient") {
        out.extend(match_quotient(&q, tables::QUOTIENT_X));
    }
    out.extend(from_table(tables::RATIO_FALLBACK));
    out
}

/// `x^a y^b`, negative exponents written as an explicit reciprocal.
pub fn monomial_factor(a: i32, b: i32) -> Expr {
    let mut numer = Vec::new();
    let mut denom = Vec::new();
    for (var, e) in [("x", a), ("y", b)] {
        if e == 0 {
            continue;
        }
        let k = e.unsigned_abs();
        let factor = if k == 1 {
            Expr::var(var)
        } else {
            pow(Expr::var(var), Expr::integer(k))
        };
        if e > 0 {
            numer.push(factor);
        } else {
            denom.push(factor);
        }
    }
    let product = |factors: Vec<Expr>| {
        factors
            .into_iter()
            .reduce(mul)
            .unwrap_or_else(|| Expr::integer(1))
    };
    if denom.is_empty() {
        product(numer)
    } else {
        div(product(numer), product(denom))
    }
}

fn from_table(table: &[(&str, &str)]) -> Vec<Candidate> {
    table
        .iter()
        .filter_map(|(factor, label)| parse_candidate(factor, label))
        .collect()
}

fn parse_candidate(factor: &str, label: &str) -> Option<Candidate> {
    match parse_expr(factor) {
        Ok(expr) => Some(Candidate::new(expr, label)),
        Err(err) => {
            trace!(factor, error = %err, "skipping unparsable table entry");
            None
        }
    }
}

fn settle<T>(value: Result<Option<T>>, what: &str) -> Option<T> {
    match value {
        Ok(v) => v,
        Err(err) => {
            trace!(what, error = %err, "cannot form quotient");
            None
        }
    }
}
