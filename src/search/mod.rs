//! Ordered search for an integrating factor.
//!
//! Strategies run in [`StrategyKind::CHAIN`] order. Each one proposes
//! candidates; every candidate is checked by multiplying it in, re-deriving
//! both partials and testing their difference for zero. The first candidate
//! that passes ends the search, so later strategies are never consulted.

pub mod strategies;
pub mod tables;

use std::fmt;

use tracing::{debug, trace};

use crate::calculus::differentiate;
use crate::config::AnalysisOptions;
use crate::error::Result;
use crate::expr::{Expr, mul, sub};
use crate::simplify::{ZeroEvidence, canonical, zero_evidence};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// `μ(x) = exp(∫ (M_y - N_x)/N dx)`.
    MuX,
    /// `μ(y) = exp(∫ (N_x - M_y)/M dy)`.
    MuY,
    /// Quotients equal to `-1/y`, `-2/y` or `1/y`, mapped without integrating.
    MuYPattern,
    Enumerated,
    RationalForm,
    ExtendedCommon,
    /// `x^m y^n` over a square exponent grid.
    ExponentGrid,
    LinearCombination,
    /// Powers of `x` or `y` when `1/x` or `1/y` appears literally.
    RationalSingularity,
    /// Solves `M_y - N_x = a N/x - b M/y`, then tries reciprocal monomials
    /// for homogeneous equations.
    DegreeRatio,
    Trigonometric,
    PolynomialHeuristic,
}

impl StrategyKind {
    pub const CHAIN: [StrategyKind; 12] = [
        StrategyKind::MuX,
        StrategyKind::MuY,
        StrategyKind::MuYPattern,
        StrategyKind::Enumerated,
        StrategyKind::RationalForm,
        StrategyKind::ExtendedCommon,
        StrategyKind::ExponentGrid,
        StrategyKind::LinearCombination,
        StrategyKind::RationalSingularity,
        StrategyKind::DegreeRatio,
        StrategyKind::Trigonometric,
        StrategyKind::PolynomialHeuristic,
    ];

    /// One-based position in the chain.
    pub fn step(self) -> usize {
        Self::CHAIN
            .iter()
            .position(|k| *k == self)
            .map_or(0, |i| i + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::MuX => "mu-x",
            StrategyKind::MuY => "mu-y",
            StrategyKind::MuYPattern => "mu-y-pattern",
            StrategyKind::Enumerated => "enumerated",
            StrategyKind::RationalForm => "rational-form",
            StrategyKind::ExtendedCommon => "extended-common",
            StrategyKind::ExponentGrid => "exponent-grid",
            StrategyKind::LinearCombination => "linear-combination",
            StrategyKind::RationalSingularity => "rational-singularity",
            StrategyKind::DegreeRatio => "degree-ratio",
            StrategyKind::Trigonometric => "trigonometric",
            StrategyKind::PolynomialHeuristic => "polynomial-heuristic",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A proposed factor with a human-readable label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub factor: Expr,
    pub label: String,
}

impl Candidate {
    pub fn new(factor: Expr, label: impl Into<String>) -> Self {
        Candidate {
            factor,
            label: label.into(),
        }
    }
}

/// A verified factor and the strategy that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcceptedFactor {
    pub candidate: Candidate,
    pub strategy: StrategyKind,
}

/// Inputs shared by every strategy.
#[derive(Clone, Copy, Debug)]
pub struct SearchContext<'a> {
    pub m: &'a Expr,
    pub n: &'a Expr,
    pub dm_dy: &'a Expr,
    pub dn_dx: &'a Expr,
    pub options: &'a AnalysisOptions,
}

/// Walk the chain and return the first verified factor.
pub fn find_integrating_factor(ctx: &SearchContext<'_>) -> Option<AcceptedFactor> {
    for kind in StrategyKind::CHAIN {
        debug!(step = kind.step(), strategy = kind.name(), "trying strategy");
        if let Some(candidate) = run_strategy(kind, ctx) {
            debug!(strategy = kind.name(), label = %candidate.label, factor = %candidate.factor, "accepted integrating factor");
            return Some(AcceptedFactor {
                candidate,
                strategy: kind,
            });
        }
    }
    debug!("no integrating factor found");
    None
}

/// Run a single strategy in isolation; `None` when none of its candidates verify.
pub fn run_strategy(kind: StrategyKind, ctx: &SearchContext<'_>) -> Option<Candidate> {
    strategies::propose(kind, ctx)
        .into_iter()
        .find(|candidate| match verify(ctx, &candidate.factor) {
            Ok(true) => true,
            Ok(false) => {
                trace!(strategy = kind.name(), label = %candidate.label, "candidate rejected");
                false
            }
            Err(err) => {
                trace!(strategy = kind.name(), label = %candidate.label, error = %err, "candidate failed");
                false
            }
        })
}

/// Does multiplying by `factor` make the equation exact?
pub fn verify(ctx: &SearchContext<'_>, factor: &Expr) -> Result<bool> {
    if canonical(factor)?.is_zero() {
        return Ok(false);
    }
    let m_new = mul(factor.clone(), ctx.m.clone());
    let n_new = mul(factor.clone(), ctx.n.clone());
    let residual = sub(differentiate("y", &m_new), differentiate("x", &n_new));
    let evidence = zero_evidence(&canonical(&residual)?, &ctx.options.zero_test);
    if evidence == Some(ZeroEvidence::Sampled) {
        debug!(factor = %factor, "residual vanished only at the numeric samples");
    }
    Ok(evidence.is_some())
}
