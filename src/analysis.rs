//! One full analysis of `M dx + N dy = 0`: extraction, the exactness check,
//! the integrating-factor search and the re-verified transformed equation.

use tracing::{debug, debug_span};

use crate::config::AnalysisOptions;
use crate::equation::{Equation, normalize_input};
use crate::error::{AnalysisError, CasError};
use crate::exactness::check_with;
use crate::explicit::explicit;
use crate::expr::Expr;
use crate::search::{SearchContext, StrategyKind, find_integrating_factor};
use crate::transform::{TransformedEquation, apply};

/// Label reported when the search comes up empty.
pub const NOT_FOUND_LABEL: &str = "not found with the available methods";

/// What happened to the integrating-factor search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FactorOutcome {
    /// The equation was already exact; the search never ran.
    NotNeeded,
    /// Every strategy was exhausted.
    NotFound,
    Found(Box<TransformedEquation>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisRecord {
    /// The input after whitespace, alias and `=0` normalisation.
    pub original_input: String,
    pub m: Expr,
    pub n: Expr,
    pub dm_dy: Expr,
    pub dn_dx: Expr,
    pub difference: Expr,
    pub is_exact: bool,
    /// `is_exact` came from numeric sampling.
    pub sampled: bool,
    pub factor: FactorOutcome,
}

impl AnalysisRecord {
    pub fn integrating_factor(&self) -> Option<&Expr> {
        self.transformed().map(|t| &t.factor)
    }

    /// The accepted factor's label, [`NOT_FOUND_LABEL`] after a failed
    /// search, `None` when no search was needed.
    pub fn strategy_label(&self) -> Option<&str> {
        match &self.factor {
            FactorOutcome::NotNeeded => None,
            FactorOutcome::NotFound => Some(NOT_FOUND_LABEL),
            FactorOutcome::Found(t) => Some(&t.label),
        }
    }

    pub fn strategy(&self) -> Option<StrategyKind> {
        self.transformed().map(|t| t.strategy)
    }

    pub fn transformed(&self) -> Option<&TransformedEquation> {
        match &self.factor {
            FactorOutcome::Found(t) => Some(t),
            _ => None,
        }
    }

    /// Explicit slope form of the original equation.
    pub fn explicit_form(&self) -> Result<String, CasError> {
        explicit(&self.m, &self.n)
    }
}

pub fn analyze(input: &str) -> Result<AnalysisRecord, AnalysisError> {
    analyze_with(input, &AnalysisOptions::default())
}

pub fn analyze_with(input: &str, options: &AnalysisOptions) -> Result<AnalysisRecord, AnalysisError> {
    let normalized = normalize_input(input);
    let _span = debug_span!("analyze", input = %normalized).entered();
    let equation = crate::equation::extract(&normalized)?;
    analyze_equation(normalized, &equation, options)
}

/// Analyse an already extracted equation; `original_input` is carried into
/// the record untouched.
pub fn analyze_equation(
    original_input: impl Into<String>,
    equation: &Equation,
    options: &AnalysisOptions,
) -> Result<AnalysisRecord, AnalysisError> {
    let Equation { m, n } = equation;
    let exactness = check_with(m, n, &options.zero_test)?;
    debug!(
        exact = exactness.is_exact,
        sampled = exactness.sampled,
        difference = %exactness.difference,
        "exactness checked"
    );

    let factor = if exactness.is_exact {
        FactorOutcome::NotNeeded
    } else {
        let ctx = SearchContext {
            m,
            n,
            dm_dy: &exactness.dm_dy,
            dn_dx: &exactness.dn_dx,
            options,
        };
        match find_integrating_factor(&ctx) {
            Some(accepted) => {
                FactorOutcome::Found(Box::new(apply(m, n, &accepted, &options.zero_test)?))
            }
            None => FactorOutcome::NotFound,
        }
    };

    Ok(AnalysisRecord {
        original_input: original_input.into(),
        m: m.clone(),
        n: n.clone(),
        dm_dy: exactness.dm_dy,
        dn_dx: exactness.dn_dx,
        difference: exactness.difference,
        is_exact: exactness.is_exact,
        sampled: exactness.sampled,
        factor,
    })
}
