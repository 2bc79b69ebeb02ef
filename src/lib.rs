//! Analysis of first-order differential equations `M(x,y) dx + N(x,y) dy = 0`:
//! exactness, integrating factors, the explicit slope form and numeric
//! trajectories, on top of a small symbolic algebra layer.

pub mod analysis;
pub mod calculus;
pub mod config;
pub mod equation;
pub mod error;
pub mod eval;
pub mod exactness;
pub mod explicit;
pub mod expr;
pub mod format;
pub mod numeric;
pub mod parser;
pub mod polynomial;
pub mod search;
pub mod simplify;
pub mod transform;

pub use analysis::{AnalysisRecord, FactorOutcome, NOT_FOUND_LABEL, analyze, analyze_equation, analyze_with};
pub use calculus::{IntegrationResult, ReasonCode, Strategy, differentiate, integrate, partial};
pub use config::{AnalysisOptions, IvpOptions, ZeroTestOptions};
pub use equation::{Equation, normalize_input};
pub use error::{AnalysisError, CasError, NumericError, Result};
pub use exactness::{Exactness, check, check_with};
pub use explicit::{UNDEFINED_EXPLICIT, explicit};
pub use expr::{Expr, Rational, add, div, exp, log, mul, neg, one, pow, rational, sub, zero};
pub use format::{pretty, render_report};
pub use numeric::{SlopeField, Trajectory, solve_ivp};
pub use parser::parse_expr;
pub use search::{AcceptedFactor, Candidate, SearchContext, StrategyKind, find_integrating_factor, run_strategy};
pub use simplify::{ZeroEvidence, canonical, is_zero, is_zero_with, normalize, simplify, substitute, zero_evidence};
pub use transform::{TransformedEquation, apply};
