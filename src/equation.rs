//! Reading `M(x,y) dx + N(x,y) dy = 0` into its coefficient pair.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use crate::error::AnalysisError;
use crate::expr::Expr;
use crate::parser::parse_expr;
use crate::simplify::normalize;

const VARIABLES: [&str; 2] = ["x", "y"];

/// Where a coefficient comes from in a matched shell.
#[derive(Clone, Copy, Debug)]
enum Slot {
    /// The captured group is the coefficient, sign included.
    Capture(usize),
    /// A bare differential: the group holds an optional sign and the coefficient is `±1`.
    Sign(usize),
    /// A parenthesised coefficient preceded by an optional sign group.
    Signed { sign: usize, body: usize },
}

struct Shell {
    pattern: Regex,
    m: Slot,
    n: Slot,
}

fn shell(pattern: &str, m: Slot, n: Slot) -> Shell {
    Shell {
        pattern: Regex::new(pattern).expect("valid shell pattern"),
        m,
        n,
    }
}

// Tried in order, first match wins.
static SHELLS: LazyLock<Vec<Shell>> = LazyLock::new(|| {
    use Slot::*;
    vec![
        shell(r"^(.+?)\*dx([+-].+?)\*dy$", Capture(1), Capture(2)),
        shell(r"^(.+?)\*dy([+-].+?)\*dx$", Capture(2), Capture(1)),
        shell(r"^([+-]?)dx([+-].+?)\*dy$", Sign(1), Capture(2)),
        shell(r"^([+-]?)dy([+-].+?)\*dx$", Capture(2), Sign(1)),
        shell(r"^(.+?)\*dx([+-]?)dy$", Capture(1), Sign(2)),
        shell(r"^(.+?)\*dy([+-]?)dx$", Sign(2), Capture(1)),
        shell(r"^([+-]?)dx([+-]?)dy$", Sign(1), Sign(2)),
        shell(r"^([+-]?)dy([+-]?)dx$", Sign(2), Sign(1)),
        shell(
            r"^\((.+?)\)dx([+-]?)\((.+?)\)dy$",
            Capture(1),
            Signed { sign: 2, body: 3 },
        ),
        shell(
            r"^\((.+?)\)dy([+-]?)\((.+?)\)dx$",
            Signed { sign: 2, body: 3 },
            Capture(1),
        ),
    ]
});

/// Canonicalise the surface syntax of an equation string.
///
/// Removes whitespace, maps the `sen(` alias to `sin(`, `d(x)`/`d(y)` to
/// `dx`/`dy` and `^` to `**`, and drops trailing `=0`s. Applying it twice
/// changes nothing.
pub fn normalize_input(input: &str) -> String {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let replaced = compact
        .replace("sen(", "sin(")
        .replace("d(x)", "dx")
        .replace("d(y)", "dy")
        .replace('^', "**");
    let mut out = replaced.as_str();
    while let Some(stripped) = out.strip_suffix("=0") {
        out = stripped;
    }
    out.to_string()
}

/// Coefficients of a differential-form equation, both in canonical form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation {
    pub m: Expr,
    pub n: Expr,
}

impl Equation {
    /// Normalise `input` and extract its coefficients.
    pub fn parse(input: &str) -> Result<Self, AnalysisError> {
        extract(&normalize_input(input))
    }

    /// Build an equation from already parsed coefficients.
    pub fn from_coefficients(m: &Expr, n: &Expr) -> Result<Self, AnalysisError> {
        let describe = || format!("({m})*dx+({n})*dy");
        check_symbols(m, n, &m.to_string(), &n.to_string())?;
        let m_norm = normalize(m).map_err(|e| coefficient_error(&m.to_string(), &n.to_string(), e))?;
        let n_norm = normalize(n).map_err(|e| coefficient_error(&m.to_string(), &n.to_string(), e))?;
        if m_norm.is_zero() && n_norm.is_zero() {
            return Err(AnalysisError::Degenerate { input: describe() });
        }
        Ok(Equation {
            m: m_norm,
            n: n_norm,
        })
    }

    /// `M dx + N dy = 0` in the normalised input syntax.
    pub fn to_input(&self) -> String {
        normalize_input(&format!("({})dx+({})dy", self.m, self.n))
    }
}

/// Match `normalized` against the known shells and parse both coefficients.
pub fn extract(normalized: &str) -> Result<Equation, AnalysisError> {
    let (shell, caps) = SHELLS
        .iter()
        .enumerate()
        .find_map(|(idx, shell)| {
            shell.pattern.captures(normalized).map(|caps| {
                trace!(shell = idx, input = normalized, "matched equation shell");
                (shell, caps)
            })
        })
        .ok_or_else(|| AnalysisError::Format {
            input: normalized.to_string(),
        })?;

    let m_text = slot_text(&caps, shell.m);
    let n_text = slot_text(&caps, shell.n);
    let parse = |text: &str| {
        parse_expr(text).map_err(|e| coefficient_error(&m_text, &n_text, e))
    };
    let m = parse(&m_text)?;
    let n = parse(&n_text)?;

    Equation::from_coefficients(&m, &n).map_err(|err| match err {
        AnalysisError::Degenerate { .. } => AnalysisError::Degenerate {
            input: normalized.to_string(),
        },
        AnalysisError::Coefficient { reason, .. } => AnalysisError::Coefficient {
            m: m_text.clone(),
            n: n_text.clone(),
            reason,
        },
        other => other,
    })
}

fn slot_text(caps: &Captures<'_>, slot: Slot) -> String {
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    match slot {
        Slot::Capture(i) => group(i).to_string(),
        Slot::Sign(i) => match group(i) {
            "-" => "-1".to_string(),
            _ => "1".to_string(),
        },
        Slot::Signed { sign, body } => match group(sign) {
            "-" => format!("-({})", group(body)),
            _ => group(body).to_string(),
        },
    }
}

fn check_symbols(m: &Expr, n: &Expr, m_text: &str, n_text: &str) -> Result<(), AnalysisError> {
    let mut symbols = m.free_symbols();
    symbols.extend(n.free_symbols());
    let foreign: Vec<String> = symbols
        .into_iter()
        .filter(|s| !VARIABLES.contains(&s.as_str()))
        .collect();
    if foreign.is_empty() {
        Ok(())
    } else {
        Err(AnalysisError::Coefficient {
            m: m_text.to_string(),
            n: n_text.to_string(),
            reason: format!("unsupported symbols: {}", foreign.join(", ")),
        })
    }
}

fn coefficient_error(m: &str, n: &str, err: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::Coefficient {
        m: m.to_string(),
        n: n.to_string(),
        reason: err.to_string(),
    }
}
