//! Numeric trajectories of `dy/dx = f(x, y)`.
//!
//! [`solve_ivp`] integrates with the embedded Dormand–Prince 5(4) pair and
//! reports the solution at evenly spaced abscissae, stepping adaptively
//! inside each output interval.

use tracing::{debug, trace};

use crate::config::IvpOptions;
use crate::error::NumericError;
use crate::eval::eval_xy;
use crate::explicit::{UNDEFINED_EXPLICIT, explicit};
use crate::expr::Expr;
use crate::parser::parse_expr;

const C: [f64; 5] = [1.0 / 5.0, 3.0 / 10.0, 4.0 / 5.0, 8.0 / 9.0, 1.0];
const A2: [f64; 1] = [1.0 / 5.0];
const A3: [f64; 2] = [3.0 / 40.0, 9.0 / 40.0];
const A4: [f64; 3] = [44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0];
const A5: [f64; 4] = [
    19372.0 / 6561.0,
    -25360.0 / 2187.0,
    64448.0 / 6561.0,
    -212.0 / 729.0,
];
const A6: [f64; 5] = [
    9017.0 / 3168.0,
    -355.0 / 33.0,
    46732.0 / 5247.0,
    49.0 / 176.0,
    -5103.0 / 18656.0,
];
// Fifth-order weights; the seventh stage only feeds the error estimate.
const B: [f64; 7] = [
    35.0 / 384.0,
    0.0,
    500.0 / 1113.0,
    125.0 / 192.0,
    -2187.0 / 6784.0,
    11.0 / 84.0,
    0.0,
];
// Difference between the fifth- and fourth-order weights.
const E: [f64; 7] = [
    71.0 / 57600.0,
    0.0,
    -71.0 / 16695.0,
    71.0 / 1920.0,
    -17253.0 / 339200.0,
    22.0 / 525.0,
    -1.0 / 40.0,
];

const SAFETY: f64 = 0.9;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 5.0;

/// The right-hand side `f(x, y)` of an explicit first-order equation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlopeField {
    expr: Expr,
}

impl SlopeField {
    pub fn new(expr: Expr) -> Self {
        SlopeField { expr }
    }

    /// Read back the output of [`crate::explicit::explicit`]. The leading
    /// `dy/dx =` is optional; the undefined sentinel yields
    /// [`NumericError::Undefined`].
    pub fn from_explicit(text: &str) -> Result<Self, NumericError> {
        let text = text.trim();
        if text == UNDEFINED_EXPLICIT {
            return Err(NumericError::Undefined);
        }
        let body = match text.strip_prefix("dy/dx") {
            Some(rest) => rest
                .trim_start()
                .strip_prefix('=')
                .ok_or_else(|| NumericError::Parse(format!("expected '=' in '{text}'")))?,
            None => text,
        };
        Ok(SlopeField::new(parse_expr(body)?))
    }

    /// The slope field of `M dx + N dy = 0`.
    pub fn from_coefficients(m: &Expr, n: &Expr) -> Result<Self, NumericError> {
        SlopeField::from_explicit(&explicit(m, n)?)
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// `f(x, y)`, which may be non-finite.
    pub fn slope(&self, x: f64, y: f64) -> Result<f64, NumericError> {
        Ok(eval_xy(&self.expr, x, y)?)
    }
}

/// Sampled solution of an initial value problem.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    pub points: Vec<(f64, f64)>,
    /// Accepted steps.
    pub steps: usize,
    /// Rejected step attempts.
    pub rejected: usize,
}

impl Trajectory {
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(x, _)| *x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, y)| *y)
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.points.last().copied()
    }
}

/// Integrate `dy/dx = f(x, y)` from `(x0, y0)` to `xf`.
///
/// `xf < x0` integrates backwards. The trajectory holds
/// `options.samples` points, both endpoints included.
pub fn solve_ivp(
    field: &SlopeField,
    (x0, xf): (f64, f64),
    y0: f64,
    options: &IvpOptions,
) -> Result<Trajectory, NumericError> {
    validate(x0, xf, y0, options)?;
    if x0 == xf {
        return Ok(Trajectory {
            points: vec![(x0, y0)],
            ..Trajectory::default()
        });
    }

    let direction = (xf - x0).signum();
    let span = (xf - x0).abs();
    let mut h = options.first_step.unwrap_or(span / 100.0).min(span);
    let mut x = x0;
    let mut y = y0;
    let mut trajectory = Trajectory {
        points: Vec::with_capacity(options.samples),
        ..Trajectory::default()
    };
    trajectory.points.push((x0, y0));

    let last = options.samples - 1;
    for i in 1..=last {
        let target = if i == last {
            xf
        } else {
            x0 + (xf - x0) * (i as f64) / (last as f64)
        };

        while (target - x) * direction > 0.0 {
            if trajectory.steps + trajectory.rejected >= options.max_steps {
                debug!(x, "step budget exhausted");
                return Err(NumericError::StepSize { x });
            }
            let remaining = (target - x).abs();
            // land exactly on the sample instead of leaving a sliver behind
            let truncated = h * (1.0 + 1e-10) >= remaining;
            let step = if truncated { remaining } else { h };
            if step <= f64::EPSILON * x.abs().max(1.0) {
                return Err(NumericError::StepSize { x });
            }

            match attempt(field, x, y, direction * step, options)? {
                Some((y_new, err)) if err <= 1.0 => {
                    x = if truncated { target } else { x + direction * step };
                    y = y_new;
                    trajectory.steps += 1;
                    let next = step * growth(err);
                    h = if truncated { h.min(next) } else { next };
                }
                Some((_, err)) => {
                    trace!(x, step, err, "step rejected");
                    trajectory.rejected += 1;
                    h = step * growth(err).min(1.0);
                }
                None => {
                    trace!(x, step, "non-finite stage, halving step");
                    trajectory.rejected += 1;
                    h = step * 0.5;
                }
            }
        }
        trajectory.points.push((target, y));
    }

    debug!(
        steps = trajectory.steps,
        rejected = trajectory.rejected,
        "trajectory complete"
    );
    Ok(trajectory)
}

fn validate(x0: f64, xf: f64, y0: f64, options: &IvpOptions) -> Result<(), NumericError> {
    let invalid = |what: &str| Err(NumericError::InvalidOptions(what.to_string()));
    if !(x0.is_finite() && xf.is_finite() && y0.is_finite()) {
        return invalid("initial point and endpoint must be finite");
    }
    if !(options.rtol > 0.0 && options.rtol.is_finite()) {
        return invalid("rtol must be positive");
    }
    if !(options.atol >= 0.0 && options.atol.is_finite()) {
        return invalid("atol must be non-negative");
    }
    if options.samples < 2 && x0 != xf {
        return invalid("at least two samples are needed");
    }
    if options.max_steps == 0 {
        return invalid("max_steps must be positive");
    }
    if let Some(h) = options.first_step {
        if !(h > 0.0 && h.is_finite()) {
            return invalid("first_step must be positive");
        }
    }
    Ok(())
}

/// One Dormand–Prince step of signed size `h`. Returns the fifth-order
/// estimate and the scaled error norm, or `None` when an interior stage
/// leaves the domain of `f`.
fn attempt(
    field: &SlopeField,
    x: f64,
    y: f64,
    h: f64,
    options: &IvpOptions,
) -> Result<Option<(f64, f64)>, NumericError> {
    let k1 = field.slope(x, y)?;
    if !k1.is_finite() {
        return Err(NumericError::Singular { x, y });
    }

    let mut k = [k1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
    let rows: [&[f64]; 5] = [&A2, &A3, &A4, &A5, &A6];
    for (stage, row) in rows.iter().enumerate() {
        let yi = y + h * dot(row, &k);
        let ki = field.slope(x + C[stage] * h, yi)?;
        if !ki.is_finite() {
            return Ok(None);
        }
        k[stage + 1] = ki;
    }

    let y_new = y + h * dot(&B, &k);
    let k7 = field.slope(x + h, y_new)?;
    if !(k7.is_finite() && y_new.is_finite()) {
        return Ok(None);
    }
    k[6] = k7;

    let scale = options.atol + options.rtol * y.abs().max(y_new.abs());
    let delta = (h * dot(&E, &k)).abs();
    let err = if scale > 0.0 {
        delta / scale
    } else if delta == 0.0 {
        0.0
    } else {
        f64::INFINITY
    };
    Ok(Some((y_new, err)))
}

fn dot(weights: &[f64], k: &[f64]) -> f64 {
    weights.iter().zip(k).map(|(w, ki)| w * ki).sum()
}

fn growth(err: f64) -> f64 {
    if err == 0.0 {
        MAX_FACTOR
    } else {
        (SAFETY * err.powf(-0.2)).clamp(MIN_FACTOR, MAX_FACTOR)
    }
}
