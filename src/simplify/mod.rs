//! Symbolic simplification, canonical normalization, and substitution utilities.

mod normalize;
mod rules;
mod substitute;

pub use normalize::{
    ZeroEvidence, canonical, fraction_is_zero, fraction_to_expr, is_zero, is_zero_with, normalize,
    rational_power, zero_evidence,
};
pub use rules::{
    simplify, simplify_add, simplify_div, simplify_mul, simplify_neg, simplify_pow, simplify_sub,
};
pub use substitute::{substitute, substitute_all};
