//! Calculus routines (differentiation and integration).

pub mod differentiate;
pub mod integrate;

pub use differentiate::{differentiate, partial};
pub use integrate::{IntegrationResult, ReasonCode, Strategy, integrate};
