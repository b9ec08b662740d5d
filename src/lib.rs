//! Regularized viscoplastic fluid laws for finite element simulations
//!
//! The laws compute the deviatoric Cauchy stress (and, optionally, the tangent operator)
//! from a 2D strain-rate vector given in Voigt notation `[ε̇xx, ε̇yy, γ̇xy]`.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;
