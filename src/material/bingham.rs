use super::{check_non_negative, FluidLawTrait};
use crate::base::{EQUIVALENT_STRAIN_RATE_TOL, FLUID_LAW_NDIM, FLUID_LAW_STRAIN_SIZE};

/// Implements the Bingham model with Papanastasiou regularization in 2D
///
/// ```text
/// μeff = μ + (1 - exp(-m γ̇eq)) τy / γ̇eq     if γ̇eq ≥ tol
/// μeff = μ + τy m                           if γ̇eq < tol
/// ```
pub struct Bingham2D {
    /// Plastic viscosity μ
    viscosity: f64,

    /// Yield shear stress τy
    yield_shear: f64,

    /// Adaptive exponent m
    adaptive_exponent: f64,

    /// Bulk modulus (checked only)
    bulk_modulus: f64,
}

impl Bingham2D {
    /// Allocates a new instance
    pub fn new(viscosity: f64, yield_shear: f64, adaptive_exponent: f64, bulk_modulus: f64) -> Self {
        Bingham2D {
            viscosity,
            yield_shear,
            adaptive_exponent,
            bulk_modulus,
        }
    }
}

impl FluidLawTrait for Bingham2D {
    fn name(&self) -> &'static str {
        "Bingham2D"
    }

    fn working_space_dimension(&self) -> usize {
        FLUID_LAW_NDIM
    }

    fn strain_size(&self) -> usize {
        FLUID_LAW_STRAIN_SIZE
    }

    fn check(&self) -> Option<String> {
        check_non_negative("DYNAMIC_VISCOSITY", self.viscosity)
            .or_else(|| check_non_negative("YIELD_SHEAR", self.yield_shear))
            .or_else(|| check_non_negative("ADAPTIVE_EXPONENT", self.adaptive_exponent))
            .or_else(|| check_non_negative("BULK_MODULUS", self.bulk_modulus))
    }

    fn calc_effective_viscosity(&self, gamma_eq: f64) -> f64 {
        if gamma_eq < EQUIVALENT_STRAIN_RATE_TOL {
            return self.viscosity + self.yield_shear * self.adaptive_exponent;
        }
        let regularization = 1.0 - f64::exp(-self.adaptive_exponent * gamma_eq);
        self.viscosity + regularization * self.yield_shear / gamma_eq
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
