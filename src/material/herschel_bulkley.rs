use super::{check_non_negative, FluidLawTrait};
use crate::base::{EQUIVALENT_STRAIN_RATE_TOL, FLUID_LAW_NDIM, FLUID_LAW_STRAIN_SIZE};

/// Implements the regularized Herschel-Bulkley model in 2D
///
/// The effective viscosity is:
///
/// ```text
/// μeff = k γ̇eq⁽ⁿ⁻¹⁾ + (1 - exp(-m γ̇eq)) τy / γ̇eq     if γ̇eq ≥ tol
/// μeff = τy m                                         if γ̇eq < tol
/// ```
///
/// where `k` is the consistency index (dynamic viscosity), `n` is the flow index,
/// `τy` is the yield shear stress, and `m` is the (Papanastasiou) adaptive exponent.
///
/// **Note:** The near-zero-rate value is the limit of the regularization term only;
/// the power-law term is not included there.
pub struct HerschelBulkley2D {
    /// Consistency index k
    dynamic_viscosity: f64,

    /// Yield shear stress τy
    yield_shear: f64,

    /// Flow index n
    flow_index: f64,

    /// Adaptive exponent m
    adaptive_exponent: f64,

    /// Bulk modulus (checked only)
    bulk_modulus: f64,
}

impl HerschelBulkley2D {
    /// Allocates a new instance
    pub fn new(
        dynamic_viscosity: f64,
        yield_shear: f64,
        flow_index: f64,
        adaptive_exponent: f64,
        bulk_modulus: f64,
    ) -> Self {
        HerschelBulkley2D {
            dynamic_viscosity,
            yield_shear,
            flow_index,
            adaptive_exponent,
            bulk_modulus,
        }
    }
}

impl FluidLawTrait for HerschelBulkley2D {
    fn name(&self) -> &'static str {
        "HerschelBulkley2D"
    }

    fn working_space_dimension(&self) -> usize {
        FLUID_LAW_NDIM
    }

    fn strain_size(&self) -> usize {
        FLUID_LAW_STRAIN_SIZE
    }

    fn check(&self) -> Option<String> {
        check_non_negative("DYNAMIC_VISCOSITY", self.dynamic_viscosity)
            .or_else(|| check_non_negative("YIELD_SHEAR", self.yield_shear))
            .or_else(|| check_non_negative("FLOW_INDEX", self.flow_index))
            .or_else(|| check_non_negative("ADAPTIVE_EXPONENT", self.adaptive_exponent))
            .or_else(|| check_non_negative("BULK_MODULUS", self.bulk_modulus))
    }

    fn calc_effective_viscosity(&self, gamma_eq: f64) -> f64 {
        if gamma_eq < EQUIVALENT_STRAIN_RATE_TOL {
            return self.yield_shear * self.adaptive_exponent;
        }
        let regularization = 1.0 - f64::exp(-self.adaptive_exponent * gamma_eq);
        self.dynamic_viscosity * f64::powf(gamma_eq, self.flow_index - 1.0)
            + regularization * self.yield_shear / gamma_eq
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
