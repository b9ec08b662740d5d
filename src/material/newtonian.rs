use super::{check_non_negative, FluidLawTrait};
use crate::base::{FLUID_LAW_NDIM, FLUID_LAW_STRAIN_SIZE};

/// Implements a Newtonian fluid in 2D (constant viscosity)
pub struct Newtonian2D {
    viscosity: f64,
    bulk_modulus: f64,
}

impl Newtonian2D {
    /// Allocates a new instance
    pub fn new(viscosity: f64, bulk_modulus: f64) -> Self {
        Newtonian2D {
            viscosity,
            bulk_modulus,
        }
    }
}

impl FluidLawTrait for Newtonian2D {
    fn name(&self) -> &'static str {
        "Newtonian2D"
    }

    fn working_space_dimension(&self) -> usize {
        FLUID_LAW_NDIM
    }

    fn strain_size(&self) -> usize {
        FLUID_LAW_STRAIN_SIZE
    }

    fn check(&self) -> Option<String> {
        check_non_negative("DYNAMIC_VISCOSITY", self.viscosity)
            .or_else(|| check_non_negative("BULK_MODULUS", self.bulk_modulus))
    }

    fn calc_effective_viscosity(&self, _gamma_eq: f64) -> f64 {
        self.viscosity
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
