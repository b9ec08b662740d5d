use super::FluidLaw;
use crate::StrError;
use rayon::prelude::*;
use russell_lab::{Matrix, Vector};

/// Holds the strain rate, stress and (optional) tangent operator at an integration point
#[derive(Clone, Debug)]
pub struct IntegPoint {
    /// Strain rate `[ε̇xx, ε̇yy, γ̇xy]`
    pub strain_rate: Vector,

    /// Deviatoric stress `[σ'xx, σ'yy, σ'xy]`
    pub stress: Vector,

    /// Tangent operator (allocated only if requested)
    pub tangent: Option<Matrix>,
}

impl IntegPoint {
    /// Allocates a new instance with zero strain rate
    pub fn new(law: &FluidLaw, with_tangent: bool) -> Self {
        let n = law.strain_size();
        IntegPoint {
            strain_rate: Vector::new(n),
            stress: Vector::new(n),
            tangent: if with_tangent { Some(Matrix::new(n, n)) } else { None },
        }
    }

    /// Updates the stress (and tangent) using the current strain rate
    #[inline]
    pub fn update(&mut self, law: &FluidLaw) -> Result<(), StrError> {
        law.calc_stress(&mut self.stress, self.tangent.as_mut(), &self.strain_rate)
    }
}

/// Holds a collection of integration points sharing the same fluid law
pub struct IntegPoints<'a> {
    /// Holds the fluid law
    pub law: &'a FluidLaw,

    /// Holds all integration points
    pub all: Vec<IntegPoint>,
}

impl<'a> IntegPoints<'a> {
    /// Allocates a new instance
    pub fn new(law: &'a FluidLaw, npoint: usize, with_tangent: bool) -> Self {
        IntegPoints {
            law,
            all: vec![IntegPoint::new(law, with_tangent); npoint],
        }
    }

    /// Sets the strain rate of an integration point
    pub fn set_strain_rate(&mut self, index: usize, strain_rate: &[f64]) -> Result<(), StrError> {
        if index >= self.all.len() {
            return Err("index of integration point is out of bounds");
        }
        let point = &mut self.all[index];
        if strain_rate.len() != point.strain_rate.dim() {
            return Err("strain_rate.len() must be equal to the strain size");
        }
        for i in 0..strain_rate.len() {
            point.strain_rate[i] = strain_rate[i];
        }
        Ok(())
    }

    /// Computes the stresses at all integration points
    #[inline]
    pub fn calc_stresses(&mut self) -> Result<(), StrError> {
        let law = self.law;
        self.all.iter_mut().map(|p| p.update(law)).collect()
    }

    /// Computes the stresses at all integration points in parallel
    #[inline]
    pub fn calc_stresses_parallel(&mut self) -> Result<(), StrError> {
        let law = self.law;
        self.all.par_iter_mut().map(|p| p.update(law)).collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
