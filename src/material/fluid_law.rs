use super::{Bingham2D, HerschelBulkley2D, Newtonian2D};
use crate::base::{ParamFluid, ParamRheology, FLUID_LAW_NDIM, FLUID_LAW_STRAIN_SIZE};
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Specifies the essential functions for fluid (rheology) laws
pub trait FluidLawTrait: Send + Sync {
    /// Returns the name of the law
    fn name(&self) -> &'static str;

    /// Returns the dimension of the working space
    fn working_space_dimension(&self) -> usize;

    /// Returns the number of components of the strain-rate vector
    fn strain_size(&self) -> usize;

    /// Checks the material parameters
    ///
    /// Returns a message with the inconsistent parameter, or returns None if everything is all right.
    fn check(&self) -> Option<String>;

    /// Calculates the effective (secant) viscosity given the equivalent strain rate
    fn calc_effective_viscosity(&self, equivalent_strain_rate: f64) -> f64;
}

/// Holds the actual fluid law implementation
pub struct FluidLaw {
    /// Holds the actual law implementation
    pub actual: Box<dyn FluidLawTrait>,
}

impl FluidLaw {
    /// Allocates a new instance
    ///
    /// **Note:** The material parameters are checked here; thus,
    /// [FluidLaw::calc_stress()] may be called without further checks.
    pub fn new(ndim: usize, param: &ParamFluid) -> Result<Self, StrError> {
        if ndim != FLUID_LAW_NDIM {
            return Err("only 2D fluid laws are available");
        }
        let actual = allocate_actual(param);
        if let Some(msg) = actual.check() {
            log::error!("{}: {}", actual.name(), msg);
            return Err("cannot allocate fluid law because check() failed");
        }
        log::debug!("allocated fluid law {}", actual.name());
        Ok(FluidLaw { actual })
    }

    /// Checks the material parameters without allocating a law
    ///
    /// Returns a message with the first inconsistent parameter, or returns None if everything is all right.
    pub fn check_param(param: &ParamFluid) -> Option<String> {
        allocate_actual(param).check()
    }

    /// Returns the name of the law (e.g., to register the law when checkpointing)
    pub fn name(&self) -> &'static str {
        self.actual.name()
    }

    /// Returns the dimension of the working space
    pub fn working_space_dimension(&self) -> usize {
        self.actual.working_space_dimension()
    }

    /// Returns the number of components of the strain-rate vector
    pub fn strain_size(&self) -> usize {
        self.actual.strain_size()
    }

    /// Calculates the effective viscosity corresponding to a strain-rate vector
    pub fn effective_viscosity(&self, strain_rate: &Vector) -> Result<f64, StrError> {
        let gamma_eq = equivalent_strain_rate(strain_rate)?;
        Ok(self.actual.calc_effective_viscosity(gamma_eq))
    }

    /// Calculates the deviatoric stress and, optionally, the tangent operator
    ///
    /// ```text
    /// σ'xx = 2 μeff (ε̇xx - tr/3)
    /// σ'yy = 2 μeff (ε̇yy - tr/3)
    /// σ'xy = 2 μeff γ̇xy
    ///
    /// tr = ε̇xx + ε̇yy
    /// ```
    ///
    /// # Output
    ///
    /// * `stress` -- the deviatoric stress `[σ'xx, σ'yy, σ'xy]` (strain_size)
    /// * `tangent` -- the tangent operator, if requested (strain_size × strain_size)
    ///
    /// # Input
    ///
    /// * `strain_rate` -- the strain rate `[ε̇xx, ε̇yy, γ̇xy]` (strain_size)
    pub fn calc_stress(
        &self,
        stress: &mut Vector,
        tangent: Option<&mut Matrix>,
        strain_rate: &Vector,
    ) -> Result<(), StrError> {
        let n = self.actual.strain_size();
        if strain_rate.dim() != n {
            return Err("strain_rate.dim() must be equal to the strain size");
        }
        if stress.dim() != n {
            return Err("stress.dim() must be equal to the strain size");
        }
        let mu = self.actual.calc_effective_viscosity(equivalent_strain_rate(strain_rate)?);
        let tr = strain_rate[0] + strain_rate[1];
        stress[0] = 2.0 * mu * (strain_rate[0] - tr / 3.0);
        stress[1] = 2.0 * mu * (strain_rate[1] - tr / 3.0);
        stress[2] = 2.0 * mu * strain_rate[2];
        if let Some(dd) = tangent {
            calc_viscous_tangent_2d(dd, mu)?;
        }
        Ok(())
    }
}

/// Allocates the law selected by the rheology parameters (unchecked)
fn allocate_actual(param: &ParamFluid) -> Box<dyn FluidLawTrait> {
    let kk = param.bulk_modulus;
    match param.rheology {
        // Newtonian fluid
        ParamRheology::Newtonian { viscosity } => Box::new(Newtonian2D::new(viscosity, kk)),

        // Bingham fluid
        ParamRheology::Bingham {
            viscosity,
            yield_shear,
            adaptive_exponent,
        } => Box::new(Bingham2D::new(viscosity, yield_shear, adaptive_exponent, kk)),

        // Herschel-Bulkley fluid
        ParamRheology::HerschelBulkley {
            dynamic_viscosity,
            yield_shear,
            flow_index,
            adaptive_exponent,
        } => Box::new(HerschelBulkley2D::new(
            dynamic_viscosity,
            yield_shear,
            flow_index,
            adaptive_exponent,
            kk,
        )),
    }
}

/// Calculates the equivalent (generalized) strain rate
///
/// ```text
/// γ̇eq = √(2 ε̇xx² + 2 ε̇yy² + 4 ε̇xy²)
/// ```
pub fn equivalent_strain_rate(strain_rate: &Vector) -> Result<f64, StrError> {
    if strain_rate.dim() != FLUID_LAW_STRAIN_SIZE {
        return Err("strain_rate.dim() must be equal to the strain size");
    }
    let (e0, e1, e2) = (strain_rate[0], strain_rate[1], strain_rate[2]);
    Ok(f64::sqrt(2.0 * e0 * e0 + 2.0 * e1 * e1 + 4.0 * e2 * e2))
}

/// Calculates the tangent operator of an isotropic viscous fluid in 2D
///
/// The operator reproduces the deviatoric stress computed by [FluidLaw::calc_stress()],
/// i.e., `σ' = D ε̇`:
///
/// ```text
///     ┌                   ┐
///     │  4μ/3  -2μ/3   0  │
/// D = │ -2μ/3   4μ/3   0  │
///     │   0      0    2μ  │
///     └                   ┘
/// ```
pub fn calc_viscous_tangent_2d(dd: &mut Matrix, viscosity: f64) -> Result<(), StrError> {
    let n = FLUID_LAW_STRAIN_SIZE;
    if dd.dims() != (n, n) {
        return Err("tangent matrix must be 3 × 3");
    }
    let a = 4.0 * viscosity / 3.0;
    let b = -2.0 * viscosity / 3.0;
    dd.fill(0.0);
    dd.set(0, 0, a);
    dd.set(0, 1, b);
    dd.set(1, 0, b);
    dd.set(1, 1, a);
    dd.set(2, 2, 2.0 * viscosity);
    Ok(())
}

/// Returns a message if the value of a material parameter is negative (or NaN)
pub(crate) fn check_non_negative(name: &str, value: f64) -> Option<String> {
    if value < 0.0 || value.is_nan() {
        return Some(format!("{} = {:?} is incorrect; it must be ≥ 0.0", name, value));
    }
    None
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{calc_viscous_tangent_2d, check_non_negative, equivalent_strain_rate, FluidLaw};
    use crate::base::{ParamFluid, ParamRheology};
    use russell_lab::{approx_eq, mat_approx_eq, mat_vec_mul, vec_approx_eq, vec_norm, Matrix, Norm, Vector};

    #[test]
    fn allocate_fluid_law_works() {
        let param = ParamFluid::sample_newtonian();
        let law = FluidLaw::new(2, &param).unwrap();
        assert_eq!(law.name(), "Newtonian2D");

        let param = ParamFluid::sample_bingham();
        let law = FluidLaw::new(2, &param).unwrap();
        assert_eq!(law.name(), "Bingham2D");

        let param = ParamFluid::sample_herschel_bulkley();
        let law = FluidLaw::new(2, &param).unwrap();
        assert_eq!(law.name(), "HerschelBulkley2D");
        assert_eq!(law.working_space_dimension(), 2);
        assert_eq!(law.strain_size(), 3);
    }

    #[test]
    fn check_param_works() {
        assert_eq!(FluidLaw::check_param(&ParamFluid::sample_herschel_bulkley()), None);

        let mut param = ParamFluid::sample_bingham();
        param.bulk_modulus = -1.0;
        assert_eq!(
            FluidLaw::check_param(&param),
            Some("BULK_MODULUS = -1.0 is incorrect; it must be ≥ 0.0".to_string())
        );

        let param = ParamFluid {
            bulk_modulus: 1.0,
            rheology: ParamRheology::HerschelBulkley {
                dynamic_viscosity: 10.0,
                yield_shear: 5.0,
                flow_index: -0.5,
                adaptive_exponent: 1000.0,
            },
        };
        assert_eq!(
            FluidLaw::check_param(&param),
            Some("FLOW_INDEX = -0.5 is incorrect; it must be ≥ 0.0".to_string())
        );
        assert_eq!(
            FluidLaw::new(2, &param).err(),
            Some("cannot allocate fluid law because check() failed")
        );
    }

    #[test]
    fn allocate_fluid_law_captures_errors() {
        let param = ParamFluid::sample_herschel_bulkley();
        assert_eq!(FluidLaw::new(3, &param).err(), Some("only 2D fluid laws are available"));

        let mut param = ParamFluid::sample_herschel_bulkley();
        param.bulk_modulus = -1.0;
        assert_eq!(
            FluidLaw::new(2, &param).err(),
            Some("cannot allocate fluid law because check() failed")
        );

        let param = ParamFluid {
            bulk_modulus: 1.0,
            rheology: ParamRheology::Newtonian { viscosity: -1.0 },
        };
        assert_eq!(
            FluidLaw::new(2, &param).err(),
            Some("cannot allocate fluid law because check() failed")
        );
    }

    #[test]
    fn equivalent_strain_rate_works() {
        let strain_rate = Vector::from(&[1.0, -1.0, 0.5]);
        approx_eq(equivalent_strain_rate(&strain_rate).unwrap(), f64::sqrt(5.0), 1e-15);

        let strain_rate = Vector::from(&[0.0, 0.0, 0.5]);
        assert_eq!(equivalent_strain_rate(&strain_rate), Ok(1.0));

        let strain_rate = Vector::new(3);
        assert_eq!(equivalent_strain_rate(&strain_rate), Ok(0.0));
    }

    #[test]
    fn equivalent_strain_rate_captures_errors() {
        assert_eq!(
            equivalent_strain_rate(&Vector::new(2)).err(),
            Some("strain_rate.dim() must be equal to the strain size")
        );
        assert_eq!(
            equivalent_strain_rate(&Vector::new(4)).err(),
            Some("strain_rate.dim() must be equal to the strain size")
        );
    }

    #[test]
    fn check_non_negative_works() {
        assert_eq!(check_non_negative("YIELD_SHEAR", 0.0), None);
        assert_eq!(check_non_negative("YIELD_SHEAR", 1.5), None);
        assert_eq!(
            check_non_negative("YIELD_SHEAR", -1.5),
            Some("YIELD_SHEAR = -1.5 is incorrect; it must be ≥ 0.0".to_string())
        );
        assert_eq!(
            check_non_negative("FLOW_INDEX", f64::NAN),
            Some("FLOW_INDEX = NaN is incorrect; it must be ≥ 0.0".to_string())
        );
    }

    #[test]
    fn calc_viscous_tangent_2d_works() {
        let mut dd = Matrix::new(3, 3);
        dd.fill(123.0);
        calc_viscous_tangent_2d(&mut dd, 3.0).unwrap();
        let correct = Matrix::from(&[
            [4.0, -2.0, 0.0], //
            [-2.0, 4.0, 0.0], //
            [0.0, 0.0, 6.0],  //
        ]);
        mat_approx_eq(&dd, &correct, 1e-15);

        let mut wrong = Matrix::new(4, 4);
        assert_eq!(
            calc_viscous_tangent_2d(&mut wrong, 1.0).err(),
            Some("tangent matrix must be 3 × 3")
        );
    }

    #[test]
    fn calc_stress_captures_errors() {
        let law = FluidLaw::new(2, &ParamFluid::sample_newtonian()).unwrap();
        let mut stress = Vector::new(3);
        let mut wrong_stress = Vector::new(4);
        let strain_rate = Vector::new(3);
        let wrong_strain_rate = Vector::new(4);
        assert_eq!(
            law.calc_stress(&mut stress, None, &wrong_strain_rate).err(),
            Some("strain_rate.dim() must be equal to the strain size")
        );
        assert_eq!(
            law.calc_stress(&mut wrong_stress, None, &strain_rate).err(),
            Some("stress.dim() must be equal to the strain size")
        );
        assert_eq!(
            law.effective_viscosity(&wrong_strain_rate).err(),
            Some("strain_rate.dim() must be equal to the strain size")
        );
        let mut wrong_tangent = Matrix::new(3, 2);
        assert_eq!(
            law.calc_stress(&mut stress, Some(&mut wrong_tangent), &strain_rate).err(),
            Some("tangent matrix must be 3 × 3")
        );
    }

    #[test]
    fn calc_stress_works_newtonian() {
        let law = FluidLaw::new(2, &ParamFluid::sample_newtonian()).unwrap();
        let mu = 1e-3;
        let strain_rate = Vector::from(&[2.0, 1.0, 0.25]);
        let mut stress = Vector::new(3);
        law.calc_stress(&mut stress, None, &strain_rate).unwrap();
        // tr = 3 → σ'xx = 2μ(2 - 1), σ'yy = 2μ(1 - 1), σ'xy = 2μ(0.25)
        vec_approx_eq(&stress, &[2.0 * mu, 0.0, 0.5 * mu], 1e-17);
    }

    #[test]
    fn calc_stress_and_tangent_are_consistent() {
        let samples = [
            ParamFluid::sample_newtonian(),
            ParamFluid::sample_bingham(),
            ParamFluid::sample_herschel_bulkley(),
        ];
        let strain_rates = [
            [1.0, -1.0, 0.5],
            [0.3, 0.7, -0.2],
            [-2.0, 0.5, 1.5],
            [1e-3, 2e-3, 0.0],
            [0.0, 0.0, 0.0],
        ];
        for param in &samples {
            let law = FluidLaw::new(2, param).unwrap();
            for e in &strain_rates {
                let strain_rate = Vector::from(e);
                let mut stress = Vector::new(3);
                let mut dd = Matrix::new(3, 3);
                law.calc_stress(&mut stress, Some(&mut dd), &strain_rate).unwrap();
                let mut dd_e = Vector::new(3);
                mat_vec_mul(&mut dd_e, 1.0, &dd, &strain_rate).unwrap();
                let tol = 1e-14 * (1.0 + vec_norm(&stress, Norm::Euc));
                vec_approx_eq(&dd_e, &stress, tol);
            }
        }
    }

    #[test]
    fn calc_stress_removes_the_trace() {
        let law = FluidLaw::new(2, &ParamFluid::sample_herschel_bulkley()).unwrap();
        for e in &[[1.0, 2.0, 0.1], [-0.5, 3.0, -1.0], [4.0, 4.0, 0.0]] {
            let strain_rate = Vector::from(e);
            let mut stress = Vector::new(3);
            law.calc_stress(&mut stress, None, &strain_rate).unwrap();
            let mu = law.effective_viscosity(&strain_rate).unwrap();
            let tr = e[0] + e[1];
            approx_eq(stress[0] + stress[1], 2.0 * mu * tr / 3.0, 1e-12);
        }
    }
}
