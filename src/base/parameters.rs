use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds parameters for the rheology (viscosity) models
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ParamRheology {
    /// Newtonian fluid
    Newtonian {
        /// Dynamic viscosity μ
        viscosity: f64,
    },

    /// Bingham fluid with Papanastasiou regularization
    ///
    /// ```text
    /// μeff = μ + (1 - exp(-m γ̇eq)) τy / γ̇eq
    /// ```
    Bingham {
        /// Plastic (dynamic) viscosity μ
        viscosity: f64,

        /// Yield shear stress τy
        yield_shear: f64,

        /// Regularization exponent m
        adaptive_exponent: f64,
    },

    /// Herschel-Bulkley fluid with Papanastasiou regularization
    ///
    /// ```text
    /// μeff = k γ̇eq⁽ⁿ⁻¹⁾ + (1 - exp(-m γ̇eq)) τy / γ̇eq
    /// ```
    HerschelBulkley {
        /// Consistency index k (taken as the dynamic viscosity)
        dynamic_viscosity: f64,

        /// Yield shear stress τy
        yield_shear: f64,

        /// Power-law (flow) index n
        flow_index: f64,

        /// Regularization exponent m
        adaptive_exponent: f64,
    },
}

/// Holds parameters for a (quasi-incompressible) fluid
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamFluid {
    /// Bulk modulus used by the pressure (volumetric) law
    ///
    /// **Note:** This value is only checked by the fluid laws.
    pub bulk_modulus: f64,

    /// Parameters for the rheology model
    pub rheology: ParamRheology,
}

impl ParamFluid {
    /// Returns sample parameters for a Newtonian fluid (water-like)
    pub fn sample_newtonian() -> Self {
        ParamFluid {
            bulk_modulus: 2.1e9, // Pa
            rheology: ParamRheology::Newtonian {
                viscosity: 1e-3, // Pa·s
            },
        }
    }

    /// Returns sample parameters for a Bingham fluid
    pub fn sample_bingham() -> Self {
        ParamFluid {
            bulk_modulus: 2.1e9, // Pa
            rheology: ParamRheology::Bingham {
                viscosity: 10.0,           // Pa·s
                yield_shear: 5.0,          // Pa
                adaptive_exponent: 1000.0, // s
            },
        }
    }

    /// Returns sample parameters for a Herschel-Bulkley fluid
    pub fn sample_herschel_bulkley() -> Self {
        ParamFluid {
            bulk_modulus: 2.1e9, // Pa
            rheology: ParamRheology::HerschelBulkley {
                dynamic_viscosity: 10.0,   // Pa·sⁿ
                yield_shear: 5.0,          // Pa
                flow_index: 1.0,           // [-]
                adaptive_exponent: 1000.0, // s
            },
        }
    }

    /// Reads a JSON file containing the parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let param = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(param)
    }

    /// Writes a JSON file with the parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
