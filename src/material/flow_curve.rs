use super::FluidLaw;
use crate::StrError;
use plotpy::{Curve, Plot};
use russell_lab::Vector;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::path::Path;

/// Holds the response of a fluid law in simple shear (flow curve)
///
/// The strain rate corresponding to a shear rate γ̇ is `[0, 0, γ̇/2]`,
/// thus the equivalent strain rate equals γ̇ and the shear stress is `σ'xy = μeff γ̇`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlowCurve {
    /// Name of the fluid law
    pub name: String,

    /// Shear rates γ̇
    pub shear_rate: Vec<f64>,

    /// Shear stresses σ'xy
    pub shear_stress: Vec<f64>,

    /// Effective viscosities μeff
    pub viscosity: Vec<f64>,
}

impl FlowCurve {
    /// Evaluates the flow curve at the given shear rates
    pub fn new(law: &FluidLaw, shear_rates: &[f64]) -> Result<Self, StrError> {
        let npoint = shear_rates.len();
        let mut curve = FlowCurve {
            name: law.name().to_string(),
            shear_rate: shear_rates.to_vec(),
            shear_stress: vec![0.0; npoint],
            viscosity: vec![0.0; npoint],
        };
        let mut strain_rate = Vector::new(law.strain_size());
        let mut stress = Vector::new(law.strain_size());
        for i in 0..npoint {
            strain_rate[2] = shear_rates[i] / 2.0;
            law.calc_stress(&mut stress, None, &strain_rate)?;
            curve.shear_stress[i] = stress[2];
            curve.viscosity[i] = law.effective_viscosity(&strain_rate)?;
        }
        Ok(curve)
    }

    /// Returns logarithmically spaced shear rates in [rate_min, rate_max]
    pub fn log_spaced_rates(rate_min: f64, rate_max: f64, npoint: usize) -> Result<Vec<f64>, StrError> {
        if rate_min <= 0.0 {
            return Err("rate_min must be > 0.0");
        }
        if rate_max <= rate_min {
            return Err("rate_max must be > rate_min");
        }
        if npoint < 2 {
            return Err("npoint must be ≥ 2");
        }
        let (a, b) = (f64::log10(rate_min), f64::log10(rate_max));
        let step = (b - a) / ((npoint - 1) as f64);
        let mut rates: Vec<_> = (0..npoint).map(|i| f64::powf(10.0, a + (i as f64) * step)).collect();
        rates[0] = rate_min;
        rates[npoint - 1] = rate_max;
        Ok(rates)
    }

    /// Saves a log-log plot of shear stress versus shear rate
    ///
    /// # Input
    ///
    /// * `filepath` -- may be a String, &str, or Path
    pub fn save_plot<P>(&self, filepath: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        if self.shear_rate.iter().any(|r| *r <= 0.0) {
            return Err("shear rates must be positive for the log-log plot");
        }
        let mut curve = Curve::new();
        curve
            .set_label(&self.name)
            .set_line_color("#1f77b4")
            .set_marker_style("o")
            .set_marker_size(4.0);
        curve.draw(&self.shear_rate, &self.shear_stress);
        let mut plot = Plot::new();
        plot.add(&curve)
            .set_log_x(true)
            .set_log_y(true)
            .grid_and_labels("shear rate $\\dot{\\gamma}$", "shear stress $\\tau$")
            .legend()
            .save(filepath)
    }

    /// Writes a JSON file with the flow curve
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

impl fmt::Display for FlowCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{:>13} {:>13} {:>13}", "shear_rate", "shear_stress", "viscosity")?;
        for i in 0..self.shear_rate.len() {
            writeln!(
                f,
                "{:>13.6e} {:>13.6e} {:>13.6e}",
                self.shear_rate[i], self.shear_stress[i], self.viscosity[i]
            )?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
