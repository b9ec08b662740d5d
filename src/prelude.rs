//! Makes available common structures needed to evaluate fluid laws
//!
//! You may write `use fluidlaw::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{ParamFluid, ParamRheology, DEFAULT_TEST_DIR, EQUIVALENT_STRAIN_RATE_TOL};
pub use crate::material::{equivalent_strain_rate, FlowCurve, FluidLaw, IntegPoint, IntegPoints};
pub use crate::StrError;
