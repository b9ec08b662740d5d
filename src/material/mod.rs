//! Implements fluid (rheology) laws

mod bingham;
mod flow_curve;
mod fluid_law;
mod herschel_bulkley;
mod integ_point;
mod newtonian;
pub use crate::material::bingham::*;
pub use crate::material::flow_curve::*;
pub use crate::material::fluid_law::*;
pub use crate::material::herschel_bulkley::*;
pub use crate::material::integ_point::*;
pub use crate::material::newtonian::*;
