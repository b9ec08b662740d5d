//! Implements the base structures for the fluid laws

mod constants;
mod parameters;
pub use crate::base::constants::*;
pub use crate::base::parameters::*;
