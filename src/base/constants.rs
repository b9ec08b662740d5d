/// Defines the working space dimension of the 2D fluid laws
pub const FLUID_LAW_NDIM: usize = 2;

/// Defines the number of components of the strain-rate and stress vectors in 2D
///
/// The components are `[xx, yy, xy]`
pub const FLUID_LAW_STRAIN_SIZE: usize = 3;

/// Defines the equivalent strain rate below which the near-zero-rate branch is used
pub const EQUIVALENT_STRAIN_RATE_TOL: f64 = 1e-8;

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/fluidlaw/test";
