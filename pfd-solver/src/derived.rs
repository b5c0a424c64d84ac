//! # Derived constants
//!
//! Quantities computed once from the input parameters and shared by both branches of the
//! potential. Nothing here can fail: unphysical input (for example a non-positive `alpha * NSites`)
//! shows up as `NaN` or an infinity in the affected field.

use crate::constants::{BOLTZMANN_EV, SCREENING_LENGTH_PREFACTOR};
use crate::parameters::PfdParameters;

/// Scales derived from a parameter set
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DerivedConstants {
    /// Thermal voltage k_B T, in V
    pub ftov: f64,
    /// Saturation constant alpha exp(Ef0 / k_B T)
    pub b: f64,
    /// Screening length in Angstrom
    pub lambda: f64,
    /// Charge-neutrality potential in units of the thermal voltage
    pub f0: f64,
}

impl DerivedConstants {
    /// Compute the derived constants of a parameter set
    pub fn from_parameters(parameters: &PfdParameters) -> Self {
        let ftov = BOLTZMANN_EV * parameters.temperature;
        let b = parameters.alpha * (parameters.ef0 / ftov).exp();
        let lambda = SCREENING_LENGTH_PREFACTOR
            * (parameters.epsilon * parameters.temperature
                / (parameters.alpha * parameters.n_sites))
                .sqrt();
        let f0 = parameters.phi0 / ftov;
        tracing::trace!(ftov, b, lambda, f0, "Derived constants");
        Self { ftov, b, lambda, f0 }
    }
}
