//! # Outputs
//!
//! Surface charge and differential capacitance of the interface (Eq. 11)

use crate::constants::{CAPACITANCE_PREFACTOR, SURFACE_CHARGE_PREFACTOR};
use crate::parameters::PfdParameters;

/// Charge stored at the interface
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceCharge {
    /// Surface charge density in e / nm^2, carries the sign of `fp0`
    pub sigma: f64,
    /// Capacitance per unit area in micro-Farad / cm^2
    pub capacitance: f64,
}

impl SurfaceCharge {
    /// `capacitance` is infinite when `phi0` vanishes
    pub fn new(parameters: &PfdParameters, fp0: f64) -> Self {
        let sigma = SURFACE_CHARGE_PREFACTOR
            * fp0
            * (parameters.alpha * parameters.n_sites * parameters.temperature / parameters.epsilon)
                .sqrt();
        let capacitance = CAPACITANCE_PREFACTOR * (sigma / parameters.phi0).abs();
        Self { sigma, capacitance }
    }
}

#[cfg(test)]
mod test {
    use super::SurfaceCharge;
    use crate::parameters::{reference_parameters, PfdParameters};
    use approx::assert_relative_eq;

    const REFERENCE_FP0: f64 = -3.933641229583506;

    #[test]
    fn reference_surface_charge() {
        let charge = SurfaceCharge::new(&reference_parameters(), REFERENCE_FP0);
        assert_relative_eq!(charge.sigma, -0.0014868288769930317, max_relative = 1e-9);
        assert_relative_eq!(charge.capacitance, 0.04764334980281391, max_relative = 1e-9);
    }

    #[test]
    fn sigma_follows_the_sign_of_the_reduced_field() {
        let parameters = reference_parameters();
        let direct = 6.90089807e-14
            * REFERENCE_FP0
            * (parameters.alpha * parameters.n_sites * parameters.temperature / parameters.epsilon)
                .sqrt();
        let charge = SurfaceCharge::new(&parameters, REFERENCE_FP0);
        assert!(charge.sigma < 0.);
        assert_relative_eq!(charge.sigma, direct, max_relative = 1e-14);
        assert!(charge.capacitance > 0.);
    }

    #[test]
    fn vanishing_phi0_gives_infinite_capacitance() {
        let parameters = PfdParameters {
            phi0: 0.,
            ..reference_parameters()
        };
        let charge = SurfaceCharge::new(&parameters, REFERENCE_FP0);
        assert!(charge.sigma.is_finite());
        assert!(charge.capacitance.is_infinite());
    }
}
