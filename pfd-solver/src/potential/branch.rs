//! The two closed-form approximations to the potential

use crate::derived::DerivedConstants;

/// One analytical branch of the electrostatic potential
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PotentialBranch {
    /// Quadratic expansion of the reduced potential, valid close to the interface (Eq. 12)
    NearField {
        /// Charge-neutrality potential in V
        phi0: f64,
        /// Thermal voltage in V
        ftov: f64,
        /// Reduced potential far from the interface
        f0: f64,
        /// Reduced field at the interface
        fp0: f64,
        /// Screening length in Angstrom
        lambda: f64,
    },
    /// Hyperbolic-tangent solution of the screened tail (Eq. 14)
    FarField {
        /// Charge-neutrality potential in V
        phi0: f64,
        /// Thermal voltage in V
        ftov: f64,
        /// Saturation constant
        b: f64,
        /// Offset of the reduced coordinate placing the branch at `x1`
        c: f64,
        /// Screening length in Angstrom
        lambda: f64,
    },
}

impl PotentialBranch {
    /// The potential in V at a distance `x` in Angstrom from the interface
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            PotentialBranch::NearField {
                phi0,
                ftov,
                f0,
                fp0,
                lambda,
            } => {
                let xi = x / lambda;
                let f = f0 + fp0 * xi + 0.5 * xi * xi;
                phi0 - f * ftov
            }
            PotentialBranch::FarField {
                phi0,
                ftov,
                b,
                c,
                lambda,
            } => {
                let xi = x / lambda;
                let f = 4. * (-(2. / b).sqrt() * (xi - c)).exp().atanh();
                phi0 - f * ftov
            }
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            PotentialBranch::NearField { .. } => "near-field",
            PotentialBranch::FarField { .. } => "far-field",
        }
    }
}

/// The quantities fixing where the near-field branch ends
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct NearFieldBoundary {
    pub(crate) u: f64,
    pub(crate) fp0: f64,
    pub(crate) x1: f64,
}

impl NearFieldBoundary {
    /// Eq. 8 and 9
    ///
    /// `u` is never positive for a positive saturation constant, so the negative root for the
    /// reduced field `fp0` is real. Anything else propagates as `NaN`.
    pub(crate) fn from_derived(derived: &DerivedConstants) -> Self {
        let DerivedConstants { b, f0, lambda, .. } = *derived;
        let u = -((f0.exp() + b) / (1. + b)).ln() - (((-f0).exp() + b) / (1. + b)).ln();
        let fp0 = -(-2. * u).sqrt();
        let x1 = -fp0 * lambda;
        Self { u, fp0, x1 }
    }
}

pub(crate) fn near_field(phi0: f64, derived: &DerivedConstants, fp0: f64) -> PotentialBranch {
    PotentialBranch::NearField {
        phi0,
        ftov: derived.ftov,
        f0: derived.f0,
        fp0,
        lambda: derived.lambda,
    }
}

/// Eq. 15 places the far-field branch so it meets the near-field branch at `x1`
pub(crate) fn far_field(phi0: f64, derived: &DerivedConstants, x1: f64) -> PotentialBranch {
    let c = x1 / derived.lambda - 2f64.sqrt();
    PotentialBranch::FarField {
        phi0,
        ftov: derived.ftov,
        b: derived.b,
        c,
        lambda: derived.lambda,
    }
}

#[cfg(test)]
mod test {
    use super::{far_field, near_field, NearFieldBoundary};
    use crate::derived::DerivedConstants;
    use crate::parameters::reference_parameters;
    use approx::assert_relative_eq;

    #[test]
    fn boundary_of_the_reference_parameters() {
        let derived = DerivedConstants::from_parameters(&reference_parameters());
        let boundary = NearFieldBoundary::from_derived(&derived);
        assert_relative_eq!(boundary.u, -7.73676666153962, max_relative = 1e-9);
        assert_relative_eq!(boundary.fp0, -3.933641229583506, max_relative = 1e-9);
        assert_relative_eq!(boundary.x1, 148.68288769930314, max_relative = 1e-9);
    }

    #[test]
    fn near_field_vanishes_at_the_interface() {
        let parameters = reference_parameters();
        let derived = DerivedConstants::from_parameters(&parameters);
        let boundary = NearFieldBoundary::from_derived(&derived);
        let branch = near_field(parameters.phi0, &derived, boundary.fp0);
        assert!(branch.evaluate(0.).abs() < 1e-12);
    }

    #[test]
    fn near_field_is_flat_at_its_boundary() {
        let parameters = reference_parameters();
        let derived = DerivedConstants::from_parameters(&parameters);
        let boundary = NearFieldBoundary::from_derived(&derived);
        let branch = near_field(parameters.phi0, &derived, boundary.fp0);
        let step = 1e-3;
        let slope =
            (branch.evaluate(boundary.x1 + step) - branch.evaluate(boundary.x1 - step)) / (2. * step);
        assert!(slope.abs() < 1e-8);
    }

    #[test]
    fn far_field_tends_to_the_neutral_potential() {
        let parameters = reference_parameters();
        let derived = DerivedConstants::from_parameters(&parameters);
        let boundary = NearFieldBoundary::from_derived(&derived);
        let branch = far_field(parameters.phi0, &derived, boundary.x1);
        assert_relative_eq!(branch.evaluate(1e9), parameters.phi0, epsilon = 1e-12);
    }

    #[test]
    fn saturation_constant_does_not_make_u_positive() {
        for &b in &[1e-6, 1e-2, 1., 1e3, 1e9] {
            for &f0 in &[-20., -1., 0., 0.5, 20.] {
                let derived = DerivedConstants {
                    ftov: 0.025,
                    b,
                    lambda: 10.,
                    f0,
                };
                let boundary = NearFieldBoundary::from_derived(&derived);
                assert!(boundary.u <= 1e-15, "u = {} for b = {}, f0 = {}", boundary.u, b, f0);
            }
        }
    }
}
