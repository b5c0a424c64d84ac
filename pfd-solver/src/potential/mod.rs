//! # Potential
//!
//! The near-field and far-field approximations joined into a single function of distance.
//!
//! The near-field branch is used up to and including `x1`, the far-field branch beyond it. There
//! is no blending at the seam: both branches are constructed to meet at `x1`, and how closely they
//! meet depends on how well the analytical approximation holds for the parameters at hand
//! (see [`JoinedPotential::seam_gap`]).

mod branch;

pub use branch::PotentialBranch;

use crate::derived::DerivedConstants;
use crate::parameters::PfdParameters;
use branch::NearFieldBoundary;

/// The piecewise potential of a single parameter set
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JoinedPotential {
    near_field: PotentialBranch,
    far_field: PotentialBranch,
    derived: DerivedConstants,
    phi0: f64,
    u: f64,
    fp0: f64,
    x1: f64,
    x2: f64,
}

impl JoinedPotential {
    /// Build the joined potential for a parameter set
    pub fn new(parameters: &PfdParameters) -> Self {
        let derived = DerivedConstants::from_parameters(parameters);
        Self::from_derived(parameters.phi0, derived)
    }

    /// Build the joined potential from already derived constants
    pub fn from_derived(phi0: f64, derived: DerivedConstants) -> Self {
        let NearFieldBoundary { u, fp0, x1 } = NearFieldBoundary::from_derived(&derived);
        let near_field = branch::near_field(phi0, &derived, fp0);
        let far_field = branch::far_field(phi0, &derived, x1);
        let x2 = (derived.b / 2.).sqrt() * derived.lambda;
        tracing::debug!(u, fp0, x1, x2, "Joined near-field and far-field branches");

        Self {
            near_field,
            far_field,
            derived,
            phi0,
            u,
            fp0,
            x1,
            x2,
        }
    }

    /// The branch responsible for distance `x`
    pub fn branch(&self, x: f64) -> &PotentialBranch {
        if x <= self.x1 {
            &self.near_field
        } else {
            &self.far_field
        }
    }

    /// The potential in V at a distance `x` in Angstrom
    pub fn evaluate(&self, x: f64) -> f64 {
        self.branch(x).evaluate(x)
    }

    /// Difference between the near-field and far-field branches at `x1`
    ///
    /// A positive gap means the joined potential falls by this amount on crossing `x1`, so it is
    /// only monotonic within each branch.
    pub fn seam_gap(&self) -> f64 {
        self.near_field.evaluate(self.x1) - self.far_field.evaluate(self.x1)
    }

    /// The branch used up to and including `x1`
    pub fn near_field(&self) -> &PotentialBranch {
        &self.near_field
    }

    /// The branch used beyond `x1`
    pub fn far_field(&self) -> &PotentialBranch {
        &self.far_field
    }

    /// Constants the branches were built from
    pub fn derived(&self) -> &DerivedConstants {
        &self.derived
    }

    /// The limit of the potential far from the interface
    pub fn phi_infinity(&self) -> f64 {
        self.phi0
    }

    /// Eq. 8
    pub fn u(&self) -> f64 {
        self.u
    }

    /// Reduced field at the interface, Eq. 9
    pub fn fp0(&self) -> f64 {
        self.fp0
    }

    /// End of the near-field branch in Angstrom
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// Characteristic length of the far-field branch in Angstrom
    pub fn x2(&self) -> f64 {
        self.x2
    }
}
