//! # Solver
//!
//! Runs the full calculation for one parameter set: derived constants, the joined potential, the
//! interface charge and the inversion of the potential for `xstar`.

use crate::constants::MINIMUM_SEARCH_UPPER_BOUND;
use crate::outputs::SurfaceCharge;
use crate::parameters::PfdParameters;
use crate::potential::JoinedPotential;
use crate::result::{RootFailure, SolveResult, XStar};
use pfd_roots::{Bracket, Brent, RootFinder};

/// Builder for a [`PfdSolver`], the root finder is chosen by the caller
pub struct PfdSolverBuilder<RefRootFinder> {
    root_finder: RefRootFinder,
    tolerance: f64,
    minimum_upper_bound: f64,
}

impl PfdSolverBuilder<()> {
    /// Initialise an empty PfdSolverBuilder
    pub fn new() -> Self {
        Self {
            root_finder: (),
            tolerance: 2e-12,
            minimum_upper_bound: MINIMUM_SEARCH_UPPER_BOUND,
        }
    }
}

impl Default for PfdSolverBuilder<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<RefRootFinder> PfdSolverBuilder<RefRootFinder> {
    /// Attach the method used to locate `xstar`
    pub fn with_root_finder<Finder>(self, root_finder: Finder) -> PfdSolverBuilder<Finder> {
        PfdSolverBuilder {
            root_finder,
            tolerance: self.tolerance,
            minimum_upper_bound: self.minimum_upper_bound,
        }
    }

    /// Absolute tolerance on `xstar` in Angstrom
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The search for `xstar` extends to at least this distance in Angstrom
    pub fn with_minimum_upper_bound(mut self, minimum_upper_bound: f64) -> Self {
        self.minimum_upper_bound = minimum_upper_bound;
        self
    }
}

impl<Finder: RootFinder<f64>> PfdSolverBuilder<Finder> {
    /// Finish the solver
    pub fn build(self) -> PfdSolver<Finder> {
        PfdSolver {
            root_finder: self.root_finder,
            tolerance: self.tolerance,
            minimum_upper_bound: self.minimum_upper_bound,
        }
    }
}

/// The analytical Poisson-Fermi-Dirac solver
///
/// A solver holds no state between calls, a single instance can be shared across threads to solve
/// many parameter sets.
#[derive(Clone, Debug)]
pub struct PfdSolver<Finder> {
    root_finder: Finder,
    tolerance: f64,
    minimum_upper_bound: f64,
}

impl PfdSolver<Brent<f64>> {
    /// A solver using Brent's method with the default tolerances
    pub fn new() -> Self {
        PfdSolverBuilder::new()
            .with_root_finder(Brent::default())
            .build()
    }
}

impl Default for PfdSolver<Brent<f64>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Finder: RootFinder<f64>> PfdSolver<Finder> {
    /// Solve for a single parameter set
    ///
    /// Failing to locate `xstar` does not fail the solve, the result then carries
    /// [`XStar::NotFound`] alongside every other quantity.
    #[tracing::instrument(name = "PFD solve", level = "debug", skip(self))]
    pub fn solve(&self, parameters: &PfdParameters) -> SolveResult {
        let potential = JoinedPotential::new(parameters);
        let charge = SurfaceCharge::new(parameters, potential.fp0());
        let xstar = self.find_xstar(&potential, parameters.phi_target);

        SolveResult {
            derived: *potential.derived(),
            fp0: potential.fp0(),
            x1: potential.x1(),
            x2: potential.x2(),
            phi_x1: potential.evaluate(potential.x1()),
            phi_x2: potential.evaluate(potential.x2()),
            phi_infinity: potential.phi_infinity(),
            sigma: charge.sigma,
            capacitance: charge.capacitance,
            xstar,
        }
    }

    /// The interval searched for `xstar`, from the interface to `max(x2, minimum_upper_bound)`
    pub fn search_bracket(&self, potential: &JoinedPotential) -> Bracket<f64> {
        Bracket::new(0., potential.x2().max(self.minimum_upper_bound))
    }

    /// Invert the potential for the distance at which it equals `phi_target`
    pub fn find_xstar(&self, potential: &JoinedPotential, phi_target: f64) -> XStar {
        let bracket = self.search_bracket(potential);
        match self.root_finder.find_root(
            |x| potential.evaluate(x) - phi_target,
            bracket,
            self.tolerance,
        ) {
            Ok(xstar) => {
                tracing::debug!(xstar, branch = potential.branch(xstar).name(), "Found xstar");
                XStar::Found(xstar)
            }
            Err(reason) => {
                tracing::warn!(phi_target, %bracket, %reason, "Could not find xstar");
                XStar::NotFound(RootFailure {
                    bracket,
                    phi_target,
                    reason,
                })
            }
        }
    }
}
