// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! PFD solver computes the electrostatic potential near a charged interface in the
//! Poisson-Fermi-Dirac approximation
//!
//! # Overview
//! Charge near the interface is held in defect sites whose occupation follows Fermi-Dirac
//! statistics. The potential is found analytically: a parabolic near-field branch, valid where the
//! sites are fully depleted or fully occupied, is joined at `x1` to a Gouy-Chapman-like far-field
//! branch which relaxes to the charge-neutrality potential `phi0`. From the joined potential the
//! solver reports the characteristic lengths `x1` and `x2`, the surface charge and capacitance of
//! the interface, and the distance `xstar` at which the potential reaches a target value.
//!
//! # Usage
//! PFD solver is distributed as a binary crate. Define a parameter set in a `.yaml` or `.toml`
//! file:
//!
//! ```yaml
//! phi0: 0.5
//! NSites: 1.0e18
//! Ef0: 0.3
//! epsilon: 10.0
//! alpha: 1.0
//! T: 300.0
//! phi_target: 0.1
//! ```
//!
//! and pass one or more files on the command line. Each file is solved independently, the report
//! is written to the terminal, the potential is drawn to an `.svg` figure and its samples are
//! written to a `.csv` file next to the input.
//!
//! The solver can also be used as a library:
//!
//! ```
//! use pfd_solver::{PfdParameters, PfdSolver};
//!
//! let parameters = PfdParameters::new(0.5, 1e18, 0.3, 10., 1., 300., 0.1);
//! let result = PfdSolver::new().solve(&parameters);
//! assert!(result.xstar.value().is_some());
//! ```

#![warn(missing_docs)]
#![allow(clippy::too_many_arguments)]

/// The command line application, configuration and tracing
pub mod app;

/// Physical constants
mod constants;

/// Derived constants shared by both branches of the potential
pub mod derived;

/// Error handling
mod error;

/// Surface charge and capacitance
pub mod outputs;

/// Input parameters
pub mod parameters;

/// Sampling of the potential for plotting
pub mod plot;

/// The near-field and far-field potential
pub mod potential;

/// Solve results and the text report
pub mod result;

/// The top level solver
pub mod solver;

pub use derived::DerivedConstants;
pub use error::{ParameterError, PfdError};
pub use outputs::SurfaceCharge;
pub use parameters::PfdParameters;
pub use plot::{PlotData, PlotSettings};
pub use potential::{JoinedPotential, PotentialBranch};
pub use result::{RootFailure, SolveResult, XStar};
pub use solver::{PfdSolver, PfdSolverBuilder};
