// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Constants
//!
//! Physical constants and the unit-conversion prefactors of the analytical model

pub const BOLTZMANN_EV: f64 = 8.61733e-5; // The Boltzmann constant in eV / K

// Screening length prefactor, sqrt(epsilon * T / (alpha * N)) with N in cm^-3 and T in K
// yields Angstrom
pub const SCREENING_LENGTH_PREFACTOR: f64 = 6.90089807e8;

// Surface charge prefactor: fp0 * sqrt(alpha * N * T / epsilon), N in cm^-3, gives e / nm^2
pub const SURFACE_CHARGE_PREFACTOR: f64 = 6.90089807e-14;

// e / nm^2 per volt in micro-Farad / cm^2 (e = 1.60218e-19 C, 1 nm^2 = 1e-14 cm^2)
pub const CAPACITANCE_PREFACTOR: f64 = 16.0218;

// The xstar search interval always extends at least this far, in Angstrom
pub const MINIMUM_SEARCH_UPPER_BOUND: f64 = 1000.0;
