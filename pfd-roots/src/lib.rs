// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Bracketed root finding for scalar functions
//!
//! The solver crate only needs to invert a monotone-ish scalar function on a finite interval. This
//! crate hides the numerical library behind the [`RootFinder`] trait so the method can be swapped
//! without touching the physics. Two methods are provided:
//!
//! - [`Brent`], which delegates to `argmin`'s `BrentRoot` solver
//! - [`Bisection`], a slow but unconditionally robust fallback
//!
//! Both methods share the same failure taxonomy, [`RootError`], which keeps a missing sign change
//! apart from a function that evaluates to `NaN` or infinity inside the bracket.

#![warn(missing_docs)]

mod bisection;
mod brent;

pub use bisection::Bisection;
pub use brent::Brent;

use miette::Diagnostic;
use num_traits::Float;
use std::fmt::{Debug, Display};

/// A closed search interval `[lower, upper]`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bracket<T> {
    /// The lower end of the interval
    pub lower: T,
    /// The upper end of the interval
    pub upper: T,
}

impl<T: Float> Bracket<T> {
    /// Create a new bracket, the bounds are not reordered
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    fn is_ordered(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite() && self.lower < self.upper
    }
}

impl<T: Display> Display for Bracket<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// The ways a bracketed root search can fail
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RootError<T> {
    /// The bounds are not finite or not in increasing order
    #[error("invalid search interval [{lower}, {upper}]")]
    InvalidBracket {
        /// Lower bound as passed
        lower: T,
        /// Upper bound as passed
        upper: T,
    },
    /// The function has the same sign at both ends of the interval
    #[error("no sign change between f({lower}) = {f_lower} and f({upper}) = {f_upper}")]
    NotBracketed {
        /// Lower bound
        lower: T,
        /// Upper bound
        upper: T,
        /// Function value at the lower bound
        f_lower: T,
        /// Function value at the upper bound
        f_upper: T,
    },
    /// The function evaluated to `NaN` or an infinity
    #[error("function is not finite at x = {x} (f = {value})")]
    NonFinite {
        /// Where the function was evaluated
        x: T,
        /// The offending value
        value: T,
    },
    /// The interval collapsed onto a point where the function jumps across zero
    #[error("search converged to a discontinuity at x = {x} (residual {residual})")]
    Discontinuous {
        /// The converged abscissa
        x: T,
        /// The function value left at the converged abscissa
        residual: T,
    },
    /// The iteration budget ran out before the residual was acceptable
    #[error("no convergence after {iterations} iterations, residual {residual} at x = {x}")]
    NotConverged {
        /// Iterations spent
        iterations: u64,
        /// Last estimate
        x: T,
        /// Function value at the last estimate
        residual: T,
    },
    /// The underlying numerical library reported an error
    #[error("root solver failed: {0}")]
    Solver(String),
}

impl<T: Debug + Display> Diagnostic for RootError<T> {}

/// A method which finds a zero of a scalar function inside a bracket
pub trait RootFinder<T: Float> {
    /// Find `x` in `bracket` with `function(x) = 0`
    ///
    /// `tolerance` is the absolute tolerance on `x`. Implementors must return
    /// [`RootError::NotBracketed`] when the function does not change sign across the bracket and
    /// [`RootError::NonFinite`] when an evaluation is not finite.
    fn find_root<F>(&self, function: F, bracket: Bracket<T>, tolerance: T) -> Result<T, RootError<T>>
    where
        F: Fn(T) -> T;
}

/// Outcome of checking the bracket end points
pub(crate) enum Endpoints<T> {
    /// One of the end points is an exact zero
    Root(T),
    /// The function changes sign across the interval
    SignChange { f_lower: T, f_upper: T },
}

/// Evaluate the function at both ends of the bracket and confirm it changes sign
pub(crate) fn check_bracket<T, F>(
    function: &F,
    bracket: &Bracket<T>,
) -> Result<Endpoints<T>, RootError<T>>
where
    T: Float,
    F: Fn(T) -> T,
{
    if !bracket.is_ordered() {
        return Err(RootError::InvalidBracket {
            lower: bracket.lower,
            upper: bracket.upper,
        });
    }

    let f_lower = evaluate(function, bracket.lower)?;
    let f_upper = evaluate(function, bracket.upper)?;

    if f_lower == T::zero() {
        return Ok(Endpoints::Root(bracket.lower));
    }
    if f_upper == T::zero() {
        return Ok(Endpoints::Root(bracket.upper));
    }
    if f_lower.signum() == f_upper.signum() {
        return Err(RootError::NotBracketed {
            lower: bracket.lower,
            upper: bracket.upper,
            f_lower,
            f_upper,
        });
    }
    Ok(Endpoints::SignChange { f_lower, f_upper })
}

/// Evaluate the function, rejecting non-finite values
pub(crate) fn evaluate<T, F>(function: &F, x: T) -> Result<T, RootError<T>>
where
    T: Float,
    F: Fn(T) -> T,
{
    let value = function(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RootError::NonFinite { x, value })
    }
}
