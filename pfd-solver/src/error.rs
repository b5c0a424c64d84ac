// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Error
//! Error types for parameter ingestion and result output

use miette::Diagnostic;

#[derive(thiserror::Error, Debug, Diagnostic)]
/// Failures while turning a parameter file into a `PfdParameters` record
pub enum ParameterError {
    /// The file is missing or is not valid TOML or YAML
    #[error("failed to read parameters from {name}")]
    #[diagnostic(code(pfd::parameters::read))]
    Read {
        /// Path of the parameter file
        name: String,
        /// Error raised by the loader
        #[source]
        source: config::ConfigError,
    },
    /// A required key is absent or not a number
    #[error("parameters in {name} are missing or malformed")]
    #[diagnostic(
        code(pfd::parameters::missing),
        help("the keys phi0, NSites, Ef0, epsilon, alpha, T and phi_target are all required")
    )]
    Deserialize {
        /// Path of the parameter file
        name: String,
        /// Error raised while deserialising
        #[source]
        source: config::ConfigError,
    },
    /// Rejected by strict validation
    #[error("{name} must be strictly positive, found {value}")]
    #[diagnostic(code(pfd::parameters::non_positive))]
    NonPositive {
        /// Key of the offending parameter
        name: &'static str,
        /// Its value
        value: f64,
    },
    /// `NaN` or an infinity in the input
    #[error("{name} must be finite, found {value}")]
    #[diagnostic(code(pfd::parameters::non_finite))]
    NonFinite {
        /// Key of the offending parameter
        name: &'static str,
        /// Its value
        value: f64,
    },
}

#[derive(thiserror::Error, Debug, Diagnostic)]
/// General error for a single parameter set
pub enum PfdError {
    /// The parameter file could not be used
    #[error(transparent)]
    Parameters(#[from] ParameterError),
    /// Writing a report or plot failed
    #[error("IO Failure: {0}")]
    #[diagnostic(code(pfd::io_error))]
    Io(#[from] std::io::Error),
    /// The figure could not be drawn
    #[error("Plot Failure: {0}")]
    #[diagnostic(code(pfd::plot_error))]
    Plot(String),
}
