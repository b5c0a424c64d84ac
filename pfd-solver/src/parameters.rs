//! # Parameters
//!
//! The physical input of a single calculation, read from a TOML or YAML file

use crate::error::ParameterError;
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

/// The input of one solve
///
/// Keys in a parameter file follow the conventional physics names (`NSites`, `Ef0`, `T`), they are
/// also accepted in lower case.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct PfdParameters {
    /// Charge-neutrality potential in V
    pub phi0: f64,
    /// Defect site density in cm^-3
    #[serde(rename = "NSites", alias = "nsites")]
    pub n_sites: f64,
    /// Formation energy at charge neutrality in eV
    #[serde(rename = "Ef0", alias = "ef0")]
    pub ef0: f64,
    /// Relative dielectric constant
    pub epsilon: f64,
    /// Saturation parameter
    pub alpha: f64,
    /// Temperature in K
    #[serde(rename = "T", alias = "t")]
    pub temperature: f64,
    /// Potential at which the distance `xstar` is sought, in V
    pub phi_target: f64,
}

impl PfdParameters {
    /// Create a parameter set, values are in the units documented on the fields
    pub fn new(
        phi0: f64,
        n_sites: f64,
        ef0: f64,
        epsilon: f64,
        alpha: f64,
        temperature: f64,
        phi_target: f64,
    ) -> Self {
        Self {
            phi0,
            n_sites,
            ef0,
            epsilon,
            alpha,
            temperature,
            phi_target,
        }
    }

    /// Read a parameter file, the format is inferred from the extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParameterError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let settings = Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|source| ParameterError::Read {
                name: name.clone(),
                source,
            })?;
        settings
            .try_deserialize()
            .map_err(|source| ParameterError::Deserialize { name, source })
    }

    /// Parse parameters held in memory
    pub fn parse(contents: &str, format: FileFormat) -> Result<Self, ParameterError> {
        let name = String::from("<inline>");
        let settings = Config::builder()
            .add_source(File::from_str(contents, format))
            .build()
            .map_err(|source| ParameterError::Read {
                name: name.clone(),
                source,
            })?;
        settings
            .try_deserialize()
            .map_err(|source| ParameterError::Deserialize { name, source })
    }

    /// Stricter checks than the solver itself needs
    ///
    /// The solver happily propagates `NaN` and infinities from unphysical input. Callers who would
    /// rather fail early can reject non-finite values and non-positive densities, dielectric
    /// constants, saturation parameters and temperatures here.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let all = [
            ("phi0", self.phi0),
            ("NSites", self.n_sites),
            ("Ef0", self.ef0),
            ("epsilon", self.epsilon),
            ("alpha", self.alpha),
            ("T", self.temperature),
            ("phi_target", self.phi_target),
        ];
        if let Some(&(name, value)) = all.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ParameterError::NonFinite { name, value });
        }

        let positive = [
            ("NSites", self.n_sites),
            ("epsilon", self.epsilon),
            ("alpha", self.alpha),
            ("T", self.temperature),
        ];
        match positive.iter().find(|(_, value)| *value <= 0.) {
            Some(&(name, value)) => Err(ParameterError::NonPositive { name, value }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
pub(crate) fn reference_parameters() -> PfdParameters {
    PfdParameters::new(0.5, 1e18, 0.3, 10., 1., 300., 0.1)
}
