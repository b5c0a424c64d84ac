use crate::plot::PlotSettings;
use color_eyre::eyre::eyre;
use config::{Config, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Configuration {
    pub(crate) root: RootConfiguration,
    pub(crate) plot: PlotSettings,
    pub(crate) report: ReportConfiguration,
    pub(crate) telemetry: TelemetryConfiguration,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RootMethod {
    Brent,
    Bisection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct RootConfiguration {
    pub(crate) method: RootMethod,
    pub(crate) tolerance: f64,
    pub(crate) maximum_iterations: u64,
    pub(crate) residual_tolerance: f64,
    pub(crate) minimum_upper_bound: f64,
}

impl Default for RootConfiguration {
    fn default() -> Self {
        Self {
            method: RootMethod::Brent,
            tolerance: 2e-12,
            maximum_iterations: 100,
            residual_tolerance: 1e-8,
            minimum_upper_bound: crate::constants::MINIMUM_SEARCH_UPPER_BOUND,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct ReportConfiguration {
    pub(crate) print_values: bool,
}

impl Default for ReportConfiguration {
    fn default() -> Self {
        Self { print_values: true }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct TelemetryConfiguration {
    pub(crate) directory: PathBuf,
    pub(crate) file_name: String,
}

impl Default for TelemetryConfiguration {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("results"),
            file_name: String::from("pfd.log"),
        }
    }
}

impl Configuration {
    pub(crate) fn build() -> color_eyre::Result<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Project wide settings, every field has a built in default so the file is optional
            .add_source(File::with_name(".config/default").required(false))
            // The override settings which may be set by the user, optional
            .add_source(File::with_name(&format!(".config/{}", run_mode)).required(false))
            .build()?;

        s.try_deserialize()
            .map_err(|e| eyre!(format!("Failed to deserialize the config file: {:?}", e)))
    }
}

#[cfg(test)]
mod test {
    use super::{Configuration, RootMethod};
    use config::{Config, File, FileFormat};

    fn parse(contents: &str) -> Configuration {
        Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        let configuration = parse("");
        assert_eq!(configuration.root.method, RootMethod::Brent);
        assert_eq!(configuration.root.maximum_iterations, 100);
        assert_eq!(configuration.root.minimum_upper_bound, 1000.);
        assert_eq!(configuration.plot.number_of_points, 200);
        assert!(configuration.report.print_values);
    }

    #[test]
    fn sections_override_individual_fields() {
        let configuration = parse("[root]\nmethod = \"bisection\"\ntolerance = 1e-10\n\n[plot]\nnumber_of_points = 50\n");
        assert_eq!(configuration.root.method, RootMethod::Bisection);
        assert_eq!(configuration.root.tolerance, 1e-10);
        assert_eq!(configuration.root.residual_tolerance, 1e-8);
        assert_eq!(configuration.plot.number_of_points, 50);
        assert_eq!(configuration.plot.maximum_exponent, 8.);
    }
}
