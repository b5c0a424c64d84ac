//! # Plot
//!
//! Samples the joined potential on a logarithmic grid and draws it, with the marker points `x1`,
//! `xstar` and `x2`, as a log-x figure. The samples are also written to CSV.

use crate::error::PfdError;
use crate::potential::JoinedPotential;
use crate::result::SolveResult;
use ndarray::Array1;
use plotters::prelude::*;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// The sampling grid, `number_of_points` log-spaced between 10^`minimum_exponent` and
/// 10^`maximum_exponent` Angstrom
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    /// Decade of the first sample
    pub minimum_exponent: f64,
    /// Decade of the last sample
    pub maximum_exponent: f64,
    /// Number of samples
    pub number_of_points: usize,
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels
    pub height: u32,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            minimum_exponent: -1.,
            maximum_exponent: 8.,
            number_of_points: 200,
            width: 800,
            height: 600,
        }
    }
}

/// Sampled potential and marker points
#[derive(Clone, Debug)]
pub struct PlotData {
    /// Distances in Angstrom
    pub x: Array1<f64>,
    /// Potential in V at each distance
    pub phi: Array1<f64>,
    /// `(x, phi)` at `x1`, `xstar` when found, and `x2`
    pub markers: Vec<(f64, f64)>,
}

impl PlotData {
    /// Evaluate the potential on the grid described by `settings`
    pub fn sample(potential: &JoinedPotential, result: &SolveResult, settings: &PlotSettings) -> Self {
        let x = Array1::logspace(
            10.,
            settings.minimum_exponent,
            settings.maximum_exponent,
            settings.number_of_points,
        );
        let phi = x.mapv(|x| potential.evaluate(x));
        let markers = std::iter::once(result.x1)
            .chain(result.xstar.value())
            .chain(std::iter::once(result.x2))
            .map(|x| (x, potential.evaluate(x)))
            .collect();
        Self { x, phi, markers }
    }

    /// Write the samples and markers as CSV with the header `kind,x,phi`
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<(), PfdError> {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "kind,x,phi")?;
        for (x, phi) in self.x.iter().zip(self.phi.iter()) {
            writeln!(writer, "curve,{:.15e},{:.15e}", x, phi)?;
        }
        for (x, phi) in self.markers.iter() {
            writeln!(writer, "marker,{:.15e},{:.15e}", x, phi)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Draw phi against a logarithmic x axis as an SVG figure
    ///
    /// The x axis spans the sampled grid. Non-finite samples and markers are left out, a figure
    /// with no finite sample at all is an error.
    pub fn render_svg(&self, path: impl AsRef<Path>, settings: &PlotSettings) -> Result<(), PfdError> {
        let (x_min, x_max) = match (self.x.get(0), self.x.get(self.x.len().wrapping_sub(1))) {
            (Some(&first), Some(&last)) if first > 0. && last > first => (first, last),
            _ => return Err(PfdError::Plot("the sampling grid is empty".into())),
        };
        let curve = self
            .x
            .iter()
            .zip(self.phi.iter())
            .map(|(&x, &phi)| (x, phi))
            .filter(|(_, phi)| phi.is_finite())
            .collect::<Vec<_>>();
        let markers = self
            .markers
            .iter()
            .copied()
            .filter(|&(x, phi)| x >= x_min && x <= x_max && phi.is_finite())
            .collect::<Vec<_>>();
        let (y_min, y_max) = vertical_range(curve.iter().chain(markers.iter()).map(|&(_, phi)| phi))
            .ok_or_else(|| PfdError::Plot("no finite samples to draw".into()))?;

        let root = SVGBackend::new(path.as_ref(), (settings.width, settings.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d((x_min..x_max).log_scale(), y_min..y_max)
            .map_err(plot_error)?;
        chart
            .configure_mesh()
            .x_desc("x (A)")
            .y_desc("phi (V)")
            .draw()
            .map_err(plot_error)?;
        chart
            .draw_series(LineSeries::new(curve, &BLUE))
            .map_err(plot_error)?;
        chart
            .draw_series(markers.into_iter().map(|point| Cross::new(point, 6, &RED)))
            .map_err(plot_error)?;
        root.present().map_err(plot_error)?;
        Ok(())
    }
}

/// The extent of the finite values, padded so the curve does not touch the frame
fn vertical_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (low, high) = values.fold(None, |range, value| match range {
        None => Some((value, value)),
        Some((low, high)) => Some((f64::min(low, value), f64::max(high, value))),
    })?;
    let padding = if high > low { 0.05 * (high - low) } else { 0.1 };
    Some((low - padding, high + padding))
}

fn plot_error(error: impl std::fmt::Display) -> PfdError {
    PfdError::Plot(error.to_string())
}

/// Where the plot output of a parameter file goes
///
/// The file is named after the input, up to its first `.`, with the given extension. It sits next
/// to the input unless `directory` is given.
pub fn default_plot_path(input: &Path, directory: Option<&Path>, extension: &str) -> PathBuf {
    let stem = input
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("pfd");
    let directory = directory
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    directory.join(format!("{}.{}", stem, extension))
}

#[cfg(test)]
mod test {
    use super::{default_plot_path, vertical_range, PlotData, PlotSettings};
    use crate::error::PfdError;
    use crate::parameters::{reference_parameters, PfdParameters};
    use crate::potential::JoinedPotential;
    use crate::solver::PfdSolver;
    use approx::assert_relative_eq;
    use std::path::Path;

    #[test]
    fn samples_span_the_requested_decades() {
        let parameters = reference_parameters();
        let potential = JoinedPotential::new(&parameters);
        let result = PfdSolver::new().solve(&parameters);
        let data = PlotData::sample(&potential, &result, &PlotSettings::default());

        assert_eq!(data.x.len(), 200);
        assert_relative_eq!(data.x[0], 0.1, max_relative = 1e-12);
        assert_relative_eq!(data.x[199], 1e8, max_relative = 1e-12);
        assert!(data.x.windows(2).into_iter().all(|pair| pair[1] > pair[0]));
        assert_relative_eq!(data.phi[199], parameters.phi0, epsilon = 1e-6);
    }

    #[test]
    fn markers_include_xstar_only_when_found() {
        let parameters = reference_parameters();
        let potential = JoinedPotential::new(&parameters);
        let found = PfdSolver::new().solve(&parameters);
        let data = PlotData::sample(&potential, &found, &PlotSettings::default());
        assert_eq!(data.markers.len(), 3);
        assert_eq!(data.markers[0].0, found.x1);
        assert_eq!(data.markers[2].0, found.x2);

        let unreachable = PfdParameters {
            phi_target: 0.6,
            ..parameters
        };
        let missing = PfdSolver::new().solve(&unreachable);
        let data = PlotData::sample(&potential, &missing, &PlotSettings::default());
        assert_eq!(data.markers.len(), 2);
    }

    #[test]
    fn csv_has_a_row_per_sample_and_marker() {
        let parameters = reference_parameters();
        let potential = JoinedPotential::new(&parameters);
        let result = PfdSolver::new().solve(&parameters);
        let settings = PlotSettings {
            number_of_points: 10,
            ..PlotSettings::default()
        };
        let data = PlotData::sample(&potential, &result, &settings);

        let path = std::env::temp_dir().join("pfd_plot_rows.csv");
        data.write_csv(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "kind,x,phi");
        assert_eq!(lines.len(), 1 + 10 + 3);
        assert_eq!(lines.iter().filter(|line| line.starts_with("marker,")).count(), 3);
    }

    #[test]
    fn figure_is_written_as_svg() {
        let parameters = reference_parameters();
        let potential = JoinedPotential::new(&parameters);
        let result = PfdSolver::new().solve(&parameters);
        let settings = PlotSettings::default();
        let data = PlotData::sample(&potential, &result, &settings);

        let path = std::env::temp_dir().join("pfd_plot_figure.svg");
        data.render_svg(&path, &settings).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(content.contains("<svg"));
        assert!(content.contains("polyline"));
        assert!(content.contains("phi (V)"));
    }

    #[test]
    fn figure_without_finite_samples_is_an_error() {
        let parameters = PfdParameters {
            temperature: 0.,
            ..reference_parameters()
        };
        let potential = JoinedPotential::new(&parameters);
        let result = PfdSolver::new().solve(&parameters);
        let settings = PlotSettings::default();
        let mut data = PlotData::sample(&potential, &result, &settings);
        data.phi.fill(f64::NAN);
        data.markers.clear();

        let path = std::env::temp_dir().join("pfd_plot_not_finite.svg");
        let outcome = data.render_svg(&path, &settings);
        std::fs::remove_file(&path).ok();
        assert!(matches!(outcome, Err(PfdError::Plot(_))));
    }

    #[test]
    fn vertical_range_is_padded() {
        let (low, high) = vertical_range([0., 0.5, 0.25].iter().copied()).unwrap();
        assert_relative_eq!(low, -0.025, epsilon = 1e-15);
        assert_relative_eq!(high, 0.525, epsilon = 1e-15);
        let (low, high) = vertical_range(std::iter::once(0.3)).unwrap();
        assert!(low < 0.3 && high > 0.3);
        assert!(vertical_range(std::iter::empty()).is_none());
    }

    #[test]
    fn plot_path_follows_the_input_stem() {
        assert_eq!(
            default_plot_path(Path::new("runs/interface.params.yaml"), None, "svg"),
            Path::new("runs/interface.svg")
        );
        assert_eq!(
            default_plot_path(Path::new("interface.yaml"), Some(Path::new("plots")), "csv"),
            Path::new("plots/interface.csv")
        );
    }
}
