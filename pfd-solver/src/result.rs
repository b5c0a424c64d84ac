//! # Result
//!
//! The outcome of a solve and its fixed-format text report

use crate::derived::DerivedConstants;
use pfd_roots::{Bracket, RootError};
use std::fmt;

/// Why `xstar` could not be located, together with what was attempted
#[derive(Clone, Debug, PartialEq)]
pub struct RootFailure {
    /// The search interval in Angstrom
    pub bracket: Bracket<f64>,
    /// The potential that was sought, in V
    pub phi_target: f64,
    /// The failure reported by the root finder
    pub reason: RootError<f64>,
}

impl fmt::Display for RootFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not find xstar for phi={:3.1} between x={:3.1} and x={:3.1}",
            self.phi_target, self.bracket.lower, self.bracket.upper
        )?;
        match self.reason {
            RootError::NotBracketed { .. } => Ok(()),
            ref reason => write!(f, " ({})", reason),
        }
    }
}

/// The distance at which the potential reaches the target
#[derive(Clone, Debug, PartialEq)]
pub enum XStar {
    /// Distance in Angstrom
    Found(f64),
    /// The search failed, the report carries the reason
    NotFound(RootFailure),
}

impl XStar {
    /// The distance if it was found
    pub fn value(&self) -> Option<f64> {
        match self {
            XStar::Found(x) => Some(*x),
            XStar::NotFound(_) => None,
        }
    }

    /// Why the search failed, if it did
    pub fn failure(&self) -> Option<&RootFailure> {
        match self {
            XStar::Found(_) => None,
            XStar::NotFound(failure) => Some(failure),
        }
    }
}

/// Everything a single solve produces
#[derive(Clone, Debug, PartialEq)]
pub struct SolveResult {
    /// Constants the potential was built from
    pub derived: DerivedConstants,
    /// Reduced field at the interface
    pub fp0: f64,
    /// End of the near-field branch in Angstrom
    pub x1: f64,
    /// Characteristic far-field length in Angstrom
    pub x2: f64,
    /// Potential at `x1` in V
    pub phi_x1: f64,
    /// Potential at `x2` in V
    pub phi_x2: f64,
    /// Limit of the potential far from the interface, `phi0`
    pub phi_infinity: f64,
    /// Surface charge density in e / nm^2
    pub sigma: f64,
    /// Capacitance in micro-Farad / cm^2
    pub capacitance: f64,
    /// Where the potential reaches `phi_target`
    pub xstar: XStar,
}

impl SolveResult {
    /// Whether every reported quantity is finite
    ///
    /// Unphysical parameters do not abort a solve, they surface as `NaN` or infinities here.
    pub fn is_finite(&self) -> bool {
        [
            self.x1,
            self.x2,
            self.phi_x1,
            self.phi_x2,
            self.phi_infinity,
            self.sigma,
            self.capacitance,
        ]
        .iter()
        .all(|value| value.is_finite())
    }

    /// The report lines in output order
    ///
    /// When `print_values` is false only a failure to find `xstar` is reported.
    pub fn report_lines(&self, print_values: bool) -> Vec<String> {
        let mut lines = Vec::new();
        if print_values {
            lines.push(format!("x_1      = {:8.4} A", self.x1));
            lines.push(format!("phi(x_1) = {:8.4} V", self.phi_x1));
            lines.push(format!("x_2      = {} A", exponential(self.x2, 2, 8)));
            lines.push(format!("phi(x_2) = {:8.4} V", self.phi_x2));
            lines.push(format!("phi(inf) = {:8.4} V", self.phi_infinity));
            lines.push(format!("sigma    = {:8.4} e/nm^2", self.sigma));
            lines.push(format!("C/A      = {:8.4} muF/cm^2", self.capacitance));
        }
        match &self.xstar {
            XStar::Found(xstar) if print_values => {
                lines.push(format!("xstar    = {:8.2} A", xstar));
            }
            XStar::Found(_) => {}
            XStar::NotFound(failure) => lines.push(failure.to_string()),
        }
        lines
    }
}

impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.report_lines(true) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Exponential notation with a signed, two digit exponent, right aligned in `width`
fn exponential(value: f64, precision: usize, width: usize) -> String {
    let formatted = format!("{:.*E}", precision, value);
    let formatted = match formatted.split_once('E') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}E{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    };
    format!("{:>width$}", formatted, width = width)
}

#[cfg(test)]
mod test {
    use super::{exponential, RootFailure, SolveResult, XStar};
    use crate::derived::DerivedConstants;
    use pfd_roots::{Bracket, RootError};

    fn reference_result(xstar: XStar) -> SolveResult {
        SolveResult {
            derived: DerivedConstants {
                ftov: 0.02585199,
                b: 109592.31303718728,
                lambda: 37.797775399828645,
                f0: 19.340870857523928,
            },
            fp0: -3.933641229583506,
            x1: 148.68288769930314,
            x2: 8847.922069392509,
            phi_x1: 0.20001081436645562,
            phi_x2: 0.45961090468999766,
            phi_infinity: 0.5,
            sigma: -0.0014868288769930317,
            capacitance: 0.04764334980281391,
            xstar,
        }
    }

    fn not_bracketed() -> XStar {
        XStar::NotFound(RootFailure {
            bracket: Bracket::new(0., 8847.922069392509),
            phi_target: 0.6,
            reason: RootError::NotBracketed {
                lower: 0.,
                upper: 8847.922069392509,
                f_lower: -0.6,
                f_upper: -0.14,
            },
        })
    }

    #[test]
    fn exponential_matches_fixed_width_scientific_notation() {
        assert_eq!(exponential(8847.922069392509, 2, 8), "8.85E+03");
        assert_eq!(exponential(58.46750898695991, 2, 8), "5.85E+01");
        assert_eq!(exponential(0.00012, 2, 8), "1.20E-04");
        assert_eq!(exponential(-3.0e12, 2, 8), "-3.00E+12");
    }

    #[test]
    fn report_of_the_reference_solve() {
        let lines = reference_result(XStar::Found(43.54536734049064)).report_lines(true);
        assert_eq!(
            lines,
            vec![
                "x_1      = 148.6829 A",
                "phi(x_1) =   0.2000 V",
                "x_2      = 8.85E+03 A",
                "phi(x_2) =   0.4596 V",
                "phi(inf) =   0.5000 V",
                "sigma    =  -0.0015 e/nm^2",
                "C/A      =   0.0476 muF/cm^2",
                "xstar    =    43.55 A",
            ]
        );
    }

    #[test]
    fn failure_replaces_the_xstar_line() {
        let lines = reference_result(not_bracketed()).report_lines(true);
        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines[7],
            "Could not find xstar for phi=0.6 between x=0.0 and x=8847.9"
        );
    }

    #[test]
    fn failure_is_reported_even_when_values_are_not() {
        let quiet = reference_result(not_bracketed()).report_lines(false);
        assert_eq!(quiet.len(), 1);
        assert!(reference_result(XStar::Found(43.5)).report_lines(false).is_empty());
    }

    #[test]
    fn non_finite_failure_names_its_reason() {
        let failure = RootFailure {
            bracket: Bracket::new(0., 1000.),
            phi_target: 0.1,
            reason: RootError::NonFinite {
                x: 0.,
                value: f64::NAN,
            },
        };
        let message = failure.to_string();
        assert!(message.starts_with("Could not find xstar for phi=0.1 between x=0.0 and x=1000.0"));
        assert!(message.contains("not finite"));
    }

    #[test]
    fn reference_result_is_finite() {
        assert!(reference_result(not_bracketed()).is_finite());
        let mut result = reference_result(not_bracketed());
        result.x1 = f64::NAN;
        assert!(!result.is_finite());
    }
}
