use super::{check_bracket, evaluate, Bracket, Endpoints, RootError, RootFinder};
use num_traits::Float;

/// Interval bisection
///
/// Halves the bracket until it is narrower than the requested tolerance. Slow, but it only relies
/// on the sign of the function so it is a useful cross-check for [`crate::Brent`].
#[derive(Copy, Clone, Debug)]
pub struct Bisection<T> {
    maximum_iterations: u64,
    residual_tolerance: T,
}

impl<T> Bisection<T> {
    /// Create a bisection root finder with an iteration budget and an acceptable residual
    pub fn new(maximum_iterations: u64, residual_tolerance: T) -> Self {
        Self {
            maximum_iterations,
            residual_tolerance,
        }
    }
}

impl Default for Bisection<f64> {
    fn default() -> Self {
        Self::new(200, 1e-8)
    }
}

impl<T: Float> RootFinder<T> for Bisection<T> {
    fn find_root<F>(&self, function: F, bracket: Bracket<T>, tolerance: T) -> Result<T, RootError<T>>
    where
        F: Fn(T) -> T,
    {
        let (mut f_lower, _) = match check_bracket(&function, &bracket)? {
            Endpoints::Root(x) => return Ok(x),
            Endpoints::SignChange { f_lower, f_upper } => (f_lower, f_upper),
        };

        let two = T::one() + T::one();
        let (mut lower, mut upper) = (bracket.lower, bracket.upper);
        let mut midpoint = (lower + upper) / two;
        let mut f_midpoint = evaluate(&function, midpoint)?;

        for iteration in 1..=self.maximum_iterations {
            if f_midpoint == T::zero() || (upper - lower) / two < tolerance {
                tracing::trace!("Bisection terminated after {} iterations", iteration);
                return if f_midpoint.abs() <= self.residual_tolerance {
                    Ok(midpoint)
                } else {
                    Err(RootError::Discontinuous {
                        x: midpoint,
                        residual: f_midpoint,
                    })
                };
            }
            if f_lower.signum() == f_midpoint.signum() {
                lower = midpoint;
                f_lower = f_midpoint;
            } else {
                upper = midpoint;
            }
            midpoint = (lower + upper) / two;
            f_midpoint = evaluate(&function, midpoint)?;
        }

        Err(RootError::NotConverged {
            iterations: self.maximum_iterations,
            x: midpoint,
            residual: f_midpoint,
        })
    }
}
