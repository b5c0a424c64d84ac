use super::{check_bracket, evaluate, Bracket, Endpoints, RootError, RootFinder};
use argmin::core::{ArgminFloat, CostFunction, Error, Executor, State};
use argmin::solver::brent::BrentRoot;
use std::marker::PhantomData;

/// Brent's method, delegated to `argmin`
///
/// After `argmin` terminates the residual at the returned abscissa is checked against
/// `residual_tolerance`. A large residual at a converged abscissa means the bracket shrank onto a
/// jump in the function rather than a zero, which is reported as [`RootError::Discontinuous`].
#[derive(Copy, Clone, Debug)]
pub struct Brent<T> {
    maximum_iterations: u64,
    residual_tolerance: T,
}

impl<T> Brent<T> {
    /// Create a Brent root finder with an iteration budget and an acceptable residual
    pub fn new(maximum_iterations: u64, residual_tolerance: T) -> Self {
        Self {
            maximum_iterations,
            residual_tolerance,
        }
    }
}

impl Default for Brent<f64> {
    fn default() -> Self {
        Self::new(100, 1e-8)
    }
}

/// Adapts a closure to the `argmin` cost function interface
struct Objective<'a, T, F> {
    function: &'a F,
    marker: PhantomData<T>,
}

impl<T, F> CostFunction for Objective<'_, T, F>
where
    T: ArgminFloat,
    F: Fn(T) -> T,
{
    type Param = T;
    type Output = T;

    fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
        Ok((self.function)(*x))
    }
}

impl<T: ArgminFloat> RootFinder<T> for Brent<T> {
    fn find_root<F>(&self, function: F, bracket: Bracket<T>, tolerance: T) -> Result<T, RootError<T>>
    where
        F: Fn(T) -> T,
    {
        if let Endpoints::Root(x) = check_bracket(&function, &bracket)? {
            return Ok(x);
        }

        let objective = Objective {
            function: &function,
            marker: PhantomData,
        };
        let solver = BrentRoot::new(bracket.lower, bracket.upper, tolerance);
        let result = Executor::new(objective, solver)
            .configure(|state| state.max_iters(self.maximum_iterations))
            .run()
            .map_err(|e| RootError::Solver(e.to_string()))?;

        let state = result.state();
        let iterations = state.get_iter();
        let x = state
            .get_param()
            .copied()
            .ok_or_else(|| RootError::Solver("Brent terminated without an estimate".into()))?;
        tracing::trace!("Brent terminated after {} iterations", iterations);

        let residual = evaluate(&function, x)?;
        if residual.abs() <= self.residual_tolerance {
            Ok(x)
        } else if iterations >= self.maximum_iterations {
            Err(RootError::NotConverged {
                iterations,
                x,
                residual,
            })
        } else {
            Err(RootError::Discontinuous { x, residual })
        }
    }
}

#[cfg(test)]
mod test {
    use super::Brent;
    use crate::{Bracket, RootError, RootFinder};
    use approx::assert_relative_eq;

    #[test]
    fn finds_the_positive_root_of_a_quadratic() {
        let root = Brent::default()
            .find_root(|x: f64| x * x - 2., Bracket::new(0., 2.), 1e-12)
            .unwrap();
        assert_relative_eq!(root, 2f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn finds_the_root_of_a_transcendental_function() {
        let root = Brent::default()
            .find_root(|x: f64| x.cos() - x, Bracket::new(0., 1.), 1e-12)
            .unwrap();
        assert!((root.cos() - root).abs() < 1e-10);
    }

    #[test]
    fn a_step_across_zero_is_discontinuous() {
        let step = |x: f64| if x < 0.5 { -1. } else { 1. };
        let result = Brent::new(1000, 1e-8).find_root(step, Bracket::new(0., 1.), 1e-12);
        match result {
            Err(RootError::Discontinuous { x, residual }) => {
                assert!((x - 0.5).abs() < 1e-9);
                assert_eq!(residual.abs(), 1.);
            }
            other => panic!("expected a discontinuity, found {:?}", other),
        }
    }

    #[test]
    fn missing_sign_change_is_not_bracketed() {
        let result = Brent::default().find_root(|x: f64| x.exp(), Bracket::new(0., 1.), 1e-12);
        assert!(matches!(result, Err(RootError::NotBracketed { .. })));
    }
}
