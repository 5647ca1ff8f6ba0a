//! Runs every root finder on one problem and ranks the outcomes.

use tracing::debug;

use super::algorithms::{Algorithm, BracketFamily, OpenFamily};
use super::bisection::bisection;
use super::config::CommonCfg;
use super::errors::RootFailure;
use super::false_position::false_position;
use super::fixed_point::{fixed_point, FixedPointCfg};
use super::incremental_search::incremental_search;
use super::multiple_roots::multiple_roots;
use super::newton::newton;
use super::report::ConvergenceResult;
use super::secant::secant;

type Callable<'a> = &'a dyn Fn(f64) -> f64;


/// Shared inputs of a comparison run.
///
/// `f`, the bracket `[a, b]` and the seed `x0` are always present; the rest
/// is optional and a method needing a missing piece fails with
/// [`RootFailure::MissingInput`].
///
/// ┌ `f`    : function whose root is sought
/// ├ `df`   : first derivative (Newton, multiple roots)
/// ├ `d2f`  : second derivative (multiple roots)
/// ├ `g`    : iteration function (fixed point)
/// ├ `a, b` : bracket, also the secant seeds and the fixed-point interval
/// ├ `x0`   : seed of the single-point open methods
/// └ `step` : incremental search step
#[derive(Clone, Copy)]
pub struct RootProblem<'a> {
    pub f    : Callable<'a>,
    pub df   : Option<Callable<'a>>,
    pub d2f  : Option<Callable<'a>>,
    pub g    : Option<Callable<'a>>,
    pub a    : f64,
    pub b    : f64,
    pub x0   : f64,
    pub step : Option<f64>,
}

impl<'a> RootProblem<'a> {
    pub fn new(f: Callable<'a>, a: f64, b: f64, x0: f64) -> Self {
        Self { f, df: None, d2f: None, g: None, a, b, x0, step: None }
    }

    #[must_use]
    pub fn with_derivative(mut self, df: Callable<'a>) -> Self {
        self.df = Some(df);
        self
    }
    #[must_use]
    pub fn with_second_derivative(mut self, d2f: Callable<'a>) -> Self {
        self.d2f = Some(d2f);
        self
    }
    #[must_use]
    pub fn with_iteration_function(mut self, g: Callable<'a>) -> Self {
        self.g = Some(g);
        self
    }
    #[must_use]
    pub fn with_step(mut self, dx: f64) -> Self {
        self.step = Some(dx);
        self
    }
}


fn missing(algorithm: Algorithm, input: &'static str) -> ConvergenceResult {
    ConvergenceResult::rejected(algorithm, RootFailure::MissingInput { input })
}


/// Runs a single `algorithm` on `problem`.
pub fn run(algorithm: Algorithm, problem: &RootProblem<'_>, cfg: CommonCfg) -> ConvergenceResult {
    let RootProblem { f, df, d2f, g, a, b, x0, step } = *problem;

    match algorithm {
        Algorithm::Bracket(BracketFamily::Bisection)     => bisection(f, a, b, cfg),
        Algorithm::Bracket(BracketFamily::FalsePosition) => false_position(f, a, b, cfg),
        Algorithm::Bracket(BracketFamily::IncrementalSearch) => match step {
            Some(dx) => incremental_search(f, a, dx, cfg),
            None     => missing(algorithm, "step"),
        },
        Algorithm::Open(OpenFamily::FixedPoint) => match g {
            Some(g) => match FixedPointCfg::from(cfg).set_interval(a, b) {
                Ok(fp_cfg) => fixed_point(f, g, x0, fp_cfg),
                Err(_)     => ConvergenceResult::rejected(algorithm, RootFailure::InvalidBounds { a, b }),
            },
            None => missing(algorithm, "g"),
        },
        Algorithm::Open(OpenFamily::Newton) => match df {
            Some(df) => newton(f, df, x0, cfg),
            None     => missing(algorithm, "df"),
        },
        Algorithm::Open(OpenFamily::Secant) => secant(f, a, b, cfg),
        Algorithm::Open(OpenFamily::MultipleRoots) => match (df, d2f) {
            (Some(df), Some(d2f)) => multiple_roots(f, df, d2f, x0, cfg),
            (None, _)             => missing(algorithm, "df"),
            (_, None)             => missing(algorithm, "d2f"),
        },
    }
}


/// Results of [`compare`], in [`Algorithm::COMPARED`] order.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub entries: Vec<ConvergenceResult>,
}

impl Comparison {
    /// Successful method with the fewest iterations; ties keep report order.
    pub fn best(&self) -> Option<&ConvergenceResult> {
        self.entries
            .iter()
            .filter(|r| r.is_success())
            .min_by_key(|r| r.iterations)
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&ConvergenceResult> {
        self.entries.iter().find(|r| r.algorithm == algorithm)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConvergenceResult> {
        self.entries.iter()
    }
}


/// Runs every method of [`Algorithm::COMPARED`] sequentially on `problem`
/// with the same configuration.
pub fn compare(problem: &RootProblem<'_>, cfg: CommonCfg) -> Comparison {
    let entries: Vec<_> = Algorithm::COMPARED
        .iter()
        .map(|&algorithm| run(algorithm, problem, cfg))
        .collect();

    debug!(
        succeeded = entries.iter().filter(|r| r.is_success()).count(),
        total = entries.len(),
        "root finding comparison finished"
    );
    Comparison { entries }
}
