//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Interpolation algorithm variants.
/// - [`Algorithm::Vandermonde`]  power-basis coefficients from the Vandermonde system
/// - [`Algorithm::Lagrange`]     Lagrange basis form
/// - [`Algorithm::Newton`]       Newton divided-difference form
/// - [`Algorithm::LinearSpline`] piecewise linear, C⁰
/// - [`Algorithm::CubicSpline`]  natural cubic spline, C²
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Vandermonde,
    Lagrange,
    Newton,
    LinearSpline,
    CubicSpline,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Vandermonde,
        Algorithm::Lagrange,
        Algorithm::Newton,
        Algorithm::LinearSpline,
        Algorithm::CubicSpline,
    ];

    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Vandermonde  => "vandermonde",
            Algorithm::Lagrange     => "lagrange",
            Algorithm::Newton       => "newton",
            Algorithm::LinearSpline => "linear_spline",
            Algorithm::CubicSpline  => "cubic_spline",
        }
    }

    /// Fewest points the method accepts.
    pub fn min_points(self) -> usize {
        match self {
            Algorithm::CubicSpline => 4,
            _                      => 2,
        }
    }

    pub fn is_piecewise(self) -> bool {
        matches!(self, Algorithm::LinearSpline | Algorithm::CubicSpline)
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
