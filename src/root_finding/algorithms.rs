//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, the closed set of supported methods,
//! used for result tagging and for dispatch in [`super::comparison`].


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] methods keep a sign-changing interval `[a, b]`
/// - [`Algorithm::Open`]    methods iterate from one or two seeds
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    IncrementalSearch,
    Bisection,
    FalsePosition,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    FixedPoint,
    Newton,
    Secant,
    MultipleRoots,
}

impl Algorithm {
    /// Methods run by [`super::comparison::compare`], in report order.
    ///
    /// Incremental search only locates a bracket, so it is not compared.
    pub const COMPARED: [Algorithm; 6] = [
        Algorithm::Bracket(BracketFamily::Bisection),
        Algorithm::Bracket(BracketFamily::FalsePosition),
        Algorithm::Open(OpenFamily::FixedPoint),
        Algorithm::Open(OpenFamily::MultipleRoots),
        Algorithm::Open(OpenFamily::Secant),
        Algorithm::Open(OpenFamily::Newton),
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::IncrementalSearch) => "incremental_search",
            Algorithm::Bracket(BracketFamily::Bisection)         => "bisection",
            Algorithm::Bracket(BracketFamily::FalsePosition)     => "false_position",
            Algorithm::Open(OpenFamily::FixedPoint)              => "fixed_point",
            Algorithm::Open(OpenFamily::Newton)                  => "newton",
            Algorithm::Open(OpenFamily::Secant)                  => "secant",
            Algorithm::Open(OpenFamily::MultipleRoots)           => "multiple_roots",
        }
    }

    pub const fn is_bracketing(self) -> bool {
        matches!(self, Algorithm::Bracket(..))
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
