//! Linear-system algorithm definitions.

/// Stationary iterative methods built on the splitting `A = D - L - U`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Jacobi,
    GaussSeidel,
    Sor,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Jacobi, Algorithm::GaussSeidel, Algorithm::Sor];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Jacobi      => "jacobi",
            Algorithm::GaussSeidel => "gauss_seidel",
            Algorithm::Sor         => "sor",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
