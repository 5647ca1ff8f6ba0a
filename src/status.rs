//! Terminal status of an iterative method.

/// Outcome tag carried by every convergence result.
///
/// `F` is the family-specific failure type; its `Display` text is the
/// human-readable failure reason.
#[derive(Debug, Clone, PartialEq)]
pub enum Status<F> {
    Success,
    Failure(F),
}

impl<F> Status<F> {
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }

    pub fn failure(&self) -> Option<&F> {
        match self {
            Status::Success    => None,
            Status::Failure(f) => Some(f),
        }
    }
}

impl<F: std::fmt::Display> Status<F> {
    /// Failure message, `None` on success.
    pub fn reason(&self) -> Option<String> {
        self.failure().map(ToString::to_string)
    }
}
