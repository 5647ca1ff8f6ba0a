//! Append-only iteration tables.
//!
//! Rows are stored by value in insertion (iteration) order; a row never
//! aliases the live iteration state that produced it.

/// One step of a scalar method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarRow {
    pub iteration: usize,
    /// Iterate `xₙ`.
    pub x: f64,
    /// `f(xₙ)`.
    pub fx: f64,
    /// Error against the previous iterate; `None` on the starting row.
    pub error: Option<f64>,
    /// Bracket `[a, b]` the iterate was taken from (bracketing methods only).
    pub bracket: Option<(f64, f64)>,
}

/// One sweep of a vector method.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorRow {
    pub iteration: usize,
    pub x: Vec<f64>,
    /// Norm of the step against the previous sweep; `None` on the starting row.
    pub error: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table<R> {
    rows: Vec<R>,
}

/// Table shared by all scalar root finders.
pub type ConvergenceTable = Table<ScalarRow>;

impl<R> Table<R> {
    #[must_use]
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, row: R) {
        self.rows.push(row);
    }

    /// Rows in iteration order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn last(&self) -> Option<&R> {
        self.rows.last()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
