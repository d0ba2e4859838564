use super::Matrix;

/// Eigenvalues of a 2x2 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Eigenvalues {
    /// Two real eigenvalues, larger first.
    Real([f64; 2]),
    /// The conjugate pair `re ± im·i`, with `im > 0`.
    Complex { re: f64, im: f64 },
}

impl Eigenvalues {
    pub fn is_real(&self) -> bool {
        matches!(self, Eigenvalues::Real(_))
    }

    pub fn real(&self) -> Option<[f64; 2]> {
        match self {
            Eigenvalues::Real(values) => Some(*values),
            Eigenvalues::Complex { .. } => None,
        }
    }
}

impl Matrix {
    /// Closed-form eigenvalues `(tr ± sqrt(tr² - 4·det)) / 2`.
    ///
    /// Only defined for 2x2 matrices; any other shape returns `None`.
    /// See: http://en.wikipedia.org/wiki/Eigenvalue_algorithm#Direct_calculation
    pub fn eigenvalues(&self) -> Option<Eigenvalues> {
        if self.shape() != (2, 2) {
            return None;
        }

        let trace = self.trace();
        let det = self.determinant().ok()?;
        let discriminant = trace * trace - 4.0 * det;

        if discriminant < 0.0 {
            Some(Eigenvalues::Complex {
                re: trace / 2.0,
                im: (-discriminant).sqrt() / 2.0,
            })
        } else {
            let root = discriminant.sqrt();
            Some(Eigenvalues::Real([(trace + root) / 2.0, (trace - root) / 2.0]))
        }
    }
}
