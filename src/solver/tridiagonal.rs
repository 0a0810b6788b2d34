//! Thomas algorithm in normalized form
//!
//! # Mathematical Background
//!
//! The implicit schemes lead, at every time step, to a tridiagonal system
//!
//! ```text
//! x_0                                   = d_0          (left face)
//! -a·x_{i-1} + b·x_i - a·x_{i+1}        = d_i          1 ≤ i ≤ N-2
//!                               x_{N-1} = d_{N-1}      (right face)
//! ```
//!
//! Forward elimination turns it into a unit upper-bidiagonal system
//! `x_i + c'_i·x_{i+1} = d'_i` with
//!
//! ```text
//! c'_i = -a / (b + a·c'_{i-1})
//! d'_i = (d_i + a·d'_{i-1}) / (b + a·c'_{i-1})
//! ```
//!
//! `c'` depends only on `a` and `b`, so it is computed once per solve; `d'`
//! is recomputed every step from the previous row. Both recurrences read the
//! entry just before, so they run as one sequential forward pass.
//!
//! Back substitution is then shared by every implicit scheme:
//!
//! ```text
//! x_{N-1} = d'_{N-1}
//! x_i     = d'_i - c'_i·x_{i+1}       i = N-2 … 0
//! ```

use nalgebra::DVector;

/// Eliminated coefficient matrix and right-hand side of one implicit solve
///
/// The matrix is stored by its superdiagonal only: after elimination the
/// diagonal is all ones and the subdiagonal all zeros. Boundary rows are the
/// identity, so `superdiagonal[0]` and `superdiagonal[N-1]` are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem {
    superdiagonal: DVector<f64>,
    rhs: DVector<f64>,
}

impl TridiagonalSystem {
    /// Zeroed system of `points` unknowns
    pub fn new(points: usize) -> Self {
        Self {
            superdiagonal: DVector::zeros(points),
            rhs: DVector::zeros(points),
        }
    }

    /// System from an already eliminated superdiagonal and right-hand side
    ///
    /// # Panics
    ///
    /// Panics when the two vectors differ in length.
    pub fn from_parts(superdiagonal: DVector<f64>, rhs: DVector<f64>) -> Self {
        assert_eq!(
            superdiagonal.len(),
            rhs.len(),
            "superdiagonal and right-hand side must have the same length"
        );
        Self { superdiagonal, rhs }
    }

    /// Number of unknowns
    pub fn points(&self) -> usize {
        self.rhs.len()
    }

    /// `c'`: entry `i` is the coefficient at `(i, i+1)`
    pub fn superdiagonal(&self) -> &DVector<f64> {
        &self.superdiagonal
    }

    /// `d'`
    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    /// Forward elimination of the matrix with constant interior coefficients
    ///
    /// `off` is `a` (the magnitude of the off-diagonal terms) and `diagonal`
    /// is `b`, both as in the module documentation.
    pub fn eliminate_coefficients(&mut self, off: f64, diagonal: f64) {
        let n = self.points();
        if n == 0 {
            return;
        }
        self.superdiagonal[0] = 0.0;
        for i in 1..n.saturating_sub(1) {
            self.superdiagonal[i] = -off / (diagonal + off * self.superdiagonal[i - 1]);
        }
        if n > 1 {
            self.superdiagonal[n - 1] = 0.0;
        }
    }

    /// Forward elimination of the right-hand side
    ///
    /// `first` and `last` are the face values; `source(i)` yields the
    /// un-eliminated `d_i` of interior row `i`. Must run after
    /// [`eliminate_coefficients`](Self::eliminate_coefficients) with the same
    /// `off` and `diagonal`.
    pub fn eliminate_rhs<F>(&mut self, off: f64, diagonal: f64, first: f64, last: f64, source: F)
    where
        F: Fn(usize) -> f64,
    {
        let n = self.points();
        if n == 0 {
            return;
        }
        self.rhs[0] = first;
        for i in 1..n.saturating_sub(1) {
            self.rhs[i] = (source(i) + off * self.rhs[i - 1])
                / (diagonal + off * self.superdiagonal[i - 1]);
        }
        if n > 1 {
            self.rhs[n - 1] = last;
        }
    }

    /// Solve the eliminated system by back substitution
    ///
    /// # Example
    ///
    /// ```rust
    /// use heat_rs::solver::tridiagonal::TridiagonalSystem;
    /// use nalgebra::DVector;
    ///
    /// // x0 + 0.5·x1 = 2,  x1 = 2   →   x = [1, 2]
    /// let system = TridiagonalSystem::from_parts(
    ///     DVector::from_vec(vec![0.5, 0.0]),
    ///     DVector::from_vec(vec![2.0, 2.0]),
    /// );
    /// assert_eq!(system.back_substitute().as_slice(), &[1.0, 2.0]);
    /// ```
    pub fn back_substitute(&self) -> DVector<f64> {
        back_substitute(&self.superdiagonal, &self.rhs)
    }
}

/// Back substitution on a unit upper-bidiagonal system
///
/// `x[N-1] = rhs[N-1]`, then `x[i] = rhs[i] - x[i+1]·superdiagonal[i]`.
///
/// # Panics
///
/// Panics when the two vectors differ in length.
pub fn back_substitute(superdiagonal: &DVector<f64>, rhs: &DVector<f64>) -> DVector<f64> {
    let n = rhs.len();
    assert_eq!(superdiagonal.len(), n, "superdiagonal and right-hand side must have the same length");

    let mut x = DVector::zeros(n);
    if n == 0 {
        return x;
    }
    x[n - 1] = rhs[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = rhs[i] - x[i + 1] * superdiagonal[i];
    }
    x
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Residual of the original (un-eliminated) system
    fn residual(a: f64, b: f64, d: &[f64], x: &DVector<f64>) -> f64 {
        let n = d.len();
        let mut worst: f64 = (x[0] - d[0]).abs().max((x[n - 1] - d[n - 1]).abs());
        for i in 1..n - 1 {
            let lhs = -a * x[i - 1] + b * x[i] - a * x[i + 1];
            worst = worst.max((lhs - d[i]).abs());
        }
        worst
    }

    #[test]
    fn test_back_substitution_hand_computed() {
        // Upper-bidiagonal system with solution x = [1, 2, 3, 4]:
        //   x0 - 0.5 x1 = 0
        //   x1 + 0.25 x2 = 2.75
        //   x2 - 1.0 x3 = -1
        //   x3 = 4
        let superdiagonal = DVector::from_vec(vec![-0.5, 0.25, -1.0, 0.0]);
        let rhs = DVector::from_vec(vec![0.0, 2.75, -1.0, 4.0]);
        let x = back_substitute(&superdiagonal, &rhs);

        for (i, expected) in [1.0, 2.0, 3.0, 4.0].iter().enumerate() {
            assert!((x[i] - expected).abs() < 1e-12, "x[{i}] = {}, expected {expected}", x[i]);
        }
    }

    #[test]
    fn test_identity_system() {
        let system = TridiagonalSystem::from_parts(
            DVector::zeros(5),
            DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        );
        assert_eq!(system.back_substitute().as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_empty_system() {
        let system = TridiagonalSystem::new(0);
        assert_eq!(system.back_substitute().len(), 0);
    }

    #[test]
    fn test_boundary_coefficients_are_zero() {
        let mut system = TridiagonalSystem::new(6);
        system.eliminate_coefficients(0.7, 2.4);
        assert_eq!(system.superdiagonal()[0], 0.0);
        assert_eq!(system.superdiagonal()[5], 0.0);
        assert!((system.superdiagonal()[1] + 0.7 / 2.4).abs() < 1e-15);
    }

    #[test]
    fn test_eliminate_then_solve_laplacian_pattern() {
        // -a x_{i-1} + (1 + 2a) x_i - a x_{i+1} = d_i with fixed faces
        let a = 0.4;
        let b = 1.0 + 2.0 * a;
        let d = vec![10.0, 1.0, -2.0, 3.5, 0.0, 7.0, 20.0];

        let mut system = TridiagonalSystem::new(d.len());
        system.eliminate_coefficients(a, b);
        system.eliminate_rhs(a, b, d[0], d[d.len() - 1], |i| d[i]);
        let x = system.back_substitute();

        assert!(residual(a, b, &d, &x) < 1e-12);
        assert_eq!(x[0], 10.0);
        assert_eq!(x[6], 20.0);
    }

    #[test]
    fn test_uniform_field_is_steady() {
        // With d_i equal to the face values the uniform field solves the system
        let a = 3.0;
        let b = 1.0 + 2.0 * a;
        let mut system = TridiagonalSystem::new(9);
        system.eliminate_coefficients(a, b);
        system.eliminate_rhs(a, b, 42.0, 42.0, |_| 42.0);
        let x = system.back_substitute();
        assert!(x.iter().all(|&v| (v - 42.0).abs() < 1e-10));
    }

    #[test]
    fn test_two_point_system() {
        let mut system = TridiagonalSystem::new(2);
        system.eliminate_coefficients(1.0, 3.0);
        system.eliminate_rhs(1.0, 3.0, 5.0, 6.0, |_| unreachable!());
        assert_eq!(system.back_substitute().as_slice(), &[5.0, 6.0]);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_from_parts_length_mismatch() {
        TridiagonalSystem::from_parts(DVector::zeros(3), DVector::zeros(2));
    }
}
