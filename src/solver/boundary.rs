//! Initial and boundary conditions of the slab
//!
//! # Design
//!
//! The problem has a single kind of condition: both faces are held at the
//! surface temperature (Dirichlet) and the interior starts uniform. Every
//! engine builds row 0 from here and pins the two boundary columns of every
//! later row through [`SlabBoundaries::pin`].

use nalgebra::DVector;
use std::fmt;

/// Dirichlet conditions on both faces plus a uniform initial interior
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlabBoundaries {
    internal_temperature: f64,
    surface_temperature: f64,
    points: usize,
}

impl SlabBoundaries {
    /// Conditions for a row of `points` space points
    pub fn new(internal_temperature: f64, surface_temperature: f64, points: usize) -> Self {
        Self {
            internal_temperature,
            surface_temperature,
            points,
        }
    }

    pub fn internal_temperature(&self) -> f64 {
        self.internal_temperature
    }

    pub fn surface_temperature(&self) -> f64 {
        self.surface_temperature
    }

    pub fn points(&self) -> usize {
        self.points
    }

    /// Whether `space_index` is one of the two faces
    pub fn is_boundary(&self, space_index: usize) -> bool {
        space_index == 0 || space_index + 1 == self.points
    }

    /// Row at t = 0: interior at the internal temperature, faces at the surface one
    ///
    /// # Example
    ///
    /// ```rust
    /// use heat_rs::solver::SlabBoundaries;
    ///
    /// let row = SlabBoundaries::new(38.0, 149.0, 4).initial_row();
    /// assert_eq!(row.as_slice(), &[149.0, 38.0, 38.0, 149.0]);
    /// ```
    pub fn initial_row(&self) -> DVector<f64> {
        let mut row = DVector::from_element(self.points, self.internal_temperature);
        self.pin(&mut row);
        row
    }

    /// Force both boundary columns of `row` to the surface temperature
    pub fn pin(&self, row: &mut DVector<f64>) {
        let n = row.len();
        if n > 0 {
            row[0] = self.surface_temperature;
            row[n - 1] = self.surface_temperature;
        }
    }
}

impl fmt::Display for SlabBoundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T(x, 0) = {} inside, T(0, t) = T(L, t) = {} ({} points)",
            self.internal_temperature, self.surface_temperature, self.points
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_row_reference_scenario() {
        let boundaries = SlabBoundaries::new(38.0, 149.0, 621);
        let row = boundaries.initial_row();

        assert_eq!(row.len(), 621);
        assert_eq!(row[0], 149.0);
        assert_eq!(row[620], 149.0);
        assert!(row.iter().skip(1).take(619).all(|&t| t == 38.0));
    }

    #[test]
    fn test_two_point_row_is_all_boundary() {
        let boundaries = SlabBoundaries::new(0.0, 1.0, 2);
        assert_eq!(boundaries.initial_row().as_slice(), &[1.0, 1.0]);
        assert!(boundaries.is_boundary(0));
        assert!(boundaries.is_boundary(1));
    }

    #[test]
    fn test_pin_overwrites_faces_only() {
        let boundaries = SlabBoundaries::new(0.0, 5.0, 4);
        let mut row = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        boundaries.pin(&mut row);
        assert_eq!(row.as_slice(), &[5.0, 2.0, 3.0, 5.0]);
    }

    #[test]
    fn test_is_boundary() {
        let boundaries = SlabBoundaries::new(0.0, 5.0, 4);
        assert!(boundaries.is_boundary(0));
        assert!(!boundaries.is_boundary(1));
        assert!(!boundaries.is_boundary(2));
        assert!(boundaries.is_boundary(3));
    }

    #[test]
    fn test_display() {
        let text = SlabBoundaries::new(38.0, 149.0, 3).to_string();
        assert!(text.contains("38"));
        assert!(text.contains("149"));
    }
}
