// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Event;

/// Column‑major 3×3 matrix acting on `(x, y, ct)` column vectors.
///
/// - `M · e` maps an event expressed in one frame to another frame.
/// - Composition follows `self * rhs` (apply `rhs` first).
/// - Lorentz boosts are symmetric, so the row-vector convention `e · Mᵀ`
///   used by some renderers produces the same result.
///
/// # Examples
/// ```
/// use lumen_core::math::{Event, Mat3};
/// let s = Mat3::from_rows([[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 1.0]]);
/// let e = Event::new(1.0, 1.0, 5.0);
/// assert_eq!(s.transform_event(&e).to_array(), [2.0, 3.0, 5.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    data: [f64; 9],
}

impl Mat3 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, // col 1
                0.0, 0.0, 1.0, // col 2
            ],
        }
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f64; 9]) -> Self {
        Self { data }
    }

    /// Creates a matrix from rows, the way the math is usually written down.
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self {
            data: [
                rows[0][0], rows[1][0], rows[2][0], // col 0
                rows[0][1], rows[1][1], rows[2][1], // col 1
                rows[0][2], rows[1][2], rows[2][2], // col 2
            ],
        }
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [f64; 9] {
        self.data
    }

    /// Returns the matrix as rows.
    pub fn to_rows(self) -> [[f64; 3]; 3] {
        let mut rows = [[0.0; 3]; 3];
        for (row, out) in rows.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = self.at(row, col);
            }
        }
        rows
    }

    /// Element at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.data[col * 3 + row]
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[row * 3 + col] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 3 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Applies the matrix to one event.
    pub fn transform_event(&self, event: &Event) -> Event {
        let x = event.component(0);
        let y = event.component(1);
        let z = event.component(2);

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z;

        Event::new(nx, ny, nz)
    }

    /// Returns `true` when every element is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f64; 9]> for Mat3 {
    fn from(value: [f64; 9]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<&Mat3> for Mat3 {
    type Output = Self;
    fn mul(self, rhs: &Mat3) -> Self::Output {
        self.multiply(rhs)
    }
}

impl core::ops::MulAssign for Mat3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Mat3> for Mat3 {
    fn mul_assign(&mut self, rhs: &Mat3) {
        *self = self.multiply(rhs);
    }
}
