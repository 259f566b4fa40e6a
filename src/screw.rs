/*
  Copyright 2026 The screw-fk Authors

  Licensed under the Apache License, Version 2.0 (the "License");
  you may not use this file except in compliance with the License.
  You may obtain a copy of the License at

      http://www.apache.org/licenses/LICENSE-2.0

  Unless required by applicable law or agreed to in writing, software
  distributed under the License is distributed on an "AS IS" BASIS,
  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
  See the License for the specific language governing permissions and
  limitations under the License.
*/
//! Screw axes and their se(3) generators
use crate::errors::*;
use crate::exponential::PURE_TRANSLATION_EPSILON;
use crate::math::{magnitude, skew};
use nalgebra as na;
use na::{Matrix4, RealField, Vector3};
use simba::scalar::SupersetOf;
use std::fmt::{self, Display};

/// Absolute tolerance used to check the structure of a `Se3Generator`
pub const GENERATOR_TOLERANCE: f64 = 1e-9;

/// Motion generator of one joint: angular component `w` and linear component `q`
///
/// The axis is not normalized. The magnitude of `w` is the rotation angle
/// which is applied when the generator is exponentiated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrewAxis<T: RealField> {
    angular: Vector3<T>,
    linear: Vector3<T>,
}

impl<T> ScrewAxis<T>
where
    T: RealField + Copy,
{
    /// Create screw axis from angular (`w`) and linear (`q`) components
    ///
    /// # Examples
    ///
    /// ```
    /// use screw_fk::{ScrewAxis, Vector3};
    ///
    /// let s = ScrewAxis::new(Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, 3.0));
    /// assert_eq!(s.angular().z, 1.0);
    /// assert_eq!(s.linear().z, 3.0);
    /// ```
    pub fn new(angular: Vector3<T>, linear: Vector3<T>) -> Self {
        Self { angular, linear }
    }
    /// Screw axis without rotation, it translates by `translation`
    pub fn pure_translation(translation: Vector3<T>) -> Self {
        Self::new(Vector3::zeros(), translation)
    }
    /// Rotation around the line which passes `point` with the direction of `axis`
    ///
    /// The linear component becomes `-axis × point`.
    ///
    /// # Examples
    ///
    /// ```
    /// use screw_fk::{ScrewAxis, Vector3};
    ///
    /// let s = ScrewAxis::revolute(Vector3::new(0.0, 0.0, 1.0), Vector3::new(1.0, 0.0, 0.0));
    /// assert_eq!(s.linear(), &Vector3::new(0.0, -1.0, 0.0));
    /// ```
    pub fn revolute(axis: Vector3<T>, point: Vector3<T>) -> Self {
        Self::new(axis, -axis.cross(&point))
    }
    #[inline]
    pub fn angular(&self) -> &Vector3<T> {
        &self.angular
    }
    #[inline]
    pub fn linear(&self) -> &Vector3<T> {
        &self.linear
    }
    /// True if the angular magnitude is at or below `PURE_TRANSLATION_EPSILON`,
    /// the exponential of such an axis has no rotation
    #[inline]
    pub fn is_pure_translation(&self) -> bool {
        magnitude(&self.angular) <= na::convert(PURE_TRANSLATION_EPSILON)
    }
    /// Multiply both components by `position`
    ///
    /// Used to apply a joint position to a unit screw axis.
    pub fn scaled(&self, position: T) -> Self {
        Self::new(self.angular * position, self.linear * position)
    }
    /// Convert the scalar type, e.g. `f64` configuration into `f32` axis
    pub fn cast<U>(&self) -> ScrewAxis<U>
    where
        U: RealField + Copy + SupersetOf<T>,
    {
        ScrewAxis::new(self.angular.cast::<U>(), self.linear.cast::<U>())
    }
    /// Build the se(3) generator of this axis
    pub fn generator(&self) -> Se3Generator<T> {
        build_generator(&self.angular, &self.linear)
    }
}

fn fmt_vector<T: RealField>(v: &Vector3<T>, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "({}, {}, {})", v[0], v[1], v[2])
}

impl<T> Display for ScrewAxis<T>
where
    T: RealField + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_pure_translation() {
            write!(f, "[↕ v=")?;
        } else {
            write!(f, "[⚙ ω=")?;
            fmt_vector(&self.angular, f)?;
            write!(f, " v=")?;
        }
        fmt_vector(&self.linear, f)?;
        write!(f, "]")
    }
}

/// 4x4 element of se(3): `[[skew(w), q], [0, 0, 0, 0]]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Se3Generator<T: RealField>(Matrix4<T>);

impl<T> Se3Generator<T>
where
    T: RealField + Copy,
{
    /// Wrap a hand-built matrix without any check
    ///
    /// `exponential_map` validates it before use.
    pub fn from_matrix(matrix: Matrix4<T>) -> Self {
        Se3Generator(matrix)
    }
    #[inline]
    pub fn matrix(&self) -> &Matrix4<T> {
        &self.0
    }
    /// Angular component read from the skew-symmetric block
    pub fn angular(&self) -> Vector3<T> {
        Vector3::new(self.0[(2, 1)], self.0[(0, 2)], self.0[(1, 0)])
    }
    /// Linear component, the last column of the top three rows
    pub fn linear(&self) -> Vector3<T> {
        self.0.fixed_view::<3, 1>(0, 3).into_owned()
    }
    /// Check that the matrix is finite, the top-left block is skew-symmetric and
    /// the bottom row is zero (within `GENERATOR_TOLERANCE`)
    ///
    /// # Examples
    ///
    /// ```
    /// use screw_fk::{Matrix4, Se3Generator};
    ///
    /// let mut m = Matrix4::<f64>::zeros();
    /// m[(0, 1)] = -1.0;
    /// m[(1, 0)] = 1.0;
    /// assert!(Se3Generator::from_matrix(m).validate().is_ok());
    /// m[(3, 3)] = 1.0;
    /// assert!(Se3Generator::from_matrix(m).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let m = &self.0;
        for r in 0..4 {
            for c in 0..4 {
                if !m[(r, c)].is_finite() {
                    return Err(Error::invalid_generator(format!(
                        "entry ({r}, {c}) is not finite"
                    )));
                }
            }
        }
        let tolerance: T = na::convert(GENERATOR_TOLERANCE);
        for i in 0..3 {
            if m[(i, i)].abs() > tolerance {
                return Err(Error::invalid_generator(format!(
                    "diagonal entry ({i}, {i}) of the rotational block is not zero"
                )));
            }
            for j in (i + 1)..3 {
                if (m[(i, j)] + m[(j, i)]).abs() > tolerance {
                    return Err(Error::invalid_generator(format!(
                        "rotational block is not skew-symmetric at ({i}, {j})"
                    )));
                }
            }
        }
        for c in 0..4 {
            if m[(3, c)].abs() > tolerance {
                return Err(Error::invalid_generator(format!(
                    "bottom row is not zero at column {c}"
                )));
            }
        }
        Ok(())
    }
}

/// Build the se(3) generator from angular component `w` and linear component `q`
///
/// No normalization is done.
///
/// # Examples
///
/// ```
/// use screw_fk::{build_generator, Vector3};
///
/// let g = build_generator(&Vector3::new(1.0, 2.0, 3.0), &Vector3::new(4.0, 5.0, 6.0));
/// let m = g.matrix();
/// assert_eq!(m[(0, 1)], -3.0);
/// assert_eq!(m[(0, 2)], 2.0);
/// assert_eq!(m[(1, 2)], -1.0);
/// assert_eq!(m[(2, 3)], 6.0);
/// assert_eq!(m.row(3).sum(), 0.0);
/// ```
pub fn build_generator<T>(w: &Vector3<T>, q: &Vector3<T>) -> Se3Generator<T>
where
    T: RealField + Copy,
{
    let mut matrix = Matrix4::zeros();
    matrix.fixed_view_mut::<3, 3>(0, 0).copy_from(&skew(w));
    matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(q);
    Se3Generator(matrix)
}
