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
//! Homogeneous rigid transform
use nalgebra as na;
use na::{
    Isometry3, Matrix3, Matrix4, RealField, Rotation3, Translation3, UnitQuaternion, Vector3,
};
use std::fmt::{self, Display};
use std::ops::Mul;

/// 4x4 element of SE(3): `[[R, t], [0, 0, 0, 1]]`
///
/// The pose of a frame relative to its parent (one joint), or relative to the
/// base of the chain (a link frame).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Se3Transform<T: RealField>(Matrix4<T>);

impl<T> Se3Transform<T>
where
    T: RealField + Copy,
{
    pub fn identity() -> Self {
        Se3Transform(Matrix4::identity())
    }
    /// Create from rotation block and translation
    pub fn from_parts(rotation: Matrix3<T>, translation: Vector3<T>) -> Self {
        let mut matrix = Matrix4::identity();
        matrix.fixed_view_mut::<3, 3>(0, 0).copy_from(&rotation);
        matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(&translation);
        Se3Transform(matrix)
    }
    /// Wrap a matrix without checking it is rigid
    pub fn from_matrix_unchecked(matrix: Matrix4<T>) -> Self {
        Se3Transform(matrix)
    }
    #[inline]
    pub fn matrix(&self) -> &Matrix4<T> {
        &self.0
    }
    #[inline]
    pub fn rotation(&self) -> Matrix3<T> {
        self.0.fixed_view::<3, 3>(0, 0).into_owned()
    }
    #[inline]
    pub fn translation(&self) -> Vector3<T> {
        self.0.fixed_view::<3, 1>(0, 3).into_owned()
    }
    /// Inverse transform `[[Rᵀ, -Rᵀt], [0, 0, 0, 1]]`
    ///
    /// # Examples
    ///
    /// ```
    /// use screw_fk::{ScrewAxis, Vector3};
    ///
    /// let s = ScrewAxis::new(Vector3::new(0.1, 0.2, 0.3), Vector3::new(1.0, 0.0, -1.0));
    /// let t = screw_fk::exponential_map(&s.generator()).unwrap();
    /// let i = t * t.inverse();
    /// assert!((i.matrix() - screw_fk::Matrix4::identity()).norm() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Self {
        let rotation_t = self.rotation().transpose();
        let translation = -(rotation_t * self.translation());
        Self::from_parts(rotation_t, translation)
    }
    /// Convert to nalgebra `Isometry3`
    ///
    /// The rotation block is assumed to be a proper rotation.
    pub fn to_isometry(&self) -> Isometry3<T> {
        let rotation = Rotation3::from_matrix_unchecked(self.rotation());
        Isometry3::from_parts(
            Translation3::from(self.translation()),
            UnitQuaternion::from_rotation_matrix(&rotation),
        )
    }
    /// Check the rotation block is orthonormal with determinant +1 and the
    /// bottom row is `[0, 0, 0, 1]`, within `tolerance`
    pub fn is_rigid(&self, tolerance: T) -> bool {
        let rotation = self.rotation();
        let orthonormal = (rotation.transpose() * rotation - Matrix3::identity())
            .iter()
            .all(|e| e.abs() <= tolerance);
        let proper = (rotation.determinant() - T::one()).abs() <= tolerance;
        let bottom = (0..3).all(|c| self.0[(3, c)].abs() <= tolerance)
            && (self.0[(3, 3)] - T::one()).abs() <= tolerance;
        orthonormal && proper && bottom
    }
}

impl<T> Default for Se3Transform<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Mul for Se3Transform<T>
where
    T: RealField + Copy,
{
    type Output = Se3Transform<T>;

    fn mul(self, rhs: Se3Transform<T>) -> Self::Output {
        Se3Transform(self.0 * rhs.0)
    }
}

impl<'a, T> Mul<&'a Se3Transform<T>> for &'a Se3Transform<T>
where
    T: RealField + Copy,
{
    type Output = Se3Transform<T>;

    fn mul(self, rhs: &'a Se3Transform<T>) -> Self::Output {
        Se3Transform(self.0 * rhs.0)
    }
}

impl<T> From<Isometry3<T>> for Se3Transform<T>
where
    T: RealField + Copy,
{
    fn from(isometry: Isometry3<T>) -> Self {
        Se3Transform(isometry.to_homogeneous())
    }
}

impl<T> Display for Se3Transform<T>
where
    T: RealField + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_isometry())
    }
}
