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
//! Exponential map from se(3) to SE(3)
use crate::errors::*;
use crate::math::{magnitude, skew, ExpCoefficients};
use crate::screw::Se3Generator;
use crate::transform::Se3Transform;
use nalgebra as na;
use na::{Matrix3, RealField};

/// Angular magnitude at or below which a generator is treated as pure translation
pub const PURE_TRANSLATION_EPSILON: f64 = 1e-10;

/// Calculate the exponential of the se(3) generator in closed form
///
/// With `θ = |w|` and the unit skew matrix `Ω̂ = skew(w) / θ`, the rotation is
/// given by Rodrigues' formula `I + sin θ Ω̂ + (1 - cos θ) Ω̂²` and the
/// translation by `(I + (1 - cos θ)/θ Ω̂ + (θ - sin θ)/θ Ω̂²) q`.
/// Small angles use the series expansion of the coefficients, and angles
/// at or below `PURE_TRANSLATION_EPSILON` give identity rotation and
/// translation `q`.
///
/// It returns `Error::InvalidGeneratorError` if the matrix is not an se(3)
/// element, or if `θ` itself is not representable.
///
/// # Examples
///
/// ```
/// use screw_fk::{build_generator, exponential_map, Vector3};
///
/// let g = build_generator(&Vector3::new(0.0, 0.0, 0.0), &Vector3::new(0.0, 0.0, 3.0));
/// let t = exponential_map(&g).unwrap();
/// assert_eq!(t.translation(), Vector3::new(0.0, 0.0, 3.0));
/// assert_eq!(t.rotation(), screw_fk::Matrix3::identity());
/// ```
pub fn exponential_map<T>(generator: &Se3Generator<T>) -> Result<Se3Transform<T>>
where
    T: RealField + Copy,
{
    generator.validate()?;
    let w = generator.angular();
    let q = generator.linear();
    let theta = magnitude(&w);
    if theta <= na::convert(PURE_TRANSLATION_EPSILON) {
        return Ok(Se3Transform::from_parts(Matrix3::identity(), q));
    }
    if !theta.is_finite() {
        return Err(Error::invalid_generator(
            "magnitude of the angular component overflows",
        ));
    }
    let omega = skew(&(w / theta));
    let omega2 = omega * omega;
    let k = ExpCoefficients::new(theta);
    let rotation = Matrix3::identity() + omega * k.a + omega2 * k.b;
    let translation = (Matrix3::identity() + omega * k.c + omega2 * k.d) * q;
    Ok(Se3Transform::from_parts(rotation, translation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screw::build_generator;
    use na::{Matrix4, Vector3};

    #[test]
    fn test_identity_joint() {
        let g = build_generator(&Vector3::<f64>::zeros(), &Vector3::zeros());
        let t = exponential_map(&g).unwrap();
        assert_eq!(*t.matrix(), Matrix4::identity());
    }

    #[test]
    fn test_pure_rotation() {
        for &theta in &[1.0f64, 0.3, 2.5, -1.2] {
            let g = build_generator(&Vector3::new(0.0, 0.0, theta), &Vector3::zeros());
            let t = exponential_map(&g).unwrap();
            let (s, c) = theta.sin_cos();
            let expected = Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0);
            assert!((t.rotation() - expected).norm() < 1e-12);
            assert_eq!(t.translation(), Vector3::zeros());
        }
    }

    #[test]
    fn test_invalid_generator() {
        let mut m = Matrix4::<f64>::zeros();
        m[(3, 0)] = 1.0;
        let err = exponential_map(&Se3Generator::from_matrix(m)).unwrap_err();
        assert!(matches!(err, Error::InvalidGeneratorError { .. }));
    }

    #[test]
    fn test_f32() {
        let g = build_generator(
            &Vector3::new(0.0f32, 1.0, 0.0),
            &Vector3::new(1.0f32, 0.0, 0.0),
        );
        let t = exponential_map(&g).unwrap();
        assert!(t.is_rigid(1e-5));
    }
}
