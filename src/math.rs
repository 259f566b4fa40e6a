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
//! Small numeric helpers for so(3) and se(3)
use nalgebra as na;
use na::{Matrix3, RealField, Vector3};

/// Angle below which the exponential coefficients are evaluated by their Taylor series
pub const SMALL_ANGLE_THRESHOLD: f64 = 1e-2;

/// Create the skew-symmetric matrix of `w`
///
/// `skew(w) * v` equals `w.cross(&v)` for all `v`.
///
/// # Examples
///
/// ```
/// use screw_fk::Vector3;
///
/// let w = Vector3::new(1.0, 2.0, 3.0);
/// let v = Vector3::new(-0.5, 0.1, 4.0);
/// let m = screw_fk::math::skew(&w);
/// assert!((m * v - w.cross(&v)).norm() < 1e-12);
/// assert_eq!(m.transpose(), -m);
/// ```
pub fn skew<T>(w: &Vector3<T>) -> Matrix3<T>
where
    T: RealField + Copy,
{
    let zero = T::zero();
    Matrix3::new(
        zero, -w[2], w[1], //
        w[2], zero, -w[0], //
        -w[1], w[0], zero,
    )
}

/// Inverse of `skew`, reads the vector from the lower off-diagonal entries
pub fn unskew<T>(m: &Matrix3<T>) -> Vector3<T>
where
    T: RealField + Copy,
{
    Vector3::new(m[(2, 1)], m[(0, 2)], m[(1, 0)])
}

/// Euclidean norm of `v` which does not overflow for large finite components
///
/// The vector is divided by its largest absolute component before squaring.
/// The result is infinite only if the norm itself is not representable.
///
/// # Examples
///
/// ```
/// use screw_fk::Vector3;
///
/// let v: Vector3<f64> = Vector3::new(3e200, 4e200, 0.0);
/// assert!(v.norm().is_infinite());
/// assert!((screw_fk::math::magnitude(&v) - 5e200).abs() < 1e186);
/// ```
pub fn magnitude<T>(v: &Vector3<T>) -> T
where
    T: RealField + Copy,
{
    let scale = v.iter().fold(T::zero(), |m, x| m.max(x.abs()));
    if scale == T::zero() || !scale.is_finite() {
        return scale;
    }
    (v / scale).norm() * scale
}

/// Coefficients of the closed form exponential, for a unit axis `Ω̂` and angle `θ`
///
/// * rotation `R = I + a Ω̂ + b Ω̂²`
/// * translation `t = (I + c Ω̂ + d Ω̂²) q`
///
/// where `a = sin θ`, `b = 1 - cos θ`, `c = (1 - cos θ) / θ` and `d = (θ - sin θ) / θ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpCoefficients<T> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

impl<T> ExpCoefficients<T>
where
    T: RealField + Copy,
{
    /// Evaluate the coefficients for the angle `theta` (`theta >= 0`)
    ///
    /// Below `SMALL_ANGLE_THRESHOLD` the Taylor series is used, `c` and `d`
    /// cancel catastrophically when evaluated directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use screw_fk::math::ExpCoefficients;
    ///
    /// let zero = ExpCoefficients::new(0.0f64);
    /// assert_eq!(zero, ExpCoefficients { a: 0.0, b: 0.0, c: 0.0, d: 0.0 });
    /// let k = ExpCoefficients::new(1e200f64);
    /// assert!((k.d - 1.0).abs() < 1e-15);
    /// ```
    pub fn new(theta: T) -> Self {
        let one = T::one();
        if theta < na::convert(SMALL_ANGLE_THRESHOLD) {
            let t2 = theta * theta;
            let n = |x: f64| -> T { na::convert(x) };
            // sin θ / θ, (1 - cos θ) / θ² and (θ - sin θ) / θ³
            let sinc = one - t2 / n(6.0) * (one - t2 / n(20.0) * (one - t2 / n(42.0)));
            let cosc = (one - t2 / n(12.0) * (one - t2 / n(30.0) * (one - t2 / n(56.0)))) / n(2.0);
            let sinc3 = (one - t2 / n(20.0) * (one - t2 / n(42.0) * (one - t2 / n(72.0)))) / n(6.0);
            Self {
                a: theta * sinc,
                b: t2 * cosc,
                c: theta * cosc,
                d: t2 * sinc3,
            }
        } else {
            let (sin, cos) = theta.sin_cos();
            Self {
                a: sin,
                b: one - cos,
                c: (one - cos) / theta,
                d: one - sin / theta,
            }
        }
    }
}

#[test]
fn test_unskew() {
    let w = Vector3::new(0.3, -1.2, 2.5);
    assert_eq!(unskew(&skew(&w)), w);
}

#[test]
fn test_magnitude() {
    assert_eq!(magnitude(&Vector3::<f64>::zeros()), 0.0);
    assert!((magnitude(&Vector3::new(1.0, 2.0, 2.0)) - 3.0f64).abs() < 1e-15);
    assert!((magnitude(&Vector3::new(0.0f32, 3e30, 4e30)) - 5e30).abs() < 1e25);
    assert!(magnitude(&Vector3::new(f64::MAX, f64::MAX, 0.0)).is_infinite());
}
