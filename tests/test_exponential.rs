use screw_fk::*;
use std::f64::consts::PI;

fn series_exp(g: &Matrix4<f64>) -> Matrix4<f64> {
    let mut sum = Matrix4::identity();
    let mut term = Matrix4::identity();
    for k in 1..60 {
        term = term * g / k as f64;
        sum += term;
    }
    sum
}

fn sample_axes() -> Vec<ScrewAxis<f64>> {
    vec![
        ScrewAxis::new(Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, 0.0)),
        ScrewAxis::new(Vector3::new(0.3, -0.4, 1.2), Vector3::new(1.0, 2.0, -0.5)),
        ScrewAxis::new(Vector3::new(-2.0, 0.5, 0.1), Vector3::new(0.0, -1.0, 0.3)),
        ScrewAxis::new(Vector3::new(1e-4, 2e-4, -1e-4), Vector3::new(0.5, 0.5, 0.5)),
        ScrewAxis::new(Vector3::new(0.0, PI, 0.0), Vector3::new(2.0, 0.0, 1.0)),
        ScrewAxis::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(5.0, 0.0, 2.0)),
    ]
}

#[test]
fn test_matches_series_expansion() {
    for axis in sample_axes() {
        let g = axis.generator();
        let t = exponential_map(&g).unwrap();
        let expected = series_exp(g.matrix());
        assert!(
            (t.matrix() - expected).norm() < 1e-9,
            "{axis}: {} != {}",
            t.matrix(),
            expected
        );
    }
}

#[test]
fn test_orthonormal_rotation() {
    for axis in sample_axes() {
        for scale in [-3.0, -0.7, 1e-6, 0.01, 1.0, 2.0, 10.0] {
            let t = exponential_map(&axis.scaled(scale).generator()).unwrap();
            let r = t.rotation();
            assert!((r.transpose() * r - Matrix3::identity()).norm() < 1e-9);
            assert!((r.determinant() - 1.0).abs() < 1e-9);
            assert!(t.is_rigid(1e-9));
        }
    }
}

#[test]
fn test_small_angle_continuity() {
    let q = Vector3::new(0.5, -1.0, 2.0);
    let direction = Vector3::new(0.3, 0.4, 0.5).normalize();
    let limit = exponential_map(&build_generator(&Vector3::zeros(), &q)).unwrap();
    for theta in [1e-2, 1e-3, 1e-5, 1e-8, 1e-10, 1e-11, 1e-14] {
        let t = exponential_map(&build_generator(&(direction * theta), &q)).unwrap();
        let diff = (t.matrix() - limit.matrix()).norm();
        assert!(diff < 4.0 * theta * (1.0 + q.norm()), "theta {theta}: {diff}");
    }
}

#[test]
fn test_continuity_across_series_threshold() {
    let q = Vector3::new(1.0, 2.0, 3.0);
    let direction = Vector3::new(1.0, -1.0, 0.5).normalize();
    let threshold = math::SMALL_ANGLE_THRESHOLD;
    let below = exponential_map(&build_generator(&(direction * (threshold * (1.0 - 1e-13))), &q))
        .unwrap();
    let above = exponential_map(&build_generator(&(direction * (threshold * (1.0 + 1e-13))), &q))
        .unwrap();
    assert!((below.matrix() - above.matrix()).norm() < 1e-12);
}

#[test]
fn test_pure_translation_is_exact() {
    let q = Vector3::new(0.0, -2.0, 0.0);
    let t = exponential_map(&build_generator(&Vector3::new(0.0, 0.0, 1e-11), &q)).unwrap();
    assert_eq!(t.rotation(), Matrix3::identity());
    assert_eq!(t.translation(), q);
}

#[test]
fn test_revolute_about_point() {
    let axis = ScrewAxis::revolute(Vector3::new(0.0, 0.0, PI), Vector3::new(1.0, 0.0, 0.0));
    let t = exponential_map(&axis.generator()).unwrap();
    assert!((t.translation() - Vector3::new(2.0, 0.0, 0.0)).norm() < 1e-12);
    // the point on the axis does not move
    let p = t.rotation() * Vector3::new(1.0, 0.0, 0.0) + t.translation();
    assert!((p - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
}

#[test]
fn test_screw_with_pitch() {
    let theta = 1.3;
    let pitch = 0.2;
    let axis = ScrewAxis::new(
        Vector3::new(0.0, 0.0, theta),
        Vector3::new(0.0, 0.0, pitch * theta),
    );
    let t: Se3Transform<f64> = exponential_map(&axis.generator()).unwrap();
    assert!((t.translation() - Vector3::new(0.0, 0.0, pitch * theta)).norm() < 1e-12);
    let expected = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), theta);
    assert!((t.to_isometry().rotation.angle_to(&expected)).abs() < 1e-12);
}

#[test]
fn test_magnitude_is_angle() {
    let t = exponential_map(&build_generator(&Vector3::new(0.0, 0.0, 2.0), &Vector3::zeros()))
        .unwrap();
    let r = t.rotation();
    assert!((r[(0, 0)] - 2.0f64.cos()).abs() < 1e-12);
    assert!((r[(1, 0)] - 2.0f64.sin()).abs() < 1e-12);
}

#[test]
fn test_rejects_hand_built_generator() {
    let mut m = Matrix4::<f64>::zeros();
    m[(0, 1)] = -1.0;
    m[(1, 0)] = 1.0;
    m[(3, 3)] = 1.0;
    let err = exponential_map(&Se3Generator::from_matrix(m)).unwrap_err();
    assert!(matches!(err, Error::InvalidGeneratorError { .. }));
    m[(3, 3)] = 0.0;
    assert!(exponential_map(&Se3Generator::from_matrix(m)).is_ok());
}

#[test]
fn test_huge_angular_component() {
    for w in [
        Vector3::new(1e155, 0.0, 0.0),
        Vector3::new(1e200, 0.0, 0.0),
        Vector3::new(-3e300, 2e300, 1e300),
    ] {
        let t: Se3Transform<f64> = exponential_map(&build_generator(&w, &Vector3::new(0.0, 1.0, 0.0))).unwrap();
        assert!(t.is_rigid(1e-9), "{w}");
        assert!(t.translation().iter().all(|x| x.is_finite()));
    }
    let frames = compute_frames(&[
        ScrewAxis::new(Vector3::new(1e200, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)),
        ScrewAxis::pure_translation(Vector3::new(1.0, 0.0, 0.0)),
    ])
    .unwrap();
    for frame in &frames {
        assert!(frame.is_rigid(1e-9));
    }

    let t = exponential_map(&build_generator(
        &Vector3::new(0.0f32, 0.0, 2e19),
        &Vector3::new(1.0f32, 0.0, 0.0),
    ))
    .unwrap();
    assert!(t.is_rigid(1e-5));
}

#[test]
fn test_unrepresentable_angle() {
    let w = Vector3::new(f64::MAX, f64::MAX, 0.0);
    let err = exponential_map(&build_generator(&w, &Vector3::zeros())).unwrap_err();
    assert!(matches!(err, Error::InvalidGeneratorError { .. }));
}
