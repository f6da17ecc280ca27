//! Algebraic properties of the kernel over seeded random operands.

use mvq_kernel::prelude::*;
use mvq_tests::{
    mat4_close, quat_close, random_mat4, random_quat, random_vec3, rng, vec3_close, EPS,
};

const CASES: usize = 200;

#[test]
fn vec3_add_commutes_and_sub_inverts() {
    let mut rng = rng(1);
    for _ in 0..CASES {
        let (a, b) = (random_vec3(&mut rng), random_vec3(&mut rng));
        assert_eq!(a + b, b + a);
        assert!(vec3_close((a + b) - b, a, EPS));
        assert_eq!(a - b, a + -b);
    }
}

#[test]
fn cross_is_anticommutative_and_orthogonal() {
    let mut rng = rng(2);
    for _ in 0..CASES {
        let (a, b) = (random_vec3(&mut rng), random_vec3(&mut rng));
        let c = a.cross(b);
        assert_eq!(c, -b.cross(a));
        // Operands are bounded by 10, so products stay below ~1e3.
        assert!(c.dot(a).abs() < 1e-9 * 1e3);
        assert!(c.dot(b).abs() < 1e-9 * 1e3);
    }
}

#[test]
fn dot_is_symmetric() {
    let mut rng = rng(3);
    for _ in 0..CASES {
        let (a, b) = (random_vec3(&mut rng), random_vec3(&mut rng));
        assert_eq!(a.dot(b), b.dot(a));
    }
}

#[test]
fn normalized_vectors_have_unit_length() {
    let mut rng = rng(4);
    for _ in 0..CASES {
        let v = random_vec3(&mut rng);
        if v.length() == 0.0 {
            continue;
        }
        assert!((v.normalize().length() - 1.0).abs() < EPS);
    }
}

#[test]
fn angle_stays_in_range() {
    let mut rng = rng(5);
    for _ in 0..CASES {
        let (a, b) = (random_vec3(&mut rng), random_vec3(&mut rng));
        let angle = a.angle(b);
        assert!((0.0..=std::f64::consts::PI).contains(&angle));
        assert!((angle - b.angle(a)).abs() < EPS);
    }
}

#[test]
fn mat4_identity_is_two_sided() {
    let mut rng = rng(6);
    for _ in 0..CASES {
        let m = random_mat4(&mut rng);
        assert_eq!(Mat4::identity().multiply(&m), m);
        assert_eq!(m.multiply(&Mat4::identity()), m);
    }
}

#[test]
fn mat4_multiply_is_associative() {
    let mut rng = rng(7);
    for _ in 0..CASES {
        let (a, b, c) = (random_mat4(&mut rng), random_mat4(&mut rng), random_mat4(&mut rng));
        let left = (a * b) * c;
        let right = a * (b * c);
        assert!(mat4_close(&left, &right, 1e-9 * 1e4));
    }
}

#[test]
fn translate_matches_explicit_product() {
    let mut rng = rng(8);
    for _ in 0..CASES {
        let m = random_mat4(&mut rng);
        let d = random_vec3(&mut rng);
        assert_eq!(m.translate(d.x, d.y, d.z), m.multiply(&Mat4::from_translation(d.x, d.y, d.z)));
    }
}

#[test]
fn rotations_preserve_direction_length() {
    let mut rng = rng(9);
    for _ in 0..CASES {
        let degrees = random_vec3(&mut rng).scale(36.0);
        let r = Mat4::identity().rotate_axis_priority(degrees.to_array());
        let v = random_vec3(&mut rng);
        assert!((v.transform_linear(&r).length() - v.length()).abs() < EPS);
    }
}

#[test]
fn quat_identity_is_two_sided() {
    let mut rng = rng(10);
    for _ in 0..CASES {
        let q = random_quat(&mut rng);
        assert_eq!(Quat::identity().multiply(q), q);
        assert_eq!(q.multiply(Quat::identity()), q);
    }
}

#[test]
fn quat_product_length_is_multiplicative() {
    let mut rng = rng(11);
    for _ in 0..CASES {
        let (a, b) = (random_quat(&mut rng), random_quat(&mut rng));
        assert!(((a * b).length() - a.length() * b.length()).abs() < EPS);
    }
}

#[test]
fn unit_quat_matrix_is_orthonormal() {
    let mut rng = rng(12);
    for _ in 0..CASES {
        let q = random_quat(&mut rng).normalize();
        let AxisVectors { x, y, z } = q.to_axis_vectors();
        assert!((x.length() - 1.0).abs() < EPS);
        assert!((y.length() - 1.0).abs() < EPS);
        assert!(x.dot(y).abs() < EPS);
        assert!(vec3_close(x.cross(y), z, EPS));
    }
}

#[test]
fn quat_matrix_agrees_with_axis_vectors() {
    let mut rng = rng(13);
    for _ in 0..CASES {
        let q = random_quat(&mut rng);
        let m = q.to_matrix();
        for (axis, col) in [(Axis::X, 0), (Axis::Y, 1), (Axis::Z, 2)] {
            let v = q.axis_vector(axis);
            assert_eq!(v, Vec3::new(m.get(0, col), m.get(1, col), m.get(2, col)));
        }
        assert_eq!(translation_of(&m), Vec3::zero());
    }
}

#[test]
fn normalize_then_renormalize_is_stable() {
    let mut rng = rng(14);
    for _ in 0..CASES {
        let q = random_quat(&mut rng).normalize();
        assert!(quat_close(q, q.normalize(), EPS));
    }
}

#[test]
fn concrete_values() {
    assert_eq!(Vec3::new(1.0, 2.0, 3.0) + Vec3::new(4.0, 5.0, 6.0), Vec3::new(5.0, 7.0, 9.0));
    assert_eq!(Vec3::new(1.0, 0.0, 0.0).cross(Vec3::new(0.0, 1.0, 0.0)), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(4.0, 5.0, 6.0)), 32.0);
    assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
    assert_eq!(Quat::identity() * Quat::identity(), Quat::identity());
    assert_eq!(Quat::identity().to_matrix(), Mat4::identity());
    let angle = Vec3::new(1.0, 0.0, 0.0).angle(Vec3::new(0.0, 1.0, 0.0));
    assert!((angle - std::f64::consts::FRAC_PI_2).abs() < EPS);
}

#[test]
fn matrix_to_quaternion_is_explicitly_unavailable() {
    assert!(matrix_to_quaternion(&Mat4::identity()).is_err());
}
