//! Shared helpers for the integration tests.
//!
//! Random operands come from a seeded RNG so failures reproduce.

use mvq_kernel::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Tolerance for comparisons after floating arithmetic.
pub const EPS: Real = 1e-9;

/// Installs a test-friendly tracing subscriber (once per process).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_test_writer()
        .try_init();
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random_vec3(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
    )
}

pub fn random_mat4(rng: &mut impl Rng) -> Mat4 {
    Mat4::from_cols_array(std::array::from_fn(|_| rng.gen_range(-10.0..10.0)))
}

pub fn random_quat(rng: &mut impl Rng) -> Quat {
    Quat::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    )
}

pub fn vec3_close(a: Vec3, b: Vec3, eps: Real) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps && (a.z - b.z).abs() <= eps
}

pub fn mat4_close(a: &Mat4, b: &Mat4, eps: Real) -> bool {
    a.m.iter().zip(b.m.iter()).all(|(x, y)| (x - y).abs() <= eps)
}

pub fn quat_close(a: Quat, b: Quat, eps: Real) -> bool {
    a.to_array()
        .iter()
        .zip(b.to_array().iter())
        .all(|(x, y)| (x - y).abs() <= eps)
}
