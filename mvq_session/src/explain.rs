//! Worked-step explanations.
//!
//! Each function returns the symbolic formula for an operation followed by
//! the same formula with the operand values substituted.

use mvq_kernel::prelude::*;

pub fn cross(a: Vec3, b: Vec3) -> Vec<String> {
    vec![
        "x = ay*bz - az*by".to_string(),
        format!("x = ({}*{}) - ({}*{})", a.y, b.z, a.z, b.y),
        "y = az*bx - ax*bz".to_string(),
        format!("y = ({}*{}) - ({}*{})", a.z, b.x, a.x, b.z),
        "z = ax*by - ay*bx".to_string(),
        format!("z = ({}*{}) - ({}*{})", a.x, b.y, a.y, b.x),
    ]
}

/// Row-by-column steps of `a * b`, one pair of lines per output element.
pub fn matrix_product(a: &Mat4, b: &Mat4) -> Vec<String> {
    let mut out = Vec::with_capacity(32);
    for row in 0..4 {
        for col in 0..4 {
            let symbolic: Vec<String> = (0..4)
                .map(|k| format!("a{row}{k}*b{k}{col}"))
                .collect();
            let numeric: Vec<String> = (0..4)
                .map(|k| format!("({}*{})", a.get(row, k), b.get(k, col)))
                .collect();
            out.push(format!("c{row}{col} = {}", symbolic.join(" + ")));
            out.push(format!("c{row}{col} = {}", numeric.join(" + ")));
        }
    }
    out
}

pub fn quat_product(a: Quat, b: Quat) -> Vec<String> {
    vec![
        "x = ax*bw + aw*bx + az*by - ay*bz".to_string(),
        format!(
            "x = ({}*{}) + ({}*{}) + ({}*{}) - ({}*{})",
            a.x, b.w, a.w, b.x, a.z, b.y, a.y, b.z
        ),
        "y = ay*bw - az*bx + aw*by + ax*bz".to_string(),
        format!(
            "y = ({}*{}) - ({}*{}) + ({}*{}) + ({}*{})",
            a.y, b.w, a.z, b.x, a.w, b.y, a.x, b.z
        ),
        "z = az*bw + ay*bx - ax*by + aw*bz".to_string(),
        format!(
            "z = ({}*{}) + ({}*{}) - ({}*{}) + ({}*{})",
            a.z, b.w, a.y, b.x, a.x, b.y, a.w, b.z
        ),
        "w = aw*bw - ax*bx - ay*by - az*bz".to_string(),
        format!(
            "w = ({}*{}) - ({}*{}) - ({}*{}) - ({}*{})",
            a.w, b.w, a.x, b.x, a.y, b.y, a.z, b.z
        ),
    ]
}

pub fn length(v: Vec3) -> Vec<String> {
    let (xx, yy, zz) = (v.x * v.x, v.y * v.y, v.z * v.z);
    vec![
        "c = sqrt(x*x + y*y + z*z)".to_string(),
        format!("c = sqrt(({0}*{0}) + ({1}*{1}) + ({2}*{2}))", v.x, v.y, v.z),
        format!("c = sqrt({} + {} + {})", xx, yy, zz),
        format!("c = sqrt({})", xx + yy + zz),
    ]
}

pub fn angle(radians: Real) -> Vec<String> {
    vec![format!(
        "c = {} radians ({} degrees)",
        radians,
        radians.to_degrees()
    )]
}
