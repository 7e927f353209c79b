use crate::rng::lattice;

#[inline]
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// 2D value noise: hashed lattice values blended with smoothstep weights.
/// Output lies in `[-1, 1]` and is continuous in `(x, y)`.
///
/// Coordinates past the `i32` lattice saturate to its edge; non-finite ones
/// sample the saturated lattice point directly.
#[inline]
pub fn value_noise(x: f32, y: f32, seed: u32) -> f32 {
    if !x.is_finite() || !y.is_finite() {
        return lattice(x as i32, y as i32, seed);
    }
    let ix = x.floor() as i32;
    let iy = y.floor() as i32;
    let sx = smoothstep((x - ix as f32).clamp(0.0, 1.0));
    let sy = smoothstep((y - iy as f32).clamp(0.0, 1.0));

    let v00 = lattice(ix, iy, seed);
    let v10 = lattice(ix.wrapping_add(1), iy, seed);
    let v01 = lattice(ix, iy.wrapping_add(1), seed);
    let v11 = lattice(ix.wrapping_add(1), iy.wrapping_add(1), seed);

    let a = lerp(v00, v10, sx);
    let b = lerp(v01, v11, sx);
    lerp(a, b, sy).clamp(-1.0, 1.0)
}
