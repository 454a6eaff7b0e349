use glam::{Vec2, Vec3};

/// Fraction of the remaining distance covered in `dt_sec` at `rate` (1/s).
#[inline]
pub fn approach_alpha(rate: f32, dt_sec: f32) -> f32 {
    1.0 - (-rate.max(0.0) * dt_sec.max(0.0)).exp()
}

/// Exponential approach of `current` toward `target`; frame-rate independent.
#[inline]
pub fn damp(current: f32, target: f32, rate: f32, dt_sec: f32) -> f32 {
    current + (target - current) * approach_alpha(rate, dt_sec)
}

#[inline]
pub fn damp_vec2(current: Vec2, target: Vec2, rate: f32, dt_sec: f32) -> Vec2 {
    current.lerp(target, approach_alpha(rate, dt_sec))
}

#[inline]
pub fn damp_vec3(current: Vec3, target: Vec3, rate: f32, dt_sec: f32) -> Vec3 {
    current.lerp(target, approach_alpha(rate, dt_sec))
}
