pub mod rng;
mod vec2;

pub use std::f32::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

/// Unit vector pointing at the given angle.
pub fn cos_sin(a: f32) -> Vec2<f32> {
    let (sin, cos) = a.sin_cos();
    Vec2 { x: cos, y: sin }
}
