// Plain value vectors for the steering code. All operations return new values.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x + b.x, a.y + b.y)
}

pub fn sub(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x - b.x, a.y - b.y)
}

pub fn scale(v: Vec2, k: f64) -> Vec2 {
    Vec2::new(v.x * k, v.y * k)
}

pub fn magnitude(v: Vec2) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

pub fn distance(a: Vec2, b: Vec2) -> f64 {
    magnitude(sub(a, b))
}

/// Unit vector in the direction of `v`; a zero vector stays zero.
pub fn normalize(v: Vec2) -> Vec2 {
    let m = magnitude(v);
    if m > 0.0 { scale(v, 1.0 / m) } else { v }
}

pub fn limit(v: Vec2, max: f64) -> Vec2 {
    if magnitude(v) > max {
        scale(normalize(v), max)
    } else {
        v
    }
}
