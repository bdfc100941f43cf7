use super::color::Color;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    ZeroSize { width: usize, height: usize },
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { width, height } => {
                write!(f, "surface must be at least 1x1 (got {width}x{height})")
            }
            Self::TooLarge { width, height } => {
                write!(f, "surface {width}x{height} exceeds {MAX_SIDE}px per side")
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

pub const MAX_SIDE: usize = 16_384;

/// Canvas-style affine matrix: `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    // Uniform length scale; exact for rotations, reflections and uniform scales.
    fn length_scale(&self) -> f64 {
        (self.a * self.d - self.b * self.c).abs().sqrt()
    }

    fn is_axis_aligned(&self) -> bool {
        self.b == 0.0 && self.c == 0.0
    }
}

/// Fixed-size RGBA8 raster with an immediate-mode drawing API.
///
/// Coordinates are in pixels with the origin at the top-left corner; pixel `(x, y)` covers
/// the unit square whose centre is `(x + 0.5, y + 0.5)`. All drawing composites source-over.
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    transform: Transform,
    stack: Vec<Transform>,
    coverage: Vec<f32>,
}

impl Surface {
    pub fn new(width: usize, height: usize) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::ZeroSize { width, height });
        }
        if width > MAX_SIDE || height > MAX_SIDE {
            return Err(SurfaceError::TooLarge { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![0; width * height * 4],
            transform: Transform::IDENTITY,
            stack: Vec::new(),
            coverage: Vec::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Clears to fully transparent and drops any transform state a routine left behind.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
        self.transform = Transform::IDENTITY;
        self.stack.clear();
    }

    // ── transform stack ────────────────────────────────────────────────────

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn save(&mut self) {
        self.stack.push(self.transform);
    }

    pub fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
    }

    pub fn translate(&mut self, tx: f64, ty: f64) {
        let t = &mut self.transform;
        t.e += t.a * tx + t.c * ty;
        t.f += t.b * tx + t.d * ty;
    }

    pub fn rotate(&mut self, angle: f64) {
        let (s, c) = angle.sin_cos();
        let t = self.transform;
        self.transform.a = t.a * c + t.c * s;
        self.transform.b = t.b * c + t.d * s;
        self.transform.c = t.c * c - t.a * s;
        self.transform.d = t.d * c - t.b * s;
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        let t = &mut self.transform;
        t.a *= sx;
        t.b *= sx;
        t.c *= sy;
        t.d *= sy;
    }

    // ── pixels ─────────────────────────────────────────────────────────────

    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color, coverage: f64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let sa = color.a * coverage.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }
        let i = (y as usize * self.width + x as usize) * 4;
        let dst = &mut self.pixels[i..i + 4];

        if sa >= 1.0 {
            dst[0] = color.r;
            dst[1] = color.g;
            dst[2] = color.b;
            dst[3] = 255;
            return;
        }

        let da = dst[3] as f64 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let mix = |s: u8, d: u8| -> u8 {
            let v = (s as f64 * sa + d as f64 * da * (1.0 - sa)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };
        dst[0] = mix(color.r, dst[0]);
        dst[1] = mix(color.g, dst[1]);
        dst[2] = mix(color.b, dst[2]);
        dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    // ── rectangles ─────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        if color.is_transparent() || !all_finite(&[x, y, w, h]) {
            return;
        }
        if !self.transform.is_axis_aligned() {
            let corners = [(x, y), (x + w, y), (x + w, y + h), (x, y + h)];
            self.fill_polygon(&corners, color);
            return;
        }

        let (x0, y0) = self.transform.apply(x, y);
        let (x1, y1) = self.transform.apply(x + w, y + h);
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));

        // A pixel belongs to the rect when its centre does.
        let px0 = ((min_x - 0.5).ceil().max(0.0)) as usize;
        let py0 = ((min_y - 0.5).ceil().max(0.0)) as usize;
        let px1 = ((max_x - 0.5).ceil().min(self.width as f64).max(0.0)) as usize;
        let py1 = ((max_y - 0.5).ceil().min(self.height as f64).max(0.0)) as usize;

        for py in py0..py1 {
            for px in px0..px1 {
                self.blend_pixel(px as i64, py as i64, color, 1.0);
            }
        }
    }

    pub fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, line_width: f64, color: Color) {
        let pts = [(x, y), (x + w, y), (x + w, y + h), (x, y + h)];
        self.stroke_path(&pts, true, line_width, color);
    }

    // ── circles ────────────────────────────────────────────────────────────

    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        if color.is_transparent() || radius <= 0.0 || !all_finite(&[cx, cy, radius]) {
            return;
        }
        let (cx, cy) = self.transform.apply(cx, cy);
        let r = radius * self.transform.length_scale();
        let Some((x0, y0, x1, y1)) = self.clip_box(cx - r - 1.0, cy - r - 1.0, cx + r + 1.0, cy + r + 1.0)
        else {
            return;
        };

        for py in y0..y1 {
            let dy = py as f64 + 0.5 - cy;
            for px in x0..x1 {
                let dx = px as f64 + 0.5 - cx;
                let d = (dx * dx + dy * dy).sqrt();
                let cov = (r + 0.5 - d).clamp(0.0, 1.0);
                if cov > 0.0 {
                    self.blend_pixel(px as i64, py as i64, color, cov);
                }
            }
        }
    }

    pub fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, line_width: f64, color: Color) {
        if color.is_transparent() || radius <= 0.0 || !all_finite(&[cx, cy, radius, line_width]) {
            return;
        }
        let (cx, cy) = self.transform.apply(cx, cy);
        let scale = self.transform.length_scale();
        let r = radius * scale;
        let (half, alpha) = stroke_half_width(line_width * scale);
        let reach = r + half + 1.0;
        let Some((x0, y0, x1, y1)) = self.clip_box(cx - reach, cy - reach, cx + reach, cy + reach)
        else {
            return;
        };

        for py in y0..y1 {
            let dy = py as f64 + 0.5 - cy;
            for px in x0..x1 {
                let dx = px as f64 + 0.5 - cx;
                let d = ((dx * dx + dy * dy).sqrt() - r).abs();
                let cov = (half + 0.5 - d).clamp(0.0, 1.0);
                if cov > 0.0 {
                    self.blend_pixel(px as i64, py as i64, color, cov * alpha);
                }
            }
        }
    }

    /// Radial gradient from `color` at the centre to fully transparent at `radius`.
    pub fn fill_radial_glow(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        if color.is_transparent() || radius <= 0.0 || !all_finite(&[cx, cy, radius]) {
            return;
        }
        let (cx, cy) = self.transform.apply(cx, cy);
        let r = radius * self.transform.length_scale();
        let Some((x0, y0, x1, y1)) = self.clip_box(cx - r, cy - r, cx + r, cy + r) else {
            return;
        };

        for py in y0..y1 {
            let dy = py as f64 + 0.5 - cy;
            for px in x0..x1 {
                let dx = px as f64 + 0.5 - cx;
                let d = (dx * dx + dy * dy).sqrt();
                if d < r {
                    self.blend_pixel(px as i64, py as i64, color, 1.0 - d / r);
                }
            }
        }
    }

    // ── paths ──────────────────────────────────────────────────────────────

    pub fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, line_width: f64, color: Color) {
        self.stroke_path(&[(x0, y0), (x1, y1)], false, line_width, color);
    }

    pub fn stroke_polyline(&mut self, points: &[(f64, f64)], line_width: f64, color: Color) {
        self.stroke_path(points, false, line_width, color);
    }

    /// Strokes a path as one shape: overlapping segments never composite twice.
    pub fn stroke_path(&mut self, points: &[(f64, f64)], closed: bool, line_width: f64, color: Color) {
        if color.is_transparent() || points.len() < 2 || line_width.is_nan() || line_width <= 0.0 {
            return;
        }
        let pts: Vec<(f64, f64)> = points
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|&(x, y)| self.transform.apply(x, y))
            .collect();
        if pts.len() < 2 {
            return;
        }
        let (half, alpha) = stroke_half_width(line_width * self.transform.length_scale());
        let pad = half + 1.0;

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for &(x, y) in &pts {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        let Some((bx0, by0, bx1, by1)) =
            self.clip_box(min_x - pad, min_y - pad, max_x + pad, max_y + pad)
        else {
            return;
        };

        let bw = bx1 - bx0;
        let bh = by1 - by0;
        let mut coverage = std::mem::take(&mut self.coverage);
        coverage.clear();
        coverage.resize(bw * bh, 0.0);

        let seg_count = if closed { pts.len() } else { pts.len() - 1 };
        for s in 0..seg_count {
            let (ax, ay) = pts[s];
            let (cx, cy) = pts[(s + 1) % pts.len()];
            let Some((sx0, sy0, sx1, sy1)) = self.clip_box(
                ax.min(cx) - pad,
                ay.min(cy) - pad,
                ax.max(cx) + pad,
                ay.max(cy) + pad,
            ) else {
                continue;
            };
            for py in sy0..sy1 {
                let row = (py - by0) * bw;
                for px in sx0..sx1 {
                    let d = segment_distance(px as f64 + 0.5, py as f64 + 0.5, ax, ay, cx, cy);
                    let cov = (half + 0.5 - d).clamp(0.0, 1.0) as f32;
                    let slot = &mut coverage[row + (px - bx0)];
                    if cov > *slot {
                        *slot = cov;
                    }
                }
            }
        }

        for py in 0..bh {
            for px in 0..bw {
                let cov = coverage[py * bw + px];
                if cov > 0.0 {
                    self.blend_pixel((bx0 + px) as i64, (by0 + py) as i64, color, cov as f64 * alpha);
                }
            }
        }
        self.coverage = coverage;
    }

    /// Even-odd scanline fill sampled at pixel centres.
    pub fn fill_polygon(&mut self, vertices: &[(f64, f64)], color: Color) {
        if color.is_transparent() || vertices.len() < 3 {
            return;
        }
        let verts: Vec<(f64, f64)> = vertices
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|&(x, y)| self.transform.apply(x, y))
            .collect();
        if verts.len() < 3 {
            return;
        }

        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for &(_, y) in &verts {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        let y0 = (min_y.floor().max(0.0)) as usize;
        let y1 = (max_y.ceil().min(self.height as f64).max(0.0)) as usize;

        let n = verts.len();
        let mut xs: Vec<f64> = Vec::with_capacity(n);
        for py in y0..y1 {
            let yc = py as f64 + 0.5;
            xs.clear();
            for i in 0..n {
                let (xa, ya) = verts[i];
                let (xb, yb) = verts[(i + 1) % n];
                if (ya <= yc && yb > yc) || (yb <= yc && ya > yc) {
                    xs.push(xa + (yc - ya) / (yb - ya) * (xb - xa));
                }
            }
            xs.sort_by(f64::total_cmp);
            for pair in xs.chunks_exact(2) {
                let start = ((pair[0] - 0.5).ceil().max(0.0)) as usize;
                let end = ((pair[1] - 0.5).ceil().min(self.width as f64).max(0.0)) as usize;
                for px in start..end {
                    self.blend_pixel(px as i64, py as i64, color, 1.0);
                }
            }
        }
    }

    fn clip_box(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Option<(usize, usize, usize, usize)> {
        if !all_finite(&[x0, y0, x1, y1]) {
            return None;
        }
        let bx0 = x0.floor().max(0.0);
        let by0 = y0.floor().max(0.0);
        let bx1 = x1.ceil().min(self.width as f64);
        let by1 = y1.ceil().min(self.height as f64);
        if bx0 >= bx1 || by0 >= by1 {
            return None;
        }
        Some((bx0 as usize, by0 as usize, bx1 as usize, by1 as usize))
    }
}

// Hairlines narrower than a pixel are drawn one pixel wide with proportionally less alpha.
fn stroke_half_width(width: f64) -> (f64, f64) {
    if width >= 1.0 {
        (width * 0.5, 1.0)
    } else {
        (0.5, width.max(0.0))
    }
}

fn segment_distance(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len2 = dx * dx + dy * dy;
    let t = if len2 > 0.0 {
        (((px - ax) * dx + (py - ay) * dy) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let qx = ax + t * dx - px;
    let qy = ay + t * dy - py;
    (qx * qx + qy * qy).sqrt()
}

fn all_finite(v: &[f64]) -> bool {
    v.iter().all(|x| x.is_finite())
}
