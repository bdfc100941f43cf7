use crate::visual::Surface;

/// Where the scaled surface lands inside the destination grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

/// Largest aspect-preserving rectangle of `src` that fits in `dst`, centred.
pub fn fit(src_w: usize, src_h: usize, dst_w: usize, dst_h: usize) -> Viewport {
    if src_w == 0 || src_h == 0 || dst_w == 0 || dst_h == 0 {
        return Viewport { x: 0, y: 0, w: 0, h: 0 };
    }
    let scale = (dst_w as f64 / src_w as f64).min(dst_h as f64 / src_h as f64);
    let w = ((src_w as f64 * scale).round() as usize).clamp(1, dst_w);
    let h = ((src_h as f64 * scale).round() as usize).clamp(1, dst_h);
    Viewport {
        x: (dst_w - w) / 2,
        y: (dst_h - h) / 2,
        w,
        h,
    }
}

/// Box-filters `surface` into a `dst_w x dst_h` RGBA buffer with black bars.
///
/// Transparent pixels composite onto black, so the output is always opaque.
pub fn letterbox(surface: &Surface, dst_w: usize, dst_h: usize, out: &mut Vec<u8>) -> Viewport {
    out.clear();
    out.resize(dst_w * dst_h * 4, 0);
    for px in out.chunks_exact_mut(4) {
        px[3] = 255;
    }

    let (sw, sh) = (surface.width(), surface.height());
    let vp = fit(sw, sh, dst_w, dst_h);
    if vp.w == 0 || vp.h == 0 {
        return vp;
    }
    let src = surface.pixels();

    for dy in 0..vp.h {
        let sy0 = dy * sh / vp.h;
        let sy1 = ((dy + 1) * sh / vp.h).max(sy0 + 1).min(sh);
        for dx in 0..vp.w {
            let sx0 = dx * sw / vp.w;
            let sx1 = ((dx + 1) * sw / vp.w).max(sx0 + 1).min(sw);

            let mut acc = [0u32; 3];
            let mut n = 0u32;
            for sy in sy0..sy1 {
                let row = sy * sw;
                for sx in sx0..sx1 {
                    let i = (row + sx) * 4;
                    let a = src[i + 3] as u32;
                    acc[0] += src[i] as u32 * a / 255;
                    acc[1] += src[i + 1] as u32 * a / 255;
                    acc[2] += src[i + 2] as u32 * a / 255;
                    n += 1;
                }
            }

            let o = ((vp.y + dy) * dst_w + vp.x + dx) * 4;
            let n = n.max(1);
            out[o] = (acc[0] / n) as u8;
            out[o + 1] = (acc[1] / n) as u8;
            out[o + 2] = (acc[2] / n) as u8;
        }
    }
    vp
}
