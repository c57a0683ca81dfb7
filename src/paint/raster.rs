use super::font::{self, ADVANCE, GLYPH_WIDTH, LINE_HEIGHT};
use super::{Color, Point, RasterImage};

/// Largest block size a font pixel is drawn at
pub const MAX_TEXT_SCALE: u32 = 64;

/// Put a pixel on the raster if (x,y) is inside bounds.
#[inline]
fn put_pixel(img: &mut RasterImage, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= img.width() || y >= img.height() {
        return;
    }
    img.put_pixel(x, y, color);
}

/// Clamps the inclusive span `[lo, hi]` to `0..limit`. `None` if nothing is left.
fn clip_span(lo: i64, hi: i64, limit: u32) -> Option<(u32, u32)> {
    let lo = lo.max(0);
    let hi = hi.min(i64::from(limit) - 1);
    (lo <= hi).then(|| (lo as u32, hi as u32))
}

/// Fill a disc of `radius` centered at `center`.
/// Covers the same `2r+1` pixel span as an ellipse in the box `[c-r, c+r]`.
pub fn fill_disc(img: &mut RasterImage, center: Point, radius: u32, color: Color) {
    let (cx, cy, r) = (i64::from(center.x), i64::from(center.y), i64::from(radius));
    let r2 = r.saturating_mul(r);
    let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (
        clip_span(cx - r, cx + r, img.width()),
        clip_span(cy - r, cy + r, img.height()),
    ) else {
        return;
    };
    for y in y_lo..=y_hi {
        let dy = i64::from(y) - cy;
        for x in x_lo..=x_hi {
            let dx = i64::from(x) - cx;
            if dx * dx + dy * dy <= r2 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill the axis-aligned square `[c-half, c+half]` (inclusive on both ends).
pub fn fill_square(img: &mut RasterImage, center: Point, half_width: u32, color: Color) {
    let (cx, cy, h) = (i64::from(center.x), i64::from(center.y), i64::from(half_width));
    let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (
        clip_span(cx - h, cx + h, img.width()),
        clip_span(cy - h, cy + h, img.height()),
    ) else {
        return;
    };
    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            img.put_pixel(x, y, color);
        }
    }
}

/// Draw a straight segment of the given stroke `width` from `from` to `to`.
///
/// Covers pixels whose center projects onto the segment and whose signed
/// distance `d` across it satisfies `-width/2 <= d < width/2`, so the stroke
/// is exactly `width` pixels thick with flat ends. A zero-length segment
/// becomes a `width`x`width` dot.
pub fn draw_line(img: &mut RasterImage, from: Point, to: Point, width: u32, color: Color) {
    let w = f64::from(width.max(1));
    let half = w / 2.0;
    let reach = i64::from(width.max(1)).div_euclid(2) + 1;

    let (x0, y0) = (f64::from(from.x), f64::from(from.y));
    let (dx, dy) = (f64::from(to.x) - x0, f64::from(to.y) - y0);
    let len2 = dx * dx + dy * dy;
    let len = len2.sqrt();

    let (fx, fy, tx, ty) = (
        i64::from(from.x),
        i64::from(from.y),
        i64::from(to.x),
        i64::from(to.y),
    );
    let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (
        clip_span(fx.min(tx) - reach, fx.max(tx) + reach, img.width()),
        clip_span(fy.min(ty) - reach, fy.max(ty) + reach, img.height()),
    ) else {
        return;
    };

    let in_band = |d: f64| -half <= d && d < half;
    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            let (px, py) = (f64::from(x) - x0, f64::from(y) - y0);
            let covered = if len2 == 0.0 {
                in_band(px) && in_band(py)
            } else {
                let along = px * dx + py * dy;
                let across = (dx * py - dy * px) / len;
                (0.0..=len2).contains(&along) && in_band(across)
            };
            if covered {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Stamp `text` with its top-left corner at `origin` using the 5x7 bitmap
/// font, each font pixel drawn as a `scale`x`scale` block. `\n` starts a new line.
pub fn draw_text(img: &mut RasterImage, origin: Point, text: &str, scale: u32, color: Color) {
    let s = scale.clamp(1, MAX_TEXT_SCALE) as i32;
    let (mut x, mut y) = (origin.x, origin.y);
    for ch in text.chars() {
        if ch == '\n' {
            x = origin.x;
            y = y.saturating_add(LINE_HEIGHT * s);
            continue;
        }
        for (row, bits) in font::glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let (gx, gy) = (x.saturating_add(col * s), y.saturating_add(row as i32 * s));
                for by in 0..s {
                    for bx in 0..s {
                        put_pixel(img, gx.saturating_add(bx), gy.saturating_add(by), color);
                    }
                }
            }
        }
        x = x.saturating_add(ADVANCE * s);
    }
}
