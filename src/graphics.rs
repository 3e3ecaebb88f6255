use crate::bounds::Rect;
use druid::Color;

/// Maps a world-space point to pixel coordinates. World Y points up,
/// screen Y points down; the view rectangle [-aspect, +aspect] x
/// [-1, +1] fills the window, so half the window height is one world
/// unit.
pub fn world_to_screen(x: f64, y: f64, width: usize, height: usize) -> (f64, f64) {
    let half_h = height as f64 / 2.0;
    (width as f64 / 2.0 + x * half_h, height as f64 / 2.0 - y * half_h)
}

/// Fills the whole pixel buffer with one color
pub fn clear(pixel_data: &mut [u8], color: Color) {
    let (r, g, b, a) = color.as_rgba8();
    for pixel in pixel_data.chunks_exact_mut(4) {
        pixel[0] = r;
        pixel[1] = g;
        pixel[2] = b;
        pixel[3] = a;
    }
}

/// Draws a line between two points in the pixel buffer using
/// Bresenham's algorithm; pixels outside the buffer are skipped.
pub fn draw_line(
    from: (f64, f64),
    to: (f64, f64),
    pixel_data: &mut [u8],
    width: usize,
    height: usize,
    color: Color,
) {
    let (mut x0, mut y0) = (from.0.round() as isize, from.1.round() as isize);
    let (x1, y1) = (to.0.round() as isize, to.1.round() as isize);
    let (r, g, b, a) = color.as_rgba8();

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy; // error value e_xy

    loop {
        if x0 >= 0 && x0 < width as isize && y0 >= 0 && y0 < height as isize {
            let offset = (y0 as usize * width + x0 as usize) * 4;
            pixel_data[offset] = r;
            pixel_data[offset + 1] = g;
            pixel_data[offset + 2] = b;
            pixel_data[offset + 3] = a;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Outlines a world-space rectangle in the pixel buffer
pub fn draw_rect_outline(
    rect: Rect,
    pixel_data: &mut [u8],
    width: usize,
    height: usize,
    color: Color,
) {
    let corners = rect.corners();
    for i in 0..4 {
        let (x0, y0) = corners[i];
        let (x1, y1) = corners[(i + 1) % 4];
        draw_line(
            world_to_screen(x0, y0, width, height),
            world_to_screen(x1, y1, width, height),
            pixel_data,
            width,
            height,
            color,
        );
    }
}
