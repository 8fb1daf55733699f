use crate::curve::Point;
use crate::layout::{snap, ViewportConfig};
use crate::palette::square_color;
use crate::surface::Surface;

/// Horizontal nudge applied to every square.
pub const SQUARE_OFFSET_X: f64 = 10.0;

/// Everything one frame needs, borrowed from the sketch.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub frame_count: u64,
    pub path: &'a [Point],
    pub viewport: &'a ViewportConfig,
    pub background: &'a str,
    pub total_points: usize,
    pub num_squares: usize,
}

/// Path index of square `i` at `frame_count`.
///
/// Squares are spread `total_points / num_squares` samples apart and all
/// move one sample per frame. Returns 0 for an empty path.
pub fn path_index(
    frame_count: u64,
    i: usize,
    total_points: usize,
    num_squares: usize,
    len: usize,
) -> usize {
    if len == 0 {
        return 0;
    }
    let len_f = len as f64;
    let base = (frame_count as i128 - 1).rem_euclid(len as i128) as f64;
    let spread = i as f64 * total_points as f64 / num_squares as f64;
    ((base + spread + len_f) % len_f).floor() as usize
}

/// Resizes the surface to the viewport, paints the background, then one
/// grid-snapped square per index.
pub fn draw<S: Surface>(surface: &mut S, frame: &Frame<'_>) {
    let vp = frame.viewport;
    surface.set_size(vp.width, vp.height);
    surface.fill(frame.background);

    if frame.path.is_empty() {
        return;
    }
    for i in 0..frame.num_squares {
        let idx = path_index(
            frame.frame_count,
            i,
            frame.total_points,
            frame.num_squares,
            frame.path.len(),
        );
        let pos = frame.path[idx];
        let x = snap(pos.x, vp.grid_size);
        let y = snap(pos.y, vp.grid_size);
        surface.fill_rect(
            x + SQUARE_OFFSET_X,
            y,
            vp.grid_size,
            vp.grid_size,
            &square_color(i),
        );
    }
}
