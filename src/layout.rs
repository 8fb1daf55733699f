/// Canvas height the control-point coordinates are authored against.
pub const REFERENCE_SIZE: f64 = 720.0;

/// Grid cell sizes, indexed by the random grid index. The first four are the
/// reachable ones, since the index is drawn from `[0, 4)`.
pub const GRID_SIZES: [f64; 5] = [120.0, 80.0, 60.0, 40.0, 20.0];

/// Number of grid sizes the random index chooses among.
pub const GRID_CHOICES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
    pub grid_size: f64,
}

impl ViewportConfig {
    /// Lays out a square canvas fitting the host viewport.
    ///
    /// With `scale_grid` the cell size follows the viewport scale; otherwise
    /// it stays at its table value whatever the canvas size.
    pub fn measure(host_width: f64, host_height: f64, grid_index: usize, scale_grid: bool) -> Self {
        let size = host_width.min(host_height).max(0.0);
        let scale = size / REFERENCE_SIZE;
        let base = grid_size(grid_index);
        Self {
            width: size as u32,
            height: size as u32,
            scale,
            grid_size: if scale_grid { base * scale } else { base },
        }
    }
}

/// Table lookup; indices past the end fall back to the coarsest grid.
pub fn grid_size(grid_index: usize) -> f64 {
    GRID_SIZES.get(grid_index).copied().unwrap_or(GRID_SIZES[0])
}

/// Rounds `v` down to a multiple of `grid`.
pub fn snap(v: f64, grid: f64) -> f64 {
    (v / grid).floor() * grid
}
