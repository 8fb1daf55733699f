//! Raster targets the renderer draws into.

/// A 2D surface with settable pixel size and solid rectangle fills.
/// Colours are CSS colour strings.
pub trait Surface {
    /// Resizes the backing store. Like a canvas, this discards its contents.
    fn set_size(&mut self, width: u32, height: u32);

    fn size(&self) -> (u32, u32);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);

    /// Fills the whole surface.
    fn fill(&mut self, color: &str) {
        let (w, h) = self.size();
        self.fill_rect(0.0, 0.0, w as f64, h as f64, color);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FillRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

/// Headless surface that records fills in paint order.
#[derive(Debug, Default, Clone)]
pub struct DisplayList {
    width: u32,
    height: u32,
    commands: Vec<FillRect>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[FillRect] {
        &self.commands
    }
}

impl Surface for DisplayList {
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.commands.push(FillRect {
            x,
            y,
            width,
            height,
            color: color.to_owned(),
        });
    }
}
