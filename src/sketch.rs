//! Sketch state: everything derived from the seed plus the running frame
//! counter, owned by whoever drives the animation.

use crate::config::{ColorSource, ConfigError, SketchConfig};
use crate::curve::Point;
use crate::frame::{self, Frame};
use crate::layout::{ViewportConfig, GRID_CHOICES};
use crate::palette;
use crate::path::{self, ControlRatios};
use crate::rng::Lcg;
use crate::surface::Surface;

#[derive(Debug, Clone)]
pub struct Sketch {
    config: SketchConfig,
    grid_index: usize,
    background: String,
    /// `None` for an unseeded sketch, which has no path.
    ratios: Option<ControlRatios>,
    viewport: ViewportConfig,
    path: Vec<Point>,
    frame_count: u64,
}

impl Sketch {
    /// Draws the grid index, the palette index and the twelve control-point
    /// ratios from the seed, in that order, then lays out and samples the
    /// path for the given host viewport.
    ///
    /// Without a seed the first table entries are used and the path is
    /// empty, so frames show the background alone.
    pub fn new(config: SketchConfig, host_width: f64, host_height: f64) -> Result<Self, ConfigError> {
        config.validate()?;

        let (grid_index, palette_index, ratios) = match config.seed {
            Some(seed) => {
                let mut rng = Lcg::new(seed);
                let grid_index = rng.next_index(GRID_CHOICES);
                let palette_index = rng.next_index(palette::BACKGROUNDS.len());
                (grid_index, palette_index, Some(ControlRatios::draw(&mut rng)))
            }
            None => (0, 0, None),
        };

        let background = match &config.profile.background {
            ColorSource::Table => palette::background(palette_index).to_owned(),
            ColorSource::External(color) => color.clone(),
        };
        let viewport = ViewportConfig::measure(
            host_width,
            host_height,
            grid_index,
            config.profile.scale_grid_with_viewport,
        );
        let path = trace(ratios.as_ref(), viewport.scale, config.total_points);

        Ok(Self {
            config,
            grid_index,
            background,
            ratios,
            viewport,
            path,
            frame_count: 0,
        })
    }

    /// Re-lays out the canvas for a new host size. The path is only rebuilt
    /// when the profile asks for it.
    pub fn handle_resize(&mut self, host_width: f64, host_height: f64) -> ViewportConfig {
        self.viewport = ViewportConfig::measure(
            host_width,
            host_height,
            self.grid_index,
            self.config.profile.scale_grid_with_viewport,
        );
        if self.config.profile.rebuild_path_on_resize {
            self.path = trace(self.ratios.as_ref(), self.viewport.scale, self.config.total_points);
        }
        log::debug!(
            "resized to {}x{} (scale {:.3}, grid {:.1}, path rebuilt: {})",
            self.viewport.width,
            self.viewport.height,
            self.viewport.scale,
            self.viewport.grid_size,
            self.config.profile.rebuild_path_on_resize,
        );
        self.viewport
    }

    /// One animation tick: bumps the frame counter and redraws.
    pub fn advance<S: Surface>(&mut self, surface: &mut S) {
        self.frame_count += 1;
        self.draw(surface);
    }

    /// Redraws the current frame without advancing.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        frame::draw(
            surface,
            &Frame {
                frame_count: self.frame_count,
                path: &self.path,
                viewport: &self.viewport,
                background: &self.background,
                total_points: self.config.total_points,
                num_squares: self.config.num_squares,
            },
        );
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn grid_index(&self) -> usize {
        self.grid_index
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn viewport(&self) -> &ViewportConfig {
        &self.viewport
    }

    pub fn path(&self) -> &[Point] {
        &self.path
    }
}

fn trace(ratios: Option<&ControlRatios>, scale: f64, total_points: usize) -> Vec<Point> {
    ratios
        .map(|r| path::build(&r.scaled(scale), total_points))
        .unwrap_or_default()
}
