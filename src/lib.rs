//! Seeded generative sketch: a rainbow train of grid-snapped squares riding a
//! closed Bezier path over a square canvas.
//!
//! The generative core is target independent; the browser glue in `wasm` is
//! only compiled for `wasm32`.

pub mod config;
pub mod curve;
pub mod frame;
pub mod layout;
pub mod palette;
pub mod path;
pub mod rng;
pub mod sketch;
pub mod surface;

pub use config::{ColorSource, ConfigError, Profile, SketchConfig};
pub use sketch::Sketch;
pub use surface::{DisplayList, Surface};

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::config::SketchConfig;
    use crate::sketch::Sketch;

    mod canvas;
    mod render;

    pub use canvas::CanvasSurface;
    pub use render::start;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Debug).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let main = document
            .query_selector("main")?
            .ok_or("main element not found")?
            .dyn_into::<web_sys::HtmlElement>()?;
        let dataset = main.dataset();
        let config = SketchConfig::from_dataset(
            dataset.get("seed").as_deref(),
            dataset.get("color").as_deref(),
        );

        if let Some(wrapper) = document.get_element_by_id("w") {
            wrapper.set_class_name("");
        }

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        document
            .get_element_by_id("c")
            .ok_or("canvas container not found")?
            .append_child(&canvas)?;

        let (w, h) = render::viewport_size(&window)?;
        let sketch = Sketch::new(config, w, h).map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!(
            "seed {:?} ({:?}): grid {}, {} path points",
            sketch.config().seed,
            sketch.config().profile.background,
            sketch.viewport().grid_size,
            sketch.path().len(),
        );

        render::start(CanvasSurface::new(canvas)?, sketch)
    }
}
