use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Window};

use super::CanvasSurface;
use crate::sketch::Sketch;
use crate::surface::Surface;

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Current `(innerWidth, innerHeight)`.
pub fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let w = window.inner_width()?.as_f64().ok_or("innerWidth is not a number")?;
    let h = window.inner_height()?.as_f64().ok_or("innerHeight is not a number")?;
    Ok((w, h))
}

/// Hooks window resizes and runs the frame loop until the page goes away.
///
/// The first frame is drawn immediately. Each tick draws a frame, waits the
/// configured delay, then asks for the next animation frame.
pub fn start(surface: CanvasSurface, sketch: Sketch) -> Result<(), JsValue> {
    let win = window().ok_or("no window")?;
    let delay_ms = sketch.config().frame_delay_ms;
    let sketch = Rc::new(RefCell::new(sketch));
    let surface = Rc::new(RefCell::new(surface));

    let resize_closure = {
        let sketch = sketch.clone();
        let surface = surface.clone();
        let win = win.clone();
        Closure::wrap(Box::new(move || match viewport_size(&win) {
            Ok((w, h)) => {
                let vp = sketch.borrow_mut().handle_resize(w, h);
                surface.borrow_mut().set_size(vp.width, vp.height);
            }
            Err(err) => log::error!("resize: {err:?}"),
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // The two callbacks refer to each other: the frame callback arms the
    // timer, the timer requests the next frame. Each lives in an `Option`
    // so it can be created before the other one exists.
    let on_frame: Callback = Rc::new(RefCell::new(None));
    let on_timeout: Callback = Rc::new(RefCell::new(None));

    *on_timeout.borrow_mut() = Some({
        let on_frame = on_frame.clone();
        let win = win.clone();
        Closure::wrap(Box::new(move || {
            if let Err(err) = request_frame(&win, &on_frame) {
                log::error!("requestAnimationFrame: {err:?}");
            }
        }) as Box<dyn FnMut()>)
    });

    *on_frame.borrow_mut() = Some({
        let on_timeout = on_timeout.clone();
        let win = win.clone();
        let sketch = sketch.clone();
        let surface = surface.clone();
        Closure::wrap(Box::new(move || {
            sketch.borrow_mut().advance(&mut *surface.borrow_mut());
            if let Err(err) = arm_timeout(&win, &on_timeout, delay_ms) {
                log::error!("setTimeout: {err:?}");
            }
        }) as Box<dyn FnMut()>)
    });

    // first frame is drawn right away, later ones wait for the timer
    sketch.borrow_mut().advance(&mut *surface.borrow_mut());
    arm_timeout(&win, &on_timeout, delay_ms)
}

fn arm_timeout(win: &Window, cb: &Callback, delay_ms: i32) -> Result<(), JsValue> {
    let cb = cb.borrow();
    let cb = cb.as_ref().ok_or("timer callback not set")?;
    win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay_ms)?;
    Ok(())
}

fn request_frame(win: &Window, cb: &Callback) -> Result<(), JsValue> {
    let cb = cb.borrow();
    let cb = cb.as_ref().ok_or("frame callback not set")?;
    win.request_animation_frame(cb.as_ref().unchecked_ref())?;
    Ok(())
}
