#![cfg(target_arch = "wasm32")]
use haunt_core::{Config, TrackingState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod frame;
mod geoloc;
mod map;
mod readout;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("haunt-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = Rc::new(Config::default());
    config.validate()?;

    let canvas_el = document
        .get_element_by_id("radar-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #radar-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    wire_canvas_resize(&canvas);
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{e:?}"))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    let state = Rc::new(RefCell::new(TrackingState::new(config.target)));
    let player = Rc::new(RefCell::new(audio::FootstepPlayer::new()));

    map::place_target(config.target);

    ui::wire(&ui::UiWiring {
        document: document.clone(),
        config: config.clone(),
        state: state.clone(),
        player: player.clone(),
    });

    // A failed subscription is non-fatal: the radar keeps animating with
    // grid and sweep only.
    if let Err(e) = geoloc::watch_position(geoloc::GeoWiring {
        document,
        config: config.clone(),
        state: state.clone(),
        player,
    }) {
        log::error!("geolocation wiring failed: {e:?}");
    }

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        ctx,
        state,
        config,
        started: Instant::now(),
    })));

    log::info!("haunt-web ready");
    Ok(())
}
