//! The animation side of the system: a `requestAnimationFrame` loop that
//! redraws the radar every display refresh from the latest state snapshot,
//! no matter when (or whether) a fix last arrived.

use glam::Vec2;
use haunt_core::radar::{RadarScene, BLOB_GLOW_RADIUS_PX, SWEEP_WIDTH_RAD};
use haunt_core::{Config, TrackingState};
use instant::Instant;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub state: Rc<RefCell<TrackingState>>,
    pub config: Rc<Config>,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let width = self.canvas.width() as f32;
        let height = self.canvas.height() as f32;
        let snapshot = self.state.borrow().snapshot();
        let scene = RadarScene::compose(
            width,
            height,
            self.started.elapsed().as_secs_f64(),
            snapshot.reading,
            &self.config,
        );
        draw_scene(&self.ctx, f64::from(width), f64::from(height), &scene);
    }
}

fn draw_scene(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64, scene: &RadarScene) {
    let cx = f64::from(scene.center.x);
    let cy = f64::from(scene.center.y);

    ctx.set_fill_style_str("#000");
    ctx.fill_rect(0.0, 0.0, width, height);

    // Fixed grid: concentric rings plus crosshair axes.
    ctx.set_stroke_style_str("#0f0");
    ctx.set_line_width(1.0);
    for radius in scene.ring_radii {
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, f64::from(radius), 0.0, TAU);
        ctx.stroke();
    }
    ctx.begin_path();
    ctx.move_to(0.0, cy);
    ctx.line_to(width, cy);
    ctx.move_to(cx, 0.0);
    ctx.line_to(cx, height);
    ctx.stroke();

    // Rotating sweep wedge, purely clock-driven.
    ctx.set_fill_style_str("rgba(0, 255, 0, 0.1)");
    ctx.begin_path();
    ctx.move_to(cx, cy);
    let _ = ctx.arc(
        cx,
        cy,
        f64::from(scene.max_radius),
        f64::from(scene.sweep_angle - SWEEP_WIDTH_RAD),
        f64::from(scene.sweep_angle),
    );
    ctx.close_path();
    ctx.fill();

    if let Some(blob) = scene.blob {
        draw_blob(ctx, blob);
    }
}

fn draw_blob(ctx: &web::CanvasRenderingContext2d, blob: Vec2) {
    let x = f64::from(blob.x);
    let y = f64::from(blob.y);
    let glow = f64::from(BLOB_GLOW_RADIUS_PX);
    let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, glow) else {
        return;
    };
    let _ = gradient.add_color_stop(0.0, "rgba(255, 0, 0, 1)");
    let _ = gradient.add_color_stop(0.5, "rgba(255, 0, 0, 0.5)");
    let _ = gradient.add_color_stop(1.0, "rgba(255, 0, 0, 0)");
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    let _ = ctx.arc(x, y, glow, 0.0, TAU);
    ctx.fill();
}

/// Runs until page teardown, rescheduling itself on every display refresh.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
