//! WebAudio playback collaborator for the footstep loop.
//!
//! The decision making lives in [`haunt_core::AudioFeedbackController`];
//! this module only executes its commands against an `AudioContext`. The
//! whole graph is built lazily on the first user-driven enable, since the
//! browser refuses to start audio outside a gesture.

use crate::constants::FOOTSTEPS_URL;
use haunt_core::{AudioCommand, AudioFeedbackController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct Backend {
    ctx: web::AudioContext,
    gain: web::GainNode,
    // Filled in by the async decode; playback self-heals once it lands.
    buffer: Rc<RefCell<Option<web::AudioBuffer>>>,
    source: Option<web::AudioBufferSourceNode>,
}

pub struct FootstepPlayer {
    controller: AudioFeedbackController,
    backend: Option<Backend>,
}

impl Default for FootstepPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl FootstepPlayer {
    pub fn new() -> Self {
        Self {
            controller: AudioFeedbackController::new(),
            backend: None,
        }
    }

    /// Builds the audio graph and kicks off the sample download. Must be
    /// called from a user gesture; safe to call more than once.
    pub fn ensure_backend(&mut self) {
        if self.backend.is_some() {
            return;
        }
        let ctx = match web::AudioContext::new() {
            Ok(c) => c,
            Err(e) => {
                log::error!("AudioContext error: {e:?}");
                return;
            }
        };
        let _ = ctx.resume();
        let gain = match web::GainNode::new(&ctx) {
            Ok(g) => g,
            Err(e) => {
                log::error!("GainNode error: {e:?}");
                return;
            }
        };
        gain.gain().set_value(0.0);
        if let Err(e) = gain.connect_with_audio_node(&ctx.destination()) {
            log::error!("connect error: {e:?}");
            return;
        }

        let buffer: Rc<RefCell<Option<web::AudioBuffer>>> = Rc::new(RefCell::new(None));
        {
            let ctx = ctx.clone();
            let slot = buffer.clone();
            spawn_local(async move {
                match load_sample(&ctx, FOOTSTEPS_URL).await {
                    Ok(buf) => {
                        log::info!("footstep sample decoded ({:.1} s)", buf.duration());
                        *slot.borrow_mut() = Some(buf);
                    }
                    Err(e) => log::error!("footstep sample load failed: {e}"),
                }
            });
        }

        log::info!("audio backend initialized");
        self.backend = Some(Backend {
            ctx,
            gain,
            buffer,
            source: None,
        });
    }

    /// Feeds the current observation through the decision table and executes
    /// whatever it asks for.
    pub fn update(&mut self, enabled: bool, volume: f64) {
        for command in self.controller.update(enabled, volume) {
            self.apply(command);
        }
        // A play issued before the sample finished decoding left no source
        // behind; retry on the next observation.
        if self.controller.is_active() {
            if let Some(backend) = &mut self.backend {
                if backend.source.is_none() {
                    backend.source = start_looped_source(backend);
                }
            }
        }
    }

    fn apply(&mut self, command: AudioCommand) {
        let Some(backend) = &mut self.backend else {
            log::warn!("audio command {command:?} before backend init");
            return;
        };
        match command {
            AudioCommand::Play => {
                backend.source = start_looped_source(backend);
            }
            AudioCommand::SetVolume(volume) => {
                backend.gain.gain().set_value(volume as f32);
            }
            AudioCommand::Stop => {
                if let Some(source) = backend.source.take() {
                    let _ = source.stop();
                }
                // Stop on this graph is synchronous.
                self.controller.confirm_stopped();
            }
        }
    }
}

fn start_looped_source(backend: &Backend) -> Option<web::AudioBufferSourceNode> {
    let buffer = backend.buffer.borrow();
    let Some(buffer) = buffer.as_ref() else {
        log::warn!("footstep sample still loading, playback deferred");
        return None;
    };
    let source = match web::AudioBufferSourceNode::new(&backend.ctx) {
        Ok(s) => s,
        Err(e) => {
            log::error!("AudioBufferSourceNode error: {e:?}");
            return None;
        }
    };
    source.set_buffer(Some(buffer));
    source.set_loop(true);
    if let Err(e) = source.connect_with_audio_node(&backend.gain) {
        log::error!("connect error: {e:?}");
        return None;
    }
    if let Err(e) = source.start() {
        log::error!("playback start error: {e:?}");
        return None;
    }
    Some(source)
}

async fn load_sample(ctx: &web::AudioContext, url: &str) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {e:?}"))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let array_buffer = JsFuture::from(
        response
            .array_buffer()
            .map_err(|e| anyhow::anyhow!("{e:?}"))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("read body: {e:?}"))?;
    let decoded = JsFuture::from(
        ctx.decode_audio_data(&array_buffer.unchecked_into())
            .map_err(|e| anyhow::anyhow!("{e:?}"))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("decode: {e:?}"))?;
    decoded
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| anyhow::anyhow!("{e:?}"))
}
