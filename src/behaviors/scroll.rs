//! Coalesced scroll tick: a trailing debounce gates scheduling, then at most one
//! animation frame is pending at a time. Each frame runs the polling scrollspy
//! and the back-to-top check.

use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::{back_to_top, scrollspy};
use crate::controller::PageController;
use crate::error::PageError;
use crate::state::{Debouncer, FrameGate};

struct ScrollPipeline {
    debounce: Debouncer,
    frame: FrameGate,
}

pub fn wire(ctl: &Rc<PageController>) -> Result<(), PageError> {
    let pipeline = Rc::new(ScrollPipeline {
        debounce: Debouncer::new(ctl.cfg.scrollspy_debounce_ms),
        frame: FrameGate::default(),
    });
    let ctl_cb = ctl.clone();
    ctl.listen(&ctl.window, "scroll", move |_| {
        let ctl_tick = ctl_cb.clone();
        let pipeline_tick = pipeline.clone();
        pipeline
            .debounce
            .schedule(move || request_frame(&ctl_tick, &pipeline_tick));
    })
}

fn request_frame(ctl: &Rc<PageController>, pipeline: &Rc<ScrollPipeline>) {
    if !pipeline.frame.claim() {
        return;
    }
    let ctl_frame = ctl.clone();
    let pipeline_frame = pipeline.clone();
    let frame = Closure::once_into_js(move || {
        scrollspy::update_from_scroll(&ctl_frame);
        back_to_top::update(&ctl_frame);
        pipeline_frame.frame.release();
    });
    if ctl.window.request_animation_frame(frame.unchecked_ref()).is_err() {
        pipeline.frame.release();
    }
}
