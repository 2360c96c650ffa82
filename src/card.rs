//! DOM binding for the draggable card, its tether and the pointer tilt.
//!
//! The tilt is written to `#card-tilt` inside `#card-stage`; the stage is
//! only ever measured, so its rect is free of the tilt transform.
//!
//! All DOM listeners and the pending animation frame belong to
//! [`CardWidget`]; dropping it (or calling [`CardWidget::unmount`]) removes
//! them and disposes the controller.

use crate::constants::*;
use crate::dom;
use crate::frame::FrameLoop;
use crate::input::{self, PointerDrag};
use gloo::events::{EventListener, EventListenerOptions};
use glam::Vec2;
use idcard_core::{
    CardConfig, CardController, DistortionSink, Subscription, TiltController, ViewportSource,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Publishes the card distortion as CSS custom properties.
struct CssDistortion {
    el: web::HtmlElement,
}

impl DistortionSink for CssDistortion {
    fn set_distortion(&mut self, x: f32, y: f32) {
        dom::set_style(&self.el, DISTORT_X_VAR, &format!("{x:.4}"));
        dom::set_style(&self.el, DISTORT_Y_VAR, &format!("{y:.4}"));
    }
}

struct Shared {
    card: web::HtmlElement,
    stage: web::HtmlElement,
    tilt_el: web::HtmlElement,
    tether_path: web::Element,
    controller: RefCell<CardController>,
    tilt: RefCell<TiltController>,
    drag: RefCell<PointerDrag>,
}

impl Shared {
    /// One animation frame. Returns whether another frame is wanted.
    fn step(&self, dt: f32) -> bool {
        if !self.card.is_connected() {
            return false;
        }
        self.controller.borrow_mut().tick(dt);
        self.tilt.borrow_mut().tick(dt);
        self.render();
        !(self.controller.borrow().is_at_rest() && self.tilt.borrow().is_at_rest())
    }

    fn render(&self) {
        let controller = self.controller.borrow();
        let visual = controller.compute_visual_state();
        dom::set_style(&self.card, "transform", &input::card_transform_css(&visual));

        let tilt = self.tilt.borrow().state();
        dom::set_style(
            &self.tilt_el,
            "transform",
            &input::tilt_transform_css(&tilt, TILT_PERSPECTIVE_PX),
        );

        let tether = controller.compute_tether(controller.anchor());
        dom::set_attr(&self.tether_path, "d", &tether.to_svg_path());
        dom::set_attr(
            &self.tether_path,
            "stroke-width",
            &tether.stroke_width.to_string(),
        );
        dom::set_attr(&self.tether_path, "stroke", &controller.config().tether.color);
    }

    fn release(&self, pointer_id: i32) -> bool {
        if !self.drag.borrow_mut().end(pointer_id) {
            return false;
        }
        if self.card.has_pointer_capture(pointer_id) {
            let _ = self.card.release_pointer_capture(pointer_id);
        }
        self.controller.borrow_mut().end_drag();
        self.tilt.borrow_mut().set_interacting(false);
        dom::toggle_class(&self.card, DRAGGING_CLASS, false);
        true
    }
}

pub struct CardWidget {
    shared: Rc<Shared>,
    frame: FrameLoop,
    listeners: Vec<EventListener>,
    viewport: Option<Subscription>,
}

impl CardWidget {
    pub fn mount(
        document: &web::Document,
        config: CardConfig,
        viewport: &ViewportSource,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        let card: web::HtmlElement = dom::element_by_id(document, CARD_ID)?;
        let stage: web::HtmlElement = dom::element_by_id(document, STAGE_ID)?;
        let tilt_el: web::HtmlElement = dom::element_by_id(document, TILT_ID)?;
        let tether_path: web::Element = dom::element_by_id(document, TETHER_PATH_ID)?;

        let tilt = TiltController::new(config.tilt);
        let mut controller = CardController::new(config);
        controller.set_distortion_sink(Box::new(CssDistortion { el: card.clone() }));

        let shared = Rc::new(Shared {
            card,
            stage,
            tilt_el,
            tether_path,
            controller: RefCell::new(controller),
            tilt: RefCell::new(tilt),
            drag: RefCell::new(PointerDrag::default()),
        });

        let frame = FrameLoop::new({
            let shared = shared.clone();
            move |dt| shared.step(dt)
        });

        // Fires immediately with the current size, which also paints the
        // first frame.
        let subscription = viewport.subscribe({
            let shared = shared.clone();
            let frame = frame.clone();
            move |size| {
                shared.controller.borrow_mut().set_viewport(size);
                frame.request();
            }
        });

        let listeners = install_listeners(&shared, &frame);
        log::info!("[card] mounted with {} listeners", listeners.len());

        Ok(Self {
            shared,
            frame,
            listeners,
            viewport: Some(subscription),
        })
    }

    /// Explicit teardown; same as dropping the widget.
    pub fn unmount(self) {}
}

impl Drop for CardWidget {
    fn drop(&mut self) {
        self.listeners.clear();
        self.viewport.take();
        self.frame.stop();
        self.shared.controller.borrow_mut().dispose();
        log::info!("[card] unmounted");
    }
}

fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn starts_on_control(ev: &web::PointerEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(NO_DRAG_SELECTOR).ok().flatten())
        .is_some()
}

fn install_listeners(shared: &Rc<Shared>, frame: &FrameLoop) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(7);
    let card = shared.card.clone();
    let stage = shared.stage.clone();

    listeners.push(EventListener::new_with_options(
        &card,
        "pointerdown",
        EventListenerOptions::enable_prevent_default(),
        {
            let shared = shared.clone();
            let frame = frame.clone();
            move |event| {
                let Some(ev) = event.dyn_ref::<web::PointerEvent>() else {
                    return;
                };
                if ev.button() != PRIMARY_BUTTON || starts_on_control(ev) {
                    return;
                }
                if !shared.drag.borrow_mut().begin(ev.pointer_id(), client_pos(ev)) {
                    return;
                }
                ev.prevent_default();
                if let Err(e) = shared.card.set_pointer_capture(ev.pointer_id()) {
                    log::debug!("[card] pointer capture refused: {:?}", e);
                }
                shared.controller.borrow_mut().begin_drag();
                shared.tilt.borrow_mut().set_interacting(true);
                dom::toggle_class(&shared.card, DRAGGING_CLASS, true);
                frame.request();
            }
        },
    ));

    listeners.push(EventListener::new(&card, "pointermove", {
        let shared = shared.clone();
        let frame = frame.clone();
        move |event| {
            let Some(ev) = event.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            if !shared.drag.borrow().is_active() {
                return;
            }
            let delta = shared.drag.borrow().delta(ev.pointer_id(), client_pos(ev));
            if let Some(delta) = delta {
                shared.controller.borrow_mut().update_drag(delta);
                frame.request();
            }
        }
    }));

    for kind in ["pointerup", "pointercancel", "lostpointercapture"] {
        listeners.push(EventListener::new(&card, kind, {
            let shared = shared.clone();
            let frame = frame.clone();
            move |event| {
                let Some(ev) = event.dyn_ref::<web::PointerEvent>() else {
                    return;
                };
                if shared.release(ev.pointer_id()) {
                    frame.request();
                }
            }
        }));
    }

    listeners.push(EventListener::new(&stage, "pointermove", {
        let shared = shared.clone();
        let frame = frame.clone();
        move |event| {
            let Some(ev) = event.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let rect = shared.stage.get_bounding_client_rect();
            let offset = input::offset_from_center(
                client_pos(ev),
                rect.left() as f32,
                rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
            );
            shared.tilt.borrow_mut().set_pointer(offset);
            frame.request();
        }
    }));

    listeners.push(EventListener::new(&stage, "pointerleave", {
        let shared = shared.clone();
        let frame = frame.clone();
        move |_| {
            shared.tilt.borrow_mut().clear_pointer();
            frame.request();
        }
    }));

    listeners
}
