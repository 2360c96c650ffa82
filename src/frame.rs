//! `requestAnimationFrame` driver measuring real elapsed time per frame.
//!
//! The loop runs while its step callback returns `true` and goes idle
//! otherwise; input handlers re-arm it with [`FrameLoop::request`]. Dropping
//! the pending [`AnimationFrame`] cancels it, so [`FrameLoop::stop`] is all
//! teardown needs.

use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type StepFn = Box<dyn FnMut(f32) -> bool>;

struct FrameState {
    handle: RefCell<Option<AnimationFrame>>,
    last: Cell<Option<Instant>>,
    stopped: Cell<bool>,
    step: RefCell<StepFn>,
}

#[derive(Clone)]
pub struct FrameLoop {
    state: Rc<FrameState>,
}

impl FrameLoop {
    pub fn new(step: impl FnMut(f32) -> bool + 'static) -> Self {
        Self {
            state: Rc::new(FrameState {
                handle: RefCell::new(None),
                last: Cell::new(None),
                stopped: Cell::new(false),
                step: RefCell::new(Box::new(step)),
            }),
        }
    }

    /// Schedule a frame unless one is already pending.
    pub fn request(&self) {
        FrameState::arm(&self.state);
    }

    /// Cancel the pending frame; later `request` calls are ignored.
    pub fn stop(&self) {
        self.state.stopped.set(true);
        self.state.handle.borrow_mut().take();
        self.state.last.set(None);
    }
}

impl FrameState {
    fn arm(this: &Rc<Self>) {
        if this.stopped.get() || this.handle.borrow().is_some() {
            return;
        }
        if this.last.get().is_none() {
            this.last.set(Some(Instant::now()));
        }
        let weak = Rc::downgrade(this);
        let handle = request_animation_frame(move |_| {
            if let Some(state) = weak.upgrade() {
                FrameState::run(&state);
            }
        });
        *this.handle.borrow_mut() = Some(handle);
    }

    fn run(this: &Rc<Self>) {
        this.handle.borrow_mut().take();
        if this.stopped.get() {
            return;
        }
        let now = Instant::now();
        let dt = this
            .last
            .replace(Some(now))
            .map(|prev| (now - prev).as_secs_f32())
            .unwrap_or(0.0);
        let keep_going = {
            let mut step = this.step.borrow_mut();
            (*step)(dt)
        };
        if keep_going {
            FrameState::arm(this);
        } else {
            this.last.set(None);
        }
    }
}
