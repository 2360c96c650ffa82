//! Host-supplied viewport dimensions with drop-scoped subscriptions.
//!
//! Nothing in the core reads window globals; the host owns a
//! [`ViewportSource`], pushes sizes into it, and consumers hold a
//! [`Subscription`] for as long as they want updates.

use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    /// Non-finite or negative sizes collapse to zero.
    pub fn new(width: f32, height: f32) -> Self {
        let sane = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: sane(width),
            height: sane(height),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

type Listener = Box<dyn FnMut(Viewport)>;

struct Inner {
    current: Viewport,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    // Ids dropped while their listener was out for notification.
    dropped: Vec<u64>,
}

#[derive(Clone)]
pub struct ViewportSource {
    inner: Rc<RefCell<Inner>>,
}

impl ViewportSource {
    pub fn new(initial: Viewport) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                current: initial,
                next_id: 0,
                listeners: Vec::new(),
                dropped: Vec::new(),
            })),
        }
    }

    pub fn current(&self) -> Viewport {
        self.inner.borrow().current
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Register `listener`; it is called immediately with the current size
    /// and again on every change until the returned handle is dropped.
    pub fn subscribe(&self, mut listener: impl FnMut(Viewport) + 'static) -> Subscription {
        let current = self.current();
        listener(current);
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Box::new(listener)));
        Subscription {
            id,
            source: Rc::downgrade(&self.inner),
        }
    }

    /// Store a new size and notify subscribers. Unchanged sizes are dropped.
    pub fn set(&self, viewport: Viewport) {
        // Take the listeners out so a callback may subscribe or read `current`.
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.current == viewport {
                return;
            }
            inner.current = viewport;
            std::mem::take(&mut inner.listeners)
        };
        for (_, listener) in listeners.iter_mut() {
            listener(viewport);
        }
        let mut inner = self.inner.borrow_mut();
        listeners.append(&mut inner.listeners);
        let dropped = std::mem::take(&mut inner.dropped);
        listeners.retain(|(id, _)| !dropped.contains(id));
        inner.listeners = listeners;
    }
}

/// Keeps a viewport listener registered; dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    source: Weak<RefCell<Inner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.source.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                let before = inner.listeners.len();
                inner.listeners.retain(|(id, _)| *id != self.id);
                if inner.listeners.len() == before {
                    inner.dropped.push(self.id);
                }
            }
        }
    }
}
