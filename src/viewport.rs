//! Feeds the stage size into a [`ViewportSource`] on window resize.

use crate::dom;
use gloo::events::EventListener;
use idcard_core::ViewportSource;
use web_sys as web;

pub struct StageViewport {
    source: ViewportSource,
    _resize: EventListener,
}

impl StageViewport {
    pub fn new(window: &web::Window, stage: &web::Element) -> Self {
        let source = ViewportSource::new(dom::element_viewport(stage));
        let resize = EventListener::new(window, "resize", {
            let source = source.clone();
            let stage = stage.clone();
            move |_| {
                if stage.is_connected() {
                    source.set(dom::element_viewport(&stage));
                }
            }
        });
        Self {
            source,
            _resize: resize,
        }
    }

    pub fn source(&self) -> &ViewportSource {
        &self.source
    }
}
