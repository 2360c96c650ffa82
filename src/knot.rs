//! Decorative knot viewer on `#knot-canvas`.
//!
//! Runs its own continuous frame loop; a missing WebGPU adapter only disables
//! the viewer, the card keeps working.

use crate::constants::KNOT_CANVAS_ID;
use crate::dom;
use crate::frame::FrameLoop;
use crate::render::GpuState;
use web_sys as web;

pub struct KnotViewer {
    frame: FrameLoop,
}

impl KnotViewer {
    pub async fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::element_by_id(document, KNOT_CANVAS_ID)?;
        dom::sync_canvas_backing_size(&canvas);
        let mut gpu = GpuState::new(&canvas).await?;

        let frame = FrameLoop::new(move |dt| {
            if !canvas.is_connected() {
                return false;
            }
            let (w, h) = dom::sync_canvas_backing_size(&canvas);
            gpu.resize_if_needed(w, h);
            match gpu.render(dt) {
                Ok(()) => true,
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    gpu.reconfigure();
                    true
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[knot] out of GPU memory, stopping");
                    false
                }
                Err(e) => {
                    log::warn!("[knot] frame skipped: {:?}", e);
                    true
                }
            }
        });
        frame.request();
        log::info!("[knot] viewer running");
        Ok(Self { frame })
    }
}

impl Drop for KnotViewer {
    fn drop(&mut self) {
        self.frame.stop();
    }
}
