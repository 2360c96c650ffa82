use anyhow::anyhow;
use idcard_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up `#id` and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{id} has an unexpected element type: {:?}", e))
}

/// Every element under `root` matching `selector`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("bad selector {selector:?}: {:?}", e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Write an inline style property. Detached elements are left alone.
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if !el.is_connected() {
        return;
    }
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("style {property} rejected: {:?}", e);
    }
}

/// Write an attribute. Detached elements are left alone.
pub fn set_attr(el: &web::Element, name: &str, value: &str) {
    if !el.is_connected() {
        return;
    }
    if let Err(e) = el.set_attribute(name, value) {
        log::warn!("attribute {name} rejected: {:?}", e);
    }
}

pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// CSS-pixel size of an element's layout box.
pub fn element_viewport(el: &web::Element) -> Viewport {
    let rect = el.get_bounding_client_rect();
    Viewport::new(rect.width() as f32, rect.height() as f32)
}

/// Match the canvas backing store to its CSS size times `devicePixelRatio`.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    (w_px, h_px)
}
