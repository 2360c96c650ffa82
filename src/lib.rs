#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use idcard_core::CardConfig;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod card;
mod constants;
mod dom;
mod editor;
mod frame;
mod input;
mod knot;
mod render;
mod viewport;

use constants::STAGE_ID;

struct App {
    // Declaration order is drop order: widgets go before the viewport source.
    card: card::CardWidget,
    editor: Option<editor::Editor>,
    knot: Option<knot::KnotViewer>,
    stage: viewport::StageViewport,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("idcard-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    if APP.with(|app| app.borrow().is_some()) {
        log::warn!("already mounted");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    let stage_el: web::Element = dom::element_by_id(&document, STAGE_ID)?;
    let stage = viewport::StageViewport::new(&window, &stage_el);
    let card = card::CardWidget::mount(&document, CardConfig::default(), stage.source())?;
    let editor = match editor::Editor::mount(&document) {
        Ok(editor) => {
            log::info!("[profile] edit mode ready ({} listeners)", editor.listener_count());
            Some(editor)
        }
        Err(e) => {
            log::warn!("edit mode unavailable: {e:#}");
            None
        }
    };
    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            card,
            editor,
            knot: None,
            stage,
        })
    });

    // The card is interactive already; the GPU viewer attaches when ready.
    match knot::KnotViewer::mount(&document).await {
        Ok(viewer) => APP.with(|app| {
            if let Some(app) = app.borrow_mut().as_mut() {
                app.knot = Some(viewer);
            }
        }),
        Err(e) => log::warn!("knot viewer disabled: {e:#}"),
    }
    Ok(())
}

/// Display name from the edited profile, if the editor is mounted.
#[wasm_bindgen]
pub fn profile_name() -> Option<String> {
    APP.with(|app| {
        app.borrow()
            .as_ref()
            .and_then(|app| app.editor.as_ref())
            .map(|editor| editor.fields().name)
    })
}

/// Release every listener, frame loop and GPU resource. Safe to call twice.
#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|app| app.borrow_mut().take());
    if let Some(App {
        card,
        editor,
        knot,
        stage,
    }) = app
    {
        drop(knot);
        drop(editor);
        card.unmount();
        drop(stage);
        log::info!("idcard-web unmounted");
    }
}
