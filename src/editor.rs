//! In-place edit mode for the card's text fields.
//!
//! Markup contract, all scoped to `#id-card`:
//! - `data-<key>` attributes on the card seed the initial values;
//! - `[data-field=<key>]` inputs or textareas write into the profile;
//! - `[data-display=<key>]` nodes mirror the current value (anchors also get
//!   their `href` refreshed);
//! - `#edit-toggle` flips between display and edit mode.

use crate::constants::*;
use crate::dom;
use gloo::events::EventListener;
use idcard_core::{EditState, ProfileField, ProfileFields};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Editor {
    state: Rc<RefCell<EditState>>,
    listeners: Vec<EventListener>,
}

impl Editor {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let card: web::HtmlElement = dom::element_by_id(document, CARD_ID)?;
        let toggle: web::HtmlElement = dom::element_by_id(document, EDIT_TOGGLE_ID)?;

        let initial = initial_fields(&card);
        let state = Rc::new(RefCell::new(EditState::new(initial).with_on_change(
            |fields: &ProfileFields| {
                log::info!(
                    "[profile] updated: name={:?} role={:?} email={:?}",
                    fields.name,
                    fields.role,
                    fields.email
                );
            },
        )));

        let displays = Rc::new(display_nodes(&card));
        for field in ProfileField::ALL {
            refresh_field(&displays, state.borrow().fields(), field);
        }

        let mut listeners = Vec::new();
        for el in dom::query_all(&card, &format!("[{FIELD_ATTR}]")) {
            let Some(field) = el.get_attribute(FIELD_ATTR).and_then(|k| ProfileField::from_key(&k))
            else {
                log::warn!("[profile] ignoring input with unknown {FIELD_ATTR}");
                continue;
            };
            set_control_value(&el, state.borrow().fields().get(field));
            listeners.push(EventListener::new(&el, "input", {
                let state = state.clone();
                let displays = displays.clone();
                let el = el.clone();
                move |_| {
                    let Some(value) = control_value(&el) else {
                        return;
                    };
                    let changed = state.borrow_mut().set_field(field, &value);
                    if changed {
                        refresh_field(&displays, state.borrow().fields(), field);
                    }
                }
            }));
        }

        listeners.push(EventListener::new(&toggle, "click", {
            let state = state.clone();
            let card = card.clone();
            let toggle = toggle.clone();
            move |_| {
                let editing = state.borrow_mut().toggle_editing();
                apply_mode(&card, &toggle, editing);
            }
        }));
        apply_mode(&card, &toggle, state.borrow().is_editing());

        Ok(Self { state, listeners })
    }

    pub fn fields(&self) -> ProfileFields {
        self.state.borrow().fields().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

fn initial_fields(card: &web::HtmlElement) -> ProfileFields {
    let mut state = EditState::new(ProfileFields::default());
    let data = card.dataset();
    for field in ProfileField::ALL {
        if let Some(value) = data.get(field.key()) {
            state.set_field(field, &value);
        }
    }
    state.fields().clone()
}

fn display_nodes(card: &web::HtmlElement) -> Vec<(ProfileField, web::Element)> {
    dom::query_all(card, &format!("[{DISPLAY_ATTR}]"))
        .into_iter()
        .filter_map(|el| {
            let field = ProfileField::from_key(&el.get_attribute(DISPLAY_ATTR)?)?;
            Some((field, el))
        })
        .collect()
}

fn refresh_field(
    displays: &[(ProfileField, web::Element)],
    fields: &ProfileFields,
    field: ProfileField,
) {
    let href = fields.href(field);
    for (_, el) in displays.iter().filter(|(f, _)| *f == field) {
        el.set_text_content(Some(fields.get(field)));
        if let Some(href) = href.as_deref() {
            if el.tag_name().eq_ignore_ascii_case("a") {
                dom::set_attr(el, "href", href);
            }
        }
    }
}

fn apply_mode(card: &web::HtmlElement, toggle: &web::HtmlElement, editing: bool) {
    dom::toggle_class(card, EDITING_CLASS, editing);
    toggle.set_text_content(Some(if editing { DONE_LABEL } else { EDIT_LABEL }));
    dom::set_attr(toggle, "aria-pressed", if editing { "true" } else { "false" });
}

fn control_value(el: &web::Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        Some(input.value())
    } else {
        el.dyn_ref::<web::HtmlTextAreaElement>().map(|area| area.value())
    }
}

fn set_control_value(el: &web::Element, value: &str) {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.set_value(value);
    }
}
