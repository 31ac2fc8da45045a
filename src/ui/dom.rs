//! DOM side of the screen flow (WASM only)

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use super::screens::{Screen, Transition, gallery_entries};
use crate::consts::GALLERY_ASSEMBLE_DELAY_MS;

const ACTIVE: &str = "active";
const HIDDEN: &str = "hidden";

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn element(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

fn show(el: &Element) {
    let classes = el.class_list();
    classes.remove_1(HIDDEN).ok();
    classes.add_1(ACTIVE).ok();
}

fn hide(el: &Element) {
    let classes = el.class_list();
    classes.remove_1(ACTIVE).ok();
    classes.add_1(HIDDEN).ok();
}

fn screen_element(screen: Screen) -> Option<Element> {
    screen.element_id().and_then(element)
}

/// Swap the overlay elements for a transition
pub fn apply_transition(transition: Transition, hud_visible: bool) {
    if let Some(el) = screen_element(transition.from) {
        hide(&el);
    }
    if let Some(el) = screen_element(transition.to) {
        show(&el);
    }
    if !hud_visible {
        if let Some(hud) = element("ui-layer") {
            hud.class_list().add_1(HIDDEN).ok();
        }
    }
    if transition.to == Screen::Gallery {
        load_gallery();
    }
}

/// Run `f` once after `delay_ms`
pub fn after(delay_ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(f);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    closure.forget();
}

/// Love meter fill width
pub fn set_meter(percent: f32) {
    let Some(fill) = element("love-fill").and_then(|e| e.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    fill.style().set_property("width", &format!("{}%", percent)).ok();
}

/// Rebuild the gallery grid; tiles carry `data-photo` for the click handler
pub fn load_gallery() {
    let (Some(doc), Some(grid)) = (document(), element("gallery-grid")) else {
        return;
    };
    grid.set_inner_html("");
    grid.class_list().remove_1("photos-assembled").ok();

    for entry in gallery_entries() {
        let Ok(img) = doc
            .create_element("img")
            .map(|e| e.unchecked_into::<HtmlImageElement>())
        else {
            continue;
        };
        img.set_src(&entry.src);
        img.set_alt(&entry.alt);
        img.set_class_name("gallery-photo");
        img.set_attribute("data-photo", entry.name).ok();
        grid.append_child(&img).ok();
    }

    after(GALLERY_ASSEMBLE_DELAY_MS, move || {
        grid.class_list().add_1("photos-assembled").ok();
    });
}

pub fn show_photo_modal(src: &str) {
    if let Some(img) = element("modal-photo").and_then(|e| e.dyn_into::<HtmlImageElement>().ok()) {
        img.set_src(src);
    }
    if let Some(modal) = element("photo-modal") {
        modal.class_list().add_1(ACTIVE).ok();
    }
}

pub fn hide_photo_modal() {
    if let Some(modal) = element("photo-modal") {
        modal.class_list().remove_1(ACTIVE).ok();
    }
}

/// Attach a click handler to the element with `id`, if present
pub fn on_click(id: &str, mut f: impl FnMut(web_sys::MouseEvent) + 'static) {
    let Some(el) = element(id) else {
        log::warn!("No #{} element; handler not attached", id);
        return;
    };
    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| f(event));
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
