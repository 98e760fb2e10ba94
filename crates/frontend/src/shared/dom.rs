//! Small wrappers over browser calls the page makes outside of Leptos views.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smoothly scroll the first element matching `selector` into view.
pub fn smooth_scroll_to(selector: &str, block: ScrollLogicalPosition) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(Some(target)) = document.query_selector(selector) else {
        log::debug!("scroll target `{}` not found", selector);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Blocking message box.
pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

pub fn print_page() {
    if let Some(w) = window() {
        if let Err(e) = w.print() {
            log::error!("print failed: {:?}", e);
        }
    }
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    if let Err(e) = body.class_list().toggle_with_force(class, enabled) {
        log::warn!("failed to toggle body class `{}`: {:?}", class, e);
    }
}

/// Ask for confirmation, then hand the number to the phone dialer.
pub fn quick_dial(number: &str) {
    let Some(w) = window() else { return };
    let confirmed = w
        .confirm_with_message(&format!("Do you want to call {}?", number))
        .unwrap_or(false);
    if confirmed {
        let _ = w.location().set_href(&format!("tel:{}", number));
    }
}

/// Log uncaught script errors instead of letting them vanish.
pub fn install_error_listener() {
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        match event.dyn_ref::<web_sys::ErrorEvent>() {
            Some(error) => log::error!("Application error: {}", error.message()),
            None => log::error!("Application error: {}", event.type_()),
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = window() {
        let _ = window.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
