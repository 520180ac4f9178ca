use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_class_enabled(document: &web::Document, element_id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let list = el.class_list();
        let _ = if on { list.add_1(class) } else { list.remove_1(class) };
    }
}

// Visibility is a `hidden` class (the page styles it `display:none`), so
// toggling never disturbs other inline styles on the element.
#[inline]
pub fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    set_class_enabled(document, element_id, "hidden", !visible);
}

#[inline]
pub fn is_visible(document: &web::Document, element_id: &str) -> bool {
    document
        .get_element_by_id(element_id)
        .map(|el| !el.class_list().contains("hidden"))
        .unwrap_or(true)
}

/// Appends a timestamped line to the debug panel's log, keeping it scrolled
/// to the newest entry.
pub fn append_debug_line(document: &web::Document, message: &str) {
    let Some(panel) = document.get_element_by_id("debug-log") else {
        return;
    };
    if let Ok(line) = document.create_element("div") {
        let stamp = js_sys::Date::new_0().to_locale_time_string("en-GB");
        line.set_text_content(Some(&format!("[{stamp}] {message}")));
        let _ = panel.append_child(&line);
        panel.set_scroll_top(panel.scroll_height());
    }
}
