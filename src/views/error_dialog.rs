// ============================================================================
// ERROR DIALOG - Stateless modal listing the accumulated error messages
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::events::on_click;
use crate::dom::{append_child, ElementBuilder};

pub struct ErrorDialogProps {
    pub open: bool,
    pub title: String,
    pub messages: Vec<String>,
    /// Close control; the owner clears its own state
    pub on_close: Rc<dyn Fn()>,
}

pub fn render_error_dialog(props: &ErrorDialogProps) -> Result<Element, JsValue> {
    let class = if props.open { "error-dialog show" } else { "error-dialog" };
    let dialog = ElementBuilder::new("div")?
        .id("error-dialog")?
        .class(class)
        .attr("role", "dialog")?
        .attr("aria-hidden", if props.open { "false" } else { "true" })?
        .build();

    // Backdrop click closes, like the close button
    {
        let on_close = props.on_close.clone();
        on_click(&dialog, move |_| on_close())?;
    }

    let content = ElementBuilder::new("div")?
        .class("error-dialog-content")
        .build();
    on_click(&content, |e: web_sys::MouseEvent| e.stop_propagation())?;

    let title = ElementBuilder::new("h3")?
        .class("error-dialog-title")
        .text(&props.title)
        .build();
    append_child(&content, &title)?;

    let body = ElementBuilder::new("div")?
        .class("error-dialog-body")
        .build();
    if props.messages.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("text-center")
            .text("No errors to display")
            .build();
        append_child(&body, &empty)?;
    } else {
        for message in &props.messages {
            let line = ElementBuilder::new("p")?
                .class("text-center")
                .text(message)
                .build();
            append_child(&body, &line)?;
        }
    }
    append_child(&content, &body)?;

    let close_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn btn-primary")
        .text("Close")
        .build();
    {
        let on_close = props.on_close.clone();
        on_click(&close_btn, move |_| on_close())?;
    }
    let actions = ElementBuilder::new("div")?
        .class("error-dialog-actions")
        .child(close_btn)?
        .build();
    append_child(&content, &actions)?;

    append_child(&dialog, &content)?;
    Ok(dialog)
}
