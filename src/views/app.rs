// ============================================================================
// PAGE VIEW - Prescription page layout (no logic)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::views::error_dialog::{render_error_dialog, ErrorDialogProps};
use crate::views::filter_form::{render_filter_form, FilterFormProps};

pub struct PageProps {
    pub filter: FilterFormProps,
    pub errors: ErrorDialogProps,
    pub prescription_count: usize,
}

pub fn render_app(props: &PageProps) -> Result<Element, JsValue> {
    let main = ElementBuilder::new("main")?
        .class("prescription-page")
        .build();

    let content = ElementBuilder::new("div")?
        .class("content")
        .build();

    let title = ElementBuilder::new("h4")?
        .class("page-title")
        .text("Prescription")
        .build();
    append_child(&content, &title)?;

    if let Some(form) = render_filter_form(&props.filter)? {
        append_child(&content, &form)?;
    }

    // Mount point of the table widget; it reads prescriptions_json()
    let table_host = ElementBuilder::new("div")?
        .id("prescription-table")?
        .attr("data-count", &props.prescription_count.to_string())?
        .build();
    append_child(&content, &table_host)?;

    append_child(&main, &content)?;
    append_child(&main, &render_error_dialog(&props.errors)?)?;

    Ok(main)
}
