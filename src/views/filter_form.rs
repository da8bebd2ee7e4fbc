// ============================================================================
// FILTER FORM VIEW - Patient/doctor selects + Search button
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::events::{on_select_change, on_submit};
use crate::dom::{append_child, ElementBuilder};
use crate::viewmodels::{FilterLayout, OptionEntry};

pub struct FilterFormProps {
    pub layout: FilterLayout,
    pub patient_options: Vec<OptionEntry>,
    pub doctor_options: Vec<OptionEntry>,
    pub on_patient_change: Rc<dyn Fn(String)>,
    pub on_doctor_change: Rc<dyn Fn(String)>,
    pub on_submit: Rc<dyn Fn()>,
}

/// `None` when the role gets a read-only list
pub fn render_filter_form(props: &FilterFormProps) -> Result<Option<Element>, JsValue> {
    if !props.layout.is_visible() {
        return Ok(None);
    }

    let form = ElementBuilder::new("form")?
        .attr("name", "prescriptionFilter")?
        .build();
    {
        let on_submit_cb = props.on_submit.clone();
        on_submit(&form, move || on_submit_cb())?;
    }

    let row = ElementBuilder::new("div")?
        .class("row filter-row")
        .build();

    let patient_select = render_select("patientId", &props.patient_options)?;
    {
        let cb = props.on_patient_change.clone();
        on_select_change(&patient_select, move |value| cb(value))?;
    }
    append_child(&row, &column(patient_select)?)?;

    if props.layout.shows_doctor_select() {
        let doctor_select = render_select("doctorId", &props.doctor_options)?;
        {
            let cb = props.on_doctor_change.clone();
            on_select_change(&doctor_select, move |value| cb(value))?;
        }
        append_child(&row, &column(doctor_select)?)?;
    }

    let search_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary btn-block")
        .text("Search")
        .build();
    let button_col = ElementBuilder::new("div")?
        .class("col-sm-4 col-md-4")
        .child(search_btn)?
        .build();
    append_child(&row, &button_col)?;

    append_child(&form, &row)?;
    Ok(Some(form))
}

fn column(child: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("col-sm-4 col-md-4 mt-2")
        .child(child)?
        .build())
}

fn render_select(name: &str, options: &[OptionEntry]) -> Result<Element, JsValue> {
    let select = ElementBuilder::new("select")?
        .id(name)?
        .attr("name", name)?
        .class("form-select")
        .build();

    for entry in options {
        let option = ElementBuilder::new("option")?
            .attr("value", &entry.value)?
            .flag("selected", entry.selected)?
            .text(&entry.label)
            .build();
        append_child(&select, &option)?;
    }

    Ok(select)
}
