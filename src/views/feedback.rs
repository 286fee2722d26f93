// ============================================================================
// FEEDBACK - Estados compartidos de página: skeleton, error, vacío
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};

/// Banner de error estático (el mensaje nunca incluye detalle técnico)
pub fn render_error_banner(message: &str) -> Result<Element, JsValue> {
    let icon = ElementBuilder::new("span")?
        .class("error-icon")
        .text("✳")
        .build();
    let text = ElementBuilder::new("span")?
        .class("error-text")
        .text(message)
        .build();
    let banner = ElementBuilder::new("div")?
        .class("error-banner")
        .child(icon)?
        .child(text)?
        .build();
    Ok(banner)
}

/// Estado vacío (lista sin elementos)
pub fn render_empty_state(icon: &str, text: &str) -> Result<Element, JsValue> {
    let icon_el = ElementBuilder::new("div")?
        .class("empty-icon")
        .text(icon)
        .build();
    let text_el = ElementBuilder::new("div")?
        .class("empty-text")
        .text(text)
        .build();
    let empty = ElementBuilder::new("div")?
        .class("empty-state")
        .child(icon_el)?
        .child(text_el)?
        .build();
    Ok(empty)
}

/// Grid de cards skeleton mientras carga un listado de productos
pub fn render_skeleton_cards(container: &Element, count: usize) -> Result<(), JsValue> {
    for _ in 0..count {
        let card = ElementBuilder::new("div")?
            .class("skeleton-card")
            .build();
        let image = ElementBuilder::new("div")?
            .class("skeleton skeleton-image")
            .build();
        let line = ElementBuilder::new("div")?
            .class("skeleton skeleton-line")
            .build();
        let short = ElementBuilder::new("div")?
            .class("skeleton skeleton-line short")
            .build();
        append_child(&card, &image)?;
        append_child(&card, &line)?;
        append_child(&card, &short)?;
        append_child(container, &card)?;
    }
    Ok(())
}

/// Líneas skeleton para contenido textual (listas, secciones)
pub fn render_skeleton_lines(container: &Element, count: usize) -> Result<(), JsValue> {
    for i in 0..count {
        let class = if i % 3 == 2 {
            "skeleton skeleton-line short"
        } else {
            "skeleton skeleton-line"
        };
        let line = ElementBuilder::new("div")?.class(class).build();
        append_child(container, &line)?;
    }
    Ok(())
}

/// Encabezado de página (título + subtítulo opcional)
pub fn render_page_heading(title: &str, subtitle: &str) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("header")?
        .class("page-heading")
        .build();
    let title_el = ElementBuilder::new("h1")?.text(title).build();
    append_child(&heading, &title_el)?;
    if !subtitle.is_empty() {
        let subtitle_el = ElementBuilder::new("p")?
            .class("page-subtitle")
            .text(subtitle)
            .build();
        append_child(&heading, &subtitle_el)?;
    }
    Ok(heading)
}
