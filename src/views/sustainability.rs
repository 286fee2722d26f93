// ============================================================================
// SUSTAINABILITY VIEW - Página de sostenibilidad (#/sustainability)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use wasm_bindgen_futures::spawn_local;
use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::models::ContentSection;
use crate::state::AppState;
use crate::viewmodels::ContentViewModel;
use crate::views::feedback::{render_empty_state, render_error_banner, render_page_heading, render_skeleton_lines};

const LOAD_ERROR: &str = "This page is unavailable right now. Please try again later.";

pub fn render_sustainability(_state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?
        .class("page page-sustainability")
        .build();

    let heading = render_page_heading("Sustainability", "Our commitments, in the open")?;
    append_child(&page, &heading)?;

    let sections = ElementBuilder::new("div")?
        .class("content-sections")
        .build();
    render_skeleton_lines(&sections, 6)?;
    append_child(&page, &sections)?;

    {
        let sections = sections.clone();
        spawn_local(async move {
            let vm = ContentViewModel::new();
            match vm.load_sustainability().await {
                Ok(items) => {
                    set_inner_html(&sections, "");
                    if items.is_empty() {
                        if let Ok(empty) = render_empty_state("🌱", "Nothing to show here yet.") {
                            let _ = append_child(&sections, &empty);
                        }
                        return;
                    }
                    for section in &items {
                        if let Ok(block) = render_content_section(section) {
                            let _ = append_child(&sections, &block);
                        }
                    }
                }
                Err(e) => {
                    log::error!("❌ [SUSTAINABILITY] Error cargando secciones: {}", e);
                    set_inner_html(&sections, "");
                    if let Ok(banner) = render_error_banner(LOAD_ERROR) {
                        let _ = append_child(&sections, &banner);
                    }
                }
            }
        });
    }

    Ok(page)
}

/// Bloque CMS genérico (compartido con la página de gifting)
pub fn render_content_section(section: &ContentSection) -> Result<Element, JsValue> {
    let block = ElementBuilder::new("section")?
        .class("content-section")
        .attr("data-section-id", &section.id)?
        .build();

    let heading_row = ElementBuilder::new("div")?
        .class("section-heading")
        .build();
    if !section.icon.is_empty() {
        let icon = ElementBuilder::new("span")?
            .class("section-icon")
            .text(&section.icon)
            .build();
        append_child(&heading_row, &icon)?;
    }
    let title = ElementBuilder::new("h2")?.text(&section.heading).build();
    append_child(&heading_row, &title)?;
    append_child(&block, &heading_row)?;

    let body = ElementBuilder::new("p")?
        .class("section-body")
        .text(&section.body)
        .build();
    append_child(&block, &body)?;

    Ok(block)
}
