// ============================================================================
// PRESS VIEW - Menciones de prensa (#/press)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use wasm_bindgen_futures::spawn_local;
use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::models::PressItem;
use crate::state::AppState;
use crate::viewmodels::ContentViewModel;
use crate::views::feedback::{render_empty_state, render_error_banner, render_page_heading, render_skeleton_lines};

const LOAD_ERROR: &str = "Press mentions are unavailable right now.";

pub fn render_press(_state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?
        .class("page page-press")
        .build();

    let heading = render_page_heading("Press", "What they say about Veluria")?;
    append_child(&page, &heading)?;

    let list = ElementBuilder::new("div")?
        .class("press-list")
        .build();
    render_skeleton_lines(&list, 4)?;
    append_child(&page, &list)?;

    {
        let list = list.clone();
        spawn_local(async move {
            let vm = ContentViewModel::new();
            match vm.load_press().await {
                Ok(items) => {
                    set_inner_html(&list, "");
                    if items.is_empty() {
                        if let Ok(empty) = render_empty_state("📰", "No press mentions yet.") {
                            let _ = append_child(&list, &empty);
                        }
                        return;
                    }
                    for item in &items {
                        if let Ok(card) = render_press_card(item) {
                            let _ = append_child(&list, &card);
                        }
                    }
                }
                Err(e) => {
                    log::error!("❌ [PRESS] Error cargando prensa: {}", e);
                    set_inner_html(&list, "");
                    if let Ok(banner) = render_error_banner(LOAD_ERROR) {
                        let _ = append_child(&list, &banner);
                    }
                }
            }
        });
    }

    Ok(page)
}

fn render_press_card(item: &PressItem) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("blockquote")?
        .class("press-card")
        .attr("data-press-id", &item.id)?
        .build();

    if !item.logo_url.is_empty() {
        let logo = ElementBuilder::new("img")?
            .class("press-logo")
            .attr("src", &item.logo_url)?
            .attr("alt", &item.outlet)?
            .build();
        append_child(&card, &logo)?;
    }

    let quote = ElementBuilder::new("p")?
        .class("press-quote")
        .text(&format!("“{}”", item.quote))
        .build();
    append_child(&card, &quote)?;

    let outlet_text = if item.published_at.is_empty() {
        item.outlet.clone()
    } else {
        format!("{} — {}", item.outlet, item.published_at)
    };
    let outlet = ElementBuilder::new("cite")?
        .class("press-outlet")
        .text(&outlet_text)
        .build();
    append_child(&card, &outlet)?;

    Ok(card)
}
