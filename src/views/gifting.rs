// ============================================================================
// GIFTING VIEW - Página de gifting (#/gifting)
// ============================================================================
// Un solo endpoint trae secciones editoriales + gift sets; ambas zonas
// comparten el mismo fallback (secciones vacías + banner estático).
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use wasm_bindgen_futures::spawn_local;
use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::models::GiftSet;
use crate::state::AppState;
use crate::viewmodels::ContentViewModel;
use crate::views::feedback::{render_error_banner, render_page_heading, render_skeleton_cards, render_skeleton_lines};
use crate::views::product_card::render_product_card;
use crate::views::sustainability::render_content_section;

const LOAD_ERROR: &str = "Gifting ideas are unavailable right now. Please try again later.";

pub fn render_gifting(_state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?
        .class("page page-gifting")
        .build();

    let heading = render_page_heading("Gifting", "Sets for every ritual")?;
    append_child(&page, &heading)?;

    let sections = ElementBuilder::new("div")?
        .class("content-sections")
        .build();
    render_skeleton_lines(&sections, 3)?;
    append_child(&page, &sections)?;

    let grid = ElementBuilder::new("div")?
        .class("product-grid gift-grid")
        .build();
    render_skeleton_cards(&grid, 3)?;
    append_child(&page, &grid)?;

    {
        let sections = sections.clone();
        let grid = grid.clone();
        spawn_local(async move {
            let vm = ContentViewModel::new();
            match vm.load_gifting().await {
                Ok((content, sets)) => {
                    set_inner_html(&sections, "");
                    for section in &content {
                        if let Ok(block) = render_content_section(section) {
                            let _ = append_child(&sections, &block);
                        }
                    }
                    set_inner_html(&grid, "");
                    for set in &sets {
                        if let Ok(card) = render_gift_set_card(set) {
                            let _ = append_child(&grid, &card);
                        }
                    }
                }
                Err(e) => {
                    log::error!("❌ [GIFTING] Error cargando página: {}", e);
                    set_inner_html(&sections, "");
                    set_inner_html(&grid, "");
                    if let Ok(banner) = render_error_banner(LOAD_ERROR) {
                        let _ = append_child(&sections, &banner);
                    }
                }
            }
        });
    }

    Ok(page)
}

fn render_gift_set_card(set: &GiftSet) -> Result<Element, JsValue> {
    let card = render_product_card(&set.product)?;

    // Contenidos del cofre debajo del card estándar
    if !set.contents.is_empty() {
        let contents = ElementBuilder::new("ul")?
            .class("gift-contents")
            .build();
        for item in &set.contents {
            let li = ElementBuilder::new("li")?.text(item).build();
            append_child(&contents, &li)?;
        }
        append_child(&card, &contents)?;
    }

    Ok(card)
}
