// ============================================================================
// CARDS VIEW - Tarjetas guardadas (#/user/cards, bearer)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use wasm_bindgen_futures::spawn_local;
use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::models::SavedCard;
use crate::state::AppState;
use crate::viewmodels::AccountViewModel;
use crate::views::account::render_sign_in_prompt;
use crate::views::feedback::{render_empty_state, render_error_banner, render_page_heading, render_skeleton_lines};
use crate::utils::format::format_card_expiry;

const LOAD_ERROR: &str = "We couldn't load your saved cards. Please try again later.";

pub fn render_cards(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?
        .class("page page-cards")
        .build();

    let heading = render_page_heading("Saved Cards", "")?;
    append_child(&page, &heading)?;

    let token = match state.auth.get_token() {
        Some(t) => t,
        None => {
            append_child(&page, &render_sign_in_prompt("Sign in to manage your payment cards.")?)?;
            return Ok(page);
        }
    };

    let list = ElementBuilder::new("div")?
        .class("card-list")
        .build();
    render_skeleton_lines(&list, 3)?;
    append_child(&page, &list)?;

    {
        let list = list.clone();
        spawn_local(async move {
            let vm = AccountViewModel::new();
            match vm.load_cards(&token).await {
                Ok(cards) => {
                    set_inner_html(&list, "");
                    if cards.is_empty() {
                        if let Ok(empty) = render_empty_state("💳", "No saved cards yet.") {
                            let _ = append_child(&list, &empty);
                        }
                        return;
                    }
                    for card in &cards {
                        if let Ok(row) = render_card_row(card) {
                            let _ = append_child(&list, &row);
                        }
                    }
                }
                Err(e) => {
                    log::error!("❌ [CARDS] Error cargando tarjetas: {}", e);
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

fn render_card_row(card: &SavedCard) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("article")?
        .class("payment-card")
        .attr("data-card-id", &card.id)?
        .build();

    let brand = ElementBuilder::new("span")?
        .class("card-brand")
        .text(&card.brand)
        .build();
    append_child(&row, &brand)?;

    let digits = ElementBuilder::new("span")?
        .class("card-digits")
        .text(&format!("•••• {}", card.last4))
        .build();
    append_child(&row, &digits)?;

    let expiry = ElementBuilder::new("span")?
        .class("card-expiry")
        .text(&format!("Expires {}", format_card_expiry(card.exp_month, card.exp_year)))
        .build();
    append_child(&row, &expiry)?;

    if card.is_default {
        let badge = ElementBuilder::new("span")?
            .class("badge badge-default")
            .text("Default")
            .build();
        append_child(&row, &badge)?;
    }

    Ok(row)
}
