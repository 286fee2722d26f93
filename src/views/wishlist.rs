// ============================================================================
// WISHLIST VIEW - Wishlist del cliente (#/user/wishlist, bearer)
// ============================================================================
// Sin token: vista de signed-out SIN emitir requests protegidos.
// Quitar un producto es optimista sobre el DOM: si el DELETE tiene éxito
// se retira el card directamente, sin re-fetch de la lista.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use wasm_bindgen_futures::spawn_local;
use crate::dom::{append_child, on_click, set_inner_html, ElementBuilder};
use crate::models::Product;
use crate::state::AppState;
use crate::viewmodels::{plan_wishlist, WishlistPlan, WishlistViewModel};
use crate::views::account::render_sign_in_prompt;
use crate::views::feedback::{render_empty_state, render_error_banner, render_page_heading, render_skeleton_cards};
use crate::views::product_card::render_product_card;

const LOAD_ERROR: &str = "We couldn't load your wishlist. Please try again later.";

pub fn render_wishlist(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?
        .class("page page-wishlist")
        .build();

    let heading = render_page_heading("Wishlist", "")?;
    append_child(&page, &heading)?;

    let token = match plan_wishlist(state.auth.get_token()) {
        WishlistPlan::SignedOut => {
            append_child(&page, &render_sign_in_prompt("Sign in to keep a wishlist.")?)?;
            return Ok(page);
        }
        WishlistPlan::Fetch(token) => token,
    };

    let grid = ElementBuilder::new("div")?
        .class("product-grid wishlist-grid")
        .build();
    render_skeleton_cards(&grid, 3)?;
    append_child(&page, &grid)?;

    {
        let grid = grid.clone();
        spawn_local(async move {
            let vm = WishlistViewModel::new();
            match vm.load(&token).await {
                Ok(products) => {
                    set_inner_html(&grid, "");
                    if products.is_empty() {
                        if let Ok(empty) = render_empty_state("💝", "Your wishlist is empty — browse our best sellers.") {
                            let _ = append_child(&grid, &empty);
                        }
                        return;
                    }
                    for product in &products {
                        match render_wishlist_card(product, token.clone()) {
                            Ok(card) => {
                                let _ = append_child(&grid, &card);
                            }
                            Err(e) => log::error!("❌ [WISHLIST] Error renderizando card: {:?}", e),
                        }
                    }
                }
                Err(e) => {
                    log::error!("❌ [WISHLIST] Error cargando wishlist: {}", e);
                    set_inner_html(&grid, "");
                    if let Ok(banner) = render_error_banner(LOAD_ERROR) {
                        let _ = append_child(&grid, &banner);
                    }
                }
            }
        });
    }

    Ok(page)
}

fn render_wishlist_card(product: &Product, token: String) -> Result<Element, JsValue> {
    let card = render_product_card(product)?;

    let remove = ElementBuilder::new("button")?
        .class("btn btn-remove")
        .attr("title", "Remove from wishlist")?
        .text("Remove")
        .build();

    {
        let card = card.clone();
        let product_id = product.id.clone();
        on_click(&remove, move |_| {
            let card = card.clone();
            let product_id = product_id.clone();
            let token = token.clone();
            spawn_local(async move {
                let vm = WishlistViewModel::new();
                match vm.remove(&token, &product_id).await {
                    Ok(()) => {
                        card.remove();
                        log::info!("✅ [WISHLIST] Producto {} quitado", product_id);
                    }
                    Err(e) => {
                        log::error!("❌ [WISHLIST] Error quitando producto {}: {}", product_id, e);
                    }
                }
            });
        })?;
    }
    append_child(&card, &remove)?;

    Ok(card)
}
