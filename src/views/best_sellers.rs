// ============================================================================
// BEST SELLERS VIEW - Página por defecto (#/ y #/best-sellers)
// ============================================================================
// Patrón de carga: skeleton en mount, fetch con spawn_local, y al resolver
// se rellena el contenedor capturado. Fallo → grid vacío + banner estático.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use wasm_bindgen_futures::spawn_local;
use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::CatalogViewModel;
use crate::views::feedback::{render_empty_state, render_error_banner, render_page_heading, render_skeleton_cards};
use crate::views::product_card::render_product_card;

/// Renderizar página de best sellers
pub fn render_best_sellers(_state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?
        .class("page page-best-sellers")
        .build();

    let heading = render_page_heading("Best Sellers", "The formulas our community loves most")?;
    append_child(&page, &heading)?;

    let grid = ElementBuilder::new("div")?
        .id("best-sellers-grid")?
        .class("product-grid")
        .build();
    render_skeleton_cards(&grid, 6)?;
    append_child(&page, &grid)?;

    // Fetch on mount. Sin cancelación al navegar: si la respuesta llega
    // tarde escribe en un contenedor ya desmontado y el navegador lo
    // descarta con el DOM viejo.
    {
        let grid = grid.clone();
        spawn_local(async move {
            let vm = CatalogViewModel::new();
            if let Err(e) = vm.load_best_sellers().await {
                log::error!("❌ [BEST-SELLERS] Error cargando colección: {}", e);
            }

            // El render se deriva del tri-estado del viewmodel
            set_inner_html(&grid, "");
            if let Some(message) = vm.products.get_error() {
                if let Ok(banner) = render_error_banner(&message) {
                    let _ = append_child(&grid, &banner);
                }
                return;
            }
            let data = vm.products.data.borrow();
            let products = match data.as_ref() {
                Some(products) => products,
                None => return,
            };
            if products.is_empty() {
                if let Ok(empty) = render_empty_state("🌿", "No products in this collection yet.") {
                    let _ = append_child(&grid, &empty);
                }
                return;
            }
            for product in products {
                match render_product_card(product) {
                    Ok(card) => {
                        let _ = append_child(&grid, &card);
                    }
                    Err(e) => log::error!("❌ [BEST-SELLERS] Error renderizando card: {:?}", e),
                }
            }
        });
    }

    Ok(page)
}
