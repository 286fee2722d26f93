// ============================================================================
// STORES VIEW - Store locator (#/stores)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use wasm_bindgen_futures::spawn_local;
use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::models::Store;
use crate::state::AppState;
use crate::viewmodels::ContentViewModel;
use crate::views::feedback::{render_empty_state, render_error_banner, render_page_heading, render_skeleton_lines};

const LOAD_ERROR: &str = "We couldn't load our stores right now. Please try again later.";

pub fn render_stores(_state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?
        .class("page page-stores")
        .build();

    let heading = render_page_heading("Find a Store", "Visit us for a skin consultation")?;
    append_child(&page, &heading)?;

    let list = ElementBuilder::new("div")?
        .class("store-list")
        .build();
    render_skeleton_lines(&list, 6)?;
    append_child(&page, &list)?;

    {
        let list = list.clone();
        spawn_local(async move {
            let vm = ContentViewModel::new();
            match vm.load_stores().await {
                Ok(stores) => {
                    set_inner_html(&list, "");
                    if stores.is_empty() {
                        if let Ok(empty) = render_empty_state("📍", "No stores to show yet.") {
                            let _ = append_child(&list, &empty);
                        }
                        return;
                    }
                    for store in &stores {
                        if let Ok(card) = render_store_card(store) {
                            let _ = append_child(&list, &card);
                        }
                    }
                }
                Err(e) => {
                    log::error!("❌ [STORES] Error cargando tiendas: {}", e);
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

fn render_store_card(store: &Store) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("article")?
        .class("store-card")
        .attr("data-store-id", &store.id)?
        .build();

    let name = ElementBuilder::new("h3")?
        .class("store-name")
        .text(&store.name)
        .build();
    append_child(&card, &name)?;

    let address_text = if store.city.is_empty() {
        store.address.clone()
    } else {
        format!("{}, {}", store.address, store.city)
    };
    let address = ElementBuilder::new("p")?
        .class("store-address")
        .text(&address_text)
        .build();
    append_child(&card, &address)?;

    if !store.phone.is_empty() {
        let phone = ElementBuilder::new("p")?
            .class("store-phone")
            .text(&store.phone)
            .build();
        append_child(&card, &phone)?;
    }

    // Horarios: parseados defensivamente, lista vacía no renderiza nada
    if !store.hours.is_empty() {
        let hours = ElementBuilder::new("ul")?
            .class("store-hours")
            .build();
        for line in &store.hours {
            let item = ElementBuilder::new("li")?.text(line).build();
            append_child(&hours, &item)?;
        }
        append_child(&card, &hours)?;
    }

    // Coordenadas (0,0) = tienda sin geolocalizar, sin link
    if store.lat != 0.0 || store.lng != 0.0 {
        let map_link = ElementBuilder::new("a")?
            .class("store-map-link")
            .attr(
                "href",
                &format!(
                    "https://www.openstreetmap.org/?mlat={}&mlon={}#map=17/{}/{}",
                    store.lat, store.lng, store.lat, store.lng
                ),
            )?
            .attr("target", "_blank")?
            .attr("rel", "noopener")?
            .text("View on map")
            .build();
        append_child(&card, &map_link)?;
    }

    Ok(card)
}
