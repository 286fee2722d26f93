// ============================================================================
// PRODUCT CARD - Card de producto compartida (best sellers, wishlist, quiz)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::Product;
use crate::utils::format::format_price_cents;

/// Renderizar card de producto
pub fn render_product_card(product: &Product) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("article")?
        .class("product-card")
        .attr("data-product-id", &product.id)?
        .build();

    // Imagen (o placeholder si el producto no trae)
    let media = ElementBuilder::new("div")?
        .class("product-media")
        .build();
    if product.image_url.is_empty() {
        let placeholder = ElementBuilder::new("div")?
            .class("product-image placeholder")
            .text("🌿")
            .build();
        append_child(&media, &placeholder)?;
    } else {
        let image = ElementBuilder::new("img")?
            .class("product-image")
            .attr("src", &product.image_url)?
            .attr("alt", &product.name)?
            .attr("loading", "lazy")?
            .build();
        append_child(&media, &image)?;
    }
    if !product.in_stock {
        let badge = ElementBuilder::new("span")?
            .class("badge badge-soldout")
            .text("Sold out")
            .build();
        append_child(&media, &badge)?;
    }
    append_child(&card, &media)?;

    let name = ElementBuilder::new("h3")?
        .class("product-name")
        .text(&product.name)
        .build();
    append_child(&card, &name)?;

    if !product.tagline.is_empty() {
        let tagline = ElementBuilder::new("p")?
            .class("product-tagline")
            .text(&product.tagline)
            .build();
        append_child(&card, &tagline)?;
    }

    // Precio, con compare-at tachado cuando existe (0 = sin tachado)
    let price_row = ElementBuilder::new("div")?
        .class("product-price")
        .build();
    let price = ElementBuilder::new("span")?
        .class("price-current")
        .text(&format_price_cents(product.price_cents))
        .build();
    append_child(&price_row, &price)?;
    if product.compare_at_cents > 0 {
        let compare = ElementBuilder::new("s")?
            .class("price-compare")
            .text(&format_price_cents(product.compare_at_cents))
            .build();
        append_child(&price_row, &compare)?;
    }
    append_child(&card, &price_row)?;

    Ok(card)
}
