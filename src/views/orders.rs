// ============================================================================
// ORDERS VIEW - Pedidos del cliente (#/user/orders, bearer)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use wasm_bindgen_futures::spawn_local;
use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::models::Order;
use crate::state::AppState;
use crate::viewmodels::AccountViewModel;
use crate::views::account::render_sign_in_prompt;
use crate::views::feedback::{render_empty_state, render_error_banner, render_page_heading, render_skeleton_lines};
use crate::utils::format::format_price_cents;

const LOAD_ERROR: &str = "We couldn't load your orders. Please try again later.";

pub fn render_orders(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?
        .class("page page-orders")
        .build();

    let heading = render_page_heading("My Orders", "")?;
    append_child(&page, &heading)?;

    let token = match state.auth.get_token() {
        Some(t) => t,
        None => {
            append_child(&page, &render_sign_in_prompt("Sign in to see your orders.")?)?;
            return Ok(page);
        }
    };

    let list = ElementBuilder::new("div")?
        .class("order-list")
        .build();
    render_skeleton_lines(&list, 6)?;
    append_child(&page, &list)?;

    {
        let list = list.clone();
        spawn_local(async move {
            let vm = AccountViewModel::new();
            match vm.load_orders(&token).await {
                Ok(orders) => {
                    set_inner_html(&list, "");
                    if orders.is_empty() {
                        if let Ok(empty) = render_empty_state("📦", "You haven't placed any orders yet.") {
                            let _ = append_child(&list, &empty);
                        }
                        return;
                    }
                    for order in &orders {
                        if let Ok(row) = render_order_row(order) {
                            let _ = append_child(&list, &row);
                        }
                    }
                }
                Err(e) => {
                    log::error!("❌ [ORDERS] Error cargando pedidos: {}", e);
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

fn render_order_row(order: &Order) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("article")?
        .class("order-row")
        .attr("data-order-id", &order.id)?
        .build();

    let header = ElementBuilder::new("div")?
        .class("order-header")
        .build();
    let number = ElementBuilder::new("span")?
        .class("order-number")
        .text(&order.number)
        .build();
    append_child(&header, &number)?;
    let status = ElementBuilder::new("span")?
        .class(&format!("order-status {}", order.status.css_class()))
        .text(order.status.label())
        .build();
    append_child(&header, &status)?;
    append_child(&row, &header)?;

    let detail_text = match order.item_count {
        0 => order.placed_at.clone(),
        1 => format!("{} · 1 item", order.placed_at),
        n => format!("{} · {} items", order.placed_at, n),
    };
    let detail = ElementBuilder::new("p")?
        .class("order-detail")
        .text(detail_text.trim_start_matches(" · "))
        .build();
    append_child(&row, &detail)?;

    let total = ElementBuilder::new("span")?
        .class("order-total")
        .text(&format_price_cents(order.total_cents))
        .build();
    append_child(&row, &total)?;

    Ok(row)
}
