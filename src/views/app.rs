// ============================================================================
// APP SHELL - Header, navegación, página enrutada y footer
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{add_class, append_child, on_click, ElementBuilder};
use crate::state::AppState;
use crate::utils::routing::{navigate_to, Route};
use crate::views::{
    account::render_account,
    best_sellers::render_best_sellers,
    blog::render_blog,
    cards::render_cards,
    gifting::render_gifting,
    orders::render_orders,
    press::render_press,
    quiz::render_quiz,
    stores::render_stores,
    sustainability::render_sustainability,
    wishlist::render_wishlist,
};

/// Rutas de la navegación principal (las de cuenta viven en el menú de usuario)
const NAV_ROUTES: [Route; 7] = [
    Route::BestSellers,
    Route::Quiz,
    Route::Gifting,
    Route::Blog,
    Route::Stores,
    Route::Press,
    Route::Sustainability,
];

const USER_ROUTES: [Route; 4] = [
    Route::Account,
    Route::Orders,
    Route::Cards,
    Route::Wishlist,
];

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let shell = ElementBuilder::new("div")?
        .class("app-shell")
        .build();

    append_child(&shell, &render_header(state)?)?;

    let main = ElementBuilder::new("main")?
        .class("app-main")
        .build();
    append_child(&main, &render_page(state)?)?;
    append_child(&shell, &main)?;

    append_child(&shell, &render_footer()?)?;

    Ok(shell)
}

fn render_page(state: &AppState) -> Result<Element, JsValue> {
    match state.get_route() {
        Route::BestSellers => render_best_sellers(state),
        Route::Blog => render_blog(state),
        Route::Stores => render_stores(state),
        Route::Quiz => render_quiz(state),
        Route::Gifting => render_gifting(state),
        Route::Press => render_press(state),
        Route::Sustainability => render_sustainability(state),
        Route::Account => render_account(state),
        Route::Orders => render_orders(state),
        Route::Cards => render_cards(state),
        Route::Wishlist => render_wishlist(state),
    }
}

fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?
        .class("app-header")
        .build();

    // Marca: vuelve al home
    let brand = ElementBuilder::new("a")?
        .class("brand")
        .attr("href", Route::BestSellers.hash())?
        .text("VELURIA")
        .build();
    append_child(&header, &brand)?;

    // Toggle del menú móvil
    let toggle = ElementBuilder::new("button")?
        .class("nav-toggle")
        .attr("type", "button")?
        .attr("aria-label", "Menu")?
        .text("☰")
        .build();
    {
        let state = state.clone();
        on_click(&toggle, move |_| {
            state.toggle_nav();
        })?;
    }
    append_child(&header, &toggle)?;

    let nav = ElementBuilder::new("nav")?
        .class("app-nav")
        .build();
    if *state.nav_open.borrow() {
        add_class(&nav, "nav-open")?;
    }

    let current = state.get_route();
    for route in NAV_ROUTES {
        append_child(&nav, &render_nav_link(route, current)?)?;
    }
    append_child(&header, &nav)?;

    // Zona de usuario: saludo + accesos a cuenta
    let user_area = ElementBuilder::new("div")?
        .class("user-area")
        .build();
    if let Some(email) = state.auth.get_email() {
        let greeting = ElementBuilder::new("span")?
            .class("user-greeting")
            .text(&email)
            .build();
        append_child(&user_area, &greeting)?;
    }
    for route in USER_ROUTES {
        let link = render_nav_link(route, current)?;
        // Señal visual de páginas protegidas cuando no hay sesión
        if route.requires_auth() && !state.auth.is_signed_in() {
            add_class(&link, "requires-auth")?;
        }
        append_child(&user_area, &link)?;
    }
    append_child(&header, &user_area)?;

    Ok(header)
}

fn render_nav_link(route: Route, current: Route) -> Result<Element, JsValue> {
    let link = ElementBuilder::new("a")?
        .class("nav-link")
        .attr("href", route.hash())?
        .text(route.title())
        .build();
    if route == current {
        add_class(&link, "active")?;
    }
    on_click(&link, move |e: web_sys::MouseEvent| {
        e.prevent_default();
        navigate_to(route);
    })?;
    Ok(link)
}

fn render_footer() -> Result<Element, JsValue> {
    let footer = ElementBuilder::new("footer")?
        .class("app-footer")
        .build();
    let year = js_sys::Date::new_0().get_full_year();
    let note = ElementBuilder::new("p")?
        .text(&format!("© {} Veluria · Clean skincare, honestly made", year))
        .build();
    append_child(&footer, &note)?;
    Ok(footer)
}
