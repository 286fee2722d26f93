// ============================================================================
// ACCOUNT VIEW - Dashboard de cuenta y sign-in (#/user/account)
// ============================================================================
// Dashboard: perfil y stats se fetch-ean por separado; el fallo de uno
// solo degrada su propia sección (stats a cero / texto estático).
// Sin token se renderiza el formulario de sign-in.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlInputElement};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use std::cell::RefCell;
use std::rc::Rc;
use crate::dom::{append_child, on_click, on_input, on_submit, set_inner_html, set_text_content, ElementBuilder};
use crate::models::AccountStats;
use crate::services::auth_service;
use crate::state::AppState;
use crate::utils::routing::{navigate_to, Route};
use crate::viewmodels::AccountViewModel;
use crate::views::feedback::{render_page_heading, render_skeleton_lines};

const PROFILE_ERROR: &str = "We couldn't load your profile right now.";

pub fn render_account(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?
        .class("page page-account")
        .build();

    let heading = render_page_heading("My Account", "")?;
    append_child(&page, &heading)?;

    let token = match state.auth.get_token() {
        Some(t) => t,
        None => {
            append_child(&page, &render_sign_in_form()?)?;
            return Ok(page);
        }
    };

    // --- Perfil ---
    let profile_box = ElementBuilder::new("div")?
        .class("account-profile")
        .build();
    render_skeleton_lines(&profile_box, 2)?;
    append_child(&page, &profile_box)?;

    // --- Stats (tres contadores, cero por defecto) ---
    let stats_box = ElementBuilder::new("div")?
        .class("account-stats")
        .build();
    render_stats_into(&stats_box, &AccountStats::zeroed())?;
    append_child(&page, &stats_box)?;

    // --- Sign out ---
    let sign_out = ElementBuilder::new("button")?
        .class("btn btn-secondary btn-signout")
        .text("Sign out")
        .build();
    on_click(&sign_out, move |_| {
        auth_service::logout();
    })?;
    append_child(&page, &sign_out)?;

    // Dos fetches independientes: cada uno rellena solo su sección
    {
        let profile_box = profile_box.clone();
        let token = token.clone();
        spawn_local(async move {
            let vm = AccountViewModel::new();
            match vm.load_profile(&token).await {
                Ok(profile) => {
                    set_inner_html(&profile_box, "");
                    if let Ok(name) = ElementBuilder::new("h2") {
                        let name = name.class("profile-name").text(&profile.display_name()).build();
                        let _ = append_child(&profile_box, &name);
                    }
                    let meta_text = if profile.member_since.is_empty() {
                        profile.email.clone()
                    } else {
                        format!("{} · Member since {}", profile.email, profile.member_since)
                    };
                    if let Ok(meta) = ElementBuilder::new("p") {
                        let meta = meta.class("profile-meta").text(&meta_text).build();
                        let _ = append_child(&profile_box, &meta);
                    }
                }
                Err(e) => {
                    log::error!("❌ [ACCOUNT] Error cargando perfil: {}", e);
                    set_inner_html(&profile_box, "");
                    if let Ok(error) = ElementBuilder::new("p") {
                        let error = error.class("profile-error").text(PROFILE_ERROR).build();
                        let _ = append_child(&profile_box, &error);
                    }
                }
            }
        });
    }
    {
        let stats_box = stats_box.clone();
        spawn_local(async move {
            let vm = AccountViewModel::new();
            match vm.load_stats(&token).await {
                Ok(stats) => {
                    let _ = render_stats_into(&stats_box, &stats);
                }
                Err(e) => {
                    // Fallback documentado: stats a cero, ya renderizadas
                    log::error!("❌ [ACCOUNT] Error cargando stats: {}", e);
                }
            }
        });
    }

    Ok(page)
}

fn render_stats_into(container: &Element, stats: &AccountStats) -> Result<(), JsValue> {
    set_inner_html(container, "");
    let entries = [
        ("Loyalty points", stats.loyalty_points),
        ("Orders", stats.total_orders),
        ("Wishlist", stats.wishlist_count),
    ];
    for (label, value) in entries {
        let stat = ElementBuilder::new("div")?
            .class("stat")
            .build();
        let value_el = ElementBuilder::new("span")?
            .class("stat-value")
            .text(&value.to_string())
            .build();
        let label_el = ElementBuilder::new("span")?
            .class("stat-label")
            .text(label)
            .build();
        append_child(&stat, &value_el)?;
        append_child(&stat, &label_el)?;
        append_child(container, &stat)?;
    }
    Ok(())
}

/// Prompt compacto para páginas protegidas sin token (orders, cards)
pub fn render_sign_in_prompt(message: &str) -> Result<Element, JsValue> {
    let prompt = ElementBuilder::new("div")?
        .class("signin-prompt")
        .build();
    let text = ElementBuilder::new("p")?.text(message).build();
    append_child(&prompt, &text)?;
    let button = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Sign in")
        .build();
    on_click(&button, move |_| {
        navigate_to(Route::Account);
    })?;
    append_child(&prompt, &button)?;
    Ok(prompt)
}

/// Formulario de sign-in (estado local del formulario en closures)
fn render_sign_in_form() -> Result<Element, JsValue> {
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));
    let submitting = Rc::new(RefCell::new(false));

    let form = ElementBuilder::new("form")?
        .class("signin-form")
        .build();

    let intro = ElementBuilder::new("p")?
        .class("signin-intro")
        .text("Sign in to see your orders, cards and wishlist.")
        .build();
    append_child(&form, &intro)?;

    let email_input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", "email")?
        .attr("placeholder", "Email")?
        .attr("autocomplete", "email")?
        .build();
    {
        let email = email.clone();
        on_input(&email_input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target() {
                if let Ok(input) = target.dyn_into::<HtmlInputElement>() {
                    *email.borrow_mut() = input.value();
                }
            }
        })?;
    }
    append_child(&form, &email_input)?;

    let password_input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", "password")?
        .attr("placeholder", "Password")?
        .attr("autocomplete", "current-password")?
        .build();
    {
        let password = password.clone();
        on_input(&password_input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target() {
                if let Ok(input) = target.dyn_into::<HtmlInputElement>() {
                    *password.borrow_mut() = input.value();
                }
            }
        })?;
    }
    append_child(&form, &password_input)?;

    let error_box = ElementBuilder::new("p")?
        .class("form-error")
        .build();
    append_child(&form, &error_box)?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text("Sign in")
        .build();
    append_child(&form, &submit)?;

    {
        let error_box = error_box.clone();
        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();

            if *submitting.borrow() {
                return;
            }

            let email_val = email.borrow().clone();
            let password_val = password.borrow().clone();
            if email_val.is_empty() || password_val.is_empty() {
                set_text_content(&error_box, "Please fill in both fields.");
                return;
            }

            *submitting.borrow_mut() = true;
            set_text_content(&error_box, "");

            let submitting = submitting.clone();
            let error_box = error_box.clone();
            spawn_local(async move {
                match auth_service::login(&email_val, &password_val).await {
                    Ok(()) => {
                        // El evento authChanged re-renderiza la app
                    }
                    Err(e) => {
                        log::error!("❌ [ACCOUNT] Login falló: {}", e);
                        set_text_content(&error_box, "We couldn't sign you in. Check your details and try again.");
                    }
                }
                *submitting.borrow_mut() = false;
            });
        })?;
    }

    Ok(form)
}
