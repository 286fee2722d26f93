// ============================================================================
// BLOG VIEW - Journal (#/blog)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use wasm_bindgen_futures::spawn_local;
use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::models::BlogPost;
use crate::state::AppState;
use crate::viewmodels::ContentViewModel;
use crate::views::feedback::{render_empty_state, render_error_banner, render_page_heading, render_skeleton_lines};

const LOAD_ERROR: &str = "The journal is taking a moment. Please check back soon.";

pub fn render_blog(_state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?
        .class("page page-blog")
        .build();

    let heading = render_page_heading("Journal", "Rituals, ingredients and skin science")?;
    append_child(&page, &heading)?;

    let list = ElementBuilder::new("div")?
        .class("blog-list")
        .build();
    render_skeleton_lines(&list, 6)?;
    append_child(&page, &list)?;

    {
        let list = list.clone();
        spawn_local(async move {
            let vm = ContentViewModel::new();
            match vm.load_blog_posts().await {
                Ok(posts) => {
                    set_inner_html(&list, "");
                    if posts.is_empty() {
                        if let Ok(empty) = render_empty_state("📖", "No stories published yet.") {
                            let _ = append_child(&list, &empty);
                        }
                        return;
                    }
                    for post in &posts {
                        if let Ok(card) = render_post_card(post) {
                            let _ = append_child(&list, &card);
                        }
                    }
                }
                Err(e) => {
                    log::error!("❌ [BLOG] Error cargando posts: {}", e);
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

fn render_post_card(post: &BlogPost) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("article")?
        .class("blog-card")
        .attr("data-post-id", &post.id)?
        .build();

    if !post.cover_url.is_empty() {
        let cover = ElementBuilder::new("img")?
            .class("blog-cover")
            .attr("src", &post.cover_url)?
            .attr("alt", &post.title)?
            .attr("loading", "lazy")?
            .build();
        append_child(&card, &cover)?;
    }

    let title = ElementBuilder::new("h3")?
        .class("blog-title")
        .text(&post.title)
        .build();
    append_child(&card, &title)?;

    let meta_text = match (post.author.is_empty(), post.published_at.is_empty()) {
        (false, false) => format!("{} · {}", post.author, post.published_at),
        (false, true) => post.author.clone(),
        (true, false) => post.published_at.clone(),
        (true, true) => String::new(),
    };
    if !meta_text.is_empty() {
        let meta = ElementBuilder::new("p")?
            .class("blog-meta")
            .text(&meta_text)
            .build();
        append_child(&card, &meta)?;
    }

    if !post.excerpt.is_empty() {
        let excerpt = ElementBuilder::new("p")?
            .class("blog-excerpt")
            .text(&post.excerpt)
            .build();
        append_child(&card, &excerpt)?;
    }

    Ok(card)
}
