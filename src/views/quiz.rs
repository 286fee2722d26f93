// ============================================================================
// QUIZ VIEW - Skin quiz (#/quiz)
// ============================================================================
// Estado local del quiz en closures (una respuesta por pregunta). El
// resultado se calcula localmente por tags y el POST es best-effort: las
// recomendaciones llegan del backend o del match local contra los best
// sellers ya cargados.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use wasm_bindgen_futures::spawn_local;
use std::cell::RefCell;
use std::rc::Rc;
use crate::dom::{add_class, append_child, on_click, remove_class, set_inner_html, set_text_content, ElementBuilder};
use crate::models::{Product, QuizQuestion};
use crate::state::AppState;
use crate::utils::constants::SKIN_TAG_KEY;
use crate::viewmodels::{CatalogViewModel, QuizViewModel};
use crate::views::feedback::{render_error_banner, render_page_heading, render_skeleton_lines};
use crate::views::product_card::render_product_card;

const LOAD_ERROR: &str = "The quiz is unavailable right now. Please try again later.";

pub fn render_quiz(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?
        .class("page page-quiz")
        .build();

    let heading = render_page_heading("Skin Quiz", "Three minutes to your ritual")?;
    append_child(&page, &heading)?;

    // Último perfil calculado, si el cliente ya hizo el quiz
    if let Some(tag) = state.load_string_pref(SKIN_TAG_KEY) {
        let note = ElementBuilder::new("p")?
            .class("quiz-previous")
            .text(&format!("Your last result: {}", tag))
            .build();
        append_child(&page, &note)?;
    }

    let quiz_box = ElementBuilder::new("div")?
        .class("quiz-box")
        .build();
    render_skeleton_lines(&quiz_box, 8)?;
    append_child(&page, &quiz_box)?;

    let result_box = ElementBuilder::new("div")?
        .class("quiz-result")
        .build();
    append_child(&page, &result_box)?;

    // Best sellers en paralelo, como pool local de recomendación.
    // Requests independientes: cada fallo afecta solo a su parte.
    let local_products: Rc<RefCell<Vec<Product>>> = Rc::new(RefCell::new(Vec::new()));
    {
        let local_products = local_products.clone();
        spawn_local(async move {
            let vm = CatalogViewModel::new();
            if let Ok(products) = vm.load_best_sellers().await {
                *local_products.borrow_mut() = products;
            }
        });
    }

    {
        let quiz_box = quiz_box.clone();
        let result_box = result_box.clone();
        let state = state.clone();
        spawn_local(async move {
            let vm = QuizViewModel::new();
            match vm.load_questions().await {
                Ok(questions) => {
                    set_inner_html(&quiz_box, "");
                    if let Err(e) =
                        render_questions(&quiz_box, &result_box, &state, questions, local_products)
                    {
                        log::error!("❌ [QUIZ] Error renderizando preguntas: {:?}", e);
                    }
                }
                Err(e) => {
                    log::error!("❌ [QUIZ] Error cargando preguntas: {}", e);
                    set_inner_html(&quiz_box, "");
                    if let Ok(banner) = render_error_banner(LOAD_ERROR) {
                        let _ = append_child(&quiz_box, &banner);
                    }
                }
            }
        });
    }

    Ok(page)
}

fn render_questions(
    quiz_box: &Element,
    result_box: &Element,
    state: &AppState,
    questions: Vec<QuizQuestion>,
    local_products: Rc<RefCell<Vec<Product>>>,
) -> Result<(), JsValue> {
    // Una respuesta (tag) por pregunta
    let answers: Rc<RefCell<Vec<Option<String>>>> =
        Rc::new(RefCell::new(vec![None; questions.len()]));

    for (q_idx, question) in questions.iter().enumerate() {
        let block = ElementBuilder::new("div")?
            .class("quiz-question")
            .attr("data-question-id", &question.id)?
            .build();
        let prompt = ElementBuilder::new("h3")?
            .text(&question.prompt)
            .build();
        append_child(&block, &prompt)?;

        let options_row = ElementBuilder::new("div")?
            .class("quiz-options")
            .build();
        for option in &question.options {
            let button = ElementBuilder::new("button")?
                .class("quiz-option")
                .attr("type", "button")?
                .text(&option.label)
                .build();
            {
                let answers = answers.clone();
                let options_row = options_row.clone();
                let button_el = button.clone();
                let tag = option.tag.clone();
                on_click(&button, move |_| {
                    answers.borrow_mut()[q_idx] = Some(tag.clone());
                    // Solo una opción marcada por pregunta
                    let siblings = options_row.children();
                    for i in 0..siblings.length() {
                        if let Some(sibling) = siblings.item(i) {
                            let _ = remove_class(&sibling, "selected");
                        }
                    }
                    let _ = add_class(&button_el, "selected");
                })?;
            }
            append_child(&options_row, &button)?;
        }
        append_child(&block, &options_row)?;
        append_child(quiz_box, &block)?;
    }

    let hint = ElementBuilder::new("p")?
        .class("quiz-hint")
        .build();
    append_child(quiz_box, &hint)?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary btn-quiz-submit")
        .attr("type", "button")?
        .text("See my ritual")
        .build();
    {
        let result_box = result_box.clone();
        let state = state.clone();
        let hint = hint.clone();
        on_click(&submit, move |_| {
            let chosen: Vec<String> = answers
                .borrow()
                .iter()
                .filter_map(|a| a.clone())
                .collect();
            if chosen.len() < answers.borrow().len() {
                set_text_content(&hint, "Answer every question to see your result.");
                return;
            }
            set_text_content(&hint, "");

            let result_box = result_box.clone();
            let state = state.clone();
            let local_products = local_products.clone();
            spawn_local(async move {
                let vm = QuizViewModel::new();
                let pool = local_products.borrow().clone();
                let result = vm.submit(&chosen, &pool).await;

                if let Some(tag) = &result.skin_tag {
                    state.save_string_pref(SKIN_TAG_KEY, tag);
                }
                if let Err(e) = render_result(&result_box, &result.skin_tag, &result.recommended) {
                    log::error!("❌ [QUIZ] Error renderizando resultado: {:?}", e);
                }
            });
        })?;
    }
    append_child(quiz_box, &submit)?;

    Ok(())
}

fn render_result(
    result_box: &Element,
    skin_tag: &Option<String>,
    recommended: &[Product],
) -> Result<(), JsValue> {
    set_inner_html(result_box, "");

    let title_text = match skin_tag {
        Some(tag) => format!("Your skin profile: {}", tag),
        None => "Your ritual".to_string(),
    };
    let title = ElementBuilder::new("h2")?
        .class("quiz-result-title")
        .text(&title_text)
        .build();
    append_child(result_box, &title)?;

    if recommended.is_empty() {
        let note = ElementBuilder::new("p")?
            .text("We'll have recommendations for you soon.")
            .build();
        append_child(result_box, &note)?;
        return Ok(());
    }

    let grid = ElementBuilder::new("div")?
        .class("product-grid quiz-grid")
        .build();
    for product in recommended {
        if let Ok(card) = render_product_card(product) {
            append_child(&grid, &card)?;
        }
    }
    append_child(result_box, &grid)?;

    // Llevar el resultado a la vista
    result_box.scroll_into_view();

    Ok(())
}
