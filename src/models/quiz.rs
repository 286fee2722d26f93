// ============================================================================
// QUIZ - Skin quiz: preguntas, opciones y scoring local por tags
// ============================================================================

use serde::Deserialize;
use crate::models::common::RawId;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuizOption {
    #[serde(default, alias = "text")]
    pub label: String,
    #[serde(default, alias = "value")]
    pub tag: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuizQuestion {
    #[serde(default)]
    pub id: RawId,
    #[serde(default, alias = "question")]
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<RawQuizOption>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizOption {
    pub label: String,
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

impl QuizQuestion {
    pub fn from_raw(raw: &RawQuizQuestion) -> QuizQuestion {
        QuizQuestion {
            id: raw.id.canonical(),
            prompt: raw.prompt.trim().to_string(),
            options: raw
                .options
                .iter()
                .map(|o| QuizOption {
                    label: o.label.trim().to_string(),
                    tag: o.tag.trim().to_string(),
                })
                .collect(),
        }
    }
}

/// Tag dominante entre las respuestas elegidas (mayoría simple).
/// Empates se resuelven por orden de primera aparición; sin respuestas → None.
pub fn dominant_tag(answers: &[String]) -> Option<String> {
    let mut seen: Vec<(String, usize)> = Vec::new();
    for tag in answers {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        match seen.iter_mut().find(|(t, _)| t == tag) {
            Some((_, count)) => *count += 1,
            None => seen.push((tag.to_string(), 1)),
        }
    }
    // Solo un conteo estrictamente mayor desbanca al líder: en empate
    // gana la primera aparición
    let mut best: Option<(String, usize)> = None;
    for (tag, count) in seen {
        match &best {
            Some((_, best_count)) if *best_count >= count => {}
            _ => best = Some((tag, count)),
        }
    }
    best.map(|(tag, _)| tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn majority_tag_wins() {
        let answers = tags(&["hydration", "brightening", "hydration"]);
        assert_eq!(dominant_tag(&answers), Some("hydration".to_string()));
    }

    #[test]
    fn ties_break_by_first_appearance() {
        let answers = tags(&["calming", "hydration", "hydration", "calming"]);
        assert_eq!(dominant_tag(&answers), Some("calming".to_string()));
    }

    #[test]
    fn empty_answers_give_no_tag() {
        assert_eq!(dominant_tag(&[]), None);
        assert_eq!(dominant_tag(&tags(&["", "  "])), None);
    }

    #[test]
    fn question_options_accept_both_spellings() {
        let raw: RawQuizQuestion = serde_json::from_str(
            r#"{"id":1,"question":"How does your skin feel?","options":[{"text":"Tight","value":"hydration"},{"label":"Shiny","tag":"balancing"}]}"#,
        )
        .unwrap();
        let question = QuizQuestion::from_raw(&raw);
        assert_eq!(question.prompt, "How does your skin feel?");
        assert_eq!(question.options[0].label, "Tight");
        assert_eq!(question.options[0].tag, "hydration");
        assert_eq!(question.options[1].tag, "balancing");
    }
}
