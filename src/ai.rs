//! Ingredient Suggestions
//!
//! Boundary to the generative-AI service. The host page installs a
//! `window.ingredientAi` glue object over the SDK; the service is asked for
//! the ingredients of a dish and must answer JSON conforming to the fixed
//! schema `{"ingredients": [{"name": ..., "quantity": ...}]}`. A failed call
//! or a malformed answer produces an error and no list change.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "ingredientAi"], js_name = isConfigured)]
    fn is_configured() -> bool;

    #[wasm_bindgen(js_namespace = ["window", "ingredientAi"], js_name = suggest, catch)]
    async fn suggest_raw(dish: &str) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Deserialize)]
struct SuggestionResponse {
    ingredients: Vec<SuggestedIngredient>,
}

#[derive(Debug, Deserialize)]
struct SuggestedIngredient {
    name: String,
    quantity: String,
}

/// One suggested ingredient, as shown in the review panel
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub name: String,
    /// Editable amount text
    pub quantity: String,
    /// Suggestions start selected; the user deselects what they already have
    pub selected: bool,
}

/// Whether the host page provides a configured suggestion service
pub fn available() -> bool {
    let Some(win) = web_sys::window() else {
        return false;
    };
    match js_sys::Reflect::get(&win, &JsValue::from_str("ingredientAi")) {
        Ok(glue) if !glue.is_undefined() && !glue.is_null() => is_configured(),
        _ => false,
    }
}

fn parse_suggestions(text: &str) -> Result<Vec<Suggestion>, String> {
    let response: SuggestionResponse = serde_json::from_str(text).map_err(|e| e.to_string())?;
    Ok(response
        .ingredients
        .into_iter()
        .map(|i| Suggestion {
            name: i.name,
            quantity: i.quantity,
            selected: true,
        })
        .collect())
}

/// Ask the service for the shopping ingredients of `dish`
pub async fn suggest(dish: &str) -> Result<Vec<Suggestion>, String> {
    let value = suggest_raw(dish).await.map_err(|e| format!("{:?}", e))?;
    let text = value
        .as_string()
        .ok_or_else(|| "suggestion response is not a string".to_string())?;
    parse_suggestions(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marks_all_selected() {
        let text = r#"{"ingredients":[{"name":"豚肉","quantity":"300g"},{"name":"玉ねぎ","quantity":"1個"}]}"#;
        let suggestions = parse_suggestions(text).unwrap();
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions.iter().all(|s| s.selected));
        assert_eq!(suggestions[0].name, "豚肉");
        assert_eq!(suggestions[1].quantity, "1個");
    }

    #[test]
    fn test_parse_empty_list() {
        let suggestions = parse_suggestions(r#"{"ingredients":[]}"#).unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_malformed_response_is_error() {
        assert!(parse_suggestions("not json").is_err());
        assert!(parse_suggestions(r#"{"foo":[]}"#).is_err());
        assert!(parse_suggestions(r#"{"ingredients":[{"name":"x"}]}"#).is_err());
    }
}
