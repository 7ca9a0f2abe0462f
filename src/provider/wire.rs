//! file: wire.rs
//! author: Jacob Xie
//! date: 2025/12/20 11:40:52 Saturday
//! brief: Spoonacular response bodies

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RandomRecipes {
    #[serde(default)]
    pub recipes: Vec<RecipeSummary>,
}

#[derive(Debug, Deserialize)]
pub struct RecipeSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NutritionWidget {
    #[serde(default)]
    pub calories: Option<CalorieValue>,
}

/// The widget reports calories as a bare number or as text like `"316k"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CalorieValue {
    Whole(u64),
    Fractional(f64),
    Text(String),
}

impl CalorieValue {
    pub fn to_calories(&self) -> Option<u32> {
        match self {
            CalorieValue::Whole(n) => u32::try_from(*n).ok(),
            CalorieValue::Fractional(f) if (0.0..=f64::from(u32::MAX)).contains(f) => {
                Some(f.round() as u32)
            }
            CalorieValue::Fractional(_) => None,
            CalorieValue::Text(text) => {
                let text = text.trim();
                let end = text
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(text.len());
                text[..end].parse().ok()
            }
        }
    }

    pub fn raw(&self) -> String {
        match self {
            CalorieValue::Whole(n) => n.to_string(),
            CalorieValue::Fractional(f) => f.to_string(),
            CalorieValue::Text(text) => text.clone(),
        }
    }
}
