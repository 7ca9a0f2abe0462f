//! file: spoonacular.rs
//! author: Jacob Xie
//! date: 2025/12/20 11:52:30 Saturday
//! brief:

use reqwest::blocking::{Client, Response};
use tracing::debug;

use super::{
    RecipeProvider,
    wire::{NutritionWidget, RandomRecipes},
};
use crate::{
    config::Config,
    error::{ConfigError, FetchError},
    game::Candidate,
};

/// Two round trips per candidate: a random recipe, then its nutrition widget.
#[derive(Debug, Clone)]
pub struct SpoonacularProvider {
    client: Client,
    api_base: String,
    api_key: String,
}

impl SpoonacularProvider {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("calorie-duel/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn random_recipe_url(&self) -> String {
        format!("{}/recipes/random", self.api_base)
    }

    pub fn nutrition_url(&self, recipe_id: u64) -> String {
        format!("{}/recipes/{recipe_id}/nutritionWidget.json", self.api_base)
    }

    fn get(&self, url: &str, endpoint: &'static str) -> Result<Response, FetchError> {
        let response = self
            .client
            .get(url)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { endpoint, status });
        }
        Ok(response)
    }
}

impl RecipeProvider for SpoonacularProvider {
    fn fetch_random_candidate(&self) -> Result<Candidate, FetchError> {
        let random: RandomRecipes = self.get(&self.random_recipe_url(), "random")?.json()?;
        let recipe = random
            .recipes
            .into_iter()
            .next()
            .ok_or(FetchError::NoRecipe)?;

        let widget: NutritionWidget = self
            .get(&self.nutrition_url(recipe.id), "nutritionWidget")?
            .json()?;
        let calories = match widget.calories {
            Some(value) => value.to_calories().ok_or_else(|| FetchError::Calories {
                recipe_id: recipe.id,
                raw: value.raw(),
            })?,
            None => {
                return Err(FetchError::Calories {
                    recipe_id: recipe.id,
                    raw: "<missing>".to_owned(),
                });
            }
        };

        debug!(recipe_id = recipe.id, calories, "fetched candidate");
        Ok(Candidate::new(
            recipe.id,
            recipe.title,
            recipe.image.unwrap_or_default(),
            calories,
        ))
    }
}
