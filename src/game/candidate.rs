//! file: candidate.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:12:41 Saturday
//! brief: a recipe with its calorie count

/// One recipe pulled from the provider. Never mutated after the fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: u64,
    pub name: String,
    pub image_url: String,
    pub calories: u32,
}

impl Candidate {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        image_url: impl Into<String>,
        calories: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: image_url.into(),
            calories,
        }
    }
}
