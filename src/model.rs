use serde::Serialize;
use url::Url;

/// A fully decoded meal from the lookup endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub thumbnail_url: Url,
    pub source_url: Option<Url>,
    pub image_source: Option<String>,
    pub category: String,
    pub cuisine: String,
    /// Raw instructions text, one step per line
    pub instructions: String,
    pub tags: Vec<String>,
    pub youtube_url: Option<Url>,
    pub ingredients: Vec<IngredientPair>,
}

/// One ingredient with its measurement, both trimmed and non-empty.
///
/// Recipes may list the same pair more than once, so a pair is identified
/// by its position in [`MealDetail::ingredients`], never by its values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IngredientPair {
    pub name: String,
    pub measurement: String,
}

/// Positional identity of an ingredient within its meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct IngredientId(pub usize);

/// A meal as listed by the filter endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: Url,
}

impl MealDetail {
    /// Splits [`instructions`](Self::instructions) into steps.
    ///
    /// Carriage returns are removed before splitting on newlines, and blank
    /// lines are dropped.
    pub fn instruction_steps(&self) -> Vec<String> {
        split_steps(&self.instructions)
    }

    pub fn ingredient_entries(&self) -> impl Iterator<Item = (IngredientId, &IngredientPair)> {
        self.ingredients
            .iter()
            .enumerate()
            .map(|(position, pair)| (IngredientId(position), pair))
    }

    pub fn ingredient(&self, id: IngredientId) -> Option<&IngredientPair> {
        self.ingredients.get(id.0)
    }
}

fn split_steps(instructions: &str) -> Vec<String> {
    instructions
        .replace('\r', "")
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
