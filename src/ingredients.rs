use crate::model::IngredientPair;
use crate::raw::{ingredient_key, measure_key, RawFieldMap};
use log::trace;

/// Number of numbered ingredient slots the API provides
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// Flattens the numbered `strIngredientN`/`strMeasureN` fields into a list.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngredientCollector;

impl IngredientCollector {
    /// Pairs are returned in slot order. A slot whose name or measurement is
    /// missing or blank contributes nothing; duplicates are kept.
    pub fn collect(&self, raw: &RawFieldMap) -> Vec<IngredientPair> {
        (1..=MAX_INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let name = trimmed(raw.get(&ingredient_key(slot)));
                let measurement = trimmed(raw.get(&measure_key(slot)));

                match (name, measurement) {
                    (Some(name), Some(measurement)) => Some(IngredientPair {
                        name: name.to_string(),
                        measurement: measurement.to_string(),
                    }),
                    (name, measurement) => {
                        if name.is_some() || measurement.is_some() {
                            trace!("Skipping incomplete ingredient slot {slot}");
                        }
                        None
                    }
                }
            })
            .collect()
    }
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
