use mealdb_decode::{decode_lookup_with, decode_meal_list, DecodeError, RecordNormalizer};
use std::sync::Arc;
use std::thread;

const DESSERTS: &str = r#"
{
    "meals": [
        {
            "strMeal": "Bakewell tart",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wyrqqq1468233628.jpg",
            "idMeal": "52767"
        },
        {
            "strMeal": "apple frangipan tart",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wxywrq1468235067.jpg",
            "idMeal": "52768"
        },
        {
            "strMeal": "Banana Pancakes",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/sywswr1511383814.jpg",
            "idMeal": "52855"
        }
    ]
}
"#;

#[test]
fn test_list_keeps_response_order() {
    let meals = decode_meal_list(DESSERTS).unwrap();
    let names: Vec<&str> = meals.iter().map(|meal| meal.name.as_str()).collect();

    assert_eq!(
        names,
        vec!["Bakewell tart", "apple frangipan tart", "Banana Pancakes"]
    );
}

#[test]
fn test_list_sorting_is_left_to_caller() {
    let mut meals = decode_meal_list(DESSERTS).unwrap();
    meals.sort_by(|a, b| a.name.cmp(&b.name));

    let ids: Vec<&str> = meals.iter().map(|meal| meal.id.as_str()).collect();
    assert_eq!(ids, vec!["52767", "52855", "52768"]);
}

#[test]
fn test_list_entry_with_bad_thumbnail() {
    let json = r#"{"meals": [{"strMeal": "Tart", "strMealThumb": "tart.jpg", "idMeal": "1"}]}"#;

    assert!(matches!(
        decode_meal_list(json),
        Err(DecodeError::InvalidUrl { key: "strMealThumb", .. })
    ));
}

#[test]
fn test_list_entry_with_numeric_id() {
    let json = r#"{"meals": [{"strMeal": "Tart", "strMealThumb": "https://example.com/t.jpg", "idMeal": 1}]}"#;

    assert!(matches!(decode_meal_list(json), Err(DecodeError::Json(_))));
}

#[test]
fn test_concurrent_lookups_share_one_normalizer() {
    let normalizer = Arc::new(RecordNormalizer::default());

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let normalizer = Arc::clone(&normalizer);
            thread::spawn(move || {
                let json = format!(
                    r#"{{"meals": [{{
                        "idMeal": "{n}",
                        "strMeal": "Meal {n}",
                        "strCategory": "Dessert",
                        "strArea": "Unknown",
                        "strInstructions": "Serve.",
                        "strMealThumb": "https://example.com/{n}.jpg",
                        "strIngredient{slot}": "Sugar",
                        "strMeasure{slot}": "{n} tbsp"
                    }}]}}"#,
                    slot = n + 1
                );
                decode_lookup_with(&normalizer, &json).unwrap().unwrap()
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let meal = handle.join().unwrap();
        assert_eq!(meal.id, n.to_string());
        assert_eq!(meal.ingredients.len(), 1);
        assert_eq!(meal.ingredients[0].measurement, format!("{n} tbsp"));
    }
}
