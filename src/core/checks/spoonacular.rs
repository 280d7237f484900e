//! Spoonacular recipe-API checks
//!
//! Three endpoint descriptors against `api.spoonacular.com`: ingredient
//! search, recipe lookup by id, and full-text search. Query parameters are
//! fixed; only the API key comes from configuration.

use serde_json::Value;
use url::Url;

use crate::config::Credentials;
use crate::core::probe::endpoint::EndpointCheck;
use crate::core::probe::report::Reporter;
use crate::core::probe::types::ProbeError;

const BASE: &str = "https://api.spoonacular.com";

/// Fixed ingredient list for the find-by-ingredients check.
pub const INGREDIENTS: &str = "apple,chicken,garlic";
/// Known-good recipe id (a pasta dish) for the details check.
pub const RECIPE_ID: u32 = 282656;
/// Full-text query for the search check.
pub const SEARCH_QUERY: &str = "pasta";

pub fn endpoint_url(path: &str) -> Result<Url, ProbeError> {
    Url::parse(BASE)
        .and_then(|base| base.join(path))
        .map_err(|e| ProbeError::Config(format!("invalid endpoint URL {path}: {e}")))
}

pub fn find_by_ingredients_check() -> EndpointCheck {
    EndpointCheck {
        name: "Spoonacular - Find by Ingredients",
        title: "Spoonacular - Find Recipes by Ingredients",
        announce: |reporter| {
            reporter.info(&format!("Testing with ingredients: {INGREDIENTS}"));
        },
        build_url: find_by_ingredients_url,
        validate: validate_find_by_ingredients,
    }
}

pub fn find_by_ingredients_url(creds: &Credentials) -> Result<Url, ProbeError> {
    let mut url = endpoint_url("/recipes/findByIngredients")?;
    url.query_pairs_mut()
        .append_pair("ingredients", INGREDIENTS)
        .append_pair("number", "3")
        .append_pair("apiKey", &creds.spoonacular.value);
    Ok(url)
}

pub fn validate_find_by_ingredients(payload: &Value, reporter: &Reporter) -> Result<(), ProbeError> {
    let recipes = payload
        .as_array()
        .ok_or_else(|| ProbeError::DataShape("expected a JSON array of recipes".into()))?;

    if recipes.is_empty() {
        return Err(ProbeError::DataShape("recipe list is empty".into()));
    }

    reporter.success(&format!("API returned {} recipes", recipes.len()));
    for (i, recipe) in recipes.iter().take(3).enumerate() {
        reporter.detail(&format!("{}. {}", i + 1, str_field(recipe, "title")));
        reporter.detail(&format!(
            "   Used: {}, Missed: {}",
            num_field(recipe, "usedIngredientCount"),
            num_field(recipe, "missedIngredientCount"),
        ));
    }
    Ok(())
}

pub fn recipe_details_check() -> EndpointCheck {
    EndpointCheck {
        name: "Spoonacular - Get Recipe Details",
        title: "Spoonacular - Get Recipe Details",
        announce: |reporter| {
            reporter.info(&format!("Fetching recipe ID: {RECIPE_ID}"));
        },
        build_url: recipe_details_url,
        validate: validate_recipe_details,
    }
}

pub fn recipe_details_url(creds: &Credentials) -> Result<Url, ProbeError> {
    let mut url = endpoint_url(&format!("/recipes/{RECIPE_ID}/information"))?;
    url.query_pairs_mut()
        .append_pair("apiKey", &creds.spoonacular.value);
    Ok(url)
}

pub fn validate_recipe_details(payload: &Value, reporter: &Reporter) -> Result<(), ProbeError> {
    let title = payload
        .get("title")
        .and_then(Value::as_str)
        .ok_or_else(|| ProbeError::DataShape("recipe response has no title".into()))?;

    reporter.success(&format!("Retrieved: {title}"));
    reporter.detail(&format!("Servings: {}", num_field(payload, "servings")));
    reporter.detail(&format!(
        "Ready in: {} minutes",
        num_field(payload, "readyInMinutes")
    ));
    reporter.detail(&format!(
        "Health Score: {}/100",
        num_field(payload, "healthScore")
    ));
    Ok(())
}

pub fn search_check() -> EndpointCheck {
    EndpointCheck {
        name: "Spoonacular - Search Recipes",
        title: "Spoonacular - Search Recipes",
        announce: |reporter| {
            reporter.info(&format!("Searching for: {SEARCH_QUERY}"));
        },
        build_url: search_url,
        validate: validate_search,
    }
}

pub fn search_url(creds: &Credentials) -> Result<Url, ProbeError> {
    let mut url = endpoint_url("/recipes/complexSearch")?;
    url.query_pairs_mut()
        .append_pair("query", SEARCH_QUERY)
        .append_pair("number", "3")
        .append_pair("apiKey", &creds.spoonacular.value);
    Ok(url)
}

pub fn validate_search(payload: &Value, reporter: &Reporter) -> Result<(), ProbeError> {
    let total = payload
        .get("totalResults")
        .and_then(Value::as_u64)
        .ok_or_else(|| ProbeError::DataShape("search response has no totalResults".into()))?;
    let results = payload
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| ProbeError::DataShape("search response has no results array".into()))?;

    reporter.success(&format!("Found {total} recipes"));
    for (i, recipe) in results.iter().take(3).enumerate() {
        reporter.detail(&format!("{}. {}", i + 1, str_field(recipe, "title")));
    }
    Ok(())
}

/// String field for display, "N/A" when absent.
pub(crate) fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("N/A")
}

/// Numeric field for display, "N/A" when absent or non-numeric.
pub(crate) fn num_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .filter(|v| v.is_number())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
