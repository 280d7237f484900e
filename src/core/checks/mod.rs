//! Concrete checks registered with the runner
//!
//! Registration order defines both execution order and the summary table.
//! Key validation goes first; the burst check goes last so its extra
//! requests do not color the per-endpoint results.

pub mod google;
pub mod keys;
pub mod rate_limit;
pub mod spoonacular;

use crate::core::probe::runner::Probe;

pub use keys::KeyValidationProbe;
pub use rate_limit::RateLimitProbe;

/// Full ordered registry, fixed at startup.
pub fn registry() -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(KeyValidationProbe),
        Box::new(spoonacular::find_by_ingredients_check()),
        Box::new(spoonacular::recipe_details_check()),
        Box::new(spoonacular::search_check()),
        Box::new(google::geocoding_check()),
        Box::new(google::nearby_search_check()),
        Box::new(RateLimitProbe),
    ]
}
