//! Point of interest fixtures for creating in-memory test data.

use entity::point_of_interest;

/// Default test point of interest name.
pub const DEFAULT_NAME: &str = "Central Park";

/// Default test point of interest description.
pub const DEFAULT_DESCRIPTION: &str = "The most visited urban park in the United States.";

/// Creates a point of interest entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - city_id: `1`
/// - name: `"Central Park"`
/// - description: `Some("The most visited urban park in the United States.")`
pub fn entity() -> point_of_interest::Model {
    point_of_interest::Model {
        id: 1,
        city_id: 1,
        name: DEFAULT_NAME.to_string(),
        description: Some(DEFAULT_DESCRIPTION.to_string()),
    }
}
