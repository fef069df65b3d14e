//! City fixtures for creating in-memory test data.

use entity::city;

/// Default test city name.
pub const DEFAULT_NAME: &str = "New York City";

/// Default test city description.
pub const DEFAULT_DESCRIPTION: &str = "The one with that big park.";

/// Creates a city entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"New York City"`
/// - description: `Some("The one with that big park.")`
pub fn entity() -> city::Model {
    city::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        description: Some(DEFAULT_DESCRIPTION.to_string()),
    }
}
