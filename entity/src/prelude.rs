pub use super::city::Entity as City;
pub use super::point_of_interest::Entity as PointOfInterest;
