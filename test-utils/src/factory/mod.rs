//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has its own module with a `Factory` builder for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let city = factory::create_city(&db).await?;
//! let point = factory::point_of_interest::PointOfInterestFactory::new(&db, city.id)
//!     .name("Central Park")
//!     .build()
//!     .await?;
//! ```

pub mod city;
pub mod helpers;
pub mod point_of_interest;

pub use city::create_city;
pub use point_of_interest::create_point_of_interest;
