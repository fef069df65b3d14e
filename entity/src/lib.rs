//! SeaORM entity models for the CityInfo database.

pub mod prelude;

pub mod city;
pub mod point_of_interest;
