//! Domain models shared by the service and data layers.
//!
//! Entities coming out of SeaORM (or the in-memory store) are converted into these types
//! at the repository boundary; controllers convert them into DTOs before responding.

pub mod city;
pub mod point_of_interest;
