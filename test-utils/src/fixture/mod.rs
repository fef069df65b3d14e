//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of conversions and business logic, and as defaults for factory builders.

pub mod city;
pub mod point_of_interest;
