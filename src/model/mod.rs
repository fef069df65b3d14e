//! Request and response DTOs shared by the HTTP surface and the OpenAPI document.

pub mod api;
pub mod auth;
pub mod city;
pub mod file;
pub mod point_of_interest;
