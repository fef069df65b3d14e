//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, convert DTOs into domain parameters,
//! call a service opened on the request's store, and convert the result back into DTOs.

pub mod auth;
pub mod city;
pub mod file;
pub mod point_of_interest;

#[cfg(test)]
mod test;
