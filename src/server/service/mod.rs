//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (store) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, id assignment rules, and patch application
//! - **Orchestration**: Coordinating store calls, persistence, and post-commit notifications
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod city;
pub mod file;
pub mod mail;
pub mod point_of_interest;
