//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the CityInfo API,
//! including API endpoints, business logic, the entity store, and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Validation, patching, persistence, and notifications
//! - **Data Layer** (`data/`) - `CityInfoStore` variants and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Patch Engine** (`patch/`) - Parsing, applying, and validating JSON Patch documents
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token and city policy guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Logging** (`logging`) - Console and rotating file subscribers
//! - **State** (`state`) - Shared application state (store provider, token, mail, files)
//! - **Startup** (`startup`) - Database connection, migrations, and state construction
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** checks the bearer token and permissions through `AuthGuard`
//! 3. **Controller** opens a store for the request and converts DTOs to params
//! 4. **Service** validates, looks up, patches, writes back, and persists
//! 5. **Service** fires post-commit notifications
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod model;
pub mod patch;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod validation;
