//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Store provider opening a `CityInfoStore` per request
//! - Token service for issuing and validating bearer tokens
//! - Mail service for post-commit notifications
//! - File service for the versioned document endpoints

use std::sync::Arc;

use crate::server::{
    data::StoreProvider,
    service::{auth::TokenService, file::FileService, mail::MailService},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `StoreProvider` holds either an `Arc` or a connection pool handle
/// - `TokenService` holds the signing keys
/// - `Arc<dyn MailService>` is a reference-counted pointer
/// - `FileService` holds two paths
#[derive(Clone)]
pub struct AppState {
    /// Opens the entity store for each request.
    pub store: StoreProvider,

    /// Issues and validates bearer tokens.
    pub tokens: TokenService,

    /// Sends notifications after mutations are persisted.
    pub mail_service: Arc<dyn MailService>,

    /// Serves the download document and stores uploads.
    pub files: FileService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `store` - Store provider for the configured backend
    /// - `tokens` - Token service built from the auth configuration
    /// - `mail_service` - Mail service for the current build profile
    /// - `files` - File service built from the files configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        store: StoreProvider,
        tokens: TokenService,
        mail_service: Arc<dyn MailService>,
        files: FileService,
    ) -> Self {
        Self {
            store,
            tokens,
            mail_service,
            files,
        }
    }
}
