//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the router with a chosen configuration
//! - Helper functions for building request bodies

pub mod fixtures;

use axum::Router;

use redpen_backend::config::Config;
use redpen_backend::{app, AppState};

/// Test context holding the configured router.
pub struct TestContext {
    pub config: Config,
    app: Router,
}

impl TestContext {
    /// Create a new test context with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new test context with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        let state = AppState::from_config(&config);
        let app = app(state);
        Self { config, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}
