//! Native Desktop App Module
//!
//! This module provides the native dashboard application using egui/eframe
//! that talks to the analytics backend over its JSON REST API.
//!
//! # Architecture
//!
//! The app module is organized into focused submodules:
//!
//! - **`config`** - Configuration management (API base URL, timeouts)
//! - **`session`** - Session store with on-disk token persistence
//! - **`api`** - HTTP client with bearer injection and refresh-on-401
//! - **`router`** - Route definitions and the navigation guard
//! - **`types`** - Request/response types
//! - **`fetch`** - Worker-thread plumbing for background requests
//! - **`state`** - Central application state
//! - **`views`** - egui views (auth, dashboard, charts, logs)
//! - **`theme`** - Colors and visuals
//! - **`debug`** - In-app ring-buffer logger
//! - **`main`** - Application entry point (binary)

pub mod api;
pub mod config;
pub mod debug;
pub mod fetch;
pub mod router;
pub mod session;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::Config;
pub use debug::{DebugCategory, DebugLevel, DebugLogger};
pub use fetch::{Loadable, Pending};
pub use router::{resolve, AnalysisTab, ForecastTab, Route};
pub use session::SessionStore;
pub use state::AppState;
pub use types::User;
