//! Modalytics - Fashion Sales Analytics Dashboard
//!
//! Modalytics is the desktop client for a fashion sales analytics backend.
//! It provides login/registration, a dashboard shell, and a set of
//! data-visualization views (regional sales, clothing-type mix, price-range
//! distribution, rating distribution, sales/price forecasts) fetched from a
//! remote JSON REST API.
//!
//! # Module Structure
//!
//! - **`shared`** - Types independent of the UI layer
//!   - Error types (`shared::error`)
//!   - Configuration builder (`shared::config`)
//!
//! - **`app`** - Native desktop app (egui/eframe)
//!   - Session store with on-disk token persistence
//!   - HTTP client with bearer-token injection and refresh-on-401 retry
//!   - Route definitions and the navigation guard
//!   - Dashboard, analysis and forecast views
//!
//! # Authentication
//!
//! The backend issues a short-lived access token and a longer-lived refresh
//! token on login/registration. Every API request carries the access token
//! as a bearer credential; a 401 response triggers a single token-refresh
//! attempt followed by one retry of the original request. A failed refresh
//! clears the session and sends the user back to the login view.
//!
//! # Thread Safety
//!
//! egui is a single-threaded immediate mode GUI; network calls run on
//! worker threads and report back through `std::sync::mpsc` channels polled
//! once per frame. The session store is an `Arc<Mutex<_>>` handle shared
//! between the UI thread and the workers.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod app;
