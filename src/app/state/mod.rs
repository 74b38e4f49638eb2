use std::sync::Arc;

use crate::app::api::ApiClient;
use crate::app::config::Config;
use crate::app::debug::{DebugCategory, DebugLogger};
use crate::app::fetch::{Loadable, Pending};
use crate::app::router::{self, AnalysisTab, ForecastTab, Route};
use crate::app::session::SessionStore;
use crate::app::types::{
    AuthResponse, ClothingTypeSales, PriceForecast, PriceRangeSales, RatingDistribution,
    RegionSales, SalesForecastPoint,
};
use crate::shared::error::ApiError;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub session: SessionStore,
    pub client: Arc<ApiClient>,
    pub route: Route,

    // Auth form
    pub username_input: String,
    pub email_input: String,
    pub password_input: String,
    pub confirm_password_input: String,
    pub auth_error: Option<String>,
    pub auth_loading: bool,
    pending_auth: Option<Pending<Result<AuthResponse, ApiError>>>,

    // Per-view datasets
    pub region_sales: Loadable<Vec<RegionSales>>,
    pub clothing_type_sales: Loadable<Vec<ClothingTypeSales>>,
    pub price_range_sales: Loadable<Vec<PriceRangeSales>>,
    pub rating_distribution: Loadable<Vec<RatingDistribution>>,
    pub sales_forecast: Loadable<Vec<SalesForecastPoint>>,
    pub price_forecast: Loadable<Vec<PriceForecast>>,
    pending_region_sales: Option<Pending<Result<Vec<RegionSales>, ApiError>>>,
    pending_clothing_type_sales: Option<Pending<Result<Vec<ClothingTypeSales>, ApiError>>>,
    pending_price_range_sales: Option<Pending<Result<Vec<PriceRangeSales>, ApiError>>>,
    pending_rating_distribution: Option<Pending<Result<Vec<RatingDistribution>, ApiError>>>,
    pending_sales_forecast: Option<Pending<Result<Vec<SalesForecastPoint>, ApiError>>>,
    pending_price_forecast: Option<Pending<Result<Vec<PriceForecast>, ApiError>>>,

    pub logger: DebugLogger,
    pub logs_filter: Option<DebugCategory>,
}

impl AppState {
    pub fn new() -> Self {
        let session = match SessionStore::default_path() {
            Some(path) => SessionStore::load(path),
            None => SessionStore::in_memory(),
        };
        Self::from_parts(Config::new(), session)
    }

    /// Build the state from an explicit config and session store.
    pub fn from_parts(config: Config, session: SessionStore) -> Self {
        let logger = DebugLogger::new(1000);
        let client = Arc::new(ApiClient::new(config.clone(), session.clone()));
        let route = router::resolve(Route::Home, session.is_logged_in());
        logger.info(
            DebugCategory::Route,
            format!("starting at {}", route.title()),
        );

        Self {
            config,
            session,
            client,
            route,
            username_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            confirm_password_input: String::new(),
            auth_error: None,
            auth_loading: false,
            pending_auth: None,
            region_sales: Loadable::Idle,
            clothing_type_sales: Loadable::Idle,
            price_range_sales: Loadable::Idle,
            rating_distribution: Loadable::Idle,
            sales_forecast: Loadable::Idle,
            price_forecast: Loadable::Idle,
            pending_region_sales: None,
            pending_clothing_type_sales: None,
            pending_price_range_sales: None,
            pending_rating_distribution: None,
            pending_sales_forecast: None,
            pending_price_forecast: None,
            logger,
            logs_filter: None,
        }
    }

    /// Apply the navigation guard and switch views. Data routes trigger
    /// their first fetch here.
    pub fn navigate(&mut self, target: Route) {
        let resolved = router::resolve(target, self.session.is_logged_in());
        if resolved != self.route {
            self.logger.info(
                DebugCategory::Route,
                format!("navigate: {} -> {}", self.route.title(), resolved.title()),
            );
            self.route = resolved;
        }
        self.ensure_route_data();
    }

    fn ensure_route_data(&mut self) {
        match self.route {
            Route::Analysis(AnalysisTab::RegionSales) if self.region_sales.is_idle() => {
                self.load_region_sales()
            }
            Route::Analysis(AnalysisTab::ClothingTypeSales)
                if self.clothing_type_sales.is_idle() =>
            {
                self.load_clothing_type_sales()
            }
            Route::Analysis(AnalysisTab::PriceRangeSales) if self.price_range_sales.is_idle() => {
                self.load_price_range_sales()
            }
            Route::Analysis(AnalysisTab::RatingDistribution)
                if self.rating_distribution.is_idle() =>
            {
                self.load_rating_distribution()
            }
            Route::Forecast(ForecastTab::Sales) if self.sales_forecast.is_idle() => {
                self.load_sales_forecast()
            }
            Route::Forecast(ForecastTab::Price) if self.price_forecast.is_idle() => {
                self.load_price_forecast()
            }
            _ => {}
        }
    }

    /// Poll every in-flight request once per frame.
    pub fn check_pending_results(&mut self) {
        self.check_auth_result();

        let logger = self.logger.clone();
        poll_slot(
            &mut self.pending_region_sales,
            &mut self.region_sales,
            &logger,
            "region sales",
        );
        poll_slot(
            &mut self.pending_clothing_type_sales,
            &mut self.clothing_type_sales,
            &logger,
            "clothing-type sales",
        );
        poll_slot(
            &mut self.pending_price_range_sales,
            &mut self.price_range_sales,
            &logger,
            "price-range sales",
        );
        poll_slot(
            &mut self.pending_rating_distribution,
            &mut self.rating_distribution,
            &logger,
            "rating distribution",
        );
        poll_slot(
            &mut self.pending_sales_forecast,
            &mut self.sales_forecast,
            &logger,
            "sales forecast",
        );
        poll_slot(
            &mut self.pending_price_forecast,
            &mut self.price_forecast,
            &logger,
            "price forecast",
        );

        // A failed token refresh clears the session from a worker thread;
        // re-apply the guard so the user lands back on the login view.
        if self.route.requires_auth() && !self.session.is_logged_in() {
            self.logger
                .warn(DebugCategory::Auth, "session expired, returning to sign-in");
            self.auth_error = Some("Your session has expired. Please sign in again.".to_string());
            self.route = Route::Login;
        }
    }

    fn check_auth_result(&mut self) {
        let Some(ref pending) = self.pending_auth else {
            return;
        };
        let Some(result) = pending.poll() else {
            return;
        };
        self.pending_auth = None;
        self.auth_loading = false;

        match result {
            Ok(auth) => {
                self.logger.info(
                    DebugCategory::Auth,
                    format!("signed in as @{}", auth.user.username),
                );
                self.auth_error = None;
                self.password_input.clear();
                self.confirm_password_input.clear();
                self.navigate(Route::Dashboard);
            }
            Err(e) => {
                self.logger
                    .error(DebugCategory::Auth, format!("authentication failed: {}", e));
                self.auth_error = Some(e.to_string());
            }
        }
    }

    pub fn handle_login(&mut self) {
        if self.username_input.trim().is_empty() || self.password_input.is_empty() {
            self.auth_error = Some("Username and password are required".to_string());
            return;
        }

        self.auth_loading = true;
        self.auth_error = None;

        let username = self.username_input.trim().to_string();
        let password = self.password_input.clone();
        let client = Arc::clone(&self.client);
        self.pending_auth = Some(Pending::spawn(move || client.login(username, password)));
    }

    pub fn handle_register(&mut self) {
        if self.username_input.trim().is_empty() {
            self.auth_error = Some("Username is required".to_string());
            return;
        }
        if self.email_input.trim().is_empty() || self.password_input.is_empty() {
            self.auth_error = Some("Email and password are required".to_string());
            return;
        }
        // Simple email validation
        if !self.email_input.contains('@') || !self.email_input.contains('.') {
            self.auth_error = Some("Please enter a valid email address".to_string());
            return;
        }
        if self.password_input != self.confirm_password_input {
            self.auth_error = Some("Passwords do not match".to_string());
            return;
        }

        self.auth_loading = true;
        self.auth_error = None;

        let username = self.username_input.trim().to_string();
        let email = self.email_input.trim().to_string();
        let password = self.password_input.clone();
        let client = Arc::clone(&self.client);
        self.pending_auth = Some(Pending::spawn(move || {
            client.register(username, email, password)
        }));
    }

    pub fn logout(&mut self) {
        // Best-effort server notification; the local session goes away
        // regardless of the outcome.
        let client = Arc::clone(&self.client);
        std::thread::spawn(move || {
            if let Err(e) = client.logout() {
                tracing::debug!(error = %e, "logout request failed");
            }
        });
        self.session.clear();
        self.reset_after_logout();
        self.logger.info(DebugCategory::Auth, "logged out");
    }

    fn reset_after_logout(&mut self) {
        self.route = Route::Login;
        self.username_input.clear();
        self.email_input.clear();
        self.password_input.clear();
        self.confirm_password_input.clear();
        self.auth_error = None;
        self.auth_loading = false;
        self.pending_auth = None;
        self.region_sales = Loadable::Idle;
        self.clothing_type_sales = Loadable::Idle;
        self.price_range_sales = Loadable::Idle;
        self.rating_distribution = Loadable::Idle;
        self.sales_forecast = Loadable::Idle;
        self.price_forecast = Loadable::Idle;
        self.pending_region_sales = None;
        self.pending_clothing_type_sales = None;
        self.pending_price_range_sales = None;
        self.pending_rating_distribution = None;
        self.pending_sales_forecast = None;
        self.pending_price_forecast = None;
    }

    pub fn toggle_auth_mode(&mut self) {
        let target = if self.route == Route::Register {
            Route::Login
        } else {
            Route::Register
        };
        self.auth_error = None;
        self.password_input.clear();
        self.confirm_password_input.clear();
        self.navigate(target);
    }

    pub fn load_region_sales(&mut self) {
        if self.pending_region_sales.is_some() {
            return;
        }
        self.region_sales = Loadable::Loading;
        let client = Arc::clone(&self.client);
        self.pending_region_sales = Some(Pending::spawn(move || client.region_sales()));
    }

    pub fn load_clothing_type_sales(&mut self) {
        if self.pending_clothing_type_sales.is_some() {
            return;
        }
        self.clothing_type_sales = Loadable::Loading;
        let client = Arc::clone(&self.client);
        self.pending_clothing_type_sales = Some(Pending::spawn(move || client.clothing_type_sales()));
    }

    pub fn load_price_range_sales(&mut self) {
        if self.pending_price_range_sales.is_some() {
            return;
        }
        self.price_range_sales = Loadable::Loading;
        let client = Arc::clone(&self.client);
        self.pending_price_range_sales = Some(Pending::spawn(move || client.price_range_sales()));
    }

    pub fn load_rating_distribution(&mut self) {
        if self.pending_rating_distribution.is_some() {
            return;
        }
        self.rating_distribution = Loadable::Loading;
        let client = Arc::clone(&self.client);
        self.pending_rating_distribution =
            Some(Pending::spawn(move || client.rating_distribution()));
    }

    pub fn load_sales_forecast(&mut self) {
        if self.pending_sales_forecast.is_some() {
            return;
        }
        self.sales_forecast = Loadable::Loading;
        let client = Arc::clone(&self.client);
        self.pending_sales_forecast = Some(Pending::spawn(move || client.sales_forecast()));
    }

    pub fn load_price_forecast(&mut self) {
        if self.pending_price_forecast.is_some() {
            return;
        }
        self.price_forecast = Loadable::Loading;
        let client = Arc::clone(&self.client);
        self.pending_price_forecast = Some(Pending::spawn(move || client.price_forecast()));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Move a finished worker result into its view slot.
fn poll_slot<T: Send + 'static>(
    pending: &mut Option<Pending<Result<T, ApiError>>>,
    slot: &mut Loadable<T>,
    logger: &DebugLogger,
    what: &str,
) {
    let Some(p) = pending.as_ref() else {
        return;
    };
    let Some(result) = p.poll() else {
        return;
    };
    *pending = None;
    match result {
        Ok(data) => {
            logger.info(DebugCategory::Data, format!("loaded {}", what));
            *slot = Loadable::Loaded(data);
        }
        Err(e) => {
            logger.error(DebugCategory::Data, format!("loading {} failed: {}", what, e));
            *slot = Loadable::Failed(e.to_string());
        }
    }
}
