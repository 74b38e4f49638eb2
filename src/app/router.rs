//! Route definitions and the navigation guard.
//!
//! Every destination in the app is a `Route` variant carrying two pieces of
//! metadata: whether it requires a live session, and whether it is a
//! guest-only page. `resolve` is the guard applied on every navigation; it
//! is pure and total, so it can be exercised exhaustively in tests.

/// Tabs of the analysis section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisTab {
    RegionSales,
    ClothingTypeSales,
    PriceRangeSales,
    RatingDistribution,
}

impl AnalysisTab {
    pub const ALL: [AnalysisTab; 4] = [
        AnalysisTab::RegionSales,
        AnalysisTab::ClothingTypeSales,
        AnalysisTab::PriceRangeSales,
        AnalysisTab::RatingDistribution,
    ];
}

/// Tabs of the forecast section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastTab {
    Sales,
    Price,
}

impl ForecastTab {
    pub const ALL: [ForecastTab; 2] = [ForecastTab::Sales, ForecastTab::Price];
}

/// Navigable destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Root; always redirects to the dashboard
    Home,
    Login,
    Register,
    Dashboard,
    Analysis(AnalysisTab),
    Forecast(ForecastTab),
    /// In-app diagnostics log
    Logs,
}

impl Route {
    /// Whether this route needs a live session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }

    /// Whether this route is only for unauthenticated visitors
    pub fn guest_only(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }

    /// Title shown in the top bar
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Sign In",
            Route::Register => "Create Account",
            Route::Dashboard => "Dashboard",
            Route::Analysis(AnalysisTab::RegionSales) => "Regional Sales",
            Route::Analysis(AnalysisTab::ClothingTypeSales) => "Clothing-Type Mix",
            Route::Analysis(AnalysisTab::PriceRangeSales) => "Price Ranges",
            Route::Analysis(AnalysisTab::RatingDistribution) => "Rating Distribution",
            Route::Forecast(ForecastTab::Sales) => "Sales Forecast",
            Route::Forecast(ForecastTab::Price) => "Price Forecast",
            Route::Logs => "Logs",
        }
    }
}

/// The navigation guard.
///
/// `Home` redirects to the dashboard; an auth-gated target without a
/// session lands on the login view; a guest page visited while logged in
/// lands on the dashboard. The result is always directly renderable.
pub fn resolve(target: Route, logged_in: bool) -> Route {
    let target = match target {
        Route::Home => Route::Dashboard,
        other => other,
    };

    if target.requires_auth() && !logged_in {
        return Route::Login;
    }
    if target.guest_only() && logged_in {
        return Route::Dashboard;
    }
    target
}
