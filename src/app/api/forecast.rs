//! Forecast endpoints.

use reqwest::Method;

use crate::app::api::ApiClient;
use crate::app::types::{PriceForecast, SalesForecastPoint};
use crate::shared::error::ApiError;

impl ApiClient {
    /// 30-day sales forecast.
    ///
    /// The backend answers 400 with an explanatory message when it holds
    /// fewer than 30 days of history; that message comes back as
    /// `ApiError::Status` and is rendered in the view as-is.
    pub fn sales_forecast(&self) -> Result<Vec<SalesForecastPoint>, ApiError> {
        self.block_on(self.request_json(Method::GET, "/forecast/sales/", None))
    }

    /// Suggested price per clothing type
    pub fn price_forecast(&self) -> Result<Vec<PriceForecast>, ApiError> {
        self.block_on(self.request_json(Method::GET, "/forecast/price/", None))
    }
}
