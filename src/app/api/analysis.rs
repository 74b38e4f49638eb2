//! Data analysis endpoints.

use reqwest::Method;

use crate::app::api::ApiClient;
use crate::app::types::{ClothingTypeSales, PriceRangeSales, RatingDistribution, RegionSales};
use crate::shared::error::ApiError;

impl ApiClient {
    /// Sales totals and order counts per region
    pub fn region_sales(&self) -> Result<Vec<RegionSales>, ApiError> {
        self.block_on(self.request_json(Method::GET, "/analysis/region-sales/", None))
    }

    /// Sales share per clothing type
    pub fn clothing_type_sales(&self) -> Result<Vec<ClothingTypeSales>, ApiError> {
        self.block_on(self.request_json(Method::GET, "/analysis/clothing-type-sales/", None))
    }

    /// Sales volume per price range, ordered by range lower bound
    pub fn price_range_sales(&self) -> Result<Vec<PriceRangeSales>, ApiError> {
        self.block_on(self.request_json(Method::GET, "/analysis/price-range-sales/", None))
    }

    /// Distribution of ratings over the rating categories
    pub fn rating_distribution(&self) -> Result<Vec<RatingDistribution>, ApiError> {
        self.block_on(self.request_json(Method::GET, "/analysis/rating-distribution/", None))
    }
}
