/**
 * Shared Types Module
 *
 * Request/response types for the analytics API, decoded from the backend
 * JSON as-is.
 */

use serde::{Deserialize, Serialize};

/// Authenticated user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// Display name: full name when present, otherwise the username
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Authentication response from the login/register endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    /// Short-lived bearer token
    pub access: String,
    /// Longer-lived refresh token
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRefreshResponse {
    pub access: String,
}

/// Serde adapter for DRF `DecimalField`, which serializes as a JSON string
/// (`"12345.67"`). Accepts either a string or a plain number on the way in.
pub(crate) mod decimal_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumberOrString {
            Number(f64),
            String(String),
        }

        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::String(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
        }
    }

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:.2}", value))
    }
}

/// One bar of the regional sales chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSales {
    pub region_name: String,
    #[serde(with = "decimal_string")]
    pub total_sales: f64,
    pub order_count: u64,
}

/// One slice of the clothing-type mix pie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingTypeSales {
    pub clothing_type_name: String,
    #[serde(with = "decimal_string")]
    pub total_sales: f64,
    pub order_count: u64,
    /// Share of total sales, 0-100
    pub percentage: f64,
}

/// One bar of the price-range distribution chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRangeSales {
    pub price_range_name: String,
    #[serde(with = "decimal_string")]
    pub total_sales: f64,
    pub order_count: u64,
}

/// One slice of the rating distribution pie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingDistribution {
    pub rating_category: String,
    pub rating_count: u64,
    /// Share of all ratings, 0-100
    pub percentage: f64,
}

/// One point of the 30-day sales forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesForecastPoint {
    pub date: chrono::NaiveDate,
    pub forecasted_sales: f64,
}

/// Suggested price per clothing type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceForecast {
    pub clothing_type: String,
    pub forecasted_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_defaults_missing_names() {
        let user: User =
            serde_json::from_str(r#"{"id": 7, "username": "ana", "email": "ana@example.com"}"#)
                .unwrap();
        assert_eq!(user.first_name, "");
        assert_eq!(user.last_name, "");
        assert_eq!(user.display_name(), "ana");
    }

    #[test]
    fn test_user_display_name_prefers_full_name() {
        let user = User {
            id: 1,
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
        };
        assert_eq!(user.display_name(), "Ana Ruiz");
    }

    #[test]
    fn test_auth_response_decodes() {
        let json = r#"{
            "user": {"id": 1, "username": "ana", "email": "a@b.co", "first_name": "", "last_name": ""},
            "access": "acc",
            "refresh": "ref"
        }"#;
        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(auth.access, "acc");
        assert_eq!(auth.refresh, "ref");
        assert_eq!(auth.user.username, "ana");
    }

    #[test]
    fn test_region_sales_decodes_decimal_string() {
        let json = r#"{"region_name": "North", "total_sales": "12345.67", "order_count": 42}"#;
        let row: RegionSales = serde_json::from_str(json).unwrap();
        assert_eq!(row.total_sales, 12345.67);
        assert_eq!(row.order_count, 42);
    }

    #[test]
    fn test_region_sales_decodes_plain_number() {
        let json = r#"{"region_name": "North", "total_sales": 99.5, "order_count": 1}"#;
        let row: RegionSales = serde_json::from_str(json).unwrap();
        assert_eq!(row.total_sales, 99.5);
    }

    #[test]
    fn test_clothing_type_sales_decodes() {
        let json = r#"{
            "clothing_type_name": "Dresses",
            "total_sales": "5000.00",
            "order_count": 80,
            "percentage": 41.2
        }"#;
        let row: ClothingTypeSales = serde_json::from_str(json).unwrap();
        assert_eq!(row.percentage, 41.2);
        assert_eq!(row.total_sales, 5000.0);
    }

    #[test]
    fn test_sales_forecast_point_decodes_date() {
        let json = r#"{"date": "2026-03-15", "forecasted_sales": 812.4}"#;
        let point: SalesForecastPoint = serde_json::from_str(json).unwrap();
        assert_eq!(
            point.date,
            chrono::NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_decimal_string_roundtrip() {
        let row = RegionSales {
            region_name: "East".to_string(),
            total_sales: 10.5,
            order_count: 3,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains(r#""total_sales":"10.50""#));
        let back: RegionSales = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
