//! Thin asynchronous client for the skip inventory API.
//!
//! - One request per page load: no retry, no cancellation, no caching.
//! - Records are normalized and validated here so the domain only ever sees
//!   non-negative prices and positive sizes.

use std::future::Future;

use reqwest::{Client, Url};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::domain::SkipOption;
use crate::util::config::AppConfig;

const USER_AGENT: &str = "skip-hire-selector/1.0.0";

#[derive(Debug, Error)]
pub enum SkipApiError {
    #[error("no inventory API URL configured")]
    MissingUrl,
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected payload: {0}")]
    Decode(String),
}

/// Anything that can hand the controller a skip inventory.
pub trait InventorySource {
    fn fetch_inventory(&self) -> impl Future<Output = Result<Vec<SkipOption>, SkipApiError>> + Send;
}

#[derive(Clone)]
pub struct SkipApiClient {
    http: Client,
    endpoint: Url,
}

impl SkipApiClient {
    pub fn from_config(config: &AppConfig) -> Result<Self, SkipApiError> {
        let base = config.api_url.as_deref().ok_or(SkipApiError::MissingUrl)?;
        Self::new(base, &config.postcode, &config.area)
    }

    pub fn new(base: &str, postcode: &str, area: &str) -> Result<Self, SkipApiError> {
        let mut endpoint = Url::parse(base)?;
        endpoint
            .query_pairs_mut()
            .append_pair("postcode", postcode)
            .append_pair("area", area);
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl InventorySource for SkipApiClient {
    async fn fetch_inventory(&self) -> Result<Vec<SkipOption>, SkipApiError> {
        tracing::info!(url = %self.endpoint, "fetching skip options");
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?;
        let raw: serde_json::Value = response.json().await?;
        let skips = parse_inventory(raw)?;
        tracing::debug!(count = skips.len(), "fetched skip options");
        Ok(skips)
    }
}

/// In-memory inventory.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct StaticInventory {
    skips: Vec<SkipOption>,
}

#[cfg(test)]
impl StaticInventory {
    pub fn new(skips: Vec<SkipOption>) -> Self {
        Self { skips }
    }
}

#[cfg(test)]
impl InventorySource for StaticInventory {
    async fn fetch_inventory(&self) -> Result<Vec<SkipOption>, SkipApiError> {
        Ok(self.skips.clone())
    }
}

#[derive(Debug, Deserialize)]
struct SkipOptionDto {
    id: i64,
    size: i64,
    hire_period_days: i64,
    #[serde(deserialize_with = "lenient_number")]
    price_before_vat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    transport_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    per_tonne_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    vat: Option<f64>,
    #[serde(default)]
    postcode: Option<String>,
    #[serde(default)]
    area: Option<String>,
    #[serde(default)]
    allowed_on_road: bool,
    #[serde(default)]
    allows_heavy_waste: bool,
}

#[derive(Debug, Deserialize)]
struct InventoryWrapper {
    data: Vec<serde_json::Value>,
}

impl TryFrom<SkipOptionDto> for SkipOption {
    type Error = String;

    fn try_from(value: SkipOptionDto) -> Result<Self, Self::Error> {
        let size = u32::try_from(value.size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| format!("size {} is not positive", value.size))?;
        let hire_period_days = u32::try_from(value.hire_period_days)
            .ok()
            .filter(|days| *days > 0)
            .ok_or_else(|| format!("hire period {} is not positive", value.hire_period_days))?;
        let price_before_vat = value
            .price_before_vat
            .filter(|price| *price >= 0.0)
            .ok_or_else(|| "price_before_vat missing or negative".to_string())?;

        for (name, cost) in [
            ("transport_cost", value.transport_cost),
            ("per_tonne_cost", value.per_tonne_cost),
            ("vat", value.vat),
        ] {
            if cost.is_some_and(|c| c < 0.0) {
                return Err(format!("{name} is negative"));
            }
        }

        Ok(Self {
            id: value.id,
            size,
            hire_period_days,
            price_before_vat,
            transport_cost: value.transport_cost,
            per_tonne_cost: value.per_tonne_cost,
            vat_percent: value.vat.unwrap_or(0.0),
            postcode: value.postcode,
            area: value.area,
            allowed_on_road: value.allowed_on_road,
            allows_heavy_waste: value.allows_heavy_waste,
        })
    }
}

/// Accepts a bare array of records or a `{ "data": [...] }` wrapper.
///
/// Records that fail to decode or validate are dropped with a warning; only a
/// payload that is not a list at all is an error.
pub fn parse_inventory(value: serde_json::Value) -> Result<Vec<SkipOption>, SkipApiError> {
    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        other => serde_json::from_value::<InventoryWrapper>(other)
            .map(|wrapper| wrapper.data)
            .map_err(|err| SkipApiError::Decode(err.to_string()))?,
    };

    Ok(entries.into_iter().filter_map(parse_entry).collect())
}

fn parse_entry(entry: serde_json::Value) -> Option<SkipOption> {
    let dto = match serde_json::from_value::<SkipOptionDto>(entry) {
        Ok(dto) => dto,
        Err(err) => {
            tracing::warn!("dropping undecodable skip record: {err}");
            return None;
        }
    };
    let id = dto.id;
    match SkipOption::try_from(dto) {
        Ok(skip) => Some(skip),
        Err(reason) => {
            tracing::warn!(id, "dropping invalid skip record: {reason}");
            None
        }
    }
}

/// Numbers, numeric strings, or nothing. Anything else reads as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(number)) => number.as_f64(),
        Some(serde_json::Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|value| value.is_finite()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record() -> serde_json::Value {
        json!({
            "id": 17933,
            "size": 4,
            "hire_period_days": 14,
            "transport_cost": null,
            "per_tonne_cost": null,
            "price_before_vat": 278,
            "vat": 20,
            "postcode": "NR32",
            "area": "",
            "forbidden": false,
            "created_at": "2025-04-03T13:51:46.897146",
            "allowed_on_road": true,
            "allows_heavy_waste": true
        })
    }

    #[test]
    fn parses_wire_records() {
        let skips = parse_inventory(json!([record()])).expect("array payload");
        assert_eq!(skips.len(), 1);
        let skip = &skips[0];
        assert_eq!(skip.id, 17933);
        assert_eq!(skip.size, 4);
        assert_eq!(skip.hire_period_days, 14);
        assert_eq!(skip.price_before_vat, 278.0);
        assert_eq!(skip.vat_percent, 20.0);
        assert_eq!(skip.transport_cost, None);
        assert_eq!(skip.postcode.as_deref(), Some("NR32"));
    }

    #[test]
    fn accepts_data_wrapper() {
        let skips = parse_inventory(json!({ "data": [record(), record()] })).expect("wrapper");
        assert_eq!(skips.len(), 2);
    }

    #[test]
    fn rejects_non_list_payload() {
        assert!(matches!(
            parse_inventory(json!("nope")),
            Err(SkipApiError::Decode(_))
        ));
    }

    #[test]
    fn malformed_optional_numbers_read_as_zero() {
        let mut entry = record();
        entry["transport_cost"] = json!("not a number");
        entry["per_tonne_cost"] = json!("12.5");
        entry["vat"] = json!(null);
        let skips = parse_inventory(json!([entry])).expect("array payload");
        assert_eq!(skips[0].transport_cost, None);
        assert_eq!(skips[0].per_tonne_cost, Some(12.5));
        assert_eq!(skips[0].vat_percent, 0.0);
    }

    #[test]
    fn drops_invalid_records() {
        let mut negative = record();
        negative["price_before_vat"] = json!(-5);
        let mut zero_size = record();
        zero_size["size"] = json!(0);
        let mut negative_transport = record();
        negative_transport["transport_cost"] = json!(-1);
        let missing_flags = json!({ "id": 1 });

        let skips = parse_inventory(json!([
            negative,
            zero_size,
            negative_transport,
            missing_flags,
            record()
        ]))
        .expect("array payload");
        assert_eq!(skips.len(), 1);
    }

    #[test]
    fn missing_flags_default_to_false() {
        let mut entry = record();
        if let Some(obj) = entry.as_object_mut() {
            obj.remove("allows_heavy_waste");
        }
        let skips = parse_inventory(json!([entry])).expect("array payload");
        assert!(!skips[0].allows_heavy_waste);
    }

    #[test]
    fn client_appends_location_query() {
        let client = SkipApiClient::new("https://example.test/api/skips/by-location", "NR32", "Lowestoft")
            .expect("valid url");
        assert_eq!(
            client.endpoint().as_str(),
            "https://example.test/api/skips/by-location?postcode=NR32&area=Lowestoft"
        );
    }

    #[test]
    fn client_requires_url() {
        let config = AppConfig::default();
        assert!(matches!(
            SkipApiClient::from_config(&config),
            Err(SkipApiError::MissingUrl)
        ));
    }

    #[tokio::test]
    async fn static_inventory_returns_its_records() {
        let skips = parse_inventory(json!([record()])).expect("array payload");
        let source = StaticInventory::new(skips.clone());
        assert_eq!(source.fetch_inventory().await.expect("static"), skips);
    }
}
