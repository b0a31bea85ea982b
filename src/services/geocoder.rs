//! Geocoding service implementation
//!
//! Resolves a free-text address or postal code into a structured geo-point
//! via the configured MapQuest-compatible provider. The first candidate the
//! provider returns is authoritative; zero candidates surface as an error
//! rather than a silent null location.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::GeocoderConfig;
use crate::models::event::ResolvedLocation;
use crate::utils::errors::{ApiError, GeocoderError};

/// Provider response structure
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub locations: Vec<ProviderLocation>,
}

/// A single candidate match from the provider
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderLocation {
    pub street: Option<String>,
    #[serde(rename = "adminArea5")]
    pub city: Option<String>,
    #[serde(rename = "adminArea3")]
    pub state: Option<String>,
    #[serde(rename = "adminArea1")]
    pub country: Option<String>,
    #[serde(rename = "postalCode")]
    pub postal_code: Option<String>,
    #[serde(rename = "latLng")]
    pub lat_lng: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Geocoding service backed by an external provider
#[derive(Debug, Clone)]
pub struct GeocodingService {
    client: Client,
    config: GeocoderConfig,
}

impl GeocodingService {
    /// Create a new GeocodingService instance
    pub fn new(config: GeocoderConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("sporthub/1.0")
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build geocoder client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Resolve a free-text address or zipcode to a geo-point
    pub async fn geocode(&self, query: &str) -> Result<ResolvedLocation, GeocoderError> {
        if query.trim().is_empty() {
            return Err(GeocoderError::NoResults(query.to_string()));
        }

        let url = format!(
            "{}/geocoding/v1/address?key={}&location={}",
            self.config.api_url,
            self.config.api_key,
            urlencoding::encode(query)
        );

        debug!(query = %query, "Making geocoding request");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                GeocoderError::Timeout
            } else if e.is_connect() {
                GeocoderError::ServiceUnavailable
            } else {
                GeocoderError::RequestFailed(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, "Geocoding provider returned an error");
            return Err(GeocoderError::RequestFailed(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GeocoderError::InvalidResponse(e.to_string()))?;

        let location = first_candidate(body)
            .ok_or_else(|| GeocoderError::NoResults(query.to_string()))?;

        debug!(
            query = %query,
            latitude = location.lat_lng.lat,
            longitude = location.lat_lng.lng,
            "Geocoding resolved"
        );

        Ok(into_resolved(location))
    }
}

/// First candidate match, if the provider returned any
fn first_candidate(response: GeocodeResponse) -> Option<ProviderLocation> {
    response
        .results
        .into_iter()
        .next()
        .and_then(|result| result.locations.into_iter().next())
}

fn into_resolved(location: ProviderLocation) -> ResolvedLocation {
    let formatted_address = format_address(&location);
    ResolvedLocation {
        longitude: location.lat_lng.lng,
        latitude: location.lat_lng.lat,
        formatted_address,
        street: none_if_empty(location.street),
        city: none_if_empty(location.city),
        state: none_if_empty(location.state),
        zipcode: none_if_empty(location.postal_code),
        country: none_if_empty(location.country),
    }
}

fn format_address(location: &ProviderLocation) -> String {
    [
        location.street.as_deref(),
        location.city.as_deref(),
        location.state.as_deref(),
        location.postal_code.as_deref(),
        location.country.as_deref(),
    ]
    .iter()
    .filter_map(|part| *part)
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
