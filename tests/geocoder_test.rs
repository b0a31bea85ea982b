//! Geocoding service integration tests against a mock provider

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sporthub::config::GeocoderConfig;
use sporthub::services::GeocodingService;
use sporthub::utils::errors::GeocoderError;

fn config_for(server: &MockServer) -> GeocoderConfig {
    GeocoderConfig {
        api_url: server.uri(),
        api_key: "test-key".to_string(),
        timeout_seconds: 5,
    }
}

fn provider_body(lat: f64, lng: f64) -> serde_json::Value {
    serde_json::json!({
        "info": {"statuscode": 0},
        "results": [{
            "providedLocation": {"location": "90210"},
            "locations": [{
                "street": "",
                "adminArea5": "Beverly Hills",
                "adminArea3": "CA",
                "adminArea1": "US",
                "postalCode": "90210",
                "latLng": {"lat": lat, "lng": lng}
            }]
        }]
    })
}

#[tokio::test]
async fn resolves_first_candidate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoding/v1/address"))
        .and(query_param("key", "test-key"))
        .and(query_param("location", "90210"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_body(34.0901, -118.4065)))
        .expect(1)
        .mount(&server)
        .await;

    let geocoder = GeocodingService::new(config_for(&server)).unwrap();
    let resolved = geocoder.geocode("90210").await.unwrap();

    assert_eq!(resolved.latitude, 34.0901);
    assert_eq!(resolved.longitude, -118.4065);
    assert_eq!(resolved.city.as_deref(), Some("Beverly Hills"));
    assert_eq!(resolved.zipcode.as_deref(), Some("90210"));
    // Empty street component is dropped entirely
    assert_eq!(resolved.street, None);
    assert_eq!(resolved.formatted_address, "Beverly Hills, CA, 90210, US");
}

#[tokio::test]
async fn zero_candidates_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoding/v1/address"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"info": {"statuscode": 0}, "results": []})),
        )
        .mount(&server)
        .await;

    let geocoder = GeocodingService::new(config_for(&server)).unwrap();
    let err = geocoder.geocode("nowhere at all").await.unwrap_err();

    assert!(matches!(err, GeocoderError::NoResults(_)));
}

#[tokio::test]
async fn provider_error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoding/v1/address"))
        .respond_with(ResponseTemplate::new(500).set_body_string("provider down"))
        .mount(&server)
        .await;

    let geocoder = GeocodingService::new(config_for(&server)).unwrap();
    let err = geocoder.geocode("90210").await.unwrap_err();

    assert!(matches!(err, GeocoderError::RequestFailed(_)));
}

#[tokio::test]
async fn malformed_body_is_an_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoding/v1/address"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let geocoder = GeocodingService::new(config_for(&server)).unwrap();
    let err = geocoder.geocode("90210").await.unwrap_err();

    assert!(matches!(err, GeocoderError::InvalidResponse(_)));
}

#[tokio::test]
async fn empty_query_short_circuits_without_a_request() {
    let server = MockServer::start().await;
    // No mock mounted; a request would 404 and surface as RequestFailed

    let geocoder = GeocodingService::new(config_for(&server)).unwrap();
    let err = geocoder.geocode("   ").await.unwrap_err();

    assert!(matches!(err, GeocoderError::NoResults(_)));
}
