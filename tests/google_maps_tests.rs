use ecofrete::services::google_maps::GoogleMapsClient;
use ecofrete::services::route_normalizer;
use ecofrete::services::routing::RoutingProvider;

mod common;

#[tokio::test]
async fn test_google_maps_directions() {
    if common::should_skip_real_api_tests() {
        println!("Skipping real API test");
        return;
    }

    let api_key = std::env::var("GOOGLE_MAPS_API_KEY")
        .expect("GOOGLE_MAPS_API_KEY must be set for integration tests");
    let client = GoogleMapsClient::new(api_key);

    let result = client
        .directions("São Paulo, SP", "Campinas, SP")
        .await;

    assert!(result.is_ok(), "Google Maps API call should succeed");

    let directions = result.unwrap();
    assert!(directions.is_ok(), "Status should be OK: {}", directions.status);
    assert!(!directions.candidates.is_empty());
    assert!(
        directions.candidates[0].distance_meters > 50_000.0,
        "São Paulo to Campinas is well over 50 km"
    );

    let routes = route_normalizer::normalize(&directions);
    assert_eq!(routes.len(), 3);
    assert!(routes.iter().all(|r| !r.encoded_path.is_empty()));
}

#[tokio::test]
async fn test_google_maps_geocode() {
    if common::should_skip_real_api_tests() {
        println!("Skipping real API test");
        return;
    }

    let api_key = std::env::var("GOOGLE_MAPS_API_KEY")
        .expect("GOOGLE_MAPS_API_KEY must be set for integration tests");
    let client = GoogleMapsClient::new(api_key);

    let coords = client
        .geocode("Praça da Sé, São Paulo, SP")
        .await
        .expect("Geocoding should succeed")
        .expect("Address should be found");

    assert!((coords.lat - -23.55).abs() < 0.1);
    assert!((coords.lng - -46.63).abs() < 0.1);
}

#[tokio::test]
async fn test_unreachable_provider_is_an_error() {
    let client = GoogleMapsClient::from_config(&ecofrete::config::GoogleMapsConfig {
        api_key: "test-key".to_string(),
        base_url: Some("http://127.0.0.1:9/maps/api".to_string()),
    });

    let result = client.directions("A", "B").await;
    assert!(matches!(
        result,
        Err(ecofrete::AppError::ProviderUnavailable(_))
    ));
}
