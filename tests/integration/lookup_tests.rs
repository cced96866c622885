use crate::common::{mock_domain, mount_homepage, test_config};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::time::Duration;
use traffic_gauge::estimate::{heuristic_indexed_pages, PageSignals};
use traffic_gauge::{IndexSource, Pipeline};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOMEPAGE: &str = r#"<html><body><a href="/a">a</a><a href="/b">b</a><a href="/c">c</a></body></html>"#;

async fn setup() -> (MockServer, MockServer, String) {
    let site = MockServer::start().await;
    mount_homepage(&site, HOMEPAGE).await;
    let search = MockServer::start().await;
    let domain = mock_domain(&site);
    (site, search, domain)
}

fn heuristic_for_homepage() -> u64 {
    let signals = PageSignals {
        size_kb: HOMEPAGE.len() as f64 / 1024.0,
        internal_links: 3,
    };
    heuristic_indexed_pages(signals, &traffic_gauge::EstimationParams::default())
}

#[tokio::test]
async fn test_result_count_phrase_is_used() {
    let (_site, search, domain) = setup().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("X-API-KEY", "test-key"))
        .and(body_json(json!({ "q": format!("site:{}", domain) })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "searchInformation": { "text": "About 12,345 results" },
            "organic": [{ "title": "a" }]
        })))
        .expect(1)
        .mount(&search)
        .await;

    let endpoint = format!("{}/search", search.uri());
    let config = test_config("unused.txt", Some(&endpoint));
    let pipeline = Pipeline::from_config(&config).unwrap();
    assert!(pipeline.uses_external_lookup());

    let result = pipeline
        .process_domain(&domain, &mut StdRng::seed_from_u64(1))
        .await
        .unwrap();

    assert_eq!(result.indexed_pages_est, 12_345);
    assert_eq!(result.index_source, IndexSource::External);
}

#[tokio::test]
async fn test_organic_count_fallback() {
    let (_site, search, domain) = setup().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic": [{ "title": "a" }, { "title": "b" }, { "title": "c" }, { "title": "d" }]
        })))
        .mount(&search)
        .await;

    let endpoint = format!("{}/search", search.uri());
    let config = test_config("unused.txt", Some(&endpoint));
    let pipeline = Pipeline::from_config(&config).unwrap();

    let result = pipeline
        .process_domain(&domain, &mut StdRng::seed_from_u64(2))
        .await
        .unwrap();

    assert_eq!(result.indexed_pages_est, 4);
    assert_eq!(result.index_source, IndexSource::External);
}

#[tokio::test]
async fn test_error_status_falls_back_to_heuristic() {
    let (_site, search, domain) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&search)
        .await;

    let endpoint = format!("{}/search", search.uri());
    let config = test_config("unused.txt", Some(&endpoint));
    let pipeline = Pipeline::from_config(&config).unwrap();

    let result = pipeline
        .process_domain(&domain, &mut StdRng::seed_from_u64(3))
        .await
        .unwrap();

    assert_eq!(result.indexed_pages_est, heuristic_for_homepage());
    assert_eq!(result.index_source, IndexSource::Heuristic);
}

#[tokio::test]
async fn test_malformed_payload_falls_back_to_heuristic() {
    let (_site, search, domain) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&search)
        .await;

    let endpoint = format!("{}/search", search.uri());
    let config = test_config("unused.txt", Some(&endpoint));
    let pipeline = Pipeline::from_config(&config).unwrap();

    let result = pipeline
        .process_domain(&domain, &mut StdRng::seed_from_u64(4))
        .await
        .unwrap();

    assert_eq!(result.indexed_pages_est, heuristic_for_homepage());
    assert_eq!(result.index_source, IndexSource::Heuristic);
}

#[tokio::test]
async fn test_missing_key_never_calls_api() {
    let (_site, search, domain) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "organic": [] })))
        .expect(0)
        .mount(&search)
        .await;

    let endpoint = format!("{}/search", search.uri());
    let mut config = test_config("unused.txt", Some(&endpoint));
    config.lookup.api_key = None;
    let pipeline = Pipeline::from_config(&config).unwrap();
    assert!(!pipeline.uses_external_lookup());

    let result = pipeline
        .process_domain(&domain, &mut StdRng::seed_from_u64(5))
        .await
        .unwrap();

    assert_eq!(result.indexed_pages_est, heuristic_for_homepage());
}

#[tokio::test]
async fn test_slow_lookup_falls_back_to_heuristic() {
    let (_site, search, domain) = setup().await;

    // Lookup timeout in the test config is 2s
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "searchInformation": "About 9,999 results" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&search)
        .await;

    let endpoint = format!("{}/search", search.uri());
    let config = test_config("unused.txt", Some(&endpoint));
    let pipeline = Pipeline::from_config(&config).unwrap();

    let result = pipeline
        .process_domain(&domain, &mut StdRng::seed_from_u64(6))
        .await
        .unwrap();

    assert_eq!(result.indexed_pages_est, heuristic_for_homepage());
    assert_eq!(result.index_source, IndexSource::Heuristic);
}
