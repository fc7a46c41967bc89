//! Integration tests for the therapist directory.
//!
//! These tests drive `DirectoryView` through the configured fallback chain:
//! 1. Records served by a live API
//! 2. The bundled snapshot when the API is down or its body is not a list
//! 3. The compiled-in list when nothing is reachable
//! 4. Search criteria applied to the loaded records

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use therapist_discovery::adapters::{chains, fallback_data, NoOpEventCallback};
use therapist_discovery::application::DirectoryView;
use therapist_discovery::config::SourcesConfig;
use therapist_discovery::domain::directory::{DisorderFilter, DisorderFocus, FilterCriteria};
use therapist_discovery::domain::foundation::TherapistId;
use therapist_discovery::ports::SourceKind;

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn serve(body: Value) -> SocketAddr {
    let app = Router::new().route(
        "/api/therapists",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn closed_port() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

fn config(api: SocketAddr, snapshot_dir: &str) -> SourcesConfig {
    SourcesConfig {
        api_base_url: format!("http://{}", api),
        snapshot_dir: snapshot_dir.to_string(),
        request_timeout_secs: 2,
        ..Default::default()
    }
}

fn bundled_data_dir() -> String {
    format!("{}/data", env!("CARGO_MANIFEST_DIR"))
}

async fn activate(config: &SourcesConfig) -> DirectoryView {
    let loader = chains::directory_loader(config, reqwest::Client::new(), Arc::new(NoOpEventCallback));
    let mut view = DirectoryView::new();
    assert!(view.activate(&loader).await);
    view
}

// =============================================================================
// Loading
// =============================================================================

#[tokio::test]
async fn api_records_are_served_first() {
    let api = serve(json!([
        {
            "id": 1,
            "name": "Dr. Priya Sharma",
            "specialization": "Pediatric Psychologist",
            "disorder_focus": "ADHD",
            "location": "Mumbai, 400001",
            "languages": ["English", "Hindi"],
            "fee": "₹1500 per session",
            "rating": 4.8,
            "whatsapp": "+91 9876543210"
        },
        {
            "id": 2,
            "name": "Dr. Rajesh Kumar",
            "specialization": "Speech Therapist",
            "disorder_focus": "Speech Delay",
            "location": "Delhi, 110001",
            "languages": ["English"],
            "fee": "₹1200 per session",
            "rating": 4.6,
            "whatsapp": "+91 9876543211"
        }
    ]))
    .await;

    let view = activate(&config(api, &bundled_data_dir())).await;

    assert_eq!(view.served_by().unwrap().name, "therapists-api");
    assert_eq!(view.displayed().len(), 2);
}

#[tokio::test]
async fn bundled_snapshot_is_used_when_api_is_down() {
    let api = closed_port().await;

    let view = activate(&config(api, &bundled_data_dir())).await;

    let served_by = view.served_by().unwrap();
    assert_eq!(served_by.kind, SourceKind::Snapshot);
    assert_eq!(served_by.name, "bundled/therapists.json");
    assert_eq!(view.displayed().len(), 5);
    assert_eq!(view.displayed()[0].location, "Mumbai, 400001");
    assert_eq!(view.displayed()[0].fee, "₹1500 per session");
    assert_eq!(view.displayed()[0].languages, vec!["English", "Hindi"]);
}

#[tokio::test]
async fn compiled_in_list_is_used_when_nothing_is_reachable() {
    let api = closed_port().await;
    let empty_dir = tempfile::tempdir().unwrap();

    let view = activate(&config(api, empty_dir.path().to_str().unwrap())).await;

    assert_eq!(view.served_by().unwrap().kind, SourceKind::InMemory);
    assert!(!view.displayed().is_empty());
    assert_eq!(view.displayed(), fallback_data::therapists().as_slice());
}

#[tokio::test]
async fn api_record_with_bad_rating_is_skipped() {
    let api = serve(json!([
        {
            "id": 1,
            "name": "Dr. Priya Sharma",
            "disorder_focus": "ADHD",
            "location": "Mumbai, 400001",
            "rating": 4.5,
            "whatsapp": "+91 9876543210"
        },
        {
            "id": 2,
            "name": "Dr. Rajesh Kumar",
            "disorder_focus": "Speech Delay",
            "location": "Delhi, 110001",
            "rating": 5.2,
            "whatsapp": "+91 9876543211"
        },
        {
            "id": 3,
            "name": "Dr. Kavya Reddy",
            "disorder_focus": "Autism Spectrum",
            "location": "Bangalore, 560001",
            "rating": 4.9,
            "whatsapp": "+91 9876543212"
        }
    ]))
    .await;

    let view = activate(&config(api, &bundled_data_dir())).await;

    assert_eq!(view.served_by().unwrap().name, "therapists-api");
    let ids: Vec<TherapistId> = view.displayed().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![TherapistId::new(1), TherapistId::new(3)]);
}

#[tokio::test]
async fn malformed_api_body_falls_back() {
    let api = serve(json!({ "error": "maintenance" })).await;

    let view = activate(&config(api, &bundled_data_dir())).await;

    assert_eq!(view.served_by().unwrap().kind, SourceKind::Snapshot);
}

// =============================================================================
// Searching
// =============================================================================

#[tokio::test]
async fn city_search_ignores_case() {
    let empty_dir = tempfile::tempdir().unwrap();
    let mut view = activate(&config(closed_port().await, empty_dir.path().to_str().unwrap())).await;

    view.set_criteria(
        FilterCriteria::new()
            .with_city("mumbai")
            .with_disorder(DisorderFilter::All),
    );

    assert_eq!(view.displayed().len(), 1);
    assert_eq!(view.displayed()[0].id, TherapistId::new(1));
}

#[tokio::test]
async fn combined_criteria_must_all_hold() {
    let mut view = activate(&config(closed_port().await, &bundled_data_dir())).await;

    view.set_city("bangalore");
    view.set_disorder(DisorderFilter::Only(DisorderFocus::AutismSpectrum));
    assert_eq!(view.results_summary(), "Found 1 therapist");

    view.set_pincode("999999");
    assert!(view.is_empty());
    assert_eq!(view.results_summary(), "Found 0 therapists");
}

#[tokio::test]
async fn booking_link_uses_contact_digits() {
    let view = activate(&config(closed_port().await, &bundled_data_dir())).await;

    let link = view.booking_link_for(TherapistId::new(3)).unwrap();

    assert!(link.starts_with("https://wa.me/919876543212?text=Hi%20Dr."));
    assert!(link.contains("Kavya%20Reddy"));
}
