//! Tests against the public artworks API.
//!
//! These hit the network and are ignored by default. To point them at a
//! different deployment, set `ARTIC_API_URL` in a `.env` file in the
//! artic-lib directory.
//!
//! Then run: `cargo test -p artic-lib -- --ignored`

use std::env;
use std::sync::Arc;
use std::time::Duration;

use artic_lib::ArticClient;
use artic_lib::DEFAULT_BASE_URL;
use artic_lib::TableConfig;
use artic_lib::api::PageProvider;
use artic_lib::model::Field;
use artic_lib::table::TableView;

fn client() -> ArticClient {
    let _ = dotenvy::dotenv();
    let base_url = env::var("ARTIC_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    ArticClient::builder()
        .base_url(base_url)
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to build client")
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_fetch_display_page() {
    let page = client()
        .fetch_page(1, 12, Field::DISPLAY)
        .await
        .expect("Fetch failed");

    assert_eq!(page.len(), 12);
    assert!(page.total_count() > 12);
    assert!(page.has_next());
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_bulk_select_across_pages() {
    let view = TableView::new(Arc::new(client()), TableConfig::default());

    let outcome = view.request_bulk_select(Some(150)).await.expect("Invalid input");

    assert_eq!(outcome.selected, 150);
    assert_eq!(outcome.pages_fetched, 2);
    assert_eq!(view.selected_count(), 150);
}
