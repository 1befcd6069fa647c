use std::time::Duration;

use chrono::NaiveDate;
use httpmock::prelude::*;
use tickerdesk_core::TickerdeskError;
use tickerdesk_news::NewsFinder;

const RESULTS_PAGE: &str = r#"<!doctype html>
<html><body><c-wiz>
  <article><h3><a href="./articles/one">Infosys bags large deal</a></h3></article>
  <article><h3><a href="./articles/two">Infosys Q3 results</a></h3></article>
  <article><h3><a href="./articles/three">Infosys buyback</a></h3></article>
  <article><h3><a href="./articles/four">Infosys CEO interview</a></h3></article>
  <article><h3><a href="./articles/five">Infosys guidance</a></h3></article>
  <article><h3><a href="./articles/six">Infosys hiring</a></h3></article>
</c-wiz></body></html>"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
}

fn finder_for(server: &MockServer) -> NewsFinder {
    NewsFinder::builder()
        .origin(server.base_url())
        .timeout(Duration::from_millis(300))
        .build()
        .expect("finder")
}

#[tokio::test]
async fn fetches_once_and_returns_capped_absolute_links() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("q", "Infosys after:2024-07-04")
                .query_param("hl", "en-IN")
                .query_param("gl", "IN")
                .query_param("ceid", "IN:en");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body(RESULTS_PAGE);
        })
        .await;

    let finder = finder_for(&server);
    let links = finder
        .find_news_as_of("Infosys", 6, 5, today())
        .await
        .expect("links");

    mock.assert_calls_async(1).await;
    assert_eq!(links.len(), 5);
    assert_eq!(links[0].as_str(), server.url("/articles/one"));
    assert_eq!(links[4].as_str(), server.url("/articles/five"));
}

#[tokio::test]
async fn page_without_headlines_is_empty_not_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/search");
            then.status(200).body("<html><body><div>redesigned</div></body></html>");
        })
        .await;

    let links = finder_for(&server)
        .find_news_as_of("TCS", 3, 5, today())
        .await
        .expect("empty ok");
    assert!(links.is_empty());
}

#[tokio::test]
async fn zero_max_still_issues_single_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/search");
            then.status(200).body(RESULTS_PAGE);
        })
        .await;

    let links = finder_for(&server)
        .find_news_as_of("Infosys", 6, 0, today())
        .await
        .unwrap();
    assert!(links.is_empty());
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn server_error_maps_to_network_error() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/search");
            then.status(503);
        })
        .await;

    let err = finder_for(&server)
        .find_news_as_of("Infosys", 6, 5, today())
        .await
        .unwrap_err();
    assert!(matches!(err, TickerdeskError::Network(ref m) if m.contains("503")), "{err:?}");
    // no retry
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn slow_provider_times_out_as_network_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .delay(Duration::from_millis(1500))
                .body(RESULTS_PAGE);
        })
        .await;

    let err = finder_for(&server)
        .find_news_as_of("Infosys", 6, 5, today())
        .await
        .unwrap_err();
    assert!(matches!(err, TickerdeskError::Network(_)), "{err:?}");
}

#[tokio::test]
async fn blank_phrase_fails_before_any_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).body(RESULTS_PAGE);
        })
        .await;

    let err = finder_for(&server).find_news("", 6, 5).await.unwrap_err();
    assert!(matches!(err, TickerdeskError::InvalidQuery(_)));
    mock.assert_calls_async(0).await;
}
