use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use chrono::NaiveDate;
use tickerdesk_core::{HeadlineSource, LocaleParams, TickerdeskError};
use tickerdesk_news::{NewsFinder, adapter::PageFetcher};

#[tokio::test]
async fn injected_fetcher_sees_locale_and_cutoff() {
    let fetcher = <dyn PageFetcher>::from_fn(|url| {
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("q".into(), "IT sector after:2024-02-24".into()));
        assert_eq!(pairs[1], ("hl".into(), "en-US".into()));
        assert_eq!(pairs[2], ("gl".into(), "US".into()));
        assert_eq!(pairs[3], ("ceid".into(), "US:en".into()));
        Ok(r#"<article><h3><a href="https://example.org/a">A</a></h3></article>"#.to_string())
    });
    let finder = NewsFinder::builder()
        .locale(LocaleParams {
            language: "en-US".into(),
            region: "US".into(),
            edition: "US:en".into(),
        })
        .fetcher(fetcher)
        .build()
        .unwrap();

    let today = NaiveDate::from_ymd_opt(2024, 3, 25).unwrap();
    let links = finder
        .find_news_as_of("  IT sector ", 1, 5, today)
        .await
        .unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].as_str(), "https://example.org/a");
}

#[tokio::test]
async fn fetch_errors_propagate_without_retry() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let fetcher = <dyn PageFetcher>::from_fn(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
        Err(TickerdeskError::network("connection reset"))
    });
    let finder = NewsFinder::builder().fetcher(fetcher).build().unwrap();

    let err = finder.find_news("Infosys", 6, 5).await.unwrap_err();
    assert_eq!(err, TickerdeskError::network("connection reset"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn usable_through_headline_source_trait() {
    let fetcher = <dyn PageFetcher>::from_fn(|_| {
        Ok(r#"<article><h3><a href="./articles/x">X</a></h3></article>
              <article><h3><a href="./articles/y">Y</a></h3></article>"#
            .to_string())
    });
    let finder = NewsFinder::builder()
        .default_max_articles(1)
        .fetcher(fetcher)
        .build()
        .unwrap();

    let source: Arc<dyn HeadlineSource> = Arc::new(finder);
    let links = source.find_news("Wipro", 6, 10).await.unwrap();
    assert_eq!(
        links.iter().map(|l| l.as_str()).collect::<Vec<_>>(),
        vec![
            "https://news.google.com/articles/x",
            "https://news.google.com/articles/y"
        ]
    );
}

#[tokio::test]
async fn default_max_comes_from_config() {
    let fetcher = <dyn PageFetcher>::from_fn(|_| {
        Ok(r#"<article><h3><a href="/a">A</a></h3></article>
              <article><h3><a href="/b">B</a></h3></article>"#
            .to_string())
    });
    let finder = NewsFinder::builder()
        .default_max_articles(1)
        .fetcher(fetcher)
        .build()
        .unwrap();
    assert_eq!(finder.find_news_default("HCL", 2).await.unwrap().len(), 1);
}
