//! tickerdesk-news
//!
//! Headline search against a news provider's HTML search page. A call builds a
//! date-bounded query, issues exactly one GET (no retry, no caching), and
//! returns the headline links found on the page as absolute URLs, in the
//! provider's relevance order and capped at the requested maximum.
//!
//! The provider's markup is not under our control. When it changes, callers get
//! fewer or zero links rather than an error.
#![warn(missing_docs)]

/// Page fetch adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
/// Headline extraction from search result markup.
pub mod parse;

use std::sync::Arc;

use adapter::{PageFetcher, ReqwestFetcher};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tickerdesk_core::{
    ArticleLink, HeadlineSource, LocaleParams, NewsConfig, SearchQuery, TickerdeskError,
};
use url::Url;

/// News finder for one provider configuration.
pub struct NewsFinder {
    cfg: NewsConfig,
    origin: Url,
    fetcher: Arc<dyn PageFetcher>,
}

impl NewsFinder {
    /// Build with the default provider configuration and a fresh HTTP client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, TickerdeskError> {
        Self::builder().build()
    }

    /// Start building a finder with custom configuration.
    #[must_use]
    pub fn builder() -> NewsFinderBuilder {
        NewsFinderBuilder::default()
    }

    /// Build from a configuration and an injected fetcher.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the configured origin is not an absolute URL.
    pub fn from_fetcher(
        cfg: NewsConfig,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Result<Self, TickerdeskError> {
        let origin = parse_origin(&cfg.origin)?;
        Ok(Self {
            cfg,
            origin,
            fetcher,
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &NewsConfig {
        &self.cfg
    }

    /// Provider search URL for a query.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the configured search path cannot be joined onto the origin.
    pub fn search_url(&self, query: &SearchQuery) -> Result<Url, TickerdeskError> {
        let mut url = self.origin.join(&self.cfg.search_path).map_err(|e| {
            TickerdeskError::InvalidArg(format!(
                "search path '{}' is invalid: {e}",
                self.cfg.search_path
            ))
        })?;
        let LocaleParams {
            language,
            region,
            edition,
        } = &self.cfg.locale;
        url.query_pairs_mut()
            .append_pair("q", &query.query_text())
            .append_pair("hl", language)
            .append_pair("gl", region)
            .append_pair("ceid", edition);
        Ok(url)
    }

    /// Find headline links for `phrase` published in the last `lookback_months`.
    ///
    /// Uses today's UTC date for the cutoff.
    ///
    /// # Errors
    /// `InvalidQuery` for a blank phrase; `Network` when the fetch fails or times out.
    pub async fn find_news(
        &self,
        phrase: &str,
        lookback_months: u32,
        max_articles: usize,
    ) -> Result<Vec<ArticleLink>, TickerdeskError> {
        self.find_news_as_of(phrase, lookback_months, max_articles, Utc::now().date_naive())
            .await
    }

    /// Same as [`NewsFinder::find_news`] with the configured default maximum.
    ///
    /// # Errors
    /// See [`NewsFinder::find_news`].
    pub async fn find_news_default(
        &self,
        phrase: &str,
        lookback_months: u32,
    ) -> Result<Vec<ArticleLink>, TickerdeskError> {
        self.find_news(phrase, lookback_months, self.cfg.default_max_articles)
            .await
    }

    /// Find headline links with an explicit "today" for the cutoff computation.
    ///
    /// # Errors
    /// `InvalidQuery` for a blank phrase; `Network` when the fetch fails or times out.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "tickerdesk::news",
            skip(self),
            fields(cutoff = tracing::field::Empty),
        )
    )]
    pub async fn find_news_as_of(
        &self,
        phrase: &str,
        lookback_months: u32,
        max_articles: usize,
        today: NaiveDate,
    ) -> Result<Vec<ArticleLink>, TickerdeskError> {
        let query = SearchQuery::new(phrase, lookback_months, today)?;
        let url = self.search_url(&query)?;
        #[cfg(feature = "tracing")]
        tracing::Span::current().record("cutoff", tracing::field::display(query.cutoff_date()));

        let body = self.fetcher.get(&url).await?;
        let links = parse::extract_headline_links(&body, &self.origin, max_articles);

        #[cfg(feature = "tracing")]
        {
            if links.is_empty() {
                tracing::warn!(target: "tickerdesk::news", %url, "no headline elements matched");
            } else {
                tracing::debug!(target: "tickerdesk::news", %url, count = links.len(), "headlines extracted");
            }
        }
        Ok(links)
    }
}

#[async_trait]
impl HeadlineSource for NewsFinder {
    async fn find_news(
        &self,
        phrase: &str,
        lookback_months: u32,
        max_articles: usize,
    ) -> Result<Vec<ArticleLink>, TickerdeskError> {
        Self::find_news(self, phrase, lookback_months, max_articles).await
    }
}

fn parse_origin(raw: &str) -> Result<Url, TickerdeskError> {
    let origin = Url::parse(raw)
        .map_err(|e| TickerdeskError::InvalidArg(format!("news origin '{raw}' is invalid: {e}")))?;
    if origin.cannot_be_a_base() {
        return Err(TickerdeskError::InvalidArg(format!(
            "news origin '{raw}' cannot be used as a base URL"
        )));
    }
    Ok(origin)
}

/// Builder for [`NewsFinder`].
#[derive(Default)]
pub struct NewsFinderBuilder {
    cfg: NewsConfig,
    fetcher: Option<Arc<dyn PageFetcher>>,
}

impl NewsFinderBuilder {
    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: NewsConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Provider origin (scheme + host [+ port]).
    #[must_use]
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.cfg.origin = origin.into();
        self
    }

    /// Search page path below the origin.
    #[must_use]
    pub fn search_path(mut self, path: impl Into<String>) -> Self {
        self.cfg.search_path = path.into();
        self
    }

    /// Locale/region parameters.
    #[must_use]
    pub fn locale(mut self, locale: LocaleParams) -> Self {
        self.cfg.locale = locale;
        self
    }

    /// Request timeout for the single GET.
    #[must_use]
    pub const fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.timeout = timeout;
        self
    }

    /// Default cap used by [`NewsFinder::find_news_default`].
    #[must_use]
    pub const fn default_max_articles(mut self, max: usize) -> Self {
        self.cfg.default_max_articles = max;
        self
    }

    /// Inject a page fetcher instead of the reqwest-backed one.
    #[must_use]
    pub fn fetcher(mut self, fetcher: Arc<dyn PageFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Build the finder.
    ///
    /// # Errors
    /// Returns an error if the origin is invalid or the HTTP client cannot be built.
    pub fn build(self) -> Result<NewsFinder, TickerdeskError> {
        let fetcher = match self.fetcher {
            Some(f) => f,
            None => Arc::new(ReqwestFetcher::new(&self.cfg)?),
        };
        NewsFinder::from_fetcher(self.cfg, fetcher)
    }
}
