use crate::Desk;
use crate::tabs::NewsSection;

impl Desk {
    /// Headline links for a free-text phrase (ticker, company name, sector...).
    ///
    /// Never fails: a rejected query or a network error leaves the section
    /// empty with the error message attached.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "tickerdesk::desk", skip(self))
    )]
    pub async fn news(&self, phrase: &str) -> NewsSection {
        let res = self
            .headlines
            .find_news(phrase, self.cfg.news_lookback_months, self.cfg.max_articles)
            .await;
        #[cfg(feature = "tracing")]
        {
            if let Err(e) = &res {
                tracing::warn!(target: "tickerdesk::desk", error = %e, "news section degraded");
            }
        }
        NewsSection::from_result(phrase, res)
    }

    /// Order-related headlines: searches `"<company> order"`.
    pub async fn orders(&self, company: &str) -> NewsSection {
        let company = company.trim();
        if company.is_empty() {
            return self.news(company).await;
        }
        self.news(&format!("{company} order")).await
    }

    /// Headlines about a sector.
    pub async fn sector_news(&self, sector: &str) -> NewsSection {
        self.news(sector).await
    }
}
