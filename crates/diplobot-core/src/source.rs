//! Board page time source.
//!
//! Fetches the webDiplomacy board page for a game and reads the turn
//! deadline out of the `span.timeremaining` element, which carries the
//! due date as epoch seconds in its `unixtime` attribute. The parse step
//! is a separate function so it can be exercised against mock HTML.

use chrono::{DateTime, Duration, TimeZone, Utc};
use scraper::{Html, Selector};

use crate::config::Config;
use crate::error::{CoreError, Result};

/// Adapter over the externally hosted board page.
pub struct TimeSource {
    client: reqwest::Client,
    board_url: String,
}

impl TimeSource {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            board_url: config.board_url.clone(),
        }
    }

    /// Fetch the time remaining until the game's next deadline.
    ///
    /// The result may be negative when the deadline has already passed.
    /// Fails with `SourceUnavailable` when the page cannot be fetched and
    /// `MalformedSource` when the deadline cannot be read from it.
    pub async fn time_left(&self, game_id: &str) -> Result<Duration> {
        tracing::trace!(game_id, "fetching board page");

        let response = self
            .client
            .get(&self.board_url)
            .query(&[("gameID", game_id)])
            .send()
            .await
            .map_err(CoreError::SourceUnavailable)?
            .error_for_status()
            .map_err(CoreError::SourceUnavailable)?;

        let html = response.text().await.map_err(CoreError::SourceUnavailable)?;
        tracing::trace!(bytes = html.len(), "board page received");

        let due = parse_deadline(&html)?;
        Ok(due - Utc::now())
    }
}

/// Extract the turn deadline from board page HTML.
///
/// Separate from the fetch so tests can feed it mock markup.
pub fn parse_deadline(html: &str) -> Result<DateTime<Utc>> {
    let document = Html::parse_document(html);

    let selector = Selector::parse("span.timeremaining")
        .map_err(|e| CoreError::MalformedSource(format!("invalid selector: {e:?}")))?;

    let span = document
        .select(&selector)
        .next()
        .ok_or_else(|| CoreError::MalformedSource("no timeremaining span on page".into()))?;

    let unixtime = span
        .value()
        .attr("unixtime")
        .ok_or_else(|| CoreError::MalformedSource("timeremaining span has no unixtime".into()))?;

    let secs: i64 = unixtime.trim().parse().map_err(|_| {
        CoreError::MalformedSource(format!("unixtime is not an integer: {unixtime:?}"))
    })?;

    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| CoreError::MalformedSource(format!("unixtime out of range: {secs}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_html(attr: &str) -> String {
        format!(
            "<html><body><div id=\"gamePanel\">\
             <span class=\"timeremaining\" {attr}>1 day</span>\
             </div></body></html>"
        )
    }

    #[test]
    fn test_parse_deadline_reads_unixtime() {
        let html = board_html("unixtime=\"1756000000\"");
        let due = parse_deadline(&html).unwrap();
        assert_eq!(due.timestamp(), 1_756_000_000);
    }

    #[test]
    fn test_missing_span_is_malformed() {
        let err = parse_deadline("<html><body>nothing here</body></html>").unwrap_err();
        assert!(matches!(err, CoreError::MalformedSource(_)));
        assert!(err.to_string().contains("timeremaining"));
    }

    #[test]
    fn test_missing_attribute_is_malformed() {
        let err = parse_deadline(&board_html("class=\"other\"")).unwrap_err();
        assert!(matches!(err, CoreError::MalformedSource(_)));
        assert!(err.to_string().contains("unixtime"));
    }

    #[test]
    fn test_junk_attribute_is_malformed() {
        let err = parse_deadline(&board_html("unixtime=\"soon\"")).unwrap_err();
        assert!(matches!(err, CoreError::MalformedSource(_)));
    }

    fn test_config(base: &str) -> Config {
        Config {
            board_url: format!("{base}/board.php"),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_time_left_fetches_and_computes_remaining() {
        let mut server = mockito::Server::new_async().await;
        let due = Utc::now().timestamp() + 2 * 86_400;
        let mock = server
            .mock("GET", "/board.php")
            .match_query(mockito::Matcher::UrlEncoded("gameID".into(), "160982".into()))
            .with_body(board_html(&format!("unixtime=\"{due}\"")))
            .create_async()
            .await;

        let source = TimeSource::new(&test_config(&server.url()));
        let left = source.time_left("160982").await.unwrap();

        mock.assert_async().await;
        assert_eq!(left.num_days(), 1); // just under two whole days
    }

    #[tokio::test]
    async fn test_http_error_is_source_unavailable() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/board.php")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let source = TimeSource::new(&test_config(&server.url()));
        let err = source.time_left("1").await.unwrap_err();
        assert!(matches!(err, CoreError::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_page_without_deadline_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/board.php")
            .match_query(mockito::Matcher::Any)
            .with_body("<html><body>game over</body></html>")
            .create_async()
            .await;

        let source = TimeSource::new(&test_config(&server.url()));
        let err = source.time_left("1").await.unwrap_err();
        assert!(matches!(err, CoreError::MalformedSource(_)));
    }
}
