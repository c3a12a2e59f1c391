use crate::application::interfaces::MarketService;
use crate::config::Config;
use crate::constants::{ISS_DATE_FORMAT, SEARCH_RESULT_CAP, STOCK_BOARD_PATH};
use crate::error::AppError;
use crate::presentation::candle::{Candle, HistoryResponse};
use crate::presentation::envelope::{HistoryPage, QuoteSnapshot, SecurityDirectory};
use crate::presentation::quote::{Quote, QuotesResponse};
use crate::presentation::security::{
    SearchResponse, SecuritySearchResult, TYPE_COMMON_SHARE, TYPE_PREFERRED_SHARE,
};
use crate::transport::http_client::IssHttpClient;
use crate::utils::finance::{non_zero, percent_change, price_change, resolve_price};
use async_trait::async_trait;
use chrono::{Duration, Local};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Implementation of the market service
pub struct MarketServiceImpl<T: IssHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: IssHttpClient> MarketServiceImpl<T> {
    /// Creates a new instance of the market service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    ///
    /// # Returns
    /// * Reference to the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }

    /// Fetches and reshapes the quote snapshot for a single ticker.
    ///
    /// # Returns
    /// * `Ok(Some(Quote))` - The reshaped quote
    /// * `Ok(None)` - ISS has no market data rows for the ticker
    /// * `Err(AppError)` - Transport or decode failure
    async fn fetch_quote(&self, ticker: &str) -> Result<Option<Quote>, AppError> {
        let path = format!("{STOCK_BOARD_PATH}/securities/{ticker}.json");
        let snapshot: QuoteSnapshot = self.client.get_json(&path, &[]).await?;

        let Some(market) = snapshot.marketdata.first_record() else {
            return Ok(None);
        };
        let info = snapshot.securities.first_record().unwrap_or_default();

        let price = resolve_price(market.number("LAST"), market.number("CURRENTVALUE"));
        let prev = resolve_price(market.number("PREVPRICE"), price);

        Ok(Some(Quote {
            ticker: ticker.to_string(),
            name: info
                .text("SHORTNAME")
                .map_or_else(|| ticker.to_string(), str::to_string),
            price,
            change: price_change(price, prev),
            change_percent: percent_change(price, prev),
            volume: market.number("VOLTODAY").unwrap_or(0.0),
            high: market.number("HIGH"),
            low: market.number("LOW"),
            open: market.number("OPEN"),
        }))
    }

    /// Fetches the candle window for a ticker. Sessions without a close
    /// price are excluded.
    async fn fetch_history(&self, ticker: &str, days: i64) -> Result<Vec<Candle>, AppError> {
        let till = Local::now().date_naive();
        let from = till - Duration::days(days);

        let path = format!("history/{STOCK_BOARD_PATH}/securities/{ticker}.json");
        let query = [
            ("from", from.format(ISS_DATE_FORMAT).to_string()),
            ("till", till.format(ISS_DATE_FORMAT).to_string()),
            ("start", "0".to_string()),
        ];

        let page: HistoryPage = self.client.get_json(&path, &query).await?;

        let candles: Vec<Candle> = page
            .history
            .records()
            .filter(|record| non_zero(record.number("CLOSE")).is_some())
            .map(|record| Candle {
                date: record.text("TRADEDATE").map(str::to_string),
                open: record.number("OPEN"),
                high: record.number("HIGH"),
                low: record.number("LOW"),
                close: record.number("CLOSE"),
                volume: record.number("VOLUME").unwrap_or(0.0),
            })
            .collect();

        debug!("{} candles for {} within {} days", candles.len(), ticker, days);
        Ok(candles)
    }

    /// Runs a directory search and keeps only common and preferred shares.
    async fn fetch_securities(&self, query: &str) -> Result<Vec<SecuritySearchResult>, AppError> {
        let params = [("q", query.to_string())];
        let directory: SecurityDirectory = self.client.get_json("securities.json", &params).await?;

        let results: Vec<SecuritySearchResult> = directory
            .securities
            .records()
            .filter(|record| {
                matches!(
                    record.text("type"),
                    Some(TYPE_COMMON_SHARE | TYPE_PREFERRED_SHARE)
                )
            })
            .take(SEARCH_RESULT_CAP)
            .map(|record| SecuritySearchResult {
                ticker: record.text("secid").map(str::to_string),
                name: record.text("shortname").map(str::to_string),
                full_name: record.text("name").map(str::to_string),
                security_type: record.text("type").unwrap_or_default().to_string(),
                is_traded: record.integer("is_traded") == Some(1),
            })
            .collect();

        debug!("{} securities matched '{}'", results.len(), query);
        Ok(results)
    }
}

#[async_trait]
impl<T: IssHttpClient + 'static> MarketService for MarketServiceImpl<T> {
    async fn get_current_quotes(&self, tickers: &[String]) -> Result<QuotesResponse, AppError> {
        info!("Fetching quotes for {} tickers", tickers.len());

        let mut quotes = Vec::new();
        for ticker in tickers {
            match self.fetch_quote(ticker).await {
                Ok(Some(quote)) => quotes.push(quote),
                Ok(None) => debug!("No market data for {}, skipping", ticker),
                // Per-ticker failures are dropped from the result set
                Err(e) => debug!("Quote fetch failed for {}: {}", ticker, e),
            }
        }

        debug!("{} of {} tickers resolved", quotes.len(), tickers.len());
        Ok(QuotesResponse { quotes })
    }

    async fn get_history(&self, ticker: &str, days: i64) -> HistoryResponse {
        info!("Fetching {} days of history for {}", days, ticker);

        match self.fetch_history(ticker, days).await {
            Ok(history) => HistoryResponse {
                ticker: ticker.to_string(),
                history,
                error: None,
            },
            Err(e) => {
                warn!("History fetch failed for {}: {}", ticker, e);
                HistoryResponse {
                    ticker: ticker.to_string(),
                    history: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn search_securities(&self, query: &str) -> SearchResponse {
        info!("Searching securities with query: {}", query);

        match self.fetch_securities(query).await {
            Ok(results) => SearchResponse {
                results,
                error: None,
            },
            Err(e) => {
                warn!("Security search failed for '{}': {}", query, e);
                SearchResponse {
                    results: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
