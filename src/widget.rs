use crate::client::CounterClient;
use crate::config::CounterConfig;
use crate::errors::CounterError;
use crate::page::{SharedPage, VIEW_COUNT_ID};
use reqwest::Url;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Text shown when no counter endpoint is configured.
pub const UNCONFIGURED_TEXT: &str = "0";

/// What a single page-load attempt did. Purely informational: the widget has
/// already logged any failure, so callers are free to drop it.
#[derive(Debug)]
pub enum LoadOutcome {
    MissingTarget,
    Unconfigured,
    Updated(u64),
    Failed(CounterError),
}

impl LoadOutcome {
    pub fn count(&self) -> Option<u64> {
        match self {
            Self::Updated(count) => Some(*count),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewCounterWidget {
    config: CounterConfig,
    client: CounterClient,
}

impl ViewCounterWidget {
    pub fn new(config: CounterConfig, client: CounterClient) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Runs the page-load guards, then starts the one increment attempt in
    /// the background. The element already shows the fallback text when this
    /// returns, so the page can be rendered without awaiting the handle.
    pub async fn spawn(self, page: SharedPage) -> JoinHandle<LoadOutcome> {
        match self.prepare(&page).await {
            Ok(endpoint) => tokio::spawn(async move { self.apply(&endpoint, &page).await }),
            Err(outcome) => tokio::spawn(async move { outcome }),
        }
    }

    pub async fn load(&self, page: &SharedPage) -> LoadOutcome {
        match self.prepare(page).await {
            Ok(endpoint) => self.apply(&endpoint, page).await,
            Err(outcome) => outcome,
        }
    }

    async fn prepare(&self, page: &SharedPage) -> Result<Url, LoadOutcome> {
        let mut page = page.lock().await;
        let Some(element) = page.element_mut(VIEW_COUNT_ID) else {
            warn!("{VIEW_COUNT_ID} element not found in page");
            return Err(LoadOutcome::MissingTarget);
        };

        match self.config.endpoint() {
            Some(endpoint) => Ok(endpoint),
            None => {
                element.set_text(UNCONFIGURED_TEXT);
                Err(LoadOutcome::Unconfigured)
            }
        }
    }

    // Page lock is not held while the request is in flight.
    async fn apply(&self, endpoint: &Url, page: &SharedPage) -> LoadOutcome {
        match self.client.increment(endpoint).await {
            Ok(count) => {
                let mut page = page.lock().await;
                match page.element_mut(VIEW_COUNT_ID) {
                    Some(element) => element.set_text(count.to_string()),
                    None => warn!("{VIEW_COUNT_ID} element removed before update"),
                }
                info!("view count updated to {count}");
                LoadOutcome::Updated(count)
            }
            Err(err) => {
                error!("visitor counter error: {err}");
                LoadOutcome::Failed(err)
            }
        }
    }
}
